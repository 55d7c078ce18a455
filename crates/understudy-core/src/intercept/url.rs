//! URL pattern matching for interception bindings.

use regex::Regex;

/// Compiled URL pattern.
///
/// `{param}` placeholders match a single path segment; every other character
/// matches literally. Query strings and trailing slashes are ignored on both
/// sides of the match.
#[derive(Debug, Clone)]
pub struct UrlPattern {
    raw: String,
    regex: Regex,
}

impl UrlPattern {
    pub fn compile(pattern: &str) -> Self {
        let regex = pattern_to_regex(&normalize_url(pattern));
        Self {
            raw: pattern.to_owned(),
            regex,
        }
    }

    pub fn matches(&self, url: &str) -> bool {
        self.regex.is_match(&normalize_url(url))
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }
}

fn normalize_url(url: &str) -> String {
    let without_query = url.split('?').next().unwrap_or("");
    let trimmed = without_query.trim_end_matches('/');
    if trimmed.is_empty() {
        "/".into()
    } else {
        trimmed.into()
    }
}

fn pattern_to_regex(pattern: &str) -> Regex {
    let mut regex_str = String::new();
    let mut chars = pattern.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '{' {
            // Consume through the closing brace; the placeholder name itself
            // is irrelevant to matching.
            chars.by_ref().take_while(|&c| c != '}').for_each(drop);
            regex_str.push_str("[^/]+");
        } else if matches!(
            c,
            '.' | '*' | '+' | '?' | '^' | '$' | '(' | ')' | '[' | ']' | '|' | '\\'
        ) {
            regex_str.push('\\');
            regex_str.push(c);
        } else {
            regex_str.push(c);
        }
    }

    Regex::new(&format!("^{regex_str}/?$")).expect("valid regex")
}
