//! State definition file parsing and discovery (YAML/JSON).

use crate::config::error::ConfigError;
use crate::types::spec::StateSpec;
use std::path::{Path, PathBuf};

/// Parse the contents of one state definition file.
///
/// The format is chosen by the path's extension; each file holds a list of
/// state specs.
pub fn parse_states(content: &str, path: &str) -> Result<Vec<StateSpec>, ConfigError> {
    let ext = Path::new(path)
        .extension()
        .and_then(|e| e.to_str())
        .map(|s| s.to_lowercase())
        .unwrap_or_default();

    match ext.as_str() {
        "yaml" | "yml" => Ok(serde_yaml::from_str(content)?),
        "json" => Ok(serde_json::from_str(content)?),
        _ => Err(ConfigError::UnknownFileType(path.to_string())),
    }
}

/// Load state specs from every file matching `pattern`.
///
/// Files are read in sorted path order so catalog insertion order is
/// deterministic across runs.
pub fn load_states(pattern: &str) -> Result<Vec<StateSpec>, ConfigError> {
    let mut paths: Vec<PathBuf> = glob::glob(pattern)?.filter_map(Result::ok).collect();
    paths.sort();

    let mut specs = Vec::new();
    for path in paths {
        let display = path.display().to_string();
        let content = std::fs::read_to_string(&path).map_err(|source| ConfigError::Io {
            path: display.clone(),
            source,
        })?;
        specs.extend(parse_states(&content, &display)?);
    }
    Ok(specs)
}
