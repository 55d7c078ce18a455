//! Response variant types.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use std::fmt;
use std::sync::Arc;

/// Response body: a literal value, or a supplier evaluated at serve time.
///
/// Files and plain declarations produce `Literal`; a `Supplier` is only
/// constructible in code and is resolved once per served response.
#[derive(Clone)]
pub enum Body {
    Literal(Value),
    Supplier(Arc<dyn Fn() -> Value + Send + Sync>),
}

impl Body {
    /// Wrap a zero-argument closure producing the body on every serve.
    pub fn supplier<F>(f: F) -> Self
    where
        F: Fn() -> Value + Send + Sync + 'static,
    {
        Body::Supplier(Arc::new(f))
    }

    /// Produce the concrete value served for one response.
    pub fn resolve(&self) -> Value {
        match self {
            Body::Literal(value) => value.clone(),
            Body::Supplier(supplier) => supplier(),
        }
    }
}

impl Default for Body {
    fn default() -> Self {
        Body::Literal(Value::Object(serde_json::Map::new()))
    }
}

impl From<Value> for Body {
    fn from(value: Value) -> Self {
        Body::Literal(value)
    }
}

impl fmt::Debug for Body {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Body::Literal(value) => f.debug_tuple("Literal").field(value).finish(),
            Body::Supplier(_) => f.write_str("Supplier(..)"),
        }
    }
}

impl PartialEq for Body {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Body::Literal(a), Body::Literal(b)) => a == b,
            (Body::Supplier(a), Body::Supplier(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl Serialize for Body {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Body::Literal(value) => value.serialize(serializer),
            Body::Supplier(supplier) => supplier().serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for Body {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(Body::Literal(Value::deserialize(deserializer)?))
    }
}

/// Response variant for a state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Variant {
    /// Unique identifier for this variant within the state
    pub name: String,
    /// HTTP status code for the response
    pub status: u16,
    /// Response body served for matching requests
    pub body: Body,
    /// Delay in milliseconds applied to the next served response
    pub delay_ms: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    fn test_body_literal_resolve() {
        let body = Body::from(json!({"id": 1}));
        assert_eq!(body.resolve(), json!({"id": 1}));
        // Resolving twice yields the same value.
        assert_eq!(body.resolve(), json!({"id": 1}));
    }

    #[rstest]
    fn test_body_supplier_resolved_at_serve_time() {
        let body = Body::supplier(|| json!(["generated"]));
        assert_eq!(body.resolve(), json!(["generated"]));
    }

    #[rstest]
    fn test_body_default_is_empty_object() {
        assert_eq!(Body::default().resolve(), json!({}));
    }

    #[rstest]
    fn test_body_serializes_resolved_value() {
        let literal = Body::from(json!({"a": 1}));
        assert_eq!(serde_json::to_string(&literal).unwrap(), r#"{"a":1}"#);

        let supplied = Body::supplier(|| json!([1, 2]));
        assert_eq!(serde_json::to_string(&supplied).unwrap(), "[1,2]");
    }

    #[rstest]
    #[case(json!(null))]
    #[case(json!(42))]
    #[case(json!("text"))]
    #[case(json!([1, 2, 3]))]
    #[case(json!({"nested": {"deep": true}}))]
    fn test_body_deserializes_as_literal(#[case] value: Value) {
        let body: Body = serde_json::from_value(value.clone()).unwrap();
        assert_eq!(body, Body::Literal(value));
    }

    #[rstest]
    fn test_body_equality() {
        assert_eq!(Body::from(json!(1)), Body::from(json!(1)));
        assert_ne!(Body::from(json!(1)), Body::from(json!(2)));

        let supplier = Body::supplier(|| json!(1));
        assert_eq!(supplier, supplier.clone());
        // Distinct suppliers are never equal, even with identical output.
        assert_ne!(supplier, Body::supplier(|| json!(1)));
        assert_ne!(supplier, Body::from(json!(1)));
    }

    #[rstest]
    fn test_variant_serialize_deserialize() {
        let variant = Variant {
            name: "error".to_string(),
            status: 500,
            body: Body::from(json!({"error": true})),
            delay_ms: 250,
        };

        let json = serde_json::to_string(&variant).unwrap();
        let deserialized: Variant = serde_json::from_str(&json).unwrap();

        assert_eq!(deserialized, variant);
    }
}
