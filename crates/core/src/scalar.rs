//! Payload value types for Beacon
//!
//! This module defines:
//! - Scalar: Closed set of primitive payload value kinds
//! - Payload: String-keyed mapping of scalars
//!
//! ## Canonical Scalar Model
//!
//! The Scalar enum has exactly 5 variants: Null, Bool, Int, Float, Str.
//! Payloads are deliberately schema-less: categories legitimately carry
//! different shapes, so the shape per category is documented in test
//! fixtures rather than enforced at compile time.
//!
//! ### Type Rules
//!
//! - No implicit type coercions
//! - `Int(1) != Float(1.0)` - different kinds are NEVER equal
//! - Float uses IEEE-754 equality: `NaN != NaN`, `-0.0 == 0.0`
//! - On the wire, scalars serialize untagged as plain JSON values

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Canonical payload value type
///
/// Different kinds are NEVER equal, even if they contain the same "value":
/// `Int(1) != Float(1.0)`.
///
/// Float equality follows IEEE-754 semantics: `NaN != NaN`, `-0.0 == 0.0`.
///
/// Variant order matters for deserialization: `Int` is tried before `Float`
/// so that `1` round-trips as an integer.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    /// Null value
    Null,
    /// Boolean value
    Bool(bool),
    /// 64-bit signed integer
    Int(i64),
    /// 64-bit floating point (IEEE-754)
    Float(f64),
    /// UTF-8 string
    Str(String),
}

// Custom PartialEq implementation for IEEE-754 float semantics
impl PartialEq for Scalar {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Scalar::Null, Scalar::Null) => true,
            (Scalar::Bool(a), Scalar::Bool(b)) => a == b,
            (Scalar::Int(a), Scalar::Int(b)) => a == b,
            // IEEE-754: NaN != NaN, -0.0 == 0.0
            (Scalar::Float(a), Scalar::Float(b)) => a == b,
            (Scalar::Str(a), Scalar::Str(b)) => a == b,
            // Different kinds are NEVER equal
            _ => false,
        }
    }
}

impl Scalar {
    /// Get the kind name as a string
    pub fn kind_name(&self) -> &'static str {
        match self {
            Scalar::Null => "Null",
            Scalar::Bool(_) => "Bool",
            Scalar::Int(_) => "Int",
            Scalar::Float(_) => "Float",
            Scalar::Str(_) => "Str",
        }
    }

    /// Check if this is a null value
    pub fn is_null(&self) -> bool {
        matches!(self, Scalar::Null)
    }

    /// Get as bool if this is a Bool value
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Scalar::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Get as i64 if this is an Int value
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Scalar::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Get as f64 if this is a Float value
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Scalar::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Get as &str if this is a Str value
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Scalar::Str(s) => Some(s),
            _ => None,
        }
    }
}

// ============================================================================
// From implementations for ergonomic payload construction
// ============================================================================

impl From<&str> for Scalar {
    fn from(s: &str) -> Self {
        Scalar::Str(s.to_string())
    }
}

impl From<String> for Scalar {
    fn from(s: String) -> Self {
        Scalar::Str(s)
    }
}

impl From<bool> for Scalar {
    fn from(b: bool) -> Self {
        Scalar::Bool(b)
    }
}

impl From<i64> for Scalar {
    fn from(i: i64) -> Self {
        Scalar::Int(i)
    }
}

impl From<i32> for Scalar {
    fn from(i: i32) -> Self {
        Scalar::Int(i as i64)
    }
}

impl From<f64> for Scalar {
    fn from(f: f64) -> Self {
        Scalar::Float(f)
    }
}

impl From<()> for Scalar {
    fn from(_: ()) -> Self {
        Scalar::Null
    }
}

/// String-keyed mapping of scalar values
///
/// The payload shape varies by event category; no validation is performed
/// on shape or size. Callers are responsible for content.
///
/// # Example
///
/// ```
/// use beacon_core::Payload;
///
/// let payload = Payload::new()
///     .with("action", "page_view")
///     .with("time_on_previous_page", 1200i64);
/// assert_eq!(payload.get("action").and_then(|s| s.as_str()), Some("page_view"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Payload(HashMap<String, Scalar>);

impl Payload {
    /// Create an empty payload
    pub fn new() -> Self {
        Self(HashMap::new())
    }

    /// Builder-style insert
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Scalar>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    /// Insert a field, replacing any previous value under the same key
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Scalar>) {
        self.0.insert(key.into(), value.into());
    }

    /// Get a field by key
    pub fn get(&self, key: &str) -> Option<&Scalar> {
        self.0.get(key)
    }

    /// Check whether a field is present
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Number of fields
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if the payload has no fields
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over fields in arbitrary order
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Scalar)> {
        self.0.iter()
    }
}

impl From<HashMap<String, Scalar>> for Payload {
    fn from(map: HashMap<String, Scalar>) -> Self {
        Self(map)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ====================================================================
    // Scalar variants and accessors
    // ====================================================================

    #[test]
    fn test_scalar_null() {
        let value = Scalar::Null;
        assert!(value.is_null());
        assert_eq!(value.kind_name(), "Null");
    }

    #[test]
    fn test_scalar_bool() {
        let value = Scalar::Bool(true);
        assert_eq!(value.as_bool(), Some(true));
        assert_eq!(value.kind_name(), "Bool");
    }

    #[test]
    fn test_scalar_int() {
        let value = Scalar::Int(42);
        assert_eq!(value.as_int(), Some(42));

        let negative = Scalar::Int(-100);
        assert_eq!(negative.as_int(), Some(-100));
    }

    #[test]
    fn test_scalar_float() {
        let value = Scalar::Float(3.14);
        if let Some(f) = value.as_float() {
            assert!((f - 3.14).abs() < f64::EPSILON);
        }
    }

    #[test]
    fn test_scalar_str() {
        let value = Scalar::Str("hello world".to_string());
        assert_eq!(value.as_str(), Some("hello world"));
    }

    #[test]
    fn test_as_wrong_kind_returns_none() {
        let v = Scalar::Int(42);
        assert!(v.as_bool().is_none());
        assert!(v.as_float().is_none());
        assert!(v.as_str().is_none());

        let v = Scalar::Str("hello".to_string());
        assert!(v.as_int().is_none());
        assert!(v.as_bool().is_none());
    }

    // ====================================================================
    // Equality rules
    // ====================================================================

    #[test]
    fn test_int_not_equal_float() {
        assert_ne!(Scalar::Int(1), Scalar::Float(1.0));
    }

    #[test]
    fn test_nan_not_equal_nan() {
        assert_ne!(Scalar::Float(f64::NAN), Scalar::Float(f64::NAN));
    }

    #[test]
    fn test_negative_zero_equals_zero() {
        assert_eq!(Scalar::Float(-0.0), Scalar::Float(0.0));
    }

    #[test]
    fn test_null_not_equal_to_other_kinds() {
        assert_ne!(Scalar::Null, Scalar::Bool(false));
        assert_ne!(Scalar::Null, Scalar::Int(0));
        assert_ne!(Scalar::Null, Scalar::Str(String::new()));
    }

    // ====================================================================
    // From conversions
    // ====================================================================

    #[test]
    fn test_from_i64() {
        let v: Scalar = 42i64.into();
        assert_eq!(v, Scalar::Int(42));
    }

    #[test]
    fn test_from_i32() {
        let v: Scalar = 42i32.into();
        assert_eq!(v, Scalar::Int(42));
    }

    #[test]
    fn test_from_f64() {
        let v: Scalar = 3.14f64.into();
        assert!(matches!(v, Scalar::Float(f) if (f - 3.14).abs() < f64::EPSILON));
    }

    #[test]
    fn test_from_bool() {
        let v: Scalar = true.into();
        assert_eq!(v, Scalar::Bool(true));
    }

    #[test]
    fn test_from_str_ref() {
        let v: Scalar = "hello".into();
        assert_eq!(v, Scalar::Str("hello".to_string()));
    }

    #[test]
    fn test_from_unit() {
        let v: Scalar = ().into();
        assert_eq!(v, Scalar::Null);
    }

    // ====================================================================
    // Untagged JSON wire format
    // ====================================================================

    #[test]
    fn test_scalar_serializes_as_plain_json() {
        assert_eq!(serde_json::to_string(&Scalar::Null).unwrap(), "null");
        assert_eq!(serde_json::to_string(&Scalar::Bool(true)).unwrap(), "true");
        assert_eq!(serde_json::to_string(&Scalar::Int(7)).unwrap(), "7");
        assert_eq!(
            serde_json::to_string(&Scalar::Str("x".into())).unwrap(),
            "\"x\""
        );
    }

    #[test]
    fn test_integer_json_round_trips_as_int() {
        let v: Scalar = serde_json::from_str("42").unwrap();
        assert_eq!(v, Scalar::Int(42));
    }

    #[test]
    fn test_fractional_json_round_trips_as_float() {
        let v: Scalar = serde_json::from_str("2.5").unwrap();
        assert_eq!(v, Scalar::Float(2.5));
    }

    #[test]
    fn test_scalar_serialization_all_variants() {
        let test_values = vec![
            Scalar::Null,
            Scalar::Bool(true),
            Scalar::Int(42),
            Scalar::Float(3.5),
            Scalar::Str("test".to_string()),
        ];

        for value in test_values {
            let serialized = serde_json::to_string(&value).unwrap();
            let deserialized: Scalar = serde_json::from_str(&serialized).unwrap();
            assert_eq!(value, deserialized);
        }
    }

    // ====================================================================
    // Payload
    // ====================================================================

    #[test]
    fn test_payload_builder() {
        let payload = Payload::new()
            .with("action", "page_view")
            .with("elapsed_ms", 1200i64)
            .with("hidden", false);

        assert_eq!(payload.len(), 3);
        assert_eq!(
            payload.get("action").and_then(Scalar::as_str),
            Some("page_view")
        );
        assert_eq!(
            payload.get("elapsed_ms").and_then(Scalar::as_int),
            Some(1200)
        );
        assert_eq!(payload.get("hidden").and_then(Scalar::as_bool), Some(false));
    }

    #[test]
    fn test_payload_insert_replaces() {
        let mut payload = Payload::new();
        payload.insert("page", "about");
        payload.insert("page", "resume");
        assert_eq!(payload.len(), 1);
        assert_eq!(payload.get("page").and_then(Scalar::as_str), Some("resume"));
    }

    #[test]
    fn test_empty_payload() {
        let payload = Payload::new();
        assert!(payload.is_empty());
        assert!(payload.get("missing").is_none());
        assert!(!payload.contains_key("missing"));
    }

    #[test]
    fn test_payload_serializes_as_json_object() {
        let payload = Payload::new().with("count", 3i64);
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json, serde_json::json!({ "count": 3 }));
    }

    #[test]
    fn test_payload_round_trip() {
        let payload = Payload::new()
            .with("session_id", "session_17_abc")
            .with("total_time_spent", 8900i64)
            .with("ratio", 0.25)
            .with("referrer", ());

        let serialized = serde_json::to_string(&payload).unwrap();
        let restored: Payload = serde_json::from_str(&serialized).unwrap();
        assert_eq!(payload, restored);
    }

    #[test]
    fn test_payload_from_map() {
        let mut map = HashMap::new();
        map.insert("key1".to_string(), Scalar::Int(42));
        map.insert("key2".to_string(), Scalar::Str("value".to_string()));

        let payload: Payload = map.into();
        assert_eq!(payload.len(), 2);
        assert_eq!(payload.get("key1"), Some(&Scalar::Int(42)));
    }
}
