//! Field access for records shown in a [`DataTable`](super::DataTable).
//!
//! The table knows nothing about what a record means. It only asks for a
//! field by name and receives the string form of its value, or `None` when
//! the field is absent or null.

use std::collections::HashMap;

use serde_json::{Map, Value};

/// A record that can be displayed and searched by field name.
pub trait Record {
    /// Returns the string-coerced value of `key`, or `None` when the field
    /// is missing or null.
    fn field(&self, key: &str) -> Option<String>;
}

impl<R: Record + ?Sized> Record for &R {
    fn field(&self, key: &str) -> Option<String> {
        (**self).field(key)
    }
}

impl Record for Map<String, Value> {
    fn field(&self, key: &str) -> Option<String> {
        self.get(key).and_then(coerce_json)
    }
}

impl Record for Value {
    fn field(&self, key: &str) -> Option<String> {
        self.as_object().and_then(|object| object.field(key))
    }
}

impl Record for HashMap<String, String> {
    fn field(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}

/// String form of a JSON value. Nested arrays and objects render as compact JSON.
pub fn coerce_json(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(n.to_string()),
        Value::Array(_) | Value::Object(_) => Some(value.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_json_object_fields_are_coerced_to_strings() {
        let record = json!({
            "name": "Rajesh",
            "age": 19,
            "approved": false,
            "tags": ["cse", "hostel"],
        });

        assert_eq!(record.field("name").as_deref(), Some("Rajesh"));
        assert_eq!(record.field("age").as_deref(), Some("19"));
        assert_eq!(record.field("approved").as_deref(), Some("false"));
        assert_eq!(record.field("tags").as_deref(), Some(r#"["cse","hostel"]"#));
    }

    #[test]
    fn test_null_and_missing_fields_are_absent() {
        let record = json!({ "email": null });

        assert_eq!(record.field("email"), None);
        assert_eq!(record.field("phone"), None);
    }

    #[test]
    fn test_non_object_values_have_no_fields() {
        assert_eq!(json!("plain").field("name"), None);
        assert_eq!(json!(42).field("name"), None);
    }

    #[test]
    fn test_string_map_and_reference_records() {
        let mut record = HashMap::new();
        record.insert("campus".to_owned(), "Guntur".to_owned());

        let by_ref = &record;
        assert_eq!(by_ref.field("campus").as_deref(), Some("Guntur"));
        assert_eq!(by_ref.field("program"), None);
    }
}
