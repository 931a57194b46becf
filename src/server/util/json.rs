use serde_json::Value;

/// Reads a JSON array of strings, treating anything else as empty.
pub fn string_list(value: Value) -> Vec<String> {
    serde_json::from_value(value).unwrap_or_default()
}

pub fn string_list_value(items: &[String]) -> Value {
    Value::from(items)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_string_arrays() {
        let value = serde_json::json!(["pool", "spa"]);
        assert_eq!(string_list(value), vec!["pool", "spa"]);
    }

    #[test]
    fn malformed_values_become_empty() {
        assert!(string_list(serde_json::json!({"a": 1})).is_empty());
        assert!(string_list(Value::Null).is_empty());
    }

    #[test]
    fn writes_string_arrays() {
        let items = vec!["a.jpg".to_string(), "b.jpg".to_string()];
        assert_eq!(string_list_value(&items), serde_json::json!(["a.jpg", "b.jpg"]));
    }
}
