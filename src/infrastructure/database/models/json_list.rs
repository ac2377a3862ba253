use serde_json::Value;

pub fn to_json_list(items: &[String]) -> Value {
    Value::Array(items.iter().cloned().map(Value::String).collect())
}

/// A NULL or missing column reads back as an empty list.
pub fn from_json_list(value: Value) -> Result<Vec<String>, String> {
    match value {
        Value::Null => Ok(Vec::new()),
        Value::Array(items) => items
            .into_iter()
            .map(|item| match item {
                Value::String(s) => Ok(s),
                other => Err(format!("Expected a string list entry, got {}", other)),
            })
            .collect(),
        other => Err(format!("Expected a JSON list, got {}", other)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_list_keeps_stored_order() {
        let skills = vec!["Rust".to_string(), "Go".to_string(), "SQL".to_string()];
        let value = to_json_list(&skills);

        assert_eq!(value, json!(["Rust", "Go", "SQL"]));
        assert_eq!(from_json_list(value).unwrap(), skills);
    }

    #[test]
    fn test_null_reads_as_empty() {
        assert!(from_json_list(Value::Null).unwrap().is_empty());
    }

    #[test]
    fn test_non_string_entries_rejected() {
        assert!(from_json_list(json!(["React", 3])).is_err());
        assert!(from_json_list(json!({"skills": []})).is_err());
    }
}
