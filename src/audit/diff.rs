//! Change summaries for audit entries
//!
//! Compares the before/after JSON snapshots of an entity and describes the
//! top-level fields that changed.

use serde_json::Value;

/// Fields every model touches on each write; never worth reporting
const IGNORED_FIELDS: &[&str] = &["updated_at"];

/// Summarise the changes between two snapshots, `None` if nothing changed
pub fn generate_diff(before: &Value, after: &Value) -> Option<String> {
    match (before, after) {
        (Value::Object(before_obj), Value::Object(after_obj)) => {
            let mut changes = Vec::new();

            for (key, before_val) in before_obj {
                if IGNORED_FIELDS.contains(&key.as_str()) {
                    continue;
                }
                match after_obj.get(key) {
                    Some(after_val) if before_val != after_val => changes.push(format!(
                        "{}: {} -> {}",
                        key,
                        format_value(before_val),
                        format_value(after_val)
                    )),
                    Some(_) => {}
                    None => changes.push(format!("{}: {} -> (removed)", key, format_value(before_val))),
                }
            }

            for (key, after_val) in after_obj {
                if !before_obj.contains_key(key) && !IGNORED_FIELDS.contains(&key.as_str()) {
                    changes.push(format!("{}: (added) -> {}", key, format_value(after_val)));
                }
            }

            if changes.is_empty() {
                None
            } else {
                Some(changes.join(", "))
            }
        }
        _ if before != after => Some(format!(
            "{} -> {}",
            format_value(before),
            format_value(after)
        )),
        _ => None,
    }
}

fn format_value(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => {
            if s.chars().count() > 50 {
                format!("\"{}...\"", s.chars().take(47).collect::<String>())
            } else {
                format!("\"{}\"", s)
            }
        }
        Value::Array(arr) => format!("[{} items]", arr.len()),
        Value::Object(obj) => format!("{{{} fields}}", obj.len()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_simple_field_change() {
        let before = json!({"first_name": "Emma", "rsvp_status": "pending"});
        let after = json!({"first_name": "Emma", "rsvp_status": "confirmed"});

        let diff = generate_diff(&before, &after).unwrap();
        assert_eq!(diff, "rsvp_status: \"pending\" -> \"confirmed\"");
    }

    #[test]
    fn test_updated_at_is_ignored() {
        let before = json!({"name": "Venue", "updated_at": "2026-01-01T00:00:00Z"});
        let after = json!({"name": "Venue", "updated_at": "2026-02-01T00:00:00Z"});
        assert!(generate_diff(&before, &after).is_none());
    }

    #[test]
    fn test_added_and_removed() {
        let before = json!({"name": "Test", "notes": "call back"});
        let after = json!({"name": "Test", "rating": 5});

        let diff = generate_diff(&before, &after).unwrap();
        assert!(diff.contains("notes: \"call back\" -> (removed)"));
        assert!(diff.contains("rating: (added) -> 5"));
    }

    #[test]
    fn test_multiple_changes() {
        let before = json!({"allocated": 1200000, "spent": 0, "name": "Venue"});
        let after = json!({"allocated": 1300000, "spent": 850000, "name": "Venue"});

        let diff = generate_diff(&before, &after).unwrap();
        assert!(diff.contains("allocated: 1200000 -> 1300000"));
        assert!(diff.contains("spent: 0 -> 850000"));
        assert!(!diff.contains("name"));
    }

    #[test]
    fn test_scalar_values() {
        assert_eq!(
            generate_diff(&json!(null), &json!(true)).as_deref(),
            Some("null -> true")
        );
        assert!(generate_diff(&json!(1), &json!(1)).is_none());
    }

    #[test]
    fn test_long_string_truncation_is_char_safe() {
        let long = "é".repeat(80);
        let diff = generate_diff(&json!({"notes": long}), &json!({"notes": "short"})).unwrap();
        assert!(diff.contains("...\""));
    }

    #[test]
    fn test_format_value() {
        assert_eq!(format_value(&json!([1, 2, 3])), "[3 items]");
        assert_eq!(format_value(&json!({"a": 1, "b": 2})), "{2 fields}");
    }
}
