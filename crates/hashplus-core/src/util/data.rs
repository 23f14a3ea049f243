//! YAML and JSON data handling utilities.

use hashplus_types::Result;
use serde_json::Value;
use std::fs;
use std::path::Path;

/// Load YAML from string.
///
/// An empty document loads as an empty object rather than `null`, so an
/// empty settings file behaves like a missing one.
pub fn load_yaml(content: &str) -> Result<Value> {
    let value: Value = serde_yaml::from_str(content)?;
    Ok(match value {
        Value::Null => Value::Object(Default::default()),
        other => other,
    })
}

/// Load YAML from file.
pub fn load_yaml_file(path: impl AsRef<Path>) -> Result<Value> {
    let content = fs::read_to_string(path)?;
    load_yaml(&content)
}

/// Deep merge two values.
/// Recursively merges objects, with overlay values taking precedence.
pub fn deep_merge(base: Value, overlay: Value) -> Value {
    match (base, overlay) {
        (Value::Object(mut base_map), Value::Object(overlay_map)) => {
            for (key, overlay_val) in overlay_map {
                let merged = match base_map.remove(&key) {
                    Some(base_val) => deep_merge(base_val, overlay_val),
                    None => overlay_val,
                };
                base_map.insert(key, merged);
            }
            Value::Object(base_map)
        }
        (_, overlay_val) => overlay_val,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deep_merge_nested() {
        let base = json!({"policy": {"length": 16, "strength": "special"}, "compatibility_mode": false});
        let overlay = json!({"policy": {"length": 24}});
        let merged = deep_merge(base, overlay);
        assert_eq!(
            merged,
            json!({"policy": {"length": 24, "strength": "special"}, "compatibility_mode": false})
        );
    }

    #[test]
    fn test_deep_merge_scalar_overlay_wins() {
        assert_eq!(deep_merge(json!({"a": 1}), json!(3)), json!(3));
    }

    #[test]
    fn test_load_yaml_empty_document() {
        assert_eq!(load_yaml("").unwrap(), json!({}));
        assert_eq!(load_yaml("policy:\n  length: 8\n").unwrap(), json!({"policy": {"length": 8}}));
    }
}
