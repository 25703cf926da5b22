//! Field projection over a nested object.

use std::collections::BTreeMap;

use serde_json::{Map, Value};

/// Projects `fields` out of `nested`.
///
/// Every requested name appears in the output exactly once, mapped to its
/// value in `nested` or to `null` when absent. A missing section behaves as
/// an empty object. Output keys are sorted.
pub fn project<S: AsRef<str>>(
    nested: Option<&Map<String, Value>>,
    fields: &[S],
) -> BTreeMap<String, Value> {
    let mut out = BTreeMap::new();
    for field in fields {
        let key = field.as_ref();
        let value = nested
            .and_then(|n| n.get(key))
            .cloned()
            .unwrap_or(Value::Null);
        out.insert(key.to_string(), value);
    }
    out
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn nested(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(m) => m,
            _ => unreachable!(),
        }
    }

    #[test]
    fn present_and_absent_fields() {
        let n = nested(json!({ "x": 1, "y": 2 }));
        let out = project(Some(&n), &["x", "z"]);
        assert_eq!(serde_json::to_value(out).unwrap(), json!({ "x": 1, "z": null }));
    }

    #[test]
    fn empty_fields_yield_empty_map() {
        let n = nested(json!({ "x": 1 }));
        let out = project::<&str>(Some(&n), &[]);
        assert!(out.is_empty());
    }

    #[test]
    fn missing_section_maps_everything_to_null() {
        let out = project(None, &["a", "b"]);
        assert_eq!(serde_json::to_value(out).unwrap(), json!({ "a": null, "b": null }));
    }

    #[test]
    fn duplicates_collapse() {
        let n = nested(json!({ "x": "v" }));
        let out = project(Some(&n), &["x", "x", "x"]);
        assert_eq!(out.len(), 1);
        assert_eq!(out["x"], json!("v"));
    }

    #[test]
    fn stored_null_and_nested_values_pass_through() {
        let n = nested(json!({ "n": null, "obj": { "deep": [1, 2] } }));
        let out = project(Some(&n), &["n", "obj"]);
        assert_eq!(
            serde_json::to_value(out).unwrap(),
            json!({ "n": null, "obj": { "deep": [1, 2] } })
        );
    }

    #[test]
    fn output_is_order_independent() {
        let n = nested(json!({ "a": 1, "b": 2 }));
        let forward = serde_json::to_string(&project(Some(&n), &["a", "b"])).unwrap();
        let reverse = serde_json::to_string(&project(Some(&n), &["b", "a"])).unwrap();
        assert_eq!(forward, reverse);
        assert_eq!(forward, r#"{"a":1,"b":2}"#);
    }
}
