//! Small helpers for assembling specs and results around the matchers.

use std::fmt::Display;

use serde_json::{Map, Value};

use crate::matching::strict_eq;

/// Returns true if `value` is a keyed mapping, as opposed to an array or a primitive.
///
/// ```rust
/// use examiner::is_plain_object;
/// use serde_json::json;
///
/// assert!(is_plain_object(&json!({"x": 0})));
/// assert!(!is_plain_object(&json!([1, 2, 3])));
/// assert!(!is_plain_object(&json!(null)));
/// ```
pub fn is_plain_object(value: &Value) -> bool {
    value.is_object()
}

/// Collects the elements of several arrays, keeping the first occurrence of each.
///
/// Elements compare with the same strict equality the matchers use.
///
/// ```rust
/// use examiner::uniques_for;
/// use serde_json::json;
///
/// let merged = uniques_for([&[json!(1), json!(2)][..], &[json!(2), json!(3), json!(1)][..]]);
/// assert_eq!(merged, vec![json!(1), json!(2), json!(3)]);
/// ```
pub fn uniques_for<'a, I>(arrays: I) -> Vec<Value>
where
    I: IntoIterator<Item = &'a [Value]>,
{
    let mut uniques: Vec<Value> = Vec::new();
    for item in arrays.into_iter().flatten() {
        if !uniques.iter().any(|seen| strict_eq(seen, item)) {
            uniques.push(item.clone());
        }
    }
    uniques
}

/// Builds a JSON object from key/value pairs. Keys are stringified and a
/// repeated key keeps its last value.
///
/// ```rust
/// use examiner::entries_as_object;
/// use serde_json::json;
///
/// let object = entries_as_object([("a", json!(1)), ("b", json!(2)), ("a", json!(3))]);
/// assert_eq!(object, json!({"a": 3, "b": 2}));
/// ```
pub fn entries_as_object<K, I>(entries: I) -> Value
where
    K: Display,
    I: IntoIterator<Item = (K, Value)>,
{
    let object: Map<String, Value> = entries
        .into_iter()
        .map(|(k, v)| (k.to_string(), v))
        .collect();
    Value::Object(object)
}
