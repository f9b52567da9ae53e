//! Pure extraction.

use serde_json::Value;

use crate::extraction::Extraction;
use crate::spec::Spec;

use super::is_composite;

/// Extracts every name marker in `spec` from `data`. Never fails.
///
/// Only [`Spec::Bind`] leaves extract; every other leaf kind is ignored.
///
/// - a marker whose own position is absent is bound as undefined
/// - a composite spec child descends only when the data there is composite;
///   markers beneath a child that cannot descend are not bound at all
/// - a name bound twice keeps the later value
///
/// # Example
///
/// ```rust
/// use examiner::{inspect, Spec};
/// use serde_json::json;
///
/// let spec = Spec::template(&json!({"a": [null, [{"j": "foo"}, "bar"], "baz"]}));
/// let data = json!({"a": [{"b": 1}, [{"c": 4, "d": "quux"}], 10]});
///
/// let found = inspect(&spec, &data);
/// assert!(found.is_undefined("foo"));
/// assert!(found.is_undefined("bar"));
/// assert_eq!(found.get("baz"), Some(&json!(10)));
/// ```
pub fn inspect(spec: &Spec, data: &Value) -> Extraction {
    let mut extraction = Extraction::new();
    match spec {
        Spec::Map(_) | Spec::Seq(_) => gather(spec, Some(data), &mut extraction),
        Spec::Bind(name) => extraction.bind(name, Some(data)),
        _ => {}
    }
    extraction
}

fn gather(spec: &Spec, data: Option<&Value>, extraction: &mut Extraction) {
    for (key, child) in spec.children() {
        let value = key.lookup(data);
        match child {
            Spec::Bind(name) => extraction.bind(name, value),
            Spec::Map(_) | Spec::Seq(_) => {
                if let Some(value) = value.filter(|v| is_composite(v)) {
                    gather(child, Some(value), extraction);
                }
            }
            _ => {}
        }
    }
}
