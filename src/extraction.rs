//! The result mapping produced by extracting entry points.

use indexmap::IndexMap;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::error::ExtractError;

/// Names bound during one call, in first-bound order.
///
/// A name can be bound to an absent position; [`Extraction::is_undefined`]
/// tells that apart from a name the spec never reached. Binding a name twice
/// keeps the later value at the earlier position.
///
/// # Example
///
/// ```rust
/// use examiner::{inspect, Spec};
/// use serde_json::json;
///
/// let spec = Spec::template(&json!({"a": [null, "foo"], "b": "bar"}));
/// let found = inspect(&spec, &json!({"a": [1], "b": 2}));
///
/// assert!(found.is_undefined("foo"));
/// assert_eq!(found.get("bar"), Some(&json!(2)));
/// assert_eq!(found.get_as::<u32>("bar").unwrap(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Extraction {
    bindings: IndexMap<String, Option<Value>>,
}

impl Extraction {
    /// Creates an empty extraction.
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn bind(&mut self, name: &str, value: Option<&Value>) {
        self.bindings.insert(name.to_string(), value.cloned());
    }

    /// Returns the value bound to `name`, or `None` if unbound or undefined.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.bindings.get(name).and_then(Option::as_ref)
    }

    /// Returns true if the spec bound `name`, even to an absent position.
    pub fn is_bound(&self, name: &str) -> bool {
        self.bindings.contains_key(name)
    }

    /// Returns true if `name` was bound to an absent position.
    pub fn is_undefined(&self, name: &str) -> bool {
        matches!(self.bindings.get(name), Some(None))
    }

    /// Number of bound names.
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Returns true if nothing was bound.
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Bound names in order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.bindings.keys().map(String::as_str)
    }

    /// Bindings in order; absent positions yield `None`.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&Value>)> {
        self.bindings.iter().map(|(k, v)| (k.as_str(), v.as_ref()))
    }

    /// Renders the bindings as a JSON object. Undefined bindings are omitted.
    pub fn to_json(&self) -> Value {
        let object: Map<String, Value> = self
            .bindings
            .iter()
            .filter_map(|(k, v)| v.as_ref().map(|v| (k.clone(), v.clone())))
            .collect();
        Value::Object(object)
    }

    /// Deserializes the value bound to `name`.
    pub fn get_as<T: DeserializeOwned>(&self, name: &str) -> Result<T, ExtractError> {
        let value = match self.bindings.get(name) {
            None => return Err(ExtractError::Unbound(name.to_string())),
            Some(None) => return Err(ExtractError::Undefined(name.to_string())),
            Some(Some(value)) => value.clone(),
        };
        serde_json::from_value(value).map_err(|source| ExtractError::Decode {
            name: name.to_string(),
            source,
        })
    }

    /// Deserializes all defined bindings as one object, e.g. into a struct
    /// whose fields are the bound names.
    pub fn decode<T: DeserializeOwned>(&self) -> Result<T, ExtractError> {
        serde_json::from_value(self.to_json()).map_err(ExtractError::DecodeAll)
    }

    /// Consumes the extraction, returning the underlying ordered map.
    pub fn into_inner(self) -> IndexMap<String, Option<Value>> {
        self.bindings
    }
}

impl FromIterator<(String, Option<Value>)> for Extraction {
    fn from_iter<I: IntoIterator<Item = (String, Option<Value>)>>(iter: I) -> Self {
        let mut extraction = Extraction::new();
        for (name, value) in iter {
            extraction.bind(&name, value.as_ref());
        }
        extraction
    }
}
