//! Spec trees.
//!
//! A [`Spec`] describes the shape a data tree must have and which positions
//! to extract. Specs are built once, either with the constructors below or by
//! reading a JSON literal with [`Spec::pattern`] or [`Spec::template`], and can
//! then be reused across any number of calls.
//!
//! # Example
//!
//! ```rust
//! use examiner::{where_all, Spec};
//! use serde_json::json;
//!
//! let spec = Spec::pattern(&json!({"kind": "user", "id": true, "deleted": false}));
//!
//! assert!(where_all(&spec, Some(&json!({"kind": "user", "id": 7}))));
//! assert!(!where_all(&spec, Some(&json!({"kind": "user", "id": 7, "deleted": true}))));
//! ```

mod predicate;
mod see;

use indexmap::IndexMap;
use serde_json::Value;

pub use predicate::{Outcome, Predicate};
pub use see::{see, See, Sighting};

use crate::path::PathSegment;

/// A node of a spec tree.
#[derive(Debug, Clone)]
pub enum Spec {
    /// Always valid, extracts nothing. Written `null` in JSON specs.
    Any,
    /// Valid on any present value. Written `true` in JSON specs.
    Present,
    /// Valid only where the position is absent. Written `false` in JSON specs.
    Absent,
    /// Valid where the value is strictly equal to this constant.
    Equals(Value),
    /// Name marker: binds the value at this position under the given name.
    Bind(String),
    /// A caller-supplied test, optionally binding a name.
    Predicate(Predicate),
    /// Aligns children with data by key, in insertion order.
    Map(IndexMap<String, Spec>),
    /// Aligns children with data by position, in ascending order.
    Seq(Vec<Spec>),
}

impl Spec {
    /// The `null` wildcard.
    pub fn any() -> Self {
        Spec::Any
    }

    /// The `true` presence shorthand.
    pub fn present() -> Self {
        Spec::Present
    }

    /// The `false` absence shorthand.
    pub fn absent() -> Self {
        Spec::Absent
    }

    /// A strict-equality constraint.
    pub fn equals(value: impl Into<Value>) -> Self {
        Spec::Equals(value.into())
    }

    /// A name marker.
    pub fn bind(name: impl Into<String>) -> Self {
        Spec::Bind(name.into())
    }

    /// A predicate leaf from any function returning `bool` or an optional name.
    pub fn predicate<F, O>(f: F) -> Self
    where
        F: Fn(&Value) -> O + Send + Sync + 'static,
        O: Into<Outcome>,
    {
        Spec::Predicate(Predicate::new(f))
    }

    /// A mapping node.
    pub fn map<K, S, I>(entries: I) -> Self
    where
        K: Into<String>,
        S: Into<Spec>,
        I: IntoIterator<Item = (K, S)>,
    {
        Spec::Map(
            entries
                .into_iter()
                .map(|(k, s)| (k.into(), s.into()))
                .collect(),
        )
    }

    /// A sequence node.
    pub fn seq<S, I>(items: I) -> Self
    where
        S: Into<Spec>,
        I: IntoIterator<Item = S>,
    {
        Spec::Seq(items.into_iter().map(Into::into).collect())
    }

    /// Reads a JSON literal as a validation spec: strings are constants.
    pub fn pattern(value: &Value) -> Self {
        Self::from_json(value, |s| Spec::Equals(Value::String(s.to_string())))
    }

    /// Reads a JSON literal as an extraction spec: strings are name markers.
    ///
    /// ```rust
    /// use examiner::{inspect, Spec};
    /// use serde_json::json;
    ///
    /// let spec = Spec::template(&json!({"a": "foo", "b": {"c": "bar"}}));
    /// let found = inspect(&spec, &json!({"a": 1, "b": {"c": 3}}));
    ///
    /// assert_eq!(found.to_json(), json!({"foo": 1, "bar": 3}));
    /// ```
    pub fn template(value: &Value) -> Self {
        Self::from_json(value, |s| Spec::Bind(s.to_string()))
    }

    fn from_json(value: &Value, string_leaf: fn(&str) -> Spec) -> Self {
        match value {
            Value::Null => Spec::Any,
            Value::Bool(true) => Spec::Present,
            Value::Bool(false) => Spec::Absent,
            Value::Number(_) => Spec::Equals(value.clone()),
            Value::String(s) => string_leaf(s),
            Value::Array(items) => Spec::Seq(
                items
                    .iter()
                    .map(|item| Self::from_json(item, string_leaf))
                    .collect(),
            ),
            Value::Object(map) => Spec::Map(
                map.iter()
                    .map(|(k, v)| (k.clone(), Self::from_json(v, string_leaf)))
                    .collect(),
            ),
        }
    }

    /// Returns true for mapping and sequence nodes.
    pub fn is_composite(&self) -> bool {
        matches!(self, Spec::Map(_) | Spec::Seq(_))
    }

    /// Iterates the children of a composite node with the key aligning each.
    ///
    /// Leaves have no children.
    pub fn children(&self) -> Box<dyn Iterator<Item = (PathSegment, &Spec)> + '_> {
        match self {
            Spec::Map(entries) => Box::new(
                entries
                    .iter()
                    .map(|(k, s)| (PathSegment::Field(k.clone()), s)),
            ),
            Spec::Seq(items) => Box::new(
                items
                    .iter()
                    .enumerate()
                    .map(|(i, s)| (PathSegment::Index(i), s)),
            ),
            _ => Box::new(std::iter::empty()),
        }
    }

    /// Every name marker in traversal order, duplicates included.
    pub fn names(&self) -> Vec<&str> {
        let mut names = Vec::new();
        self.collect_names(&mut names);
        names
    }

    fn collect_names<'s>(&'s self, names: &mut Vec<&'s str>) {
        match self {
            Spec::Bind(name) => names.push(name),
            _ => {
                for (_, child) in self.children() {
                    child.collect_names(names);
                }
            }
        }
    }
}

impl From<Predicate> for Spec {
    fn from(predicate: Predicate) -> Self {
        Spec::Predicate(predicate)
    }
}

impl From<See> for Spec {
    fn from(see: See) -> Self {
        Spec::Predicate(see.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_pattern_reads_strings_as_constants() {
        let spec = Spec::pattern(&json!(["x", 1, null, true, false]));
        let Spec::Seq(items) = spec else {
            panic!("expected a sequence");
        };
        assert!(matches!(&items[0], Spec::Equals(v) if v == "x"));
        assert!(matches!(&items[1], Spec::Equals(v) if v == 1));
        assert!(matches!(items[2], Spec::Any));
        assert!(matches!(items[3], Spec::Present));
        assert!(matches!(items[4], Spec::Absent));
    }

    #[test]
    fn test_template_reads_strings_as_names() {
        let spec = Spec::template(&json!({"a": "foo", "b": [null, "bar"]}));
        assert_eq!(spec.names(), vec!["foo", "bar"]);
    }

    #[test]
    fn test_template_keeps_key_order() {
        let spec = Spec::template(&json!({"z": "one", "a": "two", "m": "three"}));
        let keys: Vec<_> = spec.children().map(|(k, _)| k).collect();
        assert_eq!(
            keys,
            vec![
                PathSegment::field("z"),
                PathSegment::field("a"),
                PathSegment::field("m")
            ]
        );
    }

    #[test]
    fn test_names_include_duplicates() {
        let spec = Spec::template(&json!({"a": "x", "b": "x"}));
        assert_eq!(spec.names(), vec!["x", "x"]);
    }

    #[test]
    fn test_leaf_has_no_children() {
        assert_eq!(Spec::bind("x").children().count(), 0);
        assert!(!Spec::bind("x").is_composite());
        assert!(Spec::seq(Vec::<Spec>::new()).is_composite());
    }

    #[test]
    fn test_builders() {
        let spec = Spec::map([("a", Spec::equals(1)), ("b", Spec::seq([Spec::any(), Spec::bind("y")]))]);
        assert_eq!(spec.names(), vec!["y"]);
    }
}
