//! The `see` adaptor: a boolean test plus a name, as one spec leaf.

use std::fmt;
use std::sync::Arc;

use serde_json::Value;

use super::predicate::{Outcome, Predicate};

/// What a [`See`] yields when looked through directly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Sighting<'a> {
    /// The test passed; this is the name to bind.
    Named(&'a str),
    /// The test failed; this is the presence flag the adaptor was built with.
    Presence(Option<bool>),
}

/// A predicate paired with an extraction name.
///
/// Built with [`see`]. Used as a spec leaf, it binds the probed value under its
/// name when the test passes and fails the position otherwise.
#[derive(Clone)]
pub struct See {
    test: Arc<dyn Fn(&Value) -> bool + Send + Sync>,
    name: String,
    presence: Option<bool>,
}

impl See {
    /// The name bound on success.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The presence flag yielded on failure.
    pub fn presence(&self) -> Option<bool> {
        self.presence
    }

    /// Applies the test to `value`.
    pub fn look(&self, value: &Value) -> Sighting<'_> {
        if (self.test)(value) {
            Sighting::Named(&self.name)
        } else {
            Sighting::Presence(self.presence)
        }
    }
}

impl fmt::Debug for See {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("See")
            .field("name", &self.name)
            .field("presence", &self.presence)
            .finish_non_exhaustive()
    }
}

// The presence flag does not change leaf validity: a failed test always fails.
impl From<See> for Predicate {
    fn from(see: See) -> Self {
        Predicate::new(move |value| match see.look(value) {
            Sighting::Named(name) => Outcome::Bind(name.to_string()),
            Sighting::Presence(_) => Outcome::Invalid,
        })
    }
}

/// Pairs a test with a name for use as a spec leaf.
///
/// `presence` is `Some(true)` to read as "must be present", `Some(false)` for
/// "must be absent", or `None` for no presence requirement. It is only visible
/// through [`See::look`].
///
/// # Example
///
/// ```rust
/// use examiner::{examine, see, Spec};
/// use serde_json::json;
///
/// let spec = Spec::map([("a", see(|v| v.is_array(), "foo", None))]);
///
/// let found = examine(&spec, &json!({"a": [1, 2]})).unwrap();
/// assert_eq!(found.get("foo"), Some(&json!([1, 2])));
///
/// assert!(examine(&spec, &json!({"a": 5})).is_none());
/// ```
pub fn see<F>(test: F, name: impl Into<String>, presence: Option<bool>) -> See
where
    F: Fn(&Value) -> bool + Send + Sync + 'static,
{
    See {
        test: Arc::new(test),
        name: name.into(),
        presence,
    }
}
