//! Ready-made predicate leaves.
//!
//! Each function returns a [`Predicate`] that answers [`Outcome::Valid`] or
//! [`Outcome::Invalid`]. Pair one with a name through [`crate::see`] or
//! [`named`] to extract what it accepts.
//!
//! # Example
//!
//! ```rust
//! use examiner::{examine, predicates, Spec};
//! use serde_json::json;
//!
//! let spec = Spec::map([
//!     ("id", Spec::from(predicates::is_number())),
//!     ("email", predicates::matches(r"^[^@]+@[^@]+$").unwrap().into()),
//! ]);
//!
//! assert!(examine(&spec, &json!({"id": 1, "email": "a@b"})).is_some());
//! assert!(examine(&spec, &json!({"id": 1, "email": "nope"})).is_none());
//! ```

use regex::Regex;
use serde_json::Value;

use crate::matching::{strict_eq, where_all};
use crate::spec::{Outcome, Predicate, Spec};

/// Accepts arrays.
pub fn is_array() -> Predicate {
    Predicate::new(Value::is_array)
}

/// Accepts plain objects.
pub fn is_object() -> Predicate {
    Predicate::new(crate::collect::is_plain_object)
}

/// Accepts strings.
pub fn is_string() -> Predicate {
    Predicate::new(Value::is_string)
}

/// Accepts numbers.
pub fn is_number() -> Predicate {
    Predicate::new(Value::is_number)
}

/// Accepts booleans.
pub fn is_bool() -> Predicate {
    Predicate::new(Value::is_boolean)
}

/// Accepts a present `null`.
pub fn is_null() -> Predicate {
    Predicate::new(Value::is_null)
}

/// Accepts values strictly equal to `expected`.
pub fn equals(expected: impl Into<Value>) -> Predicate {
    let expected = expected.into();
    Predicate::new(move |value| strict_eq(&expected, value))
}

/// Accepts strings matching `pattern`.
///
/// Returns an error if the pattern does not compile.
pub fn matches(pattern: &str) -> Result<Predicate, regex::Error> {
    let regex = Regex::new(pattern)?;
    Ok(Predicate::new(move |value: &Value| {
        value.as_str().is_some_and(|s| regex.is_match(s))
    }))
}

/// Accepts values that validate against `spec`.
///
/// Lets a nested validation act as one leaf, e.g. to test a subtree and bind it
/// whole with [`named`].
pub fn conforms(spec: Spec) -> Predicate {
    Predicate::new(move |value| where_all(&spec, value))
}

/// Inverts a predicate. Names bound by the inner predicate are dropped.
pub fn not(inner: Predicate) -> Predicate {
    Predicate::new(move |value| !inner.probe(value).is_valid())
}

/// Binds whatever `inner` accepts under `name`.
///
/// ```rust
/// use examiner::{examine, predicates, Spec};
/// use serde_json::json;
///
/// let spec = Spec::map([(
///     "m",
///     predicates::named(predicates::conforms(Spec::pattern(&json!({"n": true}))), "bar"),
/// )]);
///
/// let found = examine(&spec, &json!({"m": {"n": false}})).unwrap();
/// assert_eq!(found.get("bar"), Some(&json!({"n": false})));
/// ```
pub fn named(inner: Predicate, name: impl Into<String>) -> Predicate {
    let name = name.into();
    Predicate::new(move |value| match inner.probe(value) {
        Outcome::Invalid => Outcome::Invalid,
        Outcome::Valid | Outcome::Bind(_) => Outcome::Bind(name.clone()),
    })
}
