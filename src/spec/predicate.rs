//! Predicate leaves.
//!
//! A predicate leaf probes the value at its position and answers with an
//! [`Outcome`]: reject it, accept it, or accept it and bind it to a name.

use std::fmt;
use std::sync::Arc;

use serde_json::Value;

/// Type alias for the function stored in a predicate leaf.
pub(crate) type ProbeFn = Arc<dyn Fn(&Value) -> Outcome + Send + Sync>;

/// The answer a predicate leaf gives for one value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The value fails this position.
    Invalid,
    /// The value passes; nothing is extracted.
    Valid,
    /// The value passes and is extracted under the given name.
    Bind(String),
}

impl Outcome {
    /// Returns true unless this is [`Outcome::Invalid`].
    pub fn is_valid(&self) -> bool {
        !matches!(self, Outcome::Invalid)
    }

    /// Returns the extraction name, if any.
    pub fn bound_name(&self) -> Option<&str> {
        match self {
            Outcome::Bind(name) => Some(name),
            _ => None,
        }
    }
}

impl From<bool> for Outcome {
    fn from(passed: bool) -> Self {
        if passed {
            Outcome::Valid
        } else {
            Outcome::Invalid
        }
    }
}

/// An empty name is falsy and fails the position.
impl From<String> for Outcome {
    fn from(name: String) -> Self {
        if name.is_empty() {
            Outcome::Invalid
        } else {
            Outcome::Bind(name)
        }
    }
}

impl From<&str> for Outcome {
    fn from(name: &str) -> Self {
        Outcome::from(name.to_string())
    }
}

impl<T: Into<Outcome>> From<Option<T>> for Outcome {
    fn from(answer: Option<T>) -> Self {
        answer.map_or(Outcome::Invalid, Into::into)
    }
}

/// A spec leaf backed by a caller-supplied function.
///
/// The function may return anything convertible into an [`Outcome`]: a `bool`
/// for pure validation, or a (possibly absent) name to validate and extract at
/// once.
///
/// Predicates are never invoked on absent positions; those fail before the
/// leaf is consulted. A panicking predicate unwinds through the matcher
/// untouched.
///
/// # Example
///
/// ```rust
/// use examiner::{Outcome, Predicate};
/// use serde_json::json;
///
/// let is_array = Predicate::new(|v| v.is_array());
/// assert_eq!(is_array.probe(&json!([1])), Outcome::Valid);
///
/// let named = Predicate::new(|v| v.as_i64().filter(|n| *n > 0).map(|_| "positive"));
/// assert_eq!(named.probe(&json!(3)), Outcome::Bind("positive".into()));
/// assert_eq!(named.probe(&json!(-3)), Outcome::Invalid);
/// ```
#[derive(Clone)]
pub struct Predicate {
    probe: ProbeFn,
}

impl Predicate {
    /// Wraps a function as a predicate leaf.
    pub fn new<F, O>(f: F) -> Self
    where
        F: Fn(&Value) -> O + Send + Sync + 'static,
        O: Into<Outcome>,
    {
        Self {
            probe: Arc::new(move |value: &Value| -> Outcome { f(value).into() }),
        }
    }

    /// Evaluates the predicate against a present value.
    pub fn probe(&self, value: &Value) -> Outcome {
        (self.probe)(value)
    }
}

impl fmt::Debug for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Predicate(..)")
    }
}
