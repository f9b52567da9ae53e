//! Pure validation.

use serde_json::Value;

use crate::spec::Spec;

use super::{is_composite, strict_eq};

/// Validates `data` against `spec`.
///
/// `data` is `None` where the position is absent. Rules, in order:
///
/// - absent data is valid only for [`Spec::Any`] and [`Spec::Absent`]
/// - [`Spec::Any`], [`Spec::Present`] and [`Spec::Bind`] accept any present value
/// - [`Spec::Absent`] rejects any present value
/// - [`Spec::Equals`] requires strict equality
/// - [`Spec::Predicate`] requires a valid [`Outcome`](crate::Outcome)
/// - a composite spec requires composite data and every child to validate
///
/// Data keys the spec does not mention are ignored.
///
/// # Example
///
/// ```rust
/// use examiner::{where_all, Spec};
/// use serde_json::json;
///
/// assert!(where_all(&Spec::pattern(&json!([1, "x"])), &json!([1, "x"])));
/// assert!(!where_all(&Spec::pattern(&json!([1, "x"])), &json!([1, "y"])));
///
/// assert!(where_all(&Spec::absent(), None));
/// assert!(!where_all(&Spec::present(), None));
/// assert!(where_all(&Spec::any(), None));
/// ```
pub fn where_all<'d>(spec: &Spec, data: impl Into<Option<&'d Value>>) -> bool {
    let data = data.into();
    let Some(value) = data else {
        return matches!(spec, Spec::Any | Spec::Absent);
    };

    match spec {
        Spec::Any | Spec::Present | Spec::Bind(_) => true,
        Spec::Absent => false,
        Spec::Equals(expected) => strict_eq(expected, value),
        Spec::Predicate(predicate) => predicate.probe(value).is_valid(),
        Spec::Map(_) | Spec::Seq(_) => {
            is_composite(value)
                && spec
                    .children()
                    .all(|(key, child)| where_all(child, key.lookup(data)))
        }
    }
}
