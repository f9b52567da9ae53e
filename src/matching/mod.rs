//! The matching walks.
//!
//! All three entry points share one recursion shape: a composite spec node
//! aligns each child with the data child under the same key, and leaves decide
//! validity (and possibly bind a name) from the value they land on.
//!
//! - [`where_all`]: validation only
//! - [`inspect`]: extraction only, never fails
//! - [`examine`]: validation and extraction in one pass

mod examine;
mod inspect;
mod where_all;

use serde_json::{Number, Value};

pub use examine::{diagnose, examine, examine_each, Examiner};
pub use inspect::inspect;
pub use where_all::where_all;

/// Returns true if `value` has children a composite spec can align with.
pub(crate) fn is_composite(value: &Value) -> bool {
    matches!(value, Value::Object(_) | Value::Array(_))
}

/// Strict equality without coercion between kinds.
///
/// Numbers compare by numeric value, so `1` equals `1.0`; every other kind
/// uses structural equality.
pub(crate) fn strict_eq(expected: &Value, actual: &Value) -> bool {
    match (expected, actual) {
        (Value::Number(a), Value::Number(b)) => same_number(a, b),
        _ => expected == actual,
    }
}

fn same_number(a: &Number, b: &Number) -> bool {
    if let (Some(x), Some(y)) = (a.as_i64(), b.as_i64()) {
        return x == y;
    }
    if let (Some(x), Some(y)) = (a.as_u64(), b.as_u64()) {
        return x == y;
    }
    match (a.as_f64(), b.as_f64()) {
        (Some(x), Some(y)) => x == y,
        _ => false,
    }
}
