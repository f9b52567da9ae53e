//! Match diagnostics.
//!
//! This module provides [`Mismatch`] for a single failing position and
//! [`Mismatches`] for accumulating every failing position of one walk.

use std::fmt::{self, Display};

use serde_json::Value;
use stillwater::prelude::*;

use crate::path::JsonPath;

/// Why a position failed to match.
#[derive(Debug, Clone, PartialEq)]
pub enum MismatchKind {
    /// The spec required a value but the position was absent.
    Missing,
    /// The spec required absence but a value was present.
    Unexpected,
    /// The value was not strictly equal to the spec's constant.
    NotEqual {
        /// The constant the spec demanded.
        expected: Value,
    },
    /// A predicate leaf rejected the value.
    Rejected,
    /// A mapping or sequence spec met a value with no children.
    NotComposite,
    /// The walk reached the examiner's depth limit.
    DepthExceeded {
        /// The configured limit.
        max_depth: usize,
    },
}

impl MismatchKind {
    /// Machine-readable code for programmatic handling.
    pub fn code(&self) -> &'static str {
        match self {
            MismatchKind::Missing => "missing",
            MismatchKind::Unexpected => "unexpected",
            MismatchKind::NotEqual { .. } => "not_equal",
            MismatchKind::Rejected => "rejected",
            MismatchKind::NotComposite => "not_composite",
            MismatchKind::DepthExceeded { .. } => "depth_exceeded",
        }
    }
}

/// A single failing position with its context.
///
/// - **path**: where in the data tree the failure occurred
/// - **kind**: which rule failed
/// - **got**: the value found there, if any
///
/// # Example
///
/// ```rust
/// use examiner::{JsonPath, Mismatch, MismatchKind};
/// use serde_json::json;
///
/// let mismatch = Mismatch::new(JsonPath::root().push_field("a"), MismatchKind::Rejected)
///     .with_got(json!(5));
///
/// assert_eq!(mismatch.code(), "rejected");
/// assert_eq!(mismatch.to_string(), "a: value rejected by predicate (got: 5)");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Mismatch {
    /// The path to the failing position.
    pub path: JsonPath,
    /// Which rule failed.
    pub kind: MismatchKind,
    /// The value found at the position, when one was present.
    pub got: Option<Value>,
}

impl Mismatch {
    /// Creates a new mismatch at `path`.
    pub fn new(path: JsonPath, kind: MismatchKind) -> Self {
        Self {
            path,
            kind,
            got: None,
        }
    }

    /// Sets the "got" field and returns self for chaining.
    pub fn with_got(mut self, got: Value) -> Self {
        self.got = Some(got);
        self
    }

    /// Machine-readable code of the failing rule.
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }
}

impl Display for Mismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let path_str = if self.path.is_root() {
            "(root)".to_string()
        } else {
            self.path.to_string()
        };

        write!(f, "{}: ", path_str)?;
        match &self.kind {
            MismatchKind::Missing => write!(f, "value is missing")?,
            MismatchKind::Unexpected => write!(f, "value must be absent")?,
            MismatchKind::NotEqual { expected } => {
                write!(f, "value differs (expected: {})", expected)?
            }
            MismatchKind::Rejected => write!(f, "value rejected by predicate")?,
            MismatchKind::NotComposite => write!(f, "value is not an object or array")?,
            MismatchKind::DepthExceeded { max_depth } => {
                write!(f, "nesting exceeds max depth {}", max_depth)?
            }
        }

        if let Some(ref got) = self.got {
            write!(f, " (got: {})", got)?;
        }

        Ok(())
    }
}

impl std::error::Error for Mismatch {}

const _: () = {
    const fn assert_send<T: Send>() {}
    const fn assert_sync<T: Sync>() {}
    assert_send::<Mismatch>();
    assert_sync::<Mismatch>();
};

/// A non-empty collection of mismatches.
///
/// Wraps a `NonEmptyVec<Mismatch>` so a failed `Validation` always carries at
/// least one reason.
///
/// ```rust
/// use examiner::{JsonPath, Mismatch, MismatchKind, Mismatches};
/// use stillwater::prelude::*;
///
/// let a = Mismatches::single(Mismatch::new(JsonPath::root().push_field("a"), MismatchKind::Missing));
/// let b = Mismatches::single(Mismatch::new(JsonPath::root().push_field("b"), MismatchKind::Rejected));
///
/// assert_eq!(a.combine(b).len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Mismatches(NonEmptyVec<Mismatch>);

impl Mismatches {
    /// Creates a collection holding one mismatch.
    pub fn single(mismatch: Mismatch) -> Self {
        Self(NonEmptyVec::singleton(mismatch))
    }

    /// Creates a collection from a vec, or `None` if the vec is empty.
    pub fn from_vec(mismatches: Vec<Mismatch>) -> Option<Self> {
        let mut rest = mismatches.into_iter();
        let head = Self::single(rest.next()?);
        Some(rest.fold(head, |acc, m| acc.combine(Self::single(m))))
    }

    /// Returns the number of mismatches.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false; the collection is never empty.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Returns an iterator over the mismatches in walk order.
    pub fn iter(&self) -> impl Iterator<Item = &Mismatch> {
        self.0.iter()
    }

    /// Returns the first mismatch met during the walk.
    pub fn first(&self) -> &Mismatch {
        self.0.head()
    }

    /// Returns all mismatches at `path`.
    pub fn at_path(&self, path: &JsonPath) -> Vec<&Mismatch> {
        self.0.iter().filter(|m| &m.path == path).collect()
    }

    /// Returns all mismatches with the given code.
    pub fn with_code(&self, code: &str) -> Vec<&Mismatch> {
        self.0.iter().filter(|m| m.code() == code).collect()
    }

    /// Converts this collection into a `Vec<Mismatch>`.
    pub fn into_vec(self) -> Vec<Mismatch> {
        self.0.into_vec()
    }
}

impl Semigroup for Mismatches {
    fn combine(self, other: Self) -> Self {
        Mismatches(self.0.combine(other.0))
    }
}

impl Display for Mismatches {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Match failed at {} position(s):", self.len())?;
        for (i, mismatch) in self.iter().enumerate() {
            writeln!(f, "  {}. {}", i + 1, mismatch)?;
        }
        Ok(())
    }
}

impl std::error::Error for Mismatches {}

impl IntoIterator for Mismatches {
    type Item = Mismatch;
    type IntoIter = std::vec::IntoIter<Mismatch>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_vec().into_iter()
    }
}
