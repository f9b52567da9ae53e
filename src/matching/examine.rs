//! Validation and extraction in one pass.
//!
//! This module provides [`Examiner`], which walks a spec and a data tree
//! together, binding names as it goes and recording every position that fails.
//! [`examine`] surfaces the extraction only when nothing failed; [`diagnose`]
//! surfaces the failures themselves.

use rayon::prelude::*;
use serde_json::Value;
use stillwater::Validation;

use crate::error::{Mismatch, MismatchKind, Mismatches};
use crate::extraction::Extraction;
use crate::path::JsonPath;
use crate::spec::{Outcome, Spec};
use crate::MatchResult;

use super::{is_composite, strict_eq};

/// Configured entry point for combined validation and extraction.
///
/// The free functions [`examine`], [`diagnose`] and [`examine_each`] use
/// `Examiner::default()`, which descends as deep as the spec does.
///
/// # Example
///
/// ```rust
/// use examiner::{Examiner, Spec};
/// use serde_json::json;
///
/// let examiner = Examiner::new().with_max_depth(2);
/// let spec = Spec::template(&json!({"a": {"b": {"c": "deep"}}}));
///
/// assert!(examiner.examine(&spec, &json!({"a": {"b": {"c": 1}}})).is_none());
/// assert!(Examiner::new().examine(&spec, &json!({"a": {"b": {"c": 1}}})).is_some());
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Examiner {
    max_depth: Option<usize>,
}

impl Examiner {
    /// Creates an examiner with no depth limit.
    pub fn new() -> Self {
        Self::default()
    }

    /// Limits how many levels of composite specs may be descended.
    ///
    /// A composite spec met at this depth fails with
    /// [`MismatchKind::DepthExceeded`] instead of recursing further.
    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = Some(depth);
        self
    }

    /// Returns the configured max depth, if any.
    pub fn max_depth(&self) -> Option<usize> {
        self.max_depth
    }

    /// Validates `data` against `spec`, returning the bound names on success.
    ///
    /// Returns `None` if any position fails. Extractions made before a failure
    /// are discarded with the walk.
    pub fn examine(&self, spec: &Spec, data: &Value) -> Option<Extraction> {
        self.examine_into(spec, data, Extraction::new())
    }

    /// Like [`Examiner::examine`], but binds on top of `seed`.
    ///
    /// Names already in `seed` keep their position; binding one again
    /// overwrites its value.
    ///
    /// ```rust
    /// use examiner::{Examiner, Extraction, Spec};
    /// use serde_json::json;
    ///
    /// let seed: Extraction = [("id".to_string(), Some(json!(7)))].into_iter().collect();
    /// let spec = Spec::template(&json!({"name": "name"}));
    ///
    /// let found = Examiner::new().examine_into(&spec, &json!({"name": "Ada"}), seed).unwrap();
    /// assert_eq!(found.to_json(), json!({"id": 7, "name": "Ada"}));
    /// ```
    pub fn examine_into(&self, spec: &Spec, data: &Value, seed: Extraction) -> Option<Extraction> {
        let mut walk = Walk::new(self.max_depth, seed);
        walk.visit(spec, Some(data)).then_some(walk.extraction)
    }

    /// Like [`Examiner::examine`], but reports every failing position.
    pub fn diagnose(&self, spec: &Spec, data: &Value) -> MatchResult {
        let mut walk = Walk::new(self.max_depth, Extraction::new());
        walk.visit(spec, Some(data));
        match Mismatches::from_vec(walk.mismatches) {
            None => Validation::Success(walk.extraction),
            Some(mismatches) => Validation::Failure(mismatches),
        }
    }

    /// Examines many data trees against one spec in parallel.
    ///
    /// Results are returned in the order of `items`.
    pub fn examine_each(&self, spec: &Spec, items: &[Value]) -> Vec<Option<Extraction>> {
        items
            .par_iter()
            .map(|item| self.examine(spec, item))
            .collect()
    }
}

/// State owned by a single call.
///
/// `path` is the position currently visited. It grows and shrinks with the
/// walk and is only cloned when a mismatch is recorded.
struct Walk {
    max_depth: Option<usize>,
    path: JsonPath,
    extraction: Extraction,
    mismatches: Vec<Mismatch>,
}

impl Walk {
    fn new(max_depth: Option<usize>, extraction: Extraction) -> Self {
        Self {
            max_depth,
            path: JsonPath::root(),
            extraction,
            mismatches: Vec::new(),
        }
    }

    fn visit(&mut self, spec: &Spec, data: Option<&Value>) -> bool {
        let Some(value) = data else {
            return match spec {
                Spec::Any | Spec::Absent => true,
                _ => self.fail(MismatchKind::Missing, None),
            };
        };

        match spec {
            Spec::Any | Spec::Present => true,
            Spec::Absent => self.fail(MismatchKind::Unexpected, Some(value)),
            Spec::Equals(expected) => {
                strict_eq(expected, value)
                    || self.fail(
                        MismatchKind::NotEqual {
                            expected: expected.clone(),
                        },
                        Some(value),
                    )
            }
            Spec::Bind(name) => {
                self.extraction.bind(name, Some(value));
                true
            }
            Spec::Predicate(predicate) => match predicate.probe(value) {
                Outcome::Invalid => self.fail(MismatchKind::Rejected, Some(value)),
                Outcome::Valid => true,
                Outcome::Bind(name) => {
                    self.extraction.bind(&name, Some(value));
                    true
                }
            },
            Spec::Map(_) | Spec::Seq(_) => self.visit_children(spec, value),
        }
    }

    // Every child is visited even after a failure so diagnosis sees them all.
    fn visit_children(&mut self, spec: &Spec, value: &Value) -> bool {
        if !is_composite(value) {
            return self.fail(MismatchKind::NotComposite, Some(value));
        }
        let depth = self.path.len();
        if let Some(max_depth) = self.max_depth.filter(|max| depth >= *max) {
            tracing::debug!(
                target: "examiner",
                path = %self.path,
                max_depth,
                "spec nesting cut off"
            );
            return self.fail(MismatchKind::DepthExceeded { max_depth }, None);
        }

        let mut valid = true;
        for (key, child) in spec.children() {
            let child_data = key.lookup(Some(value));
            self.path.enter(key);
            valid &= self.visit(child, child_data);
            self.path.leave();
        }
        valid
    }

    fn fail(&mut self, kind: MismatchKind, got: Option<&Value>) -> bool {
        tracing::trace!(target: "examiner", path = %self.path, code = kind.code(), "position did not match");
        let mut mismatch = Mismatch::new(self.path.clone(), kind);
        if let Some(got) = got {
            mismatch = mismatch.with_got(got.clone());
        }
        self.mismatches.push(mismatch);
        false
    }
}

/// Validates `data` against `spec` and extracts bound names in one pass.
///
/// Returns `None` if any position fails. Name markers and predicate leaves
/// answering [`Outcome::Bind`] both extract.
///
/// # Example
///
/// ```rust
/// use examiner::{examine, see, Spec};
/// use serde_json::json;
///
/// let spec = Spec::map([(
///     "a",
///     Spec::map([(
///         "h",
///         Spec::seq([
///             Spec::any(),
///             see(|v| v.is_array(), "foo", None).into(),
///             Spec::present(),
///         ]),
///     )]),
/// )]);
///
/// let found = examine(&spec, &json!({"a": {"h": [{"i": 5}, [1, 2], 10]}})).unwrap();
/// assert_eq!(found.to_json(), json!({"foo": [1, 2]}));
///
/// assert!(examine(&spec, &json!({"a": {"h": [{"i": 5}, [1, 2]]}})).is_none());
/// ```
pub fn examine(spec: &Spec, data: &Value) -> Option<Extraction> {
    Examiner::default().examine(spec, data)
}

/// Examines `data`, accumulating every failing position.
///
/// ```rust
/// use examiner::{diagnose, Spec};
/// use serde_json::json;
///
/// let spec = Spec::pattern(&json!({"a": 1, "b": true, "c": false}));
/// let errors = diagnose(&spec, &json!({"a": 2, "c": 3})).into_result().unwrap_err();
///
/// let codes: Vec<_> = errors.iter().map(|m| m.code()).collect();
/// assert_eq!(codes, vec!["not_equal", "missing", "unexpected"]);
/// ```
pub fn diagnose(spec: &Spec, data: &Value) -> MatchResult {
    Examiner::default().diagnose(spec, data)
}

/// Examines each item against `spec` in parallel.
pub fn examine_each(spec: &Spec, items: &[Value]) -> Vec<Option<Extraction>> {
    Examiner::default().examine_each(spec, items)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_bind_requires_presence() {
        let spec = Spec::template(&json!({"a": "foo"}));
        assert!(examine(&spec, &json!({})).is_none());
    }

    #[test]
    fn test_all_children_visited_after_failure() {
        let spec = Spec::pattern(&json!([1, 2, 3]));
        let errors = diagnose(&spec, &json!([0, 2, 0])).into_result().unwrap_err();
        assert_eq!(errors.len(), 2);
        assert_eq!(errors.first().path, JsonPath::root().push_index(0));
    }

    #[test]
    fn test_depth_limit_zero_stops_at_root() {
        let examiner = Examiner::new().with_max_depth(0);
        let errors = examiner
            .diagnose(&Spec::pattern(&json!({})), &json!({}))
            .into_result()
            .unwrap_err();
        assert_eq!(errors.first().code(), "depth_exceeded");
    }

    #[test]
    fn test_depth_limit_leaves_are_fine() {
        let examiner = Examiner::new().with_max_depth(0);
        assert!(examiner.examine(&Spec::bind("x"), &json!(1)).is_some());
    }

    #[test]
    fn test_default_has_no_depth_limit() {
        assert_eq!(Examiner::new().max_depth(), None);
        assert_eq!(Examiner::new().with_max_depth(4).max_depth(), Some(4));
    }

    #[test]
    fn test_failure_path_restored_after_sibling() {
        let spec = Spec::pattern(&json!({"a": {"b": 1}, "c": 2}));
        let errors = diagnose(&spec, &json!({"a": {"b": 0}, "c": 0}))
            .into_result()
            .unwrap_err();
        let paths: Vec<_> = errors.iter().map(|m| m.path.to_string()).collect();
        assert_eq!(paths, vec!["a.b", "c"]);
    }

    #[test]
    fn test_examine_into_overwrites_seeded_name() {
        let seed: Extraction = [
            ("x".to_string(), Some(json!(0))),
            ("y".to_string(), None),
        ]
        .into_iter()
        .collect();
        let spec = Spec::template(&json!({"b": "x"}));

        let found = Examiner::new()
            .examine_into(&spec, &json!({"b": 5}), seed)
            .unwrap();
        assert_eq!(found.names().collect::<Vec<_>>(), vec!["x", "y"]);
        assert_eq!(found.get("x"), Some(&json!(5)));
        assert!(found.is_undefined("y"));
    }

    #[test]
    fn test_examine_into_discards_seed_on_failure() {
        let seed: Extraction = [("x".to_string(), Some(json!(0)))].into_iter().collect();
        let spec = Spec::pattern(&json!({"a": 1}));
        assert!(Examiner::new().examine_into(&spec, &json!({"a": 2}), seed).is_none());
    }
}
