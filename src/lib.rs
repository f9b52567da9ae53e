//! # Examiner
//!
//! Declarative structural matching for nested JSON-like data.
//!
//! ## Overview
//!
//! A [`Spec`] tree mirrors the shape of the data it describes. Leaves say what
//! the value at their position must be (a constant, present, absent, anything,
//! or accepted by a predicate) and optionally bind it to a name. Walking a spec
//! and a data tree together either validates the data, extracts the named
//! positions into an [`Extraction`], or both at once.
//!
//! ## Entry Points
//!
//! - [`where_all`]: does the data conform?
//! - [`inspect`]: pull out every named position, never failing
//! - [`examine`]: validate, and extract only if everything conforms
//! - [`diagnose`]: like `examine`, reporting every failing [`JsonPath`]
//! - [`see`]: pair a test with a name as a single spec leaf
//!
//! ## Example
//!
//! ```rust
//! use examiner::{examine, inspect, see, where_all, Spec};
//! use serde_json::json;
//!
//! let data = json!({"a": 1, "b": {"c": 3}});
//!
//! // Strings in a template are names to extract under
//! let found = inspect(&Spec::template(&json!({"a": "foo", "b": {"c": "bar"}})), &data);
//! assert_eq!(found.to_json(), json!({"foo": 1, "bar": 3}));
//!
//! // Strings in a pattern are constants to compare with
//! assert!(where_all(&Spec::pattern(&json!({"b": {"c": 3}})), &data));
//!
//! // Predicates can validate and extract in the same pass
//! let spec = Spec::map([("b", see(|v| v.is_object(), "inner", None))]);
//! let found = examine(&spec, &data).unwrap();
//! assert_eq!(found.get("inner"), Some(&json!({"c": 3})));
//! ```

pub mod collect;
pub mod error;
pub mod extraction;
pub mod matching;
pub mod path;
pub mod predicates;
pub mod spec;

pub use collect::{entries_as_object, is_plain_object, uniques_for};
pub use error::{ExtractError, Mismatch, MismatchKind, Mismatches};
pub use extraction::Extraction;
pub use matching::{diagnose, examine, examine_each, inspect, where_all, Examiner};
pub use path::{JsonPath, PathSegment};
pub use spec::{see, Outcome, Predicate, See, Sighting, Spec};

/// Type alias for diagnosis results.
pub type MatchResult = stillwater::Validation<Extraction, Mismatches>;
