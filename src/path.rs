//! Paths to positions in a data tree.
//!
//! This module provides [`PathSegment`], the key a composite spec uses to align
//! with data, and [`JsonPath`], the location reported when a position fails.

use std::fmt::{self, Display};

use serde_json::Value;

/// A single step into a data tree.
///
/// Mapping specs step by [`PathSegment::Field`], sequence specs by
/// [`PathSegment::Index`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PathSegment {
    /// A keyed step (e.g., `user`, `email`)
    Field(String),
    /// A positional step (e.g., `[0]`, `[42]`)
    Index(usize),
}

impl PathSegment {
    /// Creates a new field segment.
    pub fn field(name: impl Into<String>) -> Self {
        PathSegment::Field(name.into())
    }

    /// Creates a new index segment.
    pub fn index(idx: usize) -> Self {
        PathSegment::Index(idx)
    }

    /// Looks up the child this segment addresses inside `parent`.
    ///
    /// Follows property-access rules: a field spelled as a number can address
    /// an array element, and an index can address an object key spelled as that
    /// number. Primitives and absent parents have no children.
    ///
    /// # Example
    ///
    /// ```rust
    /// use examiner::PathSegment;
    /// use serde_json::json;
    ///
    /// let data = json!({"a": [10, 20]});
    /// let a = PathSegment::field("a").lookup(Some(&data));
    /// assert_eq!(PathSegment::index(1).lookup(a), Some(&json!(20)));
    /// assert_eq!(PathSegment::field("1").lookup(a), Some(&json!(20)));
    /// assert_eq!(PathSegment::index(5).lookup(a), None);
    /// ```
    pub fn lookup<'d>(&self, parent: Option<&'d Value>) -> Option<&'d Value> {
        match (self, parent?) {
            (PathSegment::Field(name), Value::Object(map)) => map.get(name),
            (PathSegment::Field(name), Value::Array(items)) => {
                name.parse::<usize>().ok().and_then(|i| items.get(i))
            }
            (PathSegment::Index(idx), Value::Array(items)) => items.get(*idx),
            (PathSegment::Index(idx), Value::Object(map)) => map.get(&idx.to_string()),
            _ => None,
        }
    }
}

impl From<&str> for PathSegment {
    fn from(name: &str) -> Self {
        PathSegment::Field(name.to_string())
    }
}

impl From<usize> for PathSegment {
    fn from(idx: usize) -> Self {
        PathSegment::Index(idx)
    }
}

/// A path to a position in a nested data tree.
///
/// # Example
///
/// ```rust
/// use examiner::JsonPath;
///
/// let path = JsonPath::root()
///     .push_field("person")
///     .push_field("favoritePhotos")
///     .push_index(2);
///
/// assert_eq!(path.to_string(), "person.favoritePhotos[2]");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct JsonPath {
    segments: Vec<PathSegment>,
}

impl JsonPath {
    /// Creates an empty path representing the root value.
    pub fn root() -> Self {
        Self::default()
    }

    /// Returns a new path with `segment` appended.
    pub fn push(&self, segment: PathSegment) -> Self {
        let mut segments = self.segments.clone();
        segments.push(segment);
        Self { segments }
    }

    /// Returns a new path with a field segment appended.
    pub fn push_field(&self, name: impl Into<String>) -> Self {
        self.push(PathSegment::Field(name.into()))
    }

    /// Returns a new path with an index segment appended.
    pub fn push_index(&self, index: usize) -> Self {
        self.push(PathSegment::Index(index))
    }

    /// Appends `segment` in place, descending one level.
    pub(crate) fn enter(&mut self, segment: PathSegment) {
        self.segments.push(segment);
    }

    /// Drops the last segment in place, returning to the parent level.
    pub(crate) fn leave(&mut self) {
        self.segments.pop();
    }

    /// Returns true if this is the root path (no segments).
    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    /// Returns the number of segments, which is also the nesting depth.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Returns true if this path has no segments.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Returns an iterator over the path segments.
    pub fn segments(&self) -> impl Iterator<Item = &PathSegment> {
        self.segments.iter()
    }

    /// Returns the last segment, or None if this is root.
    pub fn last(&self) -> Option<&PathSegment> {
        self.segments.last()
    }

    /// Resolves this path against `data`, returning `None` where any step is absent.
    pub fn resolve<'d>(&self, data: &'d Value) -> Option<&'d Value> {
        self.segments
            .iter()
            .try_fold(data, |node, segment| segment.lookup(Some(node)))
    }
}

impl Display for JsonPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            match segment {
                PathSegment::Field(name) => {
                    if i > 0 {
                        write!(f, ".")?;
                    }
                    write!(f, "{}", name)?;
                }
                PathSegment::Index(idx) => write!(f, "[{}]", idx)?,
            }
        }
        Ok(())
    }
}
