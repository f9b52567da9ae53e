//! Errors raised when reading typed values out of an extraction.

use thiserror::Error;

/// Errors produced by [`Extraction::get_as`](crate::Extraction::get_as) and
/// [`Extraction::decode`](crate::Extraction::decode).
#[derive(Debug, Error)]
pub enum ExtractError {
    /// The spec never bound this name.
    #[error("name '{0}' was not bound by the spec")]
    Unbound(String),

    /// The name was bound, but the position it pointed at was absent.
    #[error("name '{0}' was bound to an absent value")]
    Undefined(String),

    /// The bound value could not be deserialized into the requested type.
    #[error("name '{name}' could not be decoded: {source}")]
    Decode {
        name: String,
        #[source]
        source: serde_json::Error,
    },

    /// The extraction as a whole could not be deserialized.
    #[error("extraction could not be decoded: {0}")]
    DecodeAll(#[source] serde_json::Error),
}
