//! Error and diagnostic types.
//!
//! Failing to match is an expected outcome and is reported through return
//! values. [`Mismatch`] and [`Mismatches`] describe *where* and *why* a match
//! failed when diagnosis is requested; [`ExtractError`] covers typed reads
//! from an extraction.

mod extract;
mod mismatch;

pub use extract::ExtractError;
pub use mismatch::{Mismatch, MismatchKind, Mismatches};
