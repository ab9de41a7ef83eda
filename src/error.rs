//! Error types for unboil.
//!
//! This module defines the error type returned by the content accessors.

/// Error type for extraction operations.
///
/// Title and date lookups are not errors when they miss - they return `None`.
/// Only the content accessors fail, and only in one way: the scoring pass
/// selected no article node.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// No extractable content was found in the document.
    #[error("No extractable content found")]
    NoContent,
}

/// Result type alias for extraction operations.
pub type Result<T> = std::result::Result<T, Error>;
