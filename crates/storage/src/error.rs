//! Storage Error Types
//!
//! This module provides structured errors using `exn` for automatic location
//! tracking and error tree construction.

use derive_more::{Display, Error};

/// A storage error with automatic location tracking.
pub type Error = exn::Exn<ErrorKind>;
/// Result type alias for storage operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Actionable error categories.
///
/// These describe what the caller should *do*, not what went wrong internally.
#[derive(Debug, Display, Error)]
pub enum ErrorKind {
    /// A listing page could not be fetched; the whole listing is void.
    #[display("listing failed for bucket {bucket:?} on page {page}")]
    Listing { bucket: String, page: usize },
    /// The S3 response omitted a field the listing cannot do without.
    #[display("listing entry missing field: {_0}")]
    MissingField(#[error(not(source))] &'static str),
    /// Backend-specific error
    #[display("backend error: {_0}")]
    BackendError(#[error(not(source))] String),
}
