//! Reference Database Error Types
//!
//! This module provides structured errors using `exn` for automatic location
//! tracking and error tree construction.

use derive_more::{Display, Error};

/// A reference-database error with automatic location tracking.
pub type Error = exn::Exn<ErrorKind>;
/// Result type alias for reference-database operations.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Display, Error)]
pub enum ErrorKind {
    /// Could not establish a connection pool to the database.
    #[display("could not connect to the application database")]
    Connect,
    /// A reference query failed; the run must abort, not reconcile partially.
    #[display("reference query failed: {_0}")]
    Query(#[error(not(source))] &'static str),
}
