//! Reconciliation Error Types
//!
//! The core is almost entirely pure; the only fallible edge is rendering
//! timestamps for export rows.

use derive_more::{Display, Error};

/// A reconciliation error with automatic location tracking.
pub type Error = exn::Exn<ErrorKind>;
/// Result type alias for reconciliation operations.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Display, Error)]
pub enum ErrorKind {
    /// A last-modified timestamp could not be rendered for export.
    #[display("could not format timestamp for {key}")]
    TimestampFormat { #[error(not(source))] key: String },
}
