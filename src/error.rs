//! Run-level Error Types
//!
//! Each variant names the phase that failed; the full error tree below it
//! comes from the collaborating crate via `exn`.

use derive_more::{Display, Error};

/// A run-level error with automatic location tracking.
pub type Error = exn::Exn<ErrorKind>;
/// Result type alias for run operations.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Display, Error)]
pub enum ErrorKind {
    #[display("configuration could not be loaded")]
    Config,
    #[display("reference queries failed; aborting without partial results")]
    Database,
    #[display("bucket listing failed; aborting without partial results")]
    Listing,
    #[display("CSV export failed")]
    Export,
    #[display("statistics report could not be written")]
    Report,
}
