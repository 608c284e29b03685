//! Configuration Error Types

use derive_more::{Display, Error};

/// A configuration error with automatic location tracking.
pub type Error = exn::Exn<ErrorKind>;
/// Result type alias for configuration operations.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Display, Error)]
pub enum ErrorKind {
    /// The layered sources could not be read or deserialized.
    #[display("invalid configuration")]
    Invalid,
    /// A required value was absent from every source.
    #[display("missing required configuration value: {_0}")]
    Missing(#[error(not(source))] &'static str),
}
