//! Error types for ENU operations.

use thiserror::Error;

/// Result type alias using ENU Error.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during ENU operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Paired inputs have incompatible lengths or dimensions.
    #[error("shape mismatch: {0}")]
    ShapeMismatch(String),

    /// Angle outside its conventional range (only under `DomainPolicy::Reject`).
    #[error("domain error: {0}")]
    Domain(String),

    /// Invalid configuration values.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Configuration could not be parsed.
    #[error("serialization error: {0}")]
    Serialization(String),
}

impl Error {
    /// Build a shape mismatch error for two paired lengths.
    pub(crate) fn lengths(what: &str, left: usize, right: usize) -> Self {
        Error::ShapeMismatch(format!("{what}: lengths {left} and {right} differ"))
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Serialization(err.to_string())
    }
}
