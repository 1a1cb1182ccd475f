//! Error types for salesboard-core.

use thiserror::Error;

/// Result type for salesboard-core operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in salesboard-core.
///
/// Only the record store and the bundled sample can fail. Normalization,
/// filtering and aggregation are total over their inputs.
#[derive(Debug, Error)]
pub enum Error {
    /// Serialization error.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// Deserialization error.
    #[error("deserialization error: {0}")]
    Deserialization(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
