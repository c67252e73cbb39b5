//! Library error type.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GravlinkError {
    /// Email missing, empty, or blank after trimming.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Unknown digest name (see [`crate::hash::HashAlgorithm`]).
    #[error("unknown hash algorithm: {0} (expected md5 or sha256)")]
    UnknownAlgorithm(String),
}
