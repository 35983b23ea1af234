//! Error type used by the crate.

use thiserror::Error;

/// Error decoding a vector tile.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MvtError {
    /// The buffer is not a valid protobuf tile message.
    #[error("proto error: {0}")]
    Proto(String),

    /// The tile message is valid protobuf, but its content breaks the vector tile format.
    #[error("{0}")]
    Generic(String),
}
