//! Error types for square layout and estimation.

use sharesquare_core::ShareError;
use thiserror::Error;

/// Errors that can occur while estimating or laying out a square.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SquareError {
    /// Share construction or reconstruction failed.
    #[error("share error: {0}")]
    Share(#[from] ShareError),

    /// Estimator configuration is unusable.
    #[error("invalid config: {0}")]
    InvalidConfig(String),

    /// An index wrapper could not be encoded.
    #[error("failed to marshal index wrapper: {0}")]
    MarshalFailure(String),
}

/// Result type for square operations.
pub type Result<T> = std::result::Result<T, SquareError>;
