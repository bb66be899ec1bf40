//! Estimator configuration.

use serde::{Deserialize, Serialize};
use sharesquare_core::consts::{DEFAULT_MAX_SQUARE_SIZE, DEFAULT_MIN_SQUARE_SIZE};

use crate::error::{Result, SquareError};

/// Largest square side whose share count still fits a `u32` share index.
const LARGEST_REPRESENTABLE_SQUARE_SIZE: u64 = 1 << 15;

/// Bounds on the square side length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EstimatorConfig {
    /// Smallest square the estimator returns.
    pub min_square_size: u64,
    /// Largest square the estimator returns. Transaction shares are always
    /// estimated at this size.
    pub max_square_size: u64,
}

impl Default for EstimatorConfig {
    fn default() -> Self {
        Self {
            min_square_size: DEFAULT_MIN_SQUARE_SIZE,
            max_square_size: DEFAULT_MAX_SQUARE_SIZE,
        }
    }
}

impl EstimatorConfig {
    /// Check that both bounds are powers of two and ordered.
    pub fn validate(&self) -> Result<()> {
        if !self.min_square_size.is_power_of_two() {
            return Err(SquareError::InvalidConfig(format!(
                "min_square_size {} is not a power of two",
                self.min_square_size
            )));
        }
        if !self.max_square_size.is_power_of_two() {
            return Err(SquareError::InvalidConfig(format!(
                "max_square_size {} is not a power of two",
                self.max_square_size
            )));
        }
        if self.min_square_size > self.max_square_size {
            return Err(SquareError::InvalidConfig(format!(
                "min_square_size {} exceeds max_square_size {}",
                self.min_square_size, self.max_square_size
            )));
        }
        if self.max_square_size > LARGEST_REPRESENTABLE_SQUARE_SIZE {
            return Err(SquareError::InvalidConfig(format!(
                "max_square_size {} exceeds {}",
                self.max_square_size, LARGEST_REPRESENTABLE_SQUARE_SIZE
            )));
        }
        Ok(())
    }
}
