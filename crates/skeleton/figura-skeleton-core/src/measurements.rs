//! Caller-supplied body measurements and their validation.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The scalar inputs a generation request starts from. Immutable; supplied
/// per call.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BodyMeasurements {
    /// Standing height in meters.
    pub height: f32,
    /// Fingertip-to-fingertip span in meters.
    pub wingspan: f32,
}

/// Rejection reasons for malformed measurements.
#[derive(Debug, Error, PartialEq)]
pub enum MeasurementError {
    #[error("height must be positive and finite, got {0}")]
    InvalidHeight(f32),
    #[error("wingspan must be positive and finite, got {0}")]
    InvalidWingspan(f32),
}

impl BodyMeasurements {
    /// Reject degenerate inputs before any geometry is derived. Zero or
    /// negative spans would produce undefined joint placements.
    pub fn validate(&self) -> Result<(), MeasurementError> {
        if !self.height.is_finite() || self.height <= 0.0 {
            return Err(MeasurementError::InvalidHeight(self.height));
        }
        if !self.wingspan.is_finite() || self.wingspan <= 0.0 {
            return Err(MeasurementError::InvalidWingspan(self.wingspan));
        }
        Ok(())
    }
}
