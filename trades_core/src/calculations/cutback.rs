//! # Miter Cutback
//!
//! How far back from the centerline to mark a miter cut on pipe of a given
//! diameter so the cut produces a fitting of the given angle:
//! `cut = diameter × tan(angle / 2)`.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::{TradesError, TradesResult};
use crate::units::Degrees;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CutbackInput {
    /// Fitting angle in degrees, 0 < angle < 180
    pub angle_deg: f64,

    /// Pipe outside diameter in inches
    pub diameter_in: f64,
}

impl CutbackInput {
    pub fn validate(&self) -> TradesResult<()> {
        if self.angle_deg <= 0.0 || self.angle_deg >= 180.0 {
            return Err(TradesError::validation(
                "angle",
                self.angle_deg.to_string(),
                "must be between 0 and 180 degrees",
            ));
        }
        if self.diameter_in <= 0.0 {
            return Err(TradesError::validation(
                "diameter",
                self.diameter_in.to_string(),
                "must be positive",
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CutbackResult {
    /// Cutback measured from the centerline, inches
    pub cut_in: f64,
}

pub fn calculate(input: &CutbackInput) -> TradesResult<CutbackResult> {
    input.validate()?;

    let half_angle = Degrees(input.angle_deg / 2.0).to_radians();
    let cut = input.diameter_in * half_angle.tan();

    debug!(cut, "cutback computed");

    Ok(CutbackResult { cut_in: cut })
}
