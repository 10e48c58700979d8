//! # Simple Angle Offset
//!
//! Travel and advance for a single-plane offset made with two fittings of
//! the same angle.
//!
//! ```text
//! travel  = offset / sin(angle)
//! advance = offset / tan(angle)
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::{TradesError, TradesResult};
use crate::units::Degrees;

/// Input for an angle offset.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AngleOffsetInput {
    /// Fitting angle in degrees, 0 < angle <= 90
    pub angle_deg: f64,

    /// Offset between pipe centerlines in inches
    pub offset_in: f64,
}

impl AngleOffsetInput {
    /// Validate input parameters.
    pub fn validate(&self) -> TradesResult<()> {
        if self.angle_deg <= 0.0 || self.angle_deg > 90.0 {
            return Err(TradesError::validation(
                "angle",
                self.angle_deg.to_string(),
                "must be greater than 0 and at most 90 degrees",
            ));
        }
        if self.offset_in <= 0.0 {
            return Err(TradesError::validation(
                "offset",
                self.offset_in.to_string(),
                "must be positive",
            ));
        }
        Ok(())
    }
}

/// Travel and advance in inches.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AngleOffsetResult {
    /// Center-to-center length of the angled run
    pub travel_in: f64,

    /// Distance gained along the original run
    pub advance_in: f64,
}

/// Calculate travel and advance for an angle offset.
pub fn calculate(input: &AngleOffsetInput) -> TradesResult<AngleOffsetResult> {
    input.validate()?;

    let angle = Degrees(input.angle_deg).to_radians();
    let travel = input.offset_in / angle.sin();
    // tan(90°) is not exactly infinite in floating point
    let advance = if input.angle_deg == 90.0 {
        0.0
    } else {
        input.offset_in / angle.tan()
    };

    debug!(travel, advance, "angle offset computed");

    Ok(AngleOffsetResult {
        travel_in: travel,
        advance_in: advance,
    })
}
