//! # Field Calibration
//!
//! Compares a distance measured off satellite imagery with the same
//! distance taped in the field. Readings within 2% are considered
//! calibrated.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::{TradesError, TradesResult};

/// Largest absolute percentage error still treated as calibrated
pub const CALIBRATION_TOLERANCE_PCT: f64 = 2.0;

/// Satellite readings closer to zero than this cannot be used as a reference
pub const SATELLITE_EPSILON: f64 = 1e-9;

/// Input for a calibration check.
///
/// ## JSON Example
///
/// ```json
/// {
///   "satellite": 305.0,
///   "field": 301.5,
///   "unit": "ft"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalibrateInput {
    /// Reference reading taken from satellite imagery
    pub satellite: f64,

    /// Reading measured on site
    pub field: f64,

    /// Display label for the unit of both readings (e.g. "ft", "m")
    pub unit: String,
}

impl CalibrateInput {
    /// Validate input parameters.
    pub fn validate(&self) -> TradesResult<()> {
        if self.satellite.abs() < SATELLITE_EPSILON {
            return Err(TradesError::validation(
                "satellite",
                self.satellite.to_string(),
                "satellite reading cannot be zero or near zero",
            ));
        }
        Ok(())
    }
}

/// Results from a calibration check.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CalibrateResult {
    /// field − satellite, in the input unit
    pub difference: f64,

    /// difference as a percentage of the satellite reading
    pub pct_error: f64,

    /// True when |pct_error| < 2
    pub calibrated: bool,
}

/// Compare a field measurement against its satellite reference.
pub fn calculate(input: &CalibrateInput) -> TradesResult<CalibrateResult> {
    input.validate()?;

    let difference = input.field - input.satellite;
    let pct_error = difference / input.satellite * 100.0;
    let calibrated = pct_error.abs() < CALIBRATION_TOLERANCE_PCT;

    debug!(difference, pct_error, calibrated, "calibration computed");

    Ok(CalibrateResult {
        difference,
        pct_error,
        calibrated,
    })
}
