//! # Beam Wrap Material Estimation
//!
//! Estimates the fireproofing/insulation wrap needed to cover a round
//! structural member. The wrapped surface is treated as the lateral area
//! of a cylinder, plus a fixed 10% overlap allowance for seams.
//!
//! ## Example
//!
//! ```rust
//! use trades_core::calculations::beam_wrap::{calculate, BeamWrapInput};
//!
//! let input = BeamWrapInput { diameter_in: 12.0, length_ft: 10.0 };
//! let result = calculate(&input).unwrap();
//! assert!((result.material_needed_sq_ft - 34.56).abs() < 0.01);
//! ```

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::{TradesError, TradesResult};
use crate::units::{Feet, Inches, SquareFeet, SquareInches};

/// Multiplier applied to the bare surface area for seam overlap
pub const OVERLAP_FACTOR: f64 = 1.10;

/// Input parameters for a beam wrap estimate.
///
/// ## JSON Example
///
/// ```json
/// {
///   "diameter_in": 12.0,
///   "length_ft": 10.0
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BeamWrapInput {
    /// Outside diameter of the member in inches
    pub diameter_in: f64,

    /// Length of member to wrap in feet
    pub length_ft: f64,
}

impl BeamWrapInput {
    /// Validate input parameters.
    pub fn validate(&self) -> TradesResult<()> {
        if self.diameter_in <= 0.0 {
            return Err(TradesError::validation(
                "diameter",
                self.diameter_in.to_string(),
                "must be positive",
            ));
        }
        if self.length_ft <= 0.0 {
            return Err(TradesError::validation(
                "length",
                self.length_ft.to_string(),
                "must be positive",
            ));
        }
        Ok(())
    }

    /// Circumference C = 2πr
    pub fn circumference_in(&self) -> f64 {
        let radius = self.diameter_in / 2.0;
        2.0 * PI * radius
    }
}

/// Results from a beam wrap estimate.
///
/// ## JSON Example
///
/// ```json
/// {
///   "circumference_in": 37.699,
///   "surface_area_sq_ft": 31.416,
///   "material_needed_sq_ft": 34.558
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BeamWrapResult {
    /// Circumference of the member in inches
    pub circumference_in: f64,

    /// Bare lateral surface area in square feet
    pub surface_area_sq_ft: f64,

    /// Surface area including the 10% overlap allowance, square feet
    pub material_needed_sq_ft: f64,
}

/// Estimate wrap material for a round member.
///
/// # Returns
///
/// * `Ok(BeamWrapResult)` - Circumference, area and material quantity
/// * `Err(TradesError::Validation)` - If diameter or length is not positive
pub fn calculate(input: &BeamWrapInput) -> TradesResult<BeamWrapResult> {
    input.validate()?;

    let circumference = Inches(input.circumference_in());
    let length: Inches = Feet(input.length_ft).into();
    let surface_area: SquareFeet = SquareInches(circumference.0 * length.0).into();
    let material_needed = SquareFeet(surface_area.0 * OVERLAP_FACTOR);

    debug!(
        circumference_in = circumference.0,
        surface_area_sq_ft = surface_area.0,
        material_needed_sq_ft = material_needed.0,
        "beam wrap computed"
    );

    Ok(BeamWrapResult {
        circumference_in: circumference.0,
        surface_area_sq_ft: surface_area.0,
        material_needed_sq_ft: material_needed.0,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    fn test_beam() -> BeamWrapInput {
        BeamWrapInput {
            diameter_in: 12.0,
            length_ft: 10.0,
        }
    }

    #[test]
    fn test_twelve_inch_by_ten_foot() {
        let result = calculate(&test_beam()).unwrap();
        assert_abs_diff_eq!(result.circumference_in, 37.70, epsilon = 0.005);
        assert_abs_diff_eq!(result.surface_area_sq_ft, 31.42, epsilon = 0.005);
        assert_abs_diff_eq!(result.material_needed_sq_ft, 34.56, epsilon = 0.005);
    }

    #[test]
    fn test_material_is_area_plus_overlap() {
        let result = calculate(&BeamWrapInput {
            diameter_in: 8.625,
            length_ft: 21.0,
        })
        .unwrap();
        assert_relative_eq!(result.material_needed_sq_ft, result.surface_area_sq_ft * 1.1);
    }

    #[test]
    fn test_zero_diameter_rejected() {
        let mut beam = test_beam();
        beam.diameter_in = 0.0;
        let err = calculate(&beam).unwrap_err();
        assert_eq!(err, TradesError::validation("diameter", "0", "must be positive"));
    }

    #[test]
    fn test_negative_length_rejected() {
        let mut beam = test_beam();
        beam.length_ft = -1.0;
        let err = calculate(&beam).unwrap_err();
        assert_eq!(err, TradesError::validation("length", "-1", "must be positive"));
    }

    #[test]
    fn test_repeatable() {
        let beam = test_beam();
        assert_eq!(calculate(&beam).unwrap(), calculate(&beam).unwrap());
    }

    #[test]
    fn test_serialization() {
        let beam = test_beam();
        let json = serde_json::to_string_pretty(&beam).unwrap();
        let roundtrip: BeamWrapInput = serde_json::from_str(&json).unwrap();
        assert_eq!(beam, roundtrip);
    }
}
