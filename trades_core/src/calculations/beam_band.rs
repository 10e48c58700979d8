//! # Beam Band & Mesh Estimate
//!
//! Cut list for wrapping a beam in mesh held by steel bands. The beam run
//! is paced off in "shoes" (a fixed 14" field measure) plus a final
//! taped "boot" distance; an angled beam also has a rise.
//!
//! ```text
//! run          = shoes × 14 + boot
//! beam length  = √(run² + rise²)
//! band length  = circumference + 8     (7" bander grab + 1" clip)
//! band qty     = ⌈beam length / 40⌉ + 1
//! mesh length  = circumference + 19    (12" corners + 3" overlap + 4" edge)
//! mesh panels  = max(band qty − 1, 1), each 40" wide
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::{TradesError, TradesResult};
use crate::units::{Feet, Inches, SquareFeet, SquareInches};

/// Length of one paced "shoe", inches
pub const SHOE_SIZE_IN: f64 = 14.0;

/// Extra band length for the bander grab and clip, inches
pub const BAND_ALLOWANCE_IN: f64 = 8.0;

/// Extra mesh length for corners, overlap and edge, inches
pub const MESH_ALLOWANCE_IN: f64 = 19.0;

/// Maximum spacing between bands, inches
pub const BAND_SPACING_IN: f64 = 40.0;

/// Width of one mesh panel, inches
pub const MESH_WIDTH_IN: f64 = 40.0;

/// Input parameters for a band and mesh estimate.
///
/// ## JSON Example
///
/// ```json
/// {
///   "circumference_in": 44.0,
///   "shoes": 4,
///   "boot_in": 6.0,
///   "rise_in": 30.0
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BeamBandInput {
    /// Measured circumference of the beam in inches
    pub circumference_in: f64,

    /// Number of whole shoes paced along the run
    pub shoes: u32,

    /// Remaining run after the last shoe, inches
    pub boot_in: f64,

    /// Vertical rise for an angled beam, inches (0 for horizontal)
    pub rise_in: f64,
}

impl BeamBandInput {
    /// Validate input parameters.
    pub fn validate(&self) -> TradesResult<()> {
        if self.circumference_in <= 0.0 {
            return Err(TradesError::validation(
                "circumference",
                self.circumference_in.to_string(),
                "must be positive",
            ));
        }
        if self.boot_in < 0.0 {
            return Err(TradesError::validation(
                "boot",
                self.boot_in.to_string(),
                "cannot be negative",
            ));
        }
        if self.beam_length_in() <= 0.0 {
            return Err(TradesError::validation(
                "run",
                self.run_in().to_string(),
                "beam length must be positive",
            ));
        }
        Ok(())
    }

    /// Horizontal run = shoes × 14" + boot
    pub fn run_in(&self) -> f64 {
        f64::from(self.shoes) * SHOE_SIZE_IN + self.boot_in
    }

    /// Beam length along its axis
    pub fn beam_length_in(&self) -> f64 {
        if self.rise_in == 0.0 {
            self.run_in()
        } else {
            self.run_in().hypot(self.rise_in)
        }
    }

    pub fn is_angled(&self) -> bool {
        self.rise_in != 0.0
    }
}

/// Results from a band and mesh estimate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BeamBandResult {
    pub run_in: f64,
    pub beam_length_in: f64,
    pub beam_length_ft: f64,

    /// Cut length of one band
    pub band_length_in: f64,
    pub band_qty: u32,
    pub total_band_in: f64,
    pub total_band_ft: f64,

    /// Cut length of one mesh panel
    pub mesh_length_in: f64,
    pub mesh_qty: u32,
    pub total_mesh_sq_in: f64,
    pub total_mesh_sq_ft: f64,
}

/// Calculate bands and mesh panels for a beam.
pub fn calculate(input: &BeamBandInput) -> TradesResult<BeamBandResult> {
    input.validate()?;

    let run = input.run_in();
    let beam_length = Inches(input.beam_length_in());
    let beam_length_ft: Feet = beam_length.into();

    let band_length = input.circumference_in + BAND_ALLOWANCE_IN;
    let band_qty = (beam_length.0 / BAND_SPACING_IN).ceil() as u32 + 1;
    let total_band = Inches(f64::from(band_qty) * band_length);
    let total_band_ft: Feet = total_band.into();

    let mesh_length = input.circumference_in + MESH_ALLOWANCE_IN;
    let mesh_qty = band_qty.saturating_sub(1).max(1);
    let total_mesh = SquareInches(f64::from(mesh_qty) * mesh_length * MESH_WIDTH_IN);
    let total_mesh_sq_ft: SquareFeet = total_mesh.into();

    debug!(beam_length_in = beam_length.0, band_qty, mesh_qty, "beam band computed");

    Ok(BeamBandResult {
        run_in: run,
        beam_length_in: beam_length.0,
        beam_length_ft: beam_length_ft.0,
        band_length_in: band_length,
        band_qty,
        total_band_in: total_band.0,
        total_band_ft: total_band_ft.0,
        mesh_length_in: mesh_length,
        mesh_qty,
        total_mesh_sq_in: total_mesh.0,
        total_mesh_sq_ft: total_mesh_sq_ft.0,
    })
}
