//! # Field Calculations
//!
//! Each calculation follows the same pattern:
//!
//! - `*Input` - Input parameters (JSON-serializable)
//! - `*Result` - Calculation results (JSON-serializable)
//! - `calculate(&input)` - Pure function; returns `TradesResult<*Result>`
//!   when the input has domain constraints to check
//!
//! ## Available Calculations
//!
//! - [`gps`] - Haversine distance between two coordinates
//! - [`plus_code`] - Plus Code to latitude/longitude
//! - [`beam_wrap`] - Wrap material for a round member
//! - [`beam_band`] - Bands and mesh panels for a paced beam run
//! - [`rolling_offset`] - True offset, set and diagonal for a rolling offset
//! - [`angle_offset`] - Travel and advance for a single-plane offset
//! - [`cutback`] - Miter cutback for a fitting angle
//! - [`calibrate`] - Satellite vs. field measurement check
//! - [`hypotenuse`] - Travel for a run and rise

pub mod angle_offset;
pub mod beam_band;
pub mod beam_wrap;
pub mod calibrate;
pub mod cutback;
pub mod gps;
pub mod hypotenuse;
pub mod plus_code;
pub mod rolling_offset;

use serde::{Deserialize, Serialize};

pub use angle_offset::{AngleOffsetInput, AngleOffsetResult};
pub use beam_band::{BeamBandInput, BeamBandResult};
pub use beam_wrap::{BeamWrapInput, BeamWrapResult};
pub use calibrate::{CalibrateInput, CalibrateResult};
pub use cutback::{CutbackInput, CutbackResult};
pub use gps::{Coordinate, GpsInput, GpsResult};
pub use hypotenuse::{HypotenuseInput, HypotenuseResult};
pub use plus_code::{DecodeInput, DecodeResult};
pub use rolling_offset::{RollingOffsetInput, RollingOffsetResult};

/// One completed calculation: the parsed input next to its result.
///
/// Renderers receive this record and never recompute anything.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum CalculationReport {
    GpsVerify {
        input: GpsInput,
        result: GpsResult,
    },
    Decode {
        input: DecodeInput,
        result: DecodeResult,
    },
    BeamWrap {
        input: BeamWrapInput,
        result: BeamWrapResult,
    },
    BeamBand {
        input: BeamBandInput,
        result: BeamBandResult,
    },
    RollingOffset {
        input: RollingOffsetInput,
        result: RollingOffsetResult,
    },
    AngleOffset {
        input: AngleOffsetInput,
        result: AngleOffsetResult,
    },
    Cutback {
        input: CutbackInput,
        result: CutbackResult,
    },
    Calibrate {
        input: CalibrateInput,
        result: CalibrateResult,
    },
    Hypotenuse {
        input: HypotenuseInput,
        result: HypotenuseResult,
    },
}

impl CalculationReport {
    /// Get the calculation type as a string
    pub fn calc_type(&self) -> &'static str {
        match self {
            CalculationReport::GpsVerify { .. } => "GPS Verify",
            CalculationReport::Decode { .. } => "Plus Code",
            CalculationReport::BeamWrap { .. } => "Beam Wrap",
            CalculationReport::BeamBand { .. } => "Beam Band",
            CalculationReport::RollingOffset { .. } => "Rolling Offset",
            CalculationReport::AngleOffset { .. } => "Angle Offset",
            CalculationReport::Cutback { .. } => "Cutback",
            CalculationReport::Calibrate { .. } => "Calibrate",
            CalculationReport::Hypotenuse { .. } => "Hypotenuse",
        }
    }
}
