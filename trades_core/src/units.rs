//! # Unit Types
//!
//! Lightweight newtype wrappers for the handful of units the field
//! calculations mix: inches and feet for pipe and beam dimensions, meters
//! for GPS distances, square inches and square feet for wrap material,
//! and degrees for coordinates and fitting angles.
//!
//! Conversions are fixed constants; there is no general conversion
//! framework.
//!
//! ## Example
//!
//! ```rust
//! use trades_core::units::{Feet, Inches, Meters};
//!
//! let length: Inches = Feet(10.0).into();
//! assert_eq!(length.0, 120.0);
//!
//! let distance: Feet = Meters(1.0).into();
//! assert_eq!(distance.0, 3.28084);
//! ```

use serde::{Deserialize, Serialize};

/// Inches per foot
pub const INCHES_PER_FOOT: f64 = 12.0;

/// Square inches per square foot
pub const SQ_IN_PER_SQ_FT: f64 = 144.0;

/// Feet per meter
pub const FEET_PER_METER: f64 = 3.28084;

// ============================================================================
// Length Units
// ============================================================================

/// Length in inches
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Inches(pub f64);

/// Length in feet
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Feet(pub f64);

/// Length in meters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Meters(pub f64);

impl From<Feet> for Inches {
    fn from(ft: Feet) -> Self {
        Inches(ft.0 * INCHES_PER_FOOT)
    }
}

impl From<Inches> for Feet {
    fn from(inches: Inches) -> Self {
        Feet(inches.0 / INCHES_PER_FOOT)
    }
}

impl From<Meters> for Feet {
    fn from(m: Meters) -> Self {
        Feet(m.0 * FEET_PER_METER)
    }
}

// ============================================================================
// Area Units
// ============================================================================

/// Area in square inches
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SquareInches(pub f64);

/// Area in square feet
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SquareFeet(pub f64);

impl From<SquareInches> for SquareFeet {
    fn from(sq_in: SquareInches) -> Self {
        SquareFeet(sq_in.0 / SQ_IN_PER_SQ_FT)
    }
}

// ============================================================================
// Angle Units
// ============================================================================

/// Angle in decimal degrees
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Degrees(pub f64);

impl Degrees {
    /// Convert to radians
    pub fn to_radians(self) -> f64 {
        self.0.to_radians()
    }
}
