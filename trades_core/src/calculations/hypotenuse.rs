//! # Run/Rise Travel
//!
//! Straight-line travel for a run and rise: the hypotenuse of the right
//! triangle, reported in inches and feet.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::units::{Feet, Inches};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HypotenuseInput {
    /// Horizontal run in inches
    pub run_in: f64,

    /// Vertical rise in inches
    pub rise_in: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HypotenuseResult {
    pub travel_in: f64,
    pub travel_ft: f64,
}

pub fn calculate(input: &HypotenuseInput) -> HypotenuseResult {
    let travel = Inches(input.run_in.hypot(input.rise_in));
    let travel_ft: Feet = travel.into();

    debug!(travel_in = travel.0, "travel computed");

    HypotenuseResult {
        travel_in: travel.0,
        travel_ft: travel_ft.0,
    }
}
