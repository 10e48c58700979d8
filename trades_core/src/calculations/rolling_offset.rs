//! # Rolling Offset
//!
//! Geometry for routing pipe around an obstruction that needs two offsets
//! at once: a vertical `offset` and a horizontal `roll`, over a known
//! `travel`. Produces the true offset, the 45° fitting set, and the
//! diagonal travel.
//!
//! ## Formulas
//!
//! ```text
//! true_offset = √(offset² + roll²)
//! set         = (travel² − offset² − roll²) / (2·travel)
//! diagonal²   = travel² + offset² + roll² − 2·travel·set
//! ```
//!
//! ## Example
//!
//! ```rust
//! use trades_core::calculations::rolling_offset::{calculate, RollingOffsetInput};
//!
//! let input = RollingOffsetInput { offset_in: 3.0, roll_in: 4.0, travel_in: 20.0 };
//! let result = calculate(&input).unwrap();
//! assert_eq!(result.true_offset_in, 5.0);
//! assert_eq!(result.set_in, 9.375);
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::{TradesError, TradesResult};

/// Travel values closer to zero than this are rejected
pub const TRAVEL_EPSILON: f64 = 1e-9;

/// Input parameters for a rolling offset, all in inches.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RollingOffsetInput {
    /// Vertical offset
    pub offset_in: f64,

    /// Horizontal roll
    pub roll_in: f64,

    /// Travel along the run
    pub travel_in: f64,
}

impl RollingOffsetInput {
    /// Validate input parameters.
    pub fn validate(&self) -> TradesResult<()> {
        if self.travel_in.abs() < TRAVEL_EPSILON {
            return Err(TradesError::validation(
                "travel",
                self.travel_in.to_string(),
                "travel cannot be zero or near zero",
            ));
        }
        Ok(())
    }
}

/// Results from a rolling offset calculation, all in inches.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RollingOffsetResult {
    /// Resultant of offset and roll
    pub true_offset_in: f64,

    /// 45° fitting advance along the travel axis
    pub set_in: f64,

    /// Diagonal travel of the rolled section
    pub diagonal_in: f64,
}

/// Calculate rolling offset dimensions.
///
/// # Returns
///
/// * `Ok(RollingOffsetResult)` - True offset, set and diagonal
/// * `Err(TradesError::Validation)` - If travel is (near) zero, or the
///   inputs cannot form a rolling offset (diagonal² negative or not a number)
pub fn calculate(input: &RollingOffsetInput) -> TradesResult<RollingOffsetResult> {
    input.validate()?;

    let RollingOffsetInput {
        offset_in: offset,
        roll_in: roll,
        travel_in: travel,
    } = *input;

    let true_offset = offset.hypot(roll);
    let set = (travel * travel - offset * offset - roll * roll) / (2.0 * travel);
    let diagonal_squared = travel * travel + offset * offset + roll * roll - 2.0 * travel * set;

    if diagonal_squared.is_nan() || diagonal_squared < 0.0 {
        return Err(TradesError::validation(
            "travel",
            travel.to_string(),
            "would result in imaginary diagonal",
        ));
    }
    let diagonal = diagonal_squared.sqrt();

    debug!(true_offset, set, diagonal, "rolling offset computed");

    Ok(RollingOffsetResult {
        true_offset_in: true_offset,
        set_in: set,
        diagonal_in: diagonal,
    })
}
