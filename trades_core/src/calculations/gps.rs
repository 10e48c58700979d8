//! # GPS Distance Verification
//!
//! Great-circle distance between two surveyed points using the haversine
//! formula on a spherical Earth of mean radius 6,371 km. Crews use it to
//! check that a satellite fix and a staked point agree.
//!
//! Coordinates are not range-checked: a latitude of 500 is fed into the
//! trigonometry unchanged. Out-of-range values only produce a warning event.
//!
//! ## Example
//!
//! ```rust
//! use trades_core::calculations::gps::{calculate, Coordinate, GpsInput};
//!
//! let input = GpsInput {
//!     point1: Coordinate::new(40.7128, -74.0060),
//!     point2: Coordinate::new(34.0522, -118.2437),
//! };
//! let result = calculate(&input);
//! assert!((result.distance_m - 3_935_746.25).abs() < 1.0);
//! ```

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::units::{Degrees, Feet, Meters};

/// Mean Earth radius in meters
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// A latitude/longitude pair in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    /// Latitude in degrees (north positive)
    pub latitude: f64,

    /// Longitude in degrees (east positive)
    pub longitude: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }

    /// True when latitude is within [-90, 90] and longitude within [-180, 180]
    pub fn is_geographic(&self) -> bool {
        (-90.0..=90.0).contains(&self.latitude) && (-180.0..=180.0).contains(&self.longitude)
    }
}

/// Input for a GPS verification: the two points to compare.
///
/// ## JSON Example
///
/// ```json
/// {
///   "point1": { "latitude": 40.7128, "longitude": -74.006 },
///   "point2": { "latitude": 34.0522, "longitude": -118.2437 }
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GpsInput {
    pub point1: Coordinate,
    pub point2: Coordinate,
}

/// Distance between the two points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GpsResult {
    /// Great-circle distance in meters
    pub distance_m: f64,

    /// Same distance in feet (3.28084 ft/m)
    pub distance_ft: f64,
}

/// Haversine great-circle distance in meters between two points given in degrees.
///
/// The haversine term is clamped to [0, 1] so floating-point rounding near
/// antipodal points cannot produce a NaN.
pub fn gps_distance(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let lat1_rad = Degrees(lat1).to_radians();
    let lat2_rad = Degrees(lat2).to_radians();
    let delta_lat = Degrees(lat2 - lat1).to_radians();
    let delta_lon = Degrees(lon2 - lon1).to_radians();

    let half_lat = (delta_lat / 2.0).sin();
    let half_lon = (delta_lon / 2.0).sin();
    let a = (half_lat * half_lat + lat1_rad.cos() * lat2_rad.cos() * half_lon * half_lon).clamp(0.0, 1.0);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_M * c
}

/// Compute the distance between the two input points in meters and feet.
pub fn calculate(input: &GpsInput) -> GpsResult {
    for point in [input.point1, input.point2] {
        if !point.is_geographic() {
            warn!(
                latitude = point.latitude,
                longitude = point.longitude,
                "coordinate outside geographic range, using as given"
            );
        }
    }

    let distance = Meters(gps_distance(
        input.point1.latitude,
        input.point1.longitude,
        input.point2.latitude,
        input.point2.longitude,
    ));
    let distance_ft: Feet = distance.into();

    debug!(distance_m = distance.0, distance_ft = distance_ft.0, "gps distance computed");

    GpsResult {
        distance_m: distance.0,
        distance_ft: distance_ft.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    fn new_york_to_los_angeles() -> GpsInput {
        GpsInput {
            point1: Coordinate::new(40.7128, -74.0060),
            point2: Coordinate::new(34.0522, -118.2437),
        }
    }

    #[test]
    fn test_new_york_to_los_angeles() {
        let result = calculate(&new_york_to_los_angeles());
        assert_abs_diff_eq!(result.distance_m, 3_935_746.25, epsilon = 0.01);
        assert_abs_diff_eq!(result.distance_ft, 12_912_553.74, epsilon = 0.05);
    }

    #[test]
    fn test_zero_distance_to_self() {
        for (lat, lon) in [(0.0, 0.0), (30.2266, -93.2174), (-89.9, 179.9), (500.0, -720.0)] {
            assert_abs_diff_eq!(gps_distance(lat, lon, lat, lon), 0.0, epsilon = 1e-6);
        }
    }

    #[test]
    fn test_symmetry() {
        let forward = gps_distance(30.2266, -93.2174, 30.2366, -93.3774);
        let backward = gps_distance(30.2366, -93.3774, 30.2266, -93.2174);
        assert_relative_eq!(forward, backward);
    }

    #[test]
    fn test_antipodal_points_stay_finite() {
        // Half the circumference: pi * R
        let d = gps_distance(0.0, 0.0, 0.0, 180.0);
        assert!(d.is_finite());
        assert_relative_eq!(d, std::f64::consts::PI * EARTH_RADIUS_M, max_relative = 1e-12);
    }

    #[test]
    fn test_out_of_range_latitude_accepted() {
        let input = GpsInput {
            point1: Coordinate::new(500.0, 0.0),
            point2: Coordinate::new(0.0, 0.0),
        };
        assert!(!input.point1.is_geographic());
        let result = calculate(&input);
        assert!(result.distance_m.is_finite());
    }

    #[test]
    fn test_repeatable() {
        let input = new_york_to_los_angeles();
        assert_eq!(calculate(&input), calculate(&input));
    }
}
