//! # Plus Code Decoding
//!
//! Decodes an Open Location Code ("Plus Code") into the latitude/longitude
//! cell it names, so a code read off a work order can be fed straight into
//! `gps-verify`.
//!
//! Short codes such as `5MHH+P8G Lake Charles, Louisiana` drop the first
//! four characters. They are recovered from a small table of known job-site
//! localities matched against the text that follows the code.
//!
//! ## Example
//!
//! ```rust
//! use trades_core::calculations::plus_code::{calculate, DecodeInput};
//!
//! let input = DecodeInput { text: "8FVC9G8F+6X".to_string() };
//! let result = calculate(&input).unwrap();
//! assert!((result.latitude - 47.365562).abs() < 1e-6);
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::{TradesError, TradesResult};

/// Digits of the Plus Code alphabet, in value order
pub const CODE_ALPHABET: &str = "23456789CFGHJMPQRVWX";

/// Separator between the area prefix and the local suffix
pub const SEPARATOR: char = '+';

/// Prefix length of a full code
const FULL_PREFIX_LEN: usize = 8;

/// Degrees spanned by one digit of each successive pair
const PAIR_RESOLUTIONS: [f64; 5] = [20.0, 1.0, 0.05, 0.0025, 0.000125];

const LATITUDE_MAX: f64 = 90.0;
const LONGITUDE_MAX: f64 = 180.0;

/// Localities used to recover the dropped prefix of a short code.
/// Matched in order against the lowercased input text.
pub const REFERENCE_POINTS: [(&str, f64, f64); 3] = [
    ("lake charles", 30.2266, -93.2174),
    ("sulphur", 30.2366, -93.3774),
    ("louisiana", 30.9843, -91.9623),
];

/// A Plus Code, optionally followed by a locality.
///
/// ## JSON Example
///
/// ```json
/// { "text": "5MHH+P8G Lake Charles, Louisiana" }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecodeInput {
    pub text: String,
}

impl DecodeInput {
    /// The code itself: the first whitespace-separated word, uppercased
    pub fn code(&self) -> String {
        self.text
            .split_whitespace()
            .next()
            .unwrap_or_default()
            .to_uppercase()
    }

    /// First reference locality named in the text, if any
    pub fn reference(&self) -> Option<(&'static str, f64, f64)> {
        let lower = self.text.to_lowercase();
        REFERENCE_POINTS
            .into_iter()
            .find(|(name, _, _)| lower.contains(name))
    }

    /// Validate the code and return it with any dropped prefix restored.
    pub fn full_code(&self) -> TradesResult<String> {
        let code = self.code();
        let malformed = || TradesError::parse("code", self.text.trim());

        if code.is_empty() || code.matches(SEPARATOR).count() > 1 {
            return Err(malformed());
        }
        if code
            .chars()
            .any(|c| c != SEPARATOR && !CODE_ALPHABET.contains(c))
        {
            return Err(malformed());
        }

        let is_short = code
            .split_once(SEPARATOR)
            .is_some_and(|(prefix, _)| prefix.len() < FULL_PREFIX_LEN);
        let full = if is_short {
            let Some((_, ref_lat, ref_lon)) = self.reference() else {
                return Err(TradesError::validation(
                    "code",
                    code,
                    "short code needs a known locality (e.g. \"Lake Charles\")",
                ));
            };
            format!("{}{code}", recovery_prefix(ref_lat, ref_lon))
        } else {
            code
        };

        let digits = full.chars().filter(|&c| c != SEPARATOR).count();
        if digits < 2 || digits % 2 != 0 {
            return Err(malformed());
        }
        Ok(full)
    }
}

/// The lat/lon cell a code decodes to, plus its center.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecodeResult {
    /// Code actually decoded, after short-code recovery
    pub full_code: String,
    pub south: f64,
    pub west: f64,
    pub north: f64,
    pub east: f64,
    /// Center latitude in degrees
    pub latitude: f64,
    /// Center longitude in degrees
    pub longitude: f64,
}

fn digit(index: usize) -> char {
    CODE_ALPHABET.as_bytes()[index] as char
}

fn digit_value(c: char) -> f64 {
    CODE_ALPHABET.find(c).unwrap_or_default() as f64
}

/// First two digit pairs of the 20° and 1° cells containing the reference point.
fn recovery_prefix(ref_lat: f64, ref_lon: f64) -> String {
    let lat = ref_lat + LATITUDE_MAX;
    let lon = ref_lon + LONGITUDE_MAX;
    [
        (lat / 20.0) as usize,
        (lon / 20.0) as usize,
        (lat % 20.0) as usize,
        (lon % 20.0) as usize,
    ]
    .into_iter()
    .map(digit)
    .collect()
}

/// Decode a Plus Code, recovering short codes from the locality text.
///
/// # Returns
///
/// * `Ok(DecodeResult)` - Cell bounds and center
/// * `Err(TradesError::Parse)` - Not a Plus Code
/// * `Err(TradesError::Validation)` - Short code without a known locality
pub fn calculate(input: &DecodeInput) -> TradesResult<DecodeResult> {
    let full_code = input.full_code()?;
    let digits: Vec<char> = full_code.chars().filter(|&c| c != SEPARATOR).collect();

    let mut south = 0.0;
    let mut west = 0.0;
    let mut resolution = PAIR_RESOLUTIONS[0];
    for (pair, &res) in digits.chunks_exact(2).zip(PAIR_RESOLUTIONS.iter()) {
        resolution = res;
        south += digit_value(pair[0]) * res;
        west += digit_value(pair[1]) * res;
    }
    south -= LATITUDE_MAX;
    west -= LONGITUDE_MAX;

    let north = south + resolution;
    let east = west + resolution;
    let latitude = (south + north) / 2.0;
    let longitude = (west + east) / 2.0;

    debug!(%full_code, latitude, longitude, "plus code decoded");

    Ok(DecodeResult {
        full_code,
        south,
        west,
        north,
        east,
        latitude,
        longitude,
    })
}
