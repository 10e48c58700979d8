//! # Command Table
//!
//! Maps a command name and its raw argument tokens onto a calculation.
//! Argument counts are checked first, then every token is parsed strictly
//! left to right, then the calculation runs. Surplus tokens are ignored.
//!
//! ## Example
//!
//! ```rust
//! use trades_core::commands::{run, CommandKind};
//! use trades_core::calculations::CalculationReport;
//!
//! let kind: CommandKind = "beam-wrap".parse().unwrap();
//! let report = run(kind, &["12", "10"]).unwrap();
//! assert!(matches!(report, CalculationReport::BeamWrap { .. }));
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::calculations::{
    angle_offset, beam_band, beam_wrap, calibrate, cutback, gps, hypotenuse, plus_code,
    rolling_offset, AngleOffsetInput, BeamBandInput, BeamWrapInput, CalculationReport,
    CalibrateInput, Coordinate, CutbackInput, DecodeInput, GpsInput, HypotenuseInput,
    RollingOffsetInput,
};
use crate::errors::{TradesError, TradesResult};
use crate::parse::{parse_count, parse_fields, parse_number};

/// Unit label used by `calibrate` when none is given
pub const DEFAULT_CALIBRATION_UNIT: &str = "ft";

// Required positional fields, in order
const GPS_FIELDS: [&str; 4] = ["lat1", "lon1", "lat2", "lon2"];
const DECODE_FIELDS: [&str; 1] = ["code"];
const BEAM_WRAP_FIELDS: [&str; 2] = ["diameter", "length"];
const BEAM_BAND_FIELDS: [&str; 1] = ["circumference"];
const ROLLING_OFFSET_FIELDS: [&str; 3] = ["offset", "roll", "travel"];
const ANGLE_OFFSET_FIELDS: [&str; 2] = ["angle", "offset"];
const CUTBACK_FIELDS: [&str; 2] = ["angle", "diameter"];
const CALIBRATE_FIELDS: [&str; 2] = ["satellite", "field"];
const HYPOTENUSE_FIELDS: [&str; 2] = ["run", "rise"];

/// Every calculation reachable from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CommandKind {
    GpsVerify,
    Decode,
    BeamWrap,
    BeamBand,
    RollingOffset,
    #[serde(rename = "offset")]
    AngleOffset,
    Cutback,
    Calibrate,
    #[serde(rename = "hyp")]
    Hypotenuse,
}

impl CommandKind {
    /// All commands in usage order
    pub const ALL: [CommandKind; 9] = [
        CommandKind::GpsVerify,
        CommandKind::Decode,
        CommandKind::BeamWrap,
        CommandKind::BeamBand,
        CommandKind::RollingOffset,
        CommandKind::AngleOffset,
        CommandKind::Cutback,
        CommandKind::Calibrate,
        CommandKind::Hypotenuse,
    ];

    /// Name typed on the command line
    pub fn name(&self) -> &'static str {
        match self {
            CommandKind::GpsVerify => "gps-verify",
            CommandKind::Decode => "decode",
            CommandKind::BeamWrap => "beam-wrap",
            CommandKind::BeamBand => "beam-band",
            CommandKind::RollingOffset => "rolling-offset",
            CommandKind::AngleOffset => "offset",
            CommandKind::Cutback => "cutback",
            CommandKind::Calibrate => "calibrate",
            CommandKind::Hypotenuse => "hyp",
        }
    }

    /// Names of the required arguments, in order
    pub fn fields(&self) -> &'static [&'static str] {
        match self {
            CommandKind::GpsVerify => &GPS_FIELDS,
            CommandKind::Decode => &DECODE_FIELDS,
            CommandKind::BeamWrap => &BEAM_WRAP_FIELDS,
            CommandKind::BeamBand => &BEAM_BAND_FIELDS,
            CommandKind::RollingOffset => &ROLLING_OFFSET_FIELDS,
            CommandKind::AngleOffset => &ANGLE_OFFSET_FIELDS,
            CommandKind::Cutback => &CUTBACK_FIELDS,
            CommandKind::Calibrate => &CALIBRATE_FIELDS,
            CommandKind::Hypotenuse => &HYPOTENUSE_FIELDS,
        }
    }

    /// Most arguments the command reads; `None` when it takes free text
    pub fn max_args(&self) -> Option<usize> {
        match self {
            CommandKind::Decode => None,
            CommandKind::BeamBand => Some(4),
            CommandKind::Calibrate => Some(3),
            _ => Some(self.required_args()),
        }
    }

    /// Minimum number of positional arguments
    pub fn required_args(&self) -> usize {
        self.fields().len()
    }

    /// Completes the sentence "<command> requires ..."
    pub fn requirement(&self) -> &'static str {
        match self {
            CommandKind::GpsVerify => "4 coordinates (lat1 lon1 lat2 lon2)",
            CommandKind::Decode => "a plus code",
            CommandKind::BeamWrap => "diameter and length",
            CommandKind::BeamBand => "beam circumference",
            CommandKind::RollingOffset => "offset, roll, and travel values",
            CommandKind::AngleOffset => "angle and offset",
            CommandKind::Cutback => "angle and diameter",
            CommandKind::Calibrate => "satellite and field measurements",
            CommandKind::Hypotenuse => "run and rise",
        }
    }

    /// Argument synopsis for usage text
    pub fn synopsis(&self) -> &'static str {
        match self {
            CommandKind::GpsVerify => "<lat1> <lon1> <lat2> <lon2>",
            CommandKind::Decode => "<code> [locality]",
            CommandKind::BeamWrap => "<diameter> <length>",
            CommandKind::BeamBand => "<circ> [shoes] [boot] [rise]",
            CommandKind::RollingOffset => "<offset> <roll> <travel>",
            CommandKind::AngleOffset => "<angle> <offset>",
            CommandKind::Cutback => "<angle> <diameter>",
            CommandKind::Calibrate => "<satellite> <field> [unit]",
            CommandKind::Hypotenuse => "<run> <rise>",
        }
    }

    /// One-line description for usage text
    pub fn summary(&self) -> &'static str {
        match self {
            CommandKind::GpsVerify => "Verify GPS coordinates and calculate distance",
            CommandKind::Decode => "Decode a Plus Code to latitude/longitude",
            CommandKind::BeamWrap => "Estimate beam wrap material needed",
            CommandKind::BeamBand => "Estimate bands and mesh panels for a beam",
            CommandKind::RollingOffset => "Calculate rolling offset dimensions",
            CommandKind::AngleOffset => "Calculate travel and advance for an angle offset",
            CommandKind::Cutback => "Calculate miter cutback for a fitting angle",
            CommandKind::Calibrate => "Check a field measurement against satellite",
            CommandKind::Hypotenuse => "Calculate travel from run and rise",
        }
    }
}

impl fmt::Display for CommandKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CommandKind {
    type Err = TradesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CommandKind::ALL
            .into_iter()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| TradesError::unknown_command(s))
    }
}

/// Run `kind` against its raw argument tokens.
///
/// # Returns
///
/// * `Ok(CalculationReport)` - Parsed input and computed result
/// * `Err(TradesError::ArgumentCount)` - Too few tokens
/// * `Err(TradesError::Parse)` - First token that is not a number
/// * `Err(TradesError::Validation)` - Domain constraint violated
pub fn run<S: AsRef<str>>(kind: CommandKind, args: &[S]) -> TradesResult<CalculationReport> {
    if args.len() < kind.required_args() {
        return Err(TradesError::argument_count(
            kind.name(),
            kind.required_args(),
            args.len(),
            kind.requirement(),
        ));
    }
    if let Some(max) = kind.max_args().filter(|&max| args.len() > max) {
        debug!(command = kind.name(), extra = args.len() - max, "ignoring surplus arguments");
    }

    let report = match kind {
        CommandKind::GpsVerify => {
            let [lat1, lon1, lat2, lon2] = parse_fields(args, GPS_FIELDS)?;
            let input = GpsInput {
                point1: Coordinate::new(lat1, lon1),
                point2: Coordinate::new(lat2, lon2),
            };
            CalculationReport::GpsVerify {
                input,
                result: gps::calculate(&input),
            }
        }
        CommandKind::Decode => {
            let words: Vec<&str> = args.iter().map(AsRef::as_ref).collect();
            let input = DecodeInput {
                text: words.join(" "),
            };
            let result = plus_code::calculate(&input)?;
            CalculationReport::Decode { input, result }
        }
        CommandKind::BeamWrap => {
            let [diameter_in, length_ft] = parse_fields(args, BEAM_WRAP_FIELDS)?;
            let input = BeamWrapInput {
                diameter_in,
                length_ft,
            };
            CalculationReport::BeamWrap {
                input,
                result: beam_wrap::calculate(&input)?,
            }
        }
        CommandKind::BeamBand => {
            let [circumference_in] = parse_fields(args, BEAM_BAND_FIELDS)?;
            let shoes = match args.get(1) {
                Some(token) => parse_count(token.as_ref(), "shoes")?,
                None => 0,
            };
            let input = BeamBandInput {
                circumference_in,
                shoes,
                boot_in: optional_number(args, 2, "boot")?,
                rise_in: optional_number(args, 3, "rise")?,
            };
            CalculationReport::BeamBand {
                input,
                result: beam_band::calculate(&input)?,
            }
        }
        CommandKind::RollingOffset => {
            let [offset_in, roll_in, travel_in] = parse_fields(args, ROLLING_OFFSET_FIELDS)?;
            let input = RollingOffsetInput {
                offset_in,
                roll_in,
                travel_in,
            };
            CalculationReport::RollingOffset {
                input,
                result: rolling_offset::calculate(&input)?,
            }
        }
        CommandKind::AngleOffset => {
            let [angle_deg, offset_in] = parse_fields(args, ANGLE_OFFSET_FIELDS)?;
            let input = AngleOffsetInput { angle_deg, offset_in };
            CalculationReport::AngleOffset {
                input,
                result: angle_offset::calculate(&input)?,
            }
        }
        CommandKind::Cutback => {
            let [angle_deg, diameter_in] = parse_fields(args, CUTBACK_FIELDS)?;
            let input = CutbackInput {
                angle_deg,
                diameter_in,
            };
            CalculationReport::Cutback {
                input,
                result: cutback::calculate(&input)?,
            }
        }
        CommandKind::Calibrate => {
            let [satellite, field] = parse_fields(args, CALIBRATE_FIELDS)?;
            let unit = args
                .get(2)
                .map_or(DEFAULT_CALIBRATION_UNIT, |u| u.as_ref())
                .to_string();
            let input = CalibrateInput { satellite, field, unit };
            let result = calibrate::calculate(&input)?;
            CalculationReport::Calibrate { input, result }
        }
        CommandKind::Hypotenuse => {
            let [run_in, rise_in] = parse_fields(args, HYPOTENUSE_FIELDS)?;
            let input = HypotenuseInput { run_in, rise_in };
            CalculationReport::Hypotenuse {
                input,
                result: hypotenuse::calculate(&input),
            }
        }
    };

    Ok(report)
}

/// Parse `args[index]` if present; absent trailing arguments default to 0.
fn optional_number<S: AsRef<str>>(args: &[S], index: usize, field: &str) -> TradesResult<f64> {
    args.get(index)
        .map_or(Ok(0.0), |token| parse_number(token.as_ref(), field))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_round_trip_through_from_str() {
        for kind in CommandKind::ALL {
            assert_eq!(kind.name().parse::<CommandKind>().unwrap(), kind);
        }
    }

    #[test]
    fn test_unknown_command() {
        let err = "frobnicate".parse::<CommandKind>().unwrap_err();
        assert_eq!(err, TradesError::unknown_command("frobnicate"));
        assert_eq!(err.to_string(), "Unknown command 'frobnicate'");
    }

    #[test]
    fn test_serde_names_match_command_names() {
        for kind in CommandKind::ALL {
            let json = serde_json::to_string(&kind).unwrap();
            assert_eq!(json, format!("\"{}\"", kind.name()));
        }
    }

    #[test]
    fn test_argument_count_messages() {
        let err = run::<&str>(CommandKind::GpsVerify, &["1", "2", "3"]).unwrap_err();
        assert_eq!(err.to_string(), "gps-verify requires 4 coordinates (lat1 lon1 lat2 lon2)");

        let err = run::<&str>(CommandKind::BeamWrap, &[]).unwrap_err();
        assert_eq!(err.to_string(), "beam-wrap requires diameter and length");

        let err = run(CommandKind::RollingOffset, &["3", "4"]).unwrap_err();
        assert_eq!(err.to_string(), "rolling-offset requires offset, roll, and travel values");
        assert_eq!(
            err,
            TradesError::argument_count("rolling-offset", 3, 2, "offset, roll, and travel values")
        );
    }

    #[test]
    fn test_count_checked_before_parsing() {
        let err = run(CommandKind::BeamWrap, &["abc"]).unwrap_err();
        assert_eq!(err.error_code(), "ARGUMENT_COUNT");
    }

    #[test]
    fn test_first_bad_token_reported() {
        let err = run(CommandKind::GpsVerify, &["40.7", "oops", "34.0", "x"]).unwrap_err();
        assert_eq!(err, TradesError::parse("lon1", "oops"));
    }

    #[test]
    fn test_parse_error_before_validation() {
        let err = run(CommandKind::RollingOffset, &["3", "4", "0abc"]).unwrap_err();
        assert_eq!(err, TradesError::parse("travel", "0abc"));
    }

    #[test]
    fn test_surplus_arguments_ignored() {
        let report = run(CommandKind::BeamWrap, &["12", "10", "extra", "junk"]).unwrap();
        match report {
            CalculationReport::BeamWrap { input, .. } => {
                assert_eq!(input.diameter_in, 12.0);
                assert_eq!(input.length_ft, 10.0);
            }
            other => panic!("unexpected report: {}", other.calc_type()),
        }
    }

    #[test]
    fn test_calibrate_unit_defaults_to_feet() {
        let report = run(CommandKind::Calibrate, &["305", "301"]).unwrap();
        match report {
            CalculationReport::Calibrate { input, .. } => assert_eq!(input.unit, "ft"),
            other => panic!("unexpected report: {}", other.calc_type()),
        }

        let report = run(CommandKind::Calibrate, &["93", "92.5", "m"]).unwrap();
        match report {
            CalculationReport::Calibrate { input, .. } => assert_eq!(input.unit, "m"),
            other => panic!("unexpected report: {}", other.calc_type()),
        }
    }

    #[test]
    fn test_fields_match_required_args() {
        assert_eq!(CommandKind::GpsVerify.required_args(), 4);
        assert_eq!(CommandKind::RollingOffset.required_args(), 3);
        assert_eq!(CommandKind::Calibrate.required_args(), 2);
        assert_eq!(CommandKind::BeamBand.required_args(), 1);
        assert_eq!(CommandKind::Decode.required_args(), 1);
    }

    #[test]
    fn test_parse_errors_name_the_listed_field() {
        for kind in CommandKind::ALL {
            let args = vec!["x"; kind.required_args()];
            let err = run(kind, &args).unwrap_err();
            assert_eq!(err, TradesError::parse(kind.fields()[0], "x"), "{kind}");
        }
    }

    #[test]
    fn test_beam_band_optional_arguments() {
        let report = run(CommandKind::BeamBand, &["44", "4", "6"]).unwrap();
        match report {
            CalculationReport::BeamBand { input, result } => {
                assert_eq!(input.shoes, 4);
                assert_eq!(input.rise_in, 0.0);
                assert_eq!(result.run_in, 62.0);
            }
            other => panic!("unexpected report: {}", other.calc_type()),
        }

        let err = run(CommandKind::BeamBand, &["44", "2.5"]).unwrap_err();
        assert_eq!(err, TradesError::parse("shoes", "2.5"));

        let err = run(CommandKind::BeamBand, &["44", "4", "6", "up"]).unwrap_err();
        assert_eq!(err, TradesError::parse("rise", "up"));
    }

    #[test]
    fn test_decode_joins_locality_words() {
        let report = run(CommandKind::Decode, &["5MHH+P8G", "Lake", "Charles,", "Louisiana"]).unwrap();
        match report {
            CalculationReport::Decode { input, result } => {
                assert_eq!(input.text, "5MHH+P8G Lake Charles, Louisiana");
                assert_eq!(result.full_code, "86285MHH+P8G");
            }
            other => panic!("unexpected report: {}", other.calc_type()),
        }
    }
}
