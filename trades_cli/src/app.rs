//! Top-level flow for one invocation: argv in, text out, exit status back.

use std::ffi::OsString;
use std::io::{self, Write};

use clap::Parser;
use tracing::debug;
use trades_core::{run, CommandKind, TradesError};

use crate::cli::{Action, Cli};
use crate::report;

/// Process exit status for success (including help and version)
pub const EXIT_SUCCESS: u8 = 0;

/// Process exit status for every argument, parse and validation failure
pub const EXIT_FAILURE: u8 = 1;

const PROGRAM_NAME: &str = "pipe-trades";

const TAGLINE: &str = "Built for rope access crews doing fireproofing containment";

/// Write the usage text; `program` is argv[0] as invoked.
pub fn write_usage<W: Write>(out: &mut W, program: &str) -> io::Result<()> {
    writeln!(out, "Pipe Trades CLI - Field-calibrated pipefitter calculation ecosystem")?;
    writeln!(out, "Version {}", env!("CARGO_PKG_VERSION"))?;
    writeln!(out)?;
    writeln!(out, "Usage: {program} [--json] <command> [options]")?;
    writeln!(out)?;
    writeln!(out, "Commands:")?;
    for kind in CommandKind::ALL {
        let invocation = format!("{} {}", kind.name(), kind.synopsis());
        writeln!(out, "  {invocation:<42}- {}", kind.summary())?;
    }
    writeln!(out, "  {:<42}- Show this help message", "help")?;
    writeln!(out, "  {:<42}- Show version information", "version")?;
    writeln!(out)?;
    writeln!(out, "Options:")?;
    writeln!(out, "  {:<42}- Print results as JSON", "--json")
}

/// Write the version banner.
pub fn write_version<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "Pipe Trades CLI version {}", env!("CARGO_PKG_VERSION"))?;
    writeln!(out, "{TAGLINE}")
}

/// Convert OS arguments to strings. Invalid UTF-8 becomes U+FFFD, which
/// the numeric parser then rejects like any other bad token.
pub fn lossy_argv<I: IntoIterator<Item = OsString>>(args: I) -> Vec<String> {
    args.into_iter()
        .map(|arg| arg.to_string_lossy().into_owned())
        .collect()
}

/// Run one invocation against `argv` (program name first).
///
/// Results go to `out`, diagnostics to `err`. Returns the exit status.
pub fn execute<O: Write, E: Write>(argv: &[String], out: &mut O, err: &mut E) -> io::Result<u8> {
    let program = argv.first().map_or(PROGRAM_NAME, String::as_str);

    let (json, action) = match Cli::try_parse_from(argv) {
        Ok(cli) => (cli.json, Action::from(cli.command)),
        Err(e) => {
            debug!(error = %e, "argv rejected by parser");
            let token = argv.get(1).cloned().unwrap_or_default();
            (false, Action::Unknown(token))
        }
    };

    match action {
        Action::Missing => {
            write_usage(out, program)?;
            Ok(EXIT_FAILURE)
        }
        Action::Usage => {
            write_usage(out, program)?;
            Ok(EXIT_SUCCESS)
        }
        Action::Version => {
            write_version(out)?;
            Ok(EXIT_SUCCESS)
        }
        Action::Unknown(command) => {
            fail(out, err, program, &TradesError::unknown_command(command), json)
        }
        Action::Calculate(kind, args) => match run(kind, args.as_slice()) {
            Ok(calculation) => {
                if json {
                    report::write_json(out, &calculation)?;
                } else {
                    report::write_text(out, &calculation)?;
                }
                Ok(EXIT_SUCCESS)
            }
            Err(e) => fail(out, err, program, &e, json),
        },
    }
}

fn fail<O: Write, E: Write>(
    out: &mut O,
    err: &mut E,
    program: &str,
    error: &TradesError,
    json: bool,
) -> io::Result<u8> {
    report::write_error(err, error, json)?;
    if error.shows_usage() {
        writeln!(err)?;
        write_usage(out, program)?;
    }
    Ok(EXIT_FAILURE)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Captured {
        code: u8,
        stdout: String,
        stderr: String,
    }

    fn invoke(args: &[&str]) -> Captured {
        let argv: Vec<String> = std::iter::once("pipe-trades")
            .chain(args.iter().copied())
            .map(String::from)
            .collect();
        let mut out = Vec::new();
        let mut err = Vec::new();
        let code = execute(&argv, &mut out, &mut err).unwrap();
        Captured {
            code,
            stdout: String::from_utf8(out).unwrap(),
            stderr: String::from_utf8(err).unwrap(),
        }
    }

    #[test]
    fn test_no_arguments_prints_usage_and_fails() {
        let outcome = invoke(&[]);
        assert_eq!(outcome.code, EXIT_FAILURE);
        assert!(outcome.stdout.starts_with("Pipe Trades CLI - Field-calibrated"));
        assert!(outcome.stdout.contains("Usage: pipe-trades [--json] <command> [options]"));
        assert!(outcome.stderr.is_empty());
    }

    #[test]
    fn test_help_succeeds() {
        for flag in ["help", "--help", "-h"] {
            let outcome = invoke(&[flag]);
            assert_eq!(outcome.code, EXIT_SUCCESS);
            assert!(outcome.stdout.contains(
                "  gps-verify <lat1> <lon1> <lat2> <lon2>    - Verify GPS coordinates and calculate distance\n"
            ));
        }
    }

    #[test]
    fn test_version_succeeds() {
        let outcome = invoke(&["--version"]);
        assert_eq!(outcome.code, EXIT_SUCCESS);
        assert_eq!(
            outcome.stdout,
            format!(
                "Pipe Trades CLI version {}\nBuilt for rope access crews doing fireproofing containment\n",
                env!("CARGO_PKG_VERSION")
            )
        );
    }

    #[test]
    fn test_unknown_command() {
        let outcome = invoke(&["frobnicate"]);
        assert_eq!(outcome.code, EXIT_FAILURE);
        assert_eq!(outcome.stderr, "Error: Unknown command 'frobnicate'\n\n");
        assert!(outcome.stdout.contains("Commands:"));
    }

    #[test]
    fn test_unknown_flag_is_unknown_command() {
        let outcome = invoke(&["--bogus"]);
        assert_eq!(outcome.code, EXIT_FAILURE);
        assert!(outcome.stderr.starts_with("Error: Unknown command '--bogus'"));
    }

    #[test]
    fn test_too_few_arguments() {
        let outcome = invoke(&["gps-verify", "40.7128", "-74.0060"]);
        assert_eq!(outcome.code, EXIT_FAILURE);
        assert_eq!(outcome.stderr, "Error: gps-verify requires 4 coordinates (lat1 lon1 lat2 lon2)\n");
        assert!(outcome.stdout.is_empty());
    }

    #[test]
    fn test_parse_error_produces_no_result_output() {
        let outcome = invoke(&["beam-wrap", "12abc", "10"]);
        assert_eq!(outcome.code, EXIT_FAILURE);
        assert_eq!(outcome.stderr, "Error: Invalid number for 'diameter': '12abc'\n");
        assert!(outcome.stdout.is_empty());
    }

    #[test]
    fn test_validation_error() {
        let outcome = invoke(&["rolling-offset", "3", "4", "0"]);
        assert_eq!(outcome.code, EXIT_FAILURE);
        assert_eq!(
            outcome.stderr,
            "Error: Invalid input for 'travel': 0 - travel cannot be zero or near zero\n"
        );
    }

    #[test]
    fn test_successful_calculation() {
        let outcome = invoke(&["rolling-offset", "3", "4", "20"]);
        assert_eq!(outcome.code, EXIT_SUCCESS);
        assert!(outcome.stdout.contains("Diagonal travel: 7.07 inches\n"));
        assert!(outcome.stderr.is_empty());
    }

    #[test]
    fn test_double_dash_is_a_bad_number() {
        let outcome = invoke(&["rolling-offset", "--", "3", "4", "20"]);
        assert_eq!(outcome.code, EXIT_FAILURE);
        assert_eq!(outcome.stderr, "Error: Invalid number for 'offset': '--'\n");
        assert!(outcome.stdout.is_empty());
    }

    #[cfg(unix)]
    #[test]
    fn test_non_utf8_argument_is_a_parse_error() {
        use std::os::unix::ffi::OsStringExt;

        let argv = lossy_argv([
            OsString::from("pipe-trades"),
            OsString::from("beam-wrap"),
            OsString::from_vec(vec![b'1', 0xff]),
            OsString::from("10"),
        ]);
        let mut out = Vec::new();
        let mut err = Vec::new();
        let code = execute(&argv, &mut out, &mut err).unwrap();
        assert_eq!(code, EXIT_FAILURE);
        assert_eq!(
            String::from_utf8(err).unwrap(),
            "Error: Invalid number for 'diameter': '1\u{FFFD}'\n"
        );
        assert!(out.is_empty());
    }

    #[test]
    fn test_supplementary_commands() {
        let outcome = invoke(&["beam-band", "44", "4", "6", "30"]);
        assert_eq!(outcome.code, EXIT_SUCCESS);
        assert!(outcome.stdout.contains("Band qty: 3\n"));

        let outcome = invoke(&["decode", "5MHH+P8G"]);
        assert_eq!(outcome.code, EXIT_FAILURE);
        assert!(outcome.stderr.starts_with("Error: Invalid input for 'code': 5MHH+P8G"));
    }

    #[test]
    fn test_json_mode() {
        let outcome = invoke(&["--json", "gps-verify", "0", "0", "0", "0"]);
        assert_eq!(outcome.code, EXIT_SUCCESS);
        let value: serde_json::Value = serde_json::from_str(&outcome.stdout).unwrap();
        assert_eq!(value["type"], "GpsVerify");
        assert_eq!(value["result"]["distance_m"], 0.0);

        let outcome = invoke(&["--json", "beam-wrap", "0", "10"]);
        assert_eq!(outcome.code, EXIT_FAILURE);
        assert!(outcome.stderr.contains("\"type\": \"Validation\""));
    }
}
