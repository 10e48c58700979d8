//! Command-line surface.
//!
//! clap only handles `--json`, help and version. Calculation commands are
//! captured as an external subcommand so their tokens reach `trades_core`
//! verbatim: a stray `--` or `-74.0060` is an argument like any other, and
//! `12abc` is rejected with the field name by the strict parser.

use clap::{Args, Parser, Subcommand};
use trades_core::CommandKind;

#[derive(Parser, Debug)]
#[command(
    name = "pipe-trades",
    disable_help_flag = true,
    disable_version_flag = true,
    disable_help_subcommand = true,
    allow_external_subcommands = true
)]
pub struct Cli {
    /// Print results as JSON instead of the labeled report
    #[arg(long)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show usage
    #[command(name = "help", short_flag = 'h', long_flag = "help", disable_help_flag = true)]
    Help(RawArgs),
    /// Show version information
    #[command(name = "version", short_flag = 'v', long_flag = "version", disable_help_flag = true)]
    Version(RawArgs),
    /// Any calculation: the command name followed by its raw tokens
    #[command(external_subcommand)]
    External(Vec<String>),
}

/// Tokens after `help`/`version`; accepted and ignored.
#[derive(Args, Debug)]
pub struct RawArgs {
    #[arg(num_args = 0.., allow_hyphen_values = true, trailing_var_arg = true)]
    pub values: Vec<String>,
}

/// What the invocation asks for once argv is understood.
#[derive(Debug, PartialEq)]
pub enum Action {
    Calculate(CommandKind, Vec<String>),
    Usage,
    Version,
    Unknown(String),
    /// No command given
    Missing,
}

impl From<Option<Commands>> for Action {
    fn from(command: Option<Commands>) -> Self {
        match command {
            None => Action::Missing,
            Some(Commands::Help(_)) => Action::Usage,
            Some(Commands::Version(_)) => Action::Version,
            Some(Commands::External(words)) => {
                let mut words = words.into_iter();
                let Some(name) = words.next() else {
                    return Action::Missing;
                };
                match name.parse::<CommandKind>() {
                    Ok(kind) => Action::Calculate(kind, words.collect()),
                    Err(_) => Action::Unknown(name),
                }
            }
        }
    }
}
