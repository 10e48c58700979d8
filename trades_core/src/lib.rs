//! # trades_core - Field Calculation Engine for Pipe Trades
//!
//! `trades_core` holds the numeric side of the Pipe Trades CLI: strict
//! parsing of command-line tokens, the field formulas used by pipefitting
//! and rope-access crews, and the command table that ties them together.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and return results
//! - **Fail early**: Parsing and validation errors are returned before any
//!   result exists, never printed or turned into a process exit here
//! - **JSON-First**: All inputs, results and errors implement Serialize/Deserialize
//!
//! ## Quick Start
//!
//! ```rust
//! use trades_core::commands::{run, CommandKind};
//! use trades_core::calculations::CalculationReport;
//!
//! let report = run(CommandKind::RollingOffset, &["3", "4", "20"]).unwrap();
//! if let CalculationReport::RollingOffset { result, .. } = report {
//!     assert_eq!(result.set_in, 9.375);
//! }
//! ```
//!
//! ## Modules
//!
//! - [`parse`] - Strict numeric token parsing
//! - [`calculations`] - GPS distance, beam wrap, rolling offset and friends
//! - [`commands`] - Command names, argument counts and dispatch
//! - [`units`] - Type-safe unit wrappers and fixed conversions
//! - [`errors`] - Structured error types

pub mod calculations;
pub mod commands;
pub mod errors;
pub mod parse;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use calculations::CalculationReport;
pub use commands::{run, CommandKind};
pub use errors::{TradesError, TradesResult};
pub use parse::parse_number;
