//! # Error Types
//!
//! Structured error types for trades_core. Every command either produces a
//! complete result record or fails with one of these before any output is
//! written, so the caller owns the mapping to exit codes.
//!
//! ## Example
//!
//! ```rust
//! use trades_core::errors::{TradesError, TradesResult};
//!
//! fn validate_length(length_ft: f64) -> TradesResult<()> {
//!     if length_ft <= 0.0 {
//!         return Err(TradesError::validation(
//!             "length",
//!             length_ft.to_string(),
//!             "must be positive",
//!         ));
//!     }
//!     Ok(())
//! }
//!
//! assert!(validate_length(-1.0).is_err());
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for trades_core operations
pub type TradesResult<T> = Result<T, TradesError>;

/// Structured error type for command and calculation failures.
///
/// All variants are terminal for a single invocation.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum TradesError {
    /// Fewer positional arguments than the command needs
    #[error("{command} requires {requirement}")]
    ArgumentCount {
        command: String,
        required: usize,
        found: usize,
        requirement: String,
    },

    /// A token is not a well-formed number
    #[error("Invalid number for '{field}': '{value}'")]
    Parse { field: String, value: String },

    /// A parsed value violates a domain constraint
    #[error("Invalid input for '{field}': {value} - {reason}")]
    Validation {
        field: String,
        value: String,
        reason: String,
    },

    /// The command token matches no known command
    #[error("Unknown command '{command}'")]
    UnknownCommand { command: String },
}

impl TradesError {
    /// Create an ArgumentCount error
    pub fn argument_count(
        command: impl Into<String>,
        required: usize,
        found: usize,
        requirement: impl Into<String>,
    ) -> Self {
        TradesError::ArgumentCount {
            command: command.into(),
            required,
            found,
            requirement: requirement.into(),
        }
    }

    /// Create a Parse error
    pub fn parse(field: impl Into<String>, value: impl Into<String>) -> Self {
        TradesError::Parse {
            field: field.into(),
            value: value.into(),
        }
    }

    /// Create a Validation error
    pub fn validation(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        TradesError::Validation {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create an UnknownCommand error
    pub fn unknown_command(command: impl Into<String>) -> Self {
        TradesError::UnknownCommand {
            command: command.into(),
        }
    }

    /// Whether the usage text should follow the error message
    pub fn shows_usage(&self) -> bool {
        matches!(self, TradesError::UnknownCommand { .. })
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            TradesError::ArgumentCount { .. } => "ARGUMENT_COUNT",
            TradesError::Parse { .. } => "PARSE_ERROR",
            TradesError::Validation { .. } => "VALIDATION_ERROR",
            TradesError::UnknownCommand { .. } => "UNKNOWN_COMMAND",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = TradesError::validation("diameter", "0", "must be positive");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"type\":\"Validation\""));
        let roundtrip: TradesError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(TradesError::parse("lat1", "abc").error_code(), "PARSE_ERROR");
        assert_eq!(TradesError::unknown_command("frobnicate").error_code(), "UNKNOWN_COMMAND");
        assert_eq!(
            TradesError::argument_count("beam-wrap", 2, 1, "diameter and length").error_code(),
            "ARGUMENT_COUNT"
        );
    }

    #[test]
    fn test_argument_count_message() {
        let error = TradesError::argument_count(
            "gps-verify",
            4,
            2,
            "4 coordinates (lat1 lon1 lat2 lon2)",
        );
        assert_eq!(
            error.to_string(),
            "gps-verify requires 4 coordinates (lat1 lon1 lat2 lon2)"
        );
    }

    #[test]
    fn test_only_unknown_command_shows_usage() {
        assert!(TradesError::unknown_command("x").shows_usage());
        assert!(!TradesError::parse("x", "y").shows_usage());
    }
}
