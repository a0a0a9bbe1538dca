//! Error types for the SLA engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while configuring or evaluating
//! an SLA.

use thiserror::Error;

/// The main error type for the SLA engine.
///
/// All fallible operations in the crate return this error type, making it
/// easy to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use sla_checker::error::EngineError;
///
/// let error = EngineError::InvalidDurationUnit {
///     unit: "fortnights".to_string(),
/// };
/// assert_eq!(error.to_string(), "Invalid duration unit: fortnights");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// The SLA duration unit is not one of seconds, minutes, hours or days.
    #[error("Invalid duration unit: {unit}")]
    InvalidDurationUnit {
        /// The unit that was rejected.
        unit: String,
    },

    /// An SLA configuration failed validation.
    #[error("Invalid SLA configuration field '{field}': {message}")]
    InvalidConfig {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A named SLA policy was not found in the configuration.
    #[error("SLA policy not found: {name}")]
    PolicyNotFound {
        /// The policy name that was not found.
        name: String,
    },

    /// The holiday source could not provide holidays.
    #[error("Holiday source error: {message}")]
    HolidaySource {
        /// A description of the failure.
        message: String,
    },

    /// A general calculation error occurred.
    #[error("Calculation error: {message}")]
    CalculationError {
        /// A description of the calculation error.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
