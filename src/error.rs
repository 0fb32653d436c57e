//! Error types for the Deal-Day Calculation Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur during deal-day calculation.

use chrono::NaiveDate;
use thiserror::Error;

/// The main error type for the Deal-Day Calculation Engine.
///
/// All fallible operations in the engine return this error type, making it
/// easy to handle errors consistently throughout the hosting application.
///
/// # Example
///
/// ```
/// use dealday_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/calendar.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/calendar.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
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

    /// Holiday calendar code was not found in the configuration.
    #[error("Holiday calendar not found: {code}")]
    CalendarNotFound {
        /// The calendar code that was not found.
        code: String,
    },

    /// An engagement period ended before it started.
    #[error("Invalid engagement period: end date {end} is before start date {start}")]
    InvalidPeriod {
        /// The start date of the rejected period.
        start: NaiveDate,
        /// The end date of the rejected period.
        end: NaiveDate,
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
