//! Error types for the Roster Analytics Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for the error conditions that can occur around roster analysis. The
//! analytic computations themselves are infallible; errors originate from
//! invalid periods, configuration loading, or the roster data source.

use thiserror::Error;

/// The main error type for the Roster Analytics Engine.
///
/// # Example
///
/// ```
/// use roster_analytics::error::AnalyticsError;
///
/// let error = AnalyticsError::InvalidPeriod { year: 2026, month: 13 };
/// assert_eq!(error.to_string(), "Invalid roster period: 2026-13");
/// ```
#[derive(Debug, Error)]
pub enum AnalyticsError {
    /// The requested year/month is not a valid calendar month.
    #[error("Invalid roster period: {year}-{month:02}")]
    InvalidPeriod {
        /// The requested year.
        year: i32,
        /// The requested month (expected 1-12).
        month: u32,
    },

    /// The roster data source could not supply records.
    #[error("Roster data unavailable: {message}")]
    RosterUnavailable {
        /// A description of the data source failure.
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

    /// Configuration parsed but holds values the engine cannot use.
    #[error("Invalid configuration value '{field}': {message}")]
    InvalidConfig {
        /// The offending configuration field.
        field: String,
        /// Why the value was rejected.
        message: String,
    },
}

/// A type alias for Results that return AnalyticsError.
pub type AnalyticsResult<T> = Result<T, AnalyticsError>;
