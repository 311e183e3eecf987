//! Error types for the Vacation Entitlement Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while computing vacation
//! entitlements.

use thiserror::Error;

/// The main error type for the Vacation Entitlement Engine.
///
/// All operations in the engine return this error type, including the
/// collaborator traits, so that a failing application store or calendar
/// propagates to the caller unchanged.
///
/// # Example
///
/// ```
/// use vacation_engine::error::EngineError;
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

    /// An account was rejected before any calculation took place.
    #[error("Invalid account field '{field}': {message}")]
    InvalidAccount {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// An application for leave contained inconsistent data.
    #[error("Invalid application '{application_id}': {message}")]
    InvalidApplication {
        /// The ID of the invalid application.
        application_id: String,
        /// A description of what made the application invalid.
        message: String,
    },

    /// The application query provider failed.
    #[error("Application query failed: {message}")]
    ApplicationQueryFailed {
        /// A description of the failure.
        message: String,
    },

    /// The work-day calendar provider failed.
    #[error("Work-day calendar failed: {message}")]
    CalendarFailed {
        /// A description of the failure.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
