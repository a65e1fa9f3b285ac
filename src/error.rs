//! Error types for twilio-types.
//!
//! This module defines custom error types using `thiserror` for precise error handling.
//! Timestamps and durations have no error type: a bad value degrades to an
//! invalid/zero marker on the value itself instead of failing the record.

use thiserror::Error;

/// Errors that can occur when normalizing a phone number.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PhoneNumberError {
    /// No text was supplied at all
    #[error("No number provided")]
    EmptyNumber,

    /// Text was supplied but contained no usable digits
    #[error("Invalid phone number: {0}")]
    InvalidNumber(String),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with PhoneNumberError
pub type PhoneNumberResult<T> = Result<T, PhoneNumberError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
