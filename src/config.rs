//! Configuration management for twilio-types.
//!
//! This module handles loading and validating configuration from environment variables,
//! reading a `.env` file first if one is present.

use crate::domain::DialingDefaults;
use crate::error::{ConfigError, ConfigResult};
use std::env;

/// Configuration for phone number normalization and logging.
#[derive(Debug, Clone)]
pub struct Config {
    /// Policy for numbers written without a leading `+` (default: country code 1)
    pub dialing: DialingDefaults,

    /// Log level (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `TWILIO_DEFAULT_COUNTRY_CODE`: Calling code for national numbers (default: 1)
    /// - `LOG_LEVEL`: Logging level (default: "error")
    pub fn from_env() -> ConfigResult<Self> {
        let _ = dotenvy::dotenv();

        let dialing = match env::var("TWILIO_DEFAULT_COUNTRY_CODE") {
            Ok(val) => DialingDefaults::new(&val).ok_or_else(|| ConfigError::InvalidValue {
                var: "TWILIO_DEFAULT_COUNTRY_CODE".to_string(),
                reason: format!("Must be a 1-3 digit calling code, got: {}", val),
            })?,
            Err(_) => DialingDefaults::default(),
        };

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "error".to_string());

        Ok(Config { dialing, log_level })
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            dialing: DialingDefaults::default(),
            log_level: "error".to_string(),
        }
    }
}
