//! Twilio Types - canonical values for Twilio API records.
//!
//! Twilio returns phone numbers, timestamps and prices as loosely specified
//! text. This library normalizes them into strict types that compare and
//! serialize predictably, and renders them for display.
//!
//! # Architecture
//!
//! - **domain**: PhoneNumber, TwilioTime, TwilioDuration and price formatting
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration management from environment variables

pub mod config;
pub mod domain;
pub mod error;

pub use config::Config;
pub use domain::{
    format_price, CurrencyUnit, DialingDefaults, PhoneNumber, Price, TwilioDuration, TwilioTime,
};
pub use error::{ConfigError, PhoneNumberError};
