//! Domain value objects exchanged with the Twilio API.
//!
//! These types normalize loosely formatted API text (phone numbers, dates,
//! prices, durations) into strict values and render them for display.
//! Each one is a pure transform; none depends on another.

pub mod dialing;
pub mod duration;
pub mod money;
pub mod phone;
pub mod timestamp;

pub use dialing::DialingDefaults;
pub use duration::TwilioDuration;
pub use money::{format_price, CurrencyUnit, Price};
pub use phone::PhoneNumber;
pub use timestamp::TwilioTime;
