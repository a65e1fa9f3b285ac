//! TwilioTime: an RFC 2822 timestamp that tolerates bad input.
//!
//! API records carry dates such as `"Tue, 20 Sep 2016 22:59:57 +0000"`, and
//! sometimes `null`, an empty string or no key at all. A field that fails to
//! parse is marked invalid instead of failing the whole record.
//!
//! The day-of-week prefix is only checked for being a weekday name; a
//! weekday that disagrees with the date does not invalidate it.

use chrono::{DateTime, FixedOffset, Utc};
use serde::de::{self, IgnoredAny, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use tracing::warn;

/// A timestamp together with a validity flag.
///
/// When `valid` is false, `time` is the Unix epoch and carries no meaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TwilioTime {
    /// The parsed instant, with the offset it was written in
    pub time: DateTime<FixedOffset>,

    /// Whether `time` came from a successful parse
    pub valid: bool,
}

/// Raw JSON shapes accepted for a timestamp field.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawTime {
    Text(String),
    Other(IgnoredAny),
}

const WEEKDAYS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

/// Drop a leading `Mon, ` so chrono does not cross-check it against the date.
fn strip_weekday(text: &str) -> &str {
    match text.split_once(',') {
        Some((day, rest)) if WEEKDAYS.contains(&day.trim()) => rest.trim_start(),
        _ => text,
    }
}

impl TwilioTime {
    /// Parse RFC 2822 text. Never fails; bad input yields an invalid time.
    pub fn parse(raw: &str) -> Self {
        match DateTime::parse_from_rfc2822(strip_weekday(raw.trim())) {
            Ok(time) => Self { time, valid: true },
            Err(e) => {
                if !raw.is_empty() {
                    warn!(raw, error = %e, "Unparseable timestamp, marking invalid");
                }
                Self::invalid()
            }
        }
    }

    /// The invalid (absent) timestamp.
    pub fn invalid() -> Self {
        Self {
            time: DateTime::<Utc>::UNIX_EPOCH.fixed_offset(),
            valid: false,
        }
    }

    /// A valid timestamp for `time`.
    pub fn new(time: DateTime<FixedOffset>) -> Self {
        Self { time, valid: true }
    }

    /// The instant, if valid.
    pub fn as_option(&self) -> Option<DateTime<FixedOffset>> {
        self.valid.then_some(self.time)
    }
}

impl Default for TwilioTime {
    fn default() -> Self {
        Self::invalid()
    }
}

impl From<DateTime<FixedOffset>> for TwilioTime {
    fn from(time: DateTime<FixedOffset>) -> Self {
        Self::new(time)
    }
}

// Serde support - valid times as RFC 2822 text, invalid ones as null
impl Serialize for TwilioTime {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self.as_option() {
            Some(time) => serializer.serialize_str(&time.to_rfc2822()),
            None => serializer.serialize_none(),
        }
    }
}

struct TwilioTimeVisitor;

impl<'de> Visitor<'de> for TwilioTimeVisitor {
    type Value = TwilioTime;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "an RFC 2822 date string or null")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<TwilioTime, E> {
        Ok(TwilioTime::parse(v))
    }

    fn visit_none<E: de::Error>(self) -> Result<TwilioTime, E> {
        Ok(TwilioTime::invalid())
    }

    fn visit_unit<E: de::Error>(self) -> Result<TwilioTime, E> {
        Ok(TwilioTime::invalid())
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<TwilioTime, D::Error> {
        Ok(match RawTime::deserialize(deserializer)? {
            RawTime::Text(s) => TwilioTime::parse(&s),
            RawTime::Other(_) => TwilioTime::invalid(),
        })
    }
}

// Serde support - null, a missing key or a non-string value is invalid, never an error
impl<'de> Deserialize<'de> for TwilioTime {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_option(TwilioTimeVisitor)
    }
}

impl fmt::Display for TwilioTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.as_option() {
            Some(time) => write!(f, "{}", time.to_rfc2822()),
            None => write!(f, "invalid time"),
        }
    }
}
