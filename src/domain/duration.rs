//! TwilioDuration: call and recording lengths sent as strings of seconds.

use serde::de::{self, IgnoredAny, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::time::Duration;
use tracing::warn;

/// A whole-second duration decoded from `"88"`, `88` or `null`.
///
/// Null, missing or malformed values decode to zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TwilioDuration(pub Duration);

#[derive(Deserialize)]
#[serde(untagged)]
enum RawDuration {
    Seconds(u64),
    Text(String),
    Other(IgnoredAny),
}

impl TwilioDuration {
    /// Parse a string of whole seconds. Never fails.
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();
        if raw.is_empty() {
            return Self::default();
        }
        match raw.parse::<u64>() {
            Ok(secs) => Self(Duration::from_secs(secs)),
            Err(e) => {
                warn!(raw, error = %e, "Unparseable duration, using zero");
                Self::default()
            }
        }
    }

    /// The underlying duration.
    pub fn as_duration(&self) -> Duration {
        self.0
    }
}

impl From<Duration> for TwilioDuration {
    fn from(duration: Duration) -> Self {
        Self(duration)
    }
}

// Serde support - serialize as a string of seconds, like the API
impl Serialize for TwilioDuration {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0.as_secs().to_string())
    }
}

struct TwilioDurationVisitor;

impl<'de> Visitor<'de> for TwilioDurationVisitor {
    type Value = TwilioDuration;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "a number of seconds, as a string or integer, or null")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<TwilioDuration, E> {
        Ok(TwilioDuration::parse(v))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<TwilioDuration, E> {
        Ok(TwilioDuration(Duration::from_secs(v)))
    }

    fn visit_none<E: de::Error>(self) -> Result<TwilioDuration, E> {
        Ok(TwilioDuration::default())
    }

    fn visit_unit<E: de::Error>(self) -> Result<TwilioDuration, E> {
        Ok(TwilioDuration::default())
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<TwilioDuration, D::Error> {
        Ok(match RawDuration::deserialize(deserializer)? {
            RawDuration::Seconds(secs) => TwilioDuration(Duration::from_secs(secs)),
            RawDuration::Text(s) => TwilioDuration::parse(&s),
            RawDuration::Other(_) => TwilioDuration::default(),
        })
    }
}

// Serde support - null or a missing key is zero, never an error
impl<'de> Deserialize<'de> for TwilioDuration {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_option(TwilioDurationVisitor)
    }
}

impl fmt::Display for TwilioDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}s", self.0.as_secs())
    }
}
