//! PhoneNumber value object.

use super::dialing::{self, DialingDefaults};
use crate::error::{PhoneNumberError, PhoneNumberResult};
use rlibphonenumber::PhoneNumberFormat;
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use tracing::debug;

/// A phone number in canonical E.164 form: `+` followed only by digits.
///
/// The empty number (`PhoneNumber::default()`) stands for an absent value and
/// is never written as a bare `+`. Numbers decoded from API records may also
/// hold a caller identity that is not a number at all (`client:alice`,
/// `sip:bob@example.com`, `Anonymous`); those are kept verbatim and
/// [`PhoneNumber::is_e164`] is false for them.
///
/// # Example
///
/// ```
/// use twilio_types::domain::PhoneNumber;
///
/// let phone = PhoneNumber::parse("(410) 555-1234").unwrap();
/// assert_eq!(phone.as_str(), "+14105551234");
/// assert_eq!(phone.friendly(), "+1 410-555-1234");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Normalize `raw` using the default dialing policy (country code 1).
    ///
    /// # Errors
    ///
    /// Returns `PhoneNumberError::EmptyNumber` if `raw` is empty, and
    /// `PhoneNumberError::InvalidNumber` if it holds no digits.
    pub fn parse(raw: &str) -> PhoneNumberResult<Self> {
        Self::parse_with(raw, &DialingDefaults::default())
    }

    /// Normalize `raw`, reading numbers without a leading `+` as national
    /// numbers of the `defaults` country.
    pub fn parse_with(raw: &str, defaults: &DialingDefaults) -> PhoneNumberResult<Self> {
        if raw.is_empty() {
            return Err(PhoneNumberError::EmptyNumber);
        }

        let international = raw.trim_start().starts_with('+');
        let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();

        if digits.is_empty() {
            return Err(PhoneNumberError::InvalidNumber(raw.to_string()));
        }

        let digits = if international {
            digits
        } else {
            let prefixed = defaults.internationalize(&digits);
            debug!(
                raw,
                country_code = defaults.country_code(),
                "Applied default country code to national number"
            );
            prefixed
        };

        Ok(Self(format!("+{}", digits)))
    }

    /// Build a value from a `from`/`to` field of an API record.
    ///
    /// Number-shaped text is normalized; caller identities such as
    /// `client:alice` are kept as sent, and `""` is the absent number.
    pub fn from_api(text: &str) -> Self {
        if text.is_empty() {
            return Self::default();
        }
        if !Self::looks_like_number(text) {
            debug!(text, "Keeping non-numeric caller identity verbatim");
            return Self(text.to_string());
        }
        Self::parse(text).unwrap_or_else(|_| Self(text.to_string()))
    }

    /// Digits plus common formatting characters, with at least one digit.
    fn looks_like_number(text: &str) -> bool {
        text.chars().any(|c| c.is_ascii_digit())
            && text.chars().all(|c| {
                c.is_ascii_digit()
                    || c == ' '
                    || c == '-'
                    || c == '('
                    || c == ')'
                    || c == '+'
                    || c == '.'
            })
    }

    /// Whether this is the absent (empty) number.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Whether this holds a canonical `+digits` number.
    pub fn is_e164(&self) -> bool {
        self.0
            .strip_prefix('+')
            .map(|digits| !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()))
            .unwrap_or(false)
    }

    /// Get the phone number as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }

    /// International display form, e.g. `+41 44 668 18 00`.
    ///
    /// Anything that is not a valid number for its country code (unknown
    /// code, wrong length, caller identities) is returned unchanged.
    pub fn friendly(&self) -> String {
        dialing::format_valid(&self.0, PhoneNumberFormat::International)
            .unwrap_or_else(|| self.0.clone())
    }

    /// National display form, e.g. `(410) 555-4092`.
    ///
    /// Same fallback as [`PhoneNumber::friendly`].
    pub fn local(&self) -> String {
        dialing::format_valid(&self.0, PhoneNumberFormat::National)
            .unwrap_or_else(|| self.0.clone())
    }
}

// Serde support - serialize as canonical string
impl Serialize for PhoneNumber {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

struct PhoneNumberVisitor;

impl<'de> Visitor<'de> for PhoneNumberVisitor {
    type Value = PhoneNumber;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "a phone number, caller identity or null")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<PhoneNumber, E> {
        Ok(PhoneNumber::from_api(v))
    }

    fn visit_none<E: de::Error>(self) -> Result<PhoneNumber, E> {
        Ok(PhoneNumber::default())
    }

    fn visit_unit<E: de::Error>(self) -> Result<PhoneNumber, E> {
        Ok(PhoneNumber::default())
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<PhoneNumber, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(PhoneNumber::from_api(&s))
    }
}

// Serde support - null or a missing key is the absent number
impl<'de> Deserialize<'de> for PhoneNumber {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_option(PhoneNumberVisitor)
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phone_parse_cases() {
        let cases = [
            ("+14105551234", "+14105551234"),
            ("410 555 1234", "+14105551234"),
            ("(410) 555-1234", "+14105551234"),
            ("+41 44 6681800", "+41446681800"),
            ("22", "+122"),
        ];
        for (input, expected) in cases {
            let phone = PhoneNumber::parse(input).unwrap();
            assert_eq!(phone.as_str(), expected, "parse({:?})", input);
        }
    }

    #[test]
    fn test_phone_parse_empty() {
        assert_eq!(PhoneNumber::parse(""), Err(PhoneNumberError::EmptyNumber));
    }

    #[test]
    fn test_phone_parse_invalid_echoes_input() {
        let err = PhoneNumber::parse("foobarbang").unwrap_err();
        assert_eq!(err, PhoneNumberError::InvalidNumber("foobarbang".to_string()));
        assert!(err.to_string().contains("foobarbang"));

        assert!(matches!(
            PhoneNumber::parse("+"),
            Err(PhoneNumberError::InvalidNumber(_))
        ));
        assert!(matches!(
            PhoneNumber::parse("   "),
            Err(PhoneNumberError::InvalidNumber(_))
        ));
    }

    #[test]
    fn test_phone_parse_is_canonical() {
        for input in ["+1 (410) 555-1234", "1-410-555-1234", "+33 1 23 45 67 89", "7"] {
            let phone = PhoneNumber::parse(input).unwrap();
            let rest = phone.as_str().strip_prefix('+').unwrap();
            assert!(!rest.is_empty());
            assert!(rest.bytes().all(|b| b.is_ascii_digit()), "{}", phone);
        }
    }

    #[test]
    fn test_phone_parse_with_other_default() {
        let defaults = DialingDefaults::new("41").unwrap();
        let phone = PhoneNumber::parse_with("44 668 18 00", &defaults).unwrap();
        assert_eq!(phone.as_str(), "+41446681800");

        // Explicit country code wins over the default
        let phone = PhoneNumber::parse_with("+1 410 555 1234", &defaults).unwrap();
        assert_eq!(phone.as_str(), "+14105551234");
    }

    #[test]
    fn test_phone_friendly() {
        let cases = [
            ("+41446681800", "+41 44 668 18 00"),
            ("+14105554092", "+1 410-555-4092"),
            ("+33123456789", "+33 1 23 45 67 89"),
            ("+442079460958", "+44 20 7946 0958"),
            ("+4915123456789", "+49 1512 3456789"),
            ("blah", "blah"),
            ("", ""),
        ];
        for (input, expected) in cases {
            let phone = PhoneNumber(input.to_string());
            assert_eq!(phone.friendly(), expected, "friendly({:?})", input);
        }
    }

    #[test]
    fn test_phone_friendly_fallback_is_identity() {
        // Unassigned country code
        let phone = PhoneNumber::parse("+9991234567").unwrap();
        assert_eq!(phone.friendly(), "+9991234567");

        // Known country code, too short
        let phone = PhoneNumber::parse("22").unwrap();
        assert_eq!(phone.friendly(), "+122");

        let phone = PhoneNumber::from_api("client:alice");
        assert_eq!(phone.friendly(), "client:alice");
    }

    #[test]
    fn test_phone_friendly_after_parse() {
        let phone = PhoneNumber::parse("+41 44 6681800").unwrap();
        assert_eq!(phone.friendly(), "+41 44 668 18 00");
        let digits: String = phone.friendly().chars().filter(|c| *c != ' ').collect();
        assert_eq!(digits, phone.as_str());
    }

    #[test]
    fn test_phone_local() {
        let phone = PhoneNumber::parse("+14105554092").unwrap();
        assert_eq!(phone.local(), "(410) 555-4092");

        let phone = PhoneNumber::parse("+41446681800").unwrap();
        assert_eq!(phone.local(), "044 668 18 00");

        let phone = PhoneNumber::parse("+442079460958").unwrap();
        assert_eq!(phone.local(), "020 7946 0958");

        let phone = PhoneNumber::parse("+9991234567").unwrap();
        assert_eq!(phone.local(), "+9991234567");
    }

    #[test]
    fn test_phone_is_e164() {
        assert!(PhoneNumber::parse("22").unwrap().is_e164());
        assert!(!PhoneNumber::default().is_e164());
        assert!(!PhoneNumber::from_api("sip:bob@example.com").is_e164());
    }

    #[test]
    fn test_phone_display() {
        let phone = PhoneNumber::parse("410 555 1234").unwrap();
        assert_eq!(format!("{}", phone), "+14105551234");
    }

    #[test]
    fn test_phone_serialization() {
        let phone = PhoneNumber::parse("410 555 1234").unwrap();
        let json = serde_json::to_string(&phone).unwrap();
        assert_eq!(json, "\"+14105551234\"");
    }

    #[test]
    fn test_phone_deserialization_normalizes() {
        let phone: PhoneNumber = serde_json::from_str("\"(410) 555-1234\"").unwrap();
        assert_eq!(phone.as_str(), "+14105551234");
    }

    #[test]
    fn test_phone_deserialization_empty_is_absent() {
        let phone: PhoneNumber = serde_json::from_str("\"\"").unwrap();
        assert!(phone.is_empty());

        let phone: PhoneNumber = serde_json::from_str("null").unwrap();
        assert!(phone.is_empty());
    }

    #[test]
    fn test_phone_deserialization_keeps_caller_identities() {
        for identity in [
            "client:agent7",
            "client:alice",
            "sip:bob@example.com",
            "Anonymous",
        ] {
            let json = serde_json::to_string(identity).unwrap();
            let phone: PhoneNumber = serde_json::from_str(&json).unwrap();
            assert_eq!(phone.as_str(), identity);
            assert!(!phone.is_e164());
        }
    }

    #[test]
    fn test_phone_identity_round_trip() {
        let phone = PhoneNumber::from_api("client:agent7");
        let json = serde_json::to_string(&phone).unwrap();
        assert_eq!(json, "\"client:agent7\"");
    }
}
