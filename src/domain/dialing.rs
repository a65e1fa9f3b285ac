//! Dialing policy and display formatting backed by libphonenumber metadata.
//!
//! Canonical numbers are handed to `rlibphonenumber` as international text,
//! so its per-country metadata decides grouping and trunk prefixes.

use rlibphonenumber::{PhoneNumberFormat, PHONE_NUMBER_UTIL};

/// Longest ITU country calling code.
const MAX_CODE_LEN: usize = 3;

/// Region used when the text already carries its country code.
const UNKNOWN_REGION: &str = "ZZ";

/// Whether `canonical` (`+digits`) is a valid number in libphonenumber's metadata.
pub fn is_valid(canonical: &str) -> bool {
    if !canonical.starts_with('+') {
        return false;
    }
    PHONE_NUMBER_UTIL
        .parse(canonical, UNKNOWN_REGION)
        .ok()
        .map(|number| PHONE_NUMBER_UTIL.is_valid_number(&number))
        .unwrap_or(false)
}

/// Render a valid canonical number in `style`.
///
/// Returns `None` for anything libphonenumber does not consider a valid
/// number, including numbers with an unknown country code or wrong length.
pub fn format_valid(canonical: &str, style: PhoneNumberFormat) -> Option<String> {
    if !is_valid(canonical) {
        return None;
    }
    let number = PHONE_NUMBER_UTIL.parse(canonical, UNKNOWN_REGION).ok()?;
    Some(PHONE_NUMBER_UTIL.format(&number, style).to_string())
}

/// Policy applied to numbers written without a leading `+`.
///
/// Such numbers are read as national numbers of the default country.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DialingDefaults {
    country_code: String,
}

impl DialingDefaults {
    /// Create a policy for the given calling code (1-3 digits, no leading zero).
    pub fn new(country_code: &str) -> Option<Self> {
        let country_code = country_code.trim().trim_start_matches('+');
        let valid = !country_code.is_empty()
            && country_code.len() <= MAX_CODE_LEN
            && country_code.bytes().all(|b| b.is_ascii_digit())
            && !country_code.starts_with('0');

        valid.then(|| Self {
            country_code: country_code.to_string(),
        })
    }

    /// The default calling code, without `+`.
    pub fn country_code(&self) -> &str {
        &self.country_code
    }

    /// Turn the digits of a number dialed without `+` into international digits.
    ///
    /// Digits that already begin with the default code and form a valid
    /// number as they stand are kept; anything else gets the default code
    /// prefixed, whatever its length.
    pub fn internationalize(&self, digits: &str) -> String {
        if digits.starts_with(&*self.country_code) && is_valid(&format!("+{}", digits)) {
            return digits.to_string();
        }

        format!("{}{}", self.country_code, digits)
    }
}

impl Default for DialingDefaults {
    fn default() -> Self {
        Self {
            country_code: "1".to_string(),
        }
    }
}
