//! Price formatting.
//!
//! The API reports what an account was charged as a negative decimal string
//! (`"-0.0075"`), paired with a currency code (`"USD"`). For display the sign
//! is inverted and the currency symbol or code is placed before the number.
//!
//! Amounts are handled as decimal text, so every digit the API sends is kept
//! however long the amount is.

use serde::{Deserialize, Serialize};
use tracing::warn;

/// Currency units with a dedicated rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CurrencyUnit {
    /// US dollar, rendered `$1.5`
    Usd,

    /// Euro, rendered `€1.5`
    Eur,

    /// Any other code, rendered `GBP 1.5`
    Code(String),

    /// No unit given, rendered `1.5`
    Unitless,
}

impl CurrencyUnit {
    /// Classify a unit code. Case-insensitive.
    pub fn from_code(code: &str) -> Self {
        let code = code.trim().to_uppercase();
        match code.as_str() {
            "" => Self::Unitless,
            "USD" => Self::Usd,
            "EUR" => Self::Eur,
            _ => Self::Code(code),
        }
    }

    /// Place this unit in front of an already formatted amount.
    pub fn render(&self, amount: &str) -> String {
        match self {
            Self::Usd => format!("${}", amount),
            Self::Eur => format!("€{}", amount),
            Self::Code(code) => format!("{} {}", code, amount),
            Self::Unitless => amount.to_string(),
        }
    }
}

/// Render a charged amount as a display price.
///
/// `amount` is negated, stripped of trailing fractional zeros and of a
/// trailing decimal point, then prefixed according to `unit`.
///
/// # Example
///
/// ```
/// use twilio_types::domain::format_price;
///
/// assert_eq!(format_price("usd", "-0.750"), "$0.75");
/// assert_eq!(format_price("UNK", "2.45"), "UNK -2.45");
/// ```
pub fn format_price(unit: &str, amount: &str) -> String {
    let amount = amount.trim();
    if amount.is_empty() {
        return String::new();
    }

    let display = match invert(amount) {
        Some(value) => value,
        None => {
            warn!(amount, "Malformed price amount, rendering as given");
            amount.to_string()
        }
    };

    CurrencyUnit::from_code(unit).render(&display)
}

/// Negate a decimal string and drop insignificant zeros.
///
/// Returns `None` unless `amount` is an optionally signed run of digits with
/// at most one decimal point.
fn invert(amount: &str) -> Option<String> {
    let (negative, unsigned) = match amount.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, amount.strip_prefix('+').unwrap_or(amount)),
    };
    let (whole, fraction) = unsigned.split_once('.').unwrap_or((unsigned, ""));

    let is_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
    if (whole.is_empty() && fraction.is_empty()) || !is_digits(whole) || !is_digits(fraction) {
        return None;
    }

    let whole = match whole.trim_start_matches('0') {
        "" => "0",
        trimmed => trimmed,
    };
    let fraction = fraction.trim_end_matches('0');

    let mut inverted = String::with_capacity(whole.len() + fraction.len() + 2);
    if !negative && (whole != "0" || !fraction.is_empty()) {
        inverted.push('-');
    }
    inverted.push_str(whole);
    if !fraction.is_empty() {
        inverted.push('.');
        inverted.push_str(fraction);
    }
    Some(inverted)
}

/// The `price` / `price_unit` field pair found on billed resources.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct Price {
    /// Charged amount as sent by the API; null until the charge is known
    #[serde(rename = "price")]
    pub amount: Option<String>,

    /// Currency code of `amount`
    #[serde(rename = "price_unit")]
    pub unit: String,
}

impl Price {
    /// Display price, or `None` while the amount is unknown.
    pub fn friendly(&self) -> Option<String> {
        self.amount
            .as_deref()
            .map(|amount| format_price(&self.unit, amount))
    }
}
