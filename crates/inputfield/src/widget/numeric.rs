//! Numeric normalization.
//!
//! Numeric text reaches the engine decorated: with a currency designator on
//! one side and a space separating it from the number. The helpers here strip
//! that decoration, classify characters, and parse what remains.
//!
//! Parsing goes through [`DecimalText`], an exact decimal backed by
//! `fixed_decimal`. Rounding to a fixed number of places is done on the
//! decimal digits, so `"2.675"` rounds to `"2.68"` rather than whatever the
//! nearest binary float would suggest.

use std::fmt;

use fixed_decimal::{Decimal, Sign, SignedRoundingMode, UnsignedRoundingMode};

use super::events::KeyInput;
use super::mode::ActiveMode;

/// The decimal separator accepted and produced by numeric mode.
pub const DECIMAL_SEPARATOR: char = '.';

fn is_numeric_symbol(ch: char) -> bool {
    ch.is_ascii_digit() || ch == DECIMAL_SEPARATOR
}

/// Whether a keystroke may be typed in numeric mode.
///
/// Backspace is always admitted so the user can keep editing.
pub fn is_numeric_char(key: KeyInput) -> bool {
    match key {
        KeyInput::Char(ch) => is_numeric_symbol(ch),
        KeyInput::Backspace => true,
    }
}

/// Whether every character of a finished string is a digit or the separator.
///
/// The empty string is numeric.
pub fn is_numeric_string(text: &str) -> bool {
    text.chars().all(is_numeric_symbol)
}

/// Remove numeric decoration from `text`.
///
/// In numeric mode this drops whitespace and every occurrence of the
/// configured currency designator (exact, case-sensitive). Other modes
/// return the text unchanged.
pub fn strip_decoration(text: &str, mode: ActiveMode<'_>) -> String {
    match mode {
        ActiveMode::Numeric(cfg) => {
            let without_designator = if cfg.currency_designator.is_empty() {
                text.to_string()
            } else {
                text.replace(cfg.currency_designator.as_str(), "")
            };
            without_designator
                .chars()
                .filter(|c| !c.is_whitespace())
                .collect()
        }
        ActiveMode::Default | ActiveMode::Ipv4 => text.to_string(),
    }
}

/// Parse stripped numeric text as a float, falling back to zero.
pub fn parse_numeric_value(stripped: &str) -> f64 {
    DecimalText::parse(stripped).map_or(0.0, |d| d.to_f64())
}

/// An exactly parsed decimal number.
///
/// Accepts an optional sign, ASCII digits and at most one separator, with at
/// least one digit overall (`"5"`, `"-0.5"`, `".5"`, `"5."`). Surrounding
/// whitespace is ignored. Exponents, `inf` and `NaN` are rejected.
#[derive(Debug, Clone, PartialEq)]
pub struct DecimalText {
    value: Decimal,
}

impl DecimalText {
    /// Parse `text`, returning `None` when it is not a plain decimal number.
    pub fn parse(text: &str) -> Option<Self> {
        let trimmed = text.trim();
        let (negative, unsigned) = match trimmed.as_bytes().first() {
            Some(b'-') => (true, &trimmed[1..]),
            Some(b'+') => (false, &trimmed[1..]),
            _ => (false, trimmed),
        };

        let (integer, fraction) = match unsigned.split_once(DECIMAL_SEPARATOR) {
            Some((int, frac)) => (int, frac),
            None => (unsigned, ""),
        };

        let all_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
        if !all_digits(integer) || !all_digits(fraction) {
            return None;
        }
        if integer.is_empty() && fraction.is_empty() {
            return None;
        }

        // Leading zeros would be kept as padding.
        let integer = match integer.trim_start_matches('0') {
            "" => "0",
            digits => digits,
        };
        let mut canonical = String::with_capacity(integer.len() + fraction.len() + 2);
        if negative {
            canonical.push('-');
        }
        canonical.push_str(integer);
        if !fraction.is_empty() {
            canonical.push(DECIMAL_SEPARATOR);
            canonical.push_str(fraction);
        }

        Decimal::try_from_str(&canonical)
            .ok()
            .map(|value| Self { value })
    }

    /// Whether the value is negative (a negative zero reports `false`).
    pub fn is_negative(&self) -> bool {
        self.value.sign == Sign::Negative && !self.is_zero()
    }

    /// Whether every digit is zero.
    pub fn is_zero(&self) -> bool {
        self.value.absolute.is_zero()
    }

    /// Render with exactly `places` fractional digits, rounding half away from zero.
    pub fn round_to(&self, places: u8) -> String {
        let position = -i16::from(places);
        let mut value = self.value.clone();
        value.round_with_mode(
            position,
            SignedRoundingMode::Unsigned(UnsignedRoundingMode::HalfExpand),
        );
        value.absolute.pad_end(position);
        render(value)
    }

    /// Render the integer part, truncating toward zero.
    pub fn truncate(&self) -> String {
        let mut value = self.value.clone();
        value.round_with_mode(0, SignedRoundingMode::Unsigned(UnsignedRoundingMode::Trunc));
        render(value)
    }

    /// Convert to the nearest `f64`.
    pub fn to_f64(&self) -> f64 {
        self.to_string().parse().unwrap_or(0.0)
    }
}

impl fmt::Display for DecimalText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render(self.value.clone()))
    }
}

/// Write `value` with a minus sign only when some digit is non-zero.
fn render(mut value: Decimal) -> String {
    value.sign = if value.sign == Sign::Negative && !value.absolute.is_zero() {
        Sign::Negative
    } else {
        Sign::None
    };
    value.to_string()
}
