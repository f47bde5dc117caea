//! Rendering of the logical value back into display text.
//!
//! [`format`] is a pure function: it takes the current logical value and the
//! active mode and returns the text the buffer should hold afterwards, plus
//! the alignment hint for the host. Formatting the output again yields the
//! same output.

use super::mode::{ActiveMode, DesignatorAlignment, NumericConfig};
use super::numeric::{strip_decoration, DecimalText};
use super::policy::{Ipv4FormatPolicy, Ipv4Policy};
use super::validator::UNSPECIFIED_IPV4;
use crate::style::TextAlignment;

/// The outcome of formatting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Formatted {
    /// The text the buffer should hold.
    pub text: String,
    /// The alignment the host should apply, or `None` to leave it as is.
    pub alignment: Option<TextAlignment>,
}

/// Format `text` for the given mode.
pub fn format(text: &str, mode: ActiveMode<'_>, policy: &Ipv4Policy) -> Formatted {
    match mode {
        ActiveMode::Default => Formatted {
            text: text.to_string(),
            alignment: None,
        },
        ActiveMode::Numeric(cfg) => Formatted {
            text: format_numeric(text, cfg),
            alignment: Some(TextAlignment::Right),
        },
        ActiveMode::Ipv4 => Formatted {
            text: format_ipv4(text, policy.format),
            alignment: Some(TextAlignment::Center),
        },
    }
}

/// Render numeric text: decimals first, then currency decoration.
pub fn format_numeric(text: &str, cfg: &NumericConfig) -> String {
    let number = render_number(text, cfg);
    decorate(number, cfg)
}

/// Render the bare number, without decoration.
///
/// Blank or unparsable content renders as zero.
pub fn render_number(text: &str, cfg: &NumericConfig) -> String {
    let stripped = strip_decoration(text, ActiveMode::Numeric(cfg));
    let parsed = DecimalText::parse(&stripped);

    if cfg.use_decimals {
        let places = cfg.decimal_places.get();
        match parsed {
            Some(value) => value.round_to(places),
            None => zero_with_places(places),
        }
    } else {
        match parsed {
            Some(value) => value.truncate(),
            None => "0".to_string(),
        }
    }
}

fn zero_with_places(places: u8) -> String {
    format!("0.{}", "0".repeat(usize::from(places)))
}

fn decorate(number: String, cfg: &NumericConfig) -> String {
    if !cfg.use_currency || cfg.currency_designator.is_empty() || number.trim().is_empty() {
        return number;
    }

    match cfg.designator_alignment {
        DesignatorAlignment::Left => format!("{} {}", cfg.currency_designator, number),
        DesignatorAlignment::Right => format!("{} {}", number, cfg.currency_designator),
    }
}

fn format_ipv4(text: &str, policy: Ipv4FormatPolicy) -> String {
    match policy {
        Ipv4FormatPolicy::AlwaysReset => UNSPECIFIED_IPV4.to_string(),
        Ipv4FormatPolicy::PreserveValid => {
            if text.trim().is_empty() {
                UNSPECIFIED_IPV4.to_string()
            } else {
                // Invalid input is left as typed so the user can fix it.
                text.to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widget::mode::DecimalPlaces;

    fn numeric(use_decimals: bool, places: u8, use_currency: bool) -> NumericConfig {
        NumericConfig {
            use_decimals,
            decimal_places: DecimalPlaces::new(places).unwrap(),
            use_currency,
            ..NumericConfig::default()
        }
    }

    fn fmt_numeric(text: &str, cfg: &NumericConfig) -> String {
        format(text, ActiveMode::Numeric(cfg), &Ipv4Policy::default()).text
    }

    // ========================================================================
    // Default
    // ========================================================================

    #[test]
    fn test_default_mode_is_identity() {
        let out = format("  hello  ", ActiveMode::Default, &Ipv4Policy::default());
        assert_eq!(out.text, "  hello  ");
        assert_eq!(out.alignment, None);
    }

    // ========================================================================
    // Numeric
    // ========================================================================

    #[test]
    fn test_decimals_for_every_place_count() {
        let expected = ["12.0", "12.00", "12.000", "12.0000"];
        for (places, want) in (1..=4).zip(expected) {
            let cfg = numeric(true, places, false);
            assert_eq!(fmt_numeric("12", &cfg), want);
        }
    }

    #[test]
    fn test_decimals_round_half_away_from_zero() {
        let cfg = numeric(true, 1, false);
        assert_eq!(fmt_numeric("0.25", &cfg), "0.3");
        assert_eq!(fmt_numeric("-0.25", &cfg), "-0.3");
        assert_eq!(fmt_numeric("0.24", &cfg), "0.2");
    }

    #[test]
    fn test_blank_renders_zero() {
        assert_eq!(fmt_numeric("", &numeric(true, 3, false)), "0.000");
        assert_eq!(fmt_numeric("   ", &numeric(false, 2, false)), "0");
    }

    #[test]
    fn test_unparsable_renders_zero() {
        assert_eq!(fmt_numeric("abc", &numeric(true, 2, false)), "0.00");
        assert_eq!(fmt_numeric("1.2.3", &numeric(false, 2, false)), "0");
    }

    #[test]
    fn test_exponent_is_not_a_number() {
        assert_eq!(fmt_numeric("1e5", &numeric(true, 2, false)), "0.00");
    }

    #[test]
    fn test_rounding_carries_past_float_precision() {
        let cfg = numeric(true, 2, false);
        assert_eq!(
            fmt_numeric("99999999999999999999.995", &cfg),
            "100000000000000000000.00"
        );
    }

    #[test]
    fn test_whole_number_truncates() {
        let cfg = numeric(false, 2, false);
        assert_eq!(fmt_numeric("12.99", &cfg), "12");
        assert_eq!(fmt_numeric("-12.99", &cfg), "-12");
        assert_eq!(fmt_numeric("-0.5", &cfg), "0");
    }

    #[test]
    fn test_currency_right() {
        let cfg = numeric(true, 2, true);
        assert_eq!(fmt_numeric("12.5", &cfg), "12.50 €");
    }

    #[test]
    fn test_currency_left() {
        let cfg = NumericConfig {
            designator_alignment: DesignatorAlignment::Left,
            ..numeric(true, 2, true)
        };
        assert_eq!(fmt_numeric("12.5", &cfg), "€ 12.50");
    }

    #[test]
    fn test_currency_off_strips_designator() {
        let cfg = numeric(true, 2, false);
        assert_eq!(fmt_numeric("12.50 €", &cfg), "12.50");
    }

    #[test]
    fn test_empty_designator_means_no_decoration() {
        let cfg = NumericConfig {
            currency_designator: String::new(),
            ..numeric(false, 2, true)
        };
        assert_eq!(fmt_numeric("7", &cfg), "7");
    }

    #[test]
    fn test_numeric_format_is_idempotent() {
        let cfg = numeric(true, 2, true);
        let once = fmt_numeric("3.14159", &cfg);
        let twice = fmt_numeric(&once, &cfg);
        assert_eq!(once, "3.14 €");
        assert_eq!(once, twice);
    }

    #[test]
    fn test_numeric_alignment_is_right() {
        let cfg = numeric(false, 2, false);
        let out = format("1", ActiveMode::Numeric(&cfg), &Ipv4Policy::default());
        assert_eq!(out.alignment, Some(TextAlignment::Right));
    }

    // ========================================================================
    // IPv4
    // ========================================================================

    #[test]
    fn test_ipv4_legacy_always_resets() {
        let policy = Ipv4Policy::legacy();
        for input in ["192.168.1.10", "", "garbage"] {
            let out = format(input, ActiveMode::Ipv4, &policy);
            assert_eq!(out.text, "0.0.0.0");
            assert_eq!(out.alignment, Some(TextAlignment::Center));
        }
    }

    #[test]
    fn test_ipv4_corrected_keeps_valid() {
        let policy = Ipv4Policy::corrected();
        assert_eq!(format("192.168.1.10", ActiveMode::Ipv4, &policy).text, "192.168.1.10");
        assert_eq!(format("  ", ActiveMode::Ipv4, &policy).text, "0.0.0.0");
        assert_eq!(format("192.168", ActiveMode::Ipv4, &policy).text, "192.168");
    }
}
