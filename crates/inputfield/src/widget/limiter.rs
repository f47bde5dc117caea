//! Character-count limiting.
//!
//! The limiter answers one question: does the current length block the next
//! keystroke? The check is an exact equality against the effective limit, not
//! a ceiling. Content that is already longer than the limit (for instance set
//! programmatically) is not treated as over the limit.

use serde::{Deserialize, Serialize};

use super::mode::ActiveMode;

/// Limits how many characters the user may type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CharacterLimiter {
    /// Whether limiting is active at all.
    pub enabled: bool,
    /// Maximum number of characters, excluding decimals in numeric mode.
    pub maximum_chars: usize,
}

impl Default for CharacterLimiter {
    fn default() -> Self {
        Self {
            enabled: false,
            maximum_chars: 32,
        }
    }
}

impl CharacterLimiter {
    /// Create an enabled limiter with the given maximum.
    pub fn new(maximum_chars: usize) -> Self {
        Self {
            enabled: true,
            maximum_chars,
        }
    }

    /// The length at which input is blocked in the given mode.
    ///
    /// With decimals enabled in numeric mode the fractional digits and the
    /// decimal separator come on top of `maximum_chars`.
    pub fn effective_limit(&self, mode: ActiveMode<'_>) -> usize {
        match mode {
            ActiveMode::Numeric(cfg) if cfg.use_decimals => {
                self.maximum_chars + usize::from(cfg.decimal_places.get()) + 1
            }
            ActiveMode::Default | ActiveMode::Numeric(_) | ActiveMode::Ipv4 => self.maximum_chars,
        }
    }

    /// Whether `current_length` blocks further input.
    pub fn is_at_limit(&self, current_length: usize, mode: ActiveMode<'_>) -> bool {
        self.enabled && current_length == self.effective_limit(mode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widget::mode::{DecimalPlaces, NumericConfig};

    fn decimals(places: u8) -> NumericConfig {
        NumericConfig {
            use_decimals: true,
            decimal_places: DecimalPlaces::new(places).unwrap(),
            ..NumericConfig::default()
        }
    }

    #[test]
    fn test_disabled_never_limits() {
        let limiter = CharacterLimiter {
            enabled: false,
            maximum_chars: 3,
        };
        assert!(!limiter.is_at_limit(3, ActiveMode::Default));
    }

    #[test]
    fn test_exact_equality_only() {
        let limiter = CharacterLimiter::new(5);
        assert!(!limiter.is_at_limit(4, ActiveMode::Default));
        assert!(limiter.is_at_limit(5, ActiveMode::Default));
        assert!(!limiter.is_at_limit(6, ActiveMode::Default));
    }

    #[test]
    fn test_ipv4_uses_maximum_chars() {
        let limiter = CharacterLimiter::new(15);
        assert!(limiter.is_at_limit(15, ActiveMode::Ipv4));
        assert!(!limiter.is_at_limit(14, ActiveMode::Ipv4));
    }

    #[test]
    fn test_numeric_with_decimals_extends_limit() {
        let limiter = CharacterLimiter::new(5);
        let cfg = decimals(2);
        let mode = ActiveMode::Numeric(&cfg);

        assert_eq!(limiter.effective_limit(mode), 8);
        assert!(!limiter.is_at_limit(7, mode));
        assert!(limiter.is_at_limit(8, mode));
        assert!(!limiter.is_at_limit(9, mode));
    }

    #[test]
    fn test_numeric_without_decimals() {
        let limiter = CharacterLimiter::new(5);
        let cfg = NumericConfig::default();
        let mode = ActiveMode::Numeric(&cfg);

        assert_eq!(limiter.effective_limit(mode), 5);
        assert!(limiter.is_at_limit(5, mode));
    }

    #[test]
    fn test_every_decimal_setting() {
        let limiter = CharacterLimiter::new(10);
        for places in 1..=4u8 {
            let cfg = decimals(places);
            let limit = 10 + places as usize + 1;
            let mode = ActiveMode::Numeric(&cfg);
            assert!(limiter.is_at_limit(limit, mode));
            assert!(!limiter.is_at_limit(limit - 1, mode));
            assert!(!limiter.is_at_limit(limit + 1, mode));
        }
    }
}
