//! Input modes and their configuration.
//!
//! The [`ModeRegistry`] owns the active [`InputMode`] together with the
//! configuration every mode may need. Configuration survives mode switches:
//! currency settings made while in [`InputMode::Default`] are in effect as
//! soon as the host switches to [`InputMode::Numeric`].
//!
//! Components never branch on a bare mode flag. They match on
//! [`ActiveMode`], a borrowed view in which the numeric variant carries its
//! configuration.

use std::fmt;

use inputfield_core::logging::targets;
use serde::{Deserialize, Serialize};

use super::limiter::CharacterLimiter;
use crate::error::ConfigError;

/// The active interpretation of the text buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputMode {
    /// Free text.
    #[default]
    Default,
    /// Whole or decimal numbers, optionally with a currency designator.
    Numeric,
    /// Dotted-quad IPv4 addresses.
    Ipv4,
}

impl fmt::Display for InputMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputMode::Default => write!(f, "Default"),
            InputMode::Numeric => write!(f, "Numeric"),
            InputMode::Ipv4 => write!(f, "IPv4"),
        }
    }
}

/// Which side of the number the currency designator is placed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DesignatorAlignment {
    /// `"€ 12.50"`
    Left,
    /// `"12.50 €"`
    #[default]
    Right,
}

/// Number of fractional digits rendered when decimals are enabled (1 to 4).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct DecimalPlaces(u8);

impl DecimalPlaces {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 4;

    /// Create a decimal-places value, rejecting anything outside `1..=4`.
    pub fn new(places: u8) -> Result<Self, ConfigError> {
        if (Self::MIN..=Self::MAX).contains(&places) {
            Ok(Self(places))
        } else {
            Err(ConfigError::DecimalPlacesOutOfRange(places))
        }
    }

    /// The number of fractional digits.
    pub fn get(self) -> u8 {
        self.0
    }

    /// The display format pattern derived from the number of places.
    pub fn pattern(self) -> &'static str {
        match self.0 {
            1 => "0.0",
            2 => "0.00",
            3 => "0.000",
            _ => "0.0000",
        }
    }
}

impl Default for DecimalPlaces {
    fn default() -> Self {
        Self(2)
    }
}

impl TryFrom<u8> for DecimalPlaces {
    type Error = ConfigError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<DecimalPlaces> for u8 {
    fn from(places: DecimalPlaces) -> Self {
        places.0
    }
}

/// Configuration of [`InputMode::Numeric`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NumericConfig {
    /// Render a fixed number of fractional digits instead of a whole number.
    pub use_decimals: bool,
    pub decimal_places: DecimalPlaces,
    /// Decorate non-blank values with the currency designator.
    pub use_currency: bool,
    /// Currency symbol or code, matched exactly and case-sensitively.
    pub currency_designator: String,
    pub designator_alignment: DesignatorAlignment,
}

impl Default for NumericConfig {
    fn default() -> Self {
        Self {
            use_decimals: false,
            decimal_places: DecimalPlaces::default(),
            use_currency: false,
            currency_designator: "€".to_string(),
            designator_alignment: DesignatorAlignment::default(),
        }
    }
}

/// Borrowed view of the active mode, carrying mode-specific configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActiveMode<'a> {
    Default,
    Numeric(&'a NumericConfig),
    Ipv4,
}

impl ActiveMode<'_> {
    /// The mode this view was taken from.
    pub fn kind(&self) -> InputMode {
        match self {
            ActiveMode::Default => InputMode::Default,
            ActiveMode::Numeric(_) => InputMode::Numeric,
            ActiveMode::Ipv4 => InputMode::Ipv4,
        }
    }
}

/// Holds the active input mode and every mode's configuration.
///
/// Setters return `true` when they changed something, so callers only
/// reformat on real changes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModeRegistry {
    mode: InputMode,
    numeric: NumericConfig,
    limiter: CharacterLimiter,
}

impl ModeRegistry {
    /// Create a registry in [`InputMode::Default`] with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry from explicit parts.
    pub fn with_parts(mode: InputMode, numeric: NumericConfig, limiter: CharacterLimiter) -> Self {
        Self {
            mode,
            numeric,
            limiter,
        }
    }

    /// Get the active mode.
    pub fn mode(&self) -> InputMode {
        self.mode
    }

    /// Get the active mode as a dispatchable view.
    pub fn active(&self) -> ActiveMode<'_> {
        match self.mode {
            InputMode::Default => ActiveMode::Default,
            InputMode::Numeric => ActiveMode::Numeric(&self.numeric),
            InputMode::Ipv4 => ActiveMode::Ipv4,
        }
    }

    /// Get the numeric configuration, whichever mode is active.
    pub fn numeric(&self) -> &NumericConfig {
        &self.numeric
    }

    /// Get the character limiter.
    pub fn limiter(&self) -> &CharacterLimiter {
        &self.limiter
    }

    /// Get the character limiter for modification.
    ///
    /// Limiter changes never trigger a reformat; they apply to the next edit.
    pub fn limiter_mut(&mut self) -> &mut CharacterLimiter {
        &mut self.limiter
    }

    pub fn set_mode(&mut self, mode: InputMode) -> bool {
        if self.mode == mode {
            return false;
        }
        self.mode = mode;
        true
    }

    pub fn set_use_decimals(&mut self, use_decimals: bool) -> bool {
        replace_if_changed(&mut self.numeric.use_decimals, use_decimals)
    }

    /// Set the number of decimal places.
    ///
    /// Values outside `1..=4` are ignored and the previous value is kept.
    pub fn set_decimal_places(&mut self, places: u8) -> bool {
        match DecimalPlaces::new(places) {
            Ok(places) => replace_if_changed(&mut self.numeric.decimal_places, places),
            Err(err) => {
                tracing::debug!(target: targets::FORMAT, %err, "ignoring decimal places");
                false
            }
        }
    }

    pub fn set_use_currency(&mut self, use_currency: bool) -> bool {
        replace_if_changed(&mut self.numeric.use_currency, use_currency)
    }

    pub fn set_currency_designator(&mut self, designator: impl Into<String>) -> bool {
        replace_if_changed(&mut self.numeric.currency_designator, designator.into())
    }

    pub fn set_designator_alignment(&mut self, alignment: DesignatorAlignment) -> bool {
        replace_if_changed(&mut self.numeric.designator_alignment, alignment)
    }
}

fn replace_if_changed<T: PartialEq>(slot: &mut T, value: T) -> bool {
    if *slot == value {
        false
    } else {
        *slot = value;
        true
    }
}
