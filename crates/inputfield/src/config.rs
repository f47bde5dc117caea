//! Declarative text-box configuration.
//!
//! A [`TextBoxConfig`] collects every setting of a [`TextBox`](crate::widget::widgets::TextBox)
//! in one serde-friendly value. Every field has a default, so a TOML document
//! only needs to name what it changes:
//!
//! ```
//! use inputfield::config::TextBoxConfig;
//! use inputfield::widget::InputMode;
//!
//! let config = TextBoxConfig::from_toml_str(r#"
//!     mode = "numeric"
//!
//!     [numeric]
//!     use_decimals = true
//!     decimal_places = 3
//!     use_currency = true
//!     currency_designator = "USD"
//!     designator_alignment = "left"
//!
//!     [limiter]
//!     enabled = true
//!     maximum_chars = 10
//! "#).unwrap();
//!
//! assert_eq!(config.mode, InputMode::Numeric);
//! assert_eq!(config.numeric.decimal_places.get(), 3);
//! ```

use inputfield_core::logging::targets;
use serde::{Deserialize, Serialize};

use crate::error::ConfigResult;
use crate::style::TextStyle;
use crate::widget::limiter::CharacterLimiter;
use crate::widget::mode::{InputMode, NumericConfig};
use crate::widget::placeholder::PlaceholderConfig;
use crate::widget::policy::Ipv4Policy;

/// Complete configuration of a text box.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TextBoxConfig {
    pub mode: InputMode,
    pub numeric: NumericConfig,
    pub limiter: CharacterLimiter,
    pub placeholder: PlaceholderConfig,
    pub base_style: TextStyle,
    pub ipv4: Ipv4Policy,
}

impl TextBoxConfig {
    /// Parse a configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Toml`](crate::error::ConfigError::Toml) when the
    /// document is malformed or a value is out of range, such as
    /// `decimal_places = 7` or an unparsable color.
    pub fn from_toml_str(source: &str) -> ConfigResult<Self> {
        let config: Self = toml::from_str(source).inspect_err(|err| {
            tracing::debug!(target: targets::CONFIG, %err, "rejected configuration");
        })?;
        tracing::debug!(target: targets::CONFIG, mode = %config.mode, "loaded configuration");
        Ok(config)
    }

    /// Render the configuration as a pretty-printed TOML string.
    pub fn to_toml_string(&self) -> ConfigResult<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ConfigError;
    use crate::style::{Color, FontStyle};
    use crate::widget::mode::DesignatorAlignment;
    use crate::widget::policy::Ipv4FormatPolicy;

    #[test]
    fn test_empty_document_is_default() {
        let config = TextBoxConfig::from_toml_str("").unwrap();
        assert_eq!(config, TextBoxConfig::default());
    }

    #[test]
    fn test_full_document() {
        let config = TextBoxConfig::from_toml_str(
            r##"
            mode = "ipv4"

            [numeric]
            designator_alignment = "left"

            [placeholder]
            enabled = true
            text = "Address"

            [placeholder.style]
            color = "#808080"
            font = { family = "Mono", size = 9.0, style = "oblique" }

            [base_style]
            color = "#000000"
            font = { family = "Sans", size = 11.0 }

            [ipv4]
            format = "preserve_valid"
            paste = "candidate"
            "##,
        )
        .unwrap();

        assert_eq!(config.mode, InputMode::Ipv4);
        assert_eq!(config.numeric.designator_alignment, DesignatorAlignment::Left);
        assert_eq!(config.placeholder.text, "Address");
        assert_eq!(config.placeholder.style.color, Color::from_rgb8(128, 128, 128));
        assert_eq!(config.placeholder.style.font.style, FontStyle::Oblique);
        assert_eq!(config.base_style.color, Color::BLACK);
        assert_eq!(config.ipv4, Ipv4Policy::corrected());
        assert_eq!(config.ipv4.format, Ipv4FormatPolicy::PreserveValid);
    }

    #[test]
    fn test_decimal_places_out_of_range() {
        let err = TextBoxConfig::from_toml_str("[numeric]\ndecimal_places = 7").unwrap_err();
        assert!(matches!(err, ConfigError::Toml(_)));
        assert!(err.to_string().contains("between 1 and 4"));
    }

    #[test]
    fn test_invalid_color() {
        let err = TextBoxConfig::from_toml_str("[base_style]\ncolor = \"red\"\nfont = { family = \"A\", size = 1.0 }");
        assert!(err.is_err());
    }

    #[test]
    fn test_toml_roundtrip() {
        let mut config = TextBoxConfig::default();
        config.mode = InputMode::Numeric;
        config.numeric.use_currency = true;
        config.placeholder.enabled = true;

        let text = config.to_toml_string().unwrap();
        assert_eq!(TextBoxConfig::from_toml_str(&text).unwrap(), config);
    }
}
