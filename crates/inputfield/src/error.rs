//! Error types for inputfield.
//!
//! Editing never fails: rejected keystrokes and pastes are reported through
//! return values and signals, not errors. Errors only arise while building a
//! configuration or talking to the system clipboard.

use thiserror::Error;

/// Errors raised while loading or validating a [`TextBoxConfig`](crate::config::TextBoxConfig).
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The TOML document could not be parsed or did not match the schema.
    #[error("invalid configuration: {0}")]
    Toml(#[from] toml::de::Error),

    /// The configuration could not be rendered as TOML.
    #[error("failed to serialize configuration: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// Decimal places must lie in `1..=4`.
    #[error("decimal places must be between 1 and 4, got {0}")]
    DecimalPlacesOutOfRange(u8),

    /// A color string was not `#RRGGBB` or `#RRGGBBAA`.
    #[error("invalid color '{0}', expected #RRGGBB or #RRGGBBAA")]
    InvalidColor(String),
}

/// Errors raised by clipboard access.
#[derive(Error, Debug)]
pub enum ClipboardError {
    /// The clipboard holds no text.
    #[error("clipboard contains no text")]
    Empty,

    /// The system clipboard could not be opened or read.
    #[error("clipboard unavailable: {0}")]
    Unavailable(String),
}

/// Result type for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;
