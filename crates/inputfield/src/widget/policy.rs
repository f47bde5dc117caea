//! Compatibility switches for IPv4 handling.
//!
//! The long-standing behavior resets every IPv4 field to `0.0.0.0` whenever
//! it is formatted, and checks the *current* buffer rather than the clipboard
//! text when deciding whether a paste is admitted. Both behaviors are kept as
//! the default so existing hosts see no change; the corrected variants are
//! opt-in.

use serde::{Deserialize, Serialize};

/// How the formatter treats IPv4 text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Ipv4FormatPolicy {
    /// Replace the buffer with `0.0.0.0` on every format.
    #[default]
    AlwaysReset,
    /// Keep valid addresses, fill blank input with `0.0.0.0`, leave anything else as typed.
    PreserveValid,
}

/// Which text a paste into an IPv4 field is validated against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PasteValidation {
    /// Validate the buffer as it is before the paste.
    #[default]
    LiveBuffer,
    /// Validate the clipboard text that would replace the buffer.
    Candidate,
}

/// IPv4 compatibility policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Ipv4Policy {
    pub format: Ipv4FormatPolicy,
    pub paste: PasteValidation,
}

impl Ipv4Policy {
    /// The historical behavior. Same as `Ipv4Policy::default()`.
    pub const fn legacy() -> Self {
        Self {
            format: Ipv4FormatPolicy::AlwaysReset,
            paste: PasteValidation::LiveBuffer,
        }
    }

    /// Keep valid addresses and validate pasted text itself.
    pub const fn corrected() -> Self {
        Self {
            format: Ipv4FormatPolicy::PreserveValid,
            paste: PasteValidation::Candidate,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_legacy() {
        assert_eq!(Ipv4Policy::default(), Ipv4Policy::legacy());
        assert_ne!(Ipv4Policy::legacy(), Ipv4Policy::corrected());
    }

    #[test]
    fn test_deserialize_partial() {
        let policy: Ipv4Policy = toml::from_str(r#"format = "preserve_valid""#).unwrap();
        assert_eq!(policy.format, Ipv4FormatPolicy::PreserveValid);
        assert_eq!(policy.paste, PasteValidation::LiveBuffer);
    }
}
