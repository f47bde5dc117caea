//! Host events consumed by the engine and the outcomes it reports back.

use std::fmt;

/// A keystroke delivered by the host before it is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyInput {
    /// A printable character.
    Char(char),
    /// The backspace/delete control signal. Always admitted.
    Backspace,
}

/// Whether a keystroke was applied to the buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyDisposition {
    /// The keystroke was applied.
    Accepted,
    /// The keystroke was discarded; the host must not apply it either.
    Rejected(RejectReason),
}

impl KeyDisposition {
    /// Equivalent of a "handled" flag: `true` when the host should swallow the key.
    pub fn is_rejected(&self) -> bool {
        matches!(self, KeyDisposition::Rejected(_))
    }
}

/// Result of a paste request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PasteOutcome {
    /// The pasted text replaced the whole buffer.
    Replaced,
    /// The clipboard text was discarded; the buffer is unchanged.
    Rejected(RejectReason),
}

impl PasteOutcome {
    pub fn is_rejected(&self) -> bool {
        matches!(self, PasteOutcome::Rejected(_))
    }
}

/// Why input was discarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RejectReason {
    /// The character limit has been reached.
    AtLimit,
    /// The character is not allowed in the active mode.
    DisallowedChar,
    /// A second decimal separator was typed.
    DuplicateSeparator,
    /// Pasted numeric content contains non-numeric characters.
    NotNumeric,
    /// Pasted content failed the IPv4 check.
    InvalidAddress,
}

impl fmt::Display for RejectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RejectReason::AtLimit => write!(f, "character limit reached"),
            RejectReason::DisallowedChar => write!(f, "character not allowed"),
            RejectReason::DuplicateSeparator => write!(f, "decimal separator already present"),
            RejectReason::NotNumeric => write!(f, "content is not numeric"),
            RejectReason::InvalidAddress => write!(f, "not a valid IPv4 address"),
        }
    }
}
