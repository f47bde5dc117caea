//! Input validation for the text box.
//!
//! Validation follows a three-state model:
//!
//! - [`ValidationState::Invalid`]: the input is wrong and further typing cannot fix it
//! - [`ValidationState::Intermediate`]: the input is incomplete but could become valid
//! - [`ValidationState::Acceptable`]: the input is valid as a final result
//!
//! [`Ipv4Validator`] and [`NumericValidator`] classify the logical value of
//! the IPv4 and numeric modes. The plain [`is_valid_ipv4`] check is what the
//! formatter and the clipboard filter use.
//!
//! # Example
//!
//! ```
//! use inputfield::widget::validator::{Ipv4Validator, ValidationState, Validator};
//!
//! let validator = Ipv4Validator::new();
//! assert_eq!(validator.validate("192.168.0.1"), ValidationState::Acceptable);
//! assert_eq!(validator.validate("192.168."), ValidationState::Intermediate);
//! assert_eq!(validator.validate("192.168.0.256"), ValidationState::Invalid);
//! ```

use std::fmt;
use std::sync::{Arc, OnceLock};

use regex::Regex;

use super::mode::{ActiveMode, NumericConfig};
use super::numeric::{strip_decoration, DecimalText};

/// The address written by the formatter when IPv4 input has to be replaced.
pub const UNSPECIFIED_IPV4: &str = "0.0.0.0";

/// The result of validating input text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ValidationState {
    /// The input is clearly invalid and cannot be made valid by further editing.
    Invalid,
    /// The input is incomplete but could become valid with more input.
    Intermediate,
    /// The input is valid and acceptable as a final result.
    #[default]
    Acceptable,
}

impl fmt::Display for ValidationState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationState::Invalid => write!(f, "Invalid"),
            ValidationState::Intermediate => write!(f, "Intermediate"),
            ValidationState::Acceptable => write!(f, "Acceptable"),
        }
    }
}

/// Trait for input validators.
///
/// Validators must be `Send + Sync` so they can be shared with signal slots.
pub trait Validator: Send + Sync {
    /// Validate the input string.
    fn validate(&self, input: &str) -> ValidationState;

    /// Attempt to turn non-acceptable input into acceptable input.
    ///
    /// `TextBox` never calls this: the formatter already normalizes the
    /// buffer. Hosts that receive text from elsewhere can run it through
    /// `fixup` before handing it to `TextBox::set_text`.
    ///
    /// The default implementation returns `None`, meaning no fixup is attempted.
    fn fixup(&self, _input: &str) -> Option<String> {
        None
    }
}

impl<V: Validator + ?Sized> Validator for Arc<V> {
    fn validate(&self, input: &str) -> ValidationState {
        (**self).validate(input)
    }

    fn fixup(&self, input: &str) -> Option<String> {
        (**self).fixup(input)
    }
}

impl<V: Validator + ?Sized> Validator for Box<V> {
    fn validate(&self, input: &str) -> ValidationState {
        (**self).validate(input)
    }

    fn fixup(&self, input: &str) -> Option<String> {
        (**self).fixup(input)
    }
}

/// Check whether `text` is a dotted-quad IPv4 address.
///
/// Blank text is invalid. Each of the four segments must consist of ASCII
/// digits only and fit in `0..=255`; signs and whitespace are rejected.
pub fn is_valid_ipv4(text: &str) -> bool {
    if text.trim().is_empty() {
        return false;
    }

    let mut segments = 0usize;
    for segment in text.split('.') {
        segments += 1;
        if segments > 4 || !is_octet(segment) {
            return false;
        }
    }
    segments == 4
}

fn is_octet(segment: &str) -> bool {
    !segment.is_empty()
        && segment.bytes().all(|b| b.is_ascii_digit())
        && segment.parse::<u8>().is_ok()
}

// ============================================================================
// IPv4
// ============================================================================

fn ipv4_prefix_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        // Up to four dot-separated groups of at most three digits; any group may be empty.
        Regex::new(r"^[0-9]{0,3}(\.[0-9]{0,3}){0,3}$").expect("IPv4 prefix pattern is valid")
    })
}

/// Validates dotted-quad IPv4 addresses.
///
/// A complete address is acceptable. Anything that is still a prefix of some
/// address, such as `"192.168."` or a blank field, is intermediate.
#[derive(Debug, Clone, Copy, Default)]
pub struct Ipv4Validator;

impl Ipv4Validator {
    pub fn new() -> Self {
        Self
    }
}

impl Validator for Ipv4Validator {
    fn validate(&self, input: &str) -> ValidationState {
        if is_valid_ipv4(input) {
            return ValidationState::Acceptable;
        }

        let is_prefix = ipv4_prefix_pattern().is_match(input)
            && input
                .split('.')
                .filter(|segment| !segment.is_empty())
                .all(|segment| segment.parse::<u8>().is_ok());

        if is_prefix {
            ValidationState::Intermediate
        } else {
            ValidationState::Invalid
        }
    }

    /// Blank input becomes [`UNSPECIFIED_IPV4`]; anything else is left to the user.
    fn fixup(&self, input: &str) -> Option<String> {
        if input.trim().is_empty() {
            Some(UNSPECIFIED_IPV4.to_string())
        } else {
            None
        }
    }
}

// ============================================================================
// Numeric
// ============================================================================

/// Validates numeric-mode text, ignoring currency decoration.
#[derive(Debug, Clone, Default)]
pub struct NumericValidator {
    config: NumericConfig,
}

impl NumericValidator {
    pub fn new(config: NumericConfig) -> Self {
        Self { config }
    }
}

impl Validator for NumericValidator {
    fn validate(&self, input: &str) -> ValidationState {
        let stripped = strip_decoration(input, ActiveMode::Numeric(&self.config));
        match stripped.as_str() {
            "" | "." | "-" | "+" => ValidationState::Intermediate,
            _ if DecimalText::parse(&stripped).is_some() => ValidationState::Acceptable,
            _ => ValidationState::Invalid,
        }
    }

    /// Text that does not parse as a number becomes `"0"`.
    fn fixup(&self, input: &str) -> Option<String> {
        let stripped = strip_decoration(input, ActiveMode::Numeric(&self.config));
        if DecimalText::parse(&stripped).is_some() {
            None
        } else {
            Some("0".to_string())
        }
    }
}
