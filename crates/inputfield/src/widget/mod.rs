//! The text-input engine.
//!
//! The engine is split into small components, leaf to root:
//!
//! - [`mode`]: the active [`InputMode`] and per-mode configuration
//! - [`numeric`]: decoration stripping, character classes and exact decimal parsing
//! - [`formatter`]: renders the logical value back into display text
//! - [`limiter`]: character-count limiting
//! - [`clipboard_filter`]: admission of pasted text
//! - [`validator`]: IPv4 and numeric validation
//! - [`placeholder`]: the placeholder state machine
//! - [`policy`]: IPv4 compatibility switches
//!
//! Components are pure functions over borrowed configuration. The stateful
//! [`widgets::TextBox`] owns the buffer, feeds host events through them and
//! emits the resulting notifications.
//!
//! # Modes
//!
//! Components dispatch on [`ActiveMode`], a borrowed view of the active mode
//! in which the numeric variant carries its [`NumericConfig`]:
//!
//! ```
//! use inputfield::widget::{ActiveMode, ModeRegistry, InputMode};
//!
//! let mut registry = ModeRegistry::new();
//! registry.set_mode(InputMode::Numeric);
//!
//! match registry.active() {
//!     ActiveMode::Numeric(cfg) => assert_eq!(cfg.currency_designator, "€"),
//!     other => panic!("unexpected mode {other:?}"),
//! }
//! ```

pub mod clipboard_filter;
mod events;
pub mod formatter;
pub mod limiter;
pub mod mode;
pub mod numeric;
pub mod placeholder;
pub mod policy;
pub mod validator;
pub mod widgets;

pub use clipboard_filter::{check_clipboard_content, is_clipboard_content_acceptable};
pub use events::{KeyDisposition, KeyInput, PasteOutcome, RejectReason};
pub use formatter::Formatted;
pub use limiter::CharacterLimiter;
pub use mode::{ActiveMode, DecimalPlaces, DesignatorAlignment, InputMode, ModeRegistry, NumericConfig};
pub use numeric::DecimalText;
pub use placeholder::{PlaceholderConfig, PlaceholderController, PlaceholderState};
pub use policy::{Ipv4FormatPolicy, Ipv4Policy, PasteValidation};
pub use validator::{is_valid_ipv4, Ipv4Validator, NumericValidator, ValidationState, Validator};
