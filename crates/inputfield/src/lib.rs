//! inputfield - text-input normalization and validation for line-edit widgets.
//!
//! This is the main crate that re-exports the core systems and provides the
//! engine itself. A host widget feeds its keystrokes, pastes and focus
//! changes into a [`TextBox`](widget::widgets::TextBox) and renders whatever
//! the text box reports back.
//!
//! # Example
//!
//! ```
//! use inputfield::prelude::*;
//!
//! let mut field = TextBox::new();
//! field.set_mode(InputMode::Ipv4);
//! field.set_ipv4_policy(Ipv4Policy::corrected());
//!
//! field.text_changed.connect(|text| println!("display: {text}"));
//!
//! assert_eq!(field.paste("10.0.0.1"), PasteOutcome::Replaced);
//! assert_eq!(field.validate(), ValidationState::Acceptable);
//! assert_eq!(field.text(), "10.0.0.1");
//! ```
//!
//! # Features
//!
//! - `system-clipboard` (default): [`SystemClipboard`](platform::SystemClipboard)
//!   reads the platform clipboard through `arboard`

pub use inputfield_core::*;

pub mod config;
pub mod error;
pub mod platform;
pub mod prelude;
pub mod style;
pub mod widget;
