//! Prelude module for inputfield.
//!
//! ```ignore
//! use inputfield::prelude::*;
//! ```

// ============================================================================
// Signal/Slot and Property System
// ============================================================================

pub use crate::{ConnectionId, Property, Signal};

// ============================================================================
// Text Box
// ============================================================================

pub use crate::config::TextBoxConfig;
pub use crate::widget::widgets::TextBox;
pub use crate::widget::{
    DesignatorAlignment, InputMode, Ipv4Policy, KeyDisposition, KeyInput, PasteOutcome,
    PlaceholderState, RejectReason, ValidationState,
};

// ============================================================================
// Style, Clipboard and Errors
// ============================================================================

pub use crate::error::{ClipboardError, ConfigError};
pub use crate::platform::{ClipboardSource, MemoryClipboard};
pub use crate::style::{Color, Font, FontStyle, TextAlignment, TextStyle};
