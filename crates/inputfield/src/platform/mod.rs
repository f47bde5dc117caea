//! Platform services.
//!
//! Only clipboard access is needed by the engine:
//!
//! ```ignore
//! use inputfield::platform::{ClipboardSource, MemoryClipboard};
//!
//! let mut clipboard = MemoryClipboard::with_text("10.0.0.1");
//! let text = clipboard.read_text()?;
//! ```

mod clipboard;

pub use clipboard::{ClipboardSource, MemoryClipboard};

#[cfg(feature = "system-clipboard")]
pub use clipboard::SystemClipboard;
