//! Clipboard access for paste handling.
//!
//! [`TextBox::paste_from`](crate::widget::widgets::TextBox::paste_from) reads
//! from any [`ClipboardSource`]. Two sources ship with the crate:
//!
//! - [`MemoryClipboard`]: an in-process clipboard, useful for tests and for
//!   hosts that manage the clipboard themselves
//! - [`SystemClipboard`]: the platform clipboard through `arboard`
//!   (requires the `system-clipboard` feature, enabled by default)
//!
//! # Example
//!
//! ```ignore
//! use inputfield::platform::SystemClipboard;
//! use inputfield::widget::widgets::TextBox;
//!
//! let mut text_box = TextBox::new();
//! if let Ok(mut clipboard) = SystemClipboard::new() {
//!     text_box.paste_from(&mut clipboard).ok();
//! }
//! ```
//!
//! # Platform Notes
//!
//! - **Windows**: Uses the Win32 clipboard API
//! - **macOS**: Uses NSPasteboard
//! - **Linux**: Uses X11 selections or Wayland data-control protocol

use crate::error::ClipboardError;

/// A place pasted text is read from.
pub trait ClipboardSource {
    /// Read the current text content.
    ///
    /// # Errors
    ///
    /// Returns [`ClipboardError::Empty`] when there is no text, or
    /// [`ClipboardError::Unavailable`] when the clipboard cannot be accessed.
    fn read_text(&mut self) -> Result<String, ClipboardError>;
}

impl<C: ClipboardSource + ?Sized> ClipboardSource for &mut C {
    fn read_text(&mut self) -> Result<String, ClipboardError> {
        (**self).read_text()
    }
}

/// An in-memory clipboard.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryClipboard {
    text: Option<String>,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a clipboard already holding `text`.
    pub fn with_text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
        }
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = Some(text.into());
    }

    pub fn clear(&mut self) {
        self.text = None;
    }
}

impl ClipboardSource for MemoryClipboard {
    fn read_text(&mut self) -> Result<String, ClipboardError> {
        self.text.clone().ok_or(ClipboardError::Empty)
    }
}

/// The platform clipboard.
///
/// Create it when needed and drop it after use. While it is `Send`, clipboard
/// access is most reliable from the main/UI thread.
#[cfg(feature = "system-clipboard")]
pub struct SystemClipboard {
    inner: arboard::Clipboard,
}

#[cfg(feature = "system-clipboard")]
impl SystemClipboard {
    /// Open the system clipboard.
    ///
    /// # Errors
    ///
    /// Returns an error if the clipboard is unavailable or locked by another process.
    pub fn new() -> Result<Self, ClipboardError> {
        Ok(Self {
            inner: arboard::Clipboard::new()?,
        })
    }

    /// Get the current text content.
    pub fn get_text(&mut self) -> Result<String, ClipboardError> {
        self.inner.get_text().map_err(Into::into)
    }

    /// Replace the clipboard content with `text`.
    pub fn set_text(&mut self, text: impl AsRef<str>) -> Result<(), ClipboardError> {
        self.inner.set_text(text.as_ref()).map_err(Into::into)
    }
}

#[cfg(feature = "system-clipboard")]
impl ClipboardSource for SystemClipboard {
    fn read_text(&mut self) -> Result<String, ClipboardError> {
        self.get_text()
    }
}

#[cfg(feature = "system-clipboard")]
impl std::fmt::Debug for SystemClipboard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SystemClipboard").finish_non_exhaustive()
    }
}

#[cfg(feature = "system-clipboard")]
impl From<arboard::Error> for ClipboardError {
    fn from(err: arboard::Error) -> Self {
        match err {
            arboard::Error::ContentNotAvailable => ClipboardError::Empty,
            other => ClipboardError::Unavailable(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_clipboard() {
        let mut clipboard = MemoryClipboard::new();
        assert!(matches!(clipboard.read_text(), Err(ClipboardError::Empty)));

        clipboard.set_text("123.45");
        assert_eq!(clipboard.read_text().unwrap(), "123.45");
        // Reading does not consume.
        assert_eq!(clipboard.read_text().unwrap(), "123.45");

        clipboard.clear();
        assert!(clipboard.read_text().is_err());
    }

    #[test]
    fn test_clipboard_error_display() {
        assert_eq!(ClipboardError::Empty.to_string(), "clipboard contains no text");
        assert_eq!(
            ClipboardError::Unavailable("locked".into()).to_string(),
            "clipboard unavailable: locked"
        );
    }

    #[cfg(feature = "system-clipboard")]
    #[test]
    #[ignore = "requires a display server"]
    fn test_system_clipboard_roundtrip() {
        let mut clipboard = SystemClipboard::new().unwrap();
        clipboard.set_text("10.0.0.1").unwrap();
        assert_eq!(clipboard.read_text().unwrap(), "10.0.0.1");
    }
}
