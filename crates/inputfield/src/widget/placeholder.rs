//! Placeholder substitution.
//!
//! When enabled, a blank field shows placeholder text in the placeholder
//! style. The placeholder lives in the same buffer as user content, so the
//! controller tracks which of the two the buffer currently holds:
//!
//! ```text
//!                 buffer blank
//!  ShowingContent ────────────► ShowingPlaceholder
//!        ▲                            │
//!        └────────────────────────────┘
//!             buffer non-blank (user typed over it)
//! ```
//!
//! Every transition reports the new buffer contents and style through a
//! [`PlaceholderChange`]; the owner commits them and notifies the host.

use inputfield_core::logging::targets;
use serde::{Deserialize, Serialize};

use crate::style::TextStyle;

/// Placeholder configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaceholderConfig {
    pub enabled: bool,
    pub text: String,
    pub style: TextStyle,
}

impl Default for PlaceholderConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            text: "Enter Text".to_string(),
            style: TextStyle::placeholder(),
        }
    }
}

/// What the buffer currently holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PlaceholderState {
    #[default]
    ShowingContent,
    ShowingPlaceholder,
}

/// A buffer and style update produced by a placeholder transition.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaceholderChange {
    pub text: String,
    pub style: TextStyle,
}

/// Two-state placeholder machine.
#[derive(Debug, Clone, Default)]
pub struct PlaceholderController {
    config: PlaceholderConfig,
    state: PlaceholderState,
}

impl PlaceholderController {
    pub fn new(config: PlaceholderConfig) -> Self {
        Self {
            config,
            state: PlaceholderState::ShowingContent,
        }
    }

    pub fn config(&self) -> &PlaceholderConfig {
        &self.config
    }

    pub fn state(&self) -> PlaceholderState {
        self.state
    }

    /// Whether the buffer currently holds the placeholder text.
    pub fn is_showing(&self) -> bool {
        self.state == PlaceholderState::ShowingPlaceholder
    }

    /// Run the state machine against the current buffer.
    ///
    /// Returns the change to commit, or `None` if the state is unchanged.
    pub fn toggle(&mut self, buffer: &str, base_style: &TextStyle) -> Option<PlaceholderChange> {
        if !self.config.enabled {
            return None;
        }

        let blank = buffer.trim().is_empty();
        match self.state {
            PlaceholderState::ShowingContent if blank => Some(self.show()),
            PlaceholderState::ShowingPlaceholder if !blank && buffer != self.config.text => {
                Some(self.hide(base_style))
            }
            _ => None,
        }
    }

    /// Leave the placeholder state before user input is applied.
    ///
    /// Returns `None` when the placeholder is not showing.
    pub fn leave(&mut self, base_style: &TextStyle) -> Option<PlaceholderChange> {
        if self.is_showing() {
            Some(self.hide(base_style))
        } else {
            None
        }
    }

    /// Enable or disable the placeholder.
    ///
    /// Disabling while the placeholder shows clears it and restores the base style.
    pub fn set_enabled(&mut self, enabled: bool, base_style: &TextStyle) -> Option<PlaceholderChange> {
        if self.config.enabled == enabled {
            return None;
        }
        self.config.enabled = enabled;
        if enabled { None } else { self.leave(base_style) }
    }

    /// Change the placeholder text, re-applying it if currently shown.
    pub fn set_text(&mut self, text: impl Into<String>) -> Option<PlaceholderChange> {
        let text = text.into();
        if self.config.text == text {
            return None;
        }
        self.config.text = text;
        self.is_showing().then(|| self.current())
    }

    /// Change the placeholder style, re-applying it if currently shown.
    pub fn set_style(&mut self, style: TextStyle) -> Option<PlaceholderChange> {
        if self.config.style == style {
            return None;
        }
        self.config.style = style;
        self.is_showing().then(|| self.current())
    }

    fn show(&mut self) -> PlaceholderChange {
        tracing::trace!(target: targets::PLACEHOLDER, "showing placeholder");
        self.state = PlaceholderState::ShowingPlaceholder;
        self.current()
    }

    fn hide(&mut self, base_style: &TextStyle) -> PlaceholderChange {
        tracing::trace!(target: targets::PLACEHOLDER, "showing content");
        self.state = PlaceholderState::ShowingContent;
        PlaceholderChange {
            text: String::new(),
            style: base_style.clone(),
        }
    }

    fn current(&self) -> PlaceholderChange {
        PlaceholderChange {
            text: self.config.text.clone(),
            style: self.config.style.clone(),
        }
    }
}
