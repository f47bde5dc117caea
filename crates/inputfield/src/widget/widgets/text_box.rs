//! Mode-aware single-line text input.
//!
//! [`TextBox`] owns the text buffer and turns host events (keystrokes,
//! pastes, focus changes, validation requests) into buffer updates and
//! outgoing notifications. Rendering is left to the host: it listens to
//! [`TextBox::text_changed`], [`TextBox::style_changed`] and
//! [`TextBox::alignment_changed`] and draws accordingly.
//!
//! # Example
//!
//! ```
//! use inputfield::widget::{InputMode, KeyInput};
//! use inputfield::widget::widgets::TextBox;
//!
//! let mut text_box = TextBox::new();
//! text_box.set_mode(InputMode::Numeric);
//! text_box.set_use_decimals(true);
//!
//! text_box.focus_in();
//! // The host selected everything on focus-in, so typing replaces it.
//! text_box.clear();
//! for ch in "12.5".chars() {
//!     text_box.key_press(KeyInput::Char(ch));
//! }
//! text_box.focus_out();
//!
//! assert_eq!(text_box.text(), "12.50");
//! assert_eq!(text_box.numeric_value(), 12.5);
//! ```

use std::fmt;

use inputfield_core::{EventSpan, Property, Signal};
use inputfield_core::logging::targets;
use unicode_segmentation::UnicodeSegmentation;

use crate::config::TextBoxConfig;
use crate::error::ClipboardError;
use crate::platform::ClipboardSource;
use crate::style::{TextAlignment, TextStyle};
use crate::widget::clipboard_filter::check_clipboard_content;
use crate::widget::events::{KeyDisposition, KeyInput, PasteOutcome, RejectReason};
use crate::widget::formatter;
use crate::widget::limiter::CharacterLimiter;
use crate::widget::mode::{ActiveMode, DesignatorAlignment, InputMode, ModeRegistry, NumericConfig};
use crate::widget::numeric::{is_numeric_char, parse_numeric_value, strip_decoration, DECIMAL_SEPARATOR};
use crate::widget::placeholder::{PlaceholderChange, PlaceholderConfig, PlaceholderController, PlaceholderState};
use crate::widget::policy::Ipv4Policy;
use crate::widget::validator::{Ipv4Validator, NumericValidator, ValidationState, Validator};

/// A text-entry field that normalizes and validates its content per input mode.
///
/// # Signals
///
/// - `text_changed`: the buffer changed (carries the new buffer)
/// - `style_changed`: the host should apply a different text style
/// - `alignment_changed`: the host should apply a different alignment
/// - `validation_changed`: result of [`TextBox::validate`]
/// - `input_rejected`: a keystroke or paste was discarded
/// - `select_all_requested`: the host should select the whole text (on focus-in)
/// - `editing_finished`: focus was lost
///
/// # Modes
///
/// - [`InputMode::Default`]: free text, optionally length limited
/// - [`InputMode::Numeric`]: digits and one `.`, rendered as a whole number or
///   with a fixed number of decimals, optionally with a currency designator
/// - [`InputMode::Ipv4`]: dotted-quad addresses
pub struct TextBox {
    /// The buffer. Holds the placeholder text while the placeholder shows.
    text: String,

    registry: ModeRegistry,
    ipv4_policy: Ipv4Policy,
    placeholder: PlaceholderController,

    /// Style applied to user content.
    base_style: TextStyle,

    /// Style currently applied (base or placeholder).
    style: Property<TextStyle>,

    /// Alignment hint currently applied.
    alignment: Property<TextAlignment>,

    // Signals

    /// Signal emitted when the buffer changes.
    pub text_changed: Signal<String>,

    /// Signal emitted when the applied style changes.
    pub style_changed: Signal<TextStyle>,

    /// Signal emitted when the alignment hint changes.
    pub alignment_changed: Signal<TextAlignment>,

    /// Signal emitted with the result of every validation request.
    pub validation_changed: Signal<ValidationState>,

    /// Signal emitted when a keystroke or paste is discarded.
    pub input_rejected: Signal<RejectReason>,

    /// Signal emitted on focus-in so the host selects the whole text.
    pub select_all_requested: Signal<()>,

    /// Signal emitted when editing is finished (focus lost).
    pub editing_finished: Signal<()>,
}

impl TextBox {
    /// Create a free-text box with default configuration.
    pub fn new() -> Self {
        Self::with_config(TextBoxConfig::default())
    }

    /// Create a text box from a configuration.
    ///
    /// The initial empty buffer is formatted for the configured mode, and the
    /// placeholder is shown if enabled.
    pub fn with_config(config: TextBoxConfig) -> Self {
        let TextBoxConfig {
            mode,
            numeric,
            limiter,
            placeholder,
            base_style,
            ipv4,
        } = config;

        let mut text_box = Self {
            text: String::new(),
            registry: ModeRegistry::with_parts(mode, numeric, limiter),
            ipv4_policy: ipv4,
            placeholder: PlaceholderController::new(placeholder),
            style: Property::new(base_style.clone()),
            base_style,
            alignment: Property::new(TextAlignment::default()),
            text_changed: Signal::new(),
            style_changed: Signal::new(),
            alignment_changed: Signal::new(),
            validation_changed: Signal::new(),
            input_rejected: Signal::new(),
            select_all_requested: Signal::new(),
            editing_finished: Signal::new(),
        };
        text_box.refresh();
        text_box
    }

    /// Snapshot of the current configuration.
    pub fn config(&self) -> TextBoxConfig {
        TextBoxConfig {
            mode: self.registry.mode(),
            numeric: self.registry.numeric().clone(),
            limiter: self.registry.limiter().clone(),
            placeholder: self.placeholder.config().clone(),
            base_style: self.base_style.clone(),
            ipv4: self.ipv4_policy,
        }
    }

    // =========================================================================
    // Text Access
    // =========================================================================

    /// The raw buffer, including the placeholder text while it shows.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The logical value: the buffer, or empty while the placeholder shows.
    pub fn value(&self) -> &str {
        if self.placeholder.is_showing() {
            ""
        } else {
            &self.text
        }
    }

    /// The logical value with numeric decoration removed.
    ///
    /// Outside numeric mode this is the logical value unchanged.
    pub fn numeric_text(&self) -> String {
        strip_decoration(self.value(), self.registry.active())
    }

    /// The logical value parsed as a number.
    ///
    /// Returns `0.0` outside numeric mode and for content that does not parse.
    pub fn numeric_value(&self) -> f64 {
        match self.registry.active() {
            ActiveMode::Numeric(_) => parse_numeric_value(&self.numeric_text()),
            ActiveMode::Default | ActiveMode::Ipv4 => 0.0,
        }
    }

    /// Replace the buffer programmatically.
    ///
    /// The text is not formatted until the next focus change or validation.
    pub fn set_text(&mut self, text: impl Into<String>) {
        let _span = EventSpan::new("set_text");
        self.leave_placeholder();
        self.commit_text(text.into());
        self.toggle_placeholder();
    }

    /// Clear the buffer.
    pub fn clear(&mut self) {
        self.set_text(String::new());
    }

    /// Length of the logical value in characters.
    pub fn text_length(&self) -> usize {
        self.value().chars().count()
    }

    // =========================================================================
    // Host Events
    // =========================================================================

    /// Handle a keystroke.
    ///
    /// Accepted characters are appended to the buffer; backspace removes the
    /// last grapheme. While the placeholder shows, the first accepted key
    /// replaces it.
    pub fn key_press(&mut self, key: KeyInput) -> KeyDisposition {
        let _span = EventSpan::new("key_press");

        if let Err(reason) = self.check_key(key) {
            inputfield_core::input_debug!(?key, %reason, "keystroke rejected");
            self.input_rejected.emit(reason);
            return KeyDisposition::Rejected(reason);
        }

        self.leave_placeholder();
        let mut text = self.text.clone();
        match key {
            KeyInput::Char(ch) => text.push(ch),
            KeyInput::Backspace => {
                if let Some((start, _)) = text.grapheme_indices(true).next_back() {
                    text.truncate(start);
                }
            }
        }
        self.commit_text(text);
        self.toggle_placeholder();

        KeyDisposition::Accepted
    }

    /// Handle a paste of `candidate`.
    ///
    /// Admitted text replaces the whole buffer. Rejected text is discarded
    /// and the buffer is left as it was.
    pub fn paste(&mut self, candidate: &str) -> PasteOutcome {
        let _span = EventSpan::new("paste");

        let admitted = check_clipboard_content(
            candidate,
            self.value(),
            self.registry.active(),
            self.registry.limiter(),
            &self.ipv4_policy,
        );
        if let Err(reason) = admitted {
            inputfield_core::input_debug!(%reason, "paste rejected");
            self.input_rejected.emit(reason);
            return PasteOutcome::Rejected(reason);
        }

        self.leave_placeholder();
        self.commit_text(candidate.to_string());
        self.toggle_placeholder();

        PasteOutcome::Replaced
    }

    /// Read text from `source` and paste it.
    ///
    /// # Errors
    ///
    /// Returns an error if the clipboard cannot be read. Rejection of the
    /// clipboard content is not an error; it is reported in the outcome.
    pub fn paste_from<C: ClipboardSource + ?Sized>(
        &mut self,
        source: &mut C,
    ) -> Result<PasteOutcome, ClipboardError> {
        let text = source.read_text().inspect_err(|err| {
            tracing::debug!(target: targets::CLIPBOARD, %err, "clipboard read failed");
        })?;
        tracing::trace!(target: targets::CLIPBOARD, len = text.len(), "read clipboard text");
        Ok(self.paste(&text))
    }

    /// Handle the field gaining focus.
    ///
    /// Formats the value, strips currency decoration in numeric mode so the
    /// bare number is edited, and asks the host to select everything.
    pub fn focus_in(&mut self) {
        let _span = EventSpan::new("focus_in");

        self.reformat();
        if matches!(self.registry.active(), ActiveMode::Numeric(_)) && !self.placeholder.is_showing() {
            let bare = self.numeric_text();
            self.commit_text(bare);
        }
        self.select_all_requested.emit(());
        self.toggle_placeholder();
    }

    /// Handle the field losing focus.
    pub fn focus_out(&mut self) {
        let _span = EventSpan::new("focus_out");

        self.reformat();
        self.toggle_placeholder();
        self.editing_finished.emit(());
    }

    /// Validate the logical value, then format it.
    ///
    /// Free text is always acceptable. Numeric and IPv4 text is classified by
    /// [`NumericValidator`] and [`Ipv4Validator`].
    pub fn validate(&mut self) -> ValidationState {
        let _span = EventSpan::new("validate");

        let state = match self.registry.active() {
            ActiveMode::Default => ValidationState::Acceptable,
            ActiveMode::Numeric(cfg) => NumericValidator::new(cfg.clone()).validate(self.value()),
            ActiveMode::Ipv4 => Ipv4Validator::new().validate(self.value()),
        };
        tracing::debug!(target: targets::FORMAT, %state, "validated");

        self.validation_changed.emit(state);
        self.reformat();
        state
    }

    // =========================================================================
    // Mode & Numeric Configuration
    // =========================================================================

    pub fn mode(&self) -> InputMode {
        self.registry.mode()
    }

    /// Switch the input mode. The buffer is cleared and formatted for the new mode.
    pub fn set_mode(&mut self, mode: InputMode) {
        if !self.registry.set_mode(mode) {
            return;
        }
        tracing::debug!(target: targets::FORMAT, %mode, "input mode changed");
        self.leave_placeholder();
        self.commit_text(String::new());
        self.refresh();
    }

    pub fn numeric_config(&self) -> &NumericConfig {
        self.registry.numeric()
    }

    pub fn set_use_decimals(&mut self, use_decimals: bool) {
        if self.registry.set_use_decimals(use_decimals) {
            self.refresh();
        }
    }

    /// Set the number of decimal places. Values outside `1..=4` are ignored.
    pub fn set_decimal_places(&mut self, places: u8) {
        if self.registry.set_decimal_places(places) {
            self.refresh();
        }
    }

    pub fn set_use_currency(&mut self, use_currency: bool) {
        if self.registry.set_use_currency(use_currency) {
            self.refresh();
        }
    }

    /// Change the currency designator.
    ///
    /// In numeric mode the old designator is removed from the buffer first.
    pub fn set_currency_designator(&mut self, designator: impl Into<String>) {
        let designator = designator.into();
        if self.registry.numeric().currency_designator == designator {
            return;
        }
        if matches!(self.registry.active(), ActiveMode::Numeric(_)) && !self.placeholder.is_showing() {
            let bare = self.numeric_text();
            self.commit_text(bare);
        }
        self.registry.set_currency_designator(designator);
        self.refresh();
    }

    pub fn set_designator_alignment(&mut self, alignment: DesignatorAlignment) {
        if self.registry.set_designator_alignment(alignment) {
            self.refresh();
        }
    }

    // =========================================================================
    // Character Limiting
    // =========================================================================

    pub fn limiter(&self) -> &CharacterLimiter {
        self.registry.limiter()
    }

    /// Enable or disable character limiting. Applies from the next edit.
    pub fn set_character_limiting(&mut self, enabled: bool) {
        self.registry.limiter_mut().enabled = enabled;
    }

    /// Set the maximum number of characters. Applies from the next edit.
    pub fn set_maximum_chars(&mut self, maximum_chars: usize) {
        self.registry.limiter_mut().maximum_chars = maximum_chars;
    }

    // =========================================================================
    // IPv4 Policy
    // =========================================================================

    pub fn ipv4_policy(&self) -> Ipv4Policy {
        self.ipv4_policy
    }

    pub fn set_ipv4_policy(&mut self, policy: Ipv4Policy) {
        if self.ipv4_policy != policy {
            self.ipv4_policy = policy;
            self.refresh();
        }
    }

    // =========================================================================
    // Style & Placeholder
    // =========================================================================

    /// The style currently applied.
    pub fn style(&self) -> TextStyle {
        self.style.get()
    }

    /// The alignment hint currently applied.
    pub fn alignment(&self) -> TextAlignment {
        self.alignment.get()
    }

    pub fn base_style(&self) -> &TextStyle {
        &self.base_style
    }

    /// Set the style used for user content.
    pub fn set_base_style(&mut self, style: TextStyle) {
        if self.base_style == style {
            return;
        }
        self.base_style = style;
        if !self.placeholder.is_showing() {
            self.apply_style(self.base_style.clone());
        }
    }

    pub fn placeholder_config(&self) -> &PlaceholderConfig {
        self.placeholder.config()
    }

    pub fn placeholder_state(&self) -> PlaceholderState {
        self.placeholder.state()
    }

    /// Enable or disable the placeholder.
    ///
    /// Enabling shows it right away if the buffer is blank. Disabling while it
    /// shows clears the buffer and restores the base style.
    pub fn set_use_placeholder(&mut self, enabled: bool) {
        let change = self.placeholder.set_enabled(enabled, &self.base_style);
        self.apply_placeholder_change(change);
        if enabled {
            self.toggle_placeholder();
        }
    }

    pub fn set_placeholder_text(&mut self, text: impl Into<String>) {
        let change = self.placeholder.set_text(text);
        self.apply_placeholder_change(change);
    }

    pub fn set_placeholder_style(&mut self, style: TextStyle) {
        let change = self.placeholder.set_style(style);
        self.apply_placeholder_change(change);
    }

    // =========================================================================
    // Internals
    // =========================================================================

    fn check_key(&self, key: KeyInput) -> Result<(), RejectReason> {
        let ch = match key {
            KeyInput::Backspace => return Ok(()),
            KeyInput::Char(ch) => ch,
        };

        let mode = self.registry.active();
        let at_limit = self.registry.limiter().is_at_limit(self.text_length(), mode);

        match mode {
            ActiveMode::Default => {
                if at_limit {
                    return Err(RejectReason::AtLimit);
                }
            }
            ActiveMode::Numeric(_) => {
                if !is_numeric_char(key) {
                    return Err(RejectReason::DisallowedChar);
                }
                if at_limit {
                    return Err(RejectReason::AtLimit);
                }
                if ch == DECIMAL_SEPARATOR && self.value().contains(DECIMAL_SEPARATOR) {
                    return Err(RejectReason::DuplicateSeparator);
                }
            }
            ActiveMode::Ipv4 => {
                if !(ch.is_ascii_digit() || ch == '.') {
                    return Err(RejectReason::DisallowedChar);
                }
                if at_limit {
                    return Err(RejectReason::AtLimit);
                }
            }
        }
        Ok(())
    }

    /// Format the logical value for the active mode and commit the result.
    fn reformat(&mut self) {
        let formatted = formatter::format(self.value(), self.registry.active(), &self.ipv4_policy);
        tracing::trace!(
            target: targets::FORMAT,
            mode = %self.registry.mode(),
            text = %formatted.text,
            "formatted"
        );

        if self.placeholder.is_showing() {
            if formatted.text.trim().is_empty() {
                // Nothing to show over the placeholder.
                if let Some(alignment) = formatted.alignment {
                    self.apply_alignment(alignment);
                }
                return;
            }
            self.leave_placeholder();
        }

        self.commit_text(formatted.text);
        if let Some(alignment) = formatted.alignment {
            self.apply_alignment(alignment);
        }
    }

    /// Reformat and re-run the placeholder machine after a configuration change.
    fn refresh(&mut self) {
        self.reformat();
        self.toggle_placeholder();
    }

    fn toggle_placeholder(&mut self) {
        let change = self.placeholder.toggle(&self.text, &self.base_style);
        self.apply_placeholder_change(change);
    }

    fn leave_placeholder(&mut self) {
        let change = self.placeholder.leave(&self.base_style);
        self.apply_placeholder_change(change);
    }

    fn apply_placeholder_change(&mut self, change: Option<PlaceholderChange>) {
        if let Some(PlaceholderChange { text, style }) = change {
            self.commit_text(text);
            self.apply_style(style);
        }
    }

    fn commit_text(&mut self, text: String) {
        if self.text == text {
            return;
        }
        self.text = text;
        inputfield_core::input_trace!(chars = self.text.chars().count(), "buffer updated");
        self.text_changed.emit(self.text.clone());
    }

    fn apply_style(&mut self, style: TextStyle) {
        if self.style.set(style.clone()) {
            self.style_changed.emit(style);
        }
    }

    fn apply_alignment(&mut self, alignment: TextAlignment) {
        if self.alignment.set(alignment) {
            self.alignment_changed.emit(alignment);
        }
    }
}

impl Default for TextBox {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for TextBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TextBox")
            .field("text", &self.text)
            .field("mode", &self.registry.mode())
            .field("placeholder", &self.placeholder.state())
            .finish_non_exhaustive()
    }
}
