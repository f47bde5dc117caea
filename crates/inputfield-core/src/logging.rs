//! Logging facilities for inputfield.
//!
//! inputfield uses the `tracing` crate for instrumentation. Nothing is printed
//! unless the host installs a subscriber:
//!
//! ```ignore
//! tracing_subscriber::fmt()
//!     .with_env_filter("inputfield=debug")
//!     .init();
//! ```
//!
//! Every event is emitted under one of the [`targets`] below, so a filter such
//! as `inputfield::placeholder=trace` isolates a single subsystem.

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Root target shared by all inputfield events.
    pub const ROOT: &str = "inputfield";
    /// Keystroke and paste admission.
    pub const INPUT: &str = "inputfield::input";
    /// Mode dispatch and value formatting.
    pub const FORMAT: &str = "inputfield::format";
    /// Placeholder state transitions.
    pub const PLACEHOLDER: &str = "inputfield::placeholder";
    /// Clipboard access.
    pub const CLIPBOARD: &str = "inputfield::clipboard";
    /// Signal emission.
    pub const SIGNAL: &str = "inputfield::signal";
    /// Configuration loading.
    pub const CONFIG: &str = "inputfield::config";
}

/// A guard that keeps a tracing span entered until dropped.
///
/// Used around host event handlers so that nested format and placeholder
/// events are attributed to the event that caused them.
#[derive(Debug)]
pub struct EventSpan {
    #[allow(dead_code)]
    span: tracing::span::EnteredSpan,
}

impl EventSpan {
    /// Enter a span named after the host event being handled.
    pub fn new(event: &'static str) -> Self {
        let span = tracing::trace_span!(target: targets::INPUT, "event", name = event);
        Self {
            span: span.entered(),
        }
    }
}

/// Trace-level event under the input target.
#[macro_export]
macro_rules! input_trace {
    ($($arg:tt)*) => {
        tracing::trace!(target: $crate::logging::targets::INPUT, $($arg)*)
    };
}

/// Debug-level event under the input target.
#[macro_export]
macro_rules! input_debug {
    ($($arg:tt)*) => {
        tracing::debug!(target: $crate::logging::targets::INPUT, $($arg)*)
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_targets_share_root_prefix() {
        for target in [
            targets::INPUT,
            targets::FORMAT,
            targets::PLACEHOLDER,
            targets::CLIPBOARD,
            targets::SIGNAL,
            targets::CONFIG,
        ] {
            assert!(target.starts_with(targets::ROOT));
        }
    }

    #[test]
    fn test_event_span() {
        // Just ensure it compiles and doesn't panic without a subscriber
        let _span = EventSpan::new("key_press");
        input_trace!(key = %'a', "inside span");
        input_debug!(chars = 1usize, "buffer updated");
    }
}
