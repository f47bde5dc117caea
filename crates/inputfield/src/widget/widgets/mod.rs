//! Stateful widgets built on the engine components.
//!
//! - [`TextBox`]: mode-aware single-line text input

mod text_box;

pub use text_box::TextBox;
