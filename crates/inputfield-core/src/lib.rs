//! Core systems for inputfield.
//!
//! This crate provides the foundational pieces the text-input engine is
//! built on:
//!
//! - **Signal/Slot System**: [`Signal`] notifications from the engine to its host
//! - **Property System**: change-detecting [`Property`] values that keep setters idempotent
//! - **Logging**: `tracing` targets and helper macros shared by every subsystem
//!
//! # Signal/Slot Example
//!
//! ```
//! use inputfield_core::Signal;
//!
//! let value_changed = Signal::<i32>::new();
//!
//! let conn_id = value_changed.connect(|value| {
//!     println!("Value changed to: {}", value);
//! });
//!
//! value_changed.emit(42);
//! value_changed.disconnect(conn_id);
//! ```

pub mod logging;
pub mod property;
pub mod signal;

pub use logging::EventSpan;
pub use property::Property;
pub use signal::{ConnectionId, Signal};
