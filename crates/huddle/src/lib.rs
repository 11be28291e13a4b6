//! The shared library for Huddle's in-call reactions.
//!
//! Everything here is independent of the UI framework: the wire payload, the
//! floating emoji timing model and overlay arena, the reaction picker state,
//! the data channel abstraction, translations and the toast queue. The Yew
//! frontend drives these from browser callbacks.

pub mod broadcast;
pub mod config;
pub mod data;
pub mod dispatch;
pub mod effect;
pub mod errors;
pub mod i18n;
pub mod id;
pub mod log;
pub mod macros;
pub mod overlay;
pub mod picker;
pub mod toast;

pub use serde;
pub use serde_json;
pub use tracing;
