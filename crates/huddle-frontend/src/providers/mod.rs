//! Context providers for shared call state and services.

pub mod i18n;
pub mod reactions;
pub mod room;
pub mod toasts;

pub use i18n::*;
pub use reactions::*;
pub use room::*;
pub use toasts::*;
