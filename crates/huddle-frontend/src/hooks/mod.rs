//! Hooks wrapping browser resources with component-scoped lifetimes.

pub mod use_animation_frame;
pub mod use_room;

pub use use_animation_frame::*;
pub use use_room::*;
