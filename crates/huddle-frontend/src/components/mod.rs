//! Reusable UI components for in-call reactions.
//!
//! Contains the reaction picker in the control bar, the floating emoji
//! overlay, and the toasts announcing reactions from other participants.

pub mod floating_emoji;
pub mod reactions_button;
pub mod toast_reaction;
pub mod toast_region;

pub use floating_emoji::*;
pub use reactions_button::*;
pub use toast_reaction::*;
pub use toast_region::*;
