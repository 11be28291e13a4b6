//! Open/closed state of the reaction picker in the control bar.

use crate::config::EMOJIS;
use crate::data::NotificationPayload;

/// Whether a pointer-down landed on the reaction control or somewhere else.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerTarget {
    Inside,
    Outside,
}

impl From<bool> for PointerTarget {
    fn from(inside: bool) -> Self {
        if inside {
            PointerTarget::Inside
        } else {
            PointerTarget::Outside
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReactionPicker {
    palette: Vec<String>,
    is_open: bool,
}

impl ReactionPicker {
    pub fn new(palette: Vec<String>) -> Self {
        Self {
            palette,
            is_open: false,
        }
    }

    pub fn palette(&self) -> &[String] {
        &self.palette
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn toggle(&mut self) {
        self.is_open = !self.is_open;
    }

    pub fn close(&mut self) {
        self.is_open = false;
    }

    /// A pointer-down outside the control closes the picker; one inside leaves it alone.
    pub fn on_pointer_down(&mut self, target: PointerTarget) {
        if target == PointerTarget::Outside {
            self.close();
        }
    }

    /// Closes the picker and returns the notification announcing `emoji`.
    pub fn select(&mut self, emoji: &str) -> NotificationPayload {
        self.close();
        NotificationPayload::reaction(emoji)
    }
}

impl Default for ReactionPicker {
    fn default() -> Self {
        Self::new(EMOJIS.iter().map(|emoji| emoji.to_string()).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_closed_with_default_palette() {
        let picker = ReactionPicker::default();
        assert!(!picker.is_open());
        assert_eq!(picker.palette(), ["👍", "👎", "👏", "❤️", "😂", "😮", "🎉"]);
    }

    #[test]
    fn toggle_flips_state() {
        let mut picker = ReactionPicker::default();
        picker.toggle();
        assert!(picker.is_open());
        picker.toggle();
        assert!(!picker.is_open());
    }

    #[test]
    fn pointer_down_outside_closes() {
        let mut picker = ReactionPicker::default();
        picker.toggle();

        picker.on_pointer_down(PointerTarget::Inside);
        assert!(picker.is_open());

        picker.on_pointer_down(false.into());
        assert!(!picker.is_open());
    }

    #[test]
    fn pointer_down_while_closed_stays_closed() {
        let mut picker = ReactionPicker::default();
        picker.on_pointer_down(PointerTarget::Outside);
        picker.on_pointer_down(PointerTarget::Inside);
        assert!(!picker.is_open());
    }

    #[test]
    fn select_closes_and_builds_payload() {
        let mut picker = ReactionPicker::default();
        picker.toggle();

        let payload = picker.select("👏");
        assert!(!picker.is_open());
        assert_eq!(payload, NotificationPayload::reaction("👏"));
    }
}
