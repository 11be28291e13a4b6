//! Tunables for the reaction effect, the toast queue and the picker palette.
//!
//! Every struct deserializes with `#[serde(default)]`, so a partial JSON
//! document only overrides the fields it names.

use serde::{Deserialize, Serialize};

/// Number of floating emoji spawned per reaction.
pub const EMOJI_COUNT: usize = 5;
/// Delay between consecutive floating emoji of one reaction, in ms.
pub const STAGGER_MS: f64 = 100.0;
/// How long a single floating emoji takes to rise and fade, in ms.
pub const DURATION_MS: f64 = 3000.0;
/// How far a floating emoji rises over its lifetime, in px.
pub const RISE_PX: f64 = 50.0;
/// Extra time before a burst is removed. Each emoji starts its clock on its
/// first animation frame, which lands after the burst was spawned.
pub const FRAME_SLACK_MS: f64 = 50.0;

pub const TOAST_TIMEOUT_MS: f64 = 5000.0;
pub const MAX_VISIBLE_TOASTS: usize = 3;

/// The reactions offered by the picker, in display order.
pub const EMOJIS: [&str; 7] = ["👍", "👎", "👏", "❤️", "😂", "😮", "🎉"];

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct EffectTiming {
    pub duration_ms: f64,
    pub emoji_count: usize,
    pub stagger_ms: f64,
    pub rise_px: f64,
}

impl EffectTiming {
    /// Stagger delay of the `index`-th emoji of a burst.
    pub fn delay_for(&self, index: usize) -> f64 {
        index as f64 * self.stagger_ms
    }

    /// Time from the first frame until the last emoji of a burst has faded out.
    pub fn burst_lifetime_ms(&self) -> f64 {
        self.duration_ms + self.delay_for(self.emoji_count.saturating_sub(1))
    }

    /// Time from spawn until a burst can be removed without cutting off its
    /// last emoji.
    pub fn removal_delay_ms(&self) -> f64 {
        self.burst_lifetime_ms() + FRAME_SLACK_MS
    }
}

impl Default for EffectTiming {
    fn default() -> Self {
        Self {
            duration_ms: DURATION_MS,
            emoji_count: EMOJI_COUNT,
            stagger_ms: STAGGER_MS,
            rise_px: RISE_PX,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct ToastSettings {
    pub timeout_ms: f64,
    pub max_visible: usize,
}

impl Default for ToastSettings {
    fn default() -> Self {
        Self {
            timeout_ms: TOAST_TIMEOUT_MS,
            max_visible: MAX_VISIBLE_TOASTS,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct ReactionsConfig {
    pub effect: EffectTiming,
    pub toast: ToastSettings,
    pub palette: Vec<String>,
}

impl ReactionsConfig {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

impl Default for ReactionsConfig {
    fn default() -> Self {
        Self {
            effect: EffectTiming::default(),
            toast: ToastSettings::default(),
            palette: EMOJIS.iter().map(|emoji| emoji.to_string()).collect(),
        }
    }
}
