//! Timing model for a single floating emoji.
//!
//! A floating emoji waits for its stagger delay, then rises by
//! [`EffectTiming::rise_px`] while fading from fully opaque to transparent over
//! [`EffectTiming::duration_ms`]. Everything here is a pure function of the
//! timestamps fed to [`FloatingEmoji::tick`], so the same model drives the
//! browser's `requestAnimationFrame` loop and the unit tests.

use crate::config::EffectTiming;
use crate::id::InstanceId;

/// Size of the area emoji may be placed in, in px.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Where a floating emoji starts, relative to the top-left of the viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Position {
    pub left: f64,
    pub top: f64,
}

impl Position {
    /// Picks a position uniformly inside `viewport`.
    /// `random` must yield values in `[0, 1)`, like `Math.random`.
    pub fn random_within(viewport: Viewport, random: &mut impl FnMut() -> f64) -> Self {
        Self {
            left: random() * viewport.width,
            top: random() * viewport.height,
        }
    }
}

/// What to draw for one floating emoji on one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    /// Vertical displacement from the start position, in px (negative is up).
    pub offset_y: f64,
    pub opacity: f64,
}

impl Frame {
    pub const HIDDEN: Frame = Frame {
        offset_y: 0.0,
        opacity: 0.0,
    };

    /// The frame for an emoji whose delay elapsed `elapsed` ms ago.
    /// Negative `elapsed` means the emoji has not started yet.
    pub fn at(elapsed: f64, timing: &EffectTiming) -> Frame {
        if elapsed < 0.0 {
            return Frame::HIDDEN;
        }

        let progress = if timing.duration_ms > 0.0 {
            (elapsed / timing.duration_ms).clamp(0.0, 1.0)
        } else {
            1.0
        };

        Frame {
            offset_y: -timing.rise_px * progress,
            opacity: 1.0 - progress,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.opacity > 0.0
    }

    /// CSS `transform` for an emoji drawn at `position`.
    pub fn transform(&self, position: Position) -> String {
        format!(
            "translate({}px, {}px)",
            position.left,
            position.top + self.offset_y
        )
    }
}

/// Result of advancing a [`FloatingEmoji`] to a new timestamp.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tick {
    pub frame: Frame,
    /// Whether another animation frame should be requested.
    pub keep_going: bool,
}

/// One emoji of a reaction burst.
#[derive(Debug, Clone, PartialEq)]
pub struct FloatingEmoji {
    id: InstanceId,
    emoji: String,
    delay_ms: f64,
    position: Position,
    timing: EffectTiming,
    started_at: Option<f64>,
}

impl FloatingEmoji {
    pub fn new(
        id: InstanceId,
        emoji: impl Into<String>,
        delay_ms: f64,
        position: Position,
        timing: EffectTiming,
    ) -> Self {
        Self {
            id,
            emoji: emoji.into(),
            delay_ms,
            position,
            timing,
            started_at: None,
        }
    }

    pub fn id(&self) -> InstanceId {
        self.id
    }

    pub fn emoji(&self) -> &str {
        &self.emoji
    }

    pub fn delay_ms(&self) -> f64 {
        self.delay_ms
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn started_at(&self) -> Option<f64> {
        self.started_at
    }

    /// Time since this emoji's delay elapsed. Before the first tick the
    /// emoji has not started, so this is `-delay`.
    pub fn elapsed(&self, now: f64) -> f64 {
        match self.started_at {
            Some(start) => now - start - self.delay_ms,
            None => -self.delay_ms,
        }
    }

    pub fn frame_at(&self, now: f64) -> Frame {
        Frame::at(self.elapsed(now), &self.timing)
    }

    /// Advances to `now`. The first call captures the start timestamp.
    pub fn tick(&mut self, now: f64) -> Tick {
        if self.started_at.is_none() {
            self.started_at = Some(now);
        }

        let elapsed = self.elapsed(now);
        Tick {
            frame: Frame::at(elapsed, &self.timing),
            keep_going: elapsed < self.timing.duration_ms,
        }
    }

    /// True once delay plus duration have passed since the first tick.
    pub fn is_finished(&self, now: f64) -> bool {
        self.started_at.is_some() && self.elapsed(now) >= self.timing.duration_ms
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;
    const DURATION: f64 = crate::config::DURATION_MS;

    fn emoji_with_delay(delay_ms: f64) -> FloatingEmoji {
        FloatingEmoji::new(
            InstanceId::from_raw(0),
            "😂",
            delay_ms,
            Position {
                left: 10.0,
                top: 200.0,
            },
            EffectTiming::default(),
        )
    }

    #[test]
    fn hidden_until_delay_has_passed() {
        let mut emoji = emoji_with_delay(300.0);
        emoji.tick(1000.0);

        for t in [0.0, 1.0, 150.0, 299.0, 299.999] {
            let frame = emoji.frame_at(1000.0 + t);
            assert_eq!(frame.opacity, 0.0, "t = {t}");
            assert_eq!(frame.offset_y, 0.0, "t = {t}");
            assert!(!frame.is_visible());
        }
    }

    #[test]
    fn rises_and_fades_linearly_after_delay() {
        let delay = 200.0;
        let duration = DURATION;
        let mut emoji = emoji_with_delay(delay);
        emoji.tick(0.0);

        let mut previous: Option<Frame> = None;
        for step in 0..=30 {
            let t = delay + step as f64 * 100.0;
            let frame = emoji.frame_at(t);
            let expected = (t - delay) / duration;

            assert!((frame.opacity - (1.0 - expected)).abs() < EPSILON);
            assert!((frame.offset_y - (-50.0 * expected)).abs() < EPSILON);

            if let Some(previous) = previous {
                assert!(frame.opacity < previous.opacity);
                assert!(frame.offset_y < previous.offset_y);
            }
            previous = Some(frame);
        }
    }

    #[test]
    fn fully_visible_at_delay_and_gone_at_end() {
        let mut emoji = emoji_with_delay(100.0);
        emoji.tick(50.0);

        assert_eq!(emoji.frame_at(150.0).opacity, 1.0);

        let end = emoji.frame_at(50.0 + 100.0 + DURATION);
        assert_eq!(end.opacity, 0.0);
        assert_eq!(end.offset_y, -50.0);

        // Clamped past the end
        assert_eq!(emoji.frame_at(1_000_000.0), end);
    }

    #[test]
    fn start_is_captured_on_first_tick() {
        let mut emoji = emoji_with_delay(0.0);
        assert_eq!(emoji.started_at(), None);
        assert!(!emoji.is_finished(f64::MAX));

        emoji.tick(5000.0);
        emoji.tick(6000.0);
        assert_eq!(emoji.started_at(), Some(5000.0));
    }

    #[test]
    fn stops_scheduling_once_duration_elapsed() {
        let mut emoji = emoji_with_delay(400.0);

        assert!(emoji.tick(0.0).keep_going);
        assert!(emoji.tick(400.0 + DURATION - 1.0).keep_going);
        assert!(!emoji.tick(400.0 + DURATION).keep_going);
        assert!(emoji.is_finished(400.0 + DURATION));
    }

    #[test]
    fn zero_duration_finishes_immediately() {
        let timing = EffectTiming {
            duration_ms: 0.0,
            ..EffectTiming::default()
        };
        let mut emoji = FloatingEmoji::new(
            InstanceId::from_raw(1),
            "🎉",
            0.0,
            Position { left: 0.0, top: 0.0 },
            timing,
        );

        let tick = emoji.tick(10.0);
        assert!(!tick.keep_going);
        assert_eq!(tick.frame.opacity, 0.0);
    }

    #[test]
    fn random_position_stays_inside_viewport() {
        let mut values = [0.0, 0.75, 0.5, 0.25].into_iter();
        let mut random = move || values.next().unwrap_or(0.0);
        let viewport = Viewport::new(800.0, 600.0);

        let first = Position::random_within(viewport, &mut random);
        let second = Position::random_within(viewport, &mut random);

        assert_eq!(first, Position { left: 0.0, top: 450.0 });
        assert_eq!(second, Position { left: 400.0, top: 150.0 });
    }

    #[test]
    fn transform_applies_offset_to_top() {
        let frame = Frame {
            offset_y: -25.0,
            opacity: 0.5,
        };
        let position = Position {
            left: 12.0,
            top: 100.0,
        };
        assert_eq!(frame.transform(position), "translate(12px, 75px)");
    }
}
