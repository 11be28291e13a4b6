//! The set of reaction overlays currently on screen.
//!
//! Each reaction that is sent or received gets its own [`ReactionBurst`] with a
//! fresh [`OverlayId`]. Bursts never share state, so a burst can be removed
//! while another one is still animating.

use std::collections::BTreeMap;

use crate::config::EffectTiming;
use crate::effect::{FloatingEmoji, Position, Viewport};
use crate::id::{IdAllocator, InstanceMarker, OverlayId, OverlayMarker};
use crate::log;

/// The floating emoji spawned for one reaction.
#[derive(Debug, Clone, PartialEq)]
pub struct ReactionBurst {
    id: OverlayId,
    emoji: String,
    instances: Vec<FloatingEmoji>,
}

impl ReactionBurst {
    pub fn id(&self) -> OverlayId {
        self.id
    }

    pub fn emoji(&self) -> &str {
        &self.emoji
    }

    pub fn instances(&self) -> &[FloatingEmoji] {
        &self.instances
    }

    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }

    /// Advances every instance and drops the ones that have finished.
    fn tick(&mut self, now: f64) {
        self.instances.retain_mut(|instance| {
            instance.tick(now);
            !instance.is_finished(now)
        });
    }
}

/// Arena of active reaction bursts, keyed by a monotonic id.
#[derive(Debug, Clone, Default)]
pub struct ReactionOverlays {
    timing: EffectTiming,
    overlay_ids: IdAllocator<OverlayMarker>,
    instance_ids: IdAllocator<InstanceMarker>,
    bursts: BTreeMap<OverlayId, ReactionBurst>,
}

impl ReactionOverlays {
    pub fn new(timing: EffectTiming) -> Self {
        Self {
            timing,
            ..Self::default()
        }
    }

    pub fn timing(&self) -> &EffectTiming {
        &self.timing
    }

    /// Spawns a burst of `emoji_count` floating emoji, staggered by
    /// `stagger_ms`, each at its own random position inside `viewport`.
    pub fn spawn(
        &mut self,
        emoji: &str,
        viewport: Viewport,
        random: &mut impl FnMut() -> f64,
    ) -> OverlayId {
        let id = self.overlay_ids.next_id();
        let instances = (0..self.timing.emoji_count)
            .map(|index| {
                FloatingEmoji::new(
                    self.instance_ids.next_id(),
                    emoji,
                    self.timing.delay_for(index),
                    Position::random_within(viewport, random),
                    self.timing,
                )
            })
            .collect();

        self.bursts.insert(
            id,
            ReactionBurst {
                id,
                emoji: emoji.to_string(),
                instances,
            },
        );
        log::debug!(overlay = %id, emoji, "Spawned reaction overlay");

        id
    }

    /// Advances every burst to `now`, dropping finished instances and bursts
    /// that have no instances left. Returns the ids of the removed bursts.
    pub fn tick(&mut self, now: f64) -> Vec<OverlayId> {
        let mut removed = Vec::new();
        self.bursts.retain(|id, burst| {
            burst.tick(now);
            if burst.is_empty() {
                removed.push(*id);
                false
            } else {
                true
            }
        });
        removed
    }

    /// Removes a burst. Removing an unknown or already removed id is a no-op.
    pub fn remove(&mut self, id: OverlayId) -> Option<ReactionBurst> {
        let burst = self.bursts.remove(&id);
        if burst.is_some() {
            log::debug!(overlay = %id, "Removed reaction overlay");
        }
        burst
    }

    pub fn get(&self, id: OverlayId) -> Option<&ReactionBurst> {
        self.bursts.get(&id)
    }

    pub fn contains(&self, id: OverlayId) -> bool {
        self.bursts.contains_key(&id)
    }

    /// Bursts in creation order.
    pub fn iter(&self) -> impl Iterator<Item = &ReactionBurst> {
        self.bursts.values()
    }

    pub fn len(&self) -> usize {
        self.bursts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bursts.is_empty()
    }

    pub fn clear(&mut self) {
        self.bursts.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{DURATION_MS, EMOJI_COUNT, STAGGER_MS};

    fn viewport() -> Viewport {
        Viewport::new(1280.0, 720.0)
    }

    fn fixed_random() -> impl FnMut() -> f64 {
        let mut n = 0u32;
        move || {
            n += 1;
            (n % 10) as f64 / 10.0
        }
    }

    #[test]
    fn spawn_creates_staggered_instances() {
        let mut overlays = ReactionOverlays::default();
        let id = overlays.spawn("🎉", viewport(), &mut fixed_random());

        let burst = overlays.get(id).unwrap();
        assert_eq!(burst.emoji(), "🎉");
        assert_eq!(burst.instances().len(), EMOJI_COUNT);

        let delays: Vec<f64> = burst.instances().iter().map(|i| i.delay_ms()).collect();
        assert_eq!(delays, vec![0.0, 100.0, 200.0, 300.0, 400.0]);

        let ids: Vec<u64> = burst.instances().iter().map(|i| i.id().get()).collect();
        assert!(ids.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn positions_are_fixed_at_spawn() {
        let mut overlays = ReactionOverlays::default();
        let id = overlays.spawn("👍", viewport(), &mut fixed_random());
        let before: Vec<Position> = overlays
            .get(id)
            .unwrap()
            .instances()
            .iter()
            .map(|i| i.position())
            .collect();

        overlays.tick(0.0);
        overlays.tick(1500.0);

        let after: Vec<Position> = overlays
            .get(id)
            .unwrap()
            .instances()
            .iter()
            .map(|i| i.position())
            .collect();
        assert_eq!(before, after);
    }

    #[test]
    fn instance_removed_once_delay_plus_duration_elapsed() {
        let mut overlays = ReactionOverlays::default();
        let id = overlays.spawn("😮", viewport(), &mut fixed_random());

        overlays.tick(0.0);
        overlays.tick(DURATION_MS - 1.0);
        assert_eq!(overlays.get(id).unwrap().instances().len(), EMOJI_COUNT);

        // The first instance has no delay
        overlays.tick(DURATION_MS);
        assert_eq!(overlays.get(id).unwrap().instances().len(), EMOJI_COUNT - 1);

        // The last instance is delayed by (count - 1) * stagger
        let last_end = DURATION_MS + (EMOJI_COUNT - 1) as f64 * STAGGER_MS;
        assert!(overlays.tick(last_end - 1.0).is_empty());
        assert_eq!(overlays.tick(last_end), vec![id]);
        assert!(overlays.get(id).is_none());

        // Re-checking after removal yields nothing
        assert!(overlays.tick(last_end + 1000.0).is_empty());
        assert!(overlays.remove(id).is_none());
        assert!(overlays.is_empty());
    }

    #[test]
    fn removal_delay_covers_a_late_first_frame() {
        let mut overlays = ReactionOverlays::default();
        let id = overlays.spawn("👏", viewport(), &mut fixed_random());
        let timing = *overlays.timing();

        // Spawned at 0, first animation frame one 60 Hz frame later
        let first_frame = 1000.0 / 60.0;
        overlays.tick(first_frame);

        let burst = overlays.get(id).unwrap();
        let last = burst.instances().last().unwrap();
        assert!(!last.is_finished(timing.burst_lifetime_ms()));
        assert!(
            burst
                .instances()
                .iter()
                .all(|instance| instance.is_finished(timing.removal_delay_ms()))
        );
    }

    #[test]
    fn overlapping_bursts_are_independent() {
        let mut overlays = ReactionOverlays::default();
        let laugh = overlays.spawn("😂", viewport(), &mut fixed_random());
        overlays.tick(0.0);
        overlays.tick(1000.0);

        // A second reaction lands while the first one is mid-animation
        let party = overlays.spawn("🎉", viewport(), &mut fixed_random());
        overlays.tick(1200.0);
        assert_ne!(laugh, party);
        assert_eq!(overlays.len(), 2);

        let laugh_frame = overlays.get(laugh).unwrap().instances()[0].frame_at(1200.0);
        let party_frame = overlays.get(party).unwrap().instances()[0].frame_at(1200.0);
        assert!(laugh_frame.opacity < 1.0);
        assert_eq!(party_frame.opacity, 1.0);

        overlays.remove(laugh);
        let party_burst = overlays.get(party).unwrap();
        assert_eq!(party_burst.emoji(), "🎉");
        assert_eq!(party_burst.instances().len(), EMOJI_COUNT);
        assert_eq!(party_burst.instances()[0].frame_at(1200.0), party_frame);

        // The first burst finishing does not end the second one early
        let laugh_end = DURATION_MS + (EMOJI_COUNT - 1) as f64 * STAGGER_MS;
        overlays.tick(laugh_end);
        assert!(overlays.contains(party));
    }

    #[test]
    fn spawning_twice_gives_two_sets() {
        let mut overlays = ReactionOverlays::default();
        let first = overlays.spawn("❤️", viewport(), &mut fixed_random());
        let second = overlays.spawn("❤️", viewport(), &mut fixed_random());

        assert!(second > first);
        let total: usize = overlays.iter().map(|b| b.instances().len()).sum();
        assert_eq!(total, 2 * EMOJI_COUNT);
    }

    #[test]
    fn custom_timing_is_respected() {
        let timing = EffectTiming {
            emoji_count: 2,
            stagger_ms: 50.0,
            ..EffectTiming::default()
        };
        let mut overlays = ReactionOverlays::new(timing);
        let id = overlays.spawn("👏", viewport(), &mut fixed_random());

        let delays: Vec<f64> = overlays
            .get(id)
            .unwrap()
            .instances()
            .iter()
            .map(|i| i.delay_ms())
            .collect();
        assert_eq!(delays, vec![0.0, 50.0]);

        overlays.clear();
        assert!(overlays.is_empty());
    }
}
