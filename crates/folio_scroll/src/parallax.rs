//! Parallax tracks and scrub smoothing
//!
//! A parallax maps a trigger's scroll progress onto an element's transform.
//! With a scrub lag the applied progress chases the scroll progress instead
//! of jumping to it, which is what gives parallax its weight.

use folio_animation::{Easing, Interpolate, Position, Timeline, Tween};
use folio_core::{ElementId, PropertyValues};

/// Nominal length of a scrubbed timeline; only its progress matters
const SCRUB_TIMELINE_MS: u32 = 1000;

/// Below this difference the smoothed progress snaps onto its target
const SETTLE_EPSILON: f32 = 1e-4;

/// Lagged follower of a trigger's scroll progress
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Scrub {
    lag_ms: f32,
    target: f32,
    applied: f32,
    moved: bool,
}

impl Scrub {
    /// `lag_ms` of zero links progress to scroll directly
    pub fn new(lag_ms: f32) -> Self {
        Self {
            lag_ms: lag_ms.max(0.0),
            target: 0.0,
            applied: 0.0,
            moved: false,
        }
    }

    pub fn lag_ms(&self) -> f32 {
        self.lag_ms
    }

    /// Scroll progress to chase, clamped to `[0, 1]`
    pub fn set_target(&mut self, progress: f32) {
        self.target = progress.clamp(0.0, 1.0);
    }

    pub fn target(&self) -> f32 {
        self.target
    }

    pub fn applied(&self) -> f32 {
        self.applied
    }

    pub fn is_settled(&self) -> bool {
        self.applied == self.target
    }

    /// Move the applied progress toward the target
    ///
    /// Returns the new applied progress when it changed. Nothing is reported
    /// until progress first leaves 0, so an untouched parallax never writes.
    pub fn step(&mut self, dt_ms: f32) -> Option<f32> {
        if self.is_settled() {
            return None;
        }

        let diff = self.target - self.applied;
        let blend = if self.lag_ms <= 0.0 {
            1.0
        } else {
            (dt_ms.max(0.0) / self.lag_ms).min(1.0)
        };

        self.applied += diff * blend;
        if (self.target - self.applied).abs() < SETTLE_EPSILON {
            self.applied = self.target;
        }

        if !self.moved && self.applied == 0.0 {
            return None;
        }
        self.moved = true;
        Some(self.applied)
    }
}

/// A scroll-linked transition of one element between two states
///
/// ```rust
/// use folio_core::{Property, PropertyValues};
/// use folio_scroll::ParallaxTrack;
///
/// let track = ParallaxTrack::new(
///     "hero-image",
///     PropertyValues::new().y_percent(0.0).scale(1.0),
///     PropertyValues::new().y_percent(30.0).scale(1.1),
/// );
///
/// assert_eq!(track.sample(0.5).get(Property::YPercent), Some(15.0));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct ParallaxTrack {
    target: ElementId,
    from: PropertyValues,
    to: PropertyValues,
    easing: Easing,
}

impl ParallaxTrack {
    pub fn new(target: impl Into<ElementId>, from: PropertyValues, to: PropertyValues) -> Self {
        Self {
            target: target.into(),
            from,
            to,
            easing: Easing::Linear,
        }
    }

    pub fn easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    pub fn target(&self) -> &ElementId {
        &self.target
    }

    /// Values at scroll progress `progress` (clamped to `[0, 1]`)
    pub fn sample(&self, progress: f32) -> PropertyValues {
        self.from.lerp(&self.to, self.easing.apply(progress))
    }

    /// A lazy timeline whose progress the trigger scrubs
    pub fn into_timeline(self) -> Timeline {
        let mut timeline = Timeline::new().with_default_easing(Easing::Linear).lazy();
        let tween = Tween::from_to(self.from, self.to, SCRUB_TIMELINE_MS).easing(self.easing);
        timeline.add(self.target, tween, Position::End);
        timeline
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::Property;

    fn hero_image() -> ParallaxTrack {
        ParallaxTrack::new(
            "hero-image",
            PropertyValues::new().y_percent(0.0).scale(1.0),
            PropertyValues::new().y_percent(30.0).scale(1.1),
        )
    }

    #[test]
    fn test_endpoints_and_monotonicity() {
        let track = hero_image();
        assert_eq!(track.sample(0.0).get(Property::YPercent), Some(0.0));
        assert_eq!(track.sample(1.0).get(Property::YPercent), Some(30.0));
        assert!((track.sample(1.0).get_or_rest(Property::Scale) - 1.1).abs() < 1e-6);

        let mut last = -1.0;
        for i in 0..=20 {
            let y = track.sample(i as f32 / 20.0).get_or_rest(Property::YPercent);
            assert!(y >= last);
            last = y;
        }
    }

    #[test]
    fn test_out_of_range_progress_clamps() {
        let track = hero_image();
        assert_eq!(track.sample(-0.5), track.sample(0.0));
        assert_eq!(track.sample(3.0), track.sample(1.0));
    }

    #[test]
    fn test_zero_lag_applies_immediately() {
        let mut scrub = Scrub::new(0.0);
        scrub.set_target(0.4);
        assert_eq!(scrub.step(16.0), Some(0.4));
        assert_eq!(scrub.step(16.0), None);
    }

    #[test]
    fn test_lagged_scrub_is_monotonic_without_overshoot() {
        let mut scrub = Scrub::new(1000.0);
        let mut last = 0.0;
        for frame in 0..300 {
            let scroll_progress = (frame as f32 / 100.0).min(1.0);
            scrub.set_target(scroll_progress);
            if let Some(applied) = scrub.step(16.0) {
                assert!(applied >= last, "went backwards at frame {frame}");
                assert!(applied <= scroll_progress, "overshot at frame {frame}");
                last = applied;
            }
        }
        assert!(last > 0.9);
    }

    #[test]
    fn test_untouched_scrub_reports_nothing() {
        let mut scrub = Scrub::new(1000.0);
        scrub.set_target(0.0);
        assert_eq!(scrub.step(16.0), None);

        // Returning to zero after moving is reported
        scrub.set_target(0.5);
        assert!(scrub.step(500.0).is_some());
        scrub.set_target(0.0);
        let mut reported = None;
        for _ in 0..200 {
            if let Some(p) = scrub.step(100.0) {
                reported = Some(p);
            }
        }
        assert_eq!(reported, Some(0.0));
    }
}
