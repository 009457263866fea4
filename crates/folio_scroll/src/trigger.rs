//! Scroll triggers
//!
//! A [`ScrollTrigger`] watches the scroll offset against a region derived
//! from its trigger element and drives one timeline: either discretely,
//! through [`ToggleActions`] fired at region crossings, or continuously,
//! by scrubbing the timeline's progress.
//!
//! # State Machine
//!
//! ```text
//!            Enter              Leave
//!   Before ─────────► Active ─────────► After
//!          ◄─────────        ◄─────────
//!           LeaveBack          EnterBack
//! ```
//!
//! Jumping straight across the region fires both crossings in order, so a
//! fast fling past a reveal still plays it.

use folio_animation::AnimatedTimeline;
use folio_core::{ElementId, Surface};
use smallvec::SmallVec;

use crate::parallax::Scrub;
use crate::position::TriggerPosition;
use crate::toggle::{ToggleActions, TriggerEvent};

/// Where the scroll offset sits relative to a trigger region
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TriggerPhase {
    /// Above the start
    #[default]
    Before,
    /// Between start and end
    Active,
    /// Below the end
    After,
}

impl TriggerPhase {
    /// Phase of `scroll` within `[start, end]`
    pub fn at(scroll: f32, start: f32, end: f32) -> Self {
        if scroll < start {
            TriggerPhase::Before
        } else if scroll > end {
            TriggerPhase::After
        } else {
            TriggerPhase::Active
        }
    }

    /// Crossings fired moving from `self` to `next`
    pub fn transition(self, next: TriggerPhase) -> SmallVec<[TriggerEvent; 2]> {
        use TriggerEvent::*;
        use TriggerPhase::*;

        match (self, next) {
            (Before, Active) => SmallVec::from_slice(&[Enter]),
            (Active, After) => SmallVec::from_slice(&[Leave]),
            (After, Active) => SmallVec::from_slice(&[EnterBack]),
            (Active, Before) => SmallVec::from_slice(&[LeaveBack]),
            (Before, After) => SmallVec::from_slice(&[Enter, Leave]),
            (After, Before) => SmallVec::from_slice(&[EnterBack, LeaveBack]),
            _ => SmallVec::new(),
        }
    }
}

/// How a trigger is set up; positions are already parsed
#[derive(Clone, Debug, PartialEq)]
pub struct TriggerSpec {
    pub trigger: ElementId,
    pub start: TriggerPosition,
    pub end: TriggerPosition,
    pub actions: ToggleActions,
    /// Scrub lag in ms; `Some` turns the trigger into a scrubber
    pub scrub_lag_ms: Option<f32>,
}

impl TriggerSpec {
    /// `"top bottom"` to `"bottom top"`, play once
    pub fn new(trigger: impl Into<ElementId>) -> Self {
        Self {
            trigger: trigger.into(),
            start: TriggerPosition::top_bottom(),
            end: TriggerPosition::bottom_top(),
            actions: ToggleActions::default(),
            scrub_lag_ms: None,
        }
    }

    pub fn start(mut self, start: TriggerPosition) -> Self {
        self.start = start;
        self
    }

    pub fn end(mut self, end: TriggerPosition) -> Self {
        self.end = end;
        self
    }

    pub fn actions(mut self, actions: ToggleActions) -> Self {
        self.actions = actions;
        self
    }

    pub fn scrub(mut self, lag_ms: f32) -> Self {
        self.scrub_lag_ms = Some(lag_ms);
        self
    }
}

/// A live trigger bound to its animation
pub struct ScrollTrigger {
    spec: TriggerSpec,
    animation: Option<AnimatedTimeline>,
    scrub: Option<Scrub>,
    phase: TriggerPhase,
    /// Resolved `(start, end)` scroll offsets
    region: Option<(f32, f32)>,
    evaluated: bool,
}

impl ScrollTrigger {
    pub fn new(spec: TriggerSpec, animation: Option<AnimatedTimeline>) -> Self {
        let scrub = spec.scrub_lag_ms.map(Scrub::new);
        Self {
            spec,
            animation,
            scrub,
            phase: TriggerPhase::Before,
            region: None,
            evaluated: false,
        }
    }

    pub fn spec(&self) -> &TriggerSpec {
        &self.spec
    }

    pub fn trigger(&self) -> &ElementId {
        &self.spec.trigger
    }

    pub fn phase(&self) -> TriggerPhase {
        self.phase
    }

    pub fn region(&self) -> Option<(f32, f32)> {
        self.region
    }

    pub fn animation(&self) -> Option<&AnimatedTimeline> {
        self.animation.as_ref()
    }

    pub fn is_scrub(&self) -> bool {
        self.scrub.is_some()
    }

    /// Scroll progress through the region, `[0, 1]`
    pub fn progress(&self, scroll: f32) -> f32 {
        match self.region {
            Some((start, end)) if end > start => ((scroll - start) / (end - start)).clamp(0.0, 1.0),
            Some((start, _)) => {
                if scroll >= start {
                    1.0
                } else {
                    0.0
                }
            }
            None => 0.0,
        }
    }

    /// Recompute the region from the trigger element's current bounds
    ///
    /// Returns false when the trigger element is not on the surface.
    pub fn refresh(&mut self, surface: &dyn Surface) -> bool {
        let Some(bounds) = surface.bounds(&self.spec.trigger) else {
            self.region = None;
            return false;
        };
        let viewport_height = surface.viewport().height;
        let start = self.spec.start.scroll_offset(bounds, viewport_height);
        let end = self.spec.end.scroll_offset(bounds, viewport_height);
        if end <= start {
            tracing::warn!(
                "ScrollTrigger {:?}: region {} .. {} is empty ({start} >= {end})",
                self.spec.trigger,
                self.spec.start,
                self.spec.end
            );
        }
        self.region = Some((start, end.max(start)));
        true
    }

    /// Evaluate against the current scroll offset
    ///
    /// Fires toggle actions for every crossing since the last update and
    /// steps the scrub. Returns the crossings that fired.
    pub fn update(&mut self, surface: &dyn Surface, dt_ms: f32) -> SmallVec<[TriggerEvent; 2]> {
        if self.region.is_none() && !self.refresh(surface) {
            return SmallVec::new();
        }
        let Some((start, end)) = self.region else {
            return SmallVec::new();
        };
        let scroll = surface.scroll_y();

        let next = TriggerPhase::at(scroll, start, end);
        let events = self.phase.transition(next);
        if next != self.phase || !self.evaluated {
            tracing::trace!(
                "ScrollTrigger {:?}: {:?} -> {:?} at scroll {scroll}",
                self.spec.trigger,
                self.phase,
                next
            );
        }
        self.phase = next;
        self.evaluated = true;

        // Scrubbed animations follow progress only; toggle actions do not apply
        if let (Some(animation), None) = (&self.animation, &self.scrub) {
            for event in &events {
                self.spec.actions.action_for(*event).apply(animation);
            }
        }

        let progress = self.progress(scroll);
        if let Some(scrub) = &mut self.scrub {
            scrub.set_target(progress);
            if let (Some(applied), Some(animation)) = (scrub.step(dt_ms), &self.animation) {
                animation.seek_progress(applied);
            }
        }

        events
    }

    /// Drop the animation now; the trigger stays inert until removed
    pub fn kill(&mut self) {
        if let Some(mut animation) = self.animation.take() {
            animation.kill();
        }
    }
}

impl std::fmt::Debug for ScrollTrigger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScrollTrigger")
            .field("trigger", &self.spec.trigger)
            .field("start", &self.spec.start.to_string())
            .field("end", &self.spec.end.to_string())
            .field("phase", &self.phase)
            .field("region", &self.region)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_animation::{AnimationScheduler, Easing, Position, Timeline, Tween};
    use folio_core::{ElementSpec, MemorySurface, Property, PropertyValues, Rect, Viewport};

    fn page() -> MemorySurface {
        let mut surface = MemorySurface::new(Viewport::new(1440.0, 1000.0));
        surface.insert(ElementSpec::new("hero").bounds(Rect::new(0.0, 0.0, 1440.0, 1000.0)));
        surface.insert(ElementSpec::new("about").bounds(Rect::new(0.0, 2000.0, 1440.0, 1000.0)));
        surface.insert(ElementSpec::new("footer").bounds(Rect::new(0.0, 3000.0, 1440.0, 2000.0)));
        surface
    }

    fn reveal(scheduler: &AnimationScheduler, target: &str) -> AnimatedTimeline {
        let mut tl = Timeline::new().with_default_easing(Easing::Linear);
        tl.add(
            target,
            Tween::from_state(PropertyValues::new().opacity(0.0).y(80.0), 800),
            Position::End,
        );
        AnimatedTimeline::new(scheduler.handle(), tl)
    }

    #[test]
    fn test_phase_transitions() {
        use TriggerEvent::*;
        assert_eq!(TriggerPhase::Before.transition(TriggerPhase::Active).as_slice(), &[Enter]);
        assert_eq!(
            TriggerPhase::Before.transition(TriggerPhase::After).as_slice(),
            &[Enter, Leave]
        );
        assert_eq!(
            TriggerPhase::After.transition(TriggerPhase::Before).as_slice(),
            &[EnterBack, LeaveBack]
        );
        assert!(TriggerPhase::Active.transition(TriggerPhase::Active).is_empty());
    }

    #[test]
    fn test_region_from_positions() {
        let surface = page();
        let mut trigger = ScrollTrigger::new(
            TriggerSpec::new("about").start(TriggerPosition::top_at(0.7)),
            None,
        );
        assert!(trigger.refresh(&surface));
        assert_eq!(trigger.region(), Some((1300.0, 3000.0)));
        assert_eq!(trigger.progress(2150.0), 0.5);
    }

    #[test]
    fn test_reveal_plays_and_reverses() {
        let mut surface = page();
        let scheduler = AnimationScheduler::new();
        let spec = TriggerSpec::new("about")
            .start(TriggerPosition::top_at(0.7))
            .actions(ToggleActions::play_reverse());
        let mut trigger = ScrollTrigger::new(spec, Some(reveal(&scheduler, "about")));

        assert!(trigger.update(&surface, 16.0).is_empty());
        assert_eq!(trigger.phase(), TriggerPhase::Before);

        surface.set_scroll_y(1400.0);
        assert_eq!(trigger.update(&surface, 16.0).as_slice(), &[TriggerEvent::Enter]);
        scheduler.advance(1000.0, &mut surface);
        assert_eq!(surface.style_value(&"about".into(), Property::Opacity), Some(1.0));

        surface.set_scroll_y(0.0);
        assert_eq!(trigger.update(&surface, 16.0).as_slice(), &[TriggerEvent::LeaveBack]);
        scheduler.advance(1000.0, &mut surface);
        assert_eq!(surface.style_value(&"about".into(), Property::Opacity), Some(0.0));
    }

    #[test]
    fn test_already_past_start_fires_on_first_update() {
        let mut surface = page();
        surface.set_scroll_y(1500.0);
        let mut trigger = ScrollTrigger::new(
            TriggerSpec::new("about").start(TriggerPosition::top_at(0.7)),
            None,
        );
        assert_eq!(trigger.update(&surface, 0.0).as_slice(), &[TriggerEvent::Enter]);
    }

    #[test]
    fn test_missing_trigger_element_is_inert() {
        let surface = page();
        let mut trigger = ScrollTrigger::new(TriggerSpec::new("nowhere"), None);
        assert!(trigger.update(&surface, 16.0).is_empty());
        assert_eq!(trigger.region(), None);
    }

    #[test]
    fn test_scrub_drives_timeline_progress() {
        let mut surface = page();
        let scheduler = AnimationScheduler::new();
        let track = crate::ParallaxTrack::new(
            "hero",
            PropertyValues::new().y_percent(0.0),
            PropertyValues::new().y_percent(30.0),
        );
        let animation = AnimatedTimeline::new(scheduler.handle(), track.into_timeline());
        let spec = TriggerSpec::new("hero")
            .start("top top".parse().unwrap())
            .end("bottom top".parse().unwrap())
            .scrub(0.0);
        let mut trigger = ScrollTrigger::new(spec, Some(animation));

        // Untouched: nothing written
        trigger.update(&surface, 16.0);
        scheduler.advance(16.0, &mut surface);
        assert_eq!(surface.style(&"hero".into()).map(|s| s.len()), Some(0));

        surface.set_scroll_y(500.0);
        trigger.update(&surface, 16.0);
        scheduler.advance(16.0, &mut surface);
        let y = surface.style_value(&"hero".into(), Property::YPercent).unwrap_or(f32::NAN);
        assert!((y - 15.0).abs() < 1e-3);
    }
}
