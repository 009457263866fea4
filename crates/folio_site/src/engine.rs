//! Motion capabilities used by sections
//!
//! Sections describe what should move and hand the description to a
//! [`MotionEngine`]. The engine resolves targets, builds timelines and
//! registers triggers, returning a [`Motion`] the section keeps alive for as
//! long as it is mounted. Keeping the engine behind a trait lets section
//! orchestration be tested against a recording engine.

use folio_animation::{AnimatedTimeline, Easing, Position, Timeline, Tween};
use folio_core::{ElementId, PropertyValues, Selector};
use folio_scroll::{ParallaxTrack, ToggleActions, TriggerGuard, TriggerPosition};

// =============================================================================
// Reveal
// =============================================================================

/// Scroll trigger settings for a reveal
#[derive(Clone, Debug, PartialEq)]
pub struct RevealTrigger {
    pub element: ElementId,
    pub start: TriggerPosition,
    pub actions: ToggleActions,
}

/// Entrance of one or more elements from a hidden state to rest
#[derive(Clone, Debug, PartialEq)]
pub struct Reveal {
    pub targets: Selector,
    pub from: PropertyValues,
    /// End state; `None` animates to the resting values of `from`
    pub to: Option<PropertyValues>,
    pub duration_ms: u32,
    pub delay_ms: u32,
    pub stagger_ms: u32,
    pub easing: Option<Easing>,
    pub snap: Option<f32>,
    /// `None` plays as soon as it is registered
    pub trigger: Option<RevealTrigger>,
}

impl Reveal {
    pub fn new(targets: Selector, from: PropertyValues, duration_ms: u32) -> Self {
        Self {
            targets,
            from,
            to: None,
            duration_ms,
            delay_ms: 0,
            stagger_ms: 0,
            easing: None,
            snap: None,
            trigger: None,
        }
    }

    pub fn to(mut self, to: PropertyValues) -> Self {
        self.to = Some(to);
        self
    }

    pub fn delay(mut self, delay_ms: u32) -> Self {
        self.delay_ms = delay_ms;
        self
    }

    pub fn stagger(mut self, each_ms: u32) -> Self {
        self.stagger_ms = each_ms;
        self
    }

    pub fn easing(mut self, easing: Easing) -> Self {
        self.easing = Some(easing);
        self
    }

    pub fn snap(mut self, increment: f32) -> Self {
        self.snap = Some(increment);
        self
    }

    /// Play when `element` crosses `start`, following `actions`
    pub fn on_scroll(
        mut self,
        element: impl Into<ElementId>,
        start: TriggerPosition,
        actions: ToggleActions,
    ) -> Self {
        self.trigger = Some(RevealTrigger {
            element: element.into(),
            start,
            actions,
        });
        self
    }

    /// Build the timeline for the resolved `targets`
    ///
    /// `scale` stretches every duration, delay and stagger.
    pub fn timeline(&self, targets: &[ElementId], default_easing: Easing, scale: impl Fn(u32) -> u32) -> Timeline {
        let mut tween = match &self.to {
            Some(to) => Tween::from_to(self.from.clone(), to.clone(), scale(self.duration_ms)),
            None => Tween::from_state(self.from.clone(), scale(self.duration_ms)),
        }
        .delay(scale(self.delay_ms));
        if let Some(easing) = self.easing {
            tween = tween.easing(easing);
        }
        if let Some(increment) = self.snap {
            tween = tween.snap(increment);
        }

        let mut timeline = Timeline::new().with_default_easing(default_easing);
        timeline.stagger(targets, tween, scale(self.stagger_ms), Position::End);
        timeline
    }
}

// =============================================================================
// Parallax
// =============================================================================

/// A scroll-scrubbed transition over a trigger region
#[derive(Clone, Debug, PartialEq)]
pub struct Parallax {
    pub track: ParallaxTrack,
    pub trigger: ElementId,
    pub start: TriggerPosition,
    pub end: TriggerPosition,
    /// Overrides the configured scrub lag
    pub scrub_lag_ms: Option<f32>,
}

impl Parallax {
    /// Scrub `track` while `trigger` passes through the viewport
    pub fn new(track: ParallaxTrack, trigger: impl Into<ElementId>) -> Self {
        Self {
            track,
            trigger: trigger.into(),
            start: TriggerPosition::top_bottom(),
            end: TriggerPosition::bottom_top(),
            scrub_lag_ms: None,
        }
    }

    pub fn region(mut self, start: TriggerPosition, end: TriggerPosition) -> Self {
        self.start = start;
        self.end = end;
        self
    }

    pub fn scrub_lag(mut self, lag_ms: f32) -> Self {
        self.scrub_lag_ms = Some(lag_ms);
        self
    }
}

// =============================================================================
// Engine
// =============================================================================

/// A live registration returned by the engine
///
/// Dropping it stops the motion and releases everything it registered.
#[derive(Debug)]
pub enum Motion {
    /// A timeline playing on its own
    Timeline(AnimatedTimeline),
    /// A scroll trigger owning its timeline
    Trigger(TriggerGuard),
}

impl Motion {
    pub fn is_active(&self) -> bool {
        match self {
            Motion::Timeline(timeline) => timeline.is_active(),
            Motion::Trigger(guard) => guard.is_active(),
        }
    }
}

/// What sections can ask of the animation machinery
pub trait MotionEngine {
    /// Register a reveal; `None` when it has nothing to animate
    fn reveal(&mut self, reveal: Reveal) -> Option<Motion>;

    /// Play a prebuilt timeline immediately
    fn sequence(&mut self, timeline: Timeline) -> Option<Motion>;

    /// Register a scroll-scrubbed parallax; `None` when disabled or untargeted
    fn parallax(&mut self, parallax: Parallax) -> Option<Motion>;

    /// Animate the page scroll to the top of `target`; false if it is absent
    /// or the page is scroll-locked
    fn scroll_to(&mut self, target: &ElementId) -> bool;
}


#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::Property;

    #[test]
    fn test_reveal_timeline_staggers_targets() {
        let targets: Vec<ElementId> = ["a", "b", "c"].into_iter().map(ElementId::from).collect();
        let reveal = Reveal::new(Selector::class("card"), PropertyValues::new().y(80.0).opacity(0.0), 800)
            .stagger(150);
        let tl = reveal.timeline(&targets, Easing::Power3Out, |ms| ms);

        assert_eq!(tl.entry_count(), 3);
        assert_eq!(tl.duration_ms(), 1100);
    }

    #[test]
    fn test_reveal_timeline_scales() {
        let targets = vec![ElementId::from("a"), ElementId::from("b")];
        let reveal = Reveal::new(Selector::class("card"), PropertyValues::new().opacity(0.0), 800)
            .delay(200)
            .stagger(100);
        let tl = reveal.timeline(&targets, Easing::Linear, |ms| ms / 2);
        assert_eq!(tl.duration_ms(), 550);

        let instant = reveal.timeline(&targets, Easing::Linear, |_| 0);
        assert_eq!(instant.duration_ms(), 0);
    }

    #[test]
    fn test_counter_reveal_uses_explicit_end_state() {
        let targets = vec![ElementId::from("stat")];
        let reveal = Reveal::new(Selector::id("stat"), PropertyValues::new().counter(0.0), 2000)
            .to(PropertyValues::new().counter(150.0))
            .easing(Easing::Power2Out)
            .snap(1.0);
        let tl = reveal.timeline(&targets, Easing::Power3Out, |ms| ms);
        assert_eq!(tl.duration_ms(), 2000);
        assert!(reveal.to.as_ref().is_some_and(|to| to.get(Property::Counter) == Some(150.0)));
    }
}
