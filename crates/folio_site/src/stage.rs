//! The stage: one mounted view's motion machinery
//!
//! A [`Stage`] owns the rendering surface and everything that mutates it:
//! the animation scheduler, the scroll trigger registry, the document
//! scroll lock, the viewport event bus and the scroll-to animator. Pages
//! and sections never reach these through globals; they are handed the
//! stage (or just its [`MotionEngine`] face).
//!
//! # Frame order
//!
//! 1. Animated scroll-to steps the scroll offset, unless the page is scroll-locked
//! 2. Scroll triggers evaluate crossings and smooth their scrubs
//! 3. The scheduler steps springs and timelines and writes styles

use folio_animation::{AnimatedTimeline, AnimationScheduler, Timeline};
use folio_core::{
    ElementId, EventBus, MemorySurface, ScrollLock, Surface, Viewport, ViewportEvent,
};
use folio_scroll::{ScrollAnimator, ScrollTrigger, TriggerRegistry, TriggerSpec};

use crate::config::SiteConfig;
use crate::engine::{Motion, MotionEngine, Parallax, Reveal};

pub struct Stage {
    surface: MemorySurface,
    scheduler: AnimationScheduler,
    triggers: TriggerRegistry,
    scroll_lock: ScrollLock,
    events: EventBus,
    scroller: ScrollAnimator,
    config: SiteConfig,
}

impl Stage {
    pub fn new(config: SiteConfig, viewport: Viewport) -> Self {
        let scroller = ScrollAnimator::new(
            config.navigation.scroll_duration_ms,
            config.navigation.scroll_easing,
        );
        Self {
            surface: MemorySurface::new(viewport),
            scheduler: AnimationScheduler::new(),
            triggers: TriggerRegistry::new(),
            scroll_lock: ScrollLock::new(),
            events: EventBus::new(),
            scroller,
            config,
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn surface(&self) -> &MemorySurface {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut MemorySurface {
        &mut self.surface
    }

    pub fn scheduler(&self) -> &AnimationScheduler {
        &self.scheduler
    }

    pub fn triggers(&self) -> &TriggerRegistry {
        &self.triggers
    }

    pub fn scroll_lock(&self) -> &ScrollLock {
        &self.scroll_lock
    }

    pub fn events(&self) -> &EventBus {
        &self.events
    }

    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    pub fn viewport(&self) -> Viewport {
        self.surface.viewport()
    }

    pub fn scroll_y(&self) -> f32 {
        self.surface.scroll_y()
    }

    pub fn is_scroll_locked(&self) -> bool {
        self.scroll_lock.is_locked()
    }

    /// An animated scroll is in flight
    pub fn is_scrolling(&self) -> bool {
        self.scroller.is_active()
    }

    // =========================================================================
    // Frame and input
    // =========================================================================

    /// Advance everything by `dt_ms`
    ///
    /// Returns true while anything is still moving.
    pub fn frame(&mut self, dt_ms: f32) -> bool {
        if self.scroll_lock.is_locked() && self.scroller.is_active() {
            tracing::debug!("Stage: scroll lock taken, cancelling scroll-to");
            self.scroller.cancel();
        }
        let before = self.surface.scroll_y();
        let scrolling = self.scroller.step(dt_ms, &mut self.surface);
        self.emit_scroll_if_moved(before);

        self.triggers.update(&self.surface, dt_ms);
        let animating = self.scheduler.advance(dt_ms, &mut self.surface);
        scrolling || animating
    }

    /// User scroll by `dy`; ignored while the page is scroll-locked
    ///
    /// Returns whether the scroll was applied.
    pub fn scroll_by(&mut self, dy: f32) -> bool {
        if self.scroll_lock.is_locked() {
            tracing::trace!("Stage: scroll ignored while locked");
            return false;
        }
        let before = self.surface.scroll_y();
        self.surface.set_scroll_y(before + dy);
        self.emit_scroll_if_moved(before);
        true
    }

    /// Jump straight to `y` without animating, cancelling any scroll-to
    pub fn jump_to(&mut self, y: f32) {
        self.scroller.cancel();
        let before = self.surface.scroll_y();
        self.surface.set_scroll_y(y);
        self.emit_scroll_if_moved(before);
    }

    /// Resize the viewport
    ///
    /// The page must re-lay out and then call
    /// [`refresh_triggers`](Self::refresh_triggers).
    pub fn resize(&mut self, viewport: Viewport) {
        tracing::debug!("Stage: resize to {}x{}", viewport.width, viewport.height);
        let before = self.surface.scroll_y();
        self.surface.resize(viewport);
        self.events.emit(&ViewportEvent::Resize(viewport));
        self.emit_scroll_if_moved(before);
    }

    /// Recompute every trigger region from current element bounds
    pub fn refresh_triggers(&self) {
        self.triggers.refresh(&self.surface);
    }

    /// Pointer moved to viewport coordinates `(x, y)`
    pub fn pointer_move(&self, x: f32, y: f32) {
        self.events.emit(&ViewportEvent::PointerMove { x, y });
    }

    /// Elements under viewport coordinates `(x, y)`, topmost last
    pub fn hit_test(&self, x: f32, y: f32) -> Vec<ElementId> {
        self.surface.hit_test(x, y + self.surface.scroll_y())
    }

    /// Write start states of freshly registered timelines
    pub fn render_pending(&mut self) -> usize {
        self.scheduler.render_pending(&mut self.surface)
    }

    /// Drop every element and trigger, ready for the next view
    pub fn reset(&mut self) {
        self.triggers.kill_all();
        self.scroller.cancel();
        self.surface.clear();
        tracing::debug!(
            "Stage: reset ({} timelines, {} springs still registered)",
            self.scheduler.timeline_count(),
            self.scheduler.spring_count()
        );
    }

    fn emit_scroll_if_moved(&self, before: f32) {
        let y = self.surface.scroll_y();
        if y != before {
            self.events.emit(&ViewportEvent::Scroll { y });
        }
    }
}

impl MotionEngine for Stage {
    fn reveal(&mut self, reveal: Reveal) -> Option<Motion> {
        let targets = self.surface.select(&reveal.targets);
        if targets.is_empty() {
            tracing::debug!("Stage: reveal has no targets for {:?}", reveal.targets);
            return None;
        }
        if let Some(trigger) = &reveal.trigger {
            if !self.surface.contains(&trigger.element) {
                tracing::debug!("Stage: reveal trigger {:?} not on the page", trigger.element);
                return None;
            }
        }

        let config = &self.config.reveal;
        let timeline = reveal.timeline(&targets, config.easing, |ms| config.scale_ms(ms));
        let animation = AnimatedTimeline::new(self.scheduler.handle(), timeline);
        // Targets are hidden from the moment they are registered
        self.scheduler.render_pending(&mut self.surface);

        match reveal.trigger {
            None => {
                animation.play();
                Some(Motion::Timeline(animation))
            }
            Some(trigger) => {
                let spec = TriggerSpec::new(trigger.element)
                    .start(trigger.start)
                    .actions(trigger.actions);
                let guard = self.triggers.register(ScrollTrigger::new(spec, Some(animation)));
                Some(Motion::Trigger(guard))
            }
        }
    }

    fn sequence(&mut self, timeline: Timeline) -> Option<Motion> {
        if timeline.is_empty() {
            return None;
        }
        let animation = AnimatedTimeline::new(self.scheduler.handle(), timeline);
        self.scheduler.render_pending(&mut self.surface);
        animation.play();
        Some(Motion::Timeline(animation))
    }

    fn parallax(&mut self, parallax: Parallax) -> Option<Motion> {
        if !self.config.parallax.enabled {
            return None;
        }
        if !self.surface.contains(parallax.track.target()) || !self.surface.contains(&parallax.trigger) {
            tracing::debug!(
                "Stage: parallax on {:?} (trigger {:?}) not on the page",
                parallax.track.target(),
                parallax.trigger
            );
            return None;
        }

        let lag = parallax.scrub_lag_ms.unwrap_or(self.config.parallax.scrub_lag_ms);
        let animation = AnimatedTimeline::new(self.scheduler.handle(), parallax.track.into_timeline());
        let spec = TriggerSpec::new(parallax.trigger)
            .start(parallax.start)
            .end(parallax.end)
            .scrub(lag);
        let guard = self.triggers.register(ScrollTrigger::new(spec, Some(animation)));
        Some(Motion::Trigger(guard))
    }

    fn scroll_to(&mut self, target: &ElementId) -> bool {
        if self.scroll_lock.is_locked() {
            tracing::debug!("Stage: scroll to {:?} refused while locked", target);
            return false;
        }
        self.scroller.scroll_to_element(&self.surface, target)
    }
}

impl std::fmt::Debug for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Stage")
            .field("viewport", &self.surface.viewport())
            .field("scroll_y", &self.surface.scroll_y())
            .field("elements", &self.surface.len())
            .field("triggers", &self.triggers.active_count())
            .field("timelines", &self.scheduler.timeline_count())
            .field("scroll_locked", &self.scroll_lock.is_locked())
            .finish()
    }
}
