//! Modal controller
//!
//! Presents at most one item at a time in an overlay, drives its enter and
//! exit timelines through the animation scheduler and holds the page scroll
//! lock for as long as the overlay is visible.
//!
//! The controller is polled once per frame with [`ModalController::update`],
//! after the scheduler has advanced, and reports state changes so the owner
//! can mount or unmount the overlay's elements.
//!
//! # Example
//!
//! ```rust
//! use folio_animation::AnimationScheduler;
//! use folio_core::{ElementSpec, MemorySurface, ScrollLock, Viewport};
//! use folio_overlay::{CloseReason, Lightbox, ModalController, OverlayState};
//!
//! let scheduler = AnimationScheduler::new();
//! let scroll_lock = ScrollLock::new();
//! let mut surface = MemorySurface::new(Viewport::default());
//! surface.insert(ElementSpec::new("lightbox"));
//!
//! let mut modal = ModalController::new(scheduler.handle(), scroll_lock.clone(), Lightbox::default());
//! modal.open("urban-dreams", &surface);
//! assert!(scroll_lock.is_locked());
//!
//! scheduler.advance(16.0, &mut surface);
//! assert_eq!(modal.update(), Some(OverlayState::Open));
//!
//! modal.close(CloseReason::Escape, &surface);
//! scheduler.advance(16.0, &mut surface);
//! assert_eq!(modal.update(), Some(OverlayState::Closed));
//! assert!(!scroll_lock.is_locked());
//! ```

use folio_animation::{AnimatedTimeline, SchedulerHandle};
use folio_core::{ScrollLock, ScrollLockGuard, Surface};

use crate::presets::OverlayPreset;
use crate::state::{CloseReason, OverlayEvent, OverlayState};

/// Single-slot overlay presenting items of type `T`
pub struct ModalController<T> {
    state: OverlayState,
    item: Option<T>,
    scheduler: SchedulerHandle,
    scroll_lock: ScrollLock,
    lock_guard: Option<ScrollLockGuard>,
    preset: Box<dyn OverlayPreset>,
    animation: Option<AnimatedTimeline>,
}

impl<T: std::fmt::Debug> ModalController<T> {
    pub fn new(
        scheduler: SchedulerHandle,
        scroll_lock: ScrollLock,
        preset: impl OverlayPreset + 'static,
    ) -> Self {
        Self {
            state: OverlayState::Closed,
            item: None,
            scheduler,
            scroll_lock,
            lock_guard: None,
            preset: Box::new(preset),
            animation: None,
        }
    }

    pub fn state(&self) -> OverlayState {
        self.state
    }

    /// The item being presented, if any
    pub fn item(&self) -> Option<&T> {
        self.item.as_ref()
    }

    pub fn is_visible(&self) -> bool {
        self.state.is_visible()
    }

    /// This controller currently holds the page scroll lock
    pub fn holds_scroll_lock(&self) -> bool {
        self.lock_guard.is_some()
    }

    /// Present `item`, replacing whatever is shown
    ///
    /// The overlay's elements for `item` must already be on `surface` so the
    /// entrance can find them. A replaced item's animations are killed; the
    /// scroll lock carries over instead of being released and retaken.
    pub fn open(&mut self, item: T, surface: &dyn Surface) {
        let Some(next) = self.state.on_event(OverlayEvent::Open) else {
            return;
        };
        if let Some(previous) = &self.item {
            tracing::debug!("ModalController: replacing {:?} with {:?}", previous, item);
        } else {
            tracing::debug!("ModalController: opening {:?}", item);
        }

        self.kill_animation();
        if self.lock_guard.is_none() {
            self.lock_guard = Some(self.scroll_lock.acquire());
        }
        self.item = Some(item);
        self.state = next;
        self.start(self.preset.enter(surface));
    }

    /// Begin dismissing the overlay
    ///
    /// Closing mid-entrance kills the entrance and exits from where it got
    /// to. Does nothing while closed or already closing.
    pub fn close(&mut self, reason: CloseReason, surface: &dyn Surface) {
        let Some(next) = self.state.on_event(OverlayEvent::Close(reason)) else {
            tracing::trace!("ModalController: ignoring close ({:?}) while {:?}", reason, self.state);
            return;
        };
        tracing::debug!("ModalController: closing {:?} ({:?})", self.item, reason);

        self.kill_animation();
        self.state = next;
        self.start(self.preset.exit(surface));
    }

    /// Advance the state machine once the running animation has finished
    ///
    /// Returns the new state when a transition happened.
    pub fn update(&mut self) -> Option<OverlayState> {
        if !self.state.is_animating() {
            return None;
        }
        let finished = self
            .animation
            .as_ref()
            .map_or(true, |animation| animation.is_complete() || !animation.is_active());
        if !finished {
            return None;
        }

        let next = self.state.on_event(OverlayEvent::AnimationComplete)?;
        self.state = next;
        tracing::debug!("ModalController: {:?} now {:?}", self.item, next);

        if next == OverlayState::Closed {
            self.kill_animation();
            self.release_lock();
            self.item = None;
        }
        Some(next)
    }

    /// Drop straight to closed without an exit animation
    ///
    /// Used when the owning view unmounts mid-transition.
    pub fn force_teardown(&mut self) {
        if self.state.is_visible() {
            tracing::debug!("ModalController: tearing down {:?} while {:?}", self.item, self.state);
        }
        self.kill_animation();
        self.release_lock();
        self.item = None;
        self.state = OverlayState::Closed;
    }

    fn start(&mut self, timeline: folio_animation::Timeline) {
        let animation = AnimatedTimeline::new(self.scheduler.clone(), timeline);
        animation.play();
        self.animation = Some(animation);
    }

    fn kill_animation(&mut self) {
        if let Some(mut animation) = self.animation.take() {
            animation.kill();
        }
    }

    fn release_lock(&mut self) {
        if let Some(mut guard) = self.lock_guard.take() {
            guard.release();
        }
    }
}

impl<T> Drop for ModalController<T> {
    fn drop(&mut self) {
        if let Some(mut animation) = self.animation.take() {
            animation.kill();
        }
        if let Some(mut guard) = self.lock_guard.take() {
            guard.release();
        }
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for ModalController<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ModalController")
            .field("state", &self.state)
            .field("item", &self.item)
            .field("holds_scroll_lock", &self.lock_guard.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presets::{Lightbox, ProjectDetail, REVEAL_ITEM_CLASS};
    use folio_animation::AnimationScheduler;
    use folio_core::{ElementSpec, MemorySurface, Property, Viewport};

    fn modal_surface() -> MemorySurface {
        let mut surface = MemorySurface::new(Viewport::default());
        surface.insert(ElementSpec::new("modal-overlay"));
        surface.insert(ElementSpec::new("modal-content").parent("modal-overlay"));
        surface.insert(ElementSpec::new("modal-image").parent("modal-content"));
        surface.insert(
            ElementSpec::new("modal-title")
                .parent("modal-content")
                .class(REVEAL_ITEM_CLASS),
        );
        surface
    }

    fn run(
        scheduler: &AnimationScheduler,
        modal: &mut ModalController<&'static str>,
        surface: &mut MemorySurface,
        ms: u32,
    ) -> Vec<OverlayState> {
        let mut transitions = Vec::new();
        for _ in 0..ms / 16 {
            scheduler.advance(16.0, surface);
            transitions.extend(modal.update());
        }
        transitions
    }

    #[test]
    fn test_open_and_close_cycle() {
        let mut surface = modal_surface();
        let scheduler = AnimationScheduler::new();
        let lock = ScrollLock::new();
        let mut modal = ModalController::new(scheduler.handle(), lock.clone(), ProjectDetail::default());

        modal.open("fanta", &surface);
        assert_eq!(modal.state(), OverlayState::Opening);
        assert!(lock.is_locked());

        assert_eq!(run(&scheduler, &mut modal, &mut surface, 1500), vec![OverlayState::Open]);
        assert_eq!(surface.style_value(&"modal-image".into(), Property::Scale), Some(1.0));

        modal.close(CloseReason::Backdrop, &surface);
        assert_eq!(modal.state(), OverlayState::Closing);
        assert!(lock.is_locked());

        assert_eq!(run(&scheduler, &mut modal, &mut surface, 500), vec![OverlayState::Closed]);
        assert!(!lock.is_locked());
        assert_eq!(modal.item(), None);
        assert_eq!(surface.style_value(&"modal-overlay".into(), Property::Opacity), Some(0.0));
        assert_eq!(scheduler.timeline_count(), 0);
    }

    #[test]
    fn test_close_when_closed_is_noop() {
        let surface = modal_surface();
        let scheduler = AnimationScheduler::new();
        let lock = ScrollLock::new();
        let mut modal: ModalController<&str> =
            ModalController::new(scheduler.handle(), lock.clone(), ProjectDetail::default());

        modal.close(CloseReason::Escape, &surface);
        assert_eq!(modal.state(), OverlayState::Closed);
        assert_eq!(modal.update(), None);
        assert!(!lock.is_locked());
        assert_eq!(scheduler.timeline_count(), 0);
    }

    #[test]
    fn test_second_close_while_closing_is_noop() {
        let mut surface = modal_surface();
        let scheduler = AnimationScheduler::new();
        let lock = ScrollLock::new();
        let mut modal = ModalController::new(scheduler.handle(), lock.clone(), ProjectDetail::default());

        modal.open("luminance", &surface);
        run(&scheduler, &mut modal, &mut surface, 1500);
        modal.close(CloseReason::Button, &surface);
        run(&scheduler, &mut modal, &mut surface, 160);
        modal.close(CloseReason::Escape, &surface);
        assert_eq!(modal.state(), OverlayState::Closing);

        run(&scheduler, &mut modal, &mut surface, 500);
        assert_eq!(modal.state(), OverlayState::Closed);
        assert_eq!(lock.holders(), 0);
    }

    #[test]
    fn test_drop_mid_entrance_releases_lock() {
        let mut surface = modal_surface();
        let scheduler = AnimationScheduler::new();
        let lock = ScrollLock::new();
        {
            let mut modal =
                ModalController::new(scheduler.handle(), lock.clone(), ProjectDetail::default());
            modal.open("monolith", &surface);
            run(&scheduler, &mut modal, &mut surface, 320);
            assert!(lock.is_locked());
        }
        assert!(!lock.is_locked());
        assert_eq!(scheduler.timeline_count(), 0);
    }

    #[test]
    fn test_force_teardown() {
        let surface = modal_surface();
        let scheduler = AnimationScheduler::new();
        let lock = ScrollLock::new();
        let mut modal = ModalController::new(scheduler.handle(), lock.clone(), ProjectDetail::default());

        modal.open("ethereal-void", &surface);
        modal.force_teardown();
        modal.force_teardown();
        assert_eq!(modal.state(), OverlayState::Closed);
        assert!(!lock.is_locked());
        assert_eq!(scheduler.timeline_count(), 0);
    }

    #[test]
    fn test_lightbox_opens_on_next_frame() {
        let mut surface = MemorySurface::new(Viewport::default());
        surface.insert(ElementSpec::new("lightbox"));
        let scheduler = AnimationScheduler::new();
        let lock = ScrollLock::new();
        let mut modal = ModalController::new(scheduler.handle(), lock.clone(), Lightbox::default());

        modal.open("neon-nights", &surface);
        assert_eq!(run(&scheduler, &mut modal, &mut surface, 16), vec![OverlayState::Open]);
        assert_eq!(surface.style_value(&"lightbox".into(), Property::Opacity), Some(1.0));
    }

    #[test]
    fn test_scheduler_gone_does_not_strand_overlay() {
        let surface = modal_surface();
        let scheduler = AnimationScheduler::new();
        let lock = ScrollLock::new();
        let mut modal = ModalController::new(scheduler.handle(), lock.clone(), ProjectDetail::default());
        drop(scheduler);

        modal.open("kinetic-flow", &surface);
        assert_eq!(modal.update(), Some(OverlayState::Open));
        modal.close(CloseReason::Navigation, &surface);
        assert_eq!(modal.update(), Some(OverlayState::Closed));
        assert!(!lock.is_locked());
    }
}
