//! Animation scheduler
//!
//! Owns every live spring and timeline and steps them once per frame,
//! writing the results to the surface. Components never hold the scheduler
//! itself; they hold a [`SchedulerHandle`], a weak reference whose
//! operations quietly no-op once the scheduler is gone.
//!
//! Registrations are tied to RAII wrappers. Dropping an [`AnimatedTimeline`]
//! or [`AnimatedValue`] removes it from the scheduler, so a torn-down
//! section can never animate an element again.

use std::sync::{Arc, Mutex, Weak};
use std::time::Instant;

use folio_core::sync::lock;
use folio_core::{ElementId, Property, Surface};
use slotmap::{new_key_type, SlotMap};

use crate::spring::{Spring, SpringConfig};
use crate::timeline::{Timeline, TimelineEvent};

/// Longest physics step; larger frame deltas are subdivided
const MAX_SPRING_STEP_SECS: f32 = 1.0 / 120.0;

new_key_type! {
    /// Handle to a registered spring animation
    pub struct SpringId;
    /// Handle to a registered timeline
    pub struct TimelineId;
}

/// A spring, optionally driving one property of one element
struct BoundSpring {
    spring: Spring,
    binding: Option<(ElementId, Property)>,
    /// Write the current value on the next frame even if settled
    dirty: bool,
}

/// Internal state of the animation scheduler
struct SchedulerInner {
    springs: SlotMap<SpringId, BoundSpring>,
    timelines: SlotMap<TimelineId, Timeline>,
    last_frame: Instant,
}

impl SchedulerInner {
    fn has_active_animations(&self) -> bool {
        self.springs.values().any(|s| !s.spring.is_settled())
            || self.timelines.values().any(Timeline::is_playing)
    }
}

/// The animation scheduler that ticks all active animations
///
/// Held by the stage and shared with components through [`SchedulerHandle`].
///
/// ```rust
/// use folio_animation::{AnimatedTimeline, AnimationScheduler, Position, Timeline, Tween};
/// use folio_core::{ElementSpec, MemorySurface, Property, PropertyValues, Surface, Viewport};
///
/// let mut surface = MemorySurface::new(Viewport::default());
/// surface.insert(ElementSpec::new("card"));
///
/// let scheduler = AnimationScheduler::new();
/// let mut tl = Timeline::new();
/// tl.add("card", Tween::from_state(PropertyValues::new().opacity(0.0), 500), Position::End);
///
/// let reveal = AnimatedTimeline::new(scheduler.handle(), tl);
/// reveal.play();
/// scheduler.advance(1000.0, &mut surface);
///
/// assert!(reveal.is_complete());
/// assert_eq!(surface.style_value(&"card".into(), Property::Opacity), Some(1.0));
/// ```
pub struct AnimationScheduler {
    inner: Arc<Mutex<SchedulerInner>>,
}

impl AnimationScheduler {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(SchedulerInner {
                springs: SlotMap::with_key(),
                timelines: SlotMap::with_key(),
                last_frame: Instant::now(),
            })),
        }
    }

    /// Get a weak handle for registering animations
    pub fn handle(&self) -> SchedulerHandle {
        SchedulerHandle {
            inner: Arc::downgrade(&self.inner),
        }
    }

    /// Tick using wall-clock time since the previous tick
    ///
    /// Returns true if any animations are still active (need another tick).
    pub fn tick(&self, surface: &mut dyn Surface) -> bool {
        let dt_ms = {
            let mut inner = lock(&self.inner);
            let now = Instant::now();
            let dt = (now - inner.last_frame).as_secs_f32() * 1000.0;
            inner.last_frame = now;
            dt
        };
        self.step(dt_ms, surface)
    }

    /// Advance every animation by exactly `dt_ms`
    ///
    /// Returns true if any animations are still active.
    pub fn advance(&self, dt_ms: f32, surface: &mut dyn Surface) -> bool {
        lock(&self.inner).last_frame = Instant::now();
        self.step(dt_ms, surface)
    }

    fn step(&self, dt_ms: f32, surface: &mut dyn Surface) -> bool {
        let mut guard = lock(&self.inner);
        let inner = &mut *guard;
        let dt_ms = dt_ms.max(0.0);

        let dt = dt_ms / 1000.0;
        let substeps = (dt / MAX_SPRING_STEP_SECS).ceil().max(1.0) as usize;
        let sub_dt = dt / substeps as f32;

        for (_, bound) in inner.springs.iter_mut() {
            let moving = !bound.spring.is_settled();
            if moving {
                for _ in 0..substeps {
                    bound.spring.step(sub_dt);
                }
                if bound.spring.is_settled() {
                    // A settled spring snaps onto its target
                    bound.spring.step(0.0);
                }
            }
            if moving || bound.dirty {
                bound.dirty = false;
                if let Some((target, property)) = &bound.binding {
                    surface.set_style(target, *property, bound.spring.value());
                }
            }
        }

        for (id, timeline) in inner.timelines.iter_mut() {
            match timeline.tick(dt_ms) {
                Some(TimelineEvent::Completed) => {
                    tracing::debug!("Timeline {:?} completed", id);
                }
                Some(TimelineEvent::ReverseCompleted) => {
                    tracing::debug!("Timeline {:?} reverse-completed", id);
                }
                None => {}
            }
            timeline.render(surface);
        }

        // Nothing is removed here; registrations live until their wrappers drop
        inner.has_active_animations()
    }

    /// Render timelines whose state changed without moving any clock
    ///
    /// Called right after registration so start states are on the surface
    /// before the first frame.
    pub fn render_pending(&self, surface: &mut dyn Surface) -> usize {
        let mut inner = lock(&self.inner);
        inner
            .timelines
            .values_mut()
            .filter(|t| t.needs_render())
            .map(|t| t.render(surface))
            .sum()
    }

    /// Check if any animations are still active
    pub fn has_active_animations(&self) -> bool {
        lock(&self.inner).has_active_animations()
    }

    /// Get the number of registered springs
    pub fn spring_count(&self) -> usize {
        lock(&self.inner).springs.len()
    }

    /// Get the number of registered timelines
    pub fn timeline_count(&self) -> usize {
        lock(&self.inner).timelines.len()
    }
}

impl Default for AnimationScheduler {
    fn default() -> Self {
        Self::new()
    }
}

/// A weak handle to the animation scheduler
///
/// Passed to components that need to register animations. It won't keep
/// the scheduler alive.
#[derive(Clone)]
pub struct SchedulerHandle {
    inner: Weak<Mutex<SchedulerInner>>,
}

impl SchedulerHandle {
    /// A handle that was never attached to a scheduler
    pub fn detached() -> Self {
        Self { inner: Weak::new() }
    }

    fn with_inner<F, R>(&self, f: F) -> Option<R>
    where
        F: FnOnce(&mut SchedulerInner) -> R,
    {
        self.inner.upgrade().map(|inner| f(&mut *lock(&inner)))
    }

    // =========================================================================
    // Spring Operations
    // =========================================================================

    /// Register a spring and return its ID
    pub fn register_spring(&self, spring: Spring) -> Option<SpringId> {
        self.with_inner(|inner| {
            inner.springs.insert(BoundSpring {
                spring,
                binding: None,
                dirty: false,
            })
        })
    }

    /// Drive `property` of `target` with the spring's value
    pub fn bind_spring(&self, id: SpringId, target: ElementId, property: Property) {
        self.with_inner(|inner| {
            if let Some(bound) = inner.springs.get_mut(id) {
                bound.binding = Some((target, property));
                bound.dirty = true;
            }
        });
    }

    /// Update a spring's target
    pub fn set_spring_target(&self, id: SpringId, target: f32) {
        self.with_inner(|inner| {
            if let Some(bound) = inner.springs.get_mut(id) {
                bound.spring.set_target(target);
            }
        });
    }

    /// Get current spring value
    pub fn get_spring_value(&self, id: SpringId) -> Option<f32> {
        self.with_inner(|inner| inner.springs.get(id).map(|s| s.spring.value()))
            .flatten()
    }

    /// Settled, or no longer registered
    pub fn is_spring_settled(&self, id: SpringId) -> bool {
        self.with_inner(|inner| inner.springs.get(id).map(|s| s.spring.is_settled()))
            .flatten()
            .unwrap_or(true)
    }

    pub fn remove_spring(&self, id: SpringId) {
        self.with_inner(|inner| inner.springs.remove(id));
    }

    // =========================================================================
    // Timeline Operations
    // =========================================================================

    /// Register a timeline and return its ID
    pub fn register_timeline(&self, timeline: Timeline) -> Option<TimelineId> {
        self.with_inner(|inner| inner.timelines.insert(timeline))
    }

    /// Access a registered timeline
    ///
    /// Returns None if the scheduler is dropped or the timeline doesn't exist.
    pub fn with_timeline<F, R>(&self, id: TimelineId, f: F) -> Option<R>
    where
        F: FnOnce(&mut Timeline) -> R,
    {
        self.with_inner(|inner| inner.timelines.get_mut(id).map(f))
            .flatten()
    }

    pub fn is_timeline_playing(&self, id: TimelineId) -> bool {
        self.with_timeline(id, |t| t.is_playing()).unwrap_or(false)
    }

    pub fn remove_timeline(&self, id: TimelineId) {
        self.with_inner(|inner| inner.timelines.remove(id));
    }

    /// Check if the scheduler is still alive
    pub fn is_alive(&self) -> bool {
        self.inner.strong_count() > 0
    }
}

impl std::fmt::Debug for SchedulerHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SchedulerHandle")
            .field("alive", &self.is_alive())
            .finish()
    }
}

// ============================================================================
// Animated Value (Spring-based)
// ============================================================================

/// A spring-animated value that registers itself with the scheduler
///
/// When the target changes, the value smoothly follows using spring physics.
/// A value bound to an element property writes itself to the surface every
/// frame while it moves.
///
/// ```rust
/// use folio_animation::{AnimatedValue, AnimationScheduler, SpringConfig};
/// use folio_core::{ElementSpec, MemorySurface, Property, Surface, Viewport};
///
/// let mut surface = MemorySurface::new(Viewport::default());
/// surface.insert(ElementSpec::new("cursor-dot"));
///
/// let scheduler = AnimationScheduler::new();
/// let mut x = AnimatedValue::new(scheduler.handle(), 0.0, SpringConfig::snappy())
///     .bind("cursor-dot", Property::TranslateX);
///
/// x.set_target(100.0);
/// scheduler.advance(16.0, &mut surface);
/// assert!(surface.style_value(&"cursor-dot".into(), Property::TranslateX).unwrap_or(0.0) > 0.0);
/// ```
pub struct AnimatedValue {
    handle: SchedulerHandle,
    spring_id: Option<SpringId>,
    config: SpringConfig,
    binding: Option<(ElementId, Property)>,
    current: f32,
    target: f32,
}

impl AnimatedValue {
    /// Create a value at `initial`; the spring registers on first target change
    pub fn new(handle: SchedulerHandle, initial: f32, config: SpringConfig) -> Self {
        Self {
            handle,
            spring_id: None,
            config,
            binding: None,
            current: initial,
            target: initial,
        }
    }

    /// Write the value to `property` of `target` as it animates
    pub fn bind(mut self, target: impl Into<ElementId>, property: Property) -> Self {
        let target = target.into();
        if let Some(id) = self.spring_id {
            self.handle.bind_spring(id, target.clone(), property);
        }
        self.binding = Some((target, property));
        self
    }

    /// Set the target value; starts animating if it differs from the current
    pub fn set_target(&mut self, target: f32) {
        self.target = target;

        if let Some(id) = self.spring_id {
            self.handle.set_spring_target(id, target);
        } else if (target - self.current).abs() > 0.001 {
            let spring = Spring::new(self.config, self.current);
            if let Some(id) = self.handle.register_spring(spring) {
                if let Some((element, property)) = &self.binding {
                    self.handle.bind_spring(id, element.clone(), *property);
                }
                self.handle.set_spring_target(id, target);
                self.spring_id = Some(id);
            }
        }
    }

    /// Get the current animated value
    pub fn get(&self) -> f32 {
        match self.spring_id {
            Some(id) => self.handle.get_spring_value(id).unwrap_or(self.target),
            None => self.current,
        }
    }

    /// True only while the spring is moving toward its target
    pub fn is_animating(&self) -> bool {
        self.spring_id
            .map_or(false, |id| !self.handle.is_spring_settled(id))
    }

    pub fn target(&self) -> f32 {
        self.target
    }
}

impl Drop for AnimatedValue {
    fn drop(&mut self) {
        if let Some(id) = self.spring_id.take() {
            self.handle.remove_spring(id);
        }
    }
}

// ============================================================================
// Animated Timeline
// ============================================================================

/// A timeline registered with the scheduler for as long as this value lives
///
/// Dropping it, or calling [`kill`](Self::kill), removes the timeline
/// mid-flight; no further writes reach the surface.
pub struct AnimatedTimeline {
    handle: SchedulerHandle,
    timeline_id: Option<TimelineId>,
    duration_ms: u32,
}

impl AnimatedTimeline {
    /// Register `timeline` with the scheduler behind `handle`
    pub fn new(handle: SchedulerHandle, timeline: Timeline) -> Self {
        let duration_ms = timeline.duration_ms();
        let timeline_id = handle.register_timeline(timeline);
        if timeline_id.is_none() {
            tracing::trace!("AnimatedTimeline: scheduler gone, timeline not registered");
        }
        Self {
            handle,
            timeline_id,
            duration_ms,
        }
    }

    /// Run `f` against the registered timeline
    pub fn with<F, R>(&self, f: F) -> Option<R>
    where
        F: FnOnce(&mut Timeline) -> R,
    {
        self.timeline_id
            .and_then(|id| self.handle.with_timeline(id, f))
    }

    pub fn play(&self) {
        self.with(Timeline::play);
    }

    pub fn reverse(&self) {
        self.with(Timeline::reverse);
    }

    pub fn pause(&self) {
        self.with(Timeline::pause);
    }

    pub fn resume(&self) {
        self.with(Timeline::resume);
    }

    pub fn restart(&self) {
        self.with(Timeline::restart);
    }

    pub fn reset(&self) {
        self.with(Timeline::reset);
    }

    pub fn complete(&self) {
        self.with(Timeline::complete);
    }

    pub fn seek_progress(&self, progress: f32) {
        self.with(|t| t.seek_progress(progress));
    }

    pub fn progress(&self) -> f32 {
        self.with(|t| t.progress()).unwrap_or(0.0)
    }

    pub fn is_playing(&self) -> bool {
        self.with(|t| t.is_playing()).unwrap_or(false)
    }

    pub fn is_complete(&self) -> bool {
        self.with(|t| t.is_complete()).unwrap_or(false)
    }

    pub fn is_reverse_complete(&self) -> bool {
        self.with(|t| t.is_reverse_complete()).unwrap_or(false)
    }

    pub fn duration_ms(&self) -> u32 {
        self.duration_ms
    }

    /// Still registered with a live scheduler
    pub fn is_active(&self) -> bool {
        self.with(|_| ()).is_some()
    }

    /// Remove the timeline now. Calling it again does nothing.
    pub fn kill(&mut self) {
        if let Some(id) = self.timeline_id.take() {
            self.handle.remove_timeline(id);
        }
    }
}

impl Drop for AnimatedTimeline {
    fn drop(&mut self) {
        self.kill();
    }
}

impl std::fmt::Debug for AnimatedTimeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AnimatedTimeline")
            .field("timeline_id", &self.timeline_id)
            .field("duration_ms", &self.duration_ms)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::easing::Easing;
    use crate::timeline::Position;
    use crate::tween::Tween;
    use folio_core::{ElementSpec, MemorySurface, PropertyValues, Viewport};

    fn surface() -> MemorySurface {
        let mut surface = MemorySurface::new(Viewport::default());
        surface.insert(ElementSpec::new("a"));
        surface.insert(ElementSpec::new("b"));
        surface
    }

    fn fade_in(target: &str) -> Timeline {
        let mut tl = Timeline::new().with_default_easing(Easing::Linear);
        tl.add(
            target,
            Tween::from_state(PropertyValues::new().opacity(0.0), 1000),
            Position::End,
        );
        tl
    }

    fn opacity(surface: &MemorySurface, id: &str) -> f32 {
        surface
            .style_value(&id.into(), Property::Opacity)
            .unwrap_or(f32::NAN)
    }

    #[test]
    fn test_render_pending_applies_start_state() {
        let mut surface = surface();
        let scheduler = AnimationScheduler::new();
        let _tl = AnimatedTimeline::new(scheduler.handle(), fade_in("a"));

        assert_eq!(scheduler.render_pending(&mut surface), 1);
        assert_eq!(opacity(&surface, "a"), 0.0);
        assert_eq!(scheduler.render_pending(&mut surface), 0);
    }

    #[test]
    fn test_advance_drives_timeline() {
        let mut surface = surface();
        let scheduler = AnimationScheduler::new();
        let tl = AnimatedTimeline::new(scheduler.handle(), fade_in("a"));
        tl.play();

        assert!(scheduler.advance(250.0, &mut surface));
        assert!((opacity(&surface, "a") - 0.25).abs() < 1e-4);

        assert!(!scheduler.advance(1000.0, &mut surface));
        assert!(tl.is_complete());
        assert_eq!(opacity(&surface, "a"), 1.0);
    }

    #[test]
    fn test_killed_timeline_stops_writing() {
        let mut surface = surface();
        let scheduler = AnimationScheduler::new();
        let mut tl = AnimatedTimeline::new(scheduler.handle(), fade_in("a"));
        tl.play();
        scheduler.advance(500.0, &mut surface);
        let frozen = opacity(&surface, "a");

        tl.kill();
        tl.kill();
        assert!(!tl.is_active());
        assert_eq!(scheduler.timeline_count(), 0);

        scheduler.advance(500.0, &mut surface);
        assert_eq!(opacity(&surface, "a"), frozen);
    }

    #[test]
    fn test_drop_removes_registrations() {
        let scheduler = AnimationScheduler::new();
        {
            let _a = AnimatedTimeline::new(scheduler.handle(), fade_in("a"));
            let mut v = AnimatedValue::new(scheduler.handle(), 0.0, SpringConfig::snappy());
            v.set_target(10.0);
            assert_eq!(scheduler.timeline_count(), 1);
            assert_eq!(scheduler.spring_count(), 1);
        }
        assert_eq!(scheduler.timeline_count(), 0);
        assert_eq!(scheduler.spring_count(), 0);
    }

    #[test]
    fn test_bound_value_writes_to_surface() {
        let mut surface = surface();
        let scheduler = AnimationScheduler::new();
        let mut value = AnimatedValue::new(scheduler.handle(), 0.0, SpringConfig::snappy())
            .bind("b", Property::TranslateY);
        assert!(!value.is_animating());

        value.set_target(100.0);
        assert!(value.is_animating());

        for _ in 0..120 {
            scheduler.advance(16.0, &mut surface);
        }
        assert!(!value.is_animating());
        assert_eq!(surface.style_value(&"b".into(), Property::TranslateY), Some(100.0));
        assert_eq!(value.get(), 100.0);
    }

    #[test]
    fn test_large_frame_is_subdivided() {
        let mut surface = surface();
        let scheduler = AnimationScheduler::new();
        let mut value = AnimatedValue::new(scheduler.handle(), 0.0, SpringConfig::snappy());
        value.set_target(50.0);

        // One long frame must not blow up the integration
        scheduler.advance(2000.0, &mut surface);
        assert!((value.get() - 50.0).abs() < 0.5);
    }

    #[test]
    fn test_handle_weak_reference() {
        let handle = {
            let scheduler = AnimationScheduler::new();
            scheduler.handle()
        };

        // Scheduler is dropped, handle should not be alive
        assert!(!handle.is_alive());

        // Operations should safely no-op
        assert!(handle
            .register_spring(Spring::new(SpringConfig::snappy(), 0.0))
            .is_none());
        let tl = AnimatedTimeline::new(handle, fade_in("a"));
        tl.play();
        assert!(!tl.is_active());
        assert!(!tl.is_playing());
    }
}
