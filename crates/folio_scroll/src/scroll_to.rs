//! Animated scroll-to
//!
//! Eases the document scroll offset to a target: a section anchor for nav
//! links, or the top of the page. A new request replaces one in flight and
//! starts from wherever the page currently is.

use folio_animation::Easing;
use folio_core::{ElementId, Surface};

/// In-flight scroll animation
#[derive(Clone, Copy, Debug, PartialEq)]
struct ScrollTween {
    from: f32,
    to: f32,
    elapsed_ms: f32,
}

/// Drives the page scroll offset toward a target over time
#[derive(Clone, Debug)]
pub struct ScrollAnimator {
    duration_ms: u32,
    easing: Easing,
    active: Option<ScrollTween>,
}

impl Default for ScrollAnimator {
    /// 1.2s with `power3.inOut`
    fn default() -> Self {
        Self::new(1200, Easing::Power3InOut)
    }
}

impl ScrollAnimator {
    pub fn new(duration_ms: u32, easing: Easing) -> Self {
        Self {
            duration_ms,
            easing,
            active: None,
        }
    }

    /// Start scrolling to document offset `y`, clamped to the scrollable range
    ///
    /// Returns the clamped target.
    pub fn scroll_to_y(&mut self, surface: &dyn Surface, y: f32) -> f32 {
        let to = y.clamp(0.0, surface.max_scroll_y());
        let from = surface.scroll_y();
        if self.active.is_some() {
            tracing::trace!("ScrollAnimator: replacing in-flight scroll");
        }
        tracing::debug!("ScrollAnimator: {from} -> {to}");
        self.active = Some(ScrollTween {
            from,
            to,
            elapsed_ms: 0.0,
        });
        to
    }

    /// Start scrolling to the top of `id`
    ///
    /// An element that is not on the surface is a no-op returning false.
    pub fn scroll_to_element(&mut self, surface: &dyn Surface, id: &ElementId) -> bool {
        match surface.bounds(id) {
            Some(bounds) => {
                self.scroll_to_y(surface, bounds.top());
                true
            }
            None => {
                tracing::debug!("ScrollAnimator: no element {:?}, not scrolling", id);
                false
            }
        }
    }

    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    /// Where the in-flight scroll is heading
    pub fn target(&self) -> Option<f32> {
        self.active.map(|t| t.to)
    }

    pub fn cancel(&mut self) {
        self.active = None;
    }

    /// Advance the scroll animation and write the offset to the surface
    ///
    /// Returns true while the animation is still running.
    pub fn step(&mut self, dt_ms: f32, surface: &mut dyn Surface) -> bool {
        let Some(tween) = &mut self.active else {
            return false;
        };
        tween.elapsed_ms += dt_ms.max(0.0);

        let t = if self.duration_ms == 0 {
            1.0
        } else {
            (tween.elapsed_ms / self.duration_ms as f32).min(1.0)
        };
        let eased = self.easing.apply(t);
        surface.set_scroll_y(tween.from + (tween.to - tween.from) * eased);

        if t >= 1.0 {
            self.active = None;
            return false;
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::{ElementSpec, MemorySurface, Rect, Viewport};

    fn page() -> MemorySurface {
        let mut surface = MemorySurface::new(Viewport::new(1440.0, 1000.0));
        surface.insert(ElementSpec::new("hero").bounds(Rect::new(0.0, 0.0, 1440.0, 1000.0)));
        surface.insert(ElementSpec::new("about").bounds(Rect::new(0.0, 2400.0, 1440.0, 1000.0)));
        surface.insert(ElementSpec::new("contact").bounds(Rect::new(0.0, 3400.0, 1440.0, 800.0)));
        surface
    }

    fn run(animator: &mut ScrollAnimator, surface: &mut MemorySurface) -> usize {
        let mut frames = 0;
        while animator.step(16.0, surface) {
            frames += 1;
        }
        frames
    }

    #[test]
    fn test_scrolls_to_element() {
        let mut surface = page();
        let mut animator = ScrollAnimator::default();

        assert!(animator.scroll_to_element(&surface, &"about".into()));
        let frames = run(&mut animator, &mut surface);
        assert_eq!(surface.scroll_y(), 2400.0);
        // 1200ms at 16ms per frame
        assert_eq!(frames, 74);
    }

    #[test]
    fn test_missing_element_is_noop() {
        let mut surface = page();
        surface.set_scroll_y(500.0);
        let mut animator = ScrollAnimator::default();

        assert!(!animator.scroll_to_element(&surface, &"pricing".into()));
        assert!(!animator.is_active());
        assert!(!animator.step(16.0, &mut surface));
        assert_eq!(surface.scroll_y(), 500.0);
    }

    #[test]
    fn test_target_is_clamped() {
        let surface = page();
        let mut animator = ScrollAnimator::default();
        // Document is 4200 tall, viewport 1000
        assert_eq!(animator.scroll_to_y(&surface, 4100.0), 3200.0);
        assert_eq!(animator.scroll_to_y(&surface, -50.0), 0.0);
        assert!(animator.scroll_to_element(&surface, &"contact".into()));
        assert_eq!(animator.target(), Some(3200.0));
    }

    #[test]
    fn test_new_request_replaces_in_flight() {
        let mut surface = page();
        let mut animator = ScrollAnimator::default();
        animator.scroll_to_y(&surface, 3000.0);
        for _ in 0..30 {
            animator.step(16.0, &mut surface);
        }
        let midway = surface.scroll_y();
        assert!(midway > 0.0 && midway < 3000.0);

        animator.scroll_to_y(&surface, 0.0);
        animator.step(16.0, &mut surface);
        // Continues from where it was, not from the old start
        assert!(surface.scroll_y() <= midway);
        run(&mut animator, &mut surface);
        assert_eq!(surface.scroll_y(), 0.0);
    }
}
