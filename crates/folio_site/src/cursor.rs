//! Pointer-following custom cursor
//!
//! Two elements chase the pointer: a dot on a stiff spring and a ring on a
//! slower one, so the ring trails behind. The ring grows while the pointer
//! is over something clickable. Not shown on touch-sized viewports.

use std::sync::{Arc, Mutex};

use folio_animation::AnimatedValue;
use folio_core::sync::lock;
use folio_core::{ElementId, ElementSpec, Property, Rect, Subscription, Surface, ViewportEvent};

use crate::stage::Stage;

pub const CURSOR_DOT: &str = "cursor-dot";
pub const CURSOR_RING: &str = "cursor-ring";

// Scale is unitless; pixel rest thresholds would snap it in one frame
const SCALE_REST_DELTA: f32 = 0.001;
const SCALE_REST_SPEED: f32 = 0.01;

/// Classes that make the ring grow
pub const HOVER_CLASSES: [&str; 6] = ["link", "button", "project-card", "magnetic-btn", "social-link", "nav-link"];

pub struct Cursor {
    dot_x: AnimatedValue,
    dot_y: AnimatedValue,
    ring_x: AnimatedValue,
    ring_y: AnimatedValue,
    ring_scale: AnimatedValue,
    hover_scale: f32,
    pointer: Arc<Mutex<Option<(f32, f32)>>>,
    hovering: bool,
    _subscription: Subscription,
}

impl Cursor {
    /// Put the cursor on the stage
    ///
    /// Returns `None` when the cursor is disabled or the viewport is mobile.
    pub fn mount(stage: &mut Stage) -> Option<Self> {
        let config = stage.config().cursor.clone();
        if !config.enabled || stage.viewport().is_mobile() {
            tracing::debug!("Cursor: not shown");
            return None;
        }

        // Zero-sized so they never catch a hit test
        let surface = stage.surface_mut();
        surface.insert(ElementSpec::new(CURSOR_DOT).bounds(Rect::default()));
        surface.insert(ElementSpec::new(CURSOR_RING).bounds(Rect::default()));

        let handle = stage.scheduler().handle();
        let value = |element: &str, property: Property, initial: f32, spring| {
            AnimatedValue::new(handle.clone(), initial, spring).bind(element, property)
        };

        let pointer = Arc::new(Mutex::new(None));
        let subscription = stage.events().subscribe({
            let pointer = Arc::clone(&pointer);
            move |event| {
                if let ViewportEvent::PointerMove { x, y } = event {
                    *lock(&pointer) = Some((*x, *y));
                }
            }
        });

        tracing::debug!("Cursor: mounted");
        Some(Self {
            dot_x: value(CURSOR_DOT, Property::TranslateX, 0.0, config.dot),
            dot_y: value(CURSOR_DOT, Property::TranslateY, 0.0, config.dot),
            ring_x: value(CURSOR_RING, Property::TranslateX, 0.0, config.ring),
            ring_y: value(CURSOR_RING, Property::TranslateY, 0.0, config.ring),
            ring_scale: value(
                CURSOR_RING,
                Property::Scale,
                1.0,
                config.ring.rest(SCALE_REST_DELTA, SCALE_REST_SPEED),
            ),
            hover_scale: config.hover_scale,
            pointer,
            hovering: false,
            _subscription: subscription,
        })
    }

    /// Take the cursor off the stage
    pub fn unmount(self, stage: &mut Stage) {
        drop(self);
        let surface = stage.surface_mut();
        surface.remove_subtree(&CURSOR_DOT.into());
        surface.remove_subtree(&CURSOR_RING.into());
        tracing::debug!("Cursor: unmounted");
    }

    /// Last pointer position in viewport coordinates
    pub fn pointer(&self) -> Option<(f32, f32)> {
        *lock(&self.pointer)
    }

    pub fn is_hovering(&self) -> bool {
        self.hovering
    }

    /// Where the dot and ring currently are
    pub fn positions(&self) -> ((f32, f32), (f32, f32)) {
        ((self.dot_x.get(), self.dot_y.get()), (self.ring_x.get(), self.ring_y.get()))
    }

    pub fn ring_scale(&self) -> f32 {
        self.ring_scale.get()
    }

    /// Retarget the springs at the pointer; call once per frame before stepping
    pub fn update(&mut self, stage: &Stage) {
        let Some((x, y)) = self.pointer() else {
            return;
        };
        self.dot_x.set_target(x);
        self.dot_y.set_target(y);
        self.ring_x.set_target(x);
        self.ring_y.set_target(y);

        let hovering = is_interactive(stage, &stage.hit_test(x, y));
        if hovering != self.hovering {
            tracing::trace!("Cursor: hovering {}", hovering);
            self.hovering = hovering;
        }
        self.ring_scale.set_target(if hovering { self.hover_scale } else { 1.0 });
    }
}

fn is_interactive(stage: &Stage, hits: &[ElementId]) -> bool {
    let surface = stage.surface();
    hits.iter()
        .any(|id| HOVER_CLASSES.iter().any(|class| surface.has_class(id, class)))
}

impl std::fmt::Debug for Cursor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Cursor")
            .field("pointer", &self.pointer())
            .field("hovering", &self.hovering)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteConfig;
    use folio_core::Viewport;

    fn stage(viewport: Viewport) -> Stage {
        let mut stage = Stage::new(SiteConfig::default(), viewport);
        let surface = stage.surface_mut();
        surface.insert(ElementSpec::new("work").bounds(Rect::new(0.0, 0.0, viewport.width, 2000.0)));
        surface.insert(
            ElementSpec::new("project-a")
                .parent("work")
                .class("project-card")
                .bounds(Rect::new(100.0, 1000.0, 400.0, 300.0)),
        );
        stage
    }

    fn settle(cursor: &mut Cursor, stage: &mut Stage) {
        for _ in 0..120 {
            cursor.update(stage);
            stage.frame(16.0);
        }
    }

    #[test]
    fn test_follows_pointer() {
        let mut stage = stage(Viewport::default());
        let mut cursor = Cursor::mount(&mut stage).unwrap();
        assert_eq!(stage.events().subscriber_count(), 1);

        stage.pointer_move(300.0, 200.0);
        cursor.update(&stage);
        stage.frame(16.0);
        let ((dot_x, _), (ring_x, _)) = cursor.positions();
        assert!(dot_x > ring_x, "ring trails the dot");

        settle(&mut cursor, &mut stage);
        let dot = stage.surface().style_value(&CURSOR_DOT.into(), Property::TranslateX).unwrap();
        assert!((dot - 300.0).abs() < 0.5);
        assert!(!cursor.is_hovering());

        drop(cursor);
        assert_eq!(stage.events().subscriber_count(), 0);
        assert_eq!(stage.scheduler().spring_count(), 0);
    }

    #[test]
    fn test_ring_grows_over_cards() {
        let mut stage = stage(Viewport::default());
        let mut cursor = Cursor::mount(&mut stage).unwrap();
        stage.jump_to(900.0);
        stage.pointer_move(200.0, 200.0);
        cursor.update(&stage);
        stage.frame(16.0);
        assert!(cursor.is_hovering());
        let first = cursor.ring_scale();
        assert!(first > 1.0 && first < 1.2, "ring eases toward hover scale, got {first}");

        settle(&mut cursor, &mut stage);
        assert!((cursor.ring_scale() - 1.5).abs() < 0.01);

        stage.pointer_move(800.0, 200.0);
        settle(&mut cursor, &mut stage);
        assert!(!cursor.is_hovering());
        assert!((cursor.ring_scale() - 1.0).abs() < 0.01);
    }

    #[test]
    fn test_hidden_on_mobile_or_disabled() {
        let mut mobile = stage(Viewport::new(390.0, 844.0));
        assert!(Cursor::mount(&mut mobile).is_none());

        let mut config = SiteConfig::default();
        config.cursor.enabled = false;
        let mut disabled = Stage::new(config, Viewport::default());
        assert!(Cursor::mount(&mut disabled).is_none());
        assert!(!disabled.surface().contains(&CURSOR_DOT.into()));
    }
}
