//! Enter/exit animations for overlays
//!
//! A preset builds fresh timelines each time an overlay opens or closes, so
//! it can pick up elements that were only inserted for the current item.

use folio_animation::{Easing, Position, Timeline, Tween};
use folio_core::{ElementId, PropertyValues, Selector, Surface};

/// Builds the enter and exit timelines of an overlay
pub trait OverlayPreset: Send + Sync {
    /// Entrance, played when an item is presented
    fn enter(&self, surface: &dyn Surface) -> Timeline;

    /// Exit, played from wherever the overlay currently is
    fn exit(&self, surface: &dyn Surface) -> Timeline;
}

// =============================================================================
// Project detail
// =============================================================================

/// Class of the detail rows that stagger in after the image
pub const REVEAL_ITEM_CLASS: &str = "reveal-item";

/// Full-screen project detail: backdrop fade, image settle, staggered rows
#[derive(Clone, Debug)]
pub struct ProjectDetail {
    pub overlay: ElementId,
    pub content: ElementId,
    pub image: ElementId,
    /// Gap between successive detail rows
    pub row_stagger_ms: u32,
}

impl ProjectDetail {
    pub fn new(
        overlay: impl Into<ElementId>,
        content: impl Into<ElementId>,
        image: impl Into<ElementId>,
    ) -> Self {
        Self {
            overlay: overlay.into(),
            content: content.into(),
            image: image.into(),
            row_stagger_ms: 100,
        }
    }

    pub fn row_stagger(mut self, stagger_ms: u32) -> Self {
        self.row_stagger_ms = stagger_ms;
        self
    }
}

impl Default for ProjectDetail {
    fn default() -> Self {
        Self::new("modal-overlay", "modal-content", "modal-image")
    }
}

impl OverlayPreset for ProjectDetail {
    fn enter(&self, surface: &dyn Surface) -> Timeline {
        let mut tl = Timeline::new().with_default_easing(Easing::Power3Out);

        tl.add(
            self.overlay.clone(),
            Tween::from_state(PropertyValues::new().opacity(0.0), 300).easing(Easing::Power2Out),
            Position::End,
        );
        tl.add(
            self.image.clone(),
            Tween::from_state(PropertyValues::new().scale(1.2).opacity(0.0), 800),
            Position::Offset(-100),
        );

        let rows = surface.select(&Selector::class_in(self.content.clone(), REVEAL_ITEM_CLASS));
        if !rows.is_empty() {
            tl.stagger(
                &rows,
                Tween::from_state(PropertyValues::new().y(50.0).opacity(0.0), 600),
                self.row_stagger_ms,
                Position::Offset(-400),
            );
        }
        tl
    }

    fn exit(&self, _surface: &dyn Surface) -> Timeline {
        let mut tl = Timeline::new().with_default_easing(Easing::Power2In);
        tl.add(
            self.content.clone(),
            Tween::to(PropertyValues::new().opacity(0.0).y(30.0), 300),
            Position::End,
        );
        tl.add(
            self.overlay.clone(),
            Tween::to(PropertyValues::new().opacity(0.0), 300),
            Position::Offset(-200),
        );
        tl
    }
}

// =============================================================================
// Lightbox
// =============================================================================

/// Gallery lightbox: shown and hidden without transition
#[derive(Clone, Debug)]
pub struct Lightbox {
    pub root: ElementId,
}

impl Lightbox {
    pub fn new(root: impl Into<ElementId>) -> Self {
        Self { root: root.into() }
    }
}

impl Default for Lightbox {
    fn default() -> Self {
        Self::new("lightbox")
    }
}

impl OverlayPreset for Lightbox {
    fn enter(&self, _surface: &dyn Surface) -> Timeline {
        let mut tl = Timeline::new().with_default_easing(Easing::Linear);
        tl.add(
            self.root.clone(),
            Tween::from_to(
                PropertyValues::new().opacity(0.0),
                PropertyValues::new().opacity(1.0),
                0,
            ),
            Position::End,
        );
        tl
    }

    fn exit(&self, _surface: &dyn Surface) -> Timeline {
        let mut tl = Timeline::new().with_default_easing(Easing::Linear);
        tl.add(
            self.root.clone(),
            Tween::from_to(
                PropertyValues::new().opacity(1.0),
                PropertyValues::new().opacity(0.0),
                0,
            ),
            Position::End,
        );
        tl
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::{ElementSpec, MemorySurface, Viewport};

    fn modal_surface(rows: usize) -> MemorySurface {
        let mut surface = MemorySurface::new(Viewport::default());
        surface.insert(ElementSpec::new("modal-overlay"));
        surface.insert(ElementSpec::new("modal-content").parent("modal-overlay"));
        surface.insert(ElementSpec::new("modal-image").parent("modal-content"));
        for i in 0..rows {
            surface.insert(
                ElementSpec::new(format!("modal-row-{i}"))
                    .parent("modal-content")
                    .class(REVEAL_ITEM_CLASS),
            );
        }
        surface
    }

    #[test]
    fn test_project_detail_entrance_schedule() {
        let surface = modal_surface(3);
        let tl = ProjectDetail::default().enter(&surface);
        let starts: Vec<_> = tl
            .entry_ids()
            .into_iter()
            .filter_map(|id| tl.entry_start(id))
            .collect();
        // overlay, image at 300-100, rows at 1000-400 staggered by 100
        assert_eq!(starts, vec![0, 200, 600, 700, 800]);
        assert_eq!(tl.duration_ms(), 1400);
    }

    #[test]
    fn test_row_stagger_is_configurable() {
        let surface = modal_surface(3);
        let tl = ProjectDetail::default().row_stagger(50).enter(&surface);
        assert_eq!(tl.duration_ms(), 1300);
    }

    #[test]
    fn test_entrance_without_rows() {
        let surface = modal_surface(0);
        let tl = ProjectDetail::default().enter(&surface);
        assert_eq!(tl.entry_count(), 2);
        assert_eq!(tl.duration_ms(), 1000);
    }

    #[test]
    fn test_project_detail_exit_overlaps() {
        let surface = modal_surface(0);
        let tl = ProjectDetail::default().exit(&surface);
        assert_eq!(tl.duration_ms(), 400);
    }

    #[test]
    fn test_lightbox_is_instant() {
        let surface = MemorySurface::new(Viewport::default());
        let lightbox = Lightbox::default();
        assert_eq!(lightbox.enter(&surface).duration_ms(), 0);
        assert_eq!(lightbox.exit(&surface).duration_ms(), 0);
    }
}
