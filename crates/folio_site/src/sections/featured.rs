//! Featured works grid

use folio_core::{ElementId, ElementSpec, PropertyValues, Rect, Selector};
use folio_scroll::{ParallaxTrack, TriggerPosition};

use super::{item_at, item_id, Action, Section};
use crate::config::SiteConfig;
use crate::content::FEATURED;
use crate::engine::{MotionEngine, Parallax, Reveal};
use crate::layout::{cell_width, grid_cells, PageLayout, SECTION_PADDING};
use crate::scope::SectionScope;

pub const WORK_TITLE: &str = "work-title";
pub const WORK_GRID: &str = "work-grid";
pub const PROJECT_CARD_CLASS: &str = "project-card";
pub const PROJECT_IMAGE_CLASS: &str = "project-card-image";

const CARD_PREFIX: &str = "project";
const GAP: f32 = 32.0;

#[derive(Clone, Copy, Debug, Default)]
pub struct Featured;

impl Featured {
    pub fn card_id(index: usize) -> Option<ElementId> {
        FEATURED.get(index).map(|item| item_id(CARD_PREFIX, item))
    }
}

impl Section for Featured {
    fn id(&self) -> &'static str {
        "work"
    }

    fn layout(&self, layout: &mut PageLayout<'_>) {
        let top = layout.open(self.id());
        let header = layout.content(top + SECTION_PADDING, 240.0);
        layout.place(ElementSpec::new(WORK_TITLE).parent(self.id()).bounds(header));

        // The lead project spans the full row at 21:9 when there is room
        let columns = layout.columns(1, 2, 2);
        let grid_top = header.bottom() + 80.0;
        let card_height = cell_width(header.width, columns, GAP) * 3.0 / 4.0;
        let lead = if columns > 1 {
            Rect::new(header.x, grid_top, header.width, header.width * 9.0 / 21.0)
        } else {
            Rect::new(header.x, grid_top, header.width, card_height)
        };
        let rest = grid_cells(
            Rect::new(header.x, lead.bottom() + GAP, header.width, 0.0),
            columns,
            card_height,
            GAP,
            FEATURED.len() - 1,
        );
        let grid_bottom = rest.last().map_or(lead.bottom(), Rect::bottom);

        layout.place(
            ElementSpec::new(WORK_GRID)
                .parent(self.id())
                .bounds(Rect::new(header.x, grid_top, header.width, grid_bottom - grid_top)),
        );
        for (item, rect) in FEATURED.iter().zip(std::iter::once(lead).chain(rest)) {
            let card = item_id(CARD_PREFIX, item);
            layout.place(
                ElementSpec::new(&card)
                    .parent(WORK_GRID)
                    .class(PROJECT_CARD_CLASS)
                    .bounds(rect),
            );
            layout.place(
                ElementSpec::new(card.child("image"))
                    .parent(&card)
                    .class(PROJECT_IMAGE_CLASS)
                    .bounds(rect),
            );
        }
        layout.close(self.id(), grid_bottom + SECTION_PADDING);
    }

    fn animate(&self, engine: &mut dyn MotionEngine, config: &SiteConfig) -> SectionScope {
        let mut scope = SectionScope::new(self.id());
        let actions = config.reveal.actions();

        scope.adopt(
            engine.reveal(
                Reveal::new(Selector::id(WORK_TITLE), PropertyValues::new().y(100.0).opacity(0.0), 1000)
                    .on_scroll(WORK_TITLE, TriggerPosition::top_at(0.8), actions),
            ),
        );
        scope.adopt(
            engine.reveal(
                Reveal::new(
                    Selector::class_in(WORK_GRID, PROJECT_CARD_CLASS),
                    PropertyValues::new().y(100.0).opacity(0.0).scale(0.9),
                    800,
                )
                .stagger(150)
                .on_scroll(WORK_GRID, TriggerPosition::top_at(0.7), actions),
            ),
        );

        // Each card's image drifts up inside its frame while the card crosses the viewport
        for item in &FEATURED {
            let card = item_id(CARD_PREFIX, item);
            scope.adopt(engine.parallax(Parallax::new(
                ParallaxTrack::new(
                    card.child("image"),
                    PropertyValues::new().y_percent(0.0),
                    PropertyValues::new().y_percent(-15.0),
                ),
                card,
            )));
        }
        scope
    }

    fn on_click(&self, target: &ElementId) -> Option<Action> {
        item_at(CARD_PREFIX, &FEATURED, target).map(Action::OpenProject)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::{MemorySurface, Surface, Viewport};

    #[test]
    fn test_lead_card_spans_the_row() {
        let mut surface = MemorySurface::new(Viewport::new(1440.0, 900.0));
        let mut layout = PageLayout::new(&mut surface);
        Featured.layout(&mut layout);
        layout.finish();

        let lead = surface.bounds(&Featured::card_id(0).unwrap()).unwrap();
        let second = surface.bounds(&Featured::card_id(1).unwrap()).unwrap();
        let third = surface.bounds(&Featured::card_id(2).unwrap()).unwrap();
        assert_eq!(lead.width, 1392.0);
        assert_eq!(second.top(), third.top());
        assert!(second.top() > lead.bottom());
        assert_eq!(
            surface.select(&Selector::class_in(WORK_GRID, PROJECT_CARD_CLASS)).len(),
            FEATURED.len()
        );
    }

    #[test]
    fn test_mobile_single_column() {
        let mut surface = MemorySurface::new(Viewport::new(390.0, 844.0));
        let mut layout = PageLayout::new(&mut surface);
        Featured.layout(&mut layout);
        layout.finish();

        let second = surface.bounds(&Featured::card_id(1).unwrap()).unwrap();
        let third = surface.bounds(&Featured::card_id(2).unwrap()).unwrap();
        assert!(third.top() > second.bottom());
    }

    #[test]
    fn test_click_opens_project() {
        let card = Featured::card_id(3).unwrap();
        assert_eq!(Featured.on_click(&card.child("image")), Some(Action::OpenProject(FEATURED[3])));
        assert_eq!(Featured.on_click(&WORK_TITLE.into()), None);
    }
}
