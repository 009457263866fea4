//! Services grid

use folio_core::{ElementId, ElementSpec, PropertyValues, Rect, Selector};
use folio_scroll::TriggerPosition;

use super::Section;
use crate::config::SiteConfig;
use crate::content::SERVICES;
use crate::engine::{MotionEngine, Reveal};
use crate::layout::{PageLayout, SECTION_PADDING};
use crate::scope::SectionScope;

pub const SERVICES_TITLE: &str = "services-title";
pub const SERVICES_GRID: &str = "services-grid";
pub const SERVICE_CARD_CLASS: &str = "service-card";

/// The card grid is narrower than the page
const GRID_MAX_WIDTH: f32 = 1024.0;

#[derive(Clone, Copy, Debug, Default)]
pub struct Services;

impl Section for Services {
    fn id(&self) -> &'static str {
        "services"
    }

    fn layout(&self, layout: &mut PageLayout<'_>) {
        let top = layout.open(self.id());
        let header = layout.content(top + SECTION_PADDING, 200.0);
        layout.place(ElementSpec::new(SERVICES_TITLE).parent(self.id()).bounds(header));

        let width = header.width.min(GRID_MAX_WIDTH);
        let area = Rect::new(header.x + (header.width - width) / 2.0, header.bottom() + 80.0, width, 0.0);
        let columns = layout.columns(1, 2, 2);
        layout.place(ElementSpec::new(SERVICES_GRID).parent(self.id()));
        let bottom = layout.grid(
            area,
            columns,
            360.0,
            24.0,
            (0..SERVICES.len()).map(|i| {
                ElementSpec::new(ElementId::from(SERVICES_GRID).child(i))
                    .parent(SERVICES_GRID)
                    .class(SERVICE_CARD_CLASS)
            }),
        );
        layout.place(
            ElementSpec::new(SERVICES_GRID)
                .parent(self.id())
                .bounds(Rect::new(area.x, area.top(), area.width, bottom - area.top())),
        );
        layout.close(self.id(), bottom + SECTION_PADDING);
    }

    fn animate(&self, engine: &mut dyn MotionEngine, config: &SiteConfig) -> SectionScope {
        let mut scope = SectionScope::new(self.id());
        let actions = config.reveal.actions();
        scope.adopt(
            engine.reveal(
                Reveal::new(Selector::id(SERVICES_TITLE), PropertyValues::new().y(100.0).opacity(0.0), 1000)
                    .on_scroll(SERVICES_TITLE, TriggerPosition::top_at(0.8), actions),
            ),
        );
        scope.adopt(
            engine.reveal(
                Reveal::new(
                    Selector::class_in(SERVICES_GRID, SERVICE_CARD_CLASS),
                    PropertyValues::new().y(80.0).opacity(0.0),
                    800,
                )
                .stagger(150)
                .on_scroll(SERVICES_GRID, TriggerPosition::top_at(0.7), actions),
            ),
        );
        scope
    }
}
