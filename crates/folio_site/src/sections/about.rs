//! About: portrait, story and counters

use folio_animation::Easing;
use folio_core::{ElementId, ElementSpec, PropertyValues, Rect, Selector};
use folio_scroll::{ToggleActions, TriggerPosition};

use super::Section;
use crate::config::SiteConfig;
use crate::content::{Stat, STATS};
use crate::engine::{MotionEngine, Reveal};
use crate::layout::{grid_cells, PageLayout, SECTION_PADDING};
use crate::scope::SectionScope;

pub const ABOUT_IMAGE: &str = "about-image";
pub const ABOUT_TEXT: &str = "about-text";
pub const ANIMATE_TEXT_CLASS: &str = "animate-text";

const TEXT_BLOCKS: [(&str, f32); 4] = [("label", 24.0), ("heading", 160.0), ("story", 120.0), ("detail", 96.0)];

#[derive(Clone, Copy, Debug, Default)]
pub struct About;

impl About {
    /// Element showing the animated number for `stat`
    pub fn stat_id(stat: &Stat) -> ElementId {
        ElementId::new(format!("stat-{}", stat.key))
    }

    /// Counts up from 0 once, the first time the number comes into view
    fn counter(stat: &Stat) -> Reveal {
        let id = Self::stat_id(stat);
        Reveal::new(Selector::id(&id), PropertyValues::new().counter(0.0), 2000)
            .to(PropertyValues::new().counter(stat.value as f32))
            .easing(Easing::Power2Out)
            .snap(1.0)
            .on_scroll(id, TriggerPosition::top_at(0.8), ToggleActions::play_once())
    }
}

impl Section for About {
    fn id(&self) -> &'static str {
        "about"
    }

    fn layout(&self, layout: &mut PageLayout<'_>) {
        let top = layout.open(self.id());
        let content = layout.content(top + SECTION_PADDING, 0.0);
        let columns = layout.columns(1, 1, 2);
        let cells = grid_cells(content, columns, 0.0, 96.0, 2);
        let column_width = cells[0].width;
        let image = Rect::new(cells[0].x, content.top(), column_width, column_width * 5.0 / 4.0);
        let text_top = if columns > 1 { content.top() } else { image.bottom() + 64.0 };
        let text_area = Rect::new(cells[1].x, text_top, column_width, 0.0);

        layout.place(ElementSpec::new(ABOUT_IMAGE).parent(self.id()).bounds(image));
        layout.place(ElementSpec::new(ABOUT_TEXT).parent(self.id()));

        let blocks = TEXT_BLOCKS.iter().map(|(name, height)| {
            let spec = ElementSpec::new(ElementId::from(ABOUT_TEXT).child(name))
                .parent(ABOUT_TEXT)
                .class(ANIMATE_TEXT_CLASS);
            (spec, *height)
        });
        let stats_row = ElementId::from(ABOUT_TEXT).child("stats");
        let blocks = blocks.chain(std::iter::once((
            ElementSpec::new(&stats_row).parent(ABOUT_TEXT).class(ANIMATE_TEXT_CLASS),
            120.0,
        )));
        let text_bottom = layout.rows(text_area, 32.0, blocks);

        if let Some(row) = layout.bounds(&stats_row) {
            let area = Rect::new(row.x, row.top() + 32.0, row.width, 0.0);
            for (stat, cell) in STATS.iter().zip(grid_cells(area, STATS.len(), 56.0, 32.0, STATS.len())) {
                layout.place(ElementSpec::new(Self::stat_id(stat)).parent(&stats_row).bounds(cell));
            }
        }
        layout.place(
            ElementSpec::new(ABOUT_TEXT)
                .parent(self.id())
                .bounds(Rect::new(text_area.x, text_top, column_width, text_bottom - text_top)),
        );

        let bottom = image.bottom().max(text_bottom);
        layout.close(self.id(), bottom + SECTION_PADDING);
    }

    fn animate(&self, engine: &mut dyn MotionEngine, config: &SiteConfig) -> SectionScope {
        let mut scope = SectionScope::new(self.id());
        let actions = config.reveal.actions();

        // Portrait wipes in from the bottom while settling from a zoom
        scope.adopt(
            engine.reveal(
                Reveal::new(
                    Selector::id(ABOUT_IMAGE),
                    PropertyValues::new().clip_top(100.0).scale(1.2),
                    1200,
                )
                .to(PropertyValues::new().clip_top(0.0).scale(1.0))
                .easing(Easing::Power3InOut)
                .on_scroll(ABOUT_IMAGE, TriggerPosition::top_at(0.7), actions),
            ),
        );
        scope.adopt(
            engine.reveal(
                Reveal::new(
                    Selector::class_in(ABOUT_TEXT, ANIMATE_TEXT_CLASS),
                    PropertyValues::new().y(80.0).opacity(0.0),
                    800,
                )
                .stagger(150)
                .on_scroll(ABOUT_TEXT, TriggerPosition::top_at(0.7), actions),
            ),
        );
        for stat in &STATS {
            scope.adopt(engine.reveal(Self::counter(stat)));
        }
        scope
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::recording::RecordingEngine;
    use folio_core::{MemorySurface, Surface, Viewport};

    fn actions_by_target(config: &SiteConfig) -> Vec<(Selector, ToggleActions)> {
        let mut engine = RecordingEngine::default();
        let scope = About.animate(&mut engine, config);
        assert!(scope.is_empty());
        engine
            .reveals
            .into_iter()
            .filter_map(|reveal| Some((reveal.targets, reveal.trigger?.actions)))
            .collect()
    }

    #[test]
    fn test_counters_play_once_and_reveals_follow_config() {
        let requests = actions_by_target(&SiteConfig::default());
        assert_eq!(requests.len(), 2 + STATS.len());
        assert_eq!(requests[0], (Selector::id(ABOUT_IMAGE), ToggleActions::play_reverse()));
        assert_eq!(requests[1].1, ToggleActions::play_reverse());
        for (stat, (targets, actions)) in STATS.iter().zip(&requests[2..]) {
            assert_eq!(targets, &Selector::id(About::stat_id(stat)));
            assert_eq!(actions, &ToggleActions::play_once());
        }

        let mut config = SiteConfig::default();
        config.reveal.reverse_on_scroll_back = false;
        let requests = actions_by_target(&config);
        assert!(requests.iter().all(|(_, actions)| *actions == ToggleActions::play_once()));
    }

    #[test]
    fn test_layout_places_text_beside_portrait() {
        let mut surface = MemorySurface::new(Viewport::new(1440.0, 900.0));
        let mut layout = PageLayout::new(&mut surface);
        About.layout(&mut layout);
        layout.finish();

        let image = surface.bounds(&ABOUT_IMAGE.into()).unwrap();
        let text = surface.bounds(&ABOUT_TEXT.into()).unwrap();
        assert_eq!(image.top(), text.top());
        assert!(text.x > image.x);

        // Every counter sits inside the stats row
        let row = surface.bounds(&ElementId::from(ABOUT_TEXT).child("stats")).unwrap();
        for stat in &STATS {
            let bounds = surface.bounds(&About::stat_id(stat)).unwrap();
            assert!(bounds.top() >= row.top() && bounds.bottom() <= row.bottom());
        }
        assert_eq!(surface.select(&Selector::class_in(ABOUT_TEXT, ANIMATE_TEXT_CLASS)).len(), 5);
    }

    #[test]
    fn test_counters_never_reverse() {
        for stat in &STATS {
            let reveal = About::counter(stat);
            let trigger = reveal.trigger.as_ref().unwrap();
            assert_eq!(trigger.actions, ToggleActions::play_once());
            assert_eq!(trigger.element, About::stat_id(stat));
            assert_eq!(reveal.snap, Some(1.0));
        }
    }
}
