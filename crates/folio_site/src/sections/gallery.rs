//! Portfolio page sections

use folio_core::{ElementId, ElementSpec, PropertyValues, Rect, Selector};
use folio_scroll::{ToggleActions, TriggerPosition};

use super::{item_at, item_id, Action, Section};
use crate::config::SiteConfig;
use crate::content::{ContentItem, ART_3D, CINEMATOGRAPHY, PHOTOGRAPHY};
use crate::embed::{embed_for, VideoEmbed};
use crate::engine::{MotionEngine, Reveal};
use crate::error::Result;
use crate::layout::{cell_width, PageLayout};
use crate::scope::SectionScope;

pub const REVEAL_HERO_CLASS: &str = "reveal-hero";
pub const SECTION_HEADER_CLASS: &str = "section-header";
pub const GALLERY_ITEM_CLASS: &str = "gallery-item";
pub const ART_ITEM_CLASS: &str = "art3d-item";
pub const VIDEO_ITEM_CLASS: &str = "video-item";

/// Vertical padding of the portfolio sections
const PADDING: f32 = 96.0;
const HEADER_HEIGHT: f32 = 200.0;

fn header_id(section: &str) -> ElementId {
    ElementId::new(format!("{section}-header"))
}

/// Place a section header at `top`, returning where the items start
fn layout_header(layout: &mut PageLayout<'_>, section: &str, top: f32) -> Rect {
    let header = layout.content(top + PADDING, HEADER_HEIGHT);
    layout.place(
        ElementSpec::new(header_id(section))
            .parent(section)
            .class(SECTION_HEADER_CLASS)
            .bounds(header),
    );
    Rect::new(header.x, header.bottom() + 64.0, header.width, 0.0)
}

fn header_reveal(section: &str, actions: ToggleActions) -> Reveal {
    let header = header_id(section);
    Reveal::new(Selector::id(&header), PropertyValues::new().y(80.0).opacity(0.0), 1000).on_scroll(
        header,
        TriggerPosition::top_at(0.85),
        actions,
    )
}

// =============================================================================
// Hero
// =============================================================================

/// Page title block; plays on mount with no trigger
#[derive(Clone, Copy, Debug, Default)]
pub struct PortfolioHero;

impl Section for PortfolioHero {
    fn id(&self) -> &'static str {
        "portfolio-hero"
    }

    fn layout(&self, layout: &mut PageLayout<'_>) {
        let viewport = layout.viewport();
        let height = (viewport.height * 0.6).max(480.0);
        let top = layout.open(self.id());
        let heading = if layout.is_mobile() { 96.0 } else { 160.0 };
        let lines = [("label", 24.0), ("heading", heading), ("body", 64.0)];
        let content_height: f32 = lines.iter().map(|(_, h)| h).sum::<f32>() + 24.0 * 2.0;
        let area = layout.content(top + height - 64.0 - content_height, 0.0);
        layout.rows(
            area,
            24.0,
            lines.map(|(name, h)| {
                (
                    ElementSpec::new(ElementId::from(self.id()).child(name))
                        .parent(self.id())
                        .class(REVEAL_HERO_CLASS),
                    h,
                )
            }),
        );
        layout.close(self.id(), top + height);
    }

    fn animate(&self, engine: &mut dyn MotionEngine, _config: &SiteConfig) -> SectionScope {
        let mut scope = SectionScope::new(self.id());
        scope.adopt(engine.reveal(
            Reveal::new(
                Selector::class_in(self.id(), REVEAL_HERO_CLASS),
                PropertyValues::new().y(100.0).opacity(0.0),
                1200,
            )
            .stagger(150),
        ));
        scope
    }
}

// =============================================================================
// Photography
// =============================================================================

const PHOTO_PREFIX: &str = "photo";

/// Square photo grid, two to five columns
#[derive(Clone, Copy, Debug, Default)]
pub struct Photography;

impl Photography {
    pub fn item_id(index: usize) -> Option<ElementId> {
        PHOTOGRAPHY.get(index).map(|item| item_id(PHOTO_PREFIX, item))
    }

    /// Items in the same grid row start one after another
    fn item_reveal(index: usize, item: &ContentItem, actions: ToggleActions) -> Reveal {
        let id = item_id(PHOTO_PREFIX, item);
        Reveal::new(
            Selector::id(&id),
            PropertyValues::new().y(60.0).opacity(0.0).scale(0.95),
            800,
        )
        .delay((index % 5) as u32 * 100)
        .on_scroll(id, TriggerPosition::top_at(0.9), actions)
    }
}

impl Section for Photography {
    fn id(&self) -> &'static str {
        "photography"
    }

    fn layout(&self, layout: &mut PageLayout<'_>) {
        let top = layout.open(self.id());
        let area = layout_header(layout, self.id(), top);
        let columns = layout.columns(2, 3, 5);
        let side = cell_width(area.width, columns, 16.0);
        let bottom = layout.grid(
            area,
            columns,
            side,
            16.0,
            PHOTOGRAPHY.iter().map(|item| {
                ElementSpec::new(item_id(PHOTO_PREFIX, item))
                    .parent(self.id())
                    .class(GALLERY_ITEM_CLASS)
            }),
        );
        layout.close(self.id(), bottom + PADDING);
    }

    fn animate(&self, engine: &mut dyn MotionEngine, config: &SiteConfig) -> SectionScope {
        let mut scope = SectionScope::new(self.id());
        let actions = config.reveal.actions();
        scope.adopt(engine.reveal(header_reveal(self.id(), actions)));
        for (index, item) in PHOTOGRAPHY.iter().enumerate() {
            scope.adopt(engine.reveal(Self::item_reveal(index, item, actions)));
        }
        scope
    }

    fn on_click(&self, target: &ElementId) -> Option<Action> {
        item_at(PHOTO_PREFIX, &PHOTOGRAPHY, target).map(Action::OpenImage)
    }
}

// =============================================================================
// 3D art
// =============================================================================

const ART_PREFIX: &str = "art";

#[derive(Clone, Copy, Debug, Default)]
pub struct Art3d;

impl Section for Art3d {
    fn id(&self) -> &'static str {
        "art3d"
    }

    fn layout(&self, layout: &mut PageLayout<'_>) {
        let top = layout.open(self.id());
        let area = layout_header(layout, self.id(), top);
        let columns = layout.columns(1, 2, 3);
        let height = cell_width(area.width, columns, 32.0) * 3.0 / 4.0;
        let bottom = layout.grid(
            area,
            columns,
            height,
            32.0,
            ART_3D.iter().map(|item| {
                ElementSpec::new(item_id(ART_PREFIX, item))
                    .parent(self.id())
                    .class(ART_ITEM_CLASS)
            }),
        );
        layout.close(self.id(), bottom + PADDING);
    }

    fn animate(&self, engine: &mut dyn MotionEngine, config: &SiteConfig) -> SectionScope {
        let mut scope = SectionScope::new(self.id());
        let actions = config.reveal.actions();
        scope.adopt(engine.reveal(header_reveal(self.id(), actions)));
        for item in &ART_3D {
            let id = item_id(ART_PREFIX, item);
            scope.adopt(engine.reveal(
                Reveal::new(Selector::id(&id), PropertyValues::new().y(80.0).opacity(0.0), 1000).on_scroll(
                    id,
                    TriggerPosition::top_at(0.85),
                    actions,
                ),
            ));
        }
        scope
    }

    fn on_click(&self, target: &ElementId) -> Option<Action> {
        item_at(ART_PREFIX, &ART_3D, target).map(Action::OpenImage)
    }
}

// =============================================================================
// Cinematography
// =============================================================================

const VIDEO_PREFIX: &str = "video";

/// Films with an embedded player beside their details
#[derive(Clone, Copy, Debug, Default)]
pub struct Cinematography;

impl Cinematography {
    pub fn item_id(index: usize) -> Option<ElementId> {
        CINEMATOGRAPHY.get(index).map(|item| item_id(VIDEO_PREFIX, item))
    }

    /// Player embeds, paired with the element that hosts each one
    pub fn embeds(&self) -> Result<Vec<(ElementId, VideoEmbed)>> {
        let mut embeds = Vec::with_capacity(CINEMATOGRAPHY.len());
        for item in &CINEMATOGRAPHY {
            if let Some(embed) = embed_for(item)? {
                embeds.push((item_id(VIDEO_PREFIX, item).child("player"), embed));
            }
        }
        Ok(embeds)
    }
}

impl Section for Cinematography {
    fn id(&self) -> &'static str {
        "cinematography"
    }

    fn layout(&self, layout: &mut PageLayout<'_>) {
        let top = layout.open(self.id());
        let area = layout_header(layout, self.id(), top);
        let mobile = layout.is_mobile();
        // Player in the first third next to the details, stacked on mobile
        let player_width = if mobile { area.width - 48.0 } else { (area.width - 48.0 - 32.0) / 3.0 };
        let player_height = player_width * 9.0 / 16.0;
        let row_height = (if mobile { player_height + 200.0 } else { player_height }) + 48.0;

        let rows = CINEMATOGRAPHY.iter().map(|item| {
            (
                ElementSpec::new(item_id(VIDEO_PREFIX, item))
                    .parent(self.id())
                    .class(VIDEO_ITEM_CLASS),
                row_height,
            )
        });
        let bottom = layout.rows(area, 32.0, rows);

        for item in &CINEMATOGRAPHY {
            let row_id = item_id(VIDEO_PREFIX, item);
            if let Some(row) = layout.bounds(&row_id) {
                layout.place(
                    ElementSpec::new(row_id.child("player"))
                        .parent(&row_id)
                        .bounds(Rect::new(row.x + 24.0, row.top() + 24.0, player_width, player_height)),
                );
            }
        }
        layout.close(self.id(), bottom + PADDING);
    }

    fn animate(&self, engine: &mut dyn MotionEngine, config: &SiteConfig) -> SectionScope {
        let mut scope = SectionScope::new(self.id());
        let actions = config.reveal.actions();
        scope.adopt(engine.reveal(header_reveal(self.id(), actions)));
        for item in &CINEMATOGRAPHY {
            let id = item_id(VIDEO_PREFIX, item);
            scope.adopt(engine.reveal(
                Reveal::new(Selector::id(&id), PropertyValues::new().x(-60.0).opacity(0.0), 1000).on_scroll(
                    id,
                    TriggerPosition::top_at(0.85),
                    actions,
                ),
            ));
        }
        scope
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::{MemorySurface, Surface, Viewport};

    #[test]
    fn test_photo_rows_stagger_by_column() {
        let actions = ToggleActions::play_reverse();
        let delays: Vec<u32> = PHOTOGRAPHY
            .iter()
            .enumerate()
            .take(7)
            .map(|(i, item)| Photography::item_reveal(i, item, actions).delay_ms)
            .collect();
        assert_eq!(delays, vec![0, 100, 200, 300, 400, 0, 100]);
    }

    #[test]
    fn test_photo_grid_columns() {
        let mut surface = MemorySurface::new(Viewport::new(1440.0, 900.0));
        let mut layout = PageLayout::new(&mut surface);
        Photography.layout(&mut layout);
        layout.finish();

        let first = surface.bounds(&Photography::item_id(0).unwrap()).unwrap();
        let fifth = surface.bounds(&Photography::item_id(4).unwrap()).unwrap();
        let sixth = surface.bounds(&Photography::item_id(5).unwrap()).unwrap();
        assert_eq!(first.top(), fifth.top());
        assert!(sixth.top() > first.bottom());
        assert_eq!(first.width, first.height);
    }

    #[test]
    fn test_lightbox_targets() {
        let photo = Photography::item_id(2).unwrap();
        assert_eq!(Photography.on_click(&photo), Some(Action::OpenImage(PHOTOGRAPHY[2])));
        assert_eq!(Photography.on_click(&"photography-header".into()), None);
        assert_eq!(Art3d.on_click(&photo), None);
        assert_eq!(Cinematography.on_click(&Cinematography::item_id(0).unwrap()), None);
    }

    #[test]
    fn test_every_film_has_a_player() {
        let embeds = Cinematography.embeds().unwrap();
        assert_eq!(embeds.len(), CINEMATOGRAPHY.len());

        let mut surface = MemorySurface::new(Viewport::new(1440.0, 900.0));
        let mut layout = PageLayout::new(&mut surface);
        Cinematography.layout(&mut layout);
        layout.finish();
        for (host, embed) in &embeds {
            assert!(surface.contains(host));
            assert!(embed.src.as_str().starts_with("https://player.vimeo.com/video/"));
        }
    }
}
