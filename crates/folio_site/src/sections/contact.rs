//! Contact call to action and the page footer

use folio_core::{ElementId, ElementSpec, PropertyValues, Rect, Selector};
use folio_scroll::TriggerPosition;

use super::{Action, Section};
use crate::config::SiteConfig;
use crate::content::{CONTACT_CTA, SOCIALS};
use crate::engine::{MotionEngine, Reveal};
use crate::layout::{PageLayout, SECTION_PADDING};
use crate::scope::SectionScope;

pub const CONTACT_CONTENT: &str = "contact-content";
pub const CONTACT_BUTTON: &str = "contact-cta";
pub const ANIMATE_ITEM_CLASS: &str = "animate-item";
pub const MAGNETIC_CLASS: &str = "magnetic-btn";
pub const SOCIAL_LINK_CLASS: &str = "social-link";

const CONTENT_MAX_WIDTH: f32 = 896.0;

#[derive(Clone, Copy, Debug, Default)]
pub struct Contact;

impl Contact {
    pub fn social_id(index: usize) -> ElementId {
        ElementId::from(CONTACT_CONTENT).child(format!("social-{index}"))
    }
}

impl Section for Contact {
    fn id(&self) -> &'static str {
        "contact"
    }

    fn layout(&self, layout: &mut PageLayout<'_>) {
        let top = layout.open(self.id());
        let column = layout.content(top + SECTION_PADDING, 0.0);
        let width = column.width.min(CONTENT_MAX_WIDTH);
        let area = Rect::new(column.x + (column.width - width) / 2.0, column.top(), width, 0.0);
        let heading = if layout.is_mobile() { 120.0 } else { 260.0 };

        layout.place(ElementSpec::new(CONTACT_CONTENT).parent(self.id()));
        let item = |name: &str| {
            ElementSpec::new(ElementId::from(CONTACT_CONTENT).child(name))
                .parent(CONTACT_CONTENT)
                .class(ANIMATE_ITEM_CLASS)
        };
        let bottom = layout.rows(
            area,
            32.0,
            [
                (item("label"), 24.0),
                (item("heading"), heading),
                (item("body"), 84.0),
                (item("cta-row"), 72.0),
                (item("divider"), 1.0),
                (item("socials"), 40.0),
            ],
        );

        // The button and the links sit inside their rows
        let cta_row = ElementId::from(CONTACT_CONTENT).child("cta-row");
        if let Some(row) = layout.bounds(&cta_row) {
            layout.place(
                ElementSpec::new(CONTACT_BUTTON)
                    .parent(&cta_row)
                    .class(MAGNETIC_CLASS)
                    .bounds(Rect::new(row.x + row.width / 2.0 - 160.0, row.top(), 320.0, row.height)),
            );
        }
        let socials = ElementId::from(CONTACT_CONTENT).child("socials");
        if let Some(row) = layout.bounds(&socials) {
            let link_width = 140.0;
            let left = row.x + (row.width - link_width * SOCIALS.len() as f32) / 2.0;
            for i in 0..SOCIALS.len() {
                layout.place(
                    ElementSpec::new(Self::social_id(i))
                        .parent(&socials)
                        .class(SOCIAL_LINK_CLASS)
                        .bounds(Rect::new(left + i as f32 * link_width, row.top(), link_width, row.height)),
                );
            }
        }
        layout.place(
            ElementSpec::new(CONTACT_CONTENT)
                .parent(self.id())
                .bounds(Rect::new(area.x, area.top(), area.width, bottom - area.top())),
        );
        layout.close(self.id(), bottom + SECTION_PADDING);
    }

    fn animate(&self, engine: &mut dyn MotionEngine, config: &SiteConfig) -> SectionScope {
        let mut scope = SectionScope::new(self.id());
        scope.adopt(
            engine.reveal(
                Reveal::new(
                    Selector::class_in(CONTACT_CONTENT, ANIMATE_ITEM_CLASS),
                    PropertyValues::new().y(60.0).opacity(0.0),
                    800,
                )
                .stagger(120)
                .on_scroll(CONTACT_CONTENT, TriggerPosition::top_at(0.7), config.reveal.actions()),
            ),
        );
        scope
    }

    fn on_click(&self, target: &ElementId) -> Option<Action> {
        if target.as_str() == CONTACT_BUTTON {
            return Some(Action::External(CONTACT_CTA));
        }
        (0..SOCIALS.len())
            .find(|i| Self::social_id(*i) == *target)
            .map(|i| Action::External(SOCIALS[i].url))
    }
}

/// Brand line and legal links; static
#[derive(Clone, Copy, Debug, Default)]
pub struct Footer;

impl Section for Footer {
    fn id(&self) -> &'static str {
        "footer"
    }

    fn layout(&self, layout: &mut PageLayout<'_>) {
        let height = if layout.is_mobile() { 160.0 } else { 96.0 };
        layout.section(self.id(), height);
    }

    fn animate(&self, _engine: &mut dyn MotionEngine, _config: &SiteConfig) -> SectionScope {
        SectionScope::new(self.id())
    }
}
