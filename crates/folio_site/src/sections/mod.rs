//! Page sections
//!
//! A section lays its elements out on the surface, registers its motion
//! with a [`MotionEngine`] when mounted, and maps clicks on its elements to
//! [`Action`]s. Everything it registers lives in the returned
//! [`SectionScope`], so dropping the scope unmounts the section.

mod about;
mod contact;
mod featured;
mod gallery;
mod hero;
mod services;

pub use about::About;
pub use contact::{Contact, Footer};
pub use featured::Featured;
pub use gallery::{Art3d, Cinematography, Photography, PortfolioHero};
pub use hero::Hero;
pub use services::Services;

use folio_core::ElementId;

use crate::config::SiteConfig;
use crate::content::ContentItem;
use crate::engine::MotionEngine;
use crate::layout::PageLayout;
use crate::scope::SectionScope;

/// What a click asks the page to do
#[derive(Clone, Debug, PartialEq)]
pub enum Action {
    /// Show a featured project in the detail modal
    OpenProject(ContentItem),
    /// Show an image in the lightbox
    OpenImage(ContentItem),
    /// Scroll the page to a section
    ScrollTo(ElementId),
    /// Switch to another route
    Navigate(&'static str),
    /// Leave the site for an external link
    External(&'static str),
}

pub trait Section {
    /// Id of the section's root element, also its scroll anchor
    fn id(&self) -> &'static str;

    /// Place the section's elements at the layout cursor
    fn layout(&self, layout: &mut PageLayout<'_>);

    /// Register the section's motion
    fn animate(&self, engine: &mut dyn MotionEngine, config: &SiteConfig) -> SectionScope;

    /// Handle a click on `target`, one of this section's elements
    fn on_click(&self, _target: &ElementId) -> Option<Action> {
        None
    }
}

/// Element id of a content item card, `"{prefix}-{key}"`
pub(crate) fn item_id(prefix: &str, item: &ContentItem) -> ElementId {
    ElementId::new(format!("{prefix}-{}", item.key))
}

/// The item whose card (or a child of it) is `target`
pub(crate) fn item_at(prefix: &str, items: &[ContentItem], target: &ElementId) -> Option<ContentItem> {
    let rest = target.as_str().strip_prefix(prefix)?.strip_prefix('-')?;
    let key = rest.split('/').next().unwrap_or(rest);
    crate::content::find(items, key).copied()
}
