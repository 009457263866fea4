//! Navigation bar and mobile menu
//!
//! The bar is pinned to the top of the viewport. Pinned elements keep their
//! viewport-space rects here and are moved to the current scroll offset by
//! [`Navigation::pin`] whenever the page scrolls.
//!
//! The "scrolled" look is driven by a scroll subscription: the callback only
//! flips an atomic flag, which the page reads when it renders the bar.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use folio_animation::Easing;
use folio_core::{
    ElementId, ElementSpec, EventBus, MemorySurface, PropertyValues, Rect, Selector, Subscription, Surface,
    Viewport, ViewportEvent,
};

use crate::content::{NavTarget, BRAND, NAV_ITEMS};
use crate::engine::{Motion, MotionEngine, Reveal};
use crate::layout::GUTTER;
use crate::sections::Action;
use crate::stage::Stage;

pub const NAV: &str = "nav";
pub const NAV_BRAND: &str = "nav-brand";
pub const MENU_TOGGLE: &str = "nav-menu-toggle";
pub const MOBILE_MENU: &str = "mobile-menu";
pub const NAV_LINK_CLASS: &str = "nav-link";
pub const MOBILE_LINK_CLASS: &str = "mobile-nav-link";
pub const BUTTON_CLASS: &str = "button";

const BAR_HEIGHT: f32 = 88.0;

/// Which bar a page shows
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavVariant {
    /// Brand scrolls home, section links, mobile menu
    Landing,
    /// Brand links back to the landing page
    Portfolio,
}

pub struct Navigation {
    variant: NavVariant,
    /// Viewport-space rects of the bar
    bar: Vec<(ElementSpec, Rect)>,
    /// Viewport-space rects of the open mobile menu
    menu: Vec<(ElementSpec, Rect)>,
    scrolled: Arc<AtomicBool>,
    menu_open: bool,
    subscription: Option<Subscription>,
    menu_motion: Option<Motion>,
}

impl Navigation {
    pub fn new(variant: NavVariant) -> Self {
        Self {
            variant,
            bar: Vec::new(),
            menu: Vec::new(),
            scrolled: Arc::new(AtomicBool::new(false)),
            menu_open: false,
            subscription: None,
            menu_motion: None,
        }
    }

    pub fn variant(&self) -> NavVariant {
        self.variant
    }

    pub fn link_id(index: usize) -> ElementId {
        ElementId::new(format!("nav-link-{index}"))
    }

    pub fn mobile_link_id(index: usize) -> ElementId {
        ElementId::from(MOBILE_MENU).child(format!("link-{index}"))
    }

    pub fn brand(&self) -> &'static str {
        BRAND
    }

    pub fn is_scrolled(&self) -> bool {
        self.scrolled.load(Ordering::Relaxed)
    }

    pub fn is_menu_open(&self) -> bool {
        self.menu_open
    }

    pub fn is_mounted(&self) -> bool {
        self.subscription.as_ref().is_some_and(Subscription::is_active)
    }

    // =========================================================================
    // Layout
    // =========================================================================

    /// Compute the bar for `viewport` and put it on the surface
    pub fn layout(&mut self, surface: &mut MemorySurface) {
        let viewport = surface.viewport();
        self.bar = bar_elements(self.variant, viewport);
        self.menu = menu_elements(viewport);
        if viewport.is_mobile() {
            // Desktop links are not rendered below the breakpoint
            for i in 0..NAV_ITEMS.len() {
                surface.remove_subtree(&Self::link_id(i));
            }
        } else {
            surface.remove_subtree(&MENU_TOGGLE.into());
            if self.menu_open {
                self.close_menu(surface);
            }
        }
        self.pin(surface);
    }

    /// Move the pinned elements to the current scroll offset
    pub fn pin(&self, surface: &mut MemorySurface) {
        let scroll_y = surface.scroll_y();
        let menu: &[(ElementSpec, Rect)] = if self.menu_open { &self.menu } else { &[] };
        for (spec, rect) in self.bar.iter().chain(menu) {
            let pinned = Rect::new(rect.x, rect.y + scroll_y, rect.width, rect.height);
            if !surface.set_bounds(spec.id(), pinned) {
                surface.insert(spec.clone().bounds(pinned));
            }
        }
    }

    // =========================================================================
    // Lifecycle
    // =========================================================================

    /// Start tracking the scroll offset for the "scrolled" look
    pub fn mount(&mut self, events: &EventBus, threshold: f32, scroll_y: f32) {
        self.scrolled.store(scroll_y > threshold, Ordering::Relaxed);
        let scrolled = Arc::clone(&self.scrolled);
        self.subscription = Some(events.subscribe(move |event| {
            if let ViewportEvent::Scroll { y } = event {
                scrolled.store(*y > threshold, Ordering::Relaxed);
            }
        }));
        tracing::debug!("Navigation: mounted ({:?})", self.variant);
    }

    pub fn unmount(&mut self) {
        self.subscription = None;
        self.menu_motion = None;
        self.menu_open = false;
        tracing::debug!("Navigation: unmounted");
    }

    // =========================================================================
    // Mobile menu
    // =========================================================================

    /// Open or close the mobile menu; returns whether it is now open
    ///
    /// Opening inserts the menu and staggers its links in.
    pub fn toggle_menu(&mut self, stage: &mut Stage) -> bool {
        if self.variant != NavVariant::Landing {
            return false;
        }
        if self.menu_open {
            self.close_menu(stage.surface_mut());
            return false;
        }
        self.menu_open = true;
        self.pin(stage.surface_mut());
        self.menu_motion = stage.reveal(
            Reveal::new(
                Selector::class_in(MOBILE_MENU, MOBILE_LINK_CLASS),
                PropertyValues::new().y(50.0).opacity(0.0),
                600,
            )
            .stagger(100)
            .easing(Easing::Power3Out),
        );
        tracing::debug!("Navigation: menu opened");
        true
    }

    pub fn close_menu(&mut self, surface: &mut MemorySurface) {
        if !self.menu_open {
            return;
        }
        self.menu_open = false;
        self.menu_motion = None;
        surface.remove_subtree(&MOBILE_MENU.into());
        tracing::debug!("Navigation: menu closed");
    }

    /// Choose nav item `index`; the menu closes either way
    pub fn select(&mut self, index: usize, surface: &mut MemorySurface) -> Option<Action> {
        self.close_menu(surface);
        let item = NAV_ITEMS.get(index)?;
        Some(match item.target {
            NavTarget::Section(section) => Action::ScrollTo(section.into()),
            NavTarget::Route(path) => Action::Navigate(path),
        })
    }

    /// Brand button: home section on the landing page, the landing page elsewhere
    pub fn brand_action(&mut self, surface: &mut MemorySurface) -> Action {
        self.close_menu(surface);
        match self.variant {
            NavVariant::Landing => Action::ScrollTo("hero".into()),
            NavVariant::Portfolio => Action::Navigate("/"),
        }
    }

    /// Handle a click on one of the bar's elements
    ///
    /// Returns `None` when `target` is not part of the navigation.
    pub fn on_click(&mut self, target: &ElementId, stage: &mut Stage) -> Option<NavClick> {
        if target.as_str() == NAV_BRAND {
            return Some(NavClick::Action(self.brand_action(stage.surface_mut())));
        }
        if target.as_str() == MENU_TOGGLE {
            self.toggle_menu(stage);
            return Some(NavClick::Handled);
        }
        let index = (0..NAV_ITEMS.len()).find(|i| Self::link_id(*i) == *target || Self::mobile_link_id(*i) == *target);
        if let Some(index) = index {
            return Some(match self.select(index, stage.surface_mut()) {
                Some(action) => NavClick::Action(action),
                None => NavClick::Handled,
            });
        }
        if target.as_str() == NAV || target.as_str() == MOBILE_MENU {
            return Some(NavClick::Handled);
        }
        None
    }
}

/// Result of a click that landed on the navigation
#[derive(Clone, Debug, PartialEq)]
pub enum NavClick {
    /// Consumed by the navigation itself
    Handled,
    /// The page should carry this out
    Action(Action),
}

impl Drop for Navigation {
    fn drop(&mut self) {
        if self.subscription.is_some() {
            self.unmount();
        }
    }
}

impl std::fmt::Debug for Navigation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Navigation")
            .field("variant", &self.variant)
            .field("scrolled", &self.is_scrolled())
            .field("menu_open", &self.menu_open)
            .field("mounted", &self.is_mounted())
            .finish()
    }
}

fn bar_elements(variant: NavVariant, viewport: Viewport) -> Vec<(ElementSpec, Rect)> {
    let width = viewport.width;
    let mut elements = vec![
        (ElementSpec::new(NAV), Rect::new(0.0, 0.0, width, BAR_HEIGHT)),
        (
            ElementSpec::new(NAV_BRAND).parent(NAV).class(BUTTON_CLASS),
            Rect::new(GUTTER, 24.0, 240.0, 40.0),
        ),
    ];
    if variant == NavVariant::Portfolio {
        return elements;
    }

    if viewport.is_mobile() {
        elements.push((
            ElementSpec::new(MENU_TOGGLE).parent(NAV).class(BUTTON_CLASS),
            Rect::new(width - GUTTER - 40.0, 24.0, 40.0, 40.0),
        ));
    } else {
        let link_width = 96.0;
        let gap = 48.0;
        let total = NAV_ITEMS.len() as f32 * link_width + (NAV_ITEMS.len() - 1) as f32 * gap;
        let left = width - GUTTER - total;
        for i in 0..NAV_ITEMS.len() {
            elements.push((
                ElementSpec::new(Navigation::link_id(i)).parent(NAV).class(NAV_LINK_CLASS),
                Rect::new(left + i as f32 * (link_width + gap), 28.0, link_width, 32.0),
            ));
        }
    }
    elements
}

fn menu_elements(viewport: Viewport) -> Vec<(ElementSpec, Rect)> {
    let link_height = 56.0;
    let gap = 32.0;
    let total = NAV_ITEMS.len() as f32 * link_height + (NAV_ITEMS.len() - 1) as f32 * gap;
    let top = (viewport.height - total) / 2.0;

    let mut elements = vec![(
        ElementSpec::new(MOBILE_MENU),
        Rect::new(0.0, 0.0, viewport.width, viewport.height),
    )];
    for i in 0..NAV_ITEMS.len() {
        elements.push((
            ElementSpec::new(Navigation::mobile_link_id(i))
                .parent(MOBILE_MENU)
                .class(MOBILE_LINK_CLASS)
                .class(NAV_LINK_CLASS),
            Rect::new(GUTTER, top + i as f32 * (link_height + gap), viewport.width - GUTTER * 2.0, link_height),
        ));
    }
    elements
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteConfig;
    use folio_core::Property;

    fn stage(viewport: Viewport) -> Stage {
        let mut stage = Stage::new(SiteConfig::default(), viewport);
        stage
            .surface_mut()
            .insert(ElementSpec::new("hero").bounds(Rect::new(0.0, 0.0, viewport.width, 3000.0)));
        stage
    }

    #[test]
    fn test_scrolled_follows_scroll_events() {
        let events = EventBus::new();
        let mut nav = Navigation::new(NavVariant::Landing);
        nav.mount(&events, 100.0, 0.0);
        assert!(!nav.is_scrolled());

        events.emit(&ViewportEvent::Scroll { y: 101.0 });
        assert!(nav.is_scrolled());
        events.emit(&ViewportEvent::Scroll { y: 100.0 });
        assert!(!nav.is_scrolled());

        nav.unmount();
        assert_eq!(events.subscriber_count(), 0);
        events.emit(&ViewportEvent::Scroll { y: 500.0 });
        assert!(!nav.is_scrolled());
    }

    #[test]
    fn test_bar_stays_pinned() {
        let mut stage = stage(Viewport::new(1440.0, 900.0));
        let mut nav = Navigation::new(NavVariant::Landing);
        nav.layout(stage.surface_mut());
        assert!(stage.surface().contains(&Navigation::link_id(4)));
        assert!(!stage.surface().contains(&MENU_TOGGLE.into()));

        stage.jump_to(1200.0);
        nav.pin(stage.surface_mut());
        assert_eq!(stage.surface().bounds(&NAV.into()).map(|r| r.top()), Some(1200.0));
        assert_eq!(stage.hit_test(50.0, 40.0).last(), Some(&ElementId::from(NAV_BRAND)));
    }

    #[test]
    fn test_mobile_menu_select_closes() {
        let mut stage = stage(Viewport::new(390.0, 844.0));
        let mut nav = Navigation::new(NavVariant::Landing);
        nav.layout(stage.surface_mut());
        assert!(stage.surface().contains(&MENU_TOGGLE.into()));
        assert!(!stage.surface().contains(&Navigation::link_id(0)));

        let click = nav.on_click(&MENU_TOGGLE.into(), &mut stage);
        assert_eq!(click, Some(NavClick::Handled));
        assert!(nav.is_menu_open());
        let link = Navigation::mobile_link_id(2);
        assert_eq!(stage.surface().style_value(&link, Property::Opacity), Some(0.0));
        for _ in 0..100 {
            stage.frame(16.0);
        }
        assert_eq!(stage.surface().style_value(&link, Property::Opacity), Some(1.0));

        let click = nav.on_click(&link, &mut stage);
        assert_eq!(click, Some(NavClick::Action(Action::ScrollTo("about".into()))));
        assert!(!nav.is_menu_open());
        assert!(!stage.surface().contains(&MOBILE_MENU.into()));
    }

    #[test]
    fn test_targets() {
        let mut stage = stage(Viewport::default());
        let mut landing = Navigation::new(NavVariant::Landing);
        assert_eq!(landing.select(1, stage.surface_mut()), Some(Action::Navigate("/portfolio")));
        assert_eq!(landing.select(9, stage.surface_mut()), None);
        assert_eq!(landing.brand_action(stage.surface_mut()), Action::ScrollTo("hero".into()));

        let mut portfolio = Navigation::new(NavVariant::Portfolio);
        assert_eq!(portfolio.brand_action(stage.surface_mut()), Action::Navigate("/"));
        assert!(!portfolio.toggle_menu(&mut stage));
        assert_eq!(portfolio.on_click(&"hero".into(), &mut stage), None);
    }
}
