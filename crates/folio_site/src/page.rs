//! A mounted page: its sections, navigation, cursor and overlay
//!
//! Mounting lays the sections out on the stage, registers their motion and
//! keeps the resulting scopes. Unmounting drops the scopes, which kills
//! every trigger and timeline the page created.
//!
//! Clicks arrive in viewport coordinates and are routed topmost-first:
//! while the overlay is visible it swallows every click; otherwise the
//! navigation gets the first look, then the section that owns the element.

use folio_core::{ElementId, ElementSpec, MemorySurface, Rect, Surface, Viewport};
use folio_overlay::{CloseReason, Lightbox, ModalController, OverlayState, ProjectDetail, REVEAL_ITEM_CLASS};

use crate::content::ContentItem;
use crate::cursor::Cursor;
use crate::engine::MotionEngine;
use crate::layout::{grid_cells, PageLayout, GUTTER};
use crate::nav::{NavClick, NavVariant, Navigation, BUTTON_CLASS};
use crate::router::Route;
use crate::scope::SectionScope;
use crate::sections::{
    About, Action, Art3d, Cinematography, Contact, Featured, Footer, Hero, Photography, PortfolioHero,
    Section, Services,
};
use crate::stage::Stage;

pub const MODAL_OVERLAY: &str = "modal-overlay";
pub const MODAL_CONTENT: &str = "modal-content";
pub const MODAL_IMAGE: &str = "modal-image";
pub const MODAL_CLOSE: &str = "modal-close";
pub const LIGHTBOX: &str = "lightbox";

/// Which overlay a page presents items in
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Overlay {
    /// Featured project detail with staggered rows
    ProjectDetail,
    /// Full-screen gallery image
    Lightbox,
}

impl Overlay {
    pub fn root(self) -> ElementId {
        match self {
            Overlay::ProjectDetail => MODAL_OVERLAY.into(),
            Overlay::Lightbox => LIGHTBOX.into(),
        }
    }

    pub fn close_button(self) -> ElementId {
        match self {
            Overlay::ProjectDetail => MODAL_CLOSE.into(),
            Overlay::Lightbox => ElementId::from(LIGHTBOX).child("close"),
        }
    }

    /// The part of the overlay a click does not dismiss
    pub fn panel(self) -> ElementId {
        match self {
            Overlay::ProjectDetail => MODAL_CONTENT.into(),
            Overlay::Lightbox => ElementId::from(LIGHTBOX).child("image"),
        }
    }

    /// Put the overlay's elements for `item` over the visible part of the page
    ///
    /// Existing elements keep their style, so this can re-place a visible
    /// overlay after a resize.
    fn place(self, item: &ContentItem, surface: &mut MemorySurface) {
        let viewport = surface.viewport();
        let top = surface.scroll_y();
        let screen = Rect::new(0.0, top, viewport.width, viewport.height);
        let close = Rect::new(viewport.width - GUTTER - 48.0, top + GUTTER, 48.0, 48.0);

        match self {
            Overlay::ProjectDetail => {
                surface.insert(ElementSpec::new(MODAL_OVERLAY).bounds(screen));
                surface.insert(ElementSpec::new(MODAL_CLOSE).parent(MODAL_OVERLAY).class(BUTTON_CLASS).bounds(close));

                let width = (viewport.width - GUTTER * 2.0).min(1200.0);
                let content = Rect::new((viewport.width - width) / 2.0, top + 96.0, width, viewport.height - 192.0);
                surface.insert(ElementSpec::new(MODAL_CONTENT).parent(MODAL_OVERLAY).bounds(content));

                let columns = if viewport.is_mobile() { 1 } else { 2 };
                let cells = grid_cells(content, columns, content.height / columns as f32, 48.0, 2);
                let (image, text) = (cells[0], cells[1]);
                surface.insert(ElementSpec::new(MODAL_IMAGE).parent(MODAL_CONTENT).bounds(image));

                let rows = detail_rows(item);
                let mut y = text.top();
                for (name, height) in rows {
                    surface.insert(
                        ElementSpec::new(ElementId::from(MODAL_CONTENT).child(name))
                            .parent(MODAL_CONTENT)
                            .class(REVEAL_ITEM_CLASS)
                            .bounds(Rect::new(text.x, y, text.width, height)),
                    );
                    y += height + 24.0;
                }
            }
            Overlay::Lightbox => {
                let root = ElementId::from(LIGHTBOX);
                surface.insert(ElementSpec::new(&root).bounds(screen));
                surface.insert(ElementSpec::new(self.close_button()).parent(&root).class(BUTTON_CLASS).bounds(close));
                let image = Rect::new(
                    viewport.width * 0.1,
                    top + viewport.height * 0.1,
                    viewport.width * 0.8,
                    viewport.height * 0.8,
                );
                surface.insert(ElementSpec::new(self.panel()).parent(&root).bounds(image));
            }
        }
    }
}

/// Detail rows shown for a project, with their heights
fn detail_rows(item: &ContentItem) -> Vec<(&'static str, f32)> {
    let mut rows = vec![("category", 24.0), ("title", 72.0)];
    if !item.description.is_empty() {
        rows.push(("description", 160.0));
    }
    if item.year.is_some() {
        rows.push(("year", 24.0));
    }
    rows
}

pub struct Page {
    route: Route,
    sections: Vec<Box<dyn Section>>,
    scopes: Vec<SectionScope>,
    nav: Navigation,
    cursor: Option<Cursor>,
    overlay: Overlay,
    modal: ModalController<ContentItem>,
}

impl Page {
    /// Lay out and animate `route` on a freshly reset stage
    pub fn mount(route: Route, stage: &mut Stage) -> Self {
        let handle = stage.scheduler().handle();
        let lock = stage.scroll_lock().clone();
        let (sections, variant, overlay, modal) = match route {
            Route::Landing => (
                vec![
                    Box::new(Hero) as Box<dyn Section>,
                    Box::new(Featured),
                    Box::new(About),
                    Box::new(Services),
                    Box::new(Contact),
                    Box::new(Footer),
                ],
                NavVariant::Landing,
                Overlay::ProjectDetail,
                ModalController::new(
                    handle,
                    lock,
                    ProjectDetail::new(MODAL_OVERLAY, MODAL_CONTENT, MODAL_IMAGE)
                        .row_stagger(stage.config().modal.row_stagger_ms),
                ),
            ),
            Route::Portfolio => (
                vec![
                    Box::new(PortfolioHero) as Box<dyn Section>,
                    Box::new(Photography),
                    Box::new(Art3d),
                    Box::new(Cinematography),
                    Box::new(Footer),
                ],
                NavVariant::Portfolio,
                Overlay::Lightbox,
                ModalController::new(handle, lock, Lightbox::new(LIGHTBOX)),
            ),
        };

        let mut page = Self {
            route,
            sections,
            scopes: Vec::new(),
            nav: Navigation::new(variant),
            cursor: None,
            overlay,
            modal,
        };

        // The gallery always opens at the top
        if route == Route::Portfolio {
            stage.jump_to(0.0);
        }
        page.layout(stage);

        let config = stage.config().clone();
        page.scopes = page
            .sections
            .iter()
            .map(|section| section.animate(&mut *stage, &config))
            .collect();
        page.nav
            .mount(stage.events(), config.navigation.scrolled_threshold, stage.scroll_y());
        page.cursor = Cursor::mount(stage);

        tracing::debug!(
            "Page {:?}: mounted {} sections ({} motions)",
            route,
            page.sections.len(),
            page.motion_count()
        );
        page
    }

    /// Release everything the page registered and take its overlay down
    pub fn unmount(mut self, stage: &mut Stage) {
        self.modal.force_teardown();
        stage.surface_mut().remove_subtree(&self.overlay.root());
        self.scopes.clear();
        self.nav.unmount();
        if let Some(cursor) = self.cursor.take() {
            cursor.unmount(stage);
        }
        tracing::debug!("Page {:?}: unmounted", self.route);
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn route(&self) -> Route {
        self.route
    }

    pub fn nav(&self) -> &Navigation {
        &self.nav
    }

    pub fn cursor(&self) -> Option<&Cursor> {
        self.cursor.as_ref()
    }

    pub fn overlay(&self) -> Overlay {
        self.overlay
    }

    pub fn overlay_state(&self) -> OverlayState {
        self.modal.state()
    }

    /// The item shown in the overlay, if any
    pub fn presented(&self) -> Option<&ContentItem> {
        self.modal.item()
    }

    pub fn section_ids(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.sections.iter().map(|section| section.id())
    }

    /// Live motions across every section scope
    pub fn motion_count(&self) -> usize {
        self.scopes.iter().map(SectionScope::motion_count).sum()
    }

    // =========================================================================
    // Layout
    // =========================================================================

    fn layout(&mut self, stage: &mut Stage) {
        let mut layout = PageLayout::new(stage.surface_mut());
        for section in &self.sections {
            section.layout(&mut layout);
        }
        let height = layout.finish();
        tracing::debug!("Page {:?}: laid out, document height {}", self.route, height);

        self.nav.layout(stage.surface_mut());
        if let Some(item) = self.modal.item() {
            self.overlay.place(item, stage.surface_mut());
        }
        stage.refresh_triggers();
    }

    /// Resize the viewport and lay everything out again
    pub fn resize(&mut self, stage: &mut Stage, viewport: Viewport) {
        stage.resize(viewport);
        self.layout(stage);

        // The cursor only exists on desktop-sized viewports
        if viewport.is_mobile() {
            if let Some(cursor) = self.cursor.take() {
                cursor.unmount(stage);
            }
        } else if self.cursor.is_none() {
            self.cursor = Cursor::mount(stage);
        }
    }

    // =========================================================================
    // Frame and input
    // =========================================================================

    /// Advance one frame; returns true while anything is still moving
    pub fn frame(&mut self, stage: &mut Stage, dt_ms: f32) -> bool {
        if let Some(cursor) = &mut self.cursor {
            cursor.update(stage);
        }
        let moving = stage.frame(dt_ms);
        if self.modal.update() == Some(OverlayState::Closed) {
            stage.surface_mut().remove_subtree(&self.overlay.root());
        }
        self.nav.pin(stage.surface_mut());
        moving || self.modal.state().is_animating()
    }

    /// User scroll; returns whether it was applied
    pub fn scroll_by(&mut self, stage: &mut Stage, dy: f32) -> bool {
        let applied = stage.scroll_by(dy);
        if applied {
            self.nav.pin(stage.surface_mut());
        }
        applied
    }

    /// Click at viewport coordinates `(x, y)`
    ///
    /// Returns the actions the page cannot carry out itself: route changes
    /// and external links.
    pub fn click(&mut self, stage: &mut Stage, x: f32, y: f32) -> Option<Action> {
        let hits = stage.hit_test(x, y);

        if self.modal.is_visible() {
            let reason = if hits.contains(&self.overlay.close_button()) {
                Some(CloseReason::Button)
            } else if hits.contains(&self.overlay.panel()) {
                None
            } else {
                Some(CloseReason::Backdrop)
            };
            if let Some(reason) = reason {
                self.close(stage, reason);
            }
            return None;
        }

        for id in hits.iter().rev() {
            if let Some(click) = self.nav.on_click(id, stage) {
                return match click {
                    NavClick::Handled => None,
                    NavClick::Action(action) => self.perform(action, stage),
                };
            }
            if let Some(action) = self.sections.iter().find_map(|section| section.on_click(id)) {
                return self.perform(action, stage);
            }
        }
        None
    }

    /// Escape closes the overlay, or the mobile menu when no overlay is up
    pub fn escape(&mut self, stage: &mut Stage) {
        if self.modal.is_visible() {
            self.close(stage, CloseReason::Escape);
        } else if self.nav.is_menu_open() {
            self.nav.close_menu(stage.surface_mut());
        }
    }

    /// Present `item` in the page's overlay, replacing anything shown
    pub fn present(&mut self, stage: &mut Stage, item: ContentItem) {
        let surface = stage.surface_mut();
        surface.remove_subtree(&self.overlay.root());
        self.overlay.place(&item, surface);
        self.modal.open(item, stage.surface());
        stage.render_pending();
    }

    pub fn close(&mut self, stage: &mut Stage, reason: CloseReason) {
        self.modal.close(reason, stage.surface());
    }

    /// Scroll to a section by id
    ///
    /// False if it is not on this page or an overlay holds the scroll lock.
    pub fn scroll_to(&mut self, stage: &mut Stage, section: &ElementId) -> bool {
        self.nav.close_menu(stage.surface_mut());
        let started = stage.scroll_to(section);
        if !started && !stage.is_scroll_locked() {
            tracing::warn!("Page {:?}: no section {:?} to scroll to", self.route, section);
        }
        started
    }

    fn perform(&mut self, action: Action, stage: &mut Stage) -> Option<Action> {
        match action {
            Action::OpenProject(item) | Action::OpenImage(item) => {
                self.present(stage, item);
                None
            }
            Action::ScrollTo(section) => {
                self.scroll_to(stage, &section);
                None
            }
            Action::Navigate(_) | Action::External(_) => Some(action),
        }
    }
}

impl std::fmt::Debug for Page {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Page")
            .field("route", &self.route)
            .field("sections", &self.section_ids().collect::<Vec<_>>())
            .field("motions", &self.motion_count())
            .field("overlay", &self.modal.state())
            .field("nav", &self.nav)
            .finish()
    }
}
