//! Routes and the router that swaps pages on one stage
//!
//! Navigating unmounts the current page, resets the stage and mounts the
//! next one, so no trigger, timeline or subscription survives a route change.

use std::fmt;
use std::str::FromStr;

use folio_core::{ElementId, FolioError, Viewport};
use folio_overlay::CloseReason;

use crate::config::SiteConfig;
use crate::content::ContentItem;
use crate::error::Result;
use crate::page::Page;
use crate::sections::Action;
use crate::stage::Stage;

/// An addressable view
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Route {
    /// `/`: hero, featured work, about, services, contact
    #[default]
    Landing,
    /// `/portfolio`: the full gallery
    Portfolio,
}

impl Route {
    pub fn path(self) -> &'static str {
        match self {
            Route::Landing => "/",
            Route::Portfolio => "/portfolio",
        }
    }
}

impl FromStr for Route {
    type Err = FolioError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim() {
            "/" | "" => Ok(Route::Landing),
            "/portfolio" | "/portfolio/" => Ok(Route::Portfolio),
            other => Err(FolioError::UnknownRoute(other.to_string())),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// Owns the stage and whichever page is mounted on it
pub struct Router {
    stage: Stage,
    page: Option<Page>,
}

impl Router {
    /// Mount the landing page
    pub fn new(config: SiteConfig, viewport: Viewport) -> Self {
        Self::with_route(config, viewport, Route::Landing)
    }

    pub fn with_route(config: SiteConfig, viewport: Viewport, route: Route) -> Self {
        let mut stage = Stage::new(config, viewport);
        let page = Page::mount(route, &mut stage);
        Self {
            stage,
            page: Some(page),
        }
    }

    pub fn stage(&self) -> &Stage {
        &self.stage
    }

    pub fn page(&self) -> Option<&Page> {
        self.page.as_ref()
    }

    pub fn route(&self) -> Option<Route> {
        self.page.as_ref().map(Page::route)
    }

    /// Switch to the view at `path`
    ///
    /// An unknown path leaves the current page mounted.
    pub fn navigate(&mut self, path: &str) -> Result<Route> {
        let route: Route = path.parse()?;
        self.go(route);
        Ok(route)
    }

    /// Switch to `route`, remounting even if it is already shown
    pub fn go(&mut self, route: Route) {
        if let Some(page) = self.page.take() {
            tracing::debug!("Router: leaving {}", page.route());
            page.unmount(&mut self.stage);
        }
        self.stage.reset();
        self.page = Some(Page::mount(route, &mut self.stage));
        tracing::debug!("Router: now at {}", route);
    }

    // =========================================================================
    // Input
    // =========================================================================

    pub fn frame(&mut self, dt_ms: f32) -> bool {
        match &mut self.page {
            Some(page) => page.frame(&mut self.stage, dt_ms),
            None => self.stage.frame(dt_ms),
        }
    }

    /// Run `frames` frames of `dt_ms` each
    pub fn run(&mut self, frames: usize, dt_ms: f32) {
        for _ in 0..frames {
            self.frame(dt_ms);
        }
    }

    pub fn scroll_by(&mut self, dy: f32) -> bool {
        match &mut self.page {
            Some(page) => page.scroll_by(&mut self.stage, dy),
            None => self.stage.scroll_by(dy),
        }
    }

    pub fn resize(&mut self, viewport: Viewport) {
        match &mut self.page {
            Some(page) => page.resize(&mut self.stage, viewport),
            None => self.stage.resize(viewport),
        }
    }

    pub fn pointer_move(&self, x: f32, y: f32) {
        self.stage.pointer_move(x, y);
    }

    /// Click at viewport coordinates
    ///
    /// Route changes are carried out here. Anything left over (external
    /// links) is returned for the embedder to open.
    pub fn click(&mut self, x: f32, y: f32) -> Option<Action> {
        let action = self.page.as_mut()?.click(&mut self.stage, x, y)?;
        match action {
            Action::Navigate(path) => {
                if let Err(err) = self.navigate(path) {
                    tracing::warn!("Router: {}", err);
                }
                None
            }
            other => Some(other),
        }
    }

    pub fn escape(&mut self) {
        if let Some(page) = &mut self.page {
            page.escape(&mut self.stage);
        }
    }

    /// Scroll to a section of the current page
    pub fn scroll_to(&mut self, section: impl Into<ElementId>) -> bool {
        let section = section.into();
        match &mut self.page {
            Some(page) => page.scroll_to(&mut self.stage, &section),
            None => false,
        }
    }

    /// Present `item` in the current page's overlay
    pub fn present(&mut self, item: ContentItem) {
        if let Some(page) = &mut self.page {
            page.present(&mut self.stage, item);
        }
    }

    pub fn close_overlay(&mut self, reason: CloseReason) {
        if let Some(page) = &mut self.page {
            page.close(&mut self.stage, reason);
        }
    }
}

impl Drop for Router {
    fn drop(&mut self) {
        if let Some(page) = self.page.take() {
            page.unmount(&mut self.stage);
        }
    }
}

impl fmt::Debug for Router {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Router")
            .field("page", &self.page)
            .field("stage", &self.stage)
            .finish()
    }
}
