//! Page layout
//!
//! A small block layout over [`MemorySurface`]: top-level sections stack
//! vertically at full width and place their children in rows or grids.
//! Below the mobile breakpoint grids collapse to fewer columns.
//!
//! Layout is re-run on resize. Re-inserting an element keeps its style, so
//! a relayout never disturbs running animations.

use folio_core::{ElementId, ElementSpec, MemorySurface, Rect, Surface, Viewport};

/// Horizontal page padding
pub const GUTTER: f32 = 24.0;

/// Vertical padding at the top and bottom of a content section
pub const SECTION_PADDING: f32 = 128.0;

/// Content never grows wider than this
pub const MAX_CONTENT_WIDTH: f32 = 1400.0;

/// Stacks sections down the page
pub struct PageLayout<'a> {
    surface: &'a mut MemorySurface,
    viewport: Viewport,
    cursor_y: f32,
}

impl<'a> PageLayout<'a> {
    pub fn new(surface: &'a mut MemorySurface) -> Self {
        let viewport = surface.viewport();
        Self {
            surface,
            viewport,
            cursor_y: 0.0,
        }
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn is_mobile(&self) -> bool {
        self.viewport.is_mobile()
    }

    /// Where the next section starts
    pub fn cursor_y(&self) -> f32 {
        self.cursor_y
    }

    /// The centered content column between `top` and `top + height`
    pub fn content(&self, top: f32, height: f32) -> Rect {
        let width = (self.viewport.width - GUTTER * 2.0).clamp(0.0, MAX_CONTENT_WIDTH);
        Rect::new((self.viewport.width - width) / 2.0, top, width, height)
    }

    /// Pick a column count for the current width
    ///
    /// `mobile` below 768px, `tablet` below 1024px, `desktop` otherwise.
    pub fn columns(&self, mobile: usize, tablet: usize, desktop: usize) -> usize {
        if self.viewport.is_mobile() {
            mobile
        } else if self.viewport.width < 1024.0 {
            tablet
        } else {
            desktop
        }
        .max(1)
    }

    /// Open a full-width top-level section at the cursor
    ///
    /// Returns its top edge. Close it with [`close`](Self::close) once its
    /// children are placed.
    pub fn open(&mut self, id: &str) -> f32 {
        let top = self.cursor_y;
        self.surface
            .insert(ElementSpec::new(id).bounds(Rect::new(0.0, top, self.viewport.width, 0.0)));
        top
    }

    /// Close a section opened at `top`, ending it at `bottom`
    pub fn close(&mut self, id: &str, bottom: f32) -> Rect {
        let top = self.cursor_y;
        let rect = Rect::new(0.0, top, self.viewport.width, (bottom - top).max(0.0));
        self.surface.set_bounds(&ElementId::from(id), rect);
        self.cursor_y = rect.bottom();
        rect
    }

    /// A section that is exactly `height` tall with no children laid out by the caller
    pub fn section(&mut self, id: &str, height: f32) -> Rect {
        let top = self.open(id);
        self.close(id, top + height)
    }

    /// Bounds of an element placed earlier
    pub fn bounds(&self, id: &ElementId) -> Option<Rect> {
        self.surface.bounds(id)
    }

    pub fn place(&mut self, spec: ElementSpec) {
        self.surface.insert(spec);
    }

    /// Place `specs` in a grid inside `area`, returning the bottom edge
    ///
    /// Cells are `cell_height` tall; `gap` separates rows and columns.
    pub fn grid(
        &mut self,
        area: Rect,
        columns: usize,
        cell_height: f32,
        gap: f32,
        specs: impl IntoIterator<Item = ElementSpec>,
    ) -> f32 {
        let specs: Vec<ElementSpec> = specs.into_iter().collect();
        let cells = grid_cells(area, columns, cell_height, gap, specs.len());
        let bottom = cells.last().map_or(area.top(), Rect::bottom);
        for (spec, rect) in specs.into_iter().zip(cells) {
            self.surface.insert(spec.bounds(rect));
        }
        bottom
    }

    /// Place `specs` one under another inside `area`, returning the bottom edge
    pub fn rows(
        &mut self,
        area: Rect,
        gap: f32,
        specs: impl IntoIterator<Item = (ElementSpec, f32)>,
    ) -> f32 {
        let mut y = area.top();
        let mut bottom = area.top();
        for (spec, height) in specs {
            let rect = Rect::new(area.x, y, area.width, height);
            bottom = rect.bottom();
            y = bottom + gap;
            self.surface.insert(spec.bounds(rect));
        }
        bottom
    }

    /// Finish the page, returning the document height
    pub fn finish(self) -> f32 {
        tracing::trace!("PageLayout: {} elements, height {}", self.surface.len(), self.cursor_y);
        self.cursor_y
    }
}

/// Cell rects for `count` items in a grid inside `area`, row by row
pub fn grid_cells(area: Rect, columns: usize, cell_height: f32, gap: f32, count: usize) -> Vec<Rect> {
    let columns = columns.max(1);
    let cell_width = cell_width(area.width, columns, gap);
    (0..count)
        .map(|i| {
            let (row, column) = (i / columns, i % columns);
            Rect::new(
                area.x + column as f32 * (cell_width + gap),
                area.top() + row as f32 * (cell_height + gap),
                cell_width,
                cell_height,
            )
        })
        .collect()
}

/// Width of one cell when `columns` share `width`
pub fn cell_width(width: f32, columns: usize, gap: f32) -> f32 {
    let columns = columns.max(1);
    (width - gap * (columns - 1) as f32) / columns as f32
}
