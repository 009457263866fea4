//! Rendering surface
//!
//! The surface is the element tree animations write to. It knows element
//! bounds in document space, the current scroll offset and the viewport, and
//! stores the style values animations produce.
//!
//! Writes to an element that is not on the surface are ignored: an animation
//! whose target disappeared degrades to doing nothing.
//!
//! # Example
//!
//! ```rust
//! use folio_core::{ElementSpec, MemorySurface, Rect, Selector, Surface, Viewport};
//!
//! let mut surface = MemorySurface::new(Viewport::new(1280.0, 800.0));
//! surface.insert(ElementSpec::new("about").bounds(Rect::new(0.0, 900.0, 1280.0, 700.0)));
//! surface.insert(
//!     ElementSpec::new("about/line-1")
//!         .parent("about")
//!         .class("animate-text")
//!         .bounds(Rect::new(0.0, 950.0, 600.0, 40.0)),
//! );
//!
//! let lines = surface.select(&Selector::class_in("about", "animate-text"));
//! assert_eq!(lines.len(), 1);
//! ```

use indexmap::IndexMap;
use smallvec::SmallVec;

use crate::geometry::{Rect, Viewport};
use crate::id::ElementId;
use crate::style::{Property, PropertyValues};

/// How animation targets are located on the surface
#[derive(Clone, Debug, PartialEq)]
pub enum Selector {
    /// A single element by id
    Id(ElementId),
    /// Every element carrying `class`, optionally restricted to descendants of `scope`
    Class {
        scope: Option<ElementId>,
        class: String,
    },
}

impl Selector {
    pub fn id(id: impl Into<ElementId>) -> Self {
        Selector::Id(id.into())
    }

    pub fn class(class: impl Into<String>) -> Self {
        Selector::Class {
            scope: None,
            class: class.into(),
        }
    }

    pub fn class_in(scope: impl Into<ElementId>, class: impl Into<String>) -> Self {
        Selector::Class {
            scope: Some(scope.into()),
            class: class.into(),
        }
    }
}

impl From<ElementId> for Selector {
    fn from(id: ElementId) -> Self {
        Selector::Id(id)
    }
}

impl From<&ElementId> for Selector {
    fn from(id: &ElementId) -> Self {
        Selector::Id(id.clone())
    }
}

/// The element tree animations mutate
///
/// Implemented by [`MemorySurface`]; an embedding that drives a real
/// rendering backend implements it over its own node tree.
pub trait Surface {
    fn viewport(&self) -> Viewport;

    /// Current vertical scroll offset of the document
    fn scroll_y(&self) -> f32;

    /// Set the scroll offset, clamped to `[0, max_scroll_y]`
    fn set_scroll_y(&mut self, y: f32);

    fn max_scroll_y(&self) -> f32;

    fn contains(&self, id: &ElementId) -> bool;

    /// Document-space bounds of an element
    fn bounds(&self, id: &ElementId) -> Option<Rect>;

    /// Resolve a selector to element ids in document order
    fn select(&self, selector: &Selector) -> Vec<ElementId>;

    fn has_class(&self, id: &ElementId, class: &str) -> bool;

    /// Current style value, `None` if the element does not exist
    fn style_value(&self, id: &ElementId, property: Property) -> Option<f32>;

    /// Write a style value; returns `false` if the element does not exist
    fn set_style(&mut self, id: &ElementId, property: Property, value: f32) -> bool;

    /// Elements under a document-space point, in document order
    fn hit_test(&self, x: f32, y: f32) -> Vec<ElementId>;
}

/// Description of an element to insert into a [`MemorySurface`]
#[derive(Clone, Debug)]
pub struct ElementSpec {
    id: ElementId,
    parent: Option<ElementId>,
    classes: SmallVec<[String; 2]>,
    bounds: Rect,
}

impl ElementSpec {
    pub fn new(id: impl Into<ElementId>) -> Self {
        Self {
            id: id.into(),
            parent: None,
            classes: SmallVec::new(),
            bounds: Rect::default(),
        }
    }

    pub fn parent(mut self, parent: impl Into<ElementId>) -> Self {
        self.parent = Some(parent.into());
        self
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.classes.push(class.into());
        self
    }

    pub fn bounds(mut self, bounds: Rect) -> Self {
        self.bounds = bounds;
        self
    }

    pub fn id(&self) -> &ElementId {
        &self.id
    }
}

#[derive(Clone, Debug)]
struct Node {
    parent: Option<ElementId>,
    classes: SmallVec<[String; 2]>,
    bounds: Rect,
    style: PropertyValues,
}

/// In-memory surface: an ordered element tree with bounds and style
#[derive(Clone, Debug)]
pub struct MemorySurface {
    nodes: IndexMap<ElementId, Node>,
    viewport: Viewport,
    scroll_y: f32,
    /// Explicit document height; `None` derives it from element bounds
    document_height: Option<f32>,
}

impl MemorySurface {
    pub fn new(viewport: Viewport) -> Self {
        Self {
            nodes: IndexMap::new(),
            viewport,
            scroll_y: 0.0,
            document_height: None,
        }
    }

    /// Insert (or replace) an element
    ///
    /// Replacing keeps the existing style so that re-layout after a resize
    /// does not reset animation state.
    pub fn insert(&mut self, spec: ElementSpec) {
        let style = self
            .nodes
            .get(&spec.id)
            .map(|n| n.style.clone())
            .unwrap_or_default();
        self.nodes.insert(
            spec.id,
            Node {
                parent: spec.parent,
                classes: spec.classes,
                bounds: spec.bounds,
                style,
            },
        );
    }

    /// Update the bounds of an existing element
    pub fn set_bounds(&mut self, id: &ElementId, bounds: Rect) -> bool {
        match self.nodes.get_mut(id) {
            Some(node) => {
                node.bounds = bounds;
                true
            }
            None => false,
        }
    }

    /// Remove an element and all of its descendants, returning how many were removed
    pub fn remove_subtree(&mut self, id: &ElementId) -> usize {
        let doomed: Vec<ElementId> = self
            .nodes
            .keys()
            .filter(|candidate| *candidate == id || self.is_descendant(candidate, id))
            .cloned()
            .collect();
        for key in &doomed {
            self.nodes.shift_remove(key);
        }
        let max = self.max_scroll_y();
        self.scroll_y = self.scroll_y.clamp(0.0, max);
        doomed.len()
    }

    pub fn clear(&mut self) {
        self.nodes.clear();
        self.scroll_y = 0.0;
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        let max = self.max_scroll_y();
        self.scroll_y = self.scroll_y.clamp(0.0, max);
    }

    pub fn set_document_height(&mut self, height: Option<f32>) {
        self.document_height = height;
    }

    pub fn document_height(&self) -> f32 {
        self.document_height.unwrap_or_else(|| {
            self.nodes
                .values()
                .map(|n| n.bounds.bottom())
                .fold(0.0, f32::max)
        })
    }

    /// The full resolved style of an element
    pub fn style(&self, id: &ElementId) -> Option<&PropertyValues> {
        self.nodes.get(id).map(|n| &n.style)
    }

    pub fn element_ids(&self) -> impl Iterator<Item = &ElementId> {
        self.nodes.keys()
    }

    fn is_descendant(&self, candidate: &ElementId, ancestor: &ElementId) -> bool {
        let mut current = self.nodes.get(candidate).and_then(|n| n.parent.as_ref());
        while let Some(parent) = current {
            if parent == ancestor {
                return true;
            }
            current = self.nodes.get(parent).and_then(|n| n.parent.as_ref());
        }
        false
    }
}

impl Surface for MemorySurface {
    fn viewport(&self) -> Viewport {
        self.viewport
    }

    fn scroll_y(&self) -> f32 {
        self.scroll_y
    }

    fn set_scroll_y(&mut self, y: f32) {
        self.scroll_y = y.clamp(0.0, self.max_scroll_y());
    }

    fn max_scroll_y(&self) -> f32 {
        (self.document_height() - self.viewport.height).max(0.0)
    }

    fn contains(&self, id: &ElementId) -> bool {
        self.nodes.contains_key(id)
    }

    fn bounds(&self, id: &ElementId) -> Option<Rect> {
        self.nodes.get(id).map(|n| n.bounds)
    }

    fn select(&self, selector: &Selector) -> Vec<ElementId> {
        match selector {
            Selector::Id(id) => {
                if self.nodes.contains_key(id) {
                    vec![id.clone()]
                } else {
                    Vec::new()
                }
            }
            Selector::Class { scope, class } => {
                if let Some(scope) = scope {
                    if !self.nodes.contains_key(scope) {
                        return Vec::new();
                    }
                }
                self.nodes
                    .iter()
                    .filter(|(_, node)| node.classes.iter().any(|c| c == class))
                    .filter(|(id, _)| {
                        scope
                            .as_ref()
                            .map_or(true, |scope| self.is_descendant(id, scope))
                    })
                    .map(|(id, _)| id.clone())
                    .collect()
            }
        }
    }

    fn has_class(&self, id: &ElementId, class: &str) -> bool {
        self.nodes
            .get(id)
            .map_or(false, |n| n.classes.iter().any(|c| c == class))
    }

    fn style_value(&self, id: &ElementId, property: Property) -> Option<f32> {
        self.nodes.get(id).map(|n| n.style.get_or_rest(property))
    }

    fn set_style(&mut self, id: &ElementId, property: Property, value: f32) -> bool {
        match self.nodes.get_mut(id) {
            Some(node) => {
                node.style.set(property, value);
                true
            }
            None => {
                tracing::trace!("set_style: {:?} not on surface, ignoring {:?}", id, property);
                false
            }
        }
    }

    fn hit_test(&self, x: f32, y: f32) -> Vec<ElementId> {
        self.nodes
            .iter()
            .filter(|(_, node)| node.bounds.contains(x, y))
            .map(|(id, _)| id.clone())
            .collect()
    }
}
