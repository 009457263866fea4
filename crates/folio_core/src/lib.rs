//! Folio Core
//!
//! Foundational primitives shared by the Folio motion crates:
//!
//! - **Surface**: the element tree whose style attributes animations mutate
//! - **Style Properties**: opacity, translation, scale, clip and counter values
//! - **Scroll Lock**: the one document-level flag shared across components
//! - **Viewport Events**: scroll/resize/pointer fan-out with RAII subscriptions
//!
//! # Example
//!
//! ```rust
//! use folio_core::{ElementSpec, MemorySurface, Property, Rect, Surface, Viewport};
//!
//! let mut surface = MemorySurface::new(Viewport::new(1280.0, 800.0));
//! surface.insert(ElementSpec::new("hero").bounds(Rect::new(0.0, 0.0, 1280.0, 800.0)));
//!
//! surface.set_style(&"hero".into(), Property::Opacity, 0.5);
//! assert_eq!(surface.style_value(&"hero".into(), Property::Opacity), Some(0.5));
//! ```

pub mod error;
pub mod events;
pub mod geometry;
pub mod id;
pub mod scroll_lock;
pub mod style;
pub mod surface;
pub mod sync;

pub use error::{FolioError, Result};
pub use events::{EventBus, Subscription, ViewportEvent};
pub use geometry::{Rect, Viewport};
pub use id::ElementId;
pub use scroll_lock::{ScrollLock, ScrollLockGuard};
pub use style::{Property, PropertyValues};
pub use surface::{ElementSpec, MemorySurface, Selector, Surface};
