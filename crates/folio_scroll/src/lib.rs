//! Folio Scroll
//!
//! Scroll-driven motion: triggers that play or reverse timelines as regions
//! cross viewport thresholds, parallax tracks scrubbed by scroll progress,
//! and the eased scroll-to used by in-page navigation.
//!
//! # Example
//!
//! ```rust
//! use folio_animation::{AnimatedTimeline, AnimationScheduler, Position, Timeline, Tween};
//! use folio_core::{ElementSpec, MemorySurface, Property, PropertyValues, Rect, Surface, Viewport};
//! use folio_scroll::{ScrollTrigger, ToggleActions, TriggerRegistry, TriggerSpec};
//!
//! let mut surface = MemorySurface::new(Viewport::new(1440.0, 1000.0));
//! surface.insert(ElementSpec::new("about").bounds(Rect::new(0.0, 1800.0, 1440.0, 900.0)));
//!
//! let scheduler = AnimationScheduler::new();
//! let registry = TriggerRegistry::new();
//!
//! let mut reveal = Timeline::new();
//! reveal.add("about", Tween::from_state(PropertyValues::new().opacity(0.0), 800), Position::End);
//!
//! let spec = TriggerSpec::new("about")
//!     .start("top 70%".parse().unwrap())
//!     .actions(ToggleActions::play_reverse());
//! let guard = registry.register(ScrollTrigger::new(
//!     spec,
//!     Some(AnimatedTimeline::new(scheduler.handle(), reveal)),
//! ));
//!
//! surface.set_scroll_y(1200.0);
//! registry.update(&surface, 16.0);
//! scheduler.advance(800.0, &mut surface);
//! assert_eq!(surface.style_value(&"about".into(), Property::Opacity), Some(1.0));
//!
//! drop(guard);
//! assert_eq!(registry.active_count(), 0);
//! ```

pub mod parallax;
pub mod position;
pub mod registry;
pub mod scroll_to;
pub mod toggle;
pub mod trigger;

pub use parallax::{ParallaxTrack, Scrub};
pub use position::{Anchor, TriggerPosition};
pub use registry::{RegistryHandle, TriggerGuard, TriggerId, TriggerRegistry};
pub use scroll_to::ScrollAnimator;
pub use toggle::{ToggleAction, ToggleActions, TriggerEvent};
pub use trigger::{ScrollTrigger, TriggerPhase, TriggerSpec};
