//! Folio Site
//!
//! The portfolio site's pages wired onto the Folio motion crates:
//!
//! - **Stage**: surface, scheduler, scroll triggers, scroll lock and events for one view
//! - **Sections**: layout, reveal and parallax motion, and click handling per section
//! - **Navigation**: pinned bar, mobile menu and smooth in-page scrolling
//! - **Overlays**: project detail modal and gallery lightbox
//! - **Router**: swaps pages, tearing every registration down in between
//! - **Config**: TOML-tunable easing, timings, parallax and cursor springs
//!
//! # Example
//!
//! ```rust
//! use folio_core::Viewport;
//! use folio_overlay::OverlayState;
//! use folio_site::content::FEATURED;
//! use folio_site::{Route, Router, SiteConfig};
//!
//! let mut router = Router::new(SiteConfig::default(), Viewport::new(1440.0, 900.0));
//! assert!(router.scroll_to("contact"));
//! router.run(120, 16.0);
//! assert!(router.stage().scroll_y() > 0.0);
//!
//! router.present(FEATURED[0]);
//! router.run(120, 16.0);
//! assert_eq!(router.page().map(|p| p.overlay_state()), Some(OverlayState::Open));
//! assert!(router.stage().is_scroll_locked());
//!
//! router.navigate("/portfolio").unwrap();
//! assert_eq!(router.route(), Some(Route::Portfolio));
//! assert!(!router.stage().is_scroll_locked());
//! ```

pub mod config;
pub mod content;
pub mod cursor;
pub mod embed;
pub mod engine;
pub mod error;
pub mod layout;
pub mod nav;
pub mod page;
pub mod router;
pub mod scope;
pub mod sections;
pub mod stage;

pub use config::SiteConfig;
pub use cursor::Cursor;
pub use engine::{Motion, MotionEngine, Parallax, Reveal};
pub use error::{Result, SiteError};
pub use nav::{NavVariant, Navigation};
pub use page::{Overlay, Page};
pub use router::{Route, Router};
pub use scope::SectionScope;
pub use sections::{Action, Section};
pub use stage::Stage;
