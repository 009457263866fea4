//! Folio Overlay
//!
//! Project detail modals and the gallery lightbox:
//!
//! - **State Machine**: Closed, Opening, Open, Closing with typed close reasons
//! - **Modal Controller**: one item at a time, scroll lock held while visible
//! - **Presets**: enter/exit timelines built against the current surface

pub mod modal;
pub mod presets;
pub mod state;

pub use modal::ModalController;
pub use presets::{Lightbox, OverlayPreset, ProjectDetail, REVEAL_ITEM_CLASS};
pub use state::{CloseReason, OverlayEvent, OverlayState};
