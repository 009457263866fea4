//! Overlay lifecycle state machine
//!
//! ```text
//!            Open               AnimationComplete
//!   Closed ───────► Opening ─────────────────────► Open
//!      ▲               │                            │
//!      │               │ Close                      │ Close
//!      │               ▼                            │
//!      └─────────── Closing ◄───────────────────────┘
//!   AnimationComplete
//! ```
//!
//! `Open` while already visible restarts at `Opening`; the controller swaps
//! the presented item without stacking a second overlay.

// =============================================================================
// Events
// =============================================================================

/// Why an overlay is being dismissed
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CloseReason {
    /// The close button was pressed
    Button,
    /// A click landed on the backdrop outside the content
    Backdrop,
    /// Escape key
    Escape,
    /// The view is navigating away
    Navigation,
}

/// Input to the overlay state machine
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OverlayEvent {
    /// An item was selected for presentation
    Open,
    /// Dismiss the overlay
    Close(CloseReason),
    /// The running enter or exit animation finished
    AnimationComplete,
}

// =============================================================================
// OverlayState
// =============================================================================

/// State machine for overlay lifecycle
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum OverlayState {
    /// Overlay is not visible
    #[default]
    Closed,
    /// Enter animation is playing
    Opening,
    /// Overlay is fully visible and interactive
    Open,
    /// Exit animation is playing
    Closing,
}

impl OverlayState {
    /// Overlay is on screen (and the page scroll must be locked)
    pub fn is_visible(&self) -> bool {
        !matches!(self, OverlayState::Closed)
    }

    /// Fully open and interactive
    pub fn is_open(&self) -> bool {
        matches!(self, OverlayState::Open)
    }

    /// Enter or exit animation in progress
    pub fn is_animating(&self) -> bool {
        matches!(self, OverlayState::Opening | OverlayState::Closing)
    }

    /// Handle an event and return the new state, or None if no transition
    pub fn on_event(&self, event: OverlayEvent) -> Option<Self> {
        use OverlayState::*;

        match (self, event) {
            (Closed, OverlayEvent::Open) => Some(Opening),

            // Replacing the presented item restarts the entrance
            (Opening | Open | Closing, OverlayEvent::Open) => Some(Opening),

            (Opening, OverlayEvent::AnimationComplete) => Some(Open),

            // Interrupting the entrance goes straight to the exit
            (Opening | Open, OverlayEvent::Close(_)) => Some(Closing),

            (Closing, OverlayEvent::AnimationComplete) => Some(Closed),

            _ => None,
        }
    }
}
