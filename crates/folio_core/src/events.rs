//! Viewport event fan-out
//!
//! Scroll, resize and pointer events are delivered to subscribers registered
//! on an [`EventBus`]. Every `subscribe` returns a [`Subscription`] that
//! unsubscribes when dropped, so a component that is torn down can never be
//! called back.
//!
//! ```rust
//! use std::sync::atomic::{AtomicUsize, Ordering};
//! use std::sync::Arc;
//! use folio_core::{EventBus, ViewportEvent};
//!
//! let bus = EventBus::new();
//! let seen = Arc::new(AtomicUsize::new(0));
//! let sub = bus.subscribe({
//!     let seen = Arc::clone(&seen);
//!     move |_| {
//!         seen.fetch_add(1, Ordering::Relaxed);
//!     }
//! });
//!
//! bus.emit(&ViewportEvent::Scroll { y: 10.0 });
//! drop(sub);
//! bus.emit(&ViewportEvent::Scroll { y: 20.0 });
//! assert_eq!(seen.load(Ordering::Relaxed), 1);
//! ```

use std::sync::{Arc, Mutex, Weak};

use slotmap::{new_key_type, SlotMap};

use crate::geometry::Viewport;
use crate::sync::lock;

/// An input or layout change delivered to subscribers
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ViewportEvent {
    /// Document scroll offset changed
    Scroll { y: f32 },
    /// Viewport was resized
    Resize(Viewport),
    /// Pointer moved, in viewport (client) coordinates
    PointerMove { x: f32, y: f32 },
}

new_key_type! {
    /// Handle to a registered event subscriber
    pub struct SubscriberId;
}

/// Callback type for event subscribers
pub type EventCallback = Arc<dyn Fn(&ViewportEvent) + Send + Sync>;

/// Registry of viewport event subscribers
#[derive(Clone, Default)]
pub struct EventBus {
    subscribers: Arc<Mutex<SlotMap<SubscriberId, EventCallback>>>,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a callback; it is removed when the returned guard drops
    #[must_use = "dropping the Subscription unsubscribes immediately"]
    pub fn subscribe<F>(&self, callback: F) -> Subscription
    where
        F: Fn(&ViewportEvent) + Send + Sync + 'static,
    {
        let id = lock(&self.subscribers).insert(Arc::new(callback));
        Subscription {
            subscribers: Arc::downgrade(&self.subscribers),
            id: Some(id),
        }
    }

    /// Deliver an event to every subscriber
    ///
    /// Callbacks are collected before being invoked so a callback may itself
    /// subscribe or unsubscribe without deadlocking.
    pub fn emit(&self, event: &ViewportEvent) {
        let callbacks: Vec<EventCallback> = lock(&self.subscribers).values().cloned().collect();
        for callback in callbacks {
            callback(event);
        }
    }

    pub fn subscriber_count(&self) -> usize {
        lock(&self.subscribers).len()
    }
}

/// RAII guard for an [`EventBus`] subscription
pub struct Subscription {
    subscribers: Weak<Mutex<SlotMap<SubscriberId, EventCallback>>>,
    id: Option<SubscriberId>,
}

impl Subscription {
    /// Unsubscribe now. Calling it again does nothing.
    pub fn unsubscribe(&mut self) {
        if let Some(id) = self.id.take() {
            if let Some(subscribers) = self.subscribers.upgrade() {
                lock(&subscribers).remove(id);
            }
        }
    }

    pub fn is_active(&self) -> bool {
        self.id.is_some() && self.subscribers.strong_count() > 0
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.unsubscribe();
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription")
            .field("id", &self.id)
            .finish()
    }
}
