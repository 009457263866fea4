//! Trigger registry
//!
//! All live triggers of a view, evaluated together once per frame. Like the
//! animation scheduler, the registry is shared through a weak
//! [`RegistryHandle`], and each registration is owned by a
//! [`TriggerGuard`] that unregisters on drop. A section that keeps its
//! guards and drops them on unmount therefore releases every trigger
//! exactly once.

use std::sync::{Arc, Mutex, Weak};

use folio_core::sync::lock;
use folio_core::Surface;
use slotmap::{new_key_type, SlotMap};

use crate::trigger::{ScrollTrigger, TriggerPhase};

new_key_type! {
    /// Handle to a registered scroll trigger
    pub struct TriggerId;
}

type Triggers = Mutex<SlotMap<TriggerId, ScrollTrigger>>;

/// Owner of every live scroll trigger
pub struct TriggerRegistry {
    triggers: Arc<Triggers>,
}

impl TriggerRegistry {
    pub fn new() -> Self {
        Self {
            triggers: Arc::new(Mutex::new(SlotMap::with_key())),
        }
    }

    pub fn handle(&self) -> RegistryHandle {
        RegistryHandle {
            triggers: Arc::downgrade(&self.triggers),
        }
    }

    /// Register a trigger; it lives until the guard is dropped
    #[must_use = "dropping the TriggerGuard kills the trigger immediately"]
    pub fn register(&self, trigger: ScrollTrigger) -> TriggerGuard {
        self.handle().register(trigger)
    }

    /// Evaluate every trigger against the surface's scroll offset
    ///
    /// Returns the number of crossings that fired.
    pub fn update(&self, surface: &dyn Surface, dt_ms: f32) -> usize {
        let mut triggers = lock(&self.triggers);
        let mut fired = 0;
        for (id, trigger) in triggers.iter_mut() {
            let events = trigger.update(surface, dt_ms);
            for event in &events {
                tracing::debug!("ScrollTrigger {:?} ({:?}): {:?}", id, trigger.trigger(), event);
            }
            fired += events.len();
        }
        fired
    }

    /// Recompute every trigger region, after a resize or layout change
    pub fn refresh(&self, surface: &dyn Surface) {
        let mut triggers = lock(&self.triggers);
        let mut missing = 0;
        for (_, trigger) in triggers.iter_mut() {
            if !trigger.refresh(surface) {
                missing += 1;
            }
        }
        tracing::debug!(
            "TriggerRegistry: refreshed {} triggers ({} without a trigger element)",
            triggers.len(),
            missing
        );
    }

    /// Number of live triggers
    pub fn active_count(&self) -> usize {
        lock(&self.triggers).len()
    }

    /// Phase of a trigger, if it is still registered
    pub fn phase(&self, id: TriggerId) -> Option<TriggerPhase> {
        lock(&self.triggers).get(id).map(ScrollTrigger::phase)
    }

    /// Kill every trigger at once
    ///
    /// Outstanding guards become no-ops.
    pub fn kill_all(&self) {
        let drained: Vec<ScrollTrigger> = {
            let mut triggers = lock(&self.triggers);
            triggers.drain().map(|(_, trigger)| trigger).collect()
        };
        tracing::debug!("TriggerRegistry: killed {} triggers", drained.len());
        // Triggers drop (and release their timelines) outside the lock
        drop(drained);
    }
}

impl Default for TriggerRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// A weak handle to the trigger registry
#[derive(Clone)]
pub struct RegistryHandle {
    triggers: Weak<Triggers>,
}

impl RegistryHandle {
    /// Register a trigger; if the registry is gone the trigger is dropped
    #[must_use = "dropping the TriggerGuard kills the trigger immediately"]
    pub fn register(&self, trigger: ScrollTrigger) -> TriggerGuard {
        let id = self.triggers.upgrade().map(|triggers| {
            let description = format!("{trigger:?}");
            let id = lock(&triggers).insert(trigger);
            tracing::debug!("TriggerRegistry: registered {:?} {}", id, description);
            id
        });
        TriggerGuard {
            triggers: self.triggers.clone(),
            id,
        }
    }

    pub fn is_alive(&self) -> bool {
        self.triggers.strong_count() > 0
    }
}

/// RAII registration of a [`ScrollTrigger`]
pub struct TriggerGuard {
    triggers: Weak<Triggers>,
    id: Option<TriggerId>,
}

impl TriggerGuard {
    pub fn id(&self) -> Option<TriggerId> {
        self.id
    }

    /// Still registered with a live registry
    pub fn is_active(&self) -> bool {
        match (self.id, self.triggers.upgrade()) {
            (Some(id), Some(triggers)) => lock(&triggers).contains_key(id),
            _ => false,
        }
    }

    /// Unregister now. Calling it again does nothing.
    pub fn kill(&mut self) {
        let Some(id) = self.id.take() else {
            return;
        };
        let Some(triggers) = self.triggers.upgrade() else {
            return;
        };
        // Bind the removed trigger so it drops after the lock is released
        let removed = lock(&triggers).remove(id);
        if let Some(trigger) = removed {
            tracing::debug!("TriggerRegistry: killed {:?} ({:?})", id, trigger.trigger());
        }
    }
}

impl Drop for TriggerGuard {
    fn drop(&mut self) {
        self.kill();
    }
}

impl std::fmt::Debug for TriggerGuard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TriggerGuard").field("id", &self.id).finish()
    }
}
