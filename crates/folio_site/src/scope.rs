//! Per-section ownership of motions and subscriptions
//!
//! Everything a section registers on mount goes into its [`SectionScope`].
//! Reverting the scope, or dropping it, releases all of it at once, which is
//! what unmounting a section means.

use folio_core::Subscription;

use crate::engine::Motion;

/// Registrations owned by one mounted section
pub struct SectionScope {
    name: &'static str,
    motions: Vec<Motion>,
    subscriptions: Vec<Subscription>,
}

impl SectionScope {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            motions: Vec::new(),
            subscriptions: Vec::new(),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Keep a motion alive; `None` (nothing to animate) is ignored
    pub fn adopt(&mut self, motion: Option<Motion>) {
        if let Some(motion) = motion {
            self.motions.push(motion);
        }
    }

    pub fn subscribe(&mut self, subscription: Subscription) {
        self.subscriptions.push(subscription);
    }

    pub fn motion_count(&self) -> usize {
        self.motions.len()
    }

    pub fn subscription_count(&self) -> usize {
        self.subscriptions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.motions.is_empty() && self.subscriptions.is_empty()
    }

    /// Release everything now. Reverting an empty scope does nothing.
    pub fn revert(&mut self) {
        if self.is_empty() {
            return;
        }
        tracing::debug!(
            "SectionScope {}: releasing {} motions, {} subscriptions",
            self.name,
            self.motions.len(),
            self.subscriptions.len()
        );
        // Inputs first so nothing reacts to a half-torn-down section
        self.subscriptions.clear();
        self.motions.clear();
    }
}

impl Drop for SectionScope {
    fn drop(&mut self) {
        self.revert();
    }
}

impl std::fmt::Debug for SectionScope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SectionScope")
            .field("name", &self.name)
            .field("motions", &self.motions.len())
            .field("subscriptions", &self.subscriptions.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_animation::{AnimatedTimeline, AnimationScheduler, Timeline};
    use folio_core::EventBus;

    #[test]
    fn test_revert_releases_everything() {
        let scheduler = AnimationScheduler::new();
        let bus = EventBus::new();
        let mut scope = SectionScope::new("hero");

        scope.adopt(Some(Motion::Timeline(AnimatedTimeline::new(
            scheduler.handle(),
            Timeline::new(),
        ))));
        scope.adopt(None);
        scope.subscribe(bus.subscribe(|_| {}));
        assert_eq!(scope.motion_count(), 1);
        assert_eq!(scheduler.timeline_count(), 1);
        assert_eq!(bus.subscriber_count(), 1);

        scope.revert();
        scope.revert();
        assert!(scope.is_empty());
        assert_eq!(scheduler.timeline_count(), 0);
        assert_eq!(bus.subscriber_count(), 0);
    }

    #[test]
    fn test_drop_reverts() {
        let scheduler = AnimationScheduler::new();
        {
            let mut scope = SectionScope::new("about");
            scope.adopt(Some(Motion::Timeline(AnimatedTimeline::new(
                scheduler.handle(),
                Timeline::new(),
            ))));
        }
        assert_eq!(scheduler.timeline_count(), 0);
    }
}
