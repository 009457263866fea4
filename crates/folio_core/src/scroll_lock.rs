//! Document-level scroll lock
//!
//! The only piece of mutable state shared across components. A lock is held
//! while at least one [`ScrollLockGuard`] is alive and unreleased. Releasing a
//! guard is idempotent, so overlapping open/close paths cannot release twice.
//!
//! ```rust
//! use folio_core::ScrollLock;
//!
//! let lock = ScrollLock::new();
//! let mut guard = lock.acquire();
//! assert!(lock.is_locked());
//!
//! guard.release();
//! guard.release(); // no-op
//! assert!(!lock.is_locked());
//! ```

use std::sync::{Arc, Mutex, Weak};

use crate::sync::lock;

#[derive(Debug, Default)]
struct LockState {
    holders: usize,
}

/// Shared scroll-lock flag
#[derive(Clone, Debug, Default)]
pub struct ScrollLock {
    state: Arc<Mutex<LockState>>,
}

impl ScrollLock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take a hold on the lock; the page stays locked until the guard is released
    pub fn acquire(&self) -> ScrollLockGuard {
        let mut state = lock(&self.state);
        state.holders += 1;
        if state.holders == 1 {
            tracing::debug!("ScrollLock: page scroll locked");
        }
        ScrollLockGuard {
            state: Arc::downgrade(&self.state),
            released: false,
        }
    }

    pub fn is_locked(&self) -> bool {
        lock(&self.state).holders > 0
    }

    /// Number of live guards
    pub fn holders(&self) -> usize {
        lock(&self.state).holders
    }
}

/// A hold on the [`ScrollLock`], released on drop
#[derive(Debug)]
pub struct ScrollLockGuard {
    state: Weak<Mutex<LockState>>,
    released: bool,
}

impl ScrollLockGuard {
    /// Release this hold. Calling it again does nothing.
    pub fn release(&mut self) {
        if self.released {
            return;
        }
        self.released = true;
        if let Some(state) = self.state.upgrade() {
            let mut state = lock(&state);
            state.holders = state.holders.saturating_sub(1);
            if state.holders == 0 {
                tracing::debug!("ScrollLock: page scroll released");
            }
        }
    }

    pub fn is_released(&self) -> bool {
        self.released
    }
}

impl Drop for ScrollLockGuard {
    fn drop(&mut self) {
        self.release();
    }
}
