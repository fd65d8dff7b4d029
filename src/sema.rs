//! Counting semaphore bounding concurrent source reads.
//!
//! Thin wrapper over [`tokio::sync::Semaphore`] exposing the one contract
//! the engine relies on: a reserved slot is returned on every exit path of
//! the task holding it, because release rides on dropping the guard.

use std::sync::Arc;

use tokio::sync::{OwnedSemaphorePermit, Semaphore};

/// Counting semaphore with fixed capacity.
///
/// Cloning is cheap and shares the same slots.
#[derive(Debug, Clone)]
pub struct Sema {
    inner: Arc<Semaphore>,
    slots: usize,
}

/// One reserved slot. Dropping it returns the slot.
#[derive(Debug)]
pub struct Slot {
    _permit: OwnedSemaphorePermit,
}

impl Sema {
    /// Create a semaphore with `slots` capacity.
    ///
    /// # Panics
    ///
    /// Panics if `slots` is zero.
    pub fn new(slots: usize) -> Self {
        assert!(slots >= 1, "semaphore capacity must be at least 1");
        Self {
            inner: Arc::new(Semaphore::new(slots)),
            slots,
        }
    }

    /// Suspend until a slot is free, then reserve it.
    pub async fn acquire(&self) -> Slot {
        // The inner semaphore is never closed, so acquisition cannot fail.
        let permit = Arc::clone(&self.inner)
            .acquire_owned()
            .await
            .expect("semaphore never closed");
        Slot { _permit: permit }
    }

    /// Slots currently free.
    pub fn available(&self) -> usize {
        self.inner.available_permits()
    }

    /// Total capacity.
    pub fn slots(&self) -> usize {
        self.slots
    }
}
