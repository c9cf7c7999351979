//! Access-scoped holder for the shared store.
//!
//! The application constructs one [`StudyStore`] at startup and hands a
//! `StoreCell` reference to every consumer. Reading through the cell before
//! `init` has run is a scoping violation and fails with
//! [`StoreError::NotInitialized`] rather than panicking.

use std::sync::{Mutex, OnceLock, PoisonError};

use crate::error::StoreError;
use crate::store::StudyStore;

/// Once-initialized cell wrapping the process-wide [`StudyStore`].
///
/// The whole application runs on one execution thread, so the interior
/// mutex is never contended; it exists to make the cell `Sync` so it can
/// live in a `static`.
pub struct StoreCell {
    inner: OnceLock<Mutex<StudyStore>>,
}

impl StoreCell {
    pub const fn new() -> Self {
        Self {
            inner: OnceLock::new(),
        }
    }

    /// Install the store. May be called exactly once, at application start.
    pub fn init(&self, store: StudyStore) -> Result<(), StoreError> {
        tracing::debug!("initializing shared study store");
        self.inner
            .set(Mutex::new(store))
            .map_err(|_| StoreError::AlreadyInitialized)
    }

    pub fn is_initialized(&self) -> bool {
        self.inner.get().is_some()
    }

    /// Run `f` against the store. Single-writer-at-a-time: the closure gets
    /// exclusive access for its whole duration.
    pub fn with<R>(&self, f: impl FnOnce(&mut StudyStore) -> R) -> Result<R, StoreError> {
        let cell = self.inner.get().ok_or(StoreError::NotInitialized)?;
        let mut store = cell.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(f(&mut store))
    }

    /// Clone of the current store state.
    pub fn snapshot(&self) -> Result<StudyStore, StoreError> {
        self.with(|store| store.clone())
    }
}

impl Default for StoreCell {
    fn default() -> Self {
        Self::new()
    }
}
