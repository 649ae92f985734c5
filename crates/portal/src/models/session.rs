//! Process-local session record.
//!
//! The portal owns exactly one [`Session`], created unauthenticated at
//! startup and reset in place on logout, never torn down. This wrapper
//! shares it across handlers; the lock is held only for a snapshot or a
//! single transition, never across an await.

use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use driftwood_core::{AttemptId, Session, SessionState, Verdict};

/// Shared handle to the single session record.
#[derive(Debug, Clone, Default)]
pub struct SharedSession {
    inner: Arc<RwLock<Session>>,
}

impl SharedSession {
    /// Create a fresh, unauthenticated session handle.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Owned copy of the current session state.
    #[must_use]
    pub fn snapshot(&self) -> SessionState {
        self.read().snapshot()
    }

    /// Start a login attempt. See [`Session::begin_login`].
    pub fn begin_login(&self) -> AttemptId {
        self.write().begin_login()
    }

    /// Apply a login verdict. See [`Session::resolve_login`].
    pub fn resolve_login(&self, attempt: AttemptId, verdict: Verdict) -> bool {
        self.write().resolve_login(attempt, verdict)
    }

    /// Reset to unauthenticated. See [`Session::logout`].
    pub fn logout(&self) {
        self.write().logout();
    }

    /// Mark the welcome notice as seen. See [`Session::acknowledge_welcome`].
    pub fn acknowledge_welcome(&self) {
        self.write().acknowledge_welcome();
    }

    // Session transitions never panic mid-write, so a poisoned lock still
    // holds a coherent record.
    fn read(&self) -> RwLockReadGuard<'_, Session> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Session> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }
}
