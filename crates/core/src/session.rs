//! Session state machine.
//!
//! A session moves between three states:
//!
//! ```text
//! Unauthenticated -> Authenticating -> Authenticated { welcome_pending }
//!        ^                 |                  |
//!        |                 | (denied/error)   | (logout)
//!        +-----------------+------------------+
//! ```
//!
//! The machine is pure: it never performs I/O and never sleeps. The portal's
//! auth service drives it around the verifier call and owns the failure
//! timing floor. Every login attempt is tagged with a monotonically
//! increasing [`AttemptId`]; a verdict is applied only while its attempt is
//! still the session's current one, so a late-resolving verdict from before
//! a logout (or a newer attempt) is discarded instead of overwriting state.

use crate::verdict::Verdict;

/// Identifier for one login attempt.
///
/// Allocated by [`Session::begin_login`] and consumed by
/// [`Session::resolve_login`]. Comparing ids is the only thing callers can
/// do with one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AttemptId(u64);

/// Where the session currently stands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    /// No credential check has succeeded; the default at process start.
    Unauthenticated,
    /// A login attempt is outstanding with the credential verifier.
    Authenticating,
    /// A credential check succeeded.
    Authenticated {
        /// Display name reported by the verifier at login time.
        display_name: String,
        /// True until the one-time welcome notice is acknowledged.
        welcome_pending: bool,
    },
}

/// The session record.
///
/// One exists per process, owned by the portal state and injected into
/// every protected view. Logout resets it in place; it is never torn down.
#[derive(Debug)]
pub struct Session {
    state: SessionState,
    /// Bumped by every `begin_login` and every `logout`, invalidating any
    /// attempt still in flight.
    attempt: u64,
}

impl Session {
    /// Create a fresh, unauthenticated session.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            state: SessionState::Unauthenticated,
            attempt: 0,
        }
    }

    /// Current state.
    #[must_use]
    pub const fn state(&self) -> &SessionState {
        &self.state
    }

    /// Owned copy of the current state, for handing across a lock boundary.
    #[must_use]
    pub fn snapshot(&self) -> SessionState {
        self.state.clone()
    }

    /// Whether a credential check has succeeded and not been logged out.
    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        matches!(self.state, SessionState::Authenticated { .. })
    }

    /// Display name of the authenticated user, if any.
    #[must_use]
    pub fn display_name(&self) -> Option<&str> {
        match &self.state {
            SessionState::Authenticated { display_name, .. } => Some(display_name),
            _ => None,
        }
    }

    /// Whether the one-time welcome notice is still owed.
    #[must_use]
    pub const fn welcome_pending(&self) -> bool {
        matches!(
            self.state,
            SessionState::Authenticated {
                welcome_pending: true,
                ..
            }
        )
    }

    /// Start a login attempt.
    ///
    /// Clears any stale display name before the verifier call resolves and
    /// moves to `Authenticating`. Returns the id the caller must present
    /// when the verdict comes back.
    pub fn begin_login(&mut self) -> AttemptId {
        self.state = SessionState::Authenticating;
        self.attempt += 1;
        AttemptId(self.attempt)
    }

    /// Apply the verdict of a login attempt.
    ///
    /// Returns `true` if the verdict was applied. A verdict whose attempt id
    /// is no longer current (a logout or a newer attempt happened meanwhile)
    /// is discarded and leaves the session untouched.
    pub fn resolve_login(&mut self, attempt: AttemptId, verdict: Verdict) -> bool {
        if attempt.0 != self.attempt {
            return false;
        }
        self.state = match verdict {
            Verdict::Approved { first_name } => SessionState::Authenticated {
                display_name: first_name,
                welcome_pending: true,
            },
            Verdict::Denied { .. } => SessionState::Unauthenticated,
        };
        true
    }

    /// Reset to `Unauthenticated`, clearing the display name and welcome
    /// flag and invalidating any attempt still in flight. Idempotent.
    pub fn logout(&mut self) {
        self.state = SessionState::Unauthenticated;
        self.attempt += 1;
    }

    /// Mark the one-time welcome notice as seen.
    ///
    /// Idempotent; a no-op unless authenticated.
    pub fn acknowledge_welcome(&mut self) {
        if let SessionState::Authenticated {
            welcome_pending, ..
        } = &mut self.state
        {
            *welcome_pending = false;
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approved(name: &str) -> Verdict {
        Verdict::Approved {
            first_name: name.to_string(),
        }
    }

    const DENIED: Verdict = Verdict::Denied { message: None };

    #[test]
    fn starts_unauthenticated() {
        let session = Session::new();
        assert_eq!(session.state(), &SessionState::Unauthenticated);
        assert!(!session.is_authenticated());
        assert_eq!(session.display_name(), None);
        assert!(!session.welcome_pending());
    }

    #[test]
    fn approved_verdict_authenticates_with_welcome_pending() {
        let mut session = Session::new();
        let attempt = session.begin_login();
        assert_eq!(session.state(), &SessionState::Authenticating);

        assert!(session.resolve_login(attempt, approved("Alex")));
        assert!(session.is_authenticated());
        assert_eq!(session.display_name(), Some("Alex"));
        assert!(session.welcome_pending());
    }

    #[test]
    fn denied_verdict_returns_to_unauthenticated() {
        let mut session = Session::new();
        let attempt = session.begin_login();
        assert!(session.resolve_login(attempt, DENIED));
        assert_eq!(session.state(), &SessionState::Unauthenticated);
        assert_eq!(session.display_name(), None);
    }

    #[test]
    fn begin_login_clears_stale_display_name() {
        let mut session = Session::new();
        let attempt = session.begin_login();
        session.resolve_login(attempt, approved("Alex"));

        session.begin_login();
        assert_eq!(session.state(), &SessionState::Authenticating);
        assert_eq!(session.display_name(), None);
        assert!(!session.welcome_pending());
    }

    #[test]
    fn stale_attempt_is_discarded() {
        let mut session = Session::new();
        let first = session.begin_login();
        let second = session.begin_login();

        assert!(!session.resolve_login(first, approved("Stale")));
        assert_eq!(session.state(), &SessionState::Authenticating);

        assert!(session.resolve_login(second, DENIED));
        assert_eq!(session.state(), &SessionState::Unauthenticated);
    }

    #[test]
    fn logout_invalidates_in_flight_attempt() {
        let mut session = Session::new();
        let attempt = session.begin_login();
        session.logout();

        assert!(!session.resolve_login(attempt, approved("Late")));
        assert_eq!(session.state(), &SessionState::Unauthenticated);
        assert_eq!(session.display_name(), None);
    }

    #[test]
    fn logout_is_idempotent() {
        let mut session = Session::new();
        let attempt = session.begin_login();
        session.resolve_login(attempt, approved("Alex"));

        session.logout();
        session.logout();
        assert_eq!(session.state(), &SessionState::Unauthenticated);
    }

    #[test]
    fn acknowledge_after_logout_is_a_no_op() {
        let mut session = Session::new();
        let attempt = session.begin_login();
        session.resolve_login(attempt, approved("Alex"));

        session.logout();
        session.acknowledge_welcome();
        assert_eq!(session.state(), &SessionState::Unauthenticated);
        assert!(!session.welcome_pending());
    }

    #[test]
    fn welcome_acknowledgment_is_one_shot_and_idempotent() {
        let mut session = Session::new();
        let attempt = session.begin_login();
        session.resolve_login(attempt, approved("Alex"));
        assert!(session.welcome_pending());

        session.acknowledge_welcome();
        assert!(!session.welcome_pending());

        session.acknowledge_welcome();
        assert!(!session.welcome_pending());
        assert!(session.is_authenticated());
    }
}
