//! Authentication service.
//!
//! Drives the session state machine around the credential verifier call
//! and owns the failure timing floor: a failed login attempt, whatever the
//! cause, does not report back before [`FAILURE_FLOOR`] has elapsed from
//! invocation. Approved attempts return as soon as the verifier resolves.

use std::time::Duration;

use tokio::time::Instant;

use driftwood_core::{Credential, Verdict};

use crate::models::SharedSession;
use crate::services::verifier::VerifierClient;

/// Minimum elapsed time before a failed login attempt reports back.
///
/// Failures are never reported faster than a slow success would be,
/// regardless of how quickly the verifier answers.
pub(crate) const FAILURE_FLOOR: Duration = Duration::from_millis(10_000);

/// Authentication service.
///
/// Handles login, logout, and welcome acknowledgment against the single
/// process-local session.
pub struct AuthService<'a> {
    session: &'a SharedSession,
    verifier: &'a VerifierClient,
}

impl<'a> AuthService<'a> {
    /// Create a new authentication service.
    #[must_use]
    pub const fn new(session: &'a SharedSession, verifier: &'a VerifierClient) -> Self {
        Self { session, verifier }
    }

    /// Attempt a login with the given credential.
    ///
    /// Marks the session `Authenticating` (clearing any stale display name)
    /// before the verifier is called. Transport failures, explicit denials,
    /// and malformed verdicts are all folded into `false`, after the
    /// failure floor has been held. Returns `true` only when an approved
    /// verdict was applied to the session; a verdict from an attempt that
    /// is no longer current (a logout happened mid-flight) is discarded.
    pub async fn login(&self, credential: Credential) -> bool {
        let started = Instant::now();
        let attempt = self.session.begin_login();
        tracing::info!("login attempt started");

        let verdict = match self.verifier.verify(&credential).await {
            Ok(verdict) => verdict,
            Err(err) => {
                tracing::warn!(error = %err, "credential verifier unreachable");
                Verdict::Denied { message: None }
            }
        };

        let approved = verdict.is_approved();
        if approved {
            tracing::info!("login approved");
        } else {
            if let Verdict::Denied {
                message: Some(message),
            } = &verdict
            {
                tracing::warn!(reason = %message, "login denied");
            } else {
                tracing::warn!("login denied");
            }
            hold_failure_floor(started).await;
        }

        let applied = self.session.resolve_login(attempt, verdict);
        if !applied {
            tracing::info!("discarding verdict from a superseded login attempt");
        }

        approved && applied
    }

    /// Reset the session to unauthenticated. No verifier call; idempotent.
    pub fn logout(&self) {
        self.session.logout();
        tracing::info!("logged out");
    }

    /// Mark the one-time welcome notice as seen. Idempotent; a no-op
    /// unless authenticated.
    pub fn acknowledge_welcome(&self) {
        self.session.acknowledge_welcome();
    }
}

/// Suspend until [`FAILURE_FLOOR`] has elapsed since `started`.
async fn hold_failure_floor(started: Instant) {
    if let Some(remaining) = FAILURE_FLOOR.checked_sub(started.elapsed()) {
        tokio::time::sleep(remaining).await;
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    use axum::{Json, Router, routing::post};
    use driftwood_core::SessionState;
    use secrecy::SecretString;
    use serde_json::json;

    /// Bind a stub verifier on an ephemeral port and return its base URL.
    async fn serve_stub(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{addr}")
    }

    fn credential() -> Credential {
        Credential::new(
            "user@example.com".to_string(),
            SecretString::from("correct horse"),
        )
    }

    #[tokio::test(start_paused = true)]
    async fn approved_login_returns_without_the_floor() {
        let endpoint = serve_stub(Router::new().route(
            "/",
            post(|| async { Json(json!({"success": true, "firstName": "Alex"})) }),
        ))
        .await;

        let session = SharedSession::new();
        let verifier = VerifierClient::new(endpoint);
        let service = AuthService::new(&session, &verifier);

        let started = Instant::now();
        assert!(service.login(credential()).await);
        assert!(started.elapsed() < FAILURE_FLOOR);

        assert_eq!(
            session.snapshot(),
            SessionState::Authenticated {
                display_name: "Alex".to_string(),
                welcome_pending: true,
            }
        );
    }

    #[tokio::test(start_paused = true)]
    async fn denied_verdict_holds_the_failure_floor() {
        let endpoint = serve_stub(Router::new().route(
            "/",
            post(|| async { Json(json!({"success": false, "message": "nope"})) }),
        ))
        .await;

        let session = SharedSession::new();
        let verifier = VerifierClient::new(endpoint);
        let service = AuthService::new(&session, &verifier);

        let started = Instant::now();
        assert!(!service.login(credential()).await);
        assert!(started.elapsed() >= FAILURE_FLOOR);

        assert_eq!(session.snapshot(), SessionState::Unauthenticated);
    }

    #[tokio::test(start_paused = true)]
    async fn unreachable_verifier_is_a_denial_with_the_floor() {
        let session = SharedSession::new();
        // Nothing listens on this port; the connection is refused.
        let verifier = VerifierClient::new("http://127.0.0.1:9");
        let service = AuthService::new(&session, &verifier);

        let started = Instant::now();
        assert!(!service.login(credential()).await);
        assert!(started.elapsed() >= FAILURE_FLOOR);

        assert_eq!(session.snapshot(), SessionState::Unauthenticated);
    }

    #[tokio::test(start_paused = true)]
    async fn logout_mid_flight_discards_a_late_approval() {
        let endpoint = serve_stub(Router::new().route(
            "/",
            post(|| async {
                tokio::time::sleep(Duration::from_secs(5)).await;
                Json(json!({"success": true, "firstName": "Late"}))
            }),
        ))
        .await;

        let session = SharedSession::new();
        let verifier = VerifierClient::new(endpoint);

        let login = tokio::spawn({
            let session = session.clone();
            let verifier = verifier.clone();
            async move {
                AuthService::new(&session, &verifier)
                    .login(credential())
                    .await
            }
        });

        // Let the attempt begin, then log out underneath it.
        tokio::task::yield_now().await;
        AuthService::new(&session, &verifier).logout();

        assert!(!login.await.unwrap());
        assert_eq!(session.snapshot(), SessionState::Unauthenticated);
    }
}
