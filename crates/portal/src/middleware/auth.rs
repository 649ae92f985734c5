//! Access-gate extractor.
//!
//! Provides an extractor that requires an authenticated session in route
//! handlers. The decision itself is the core gate function; this adapter
//! only turns its verdict into either the visitor details or a redirect,
//! so unauthenticated requests never reach a protected handler and no
//! protected markup is rendered for them.

use axum::{
    extract::FromRequestParts,
    http::request::Parts,
    response::{IntoResponse, Redirect, Response},
};

use driftwood_core::gate::{self, GateDecision};

use crate::state::AppState;

/// The authenticated visitor, as seen by protected handlers.
#[derive(Debug, Clone)]
pub struct Visitor {
    /// Display name reported by the verifier at login time.
    pub display_name: String,
    /// Whether the one-time welcome notice is still owed.
    pub welcome_pending: bool,
}

/// Extractor that requires an authenticated session.
///
/// If the session is unauthenticated (or still authenticating), the
/// request is redirected to the entry view.
///
/// # Example
///
/// ```rust,ignore
/// async fn protected_handler(
///     RequireAuth(visitor): RequireAuth,
/// ) -> impl IntoResponse {
///     format!("Hello, {}!", visitor.display_name)
/// }
/// ```
pub struct RequireAuth(pub Visitor);

/// Rejection returned when the gate refuses entry.
pub struct RedirectToLogin;

impl IntoResponse for RedirectToLogin {
    fn into_response(self) -> Response {
        Redirect::to("/").into_response()
    }
}

impl FromRequestParts<AppState> for RequireAuth {
    type Rejection = RedirectToLogin;

    async fn from_request_parts(
        _parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        match gate::evaluate(&state.session().snapshot()) {
            GateDecision::Proceed {
                display_name,
                welcome_pending,
            } => Ok(Self(Visitor {
                display_name,
                welcome_pending,
            })),
            GateDecision::RedirectToLogin => Err(RedirectToLogin),
        }
    }
}
