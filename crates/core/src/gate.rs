//! Access-gate decisions.
//!
//! The gate is a pure function from session state to a navigation decision;
//! it never performs navigation itself. The portal consumes the decision in
//! an extractor that either hands the handler the authenticated visitor or
//! rejects with a redirect to the entry view, so no protected markup is ever
//! rendered for an unauthenticated request.

use crate::session::SessionState;

/// What a protected view should do for the current session state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GateDecision {
    /// Render the protected content.
    Proceed {
        /// Display name of the authenticated user.
        display_name: String,
        /// Whether the one-time welcome notice is still owed.
        welcome_pending: bool,
    },
    /// Send the caller back to the entry/login view without rendering.
    RedirectToLogin,
}

/// Evaluate the gate for a session state.
///
/// `Authenticating` counts as not yet authenticated: a session mid-flight
/// from a prior view must not see protected content early.
#[must_use]
pub fn evaluate(state: &SessionState) -> GateDecision {
    match state {
        SessionState::Authenticated {
            display_name,
            welcome_pending,
        } => GateDecision::Proceed {
            display_name: display_name.clone(),
            welcome_pending: *welcome_pending,
        },
        SessionState::Unauthenticated | SessionState::Authenticating => {
            GateDecision::RedirectToLogin
        }
    }
}

/// Whether the one-time welcome overlay should be shown.
///
/// `content_ready` reflects whether the page's own data dependency has
/// settled (successfully or in error); gating on it keeps the overlay from
/// flashing before the page has anything to show behind it.
#[must_use]
pub const fn overlay_visible(state: &SessionState, content_ready: bool) -> bool {
    content_ready
        && matches!(
            state,
            SessionState::Authenticated {
                welcome_pending: true,
                ..
            }
        )
}
