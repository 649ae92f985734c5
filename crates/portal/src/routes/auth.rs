//! Authentication route handlers.
//!
//! Handles the entry/login view, logout, and the one-time welcome notice.
//! The credential check itself happens in the auth service; these handlers
//! only translate between forms/redirects and the session operations.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{Query, State},
    response::{IntoResponse, Redirect, Response},
};
use secrecy::SecretString;
use serde::Deserialize;

use driftwood_core::Credential;

use crate::services::auth::AuthService;
use crate::state::AppState;

/// Single generic line shown for every failed login. Wrong credentials and
/// verifier trouble are deliberately indistinguishable here.
const LOGIN_FAILED_MESSAGE: &str =
    "Authentication failed. Please verify your credentials or try again.";

/// Login form data. Both fields are caller-supplied, non-validated strings.
#[derive(Deserialize)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

/// Query parameters for error display.
#[derive(Debug, Deserialize)]
pub struct MessageQuery {
    pub error: Option<String>,
}

/// Login page template.
#[derive(Template, WebTemplate)]
#[template(path = "auth/login.html")]
pub struct LoginTemplate {
    pub error: Option<&'static str>,
}

/// Display the entry/login page.
pub async fn login_page(Query(query): Query<MessageQuery>) -> impl IntoResponse {
    LoginTemplate {
        error: query.error.map(|_| LOGIN_FAILED_MESSAGE),
    }
}

/// Handle login form submission.
///
/// Every verifier outcome folds into a boolean: success redirects into the
/// library, failure redirects back to the form, which re-enables and shows
/// the inline message.
pub async fn login(State(state): State<AppState>, Form(form): Form<LoginForm>) -> Response {
    let credential = Credential::new(form.email, SecretString::from(form.password));

    let service = AuthService::new(state.session(), state.verifier());
    if service.login(credential).await {
        Redirect::to("/dashboard").into_response()
    } else {
        Redirect::to("/?error=auth").into_response()
    }
}

/// Handle logout.
///
/// Resets the in-memory session and returns to the entry view.
pub async fn logout(State(state): State<AppState>) -> Redirect {
    AuthService::new(state.session(), state.verifier()).logout();
    Redirect::to("/")
}

/// Dismiss the one-time welcome notice.
///
/// Safe to call in any state; acknowledging while unauthenticated is a
/// no-op and the gate on `/dashboard` handles the rest.
pub async fn dismiss_welcome(State(state): State<AppState>) -> Redirect {
    AuthService::new(state.session(), state.verifier()).acknowledge_welcome();
    Redirect::to("/dashboard")
}
