//! HTTP route handlers for the portal.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                - Entry/login page
//! GET  /health          - Liveness check
//! GET  /health/ready    - Readiness check (catalog feed reachable)
//!
//! # Auth
//! POST /login           - Login action
//! POST /logout          - Logout action
//! POST /welcome         - Dismiss the one-time welcome notice
//!
//! # Library (requires auth)
//! GET  /dashboard       - Catalog grid
//! GET  /products/{id}   - Product detail
//!
//! # Feed
//! GET  /api/products    - Catalog feed (JSON)
//! ```

pub mod api;
pub mod auth;
pub mod dashboard;
pub mod products;

use axum::{
    Router,
    extract::State,
    http::StatusCode,
    routing::{get, post},
};
use tower_http::{services::ServeDir, trace::TraceLayer};

use crate::state::AppState;

/// Create the auth routes router.
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/login", post(auth::login))
        .route("/logout", post(auth::logout))
        .route("/welcome", post(auth::dismiss_welcome))
}

/// Create the protected library routes router.
pub fn library_routes() -> Router<AppState> {
    Router::new()
        .route("/dashboard", get(dashboard::index))
        .route("/products/{id}", get(products::show))
}

/// Create the full application router.
#[must_use]
pub fn router(state: AppState) -> Router {
    Router::new()
        // Entry/login page
        .route("/", get(auth::login_page))
        // Auth actions
        .merge(auth_routes())
        // Protected library
        .merge(library_routes())
        // Catalog feed
        .route("/api/products", get(api::products))
        // Health checks
        .route("/health", get(health))
        .route("/health/ready", get(readiness))
        .nest_service("/static", ServeDir::new("crates/portal/static"))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Liveness health check endpoint.
///
/// Returns "ok" if the server is running. Does not check dependencies.
async fn health() -> &'static str {
    "ok"
}

/// Readiness health check endpoint.
///
/// Verifies the catalog feed file is reachable before returning OK.
/// Returns 503 Service Unavailable if it is not.
async fn readiness(State(state): State<AppState>) -> StatusCode {
    match tokio::fs::metadata(state.catalog().path()).await {
        Ok(_) => StatusCode::OK,
        Err(_) => StatusCode::SERVICE_UNAVAILABLE,
    }
}
