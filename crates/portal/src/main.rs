//! Driftwood Portal - gated digital-asset library.
//!
//! This binary serves the library portal on port 3000.
//!
//! # Architecture
//!
//! - Axum web framework with askama server-side rendering
//! - A remote webhook verifies credentials; the session lives in process
//!   memory for the lifetime of the binary
//! - The catalog is a read-only JSON feed, re-read per protected view
//!
//! The binary holds no credential store and no database: authentication is
//! delegated entirely to the verifier endpoint.

#![cfg_attr(not(test), forbid(unsafe_code))]

use driftwood_portal::config::PortalConfig;
use driftwood_portal::routes;
use driftwood_portal::state::AppState;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    // Load configuration from environment (all variables have defaults)
    let config = PortalConfig::from_env().expect("Failed to load configuration");

    // Initialize tracing with EnvFilter
    // Defaults to info level for our crate if RUST_LOG is not set
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "driftwood_portal=info,tower_http=debug".into());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    let addr = config.socket_addr();

    // Build application state and router
    let state = AppState::new(config);
    let app = routes::router(state);

    tracing::info!("portal listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}
