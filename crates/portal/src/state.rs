//! Application state shared across handlers.

use std::sync::Arc;

use crate::catalog::CatalogReader;
use crate::config::PortalConfig;
use crate::models::SharedSession;
use crate::services::verifier::VerifierClient;

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc`. It owns the single
/// process-local session record along with the two external collaborators:
/// the credential verifier client and the catalog feed reader.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: PortalConfig,
    session: SharedSession,
    verifier: VerifierClient,
    catalog: CatalogReader,
}

impl AppState {
    /// Create a new application state from configuration.
    #[must_use]
    pub fn new(config: PortalConfig) -> Self {
        let verifier = VerifierClient::new(config.verifier_url.clone());
        let catalog = CatalogReader::new(config.catalog_path.clone());

        Self {
            inner: Arc::new(AppStateInner {
                config,
                session: SharedSession::new(),
                verifier,
                catalog,
            }),
        }
    }

    /// Get a reference to the portal configuration.
    #[must_use]
    pub fn config(&self) -> &PortalConfig {
        &self.inner.config
    }

    /// Get a reference to the session record.
    #[must_use]
    pub fn session(&self) -> &SharedSession {
        &self.inner.session
    }

    /// Get a reference to the credential verifier client.
    #[must_use]
    pub fn verifier(&self) -> &VerifierClient {
        &self.inner.verifier
    }

    /// Get a reference to the catalog feed reader.
    #[must_use]
    pub fn catalog(&self) -> &CatalogReader {
        &self.inner.catalog
    }
}
