//! Portal configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All variables are optional; the portal runs with zero environment.
//!
//! - `PORTAL_HOST` - Bind address (default: 127.0.0.1)
//! - `PORTAL_PORT` - Listen port (default: 3000)
//! - `PORTAL_CATALOG_PATH` - Path to the catalog feed file
//!   (default: crates/portal/content/products.json)
//! - `PORTAL_VERIFIER_URL` - Credential verifier endpoint
//!   (default: the hosted webhook)

use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use thiserror::Error;

/// Credential verifier endpoint used when `PORTAL_VERIFIER_URL` is unset.
const DEFAULT_VERIFIER_URL: &str = "https://n8n.srv768302.hstgr.cloud/webhook/lead-magnet-auth";

/// Catalog feed file used when `PORTAL_CATALOG_PATH` is unset.
const DEFAULT_CATALOG_PATH: &str = "crates/portal/content/products.json";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Portal application configuration.
#[derive(Debug, Clone)]
pub struct PortalConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Path to the catalog feed (a JSON array of product records)
    pub catalog_path: PathBuf,
    /// Credential verifier endpoint
    pub verifier_url: String,
}

impl PortalConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is present but unparseable.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let host = get_env_or_default("PORTAL_HOST", "127.0.0.1")
            .parse::<IpAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar("PORTAL_HOST".to_string(), e.to_string()))?;
        let port = get_env_or_default("PORTAL_PORT", "3000")
            .parse::<u16>()
            .map_err(|e| ConfigError::InvalidEnvVar("PORTAL_PORT".to_string(), e.to_string()))?;
        let catalog_path = PathBuf::from(get_env_or_default(
            "PORTAL_CATALOG_PATH",
            DEFAULT_CATALOG_PATH,
        ));
        let verifier_url = get_env_or_default("PORTAL_VERIFIER_URL", DEFAULT_VERIFIER_URL);
        url::Url::parse(&verifier_url).map_err(|e| {
            ConfigError::InvalidEnvVar("PORTAL_VERIFIER_URL".to_string(), e.to_string())
        })?;

        Ok(Self {
            host,
            port,
            catalog_path,
            verifier_url,
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
