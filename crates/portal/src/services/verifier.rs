//! Credential verifier client.
//!
//! The verifier is a remote HTTPS endpoint that takes an email/password
//! pair and answers with a verdict. This client owns the one place the
//! password crosses the wire. Non-2xx statuses and unparseable bodies are
//! folded into [`Verdict::Denied`] here; only transport failures surface
//! as errors, and the auth service folds those into denial too.

use driftwood_core::{Credential, Verdict};
use secrecy::ExposeSecret;
use thiserror::Error;

/// Errors that can occur when calling the credential verifier.
#[derive(Debug, Error)]
pub enum VerifierError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

/// Client for the credential verifier endpoint.
#[derive(Debug, Clone)]
pub struct VerifierClient {
    client: reqwest::Client,
    endpoint: String,
}

impl VerifierClient {
    /// Create a client for the verifier at `endpoint`.
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }

    /// Submit a credential for verification.
    ///
    /// # Errors
    ///
    /// Returns an error only when the request cannot be completed at the
    /// transport level; every answer the verifier actually gives comes back
    /// as a [`Verdict`].
    pub async fn verify(&self, credential: &Credential) -> Result<Verdict, VerifierError> {
        let body = serde_json::json!({
            "email": credential.email(),
            "password": credential.password().expose_secret(),
        });

        let response = self
            .client
            .post(&self.endpoint)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(status = %status, "verifier returned non-success status");
            return Ok(Verdict::Denied { message: None });
        }

        let text = response.text().await?;
        Ok(Verdict::from_json(&text))
    }
}
