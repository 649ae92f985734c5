//! Login credential type.

use secrecy::SecretString;

/// One email/password pair, bound for the credential verifier.
///
/// Transient: exists only for the duration of a single verification call
/// and is never persisted or logged. `Debug` redacts the password.
pub struct Credential {
    email: String,
    password: SecretString,
}

impl Credential {
    /// Bundle a credential for one verification call.
    #[must_use]
    pub const fn new(email: String, password: SecretString) -> Self {
        Self { email, password }
    }

    /// The account email, as the caller supplied it (not validated here).
    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    /// The password secret. Exposed only at the wire boundary.
    #[must_use]
    pub const fn password(&self) -> &SecretString {
        &self.password
    }
}

impl std::fmt::Debug for Credential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credential")
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .finish()
    }
}
