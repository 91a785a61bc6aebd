//! Identifier + secret verification for the login flow.

use std::sync::Arc;

use thiserror::Error;
use tracing::{debug, error, info, warn};

use stationery_core::error::AppError;
use stationery_entity::{Identity, normalize_identifier};

use super::store::CredentialStore;
use crate::password::PasswordHasher;

/// Verified against when the identifier is unknown, so that path costs a
/// full hash verification too.
const DUMMY_SECRET: &str = "stationery-dummy-secret";

/// Login failure. Unknown identifier and wrong secret are the same value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AuthnError {
    /// Identifier unknown or secret mismatch.
    #[error("invalid credentials")]
    InvalidCredentials,
}

impl From<AuthnError> for AppError {
    fn from(_: AuthnError) -> Self {
        AppError::authentication("Invalid credentials")
    }
}

/// Checks an identifier/secret pair against the credential store.
pub struct Authenticator {
    store: Arc<dyn CredentialStore>,
    hasher: PasswordHasher,
    dummy_hash: String,
}

impl std::fmt::Debug for Authenticator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Authenticator").finish_non_exhaustive()
    }
}

impl Authenticator {
    /// Creates an authenticator over `store`.
    pub fn new(store: Arc<dyn CredentialStore>, hasher: PasswordHasher) -> Result<Self, AppError> {
        let dummy_hash = hasher.hash_password(DUMMY_SECRET)?;
        Ok(Self {
            store,
            hasher,
            dummy_hash,
        })
    }

    /// Returns the identity (roles included) when `secret` matches the
    /// stored hash for `identifier`.
    ///
    /// Store and hash-format errors are logged and reported as
    /// [`AuthnError::InvalidCredentials`]; nothing else escapes.
    pub async fn authenticate(&self, identifier: &str, secret: &str) -> Result<Identity, AuthnError> {
        let identifier = normalize_identifier(identifier);

        let found = match self.store.find_by_identifier(&identifier).await {
            Ok(found) => found,
            Err(e) => {
                warn!(identifier = %identifier, error = %e, "Credential lookup failed");
                None
            }
        };

        let Some(identity) = found else {
            let _ = self.hasher.verify_password(secret, &self.dummy_hash);
            debug!(identifier = %identifier, "Login rejected: unknown identifier");
            return Err(AuthnError::InvalidCredentials);
        };

        match self.hasher.verify_password(secret, &identity.secret_hash) {
            Ok(true) => {
                info!(identifier = %identity.identifier, "Identity authenticated");
                Ok(identity)
            }
            Ok(false) => {
                debug!(identifier = %identifier, "Login rejected: secret mismatch");
                Err(AuthnError::InvalidCredentials)
            }
            Err(e) => {
                error!(identifier = %identifier, error = %e, "Stored secret hash is unusable");
                Err(AuthnError::InvalidCredentials)
            }
        }
    }
}
