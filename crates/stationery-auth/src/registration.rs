//! Self-service identity registration.

use std::collections::BTreeSet;
use std::sync::Arc;

use tracing::info;

use stationery_core::config::AuthConfig;
use stationery_core::error::AppError;
use stationery_entity::{Identity, NewIdentity, RoleName, normalize_identifier};

use crate::authn::IdentityRegistry;
use crate::password::PasswordHasher;

/// Creates identities holding the configured default role.
pub struct IdentityRegistrar {
    registry: Arc<dyn IdentityRegistry>,
    hasher: PasswordHasher,
    default_role: RoleName,
}

impl std::fmt::Debug for IdentityRegistrar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IdentityRegistrar")
            .field("default_role", &self.default_role)
            .finish_non_exhaustive()
    }
}

impl IdentityRegistrar {
    pub fn new(
        registry: Arc<dyn IdentityRegistry>,
        hasher: PasswordHasher,
        default_role: RoleName,
    ) -> Self {
        Self {
            registry,
            hasher,
            default_role,
        }
    }

    /// Build with `auth.default_role` as the assigned role.
    pub fn from_config(
        registry: Arc<dyn IdentityRegistry>,
        hasher: PasswordHasher,
        config: &AuthConfig,
    ) -> Result<Self, AppError> {
        let default_role = RoleName::parse(&config.default_role)?;
        Ok(Self::new(registry, hasher, default_role))
    }

    pub fn default_role(&self) -> &RoleName {
        &self.default_role
    }

    /// Register a new identity.
    ///
    /// Rejects blank fields and an identifier that is already taken. The
    /// secret is stored only as an Argon2id hash.
    pub async fn register(
        &self,
        identifier: &str,
        secret: &str,
        display_name: &str,
    ) -> Result<Identity, AppError> {
        let identifier = normalize_identifier(identifier);
        let display_name = display_name.trim();

        if identifier.is_empty() {
            return Err(AppError::validation("Identifier must not be blank"));
        }
        if secret.trim().is_empty() {
            return Err(AppError::validation("Secret must not be blank"));
        }
        if display_name.is_empty() {
            return Err(AppError::validation("Display name must not be blank"));
        }

        if self.registry.exists_by_identifier(&identifier).await? {
            return Err(AppError::conflict(format!(
                "Identifier '{identifier}' is already registered"
            )));
        }

        let secret_hash = self.hasher.hash_password(secret)?;
        let identity = self
            .registry
            .insert(NewIdentity {
                identifier,
                secret_hash,
                display_name: display_name.to_string(),
                roles: BTreeSet::from([self.default_role.clone()]),
            })
            .await?;

        info!(identifier = %identity.identifier, role = %self.default_role, "Identity registered");
        Ok(identity)
    }
}
