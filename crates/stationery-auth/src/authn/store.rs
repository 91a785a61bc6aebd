//! Storage seams consumed by the authentication flow.

use std::collections::BTreeSet;
use std::sync::Arc;

use async_trait::async_trait;

use stationery_core::AppResult;
use stationery_entity::{Identity, NewIdentity, RoleName};

/// Read access to persisted identities.
///
/// Identifiers passed in are already normalized.
#[async_trait]
pub trait CredentialStore: Send + Sync {
    /// Look up an identity by its login identifier.
    async fn find_by_identifier(&self, identifier: &str) -> AppResult<Option<Identity>>;

    /// Whether an identity with this identifier exists.
    async fn exists_by_identifier(&self, identifier: &str) -> AppResult<bool>;
}

/// A credential store that also accepts new identities.
#[async_trait]
pub trait IdentityRegistry: CredentialStore {
    /// Persist a new identity. Fails on a taken identifier or an
    /// undefined role name.
    async fn insert(&self, new_identity: NewIdentity) -> AppResult<Identity>;
}

/// The trusted identity state the request gate binds into a context.
#[derive(Clone, PartialEq, Eq)]
pub struct LoadedIdentity {
    /// Login identifier.
    pub identifier: String,
    /// Stored secret hash.
    pub secret_hash: String,
    /// Current role set.
    pub roles: BTreeSet<RoleName>,
}

impl std::fmt::Debug for LoadedIdentity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoadedIdentity")
            .field("identifier", &self.identifier)
            .field("secret_hash", &"[redacted]")
            .field("roles", &self.roles)
            .finish()
    }
}

impl From<Identity> for LoadedIdentity {
    fn from(identity: Identity) -> Self {
        Self {
            identifier: identity.identifier,
            secret_hash: identity.secret_hash,
            roles: identity.roles,
        }
    }
}

/// Resolves a token subject to current identity state.
///
/// Implementations fail closed: any lookup error is reported as `None`.
#[async_trait]
pub trait IdentityLoader: Send + Sync {
    /// Load the identity with this identifier.
    async fn load_by_identifier(&self, identifier: &str) -> Option<LoadedIdentity>;
}

/// [`IdentityLoader`] backed by a [`CredentialStore`].
#[derive(Clone)]
pub struct StoreIdentityLoader {
    store: Arc<dyn CredentialStore>,
}

impl StoreIdentityLoader {
    /// Wrap a credential store.
    pub fn new(store: Arc<dyn CredentialStore>) -> Self {
        Self { store }
    }
}

impl std::fmt::Debug for StoreIdentityLoader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StoreIdentityLoader").finish_non_exhaustive()
    }
}

#[async_trait]
impl IdentityLoader for StoreIdentityLoader {
    async fn load_by_identifier(&self, identifier: &str) -> Option<LoadedIdentity> {
        match self.store.find_by_identifier(identifier).await {
            Ok(found) => found.map(LoadedIdentity::from),
            Err(e) => {
                tracing::warn!(identifier = %identifier, error = %e, "Identity lookup failed; treating as not found");
                None
            }
        }
    }
}
