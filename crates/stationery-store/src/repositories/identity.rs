//! Identity repository: the credential store.

use std::collections::BTreeSet;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use uuid::Uuid;

use stationery_auth::{CredentialStore, IdentityRegistry};
use stationery_core::error::AppError;
use stationery_core::result::AppResult;
use stationery_entity::{Identity, NewIdentity, RoleName, normalize_identifier};

use super::role::RoleRepository;

/// Identities keyed by normalized identifier.
///
/// Every role an identity references must be defined in the attached
/// [`RoleRepository`]; the Identity → Role direction lives on the identity,
/// and [`find_by_role`](Self::find_by_role) answers the inverse.
#[derive(Debug)]
pub struct IdentityRepository {
    identities: DashMap<String, Identity>,
    roles: Arc<RoleRepository>,
}

impl IdentityRepository {
    /// Create an empty repository validating against `roles`.
    pub fn new(roles: Arc<RoleRepository>) -> Self {
        Self {
            identities: DashMap::new(),
            roles,
        }
    }

    /// The role table identities are checked against.
    pub fn roles(&self) -> &Arc<RoleRepository> {
        &self.roles
    }

    /// Insert a new identity.
    pub fn create(&self, new_identity: NewIdentity) -> AppResult<Identity> {
        let identifier = normalize_identifier(&new_identity.identifier);
        if identifier.is_empty() {
            return Err(AppError::validation("Identifier must not be empty"));
        }
        if new_identity.secret_hash.is_empty() {
            return Err(AppError::validation("Secret hash must not be empty"));
        }
        self.roles.ensure_defined(&new_identity.roles)?;

        match self.identities.entry(identifier.clone()) {
            Entry::Occupied(_) => Err(AppError::conflict(format!(
                "Identifier '{identifier}' is already registered"
            ))),
            Entry::Vacant(slot) => {
                let now = Utc::now();
                let identity = Identity {
                    id: Uuid::now_v7(),
                    identifier,
                    secret_hash: new_identity.secret_hash,
                    display_name: new_identity.display_name,
                    roles: new_identity.roles,
                    created_at: now,
                    updated_at: now,
                };
                slot.insert(identity.clone());
                Ok(identity)
            }
        }
    }

    /// Look up by identifier (normalized here).
    pub fn get(&self, identifier: &str) -> Option<Identity> {
        self.identities
            .get(&normalize_identifier(identifier))
            .map(|entry| entry.value().clone())
    }

    /// Grant `role` to an identity.
    pub fn assign_role(&self, identifier: &str, role: RoleName) -> AppResult<Identity> {
        self.roles.ensure_defined([&role])?;
        self.update(identifier, |identity| {
            identity.roles.insert(role);
            Ok(())
        })
    }

    /// Remove `role` from an identity. Removing a role it does not hold is
    /// a no-op.
    pub fn revoke_role(&self, identifier: &str, role: &RoleName) -> AppResult<Identity> {
        self.update(identifier, |identity| {
            identity.roles.remove(role);
            Ok(())
        })
    }

    /// Replace an identity's role set.
    pub fn set_roles(&self, identifier: &str, roles: BTreeSet<RoleName>) -> AppResult<Identity> {
        self.roles.ensure_defined(&roles)?;
        self.update(identifier, |identity| {
            identity.roles = roles;
            Ok(())
        })
    }

    /// Replace an identity's secret hash.
    pub fn set_secret_hash(&self, identifier: &str, secret_hash: String) -> AppResult<Identity> {
        if secret_hash.is_empty() {
            return Err(AppError::validation("Secret hash must not be empty"));
        }
        self.update(identifier, |identity| {
            identity.secret_hash = secret_hash;
            Ok(())
        })
    }

    /// Remove an identity.
    pub fn delete(&self, identifier: &str) -> AppResult<()> {
        let identifier = normalize_identifier(identifier);
        self.identities
            .remove(&identifier)
            .map(|_| ())
            .ok_or_else(|| AppError::not_found(format!("Identity '{identifier}' not found")))
    }

    /// Identities holding `role`, ordered by identifier.
    pub fn find_by_role(&self, role: &RoleName) -> Vec<Identity> {
        let mut holders: Vec<Identity> = self
            .identities
            .iter()
            .filter(|entry| entry.has_role(role))
            .map(|entry| entry.value().clone())
            .collect();
        holders.sort_by(|a, b| a.identifier.cmp(&b.identifier));
        holders
    }

    pub fn count(&self) -> usize {
        self.identities.len()
    }

    fn update(
        &self,
        identifier: &str,
        apply: impl FnOnce(&mut Identity) -> AppResult<()>,
    ) -> AppResult<Identity> {
        let identifier = normalize_identifier(identifier);
        let mut entry = self
            .identities
            .get_mut(&identifier)
            .ok_or_else(|| AppError::not_found(format!("Identity '{identifier}' not found")))?;
        apply(entry.value_mut())?;
        entry.updated_at = Utc::now();
        Ok(entry.value().clone())
    }
}

#[async_trait]
impl CredentialStore for IdentityRepository {
    async fn find_by_identifier(&self, identifier: &str) -> AppResult<Option<Identity>> {
        Ok(self.get(identifier))
    }

    async fn exists_by_identifier(&self, identifier: &str) -> AppResult<bool> {
        Ok(self
            .identities
            .contains_key(&normalize_identifier(identifier)))
    }
}

#[async_trait]
impl IdentityRegistry for IdentityRepository {
    async fn insert(&self, new_identity: NewIdentity) -> AppResult<Identity> {
        self.create(new_identity)
    }
}
