//! Identity entity model.

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::role::RoleName;

/// A principal capable of authenticating.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Identity {
    /// Surrogate key.
    pub id: Uuid,
    /// Unique login identifier (an e-mail address), stored normalized.
    pub identifier: String,
    /// Argon2 secret hash. Never serialized.
    #[serde(skip_serializing, default)]
    pub secret_hash: String,
    /// Human-readable display name.
    pub display_name: String,
    /// Names of the roles this identity holds.
    pub roles: BTreeSet<RoleName>,
    /// When the identity was created.
    pub created_at: DateTime<Utc>,
    /// When the identity was last updated.
    pub updated_at: DateTime<Utc>,
}

impl Identity {
    /// Check if this identity holds the given role.
    pub fn has_role(&self, role: &RoleName) -> bool {
        self.roles.contains(role)
    }

    /// Check if this identity holds at least one of the given roles.
    pub fn has_any_role<'a>(&self, roles: impl IntoIterator<Item = &'a RoleName>) -> bool {
        roles.into_iter().any(|r| self.roles.contains(r))
    }
}

/// Data required to create a new identity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewIdentity {
    /// Desired login identifier.
    pub identifier: String,
    /// Pre-hashed secret.
    pub secret_hash: String,
    /// Display name.
    pub display_name: String,
    /// Initial role names. Each must already exist.
    pub roles: BTreeSet<RoleName>,
}

/// Canonical form of a login identifier: trimmed and lower-cased.
pub fn normalize_identifier(raw: &str) -> String {
    raw.trim().to_lowercase()
}
