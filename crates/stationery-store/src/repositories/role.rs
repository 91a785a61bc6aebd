//! Role repository.

use dashmap::DashMap;
use dashmap::mapref::entry::Entry;

use stationery_core::config::AuthConfig;
use stationery_core::error::AppError;
use stationery_core::result::AppResult;
use stationery_entity::{Role, RoleName};

/// Holds the defined roles. Bootstrapped once at startup.
#[derive(Debug, Default)]
pub struct RoleRepository {
    roles: DashMap<RoleName, Role>,
}

impl RoleRepository {
    /// Create an empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a repository holding `auth.bootstrap_roles`.
    pub fn from_config(config: &AuthConfig) -> AppResult<Self> {
        let names = config
            .bootstrap_roles
            .iter()
            .map(|raw| RoleName::parse(raw))
            .collect::<AppResult<Vec<_>>>()?;

        let repo = Self::new();
        repo.bootstrap(names);
        Ok(repo)
    }

    /// Define every role in `names` that does not exist yet. Returns how
    /// many were added.
    pub fn bootstrap(&self, names: impl IntoIterator<Item = RoleName>) -> usize {
        let mut added = 0;
        for name in names {
            if let Entry::Vacant(slot) = self.roles.entry(name.clone()) {
                slot.insert(Role::new(name.clone()));
                tracing::info!(role = %name, "Bootstrapped role");
                added += 1;
            }
        }
        added
    }

    /// Define a new role.
    pub fn create(&self, role: Role) -> AppResult<Role> {
        match self.roles.entry(role.name.clone()) {
            Entry::Occupied(_) => Err(AppError::conflict(format!(
                "Role '{}' already exists",
                role.name
            ))),
            Entry::Vacant(slot) => {
                slot.insert(role.clone());
                tracing::info!(role = %role.name, "Created role");
                Ok(role)
            }
        }
    }

    pub fn exists(&self, name: &RoleName) -> bool {
        self.roles.contains_key(name)
    }

    pub fn find(&self, name: &RoleName) -> Option<Role> {
        self.roles.get(name).map(|r| r.value().clone())
    }

    /// All roles ordered by name.
    pub fn list(&self) -> Vec<Role> {
        let mut roles: Vec<Role> = self.roles.iter().map(|r| r.value().clone()).collect();
        roles.sort_by(|a, b| a.name.cmp(&b.name));
        roles
    }

    /// Fail with an integrity error on the first undefined name.
    pub fn ensure_defined<'a>(&self, names: impl IntoIterator<Item = &'a RoleName>) -> AppResult<()> {
        for name in names {
            if !self.exists(name) {
                return Err(AppError::integrity(format!(
                    "Undefined role reference: '{name}'"
                )));
            }
        }
        Ok(())
    }
}
