//! Role entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::name::RoleName;

/// A named permission group.
///
/// Roles carry no back-reference to the identities that hold them; use the
/// credential store's `find_by_role` for that direction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Role {
    /// Unique role name (acts as the identifier).
    pub name: RoleName,
    /// Optional human-readable description.
    pub description: Option<String>,
    /// When the role was created.
    pub created_at: DateTime<Utc>,
}

impl Role {
    /// Create a role with the well-known description for its name, if any.
    pub fn new(name: RoleName) -> Self {
        let description = describe(&name).map(str::to_string);
        Self {
            name,
            description,
            created_at: Utc::now(),
        }
    }

    /// Create a role with an explicit description.
    pub fn with_description(name: RoleName, description: impl Into<String>) -> Self {
        Self {
            name,
            description: Some(description.into()),
            created_at: Utc::now(),
        }
    }
}

fn describe(name: &RoleName) -> Option<&'static str> {
    match name.as_str() {
        "CUSTOMER" => Some("Storefront customer; may place orders and reservations"),
        "EMPLOYEE" => Some("Store staff with catalog, inventory and order access"),
        "MANAGER" => Some("Branch manager; may delete records and view roles"),
        "ADMIN" => Some("System administrator"),
        _ => None,
    }
}
