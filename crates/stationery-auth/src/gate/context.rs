//! The per-request security context.

use std::collections::BTreeSet;

use stationery_entity::RoleName;

static NO_ROLES: BTreeSet<RoleName> = BTreeSet::new();

/// A verified identity and the roles it held when the request arrived.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Principal {
    /// Login identifier.
    pub identifier: String,
    /// Roles resolved from the credential store for this request.
    pub roles: BTreeSet<RoleName>,
}

/// Who is making the current request, if anyone.
///
/// Built once per request by the [`RequestGate`](super::RequestGate) and
/// read-only afterwards. The default value is anonymous.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SecurityContext {
    principal: Option<Principal>,
}

impl SecurityContext {
    /// A context with no bound identity.
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// A context bound to `identifier` holding `roles`.
    pub fn authenticated(identifier: impl Into<String>, roles: BTreeSet<RoleName>) -> Self {
        Self {
            principal: Some(Principal {
                identifier: identifier.into(),
                roles,
            }),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.principal.is_some()
    }

    pub fn principal(&self) -> Option<&Principal> {
        self.principal.as_ref()
    }

    pub fn identifier(&self) -> Option<&str> {
        self.principal.as_ref().map(|p| p.identifier.as_str())
    }

    /// Bound roles; empty when anonymous.
    pub fn roles(&self) -> &BTreeSet<RoleName> {
        self.principal.as_ref().map_or(&NO_ROLES, |p| &p.roles)
    }

    pub fn has_role(&self, role: &RoleName) -> bool {
        self.roles().contains(role)
    }
}
