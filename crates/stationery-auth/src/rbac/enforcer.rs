//! Access policy evaluation against a request's security context.

use std::collections::BTreeSet;
use std::sync::Arc;

use http::Method;
use thiserror::Error;

use stationery_core::error::AppError;
use stationery_entity::RoleName;

use super::policies::{AccessPolicy, AccessRule};
use crate::gate::SecurityContext;

/// Why a request was refused. The two cases map to different statuses and
/// must stay distinct.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AccessDenial {
    /// No identity is bound and the route is not public.
    #[error("authentication required")]
    AuthenticationRequired,
    /// An identity is bound but lacks the required roles.
    #[error("missing required role (one of {required:?})")]
    AuthorizationDenied {
        /// The roles the failing rule asked for.
        required: BTreeSet<RoleName>,
    },
}

impl From<AccessDenial> for AppError {
    fn from(denial: AccessDenial) -> Self {
        match denial {
            AccessDenial::AuthenticationRequired => {
                AppError::authentication("Authentication required")
            }
            AccessDenial::AuthorizationDenied { .. } => {
                AppError::authorization("Insufficient role for this resource")
            }
        }
    }
}

/// Checks a single rule.
pub fn check_rule(rule: &AccessRule, ctx: &SecurityContext) -> Result<(), AccessDenial> {
    match rule {
        AccessRule::Public => Ok(()),
        _ if !ctx.is_authenticated() => Err(AccessDenial::AuthenticationRequired),
        AccessRule::AuthenticatedOnly => Ok(()),
        AccessRule::RequiresAnyOf(roles) if roles.iter().any(|r| ctx.has_role(r)) => Ok(()),
        AccessRule::RequiresAll(roles) if roles.iter().all(|r| ctx.has_role(r)) => Ok(()),
        AccessRule::RequiresAnyOf(roles) | AccessRule::RequiresAll(roles) => {
            Err(AccessDenial::AuthorizationDenied {
                required: roles.clone(),
            })
        }
    }
}

/// Decides whether a request may proceed.
#[derive(Debug, Clone)]
pub struct AccessPolicyEvaluator {
    policy: Arc<AccessPolicy>,
}

impl AccessPolicyEvaluator {
    pub fn new(policy: AccessPolicy) -> Self {
        Self {
            policy: Arc::new(policy),
        }
    }

    pub fn policy(&self) -> &AccessPolicy {
        &self.policy
    }

    /// Evaluate `method path` for `ctx`.
    ///
    /// When several rules tie for most specific, every one of them must
    /// allow. An authentication denial takes precedence over a role denial.
    pub fn evaluate(
        &self,
        method: &Method,
        path: &str,
        ctx: &SecurityContext,
    ) -> Result<(), AccessDenial> {
        let mut denial = None;

        for rule in self.policy.resolve(method, path) {
            match check_rule(rule, ctx) {
                Ok(()) => {}
                Err(AccessDenial::AuthenticationRequired) => {
                    return Err(AccessDenial::AuthenticationRequired);
                }
                Err(role_denial) => {
                    denial.get_or_insert(role_denial);
                }
            }
        }

        denial.map_or(Ok(()), Err)
    }
}
