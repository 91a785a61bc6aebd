//! Declarative route → rule table.

use std::collections::BTreeSet;

use http::Method;

use stationery_core::error::AppError;
use stationery_entity::RoleName;

use super::pattern::{RoutePattern, Specificity};

/// What a route demands of the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccessRule {
    /// Anyone, bound identity or not.
    Public,
    /// Any bound identity.
    AuthenticatedOnly,
    /// A bound identity holding at least one of the roles.
    RequiresAnyOf(BTreeSet<RoleName>),
    /// A bound identity holding every one of the roles.
    RequiresAll(BTreeSet<RoleName>),
}

impl AccessRule {
    pub fn any_of(roles: impl IntoIterator<Item = RoleName>) -> Self {
        Self::RequiresAnyOf(roles.into_iter().collect())
    }

    pub fn all_of(roles: impl IntoIterator<Item = RoleName>) -> Self {
        Self::RequiresAll(roles.into_iter().collect())
    }

    fn validate(&self) -> Result<(), String> {
        match self {
            Self::RequiresAnyOf(roles) | Self::RequiresAll(roles) if roles.is_empty() => {
                Err("role requirement with an empty role set".to_string())
            }
            _ => Ok(()),
        }
    }
}

/// One row of the table.
#[derive(Debug, Clone)]
pub struct PolicyEntry {
    /// `None` applies to every method.
    pub method: Option<Method>,
    pub pattern: RoutePattern,
    pub rule: AccessRule,
}

impl PolicyEntry {
    fn applies(&self, method: &Method, path: &str) -> bool {
        self.method.as_ref().is_none_or(|m| m == method) && self.pattern.matches(path)
    }

    /// Pattern specificity, then method-specific over method-agnostic.
    fn rank(&self) -> (Specificity, bool) {
        (self.pattern.specificity(), self.method.is_some())
    }
}

/// A static table mapping route patterns to [`AccessRule`]s.
///
/// Built once at startup. Paths no entry matches fall back to
/// [`AccessRule::AuthenticatedOnly`].
#[derive(Debug, Clone)]
pub struct AccessPolicy {
    entries: Vec<PolicyEntry>,
    fallback: AccessRule,
}

impl AccessPolicy {
    pub fn builder() -> AccessPolicyBuilder {
        AccessPolicyBuilder::default()
    }

    pub fn entries(&self) -> &[PolicyEntry] {
        &self.entries
    }

    /// The rules that govern `method path`: every matching entry of the
    /// highest rank, or the fallback when nothing matches.
    pub fn resolve(&self, method: &Method, path: &str) -> Vec<&AccessRule> {
        let matching: Vec<&PolicyEntry> = self
            .entries
            .iter()
            .filter(|e| e.applies(method, path))
            .collect();

        let Some(best) = matching.iter().map(|e| e.rank()).max() else {
            return vec![&self.fallback];
        };

        matching
            .into_iter()
            .filter(|e| e.rank() == best)
            .map(|e| &e.rule)
            .collect()
    }
}

/// Collects table rows and reports every bad pattern or rule at `build`.
#[derive(Debug, Default)]
pub struct AccessPolicyBuilder {
    entries: Vec<PolicyEntry>,
    errors: Vec<String>,
}

impl AccessPolicyBuilder {
    /// Add a rule for every method on `pattern`.
    pub fn route(self, pattern: &str, rule: AccessRule) -> Self {
        self.push(None, pattern, rule)
    }

    /// Add a rule for one method on `pattern`.
    pub fn route_for(self, method: Method, pattern: &str, rule: AccessRule) -> Self {
        self.push(Some(method), pattern, rule)
    }

    fn push(mut self, method: Option<Method>, pattern: &str, rule: AccessRule) -> Self {
        if let Err(e) = rule.validate() {
            self.errors.push(format!("{pattern}: {e}"));
            return self;
        }
        match RoutePattern::parse(pattern) {
            Ok(pattern) => self.entries.push(PolicyEntry {
                method,
                pattern,
                rule,
            }),
            Err(e) => self.errors.push(e.message),
        }
        self
    }

    pub fn build(self) -> Result<AccessPolicy, AppError> {
        if !self.errors.is_empty() {
            return Err(AppError::configuration(format!(
                "Invalid access policy: {}",
                self.errors.join("; ")
            )));
        }
        Ok(AccessPolicy {
            entries: self.entries,
            fallback: AccessRule::AuthenticatedOnly,
        })
    }
}
