//! Role name value type.

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use stationery_core::AppError;

/// Prefix some callers put in front of role names ("ROLE_MANAGER").
const AUTHORITY_PREFIX: &str = "ROLE_";

/// Name of a role. The name is the role's identity.
///
/// Names are upper-case ASCII letters, digits and underscores. Parsing
/// normalizes case and strips an optional `ROLE_` prefix, so `"role_manager"`,
/// `"Manager"` and `"MANAGER"` all name the same role.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RoleName(Cow<'static, str>);

impl RoleName {
    /// Storefront customer.
    pub const CUSTOMER: RoleName = RoleName(Cow::Borrowed("CUSTOMER"));
    /// Store employee (clerk).
    pub const EMPLOYEE: RoleName = RoleName(Cow::Borrowed("EMPLOYEE"));
    /// Branch manager.
    pub const MANAGER: RoleName = RoleName(Cow::Borrowed("MANAGER"));
    /// System administrator.
    pub const ADMIN: RoleName = RoleName(Cow::Borrowed("ADMIN"));

    /// Parse and normalize a role name.
    pub fn parse(raw: &str) -> Result<Self, AppError> {
        let trimmed = raw.trim();
        let upper = trimmed.to_ascii_uppercase();
        let name = upper.strip_prefix(AUTHORITY_PREFIX).unwrap_or(&upper);

        if name.is_empty() {
            return Err(AppError::validation("Role name must not be empty"));
        }
        if !name
            .chars()
            .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || c == '_')
        {
            return Err(AppError::validation(format!(
                "Invalid role name: '{raw}'. Use letters, digits and underscores"
            )));
        }

        Ok(Self(Cow::Owned(name.to_string())))
    }

    /// Return the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RoleName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for RoleName {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for RoleName {
    type Error = AppError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<RoleName> for String {
    fn from(value: RoleName) -> Self {
        value.0.into_owned()
    }
}
