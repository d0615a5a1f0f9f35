//! Operator role - the coarse permission tier carried in tokens

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Operator role
///
/// `Admin` has full access; `Viewer` is the default tier for new accounts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    #[default]
    Viewer,
}

impl Role {
    /// Database / wire representation
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Viewer => "viewer",
        }
    }

    /// Parse a role supplied by a client, falling back to `Viewer`
    /// for anything that is absent or not one of the two known values.
    pub fn from_input(input: Option<&str>) -> Self {
        input.and_then(|s| s.parse().ok()).unwrap_or_default()
    }

    #[inline]
    pub fn is_admin(self) -> bool {
        matches!(self, Self::Admin)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error when parsing a role from string
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown role: {0}")]
pub struct UnknownRole(pub String);

impl FromStr for Role {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "admin" => Ok(Self::Admin),
            "viewer" => Ok(Self::Viewer),
            other => Err(UnknownRole(other.to_string())),
        }
    }
}
