//! Console roles carried in the session token.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::{fmt, str::FromStr};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Coarse authorization tier of a console session.
pub enum Role {
    /// Full access to every company, user and employee.
    GlobalAdmin,
    /// Access scoped to the account's own company.
    Client,
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown role: {0}")]
pub struct UnknownRole(pub String);

impl Role {
    /// Returns the canonical wire representation of the role.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::GlobalAdmin => "global-admin",
            Role::Client => "client",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "global-admin" => Ok(Role::GlobalAdmin),
            "client" => Ok(Role::Client),
            // older API builds emit the dotted form
            "global.admin" => Ok(Role::GlobalAdmin),
            other => Err(UnknownRole(other.to_string())),
        }
    }
}

impl Serialize for Role {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Role {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse()
            .map_err(|_| serde::de::Error::unknown_variant(&s, &["global-admin", "client"]))
    }
}
