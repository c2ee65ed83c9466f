use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    #[serde(rename = "global-admin", alias = "global.admin")]
    GlobalAdmin,
    #[serde(rename = "client")]
    Client,
}

impl Role {
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
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "global-admin" | "global.admin" => Ok(Role::GlobalAdmin),
            "client" => Ok(Role::Client),
            other => Err(format!("unknown role: {}", other)),
        }
    }
}

/// True when `role` is one of `allowed`. An empty allow-list admits nobody.
pub fn has_permission(role: Role, allowed: &[Role]) -> bool {
    allowed.contains(&role)
}
