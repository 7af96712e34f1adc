//! Static user accounts and roles

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Role {
    Admin,
    Client,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "ADMIN",
            Role::Client => "CLIENT",
        }
    }
}

/// One entry of the fixed credential set loaded at startup.
#[derive(Debug, Clone)]
pub struct StaticAccount {
    pub username: String,
    pub role: Role,
    pub password_hash: String,
}

/// Identity attached to a request after credential validation.
#[derive(Debug, Clone, Serialize)]
pub struct AuthenticatedUser {
    pub username: String,
    pub role: Role,
}
