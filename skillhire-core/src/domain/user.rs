//! User and session domain types

use serde::{Deserialize, Serialize};

use super::id::ResourceId;

/// Platform role of an account
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Candidate,
    Employer,
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::Candidate => write!(f, "candidate"),
            Role::Employer => write!(f, "employer"),
        }
    }
}

/// Account information returned alongside auth tokens
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: ResourceId,
    pub email: String,
    #[serde(default)]
    pub username: String,
    pub role: Role,
    #[serde(default)]
    pub has_github: bool,
}

/// Authenticated session held by the client
///
/// Created at login or registration and dropped at logout or when the refresh
/// token is rejected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub access: String,
    pub refresh: String,
    pub user: User,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,
}
