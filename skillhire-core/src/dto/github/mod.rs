//! GitHub integration DTOs

use serde::{Deserialize, Serialize};

/// Repository visible through the user's GitHub token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GithubRepo {
    pub full_name: String,
    pub description: Option<String>,
    pub language: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OAuthUrl {
    pub url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GithubCallbackRequest {
    pub code: String,
}

/// Generic `{"message": ...}` acknowledgement
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}
