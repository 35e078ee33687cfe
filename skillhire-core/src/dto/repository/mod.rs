//! Repository DTOs

use serde::{Deserialize, Serialize};

/// Link a GitHub repository (by `owner/name`) for analysis
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddRepositoryRequest {
    pub full_name: String,
}

/// Source file returned line by line
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileContent {
    pub content: Vec<String>,
}
