//! Linked repository domain types
//!
//! A linked repository is the unit of server-side analysis work. The backend
//! creates it in `pending` state and walks it through `analyzing` to either
//! `complete` or `failed`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::id::ResourceId;

/// Status of a repository analysis job
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnalysisStatus {
    Pending,
    Analyzing,
    Complete,
    Failed,
}

impl AnalysisStatus {
    /// Terminal statuses never revert
    pub fn is_terminal(self) -> bool {
        matches!(self, AnalysisStatus::Complete | AnalysisStatus::Failed)
    }
}

impl std::fmt::Display for AnalysisStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AnalysisStatus::Pending => write!(f, "pending"),
            AnalysisStatus::Analyzing => write!(f, "analyzing"),
            AnalysisStatus::Complete => write!(f, "complete"),
            AnalysisStatus::Failed => write!(f, "failed"),
        }
    }
}

/// Something whose status is owned by the backend and can be observed by id
pub trait TrackedJob {
    fn id(&self) -> &ResourceId;
    fn status(&self) -> AnalysisStatus;
}

/// A GitHub repository linked to a candidate profile
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinkedRepository {
    pub id: ResourceId,
    pub repo_name: String,
    #[serde(default)]
    pub repo_url: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub languages: Vec<String>,
    #[serde(default = "default_status")]
    pub analysis_status: AnalysisStatus,
    #[serde(default)]
    pub analysis_results: Option<serde_json::Value>,
    #[serde(default)]
    pub assessment_score: Option<f64>,
    #[serde(default)]
    pub last_analyzed: Option<DateTime<Utc>>,
}

fn default_status() -> AnalysisStatus {
    AnalysisStatus::Pending
}

impl LinkedRepository {
    /// Analysis payload, only present once the analysis is complete
    pub fn result(&self) -> Option<&serde_json::Value> {
        match self.analysis_status {
            AnalysisStatus::Complete => self.analysis_results.as_ref(),
            _ => None,
        }
    }

    /// Whether the dashboard should keep watching this repository
    pub fn needs_polling(&self) -> bool {
        !self.analysis_status.is_terminal()
    }
}

impl TrackedJob for LinkedRepository {
    fn id(&self) -> &ResourceId {
        &self.id
    }

    fn status(&self) -> AnalysisStatus {
        self.analysis_status
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminal_statuses() {
        assert!(!AnalysisStatus::Pending.is_terminal());
        assert!(!AnalysisStatus::Analyzing.is_terminal());
        assert!(AnalysisStatus::Complete.is_terminal());
        assert!(AnalysisStatus::Failed.is_terminal());
    }

    #[test]
    fn test_status_wire_format() {
        let status: AnalysisStatus = serde_json::from_str("\"analyzing\"").unwrap();
        assert_eq!(status, AnalysisStatus::Analyzing);
        assert!(serde_json::from_str::<AnalysisStatus>("\"done\"").is_err());
    }

    #[test]
    fn test_result_hidden_until_complete() {
        let mut repo: LinkedRepository = serde_json::from_value(serde_json::json!({
            "id": 3,
            "repo_name": "octo/hello",
            "repo_url": "https://github.com/octo/hello",
            "languages": ["Rust"],
            "analysis_status": "analyzing",
            "analysis_results": {"bugs": 2}
        }))
        .unwrap();

        assert_eq!(repo.id.as_str(), "3");
        assert!(repo.result().is_none());
        assert!(repo.needs_polling());

        repo.analysis_status = AnalysisStatus::Complete;
        assert_eq!(repo.result().unwrap()["bugs"], 2);
        assert!(!repo.needs_polling());
    }

    #[test]
    fn test_minimal_repository_defaults() {
        // The add endpoint only echoes the serializer's base fields
        let repo: LinkedRepository = serde_json::from_str(
            r#"{"id": 9, "repo_name": "octo/world", "repo_url": "", "description": "", "languages": []}"#,
        )
        .unwrap();
        assert_eq!(repo.status(), AnalysisStatus::Pending);
        assert!(repo.analysis_results.is_none());
    }
}
