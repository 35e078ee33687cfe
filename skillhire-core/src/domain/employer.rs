//! Employer-side domain types

use serde::{Deserialize, Serialize};

use super::id::ResourceId;
use super::repository::{AnalysisStatus, TrackedJob};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WorkType {
    Remote,
    Hybrid,
    Onsite,
}

impl std::fmt::Display for WorkType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WorkType::Remote => write!(f, "remote"),
            WorkType::Hybrid => write!(f, "hybrid"),
            WorkType::Onsite => write!(f, "onsite"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployerProfile {
    pub id: ResourceId,
    pub company_name: String,
    #[serde(default)]
    pub company_overview: String,
    pub work_type: Option<WorkType>,
    #[serde(default)]
    pub location: String,
}

/// Candidate row in the employer search results
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Candidate {
    pub id: ResourceId,
    pub full_name: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub education_level: String,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub experience_years: u32,
    #[serde(default)]
    pub skill_score: f64,
    #[serde(default)]
    pub repositories: Vec<serde_json::Value>,
    #[serde(default)]
    pub overall_score: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CandidateDetail {
    #[serde(flatten)]
    pub candidate: Candidate,
    #[serde(default)]
    pub bio: String,
}

/// A candidate's project as seen by an employer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub id: ResourceId,
    pub repo_name: String,
    #[serde(default)]
    pub repo_url: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub languages: Vec<String>,
    pub analysis_status: AnalysisStatus,
    #[serde(default)]
    pub analysis_results: Option<serde_json::Value>,
    #[serde(default)]
    pub assessment: Option<serde_json::Value>,
}

impl TrackedJob for Project {
    fn id(&self) -> &ResourceId {
        &self.id
    }

    fn status(&self) -> AnalysisStatus {
        self.analysis_status
    }
}

/// Ordering applied to candidate search results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortBy {
    #[default]
    BestMatch,
    SkillScore,
}
