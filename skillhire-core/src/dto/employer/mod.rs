//! Employer DTOs

use serde::{Deserialize, Serialize};

use crate::domain::employer::{SortBy, WorkType};

/// Partial update of the employer profile; unset fields are left untouched
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateEmployerProfile {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_overview: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub work_type: Option<WorkType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

/// Candidate search filters
#[derive(Debug, Clone, Default)]
pub struct CandidateSearch {
    pub query: Option<String>,
    pub skills: Vec<String>,
    pub sort_by: Option<SortBy>,
}

impl CandidateSearch {
    /// Query string pairs; each skill is sent as a repeated `skills` key
    pub fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(q) = &self.query {
            pairs.push(("q", q.clone()));
        }
        for skill in &self.skills {
            pairs.push(("skills", skill.clone()));
        }
        if let Some(sort_by) = self.sort_by {
            let value = match sort_by {
                SortBy::BestMatch => "best_match",
                SortBy::SkillScore => "skill_score",
            };
            pairs.push(("sort_by", value.to_string()));
        }
        pairs
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactCandidateRequest {
    pub subject: String,
    pub message: String,
}
