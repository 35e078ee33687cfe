//! Assessment domain types
//!
//! Assessments are multiple-choice quizzes generated by the backend from a
//! completed repository analysis.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::id::ResourceId;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    pub text: String,
    pub options: Vec<String>,
    pub correct_answer: usize,
    #[serde(default)]
    pub explanation: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Assessment {
    pub id: ResourceId,
    pub repository: ResourceId,
    pub questions: Vec<Question>,
    pub score: Option<f64>,
    pub completed_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub answers: Option<Vec<usize>>,
    #[serde(default)]
    pub correct_answers: Option<usize>,
}

impl Assessment {
    pub fn is_completed(&self) -> bool {
        self.completed_at.is_some()
    }
}

/// A graded submission of an assessment
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssessmentAttempt {
    pub id: ResourceId,
    pub assessment: ResourceId,
    pub answers: Vec<usize>,
    pub correct_answers: usize,
    pub score: f64,
    /// Seconds spent answering
    pub time_spent: u64,
    pub completed_at: DateTime<Utc>,
}
