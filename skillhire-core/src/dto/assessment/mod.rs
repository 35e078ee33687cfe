//! Assessment DTOs

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitAssessmentRequest {
    pub answers: Vec<usize>,
    /// Seconds spent answering
    pub time_spent: u64,
}
