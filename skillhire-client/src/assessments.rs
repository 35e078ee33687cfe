//! Assessment endpoints

use crate::ApiClient;
use crate::error::Result;
use skillhire_core::domain::ResourceId;
use skillhire_core::domain::assessment::{Assessment, AssessmentAttempt};
use skillhire_core::dto::assessment::SubmitAssessmentRequest;

impl ApiClient {
    /// Ask the backend to generate a quiz for an analyzed repository
    pub async fn generate_assessment(&self, repo_id: &ResourceId) -> Result<Assessment> {
        let url = self.url(&format!("/repositories/{}/assessment/generate/", repo_id));
        let response = self
            .send_authorized(|c| c.post(&url).json(&serde_json::json!({})))
            .await?;

        self.handle_response(response).await
    }

    pub async fn get_assessment(&self, repo_id: &ResourceId) -> Result<Assessment> {
        let url = self.url(&format!("/repositories/{}/assessment/", repo_id));
        let response = self.send_authorized(|c| c.get(&url)).await?;

        self.handle_response(response).await
    }

    /// Submit answers (option indices, one per question) for grading
    pub async fn submit_assessment(
        &self,
        assessment_id: &ResourceId,
        answers: Vec<usize>,
        time_spent_secs: u64,
    ) -> Result<AssessmentAttempt> {
        let url = self.url(&format!("/assessment/{}/submit/", assessment_id));
        let request = SubmitAssessmentRequest {
            answers,
            time_spent: time_spent_secs,
        };
        let response = self
            .send_authorized(|c| c.post(&url).json(&request))
            .await?;

        self.handle_response(response).await
    }
}
