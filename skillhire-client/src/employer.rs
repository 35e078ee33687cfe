//! Employer endpoints

use crate::ApiClient;
use crate::error::Result;
use skillhire_core::domain::ResourceId;
use skillhire_core::domain::employer::{Candidate, CandidateDetail, EmployerProfile, Project};
use skillhire_core::dto::employer::{
    CandidateSearch, ContactCandidateRequest, UpdateEmployerProfile,
};

impl ApiClient {
    // =============================================================================
    // Employer Profile
    // =============================================================================

    pub async fn get_employer_profile(&self) -> Result<EmployerProfile> {
        let response = self
            .send_authorized(|c| c.get(self.url("/employer/profile/")))
            .await?;

        self.handle_response(response).await
    }

    pub async fn update_employer_profile(
        &self,
        update: &UpdateEmployerProfile,
    ) -> Result<EmployerProfile> {
        let response = self
            .send_authorized(|c| c.put(self.url("/employer/profile/")).json(update))
            .await?;

        self.handle_response(response).await
    }

    // =============================================================================
    // Candidate Search
    // =============================================================================

    /// Search candidates by free text and skills
    pub async fn search_candidates(&self, search: &CandidateSearch) -> Result<Vec<Candidate>> {
        let query = search.to_query();
        let response = self
            .send_authorized(|c| c.get(self.url("/employer/candidates/")).query(&query))
            .await?;

        self.handle_response(response).await
    }

    pub async fn get_candidate(&self, candidate_id: &ResourceId) -> Result<CandidateDetail> {
        let url = self.url(&format!("/employer/candidates/{}/", candidate_id));
        let response = self.send_authorized(|c| c.get(&url)).await?;

        self.handle_response(response).await
    }

    /// One of a candidate's analyzed projects
    pub async fn get_candidate_project(
        &self,
        candidate_id: &ResourceId,
        project_id: &ResourceId,
    ) -> Result<Project> {
        let url = self.url(&format!(
            "/employer/candidates/{}/projects/{}/",
            candidate_id, project_id
        ));
        let response = self.send_authorized(|c| c.get(&url)).await?;

        self.handle_response(response).await
    }

    /// Send a message to a candidate
    pub async fn contact_candidate(
        &self,
        candidate_id: &ResourceId,
        subject: &str,
        message: &str,
    ) -> Result<()> {
        let url = self.url(&format!("/employer/candidates/{}/contact/", candidate_id));
        let request = ContactCandidateRequest {
            subject: subject.to_string(),
            message: message.to_string(),
        };
        let response = self
            .send_authorized(|c| c.post(&url).json(&request))
            .await?;

        self.handle_empty_response(response).await
    }
}

#[cfg(test)]
mod tests {
    use crate::tests::logged_in;
    use mockito::{Matcher, Server};
    use skillhire_core::domain::employer::SortBy;
    use skillhire_core::dto::employer::CandidateSearch;

    #[tokio::test]
    async fn test_search_candidates_query() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/employer/candidates/")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("q".into(), "backend".into()),
                Matcher::UrlEncoded("skills".into(), "rust".into()),
                Matcher::UrlEncoded("sort_by".into(), "skill_score".into()),
            ]))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"[{"id": 8, "full_name": "Linus", "skills": ["rust"], "skill_score": 88.0}]"#)
            .create_async()
            .await;

        let client = logged_in(&server.url());
        let candidates = client
            .search_candidates(&CandidateSearch {
                query: Some("backend".to_string()),
                skills: vec!["rust".to_string()],
                sort_by: Some(SortBy::SkillScore),
            })
            .await
            .unwrap();

        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].full_name, "Linus");
        mock.assert_async().await;
    }
}
