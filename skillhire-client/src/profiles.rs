//! Candidate profile endpoints

use crate::ApiClient;
use crate::error::Result;
use skillhire_core::domain::profile::CandidateProfile;

impl ApiClient {
    pub async fn get_candidate_profile(&self) -> Result<CandidateProfile> {
        let response = self
            .send_authorized(|c| c.get(self.url("/candidate/profile/")))
            .await?;

        self.handle_response(response).await
    }

    pub async fn update_candidate_profile(
        &self,
        profile: &CandidateProfile,
    ) -> Result<CandidateProfile> {
        let response = self
            .send_authorized(|c| c.put(self.url("/candidate/profile/")).json(profile))
            .await?;

        self.handle_response(response).await
    }
}
