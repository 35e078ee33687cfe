//! Linked repository endpoints

use crate::ApiClient;
use crate::error::Result;
use skillhire_core::domain::{LinkedRepository, ResourceId};
use skillhire_core::dto::repository::{AddRepositoryRequest, FileContent};

impl ApiClient {
    // =============================================================================
    // Repository Lifecycle
    // =============================================================================

    /// Link a GitHub repository and queue it for analysis
    ///
    /// # Arguments
    /// * `full_name` - The repository as `owner/name`
    ///
    /// # Returns
    /// The new repository, usually still `pending`
    pub async fn add_repository(&self, full_name: &str) -> Result<LinkedRepository> {
        let request = AddRepositoryRequest {
            full_name: full_name.to_string(),
        };
        let response = self
            .send_authorized(|c| c.post(self.url("/repositories/add/")).json(&request))
            .await?;

        self.handle_response(response).await
    }

    /// List the candidate's linked repositories
    pub async fn list_repositories(&self) -> Result<Vec<LinkedRepository>> {
        let response = self
            .send_authorized(|c| c.get(self.url("/repositories/")))
            .await?;

        self.handle_response(response).await
    }

    /// Fetch the current state of one repository, including its analysis status
    pub async fn get_repository(&self, id: &ResourceId) -> Result<LinkedRepository> {
        let url = self.url(&format!("/repositories/{}/", id));
        let response = self.send_authorized(|c| c.get(&url)).await?;

        self.handle_response(response).await
    }

    /// Unlink a repository
    pub async fn delete_repository(&self, id: &ResourceId) -> Result<()> {
        let url = self.url(&format!("/repositories/{}/delete", id));
        let response = self.send_authorized(|c| c.delete(&url)).await?;

        self.handle_empty_response(response).await
    }

    // =============================================================================
    // Analysis Results
    // =============================================================================

    /// Summary of a completed analysis (shape owned by the backend)
    pub async fn get_repository_summary(&self, id: &ResourceId) -> Result<serde_json::Value> {
        let url = self.url(&format!("/repositories/{}/summary/", id));
        let response = self.send_authorized(|c| c.get(&url)).await?;

        self.handle_response(response).await
    }

    /// Lines of a file inside an analyzed repository
    pub async fn get_file_content(&self, id: &ResourceId, file_path: &str) -> Result<Vec<String>> {
        let url = self.url(&format!(
            "/repositories/{}/file/{}/",
            id,
            file_path.trim_matches('/')
        ));
        let response = self.send_authorized(|c| c.get(&url)).await?;

        let body: FileContent = self.handle_response(response).await?;
        Ok(body.content)
    }
}

#[cfg(test)]
mod tests {
    use crate::error::ClientError;
    use crate::tests::logged_in;
    use mockito::Server;
    use skillhire_core::domain::{AnalysisStatus, ResourceId};

    #[tokio::test]
    async fn test_get_repository_status() {
        let mut server = Server::new_async().await;
        server
            .mock("GET", "/repositories/42/")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{"id": 42, "repo_name": "octo/hello", "repo_url": "https://github.com/octo/hello",
                    "description": "", "languages": ["Rust"], "analysis_status": "analyzing"}"#,
            )
            .create_async()
            .await;

        let client = logged_in(&server.url());
        let repo = client
            .get_repository(&ResourceId::from("42"))
            .await
            .unwrap();

        assert_eq!(repo.analysis_status, AnalysisStatus::Analyzing);
        assert!(repo.result().is_none());
    }

    #[tokio::test]
    async fn test_delete_missing_repository() {
        let mut server = Server::new_async().await;
        server
            .mock("DELETE", "/repositories/7/delete")
            .with_status(404)
            .with_body(r#"{"error": "Repository not found"}"#)
            .create_async()
            .await;

        let client = logged_in(&server.url());
        let err = client
            .delete_repository(&ResourceId::from("7"))
            .await
            .unwrap_err();

        assert!(err.is_not_found());
        assert!(matches!(err, ClientError::ApiError { .. }));
    }

    #[tokio::test]
    async fn test_file_content_lines() {
        let mut server = Server::new_async().await;
        server
            .mock("GET", "/repositories/3/file/src/main.rs/")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"content": ["fn main() {", "}"]}"#)
            .create_async()
            .await;

        let client = logged_in(&server.url());
        let lines = client
            .get_file_content(&ResourceId::from("3"), "/src/main.rs")
            .await
            .unwrap();

        assert_eq!(lines, vec!["fn main() {", "}"]);
    }
}
