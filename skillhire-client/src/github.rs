//! GitHub connection endpoints

use crate::ApiClient;
use crate::error::Result;
use skillhire_core::dto::github::{GithubCallbackRequest, GithubRepo, MessageResponse, OAuthUrl};

impl ApiClient {
    /// URL the user must visit to authorize the GitHub OAuth app
    pub async fn github_oauth_url(&self) -> Result<String> {
        let response = self
            .send_authorized(|c| c.get(self.url("/github/oauth-url/")))
            .await?;

        let body: OAuthUrl = self.handle_response(response).await?;
        Ok(body.url)
    }

    /// Complete the OAuth flow with the `code` GitHub redirected back with
    ///
    /// Marks the session as GitHub-connected on success.
    pub async fn connect_github(&self, code: &str) -> Result<String> {
        let request = GithubCallbackRequest {
            code: code.to_string(),
        };
        let response = self
            .send_authorized(|c| c.post(self.url("/github/callback/")).json(&request))
            .await?;

        let body: MessageResponse = self.handle_response(response).await?;

        if let Some(mut session) = self.session.get() {
            session.user.has_github = true;
            self.session.set(session);
        }

        Ok(body.message)
    }

    /// Repositories readable with the user's GitHub token
    pub async fn list_github_repositories(&self) -> Result<Vec<GithubRepo>> {
        let response = self
            .send_authorized(|c| c.get(self.url("/github/repositories/")))
            .await?;

        self.handle_response(response).await
    }
}

#[cfg(test)]
mod tests {
    use crate::tests::logged_in;
    use mockito::Server;

    #[tokio::test]
    async fn test_connect_github_marks_session() {
        let mut server = Server::new_async().await;
        server
            .mock("POST", "/github/callback/")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"message": "GitHub account connected successfully"}"#)
            .create_async()
            .await;

        let client = logged_in(&server.url());
        if let Some(mut session) = client.session().get() {
            session.user.has_github = false;
            client.session().set(session);
        }

        let message = client.connect_github("abc123").await.unwrap();

        assert_eq!(message, "GitHub account connected successfully");
        assert!(client.session().get().unwrap().user.has_github);
    }
}
