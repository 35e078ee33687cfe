//! SkillHire HTTP Client
//!
//! A type-safe HTTP client for the SkillHire REST API.
//!
//! Every authenticated call carries the session's bearer token. When the
//! backend answers 401 the client refreshes the access token once and retries
//! the request; if the refresh itself is rejected the session is cleared.
//!
//! # Example
//!
//! ```no_run
//! use skillhire_client::ApiClient;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let client = ApiClient::new("http://localhost:8000/api");
//!     client.login("dev@example.com", "secret").await?;
//!
//!     for repo in client.list_repositories().await? {
//!         println!("{} is {}", repo.repo_name, repo.analysis_status);
//!     }
//!     Ok(())
//! }
//! ```

mod assessments;
mod auth;
mod employer;
pub mod error;
mod github;
mod profiles;
mod repositories;
pub mod session;

// Re-export commonly used types
pub use error::{ClientError, Result};
pub use session::SessionContext;

use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use skillhire_core::dto::auth::{RefreshRequest, RefreshResponse};
use tracing::{debug, info, warn};

/// Default API root of a local backend
pub const DEFAULT_API_URL: &str = "http://localhost:8000/api";

/// HTTP client for the SkillHire API
///
/// Endpoints are grouped by concern:
/// - Authentication and session handling
/// - GitHub connection
/// - Candidate profile and linked repositories
/// - Assessments
/// - Employer search and contact
#[derive(Debug, Clone)]
pub struct ApiClient {
    /// Base URL of the API (e.g., "http://localhost:8000/api")
    base_url: String,
    /// HTTP client instance
    client: Client,
    /// Shared login state
    session: SessionContext,
}

impl ApiClient {
    /// Create a new API client with an empty session
    ///
    /// # Example
    /// ```
    /// use skillhire_client::ApiClient;
    ///
    /// let client = ApiClient::new("http://localhost:8000/api");
    /// assert!(!client.session().is_authenticated());
    /// ```
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(base_url, Client::new())
    }

    /// Create a new API client with a custom HTTP client
    ///
    /// This allows you to configure timeouts, proxies, TLS settings, etc.
    pub fn with_client(base_url: impl Into<String>, client: Client) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
            session: SessionContext::new(),
        }
    }

    /// Use an existing session context (e.g., one restored from disk)
    pub fn with_session(mut self, session: SessionContext) -> Self {
        self.session = session;
        self
    }

    /// Get the base URL of the API
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The session shared by this client
    pub fn session(&self) -> &SessionContext {
        &self.session
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    // =============================================================================
    // Authorized Requests
    // =============================================================================

    /// Send a request with the session's bearer token
    ///
    /// `build` is called again for the retry after a token refresh, so it
    /// must produce the same request each time. Only one refresh and one retry
    /// are attempted per call.
    async fn send_authorized<F>(&self, build: F) -> Result<Response>
    where
        F: Fn(&Client) -> RequestBuilder,
    {
        let token = self
            .session
            .access_token()
            .ok_or(ClientError::NotAuthenticated)?;

        let response = build(&self.client).bearer_auth(&token).send().await?;
        if response.status() != StatusCode::UNAUTHORIZED {
            return Ok(response);
        }

        debug!("Access token rejected, attempting refresh");
        let access = self.refresh_access_token().await?;

        let retried = build(&self.client).bearer_auth(&access).send().await?;
        Ok(retried)
    }

    /// Exchange the refresh token for a new access token
    ///
    /// Any failure logs the user out.
    async fn refresh_access_token(&self) -> Result<String> {
        let Some(refresh) = self.session.refresh_token() else {
            warn!("No refresh token available, clearing session");
            self.session.clear();
            return Err(ClientError::SessionExpired);
        };

        let outcome = async {
            let response = self
                .client
                .post(self.url("/token/refresh/"))
                .json(&RefreshRequest { refresh })
                .send()
                .await?;
            self.handle_response::<RefreshResponse>(response).await
        }
        .await;

        match outcome {
            Ok(RefreshResponse { access }) => {
                if !self.session.set_access_token(access.clone()) {
                    return Err(ClientError::SessionExpired);
                }
                info!("Access token refreshed");
                Ok(access)
            }
            Err(e) => {
                warn!("Token refresh failed, clearing session: {}", e);
                self.session.clear();
                Err(ClientError::SessionExpired)
            }
        }
    }

    // =============================================================================
    // Response Handlers
    // =============================================================================

    /// Handle an API response and deserialize JSON
    async fn handle_response<T: DeserializeOwned>(&self, response: Response) -> Result<T> {
        let status = response.status();

        if !status.is_success() {
            return Err(Self::error_from(response).await);
        }

        response
            .json()
            .await
            .map_err(|e| ClientError::ParseError(format!("Failed to parse JSON response: {}", e)))
    }

    /// Handle an API response whose body is ignored (e.g., DELETE operations)
    async fn handle_empty_response(&self, response: Response) -> Result<()> {
        if !response.status().is_success() {
            return Err(Self::error_from(response).await);
        }

        Ok(())
    }

    async fn error_from(response: Response) -> ClientError {
        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        ClientError::api_error(status, extract_error_message(&body))
    }
}

/// Pull the human readable message out of an error body
///
/// The backend answers with `{"error": ...}` from its views and
/// `{"detail": ...}` from the auth layer. Anything else is returned verbatim.
fn extract_error_message(body: &str) -> String {
    match serde_json::from_str::<serde_json::Value>(body) {
        Ok(value) => ["error", "detail", "message"]
            .iter()
            .find_map(|key| value.get(key).and_then(|v| v.as_str()))
            .map(str::to_string)
            .unwrap_or_else(|| body.to_string()),
        Err(_) => body.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::{Matcher, Server};
    use skillhire_core::domain::user::{Role, Session, User};

    pub(crate) fn test_session() -> Session {
        Session {
            access: "stale".to_string(),
            refresh: "refresh-token".to_string(),
            user: User {
                id: "1".into(),
                email: "dev@example.com".to_string(),
                username: "dev@example.com".to_string(),
                role: Role::Candidate,
                has_github: true,
            },
            company_name: None,
        }
    }

    pub(crate) fn logged_in(url: &str) -> ApiClient {
        ApiClient::new(url).with_session(SessionContext::from_session(test_session()))
    }

    #[test]
    fn test_client_creation() {
        let client = ApiClient::new("http://localhost:8000/api");
        assert_eq!(client.base_url(), "http://localhost:8000/api");
    }

    #[test]
    fn test_client_trims_trailing_slash() {
        let client = ApiClient::new("http://localhost:8000/api/");
        assert_eq!(client.base_url(), "http://localhost:8000/api");
    }

    #[test]
    fn test_extract_error_message() {
        assert_eq!(
            extract_error_message(r#"{"error": "Repository not found"}"#),
            "Repository not found"
        );
        assert_eq!(
            extract_error_message(r#"{"detail": "Token is invalid"}"#),
            "Token is invalid"
        );
        assert_eq!(extract_error_message("Bad Gateway"), "Bad Gateway");
    }

    #[tokio::test]
    async fn test_requires_session() {
        let client = ApiClient::new("http://127.0.0.1:9");
        let err = client.list_repositories().await.unwrap_err();
        assert!(matches!(err, ClientError::NotAuthenticated));
    }

    #[tokio::test]
    async fn test_attaches_bearer_token() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/repositories/")
            .match_header("authorization", "Bearer stale")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body("[]")
            .create_async()
            .await;

        let client = logged_in(&server.url());
        let repos = client.list_repositories().await.unwrap();

        assert!(repos.is_empty());
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_refreshes_and_retries_once_on_401() {
        let mut server = Server::new_async().await;
        let rejected = server
            .mock("GET", "/repositories/")
            .match_header("authorization", "Bearer stale")
            .with_status(401)
            .with_body(r#"{"detail": "Token is invalid or expired"}"#)
            .expect(1)
            .create_async()
            .await;
        let refresh = server
            .mock("POST", "/token/refresh/")
            .match_body(Matcher::Json(serde_json::json!({"refresh": "refresh-token"})))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"access": "fresh"}"#)
            .expect(1)
            .create_async()
            .await;
        let accepted = server
            .mock("GET", "/repositories/")
            .match_header("authorization", "Bearer fresh")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"[{"id": 5, "repo_name": "octo/hello", "analysis_status": "complete"}]"#)
            .expect(1)
            .create_async()
            .await;

        let client = logged_in(&server.url());
        let repos = client.list_repositories().await.unwrap();

        assert_eq!(repos.len(), 1);
        assert_eq!(client.session().access_token().as_deref(), Some("fresh"));
        rejected.assert_async().await;
        refresh.assert_async().await;
        accepted.assert_async().await;
    }

    #[tokio::test]
    async fn test_failed_refresh_clears_session() {
        let mut server = Server::new_async().await;
        server
            .mock("GET", "/repositories/")
            .with_status(401)
            .create_async()
            .await;
        server
            .mock("POST", "/token/refresh/")
            .with_status(401)
            .with_body(r#"{"detail": "Token is blacklisted"}"#)
            .create_async()
            .await;

        let client = logged_in(&server.url());
        let err = client.list_repositories().await.unwrap_err();

        assert!(matches!(err, ClientError::SessionExpired));
        assert!(!client.session().is_authenticated());
    }

    #[tokio::test]
    async fn test_second_401_is_not_refreshed_again() {
        let mut server = Server::new_async().await;
        let rejected = server
            .mock("GET", "/repositories/")
            .with_status(401)
            .with_body(r#"{"detail": "nope"}"#)
            .expect(2)
            .create_async()
            .await;
        let refresh = server
            .mock("POST", "/token/refresh/")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"access": "fresh"}"#)
            .expect(1)
            .create_async()
            .await;

        let client = logged_in(&server.url());
        let err = client.list_repositories().await.unwrap_err();

        assert!(matches!(err, ClientError::ApiError { status: 401, .. }));
        rejected.assert_async().await;
        refresh.assert_async().await;
    }

    #[tokio::test]
    async fn test_api_error_message_extracted() {
        let mut server = Server::new_async().await;
        server
            .mock("POST", "/repositories/add/")
            .with_status(400)
            .with_header("content-type", "application/json")
            .with_body(r#"{"error": "GitHub account not connected"}"#)
            .create_async()
            .await;

        let client = logged_in(&server.url());
        let err = client.add_repository("octo/hello").await.unwrap_err();

        match err {
            ClientError::ApiError { status, message } => {
                assert_eq!(status, 400);
                assert_eq!(message, "GitHub account not connected");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
