//! Authentication endpoints

use crate::ApiClient;
use crate::error::Result;
use skillhire_core::dto::auth::{
    AuthResponse, LoginRequest, RegisterEmployerRequest, RegisterRequest,
};
use tracing::info;

impl ApiClient {
    // =============================================================================
    // Session Lifecycle
    // =============================================================================

    /// Register a candidate account
    ///
    /// On success the returned tokens become the client's session.
    pub async fn register_candidate(&self, email: &str, password: &str) -> Result<AuthResponse> {
        let response = self
            .client
            .post(self.url("/auth/register/"))
            .json(&RegisterRequest::candidate(email, password))
            .send()
            .await?;

        let auth: AuthResponse = self.handle_response(response).await?;
        self.store_session(&auth, None);
        Ok(auth)
    }

    /// Register an employer account
    pub async fn register_employer(
        &self,
        email: &str,
        password: &str,
        company_name: &str,
    ) -> Result<AuthResponse> {
        let response = self
            .client
            .post(self.url("/auth/register/employer/"))
            .json(&RegisterEmployerRequest {
                email: email.to_string(),
                password: password.to_string(),
                company_name: company_name.to_string(),
            })
            .send()
            .await?;

        let auth: AuthResponse = self.handle_response(response).await?;
        self.store_session(&auth, Some(company_name.to_string()));
        Ok(auth)
    }

    /// Log in with email and password
    pub async fn login(&self, email: &str, password: &str) -> Result<AuthResponse> {
        let response = self
            .client
            .post(self.url("/auth/login/"))
            .json(&LoginRequest {
                email: email.to_string(),
                password: password.to_string(),
            })
            .send()
            .await?;

        let auth: AuthResponse = self.handle_response(response).await?;
        self.store_session(&auth, None);
        Ok(auth)
    }

    /// Drop the local session. The backend keeps no server-side session state.
    pub fn logout(&self) {
        self.session.clear();
        info!("Logged out");
    }

    fn store_session(&self, auth: &AuthResponse, company_name: Option<String>) {
        if let Some(session) = auth.clone().into_session(company_name) {
            info!("Logged in as {} ({})", session.user.email, session.user.role);
            self.session.set(session);
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::ApiClient;
    use crate::error::ClientError;
    use mockito::{Matcher, Server};
    use skillhire_core::domain::user::Role;

    const AUTH_BODY: &str = r#"{
        "access": "acc",
        "refresh": "ref",
        "user": {"id": 12, "email": "dev@example.com", "username": "dev@example.com", "role": "candidate", "has_github": true}
    }"#;

    #[tokio::test]
    async fn test_login_stores_session() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/auth/login/")
            .match_body(Matcher::Json(serde_json::json!({
                "email": "dev@example.com",
                "password": "secret"
            })))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(AUTH_BODY)
            .create_async()
            .await;

        let client = ApiClient::new(server.url());
        let auth = client.login("dev@example.com", "secret").await.unwrap();

        assert!(auth.user.has_github);
        let session = client.session().get().unwrap();
        assert_eq!(session.access, "acc");
        assert_eq!(session.user.id.as_str(), "12");
        mock.assert_async().await;

        client.logout();
        assert!(!client.session().is_authenticated());
    }

    #[tokio::test]
    async fn test_invalid_credentials_leave_session_empty() {
        let mut server = Server::new_async().await;
        server
            .mock("POST", "/auth/login/")
            .with_status(401)
            .with_body(r#"{"error": "Invalid credentials"}"#)
            .create_async()
            .await;

        let client = ApiClient::new(server.url());
        let err = client.login("dev@example.com", "wrong").await.unwrap_err();

        assert!(matches!(err, ClientError::ApiError { status: 401, .. }));
        assert!(!client.session().is_authenticated());
    }

    #[tokio::test]
    async fn test_register_employer_keeps_company_name() {
        let mut server = Server::new_async().await;
        server
            .mock("POST", "/auth/register/employer/")
            .with_status(201)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{"access": "a", "refresh": "r", "user": {"id": 3, "email": "hr@acme.io", "role": "employer"}}"#,
            )
            .create_async()
            .await;

        let client = ApiClient::new(server.url());
        client
            .register_employer("hr@acme.io", "pw", "Acme")
            .await
            .unwrap();

        let session = client.session().get().unwrap();
        assert_eq!(session.user.role, Role::Employer);
        assert_eq!(session.company_name.as_deref(), Some("Acme"));
    }
}
