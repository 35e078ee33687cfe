//! Authentication DTOs

use serde::{Deserialize, Serialize};

use crate::domain::user::{Role, Session, User};

/// Candidate self-registration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub username: String,
    pub password: String,
    pub role: Role,
}

impl RegisterRequest {
    /// Candidates register with their email as username
    pub fn candidate(email: impl Into<String>, password: impl Into<String>) -> Self {
        let email = email.into();
        Self {
            username: email.clone(),
            email,
            password: password.into(),
            role: Role::Candidate,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterEmployerRequest {
    pub email: String,
    pub password: String,
    pub company_name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Tokens and account returned by login and registration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    #[serde(default)]
    pub access: Option<String>,
    #[serde(default)]
    pub refresh: Option<String>,
    pub user: User,
}

impl AuthResponse {
    /// Builds a session when the backend issued tokens
    pub fn into_session(self, company_name: Option<String>) -> Option<Session> {
        match (self.access, self.refresh) {
            (Some(access), Some(refresh)) => Some(Session {
                access,
                refresh,
                user: self.user,
                company_name,
            }),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefreshRequest {
    pub refresh: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefreshResponse {
    pub access: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_candidate_registration_uses_email_as_username() {
        let req = RegisterRequest::candidate("a@b.io", "pw");
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["username"], "a@b.io");
        assert_eq!(json["role"], "candidate");
    }

    #[test]
    fn test_into_session_requires_tokens() {
        let body = serde_json::json!({
            "access": "acc",
            "refresh": "ref",
            "user": {"id": 1, "email": "a@b.io", "username": "a@b.io", "role": "employer"}
        });
        let resp: AuthResponse = serde_json::from_value(body).unwrap();
        let session = resp.into_session(Some("Acme".to_string())).unwrap();
        assert_eq!(session.access, "acc");
        assert_eq!(session.user.role, Role::Employer);
        assert!(!session.user.has_github);

        let no_tokens: AuthResponse = serde_json::from_value(serde_json::json!({
            "user": {"id": 1, "email": "a@b.io", "role": "candidate"}
        }))
        .unwrap();
        assert!(no_tokens.into_session(None).is_none());
    }
}
