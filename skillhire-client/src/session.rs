//! Session context
//!
//! Holds the tokens and account of the logged-in user. A `SessionContext` is
//! cheap to clone and every clone observes the same session, so the API
//! client and its callers stay in sync when a token is refreshed or the
//! session is dropped.

use skillhire_core::domain::user::{Role, Session};
use std::sync::{Arc, PoisonError, RwLock};

#[derive(Debug, Clone, Default)]
pub struct SessionContext {
    inner: Arc<RwLock<Option<Session>>>,
}

impl SessionContext {
    /// Creates an empty (logged out) context
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a context that starts out logged in
    pub fn from_session(session: Session) -> Self {
        Self {
            inner: Arc::new(RwLock::new(Some(session))),
        }
    }

    /// Snapshot of the current session
    pub fn get(&self) -> Option<Session> {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn set(&self, session: Session) {
        *self.inner.write().unwrap_or_else(PoisonError::into_inner) = Some(session);
    }

    /// Replaces the access token after a refresh
    ///
    /// Returns `false` when there is no session to update.
    pub fn set_access_token(&self, access: impl Into<String>) -> bool {
        let mut guard = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        match guard.as_mut() {
            Some(session) => {
                session.access = access.into();
                true
            }
            None => false,
        }
    }

    pub fn clear(&self) {
        *self.inner.write().unwrap_or_else(PoisonError::into_inner) = None;
    }

    pub fn access_token(&self) -> Option<String> {
        self.read_with(|s| s.access.clone())
    }

    pub fn refresh_token(&self) -> Option<String> {
        self.read_with(|s| s.refresh.clone())
    }

    pub fn role(&self) -> Option<Role> {
        self.read_with(|s| s.user.role)
    }

    pub fn is_authenticated(&self) -> bool {
        self.read_with(|_| ()).is_some()
    }

    fn read_with<T>(&self, f: impl FnOnce(&Session) -> T) -> Option<T> {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .as_ref()
            .map(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use skillhire_core::domain::{ResourceId, user::User};

    fn session() -> Session {
        Session {
            access: "access-1".to_string(),
            refresh: "refresh-1".to_string(),
            user: User {
                id: ResourceId::from(1_i64),
                email: "dev@example.com".to_string(),
                username: "dev@example.com".to_string(),
                role: Role::Candidate,
                has_github: false,
            },
            company_name: None,
        }
    }

    #[test]
    fn test_lifecycle() {
        let ctx = SessionContext::new();
        assert!(!ctx.is_authenticated());
        assert!(!ctx.set_access_token("ignored"));

        ctx.set(session());
        assert!(ctx.is_authenticated());
        assert_eq!(ctx.role(), Some(Role::Candidate));
        assert_eq!(ctx.access_token().as_deref(), Some("access-1"));

        ctx.clear();
        assert!(ctx.get().is_none());
        assert!(ctx.refresh_token().is_none());
    }

    #[test]
    fn test_clones_share_state() {
        let ctx = SessionContext::from_session(session());
        let other = ctx.clone();

        assert!(other.set_access_token("access-2"));
        assert_eq!(ctx.access_token().as_deref(), Some("access-2"));
        assert_eq!(ctx.refresh_token().as_deref(), Some("refresh-1"));

        other.clear();
        assert!(!ctx.is_authenticated());
    }
}
