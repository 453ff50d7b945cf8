//! Per-session admin authentication.
//!
//! Each browser session is identified by an opaque id stored in the
//! `prep_session` cookie. The cookie carries no `Max-Age`, so it is dropped
//! when the browser session ends, and with it the admin state.
//!
//! - `AdminAuth`: the two-state machine for a single session.
//! - `SessionsState`: a clonable, thread-safe map from session id to
//!   `AdminAuth`, injected into the Actix application as `web::Data`.

use crate::error::{AppError, Result};
use actix_web::cookie::{Cookie, SameSite};
use actix_web::HttpRequest;
use log::{info, warn};
use serde::Serialize;
use std::{collections::HashMap, sync::Arc};
use tokio::sync::RwLock;
use uuid::Uuid;

/// Name of the cookie holding the session id.
pub const SESSION_COOKIE: &str = "prep_session";

/// Admin state of one session. There is no way back to `Unauthenticated`
/// other than ending the session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum AdminAuth {
    #[default]
    Unauthenticated,
    Authenticated,
}

impl AdminAuth {
    /// Applies a password submission.
    ///
    /// Only an exact match with `secret` authenticates. Any other string
    /// returns [`AppError::InvalidPassword`]; the caller keeps the current
    /// state, so a wrong password never logs an authenticated session out.
    pub fn submit_password(self, submitted: &str, secret: &str) -> Result<AdminAuth> {
        if submitted == secret {
            Ok(AdminAuth::Authenticated)
        } else {
            Err(AppError::InvalidPassword)
        }
    }

    pub fn is_authenticated(self) -> bool {
        self == AdminAuth::Authenticated
    }
}

/// Shared session table plus the configured admin secret.
#[derive(Clone)]
pub struct SessionsState {
    /// Session id to admin state. Only sessions that logged in are stored;
    /// an unknown id means `Unauthenticated`.
    sessions: Arc<RwLock<HashMap<String, AdminAuth>>>,
    secret: Arc<str>,
}

impl SessionsState {
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
            secret: Arc::from(secret.into()),
        }
    }

    /// Admin state of the session the request belongs to.
    pub async fn status(&self, req: &HttpRequest) -> AdminAuth {
        match session_id(req) {
            Some(id) => self.status_of(&id).await,
            None => AdminAuth::Unauthenticated,
        }
    }

    pub async fn status_of(&self, session_id: &str) -> AdminAuth {
        let sessions = self.sessions.read().await;
        sessions.get(session_id).copied().unwrap_or_default()
    }

    /// Submits `password` for the request's session.
    ///
    /// On success returns the session id the client must keep sending. An
    /// already authenticated session keeps its id; any other request gets a
    /// freshly generated one, so a session id chosen before login is never
    /// promoted to admin.
    pub async fn login(&self, req: &HttpRequest, password: &str) -> Result<String> {
        let id = match session_id(req) {
            Some(id) if self.status_of(&id).await.is_authenticated() => id,
            _ => Uuid::new_v4().to_string(),
        };
        self.login_session(&id, password).await?;
        Ok(id)
    }

    pub async fn login_session(&self, session_id: &str, password: &str) -> Result<AdminAuth> {
        let mut sessions = self.sessions.write().await;
        let current = sessions.get(session_id).copied().unwrap_or_default();
        match current.submit_password(password, &self.secret) {
            Ok(next) => {
                sessions.insert(session_id.to_string(), next);
                info!("Admin login accepted");
                Ok(next)
            }
            Err(e) => {
                warn!("Admin login rejected: incorrect password");
                Err(e)
            }
        }
    }

    /// Fails with [`AppError::Unauthorized`] unless the request's session is
    /// authenticated.
    pub async fn require_admin(&self, req: &HttpRequest) -> Result<()> {
        if self.status(req).await.is_authenticated() {
            Ok(())
        } else {
            warn!("Rejected admin request to {}", req.path());
            Err(AppError::Unauthorized)
        }
    }
}

fn session_id(req: &HttpRequest) -> Option<String> {
    req.cookie(SESSION_COOKIE)
        .map(|c| c.value().to_string())
        .filter(|v| !v.is_empty())
}

/// Browser-session cookie carrying `session_id`.
pub fn session_cookie(session_id: &str) -> Cookie<'static> {
    Cookie::build(SESSION_COOKIE, session_id.to_string())
        .path("/")
        .http_only(true)
        .same_site(SameSite::Strict)
        .finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test::TestRequest;

    const SECRET: &str = "mysecret123";

    #[test]
    fn exact_secret_authenticates() {
        let next = AdminAuth::Unauthenticated
            .submit_password(SECRET, SECRET)
            .unwrap();
        assert_eq!(next, AdminAuth::Authenticated);
    }

    #[test]
    fn other_strings_are_rejected() {
        for attempt in ["", "mysecret", "MYSECRET123", "mysecret123 ", " mysecret123"] {
            let result = AdminAuth::Unauthenticated.submit_password(attempt, SECRET);
            assert!(matches!(result, Err(AppError::InvalidPassword)), "{attempt:?}");
        }
    }

    #[test]
    fn wrong_password_is_rejected_even_when_authenticated() {
        let result = AdminAuth::Authenticated.submit_password("wrong", SECRET);
        assert!(matches!(result, Err(AppError::InvalidPassword)));
    }

    #[actix_web::test]
    async fn wrong_password_keeps_an_authenticated_session() {
        let state = SessionsState::new(SECRET);
        state.login_session("a", SECRET).await.unwrap();

        assert!(matches!(
            state.login_session("a", "wrong").await,
            Err(AppError::InvalidPassword)
        ));
        assert_eq!(state.status_of("a").await, AdminAuth::Authenticated);
    }

    #[actix_web::test]
    async fn sessions_are_independent() {
        let state = SessionsState::new(SECRET);

        assert!(state.login_session("a", "wrong").await.is_err());
        assert_eq!(state.status_of("a").await, AdminAuth::Unauthenticated);

        state.login_session("a", SECRET).await.unwrap();
        assert_eq!(state.status_of("a").await, AdminAuth::Authenticated);
        assert_eq!(state.status_of("b").await, AdminAuth::Unauthenticated);
    }

    #[actix_web::test]
    async fn requests_are_matched_by_cookie() {
        let state = SessionsState::new(SECRET);
        state.login_session("abc", SECRET).await.unwrap();

        let with_cookie = TestRequest::default()
            .cookie(Cookie::new(SESSION_COOKIE, "abc"))
            .to_http_request();
        assert!(state.require_admin(&with_cookie).await.is_ok());

        let other = TestRequest::default()
            .cookie(Cookie::new(SESSION_COOKIE, "xyz"))
            .to_http_request();
        assert!(matches!(
            state.require_admin(&other).await,
            Err(AppError::Unauthorized)
        ));

        let anonymous = TestRequest::default().to_http_request();
        assert_eq!(state.status(&anonymous).await, AdminAuth::Unauthenticated);
    }

    #[actix_web::test]
    async fn login_without_cookie_issues_a_session_id() {
        let state = SessionsState::new(SECRET);
        let req = TestRequest::default().to_http_request();

        let id = state.login(&req, SECRET).await.unwrap();
        assert!(!id.is_empty());
        assert_eq!(state.status_of(&id).await, AdminAuth::Authenticated);
    }

    #[actix_web::test]
    async fn login_replaces_a_session_id_chosen_before_login() {
        let state = SessionsState::new(SECRET);
        let req = TestRequest::default()
            .cookie(Cookie::new(SESSION_COOKIE, "planted-id"))
            .to_http_request();

        let id = state.login(&req, SECRET).await.unwrap();
        assert_ne!(id, "planted-id");
        assert_eq!(state.status_of(&id).await, AdminAuth::Authenticated);
        assert_eq!(state.status_of("planted-id").await, AdminAuth::Unauthenticated);
    }

    #[actix_web::test]
    async fn authenticated_session_keeps_its_id_on_login() {
        let state = SessionsState::new(SECRET);
        state.login_session("known", SECRET).await.unwrap();
        let req = TestRequest::default()
            .cookie(Cookie::new(SESSION_COOKIE, "known"))
            .to_http_request();

        assert_eq!(state.login(&req, SECRET).await.unwrap(), "known");
    }
}
