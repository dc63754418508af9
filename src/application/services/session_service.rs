//! Session authority: issues, validates and revokes login sessions.

use std::sync::Arc;

use axum_extra::extract::cookie::{Cookie, SameSite};
use chrono::{Duration, Utc};

use crate::domain::entities::{Session, User};
use crate::domain::repositories::SessionRepository;
use crate::error::AppError;
use crate::utils::id_generator::generate_session_id;

/// Default session cookie name.
pub const SESSION_COOKIE_NAME: &str = "auth_session";

/// Session lifetime and cookie settings.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    pub lifetime: Duration,
    pub cookie_name: String,
    /// Adds the `Secure` attribute. Enable in production (HTTPS only).
    pub secure_cookie: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            lifetime: Duration::days(30),
            cookie_name: SESSION_COOKIE_NAME.to_string(),
            secure_cookie: false,
        }
    }
}

/// Issues and validates sessions and the cookies that carry them.
///
/// Sessions expire `lifetime` after creation. A session that is used during
/// the second half of its lifetime is extended by a full lifetime and comes
/// back `fresh`, so the caller rewrites the cookie.
pub struct SessionService<R: SessionRepository> {
    repository: Arc<R>,
    config: SessionConfig,
}

impl<R: SessionRepository> SessionService<R> {
    pub fn new(repository: Arc<R>, config: SessionConfig) -> Self {
        Self { repository, config }
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Creates and stores a new session for `user_id`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn create_session(&self, user_id: &str) -> Result<Session, AppError> {
        let session = Session::new(
            generate_session_id(),
            user_id.to_string(),
            Utc::now() + self.config.lifetime,
            true,
        );

        self.repository.insert(&session).await?;
        tracing::debug!(user_id, "Session created");

        Ok(session)
    }

    /// Validates a session id.
    ///
    /// Returns `None` for unknown or expired sessions. Expired rows are
    /// deleted on the way out.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn validate_session(
        &self,
        session_id: &str,
    ) -> Result<Option<(Session, User)>, AppError> {
        let Some((mut session, user)) = self.repository.find_with_user(session_id).await? else {
            return Ok(None);
        };

        let now = Utc::now();

        if session.is_expired_at(now) {
            self.repository.delete(&session.id).await?;
            return Ok(None);
        }

        if session.needs_refresh_at(now, self.config.lifetime) {
            session.expires_at = now + self.config.lifetime;
            self.repository
                .update_expiration(&session.id, session.expires_at)
                .await?;
            session.fresh = true;
        } else {
            session.fresh = false;
        }

        Ok(Some((session, user)))
    }

    /// Revokes one session.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn invalidate_session(&self, session_id: &str) -> Result<(), AppError> {
        self.repository.delete(session_id).await
    }

    /// Revokes every session of a user.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn invalidate_user_sessions(&self, user_id: &str) -> Result<u64, AppError> {
        self.repository.delete_for_user(user_id).await
    }

    /// Removes expired sessions from storage.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn delete_expired_sessions(&self) -> Result<u64, AppError> {
        self.repository.delete_expired().await
    }

    /// Cookie carrying `session`'s id.
    pub fn create_session_cookie(&self, session: &Session) -> Cookie<'static> {
        self.cookie(session.id.clone(), self.config.lifetime.num_seconds())
    }

    /// Cookie that makes the browser drop the session cookie.
    pub fn create_blank_session_cookie(&self) -> Cookie<'static> {
        self.cookie(String::new(), 0)
    }

    fn cookie(&self, value: String, max_age_seconds: i64) -> Cookie<'static> {
        Cookie::build((self.config.cookie_name.clone(), value))
            .path("/")
            .http_only(true)
            .same_site(SameSite::Lax)
            .secure(self.config.secure_cookie)
            .max_age(time::Duration::seconds(max_age_seconds))
            .build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockSessionRepository;
    use mockall::predicate::eq;

    fn test_user() -> User {
        User::new(
            "user-1".to_string(),
            "alice".to_string(),
            None,
            Utc::now(),
        )
    }

    fn stored_session(expires_in: Duration) -> Session {
        Session::new(
            "sess-1".to_string(),
            "user-1".to_string(),
            Utc::now() + expires_in,
            false,
        )
    }

    #[tokio::test]
    async fn test_create_session_persists_fresh_session() {
        let mut mock_repo = MockSessionRepository::new();

        mock_repo
            .expect_insert()
            .withf(|s| s.user_id == "user-1" && s.fresh && s.id.len() == 27)
            .times(1)
            .returning(|_| Ok(()));

        let service = SessionService::new(Arc::new(mock_repo), SessionConfig::default());

        let session = service.create_session("user-1").await.unwrap();

        assert_eq!(session.user_id, "user-1");
        assert!(session.fresh);
        assert!(session.expires_at > Utc::now() + Duration::days(29));
    }

    #[tokio::test]
    async fn test_create_session_propagates_db_error() {
        let mut mock_repo = MockSessionRepository::new();

        mock_repo.expect_insert().times(1).returning(|_| {
            Err(AppError::internal("Database error", serde_json::json!({})))
        });

        let service = SessionService::new(Arc::new(mock_repo), SessionConfig::default());

        assert!(service.create_session("user-1").await.is_err());
    }

    #[tokio::test]
    async fn test_validate_unknown_session() {
        let mut mock_repo = MockSessionRepository::new();

        mock_repo
            .expect_find_with_user()
            .times(1)
            .returning(|_| Ok(None));

        let service = SessionService::new(Arc::new(mock_repo), SessionConfig::default());

        assert!(service.validate_session("nope").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_validate_expired_session_deletes_it() {
        let mut mock_repo = MockSessionRepository::new();

        mock_repo
            .expect_find_with_user()
            .times(1)
            .returning(|_| Ok(Some((stored_session(-Duration::minutes(1)), test_user()))));

        mock_repo
            .expect_delete()
            .with(eq("sess-1"))
            .times(1)
            .returning(|_| Ok(()));

        let service = SessionService::new(Arc::new(mock_repo), SessionConfig::default());

        assert!(service.validate_session("sess-1").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_validate_young_session_is_not_refreshed() {
        let mut mock_repo = MockSessionRepository::new();

        mock_repo
            .expect_find_with_user()
            .times(1)
            .returning(|_| Ok(Some((stored_session(Duration::days(29)), test_user()))));

        mock_repo.expect_update_expiration().times(0);

        let service = SessionService::new(Arc::new(mock_repo), SessionConfig::default());

        let (session, user) = service.validate_session("sess-1").await.unwrap().unwrap();

        assert!(!session.fresh);
        assert_eq!(user.username, "alice");
    }

    #[tokio::test]
    async fn test_validate_old_session_is_extended() {
        let mut mock_repo = MockSessionRepository::new();

        mock_repo
            .expect_find_with_user()
            .times(1)
            .returning(|_| Ok(Some((stored_session(Duration::days(3)), test_user()))));

        mock_repo
            .expect_update_expiration()
            .withf(|id, expires_at| id == "sess-1" && *expires_at > Utc::now() + Duration::days(29))
            .times(1)
            .returning(|_, _| Ok(()));

        let service = SessionService::new(Arc::new(mock_repo), SessionConfig::default());

        let (session, _) = service.validate_session("sess-1").await.unwrap().unwrap();

        assert!(session.fresh);
        assert!(session.expires_at > Utc::now() + Duration::days(29));
    }

    #[tokio::test]
    async fn test_invalidate_user_sessions() {
        let mut mock_repo = MockSessionRepository::new();

        mock_repo
            .expect_delete_for_user()
            .with(eq("user-1"))
            .times(1)
            .returning(|_| Ok(3));

        let service = SessionService::new(Arc::new(mock_repo), SessionConfig::default());

        assert_eq!(service.invalidate_user_sessions("user-1").await.unwrap(), 3);
    }

    #[test]
    fn test_session_cookie_attributes() {
        let config = SessionConfig {
            secure_cookie: true,
            ..SessionConfig::default()
        };
        let service = SessionService::new(Arc::new(MockSessionRepository::new()), config);
        let session = stored_session(Duration::days(30));

        let cookie = service.create_session_cookie(&session);

        assert_eq!(cookie.name(), SESSION_COOKIE_NAME);
        assert_eq!(cookie.value(), "sess-1");
        assert_eq!(cookie.path(), Some("/"));
        assert_eq!(cookie.http_only(), Some(true));
        assert_eq!(cookie.secure(), Some(true));
        assert_eq!(cookie.same_site(), Some(SameSite::Lax));
        assert_eq!(cookie.max_age(), Some(time::Duration::days(30)));
    }

    #[test]
    fn test_blank_session_cookie() {
        let service = SessionService::new(
            Arc::new(MockSessionRepository::new()),
            SessionConfig::default(),
        );

        let cookie = service.create_blank_session_cookie();

        assert_eq!(cookie.name(), SESSION_COOKIE_NAME);
        assert_eq!(cookie.value(), "");
        assert_eq!(cookie.max_age(), Some(time::Duration::ZERO));
        assert_eq!(cookie.secure(), Some(false));
    }
}
