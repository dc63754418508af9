//! Repository trait for login sessions.

use crate::domain::entities::{Session, User};
use crate::error::AppError;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// Storage for sessions issued by
/// [`crate::application::services::SessionService`].
///
/// The repository only stores rows; expiry and refresh policy live in the
/// service.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgSessionRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SessionRepository: Send + Sync {
    /// Persists a new session.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors, including a
    /// missing user.
    async fn insert(&self, session: &Session) -> Result<(), AppError>;

    /// Loads a session together with its user.
    ///
    /// Expired rows are returned as-is; the caller decides what to do.
    /// Returned sessions have `fresh = false`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_with_user(&self, session_id: &str)
    -> Result<Option<(Session, User)>, AppError>;

    /// Moves the expiry of a session.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn update_expiration(
        &self,
        session_id: &str,
        expires_at: DateTime<Utc>,
    ) -> Result<(), AppError>;

    /// Deletes one session. Deleting an unknown id is not an error.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn delete(&self, session_id: &str) -> Result<(), AppError>;

    /// Deletes every session of a user, returning how many were removed.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn delete_for_user(&self, user_id: &str) -> Result<u64, AppError>;

    /// Deletes every session whose expiry is in the past.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn delete_expired(&self) -> Result<u64, AppError>;
}
