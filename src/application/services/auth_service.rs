//! Username/password authentication and account maintenance.

use std::sync::Arc;

use serde_json::json;
use thiserror::Error;

use crate::application::services::password_service::PasswordService;
use crate::application::services::session_service::SessionService;
use crate::domain::entities::{NewUser, Session, User};
use crate::domain::repositories::{SessionRepository, UserRepository};
use crate::error::AppError;
use crate::utils::id_generator::generate_user_id;

/// Message for every credential mismatch. Unknown user, missing hash and
/// wrong password must be indistinguishable.
pub const INVALID_CREDENTIALS_MESSAGE: &str = "Username & password is incorrect";

/// Message for failures the user cannot act on.
pub const UNEXPECTED_ERROR_MESSAGE: &str = "An error occurred while logging in";

/// Why a login attempt did not produce a session.
#[derive(Debug, Error)]
pub enum LoginError {
    /// Input did not match the credential schema.
    #[error("{0}")]
    Validation(String),

    /// Unknown username, account without password, or wrong password.
    #[error("{}", INVALID_CREDENTIALS_MESSAGE)]
    InvalidCredentials,

    /// Anything else. The source is logged, never shown.
    #[error("{}", UNEXPECTED_ERROR_MESSAGE)]
    Unexpected(#[source] AppError),
}

impl LoginError {
    fn unexpected(err: AppError) -> Self {
        tracing::error!(error = %err, details = ?err.to_error_info().details, "Login failed unexpectedly");
        LoginError::Unexpected(err)
    }
}

/// Service behind the login and logout actions.
///
/// A login is three dependent steps: find the user by username (ignoring
/// case), verify the password against the stored argon2 hash, and ask the
/// session authority for a new session.
pub struct AuthService<U: UserRepository, S: SessionRepository> {
    users: Arc<U>,
    sessions: Arc<SessionService<S>>,
    passwords: PasswordService,
}

impl<U: UserRepository, S: SessionRepository> AuthService<U, S> {
    pub fn new(users: Arc<U>, sessions: Arc<SessionService<S>>, passwords: PasswordService) -> Self {
        Self {
            users,
            sessions,
            passwords,
        }
    }

    /// Checks credentials and opens a session for the user.
    ///
    /// `username` is expected to be trimmed already.
    ///
    /// # Errors
    ///
    /// - [`LoginError::InvalidCredentials`] for any credential mismatch
    /// - [`LoginError::Unexpected`] on storage or hashing failures
    pub async fn login(&self, username: &str, password: &str) -> Result<Session, LoginError> {
        let user = self.authenticate(username, password).await?;

        let session = self
            .sessions
            .create_session(&user.id)
            .await
            .map_err(LoginError::unexpected)?;

        tracing::info!(user_id = %user.id, "User logged in");

        Ok(session)
    }

    /// Checks credentials without creating a session.
    ///
    /// # Errors
    ///
    /// See [`Self::login`].
    pub async fn authenticate(&self, username: &str, password: &str) -> Result<User, LoginError> {
        let Some(user) = self
            .users
            .find_by_username(username)
            .await
            .map_err(LoginError::unexpected)?
        else {
            tracing::info!(username, "Login rejected: unknown username");
            return Err(LoginError::InvalidCredentials);
        };

        let Some(password_hash) = user.password_hash.clone().filter(|h| !h.is_empty()) else {
            tracing::info!(user_id = %user.id, "Login rejected: account has no password");
            return Err(LoginError::InvalidCredentials);
        };

        let valid = self
            .verify_password(password_hash, password.to_string())
            .await
            .map_err(LoginError::unexpected)?;

        if !valid {
            tracing::info!(user_id = %user.id, "Login rejected: wrong password");
            return Err(LoginError::InvalidCredentials);
        }

        Ok(user)
    }

    /// Ends a session. Unknown ids are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn logout(&self, session_id: &str) -> Result<(), AppError> {
        self.sessions.invalidate_session(session_id).await
    }

    /// Creates an account, optionally with a password.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] for a blank username.
    /// Returns [`AppError::Conflict`] if the username exists in any letter case.
    /// Returns [`AppError::Internal`] on storage or hashing failures.
    pub async fn create_user(&self, username: &str, password: Option<&str>) -> Result<User, AppError> {
        let username = username.trim();
        if username.is_empty() {
            return Err(AppError::bad_request("Username is required", json!({})));
        }

        if self.users.find_by_username(username).await?.is_some() {
            return Err(AppError::conflict(
                "Username already exists",
                json!({ "username": username }),
            ));
        }

        let password_hash = match password {
            Some(password) => Some(self.hash_password(password.to_string()).await?),
            None => None,
        };

        self.users
            .create(NewUser {
                id: generate_user_id(),
                username: username.to_string(),
                password_hash,
            })
            .await
    }

    /// Sets a new password and revokes the user's existing sessions.
    ///
    /// Passing `None` removes the password, which locks the account.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no user has this username.
    /// Returns [`AppError::Internal`] on storage or hashing failures.
    pub async fn set_password(&self, username: &str, password: Option<&str>) -> Result<User, AppError> {
        let user = self.users.find_by_username(username).await?.ok_or_else(|| {
            AppError::not_found("User not found", json!({ "username": username }))
        })?;

        let password_hash = match password {
            Some(password) => Some(self.hash_password(password.to_string()).await?),
            None => None,
        };

        self.users
            .set_password_hash(&user.id, password_hash.clone())
            .await?;

        let revoked = self.sessions.invalidate_user_sessions(&user.id).await?;
        tracing::info!(user_id = %user.id, revoked, "Password changed");

        Ok(User {
            password_hash,
            ..user
        })
    }

    /// Lists all accounts.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn list_users(&self) -> Result<Vec<User>, AppError> {
        self.users.list().await
    }

    async fn verify_password(&self, password_hash: String, password: String) -> Result<bool, AppError> {
        let passwords = self.passwords.clone();
        tokio::task::spawn_blocking(move || passwords.verify(&password_hash, &password)).await?
    }

    async fn hash_password(&self, password: String) -> Result<String, AppError> {
        let passwords = self.passwords.clone();
        tokio::task::spawn_blocking(move || passwords.hash(&password)).await?
    }
}
