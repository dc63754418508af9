//! PostgreSQL implementation of session repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use std::sync::Arc;

use crate::domain::entities::{Session, User};
use crate::domain::repositories::SessionRepository;
use crate::error::AppError;

/// PostgreSQL repository for login sessions.
///
/// Rows cascade away with their user.
pub struct PgSessionRepository {
    pool: Arc<PgPool>,
}

impl PgSessionRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[derive(FromRow)]
struct SessionUserRow {
    session_id: String,
    expires_at: DateTime<Utc>,
    user_id: String,
    username: String,
    password_hash: Option<String>,
    user_created_at: DateTime<Utc>,
}

#[async_trait]
impl SessionRepository for PgSessionRepository {
    async fn insert(&self, session: &Session) -> Result<(), AppError> {
        sqlx::query(
            r#"
            INSERT INTO sessions (id, user_id, expires_at)
            VALUES ($1, $2, $3)
            "#,
        )
        .bind(&session.id)
        .bind(&session.user_id)
        .bind(session.expires_at)
        .execute(self.pool.as_ref())
        .await?;

        Ok(())
    }

    async fn find_with_user(
        &self,
        session_id: &str,
    ) -> Result<Option<(Session, User)>, AppError> {
        let row = sqlx::query_as::<_, SessionUserRow>(
            r#"
            SELECT s.id AS session_id,
                   s.expires_at,
                   u.id AS user_id,
                   u.username,
                   u.password_hash,
                   u.created_at AS user_created_at
            FROM sessions s
            INNER JOIN users u ON u.id = s.user_id
            WHERE s.id = $1
            "#,
        )
        .bind(session_id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(|r| {
            let session = Session::new(r.session_id, r.user_id.clone(), r.expires_at, false);
            let user = User::new(r.user_id, r.username, r.password_hash, r.user_created_at);
            (session, user)
        }))
    }

    async fn update_expiration(
        &self,
        session_id: &str,
        expires_at: DateTime<Utc>,
    ) -> Result<(), AppError> {
        sqlx::query(
            r#"
            UPDATE sessions
            SET expires_at = $2
            WHERE id = $1
            "#,
        )
        .bind(session_id)
        .bind(expires_at)
        .execute(self.pool.as_ref())
        .await?;

        Ok(())
    }

    async fn delete(&self, session_id: &str) -> Result<(), AppError> {
        sqlx::query("DELETE FROM sessions WHERE id = $1")
            .bind(session_id)
            .execute(self.pool.as_ref())
            .await?;

        Ok(())
    }

    async fn delete_for_user(&self, user_id: &str) -> Result<u64, AppError> {
        let result = sqlx::query("DELETE FROM sessions WHERE user_id = $1")
            .bind(user_id)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected())
    }

    async fn delete_expired(&self) -> Result<u64, AppError> {
        let result = sqlx::query("DELETE FROM sessions WHERE expires_at <= NOW()")
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected())
    }
}
