#![allow(dead_code)]

use axum_test::TestServer;
use login_portal::application::services::SessionConfig;
use login_portal::domain::entities::User;
use login_portal::routes::router;
use login_portal::state::AppState;
use sqlx::PgPool;
use std::sync::Arc;

pub const PASSWORD: &str = "correct horse battery staple";

pub fn create_test_state(pool: PgPool) -> AppState {
    AppState::new(Arc::new(pool), SessionConfig::default())
}

/// Full application router over a fresh state.
pub fn make_server(pool: PgPool) -> TestServer {
    TestServer::new(router(create_test_state(pool))).unwrap()
}

/// Creates an account through the service, hashing `password` with argon2id.
pub async fn create_test_user(pool: &PgPool, username: &str, password: Option<&str>) -> User {
    create_test_state(pool.clone())
        .auth_service
        .create_user(username, password)
        .await
        .unwrap()
}

/// Inserts a session row directly, bypassing the session service.
pub async fn insert_session(pool: &PgPool, id: &str, user_id: &str, expires_in: chrono::Duration) {
    sqlx::query("INSERT INTO sessions (id, user_id, expires_at) VALUES ($1, $2, $3)")
        .bind(id)
        .bind(user_id)
        .bind(chrono::Utc::now() + expires_in)
        .execute(pool)
        .await
        .unwrap();
}

pub async fn count_sessions(pool: &PgPool, user_id: &str) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM sessions WHERE user_id = $1")
        .bind(user_id)
        .fetch_one(pool)
        .await
        .unwrap()
}
