//! Shared application state injected into every handler.

use sqlx::PgPool;
use std::sync::Arc;

use crate::application::services::{AuthService, PasswordService, SessionConfig, SessionService};
use crate::infrastructure::persistence::{PgSessionRepository, PgUserRepository};

pub type PgAuthService = AuthService<PgUserRepository, PgSessionRepository>;
pub type PgSessionService = SessionService<PgSessionRepository>;

#[derive(Clone)]
pub struct AppState {
    pub auth_service: Arc<PgAuthService>,
    pub session_service: Arc<PgSessionService>,
    pub db: Arc<PgPool>,
}

impl AppState {
    /// Wires the PostgreSQL repositories into the services.
    pub fn new(pool: Arc<PgPool>, session_config: SessionConfig) -> Self {
        let user_repository = Arc::new(PgUserRepository::new(pool.clone()));
        let session_repository = Arc::new(PgSessionRepository::new(pool.clone()));

        let session_service = Arc::new(SessionService::new(session_repository, session_config));
        let auth_service = Arc::new(AuthService::new(
            user_repository,
            session_service.clone(),
            PasswordService::new(),
        ));

        Self {
            auth_service,
            session_service,
            db: pool,
        }
    }
}
