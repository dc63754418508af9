//! Application layer services implementing business logic.
//!
//! Services consume repository traits and give handlers and the admin CLI
//! a small API to call.
//!
//! # Available Services
//!
//! - [`services::auth_service::AuthService`] - Login, logout and account maintenance
//! - [`services::session_service::SessionService`] - Session authority (sessions and their cookies)
//! - [`services::password_service::PasswordService`] - Argon2id hashing with fixed parameters

pub mod services;
