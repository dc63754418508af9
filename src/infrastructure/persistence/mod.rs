//! PostgreSQL repository implementations.
//!
//! Concrete implementations of domain repository traits using SQLx.
//!
//! # Repositories
//!
//! - [`PgUserRepository`] - Account storage and case-insensitive lookup
//! - [`PgSessionRepository`] - Session rows for the session authority

pub mod pg_session_repository;
pub mod pg_user_repository;

pub use pg_session_repository::PgSessionRepository;
pub use pg_user_repository::PgUserRepository;
