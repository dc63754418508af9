//! Repository trait definitions for the domain layer.
//!
//! The traits abstract data access so that services can be tested against
//! mocks and run against PostgreSQL in production.
//!
//! # Architecture
//!
//! - Traits define the contract for data operations
//! - Implementations live in `crate::infrastructure::persistence`
//! - Mock implementations are auto-generated via `mockall` for testing
//!
//! # Available Repositories
//!
//! - [`UserRepository`] - Account lookup and maintenance
//! - [`SessionRepository`] - Session rows for the session authority

pub mod session_repository;
pub mod user_repository;

pub use session_repository::SessionRepository;
pub use user_repository::UserRepository;

#[cfg(test)]
pub use session_repository::MockSessionRepository;
#[cfg(test)]
pub use user_repository::MockUserRepository;
