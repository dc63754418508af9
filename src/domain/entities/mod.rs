//! Core domain entities.
//!
//! Entities are plain data structures without persistence logic.
//!
//! - [`User`] - An account that can log in
//! - [`Session`] - A login session issued by the session authority
//!
//! Creation inputs use separate structs (`NewUser`).

pub mod session;
pub mod user;

pub use session::Session;
pub use user::{NewUser, User};
