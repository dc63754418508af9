//! Data Transfer Objects for API requests and responses.
//!
//! DTOs use Serde for JSON and validator for input schemas.

pub mod health;
pub mod login;
