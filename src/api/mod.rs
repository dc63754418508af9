//! JSON API layer.
//!
//! # Modules
//!
//! - [`dto`] - Request/response types and input schemas
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - Request tracing
//! - [`routes`] - Route configuration

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
