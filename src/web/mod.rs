//! Browser-facing pages.
//!
//! Server-rendered with Askama templates.
//!
//! # Modules
//!
//! - [`handlers`] - Template rendering handlers
//! - [`middleware`] - Session cookie middleware
//! - [`routes`] - Page route configuration

pub mod handlers;
pub mod middleware;
pub mod routes;
