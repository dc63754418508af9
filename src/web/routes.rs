//! Browser page route configuration.

use crate::state::AppState;
use crate::web::handlers::{home_handler, login_handler};
use axum::{Router, routing::get};

/// Pages that require a session.
///
/// Protected via [`crate::web::middleware::web_auth`].
///
/// # Endpoints
///
/// - `GET /` - Home page
pub fn protected_routes() -> Router<AppState> {
    Router::new().route("/", get(home_handler))
}

/// Pages reachable without a session.
///
/// # Endpoints
///
/// - `GET /login` - Login page
pub fn public_routes() -> Router<AppState> {
    Router::new().route("/login", get(login_handler))
}
