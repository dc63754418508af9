//! API route configuration.

use crate::api::handlers::{login_handler, logout_handler};
use crate::state::AppState;
use axum::{Router, routing::post};

/// Session endpoints. Both are public; logout works without a session.
///
/// # Endpoints
///
/// - `POST /login`  - Check credentials, set the session cookie, redirect to `/`
/// - `POST /logout` - Revoke the session, clear the cookie, redirect to `/login`
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/login", post(login_handler))
        .route("/logout", post(logout_handler))
}
