//! Login page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::State,
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::CookieJar;

use crate::state::AppState;

/// Template for the login page.
///
/// Renders `templates/login.html`: a username/password form that posts JSON
/// to `/api/login`, shows the returned `error` string, and follows the
/// redirect on success.
#[derive(Template, WebTemplate)]
#[template(path = "login.html")]
pub struct LoginTemplate {}

/// Renders the login page.
///
/// # Endpoint
///
/// `GET /login`
///
/// Visitors who already hold a valid session are sent to `/`.
pub async fn login_handler(State(state): State<AppState>, jar: CookieJar) -> Response {
    let sessions = &state.session_service;

    if let Some(cookie) = jar.get(&sessions.config().cookie_name)
        && !cookie.value().is_empty()
    {
        match sessions.validate_session(cookie.value()).await {
            Ok(Some(_)) => return Redirect::to("/").into_response(),
            Ok(None) => {}
            Err(e) => tracing::warn!(error = %e, "Session check on login page failed"),
        }
    }

    LoginTemplate {}.into_response()
}
