//! Handler for the logout action.

use axum::{extract::State, response::Redirect};
use axum_extra::extract::CookieJar;

use crate::state::AppState;

/// Ends the current session and clears its cookie.
///
/// # Endpoint
///
/// `POST /api/logout`
///
/// # Response
///
/// Always **303 See Other** to `/login` with a blank `auth_session` cookie,
/// whether or not a session was present. A failure to delete the session row
/// is logged; the browser still drops the cookie.
pub async fn logout_handler(
    State(state): State<AppState>,
    jar: CookieJar,
) -> (CookieJar, Redirect) {
    let cookie_name = &state.session_service.config().cookie_name;

    if let Some(cookie) = jar.get(cookie_name)
        && !cookie.value().is_empty()
        && let Err(e) = state.auth_service.logout(cookie.value()).await
    {
        tracing::error!(error = %e, "Failed to revoke session on logout");
    }

    let blank = state.session_service.create_blank_session_cookie();

    (jar.add(blank), Redirect::to("/login"))
}
