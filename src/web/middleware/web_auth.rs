//! Cookie session middleware for browser pages.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::CookieJar;

use crate::domain::entities::{Session, User};
use crate::state::AppState;

/// The logged-in user, inserted into request extensions by [`layer`].
#[derive(Debug, Clone)]
pub struct CurrentUser {
    pub user: User,
    pub session: Session,
}

/// Requires a valid session cookie.
///
/// # Flow
///
/// 1. Read the `auth_session` cookie
/// 2. Validate it with [`crate::application::services::SessionService`]
/// 3. On success, expose [`CurrentUser`] to the handler and, if the session
///    was just extended, send the refreshed cookie with the response
/// 4. Missing cookie: redirect to `/login`
/// 5. Unknown or expired session: clear the cookie and redirect to `/login`
///
/// Unlike the JSON API, failures redirect instead of returning `401`.
///
/// # Example
///
/// ```rust,ignore
/// let protected = Router::new()
///     .route("/", get(home_handler))
///     .route_layer(middleware::from_fn_with_state(state.clone(), web_auth::layer));
/// ```
pub async fn layer(
    State(st): State<AppState>,
    jar: CookieJar,
    mut req: Request,
    next: Next,
) -> Response {
    let sessions = &st.session_service;

    let Some(session_id) = jar
        .get(&sessions.config().cookie_name)
        .map(|c| c.value().to_string())
        .filter(|v| !v.is_empty())
    else {
        return Redirect::to("/login").into_response();
    };

    match sessions.validate_session(&session_id).await {
        Ok(Some((session, user))) => {
            let refreshed = session
                .fresh
                .then(|| sessions.create_session_cookie(&session));

            req.extensions_mut().insert(CurrentUser { user, session });
            let response = next.run(req).await;

            match refreshed {
                Some(cookie) => (jar.add(cookie), response).into_response(),
                None => response,
            }
        }
        Ok(None) => (
            jar.add(sessions.create_blank_session_cookie()),
            Redirect::to("/login"),
        )
            .into_response(),
        Err(e) => e.into_response(),
    }
}
