//! Home page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{Extension, response::IntoResponse};

use crate::web::middleware::web_auth::CurrentUser;

/// Template for the home page.
#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub username: String,
}

/// Renders the home page for the logged-in user.
///
/// # Endpoint
///
/// `GET /`
///
/// Requires [`crate::web::middleware::web_auth::layer`].
pub async fn home_handler(Extension(current): Extension<CurrentUser>) -> impl IntoResponse {
    HomeTemplate {
        username: current.user.username,
    }
}
