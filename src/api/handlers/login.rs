//! Handler for the login action.

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::CookieJar;
use validator::Validate;

use crate::api::dto::login::{LoginErrorResponse, LoginValues, first_error_message};
use crate::application::services::LoginError;
use crate::state::AppState;

/// Logs a user in and starts a cookie session.
///
/// # Endpoint
///
/// `POST /api/login`
///
/// # Request Body
///
/// ```json
/// { "username": "alice", "password": "correct horse battery staple" }
/// ```
///
/// # Responses
///
/// - **303 See Other** to `/` with `Set-Cookie: auth_session=...` on success
/// - **422** `{"error": "Username is required"}` when the input fails the schema
/// - **401** `{"error": "Username & password is incorrect"}` for unknown
///   usernames, accounts without a password, and wrong passwords alike
/// - **500** `{"error": "An error occurred while logging in"}` otherwise
///
/// The redirect is the success value; it never passes through the error path.
pub async fn login_handler(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(credentials): Json<LoginValues>,
) -> Result<(CookieJar, Redirect), LoginError> {
    credentials
        .validate()
        .map_err(|e| LoginError::Validation(first_error_message(&e)))?;

    let session = state
        .auth_service
        .login(credentials.username(), &credentials.password)
        .await?;

    let cookie = state.session_service.create_session_cookie(&session);

    Ok((jar.add(cookie), Redirect::to("/")))
}

impl IntoResponse for LoginError {
    fn into_response(self) -> Response {
        let status = match &self {
            LoginError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            LoginError::InvalidCredentials => StatusCode::UNAUTHORIZED,
            LoginError::Unexpected(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = LoginErrorResponse {
            error: self.to_string(),
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use axum::body::to_bytes;
    use serde_json::json;

    async fn render(err: LoginError) -> (StatusCode, LoginErrorResponse) {
        let response = err.into_response();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_invalid_credentials_response() {
        let (status, body) = render(LoginError::InvalidCredentials).await;

        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body.error, "Username & password is incorrect");
    }

    #[tokio::test]
    async fn test_validation_response() {
        let (status, body) = render(LoginError::Validation("Password is required".into())).await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body.error, "Password is required");
    }

    #[tokio::test]
    async fn test_unexpected_response_hides_internals() {
        let err = LoginError::Unexpected(AppError::internal(
            "Stored password hash is malformed",
            json!({ "reason": "invalid PHC" }),
        ));

        let (status, body) = render(err).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body.error, "An error occurred while logging in");
    }
}
