//! DTOs for the login endpoint.

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;
use validator::{Validate, ValidationError, ValidationErrors};

/// Credentials submitted to `POST /api/login`.
///
/// Missing fields deserialize as empty strings so that they are reported by
/// the schema rather than by the JSON extractor.
#[derive(Deserialize, Validate, Default)]
#[serde(default)]
pub struct LoginValues {
    /// Matched case-insensitively after trimming.
    #[validate(custom(function = "not_blank"))]
    pub username: String,

    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

impl LoginValues {
    /// Username as it is looked up.
    pub fn username(&self) -> &str {
        self.username.trim()
    }
}

impl fmt::Debug for LoginValues {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginValues")
            .field("username", &self.username)
            .field("password", &"[redacted]")
            .finish()
    }
}

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut err = ValidationError::new("blank");
        err.message = Some(Cow::Borrowed("Username is required"));
        return Err(err);
    }
    Ok(())
}

/// Field order used when picking the message to show.
const FIELD_ORDER: [&str; 2] = ["username", "password"];

/// Picks one human-readable message out of a failed validation.
pub fn first_error_message(errors: &ValidationErrors) -> String {
    let field_errors = errors.field_errors();

    FIELD_ORDER
        .iter()
        .filter_map(|field| field_errors.get(*field))
        .flat_map(|errs| errs.iter())
        .find_map(|err| err.message.as_ref().map(|m| m.to_string()))
        .unwrap_or_else(|| "Invalid login details".to_string())
}

/// Error payload of the login endpoint.
#[derive(Debug, Serialize, Deserialize)]
pub struct LoginErrorResponse {
    pub error: String,
}
