//! Argon2id password hashing with fixed cost parameters.

use argon2::{
    Algorithm, Argon2, Params, Version,
    password_hash::{
        PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng,
    },
};
use serde_json::json;

use crate::error::AppError;

/// Memory cost in KiB.
pub const MEMORY_COST_KIB: u32 = 1945;
/// Number of passes.
pub const TIME_COST: u32 = 2;
/// Hash output length in bytes.
pub const OUTPUT_LEN: usize = 32;
/// Degree of parallelism.
pub const PARALLELISM: u32 = 1;

/// Hashes and verifies passwords.
///
/// New hashes are produced with the constants above. Verification reads the
/// parameters encoded in the stored PHC string, so hashes created with
/// other settings still verify.
#[derive(Clone)]
pub struct PasswordService {
    params: Params,
}

impl PasswordService {
    pub fn new() -> Self {
        let params = Params::new(MEMORY_COST_KIB, TIME_COST, PARALLELISM, Some(OUTPUT_LEN))
            .expect("argon2 parameters are within bounds");
        Self { params }
    }

    fn argon2(&self) -> Argon2<'static> {
        Argon2::new(Algorithm::Argon2id, Version::V0x13, self.params.clone())
    }

    /// Hashes a plaintext password into a PHC-format string
    /// (`$argon2id$v=19$m=1945,t=2,p=1$...`).
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if hashing fails.
    pub fn hash(&self, password: &str) -> Result<String, AppError> {
        let salt = SaltString::generate(&mut OsRng);
        self.argon2()
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| {
                tracing::error!(error = %e, "Password hashing failed");
                AppError::internal("Failed to hash password", json!({}))
            })
    }

    /// Checks a plaintext password against a stored hash.
    ///
    /// Returns `Ok(false)` on mismatch.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the stored hash cannot be parsed.
    pub fn verify(&self, password_hash: &str, password: &str) -> Result<bool, AppError> {
        let parsed = PasswordHash::new(password_hash).map_err(|e| {
            AppError::internal(
                "Stored password hash is malformed",
                json!({ "reason": e.to_string() }),
            )
        })?;

        Ok(self
            .argon2()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok())
    }
}

impl Default for PasswordService {
    fn default() -> Self {
        Self::new()
    }
}
