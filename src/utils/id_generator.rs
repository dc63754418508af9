//! Random identifier generation for sessions and users.
//!
//! Identifiers are raw OS randomness encoded as URL-safe base64 without
//! padding, so they are safe in cookies and URLs as-is.

use base64::Engine as _;

/// Random bytes behind a session id (160 bits).
const SESSION_ID_BYTES: usize = 20;

/// Random bytes behind a user id (80 bits).
const USER_ID_BYTES: usize = 10;

fn random_id<const N: usize>() -> String {
    let mut buffer = [0u8; N];

    getrandom::fill(&mut buffer).expect("Failed to generate random bytes");

    base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(buffer)
}

/// Generates a session id: 27 URL-safe characters.
///
/// # Panics
///
/// Panics if the system random number generator fails (extremely rare).
pub fn generate_session_id() -> String {
    random_id::<SESSION_ID_BYTES>()
}

/// Generates a user id: 14 URL-safe characters.
///
/// # Panics
///
/// Panics if the system random number generator fails (extremely rare).
pub fn generate_user_id() -> String {
    random_id::<USER_ID_BYTES>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_session_id_length() {
        assert_eq!(generate_session_id().len(), 27);
    }

    #[test]
    fn test_user_id_length() {
        assert_eq!(generate_user_id().len(), 14);
    }

    #[test]
    fn test_ids_are_url_safe() {
        let id = generate_session_id();
        assert!(id.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_'));
        assert!(!id.contains('='));
    }

    #[test]
    fn test_session_ids_are_unique() {
        let ids: HashSet<String> = (0..1000).map(|_| generate_session_id()).collect();
        assert_eq!(ids.len(), 1000);
    }
}
