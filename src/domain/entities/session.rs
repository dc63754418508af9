//! Session entity issued by the session authority.

use chrono::{DateTime, Duration, Utc};

/// A login session.
///
/// `fresh` is not persisted. It is set when the session was just created or
/// its expiry was just extended, meaning the cookie must be written again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub id: String,
    pub user_id: String,
    pub expires_at: DateTime<Utc>,
    pub fresh: bool,
}

impl Session {
    /// Creates a new Session instance.
    pub fn new(id: String, user_id: String, expires_at: DateTime<Utc>, fresh: bool) -> Self {
        Self {
            id,
            user_id,
            expires_at,
            fresh,
        }
    }

    /// Returns true once `now` has reached the expiry time.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }

    /// Returns true once less than half of `lifetime` remains.
    pub fn needs_refresh_at(&self, now: DateTime<Utc>, lifetime: Duration) -> bool {
        now >= self.expires_at - lifetime / 2
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session_expiring_in(delta: Duration) -> Session {
        Session::new(
            "sid".to_string(),
            "uid".to_string(),
            Utc::now() + delta,
            false,
        )
    }

    #[test]
    fn test_session_creation() {
        let expires = Utc::now() + Duration::days(30);
        let session = Session::new("sid".to_string(), "uid".to_string(), expires, true);

        assert_eq!(session.id, "sid");
        assert_eq!(session.user_id, "uid");
        assert_eq!(session.expires_at, expires);
        assert!(session.fresh);
        assert!(!session.is_expired_at(Utc::now()));
    }

    #[test]
    fn test_session_is_expired() {
        let session = session_expiring_in(-Duration::seconds(1));
        assert!(session.is_expired_at(Utc::now()));
        assert!(!session.is_expired_at(session.expires_at - Duration::seconds(1)));
    }

    #[test]
    fn test_needs_refresh_in_second_half() {
        let lifetime = Duration::days(30);
        let now = Utc::now();

        let young = Session::new("a".into(), "u".into(), now + Duration::days(29), false);
        assert!(!young.needs_refresh_at(now, lifetime));

        let old = Session::new("b".into(), "u".into(), now + Duration::days(10), false);
        assert!(old.needs_refresh_at(now, lifetime));
    }
}
