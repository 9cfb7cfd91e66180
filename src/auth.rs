use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use parking_lot::RwLock;
use serde::Serialize;
use uuid::Uuid;

/// Shortcut token for unauthenticated demo access.
pub const GUEST_TOKEN: &str = "guest";

/// Built-in credential table; there is no user persistence behind the login
/// endpoint.
const USERS: &[(&str, &str, &str)] = &[
    ("user@example.com", "password123", "Demo User"),
    ("stylist@example.com", "stylist456", "Stylist Admin"),
];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct User {
    pub email: String,
    pub full_name: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct Token {
    pub access_token: String,
    pub token_type: String,
}

#[derive(Debug, Clone)]
struct Session {
    user: User,
    expires_at: DateTime<Utc>,
}

pub fn authenticate(username: &str, password: &str) -> Option<User> {
    USERS
        .iter()
        .find(|(email, pass, _)| *email == username && *pass == password)
        .map(|(email, _, full_name)| User {
            email: (*email).to_string(),
            full_name: (*full_name).to_string(),
        })
}

/// In-memory bearer-token sessions with absolute expiry.
#[derive(Clone, Default)]
pub struct SessionStore {
    sessions: Arc<RwLock<HashMap<String, Session>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        SessionStore::default()
    }

    pub fn issue(&self, user: &User, ttl_minutes: i64) -> Token {
        let access_token = Uuid::new_v4().simple().to_string();
        let session = Session {
            user: user.clone(),
            expires_at: Utc::now() + Duration::minutes(ttl_minutes),
        };

        let mut sessions = self.sessions.write();
        sessions.retain(|_, entry| entry.expires_at > Utc::now());
        sessions.insert(access_token.clone(), session);

        Token {
            access_token,
            token_type: "bearer".to_string(),
        }
    }

    pub fn verify(&self, token: &str) -> Option<User> {
        if token == GUEST_TOKEN {
            return Some(User {
                email: "guest@example.com".to_string(),
                full_name: "Guest User".to_string(),
            });
        }

        let sessions = self.sessions.read();
        let session = sessions.get(token)?;
        if session.expires_at <= Utc::now() {
            return None;
        }
        Some(session.user.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_credentials_authenticate() {
        let user = authenticate("user@example.com", "password123").unwrap();
        assert_eq!(user.full_name, "Demo User");
    }

    #[test]
    fn wrong_password_or_unknown_user_is_rejected() {
        assert!(authenticate("user@example.com", "nope").is_none());
        assert!(authenticate("nobody@example.com", "password123").is_none());
    }

    #[test]
    fn issued_tokens_verify_until_expiry() {
        let store = SessionStore::new();
        let user = authenticate("user@example.com", "password123").unwrap();

        let token = store.issue(&user, 30);
        assert_eq!(token.token_type, "bearer");
        assert_eq!(store.verify(&token.access_token), Some(user.clone()));

        let expired = store.issue(&user, -1);
        assert!(store.verify(&expired.access_token).is_none());
    }

    #[test]
    fn guest_token_is_always_accepted() {
        let store = SessionStore::new();
        let guest = store.verify(GUEST_TOKEN).unwrap();
        assert_eq!(guest.email, "guest@example.com");
    }

    #[test]
    fn unknown_tokens_are_rejected() {
        let store = SessionStore::new();
        assert!(store.verify("not-a-token").is_none());
    }
}
