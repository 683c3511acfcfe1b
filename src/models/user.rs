use serde::{Deserialize, Serialize};

/// Stored account record.
///
/// The password is kept as plaintext and compared byte-for-byte. This is a
/// placeholder and must be replaced by a salted hash before real use.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: String,
    /// Trimmed, lowercased. Also the store key.
    pub email: String,
    pub password: String,
    pub name: String,
}

/// What leaves the service: everything but the password.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicUser {
    pub id: String,
    pub email: String,
    pub name: String,
}

impl From<&User> for PublicUser {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.clone(),
            email: user.email.clone(),
            name: user.name.clone(),
        }
    }
}

/// Trim and lowercase an email so it can be used as a lookup key.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

// ── Request payloads ─────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RegisterUser {
    pub email: Option<String>,
    pub password: Option<String>,
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SignInUser {
    pub email: Option<String>,
    pub password: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_trims_and_lowercases() {
        assert_eq!(normalize_email("  Ethan.Carter@Gmail.COM "), "ethan.carter@gmail.com");
    }

    #[test]
    fn public_view_drops_password() {
        let user = User {
            id: "1-abc".to_string(),
            email: "a@b.c".to_string(),
            password: "secret".to_string(),
            name: "A".to_string(),
        };
        let json = serde_json::to_value(PublicUser::from(&user)).unwrap();
        assert_eq!(json, serde_json::json!({ "id": "1-abc", "email": "a@b.c", "name": "A" }));
    }

    #[test]
    fn register_payload_fields_are_optional() {
        let payload: RegisterUser = serde_json::from_str(r#"{"email":"x@y.z"}"#).unwrap();
        assert_eq!(payload.email.as_deref(), Some("x@y.z"));
        assert!(payload.password.is_none());
        assert!(payload.name.is_none());
    }
}
