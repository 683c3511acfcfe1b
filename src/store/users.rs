use std::collections::HashMap;
use std::sync::Arc;

use crate::error::{AppError, AppResult};
use crate::ids::IdGenerator;
use crate::models::{normalize_email, PublicUser, RegisterUser, SignInUser, User};

const MISSING_CREDENTIALS: &str = "Email and password are required";
const INVALID_CREDENTIALS: &str = "Invalid email or password";

/// Accounts keyed by normalized email.
pub struct UserStore {
    users: HashMap<String, User>,
    ids: Arc<dyn IdGenerator>,
}

impl UserStore {
    pub fn new(ids: Arc<dyn IdGenerator>) -> Self {
        Self {
            users: HashMap::new(),
            ids,
        }
    }

    pub fn register(&mut self, payload: &RegisterUser) -> AppResult<PublicUser> {
        let (email, password) = credentials(payload.email.as_deref(), payload.password.as_deref())?;

        if self.users.contains_key(&email) {
            return Err(AppError::Conflict(
                "User with this email already exists".to_string(),
            ));
        }

        let name = match payload.name.as_deref().map(str::trim) {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => local_part(&email).to_string(),
        };

        let user = User {
            id: self.ids.next_id(),
            email: email.clone(),
            password: password.to_string(),
            name,
        };
        let public = PublicUser::from(&user);
        self.users.insert(email, user);
        Ok(public)
    }

    pub fn sign_in(&self, payload: &SignInUser) -> AppResult<PublicUser> {
        let (email, password) = credentials(payload.email.as_deref(), payload.password.as_deref())?;

        // Same error for unknown email and wrong password.
        match self.users.get(&email) {
            Some(user) if user.password == password => Ok(PublicUser::from(user)),
            _ => Err(AppError::Auth(INVALID_CREDENTIALS.to_string())),
        }
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

/// Normalized email plus the verbatim password, or a validation error when
/// either is absent or empty.
fn credentials<'a>(email: Option<&str>, password: Option<&'a str>) -> AppResult<(String, &'a str)> {
    let email = email.map(normalize_email).unwrap_or_default();
    let password = password.unwrap_or_default();
    if email.is_empty() || password.is_empty() {
        return Err(AppError::Validation(MISSING_CREDENTIALS.to_string()));
    }
    Ok((email, password))
}

fn local_part(email: &str) -> &str {
    email.split('@').next().unwrap_or(email)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::SequentialIdGenerator;

    fn store() -> UserStore {
        UserStore::new(Arc::new(SequentialIdGenerator::new()))
    }

    fn register(email: &str, password: &str, name: Option<&str>) -> RegisterUser {
        RegisterUser {
            email: Some(email.to_string()),
            password: Some(password.to_string()),
            name: name.map(str::to_string),
        }
    }

    fn sign_in(email: &str, password: &str) -> SignInUser {
        SignInUser {
            email: Some(email.to_string()),
            password: Some(password.to_string()),
        }
    }

    // ── register ───────────────────────────────────────────────────────────────

    #[test]
    fn register_normalizes_email_and_keeps_name() {
        let mut users = store();
        let user = users
            .register(&register("  Jane@Example.COM ", "pw", Some("Jane Doe")))
            .unwrap();
        assert_eq!(user.email, "jane@example.com");
        assert_eq!(user.name, "Jane Doe");
        assert_eq!(users.len(), 1);
    }

    #[test]
    fn register_defaults_name_to_local_part() {
        let mut users = store();
        let user = users.register(&register("jane.doe@example.com", "pw", None)).unwrap();
        assert_eq!(user.name, "jane.doe");

        let blank = users.register(&register("sam@example.com", "pw", Some("   "))).unwrap();
        assert_eq!(blank.name, "sam");
    }

    #[test]
    fn register_rejects_missing_credentials() {
        let mut users = store();
        for payload in [
            RegisterUser::default(),
            register("", "pw", None),
            register("   ", "pw", None),
            register("a@b.c", "", None),
        ] {
            let err = users.register(&payload).unwrap_err();
            assert!(matches!(err, AppError::Validation(_)), "got {err:?}");
        }
        assert!(users.is_empty());
    }

    #[test]
    fn register_twice_with_same_normalized_email_conflicts() {
        let mut users = store();
        users.register(&register("jane@example.com", "pw", None)).unwrap();
        let err = users
            .register(&register(" JANE@example.com", "other", None))
            .unwrap_err();
        assert!(matches!(err, AppError::Conflict(_)));
        assert_eq!(users.len(), 1);
    }

    #[test]
    fn registered_users_get_distinct_ids() {
        let mut users = store();
        let a = users.register(&register("a@example.com", "pw", None)).unwrap();
        let b = users.register(&register("b@example.com", "pw", None)).unwrap();
        assert_ne!(a.id, b.id);
    }

    // ── sign_in ────────────────────────────────────────────────────────────────

    #[test]
    fn sign_in_returns_same_user_as_register() {
        let mut users = store();
        let registered = users.register(&register("jane@example.com", "pw", None)).unwrap();
        let signed_in = users.sign_in(&sign_in(" Jane@Example.com", "pw")).unwrap();
        assert_eq!(registered, signed_in);
    }

    #[test]
    fn wrong_password_and_unknown_email_fail_identically() {
        let mut users = store();
        users.register(&register("jane@example.com", "pw", None)).unwrap();

        let wrong = users.sign_in(&sign_in("jane@example.com", "PW")).unwrap_err();
        let unknown = users.sign_in(&sign_in("nobody@example.com", "pw")).unwrap_err();

        assert!(matches!(wrong, AppError::Auth(_)));
        assert_eq!(wrong.to_string(), unknown.to_string());
    }

    #[test]
    fn sign_in_rejects_missing_credentials() {
        let users = store();
        let err = users.sign_in(&SignInUser::default()).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }
}
