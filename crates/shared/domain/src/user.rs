//! User domain entity and related types.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::password::Password;

/// User domain entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: Uuid,
    pub email: String,
    /// bcrypt hash, never the plain text
    #[serde(rename = "password", skip_serializing)]
    pub password_hash: String,
    /// Application data unrelated to authentication, empty at creation
    pub favorite_characters: Vec<String>,
}

impl User {
    /// Stored password hash as a value object.
    pub fn password(&self) -> Password {
        Password::from_hash(self.password_hash.as_str())
    }
}

/// Data required to persist a freshly registered user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub email: String,
    pub password_hash: String,
    pub favorite_characters: Vec<String>,
}

impl NewUser {
    /// Create a new user record with no favorite characters
    pub fn new(email: String, password: Password) -> Self {
        Self {
            email,
            password_hash: password.into_string(),
            favorite_characters: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_user_starts_without_favorites() {
        let user = NewUser::new("test@test.com".to_string(), Password::from_hash("hash"));

        assert_eq!(user.email, "test@test.com");
        assert_eq!(user.password_hash, "hash");
        assert!(user.favorite_characters.is_empty());
    }

    #[test]
    fn test_serialization_hides_password() {
        let user = User {
            id: Uuid::nil(),
            email: "test@test.com".to_string(),
            password_hash: "hash".to_string(),
            favorite_characters: vec!["Luke".to_string()],
        };

        let json = serde_json::to_value(&user).unwrap();
        assert_eq!(json["email"], "test@test.com");
        assert_eq!(json["favoriteCharacters"][0], "Luke");
        assert!(json.get("password").is_none());
    }
}
