//! Credentials submitted by clients on registration and login.

use serde::Deserialize;
use validator::Validate;

use crate::error::{DomainError, DomainResult};

/// Email and password pair as sent by the client.
///
/// Both fields are optional on the wire: an absent field and an empty string
/// are treated the same way. Presence is checked by the operation consuming
/// the credentials, since registration and login answer with different
/// messages.
#[derive(Clone, Default, Deserialize, Validate)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Credentials {
    /// User email address
    #[validate(required, length(min = 1))]
    pub email: Option<String>,
    /// Plain text password
    #[validate(required, length(min = 1))]
    pub password: Option<String>,
}

// Never print the plain text password
impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &self.password.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

impl Credentials {
    /// Build credentials from both values.
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: Some(email.into()),
            password: Some(password.into()),
        }
    }

    /// Return `(email, password)` when both are present and non-empty.
    ///
    /// # Errors
    /// Returns a validation error carrying `message` otherwise.
    pub fn require(self, message: &str) -> DomainResult<(String, String)> {
        if self.validate().is_err() {
            return Err(DomainError::validation(message));
        }

        self.email
            .zip(self.password)
            .ok_or_else(|| DomainError::validation(message))
    }
}
