//! Login: verify credentials and issue a cookie-borne session token.

use std::sync::Arc;

use uuid::Uuid;

use common::{AppError, AppResult, TokenConfig};
use domain::{Credentials, MSG_INCOMPLETE_CREDENTIALS};

use super::token::{create_cookie, create_token};
use crate::clock::Clock;
use crate::repository::UserRepository;

/// Outcome of a successful login.
///
/// The raw token only travels inside `cookie`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    /// `Set-Cookie` directive carrying the token
    pub cookie: String,
    /// Authenticated user's id
    pub user_id: Uuid,
    /// Token expiry, ISO-8601 UTC
    pub expiration_date: String,
}

/// Verifies credentials and signs session tokens.
pub struct SessionIssuer {
    users: Arc<dyn UserRepository>,
    token: TokenConfig,
    clock: Arc<dyn Clock>,
}

impl SessionIssuer {
    pub fn new(users: Arc<dyn UserRepository>, token: TokenConfig, clock: Arc<dyn Clock>) -> Self {
        Self {
            users,
            token,
            clock,
        }
    }

    /// Log a user in.
    ///
    /// Unknown email and wrong password fail with the same error.
    pub async fn login(&self, credentials: Credentials) -> AppResult<Session> {
        let (email, password) = credentials
            .require(MSG_INCOMPLETE_CREDENTIALS)
            .inspect_err(|_| tracing::debug!("Login rejected, incomplete credentials"))?;

        let user = self.users.find_by_email(&email).await?;
        tracing::debug!(email = %email, found = user.is_some(), "Looked up login email");

        let Some(user) = user else {
            tracing::warn!(email = %email, "Login rejected, unknown email");
            return Err(AppError::InvalidCredentials);
        };

        let stored = user.password();
        let password_valid = tokio::task::spawn_blocking(move || stored.verify(&password))
            .await
            .map_err(|e| AppError::internal(format!("Password verification task failed: {}", e)))?;

        if !password_valid {
            tracing::warn!(email = %email, "Login rejected, wrong password");
            return Err(AppError::InvalidCredentials);
        }

        let token_data = create_token(&user, &self.token, self.clock.now())?;
        tracing::info!(user_id = %user.id, "Session issued");

        Ok(Session {
            cookie: create_cookie(&token_data),
            user_id: user.id,
            expiration_date: token_data.expiration_date,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use crate::repository::MockUserRepository;
    use crate::service::token::decode_claims;
    use chrono::{TimeZone, Utc};
    use domain::{Password, User};

    const EMAIL: &str = "test@test.com";
    const PASSWORD: &str = "strongPassword";
    const SECRET: &str = "test-secret-key-for-testing-only";

    fn registered_user() -> User {
        User {
            id: Uuid::new_v4(),
            email: EMAIL.to_string(),
            password_hash: Password::hash(PASSWORD, 4).unwrap().into_string(),
            favorite_characters: Vec::new(),
        }
    }

    fn repo_with(user: Option<User>) -> MockUserRepository {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_email()
            .withf(|email: &str| email == EMAIL)
            .times(1)
            .returning(move |_| Ok(user.clone()));
        repo.expect_create().never();
        repo
    }

    fn issuer(repo: MockUserRepository, token: TokenConfig) -> SessionIssuer {
        let now = Utc.with_ymd_and_hms(2020, 7, 26, 12, 0, 0).unwrap();
        SessionIssuer::new(Arc::new(repo), token, Arc::new(FixedClock(now)))
    }

    #[tokio::test]
    async fn test_login_success() {
        let user = registered_user();
        let user_id = user.id;

        let issuer = issuer(repo_with(Some(user)), TokenConfig::with_secret(SECRET));
        let session = issuer
            .login(Credentials::new(EMAIL, PASSWORD))
            .await
            .unwrap();

        assert_eq!(session.user_id, user_id);
        assert_eq!(session.expiration_date, "2020-07-26T12:15:00.000Z");
        assert!(session.cookie.starts_with("token="));
        assert!(session.cookie.ends_with("; HttpOnly; Max-Age=900000;"));
    }

    #[tokio::test]
    async fn test_login_token_asserts_user_id() {
        let user = registered_user();
        let user_id = user.id;

        let issuer = SessionIssuer::new(
            Arc::new(repo_with(Some(user))),
            TokenConfig::with_secret(SECRET),
            Arc::new(crate::clock::SystemClock),
        );
        let session = issuer
            .login(Credentials::new(EMAIL, PASSWORD))
            .await
            .unwrap();

        let token = session
            .cookie
            .strip_prefix("token=")
            .and_then(|rest| rest.split(';').next())
            .unwrap();
        let claims = decode_claims(token, &TokenConfig::with_secret(SECRET)).unwrap();
        assert_eq!(claims.user_id, user_id.to_string());
    }

    #[tokio::test]
    async fn test_login_unknown_email() {
        let issuer = issuer(repo_with(None), TokenConfig::with_secret(SECRET));
        let err = issuer
            .login(Credentials::new(EMAIL, PASSWORD))
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::InvalidCredentials));
        assert_eq!(err.user_message(), "Wrong email or password");
    }

    #[tokio::test]
    async fn test_login_wrong_password_matches_unknown_email() {
        let issuer = issuer(repo_with(Some(registered_user())), TokenConfig::with_secret(SECRET));
        let err = issuer
            .login(Credentials::new(EMAIL, "wrongPassword"))
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::InvalidCredentials));
        assert_eq!(err.status(), AppError::InvalidCredentials.status());
        assert_eq!(err.user_message(), "Wrong email or password");
    }

    #[tokio::test]
    async fn test_login_requires_credentials() {
        for credentials in [
            Credentials::default(),
            Credentials::new(EMAIL, ""),
            Credentials::new("", PASSWORD),
        ] {
            let mut repo = MockUserRepository::new();
            repo.expect_find_by_email().never();

            let issuer = issuer(repo, TokenConfig::with_secret(SECRET));
            let err = issuer.login(credentials).await.unwrap_err();

            assert_eq!(err.user_message(), "Incomplete credentials");
        }
    }

    #[tokio::test]
    async fn test_login_without_secret() {
        let issuer = issuer(repo_with(Some(registered_user())), TokenConfig::default());
        let err = issuer
            .login(Credentials::new(EMAIL, PASSWORD))
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Config(_)));
        assert_eq!(err.user_message(), "Missing environment config");
    }
}
