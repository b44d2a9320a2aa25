//! Authentication service - the seam the HTTP layer depends on.
//!
//! Registration and login are independent components sharing only the
//! user store; `Authenticator` puts them behind one trait object.

use async_trait::async_trait;
use std::sync::Arc;

use common::AppResult;
use domain::{Credentials, User};

use super::registrar::Registrar;
use super::session_issuer::{Session, SessionIssuer};
use crate::clock::Clock;
use crate::config::AuthServiceConfig;
use crate::repository::UserRepository;

/// Authentication service trait for dependency injection.
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Register a new user
    async fn register(&self, credentials: Credentials) -> AppResult<User>;

    /// Verify credentials and issue a session cookie
    async fn login(&self, credentials: Credentials) -> AppResult<Session>;
}

/// Concrete implementation of AuthService.
pub struct Authenticator {
    registrar: Registrar,
    session_issuer: SessionIssuer,
}

impl Authenticator {
    /// Create new auth service instance
    pub fn new(
        users: Arc<dyn UserRepository>,
        config: &AuthServiceConfig,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            registrar: Registrar::new(users.clone(), config.hashing.clone()),
            session_issuer: SessionIssuer::new(users, config.token.clone(), clock),
        }
    }
}

#[async_trait]
impl AuthService for Authenticator {
    async fn register(&self, credentials: Credentials) -> AppResult<User> {
        self.registrar.register(credentials).await
    }

    async fn login(&self, credentials: Credentials) -> AppResult<Session> {
        self.session_issuer.login(credentials).await
    }
}
