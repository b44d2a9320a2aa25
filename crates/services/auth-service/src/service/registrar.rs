//! Registration: validate credentials, reject duplicates, store a hash.

use std::sync::Arc;

use common::{AppError, AppResult, HashingConfig};
use domain::{Credentials, NewUser, Password, User, MSG_REQUIRED_EMAIL_AND_PASSWORD};

use crate::repository::UserRepository;

/// Creates user records from submitted credentials.
pub struct Registrar {
    users: Arc<dyn UserRepository>,
    hashing: HashingConfig,
}

impl Registrar {
    pub fn new(users: Arc<dyn UserRepository>, hashing: HashingConfig) -> Self {
        Self { users, hashing }
    }

    /// Register a new user.
    ///
    /// One store read, then one store write on success. No token is issued.
    pub async fn register(&self, credentials: Credentials) -> AppResult<User> {
        let (email, password) = credentials
            .require(MSG_REQUIRED_EMAIL_AND_PASSWORD)
            .inspect_err(|_| tracing::debug!("Registration rejected, incomplete credentials"))?;

        if self.users.find_by_email(&email).await?.is_some() {
            tracing::warn!(email = %email, "Registration rejected, email already taken");
            return Err(AppError::conflict(format!("Email {}", email)));
        }

        let cost = self.hashing.cost;
        let password = tokio::task::spawn_blocking(move || Password::hash(&password, cost))
            .await
            .map_err(|e| AppError::internal(format!("Password hashing task failed: {}", e)))??;

        let user = self.users.create(NewUser::new(email, password)).await?;
        tracing::info!(user_id = %user.id, email = %user.email, "User registered");

        Ok(user)
    }
}
