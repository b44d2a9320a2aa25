//! Shared helpers for HTTP-level tests.
//!
//! The router runs against an in-memory user store and a fixed clock, so
//! no database is needed.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{
    body::{to_bytes, Body},
    http::{header::CONTENT_TYPE, Request},
    response::Response,
    Router,
};
use chrono::{TimeZone, Utc};
use tower::ServiceExt;
use uuid::Uuid;

use auth_service_lib::{
    api::{create_router, AppState},
    clock::FixedClock,
    config::AuthServiceConfig,
    repository::UserRepository,
    service::Authenticator,
};
use common::{AppError, AppResult, HashingConfig, TokenConfig};
use domain::{NewUser, User};

pub const EMAIL: &str = "test@test.com";
pub const PASSWORD: &str = "strongPassword";
pub const SECRET: &str = "test-secret-key-for-testing-only";

/// User store kept in a vector. Enforces email uniqueness like the real table.
#[derive(Default)]
pub struct InMemoryUsers {
    users: Mutex<Vec<User>>,
}

impl InMemoryUsers {
    pub fn get(&self, email: &str) -> Option<User> {
        self.users
            .lock()
            .unwrap()
            .iter()
            .find(|user| user.email == email)
            .cloned()
    }
}

#[async_trait]
impl UserRepository for InMemoryUsers {
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        Ok(self.get(email))
    }

    async fn create(&self, new_user: NewUser) -> AppResult<User> {
        let mut users = self.users.lock().unwrap();
        if users.iter().any(|user| user.email == new_user.email) {
            return Err(AppError::conflict(format!("Email {}", new_user.email)));
        }

        let user = User {
            id: Uuid::new_v4(),
            email: new_user.email,
            password_hash: new_user.password_hash,
            favorite_characters: new_user.favorite_characters,
        };
        users.push(user.clone());
        Ok(user)
    }
}

pub struct TestApp {
    pub router: Router,
    pub users: Arc<InMemoryUsers>,
}

/// Build the router with the clock pinned at 2020-07-26T12:00:00Z.
pub fn build_app(secret: Option<&str>) -> TestApp {
    let config = AuthServiceConfig {
        token: match secret {
            Some(secret) => TokenConfig::with_secret(secret),
            None => TokenConfig::default(),
        },
        hashing: HashingConfig { cost: 4 },
        ..Default::default()
    };

    let users = Arc::new(InMemoryUsers::default());
    let clock = Arc::new(FixedClock(Utc.with_ymd_and_hms(2020, 7, 26, 12, 0, 0).unwrap()));
    let auth_service = Arc::new(Authenticator::new(users.clone(), &config, clock));

    TestApp {
        router: create_router(AppState::new(auth_service)),
        users,
    }
}

pub async fn post(app: &TestApp, uri: &str, content_type: Option<&str>, body: String) -> Response {
    let mut builder = Request::builder().method("POST").uri(uri);
    if let Some(content_type) = content_type {
        builder = builder.header(CONTENT_TYPE, content_type);
    }

    app.router
        .clone()
        .oneshot(builder.body(Body::from(body)).unwrap())
        .await
        .unwrap()
}

pub async fn post_json(app: &TestApp, uri: &str, body: serde_json::Value) -> Response {
    post(app, uri, Some("application/json"), body.to_string()).await
}

pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}
