//! Authentication handlers.

use axum::{
    extract::State,
    http::{header::SET_COOKIE, StatusCode},
    response::{IntoResponse, Json},
};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use super::extractors::RequestBody;
use super::AppState;
use common::AppResult;
use domain::{Credentials, MSG_REGISTERED};

/// Plain message body
#[derive(Debug, Serialize, ToSchema)]
pub struct MessageResponse {
    #[schema(example = "registered")]
    pub message: String,
}

/// Successful login body. The token itself travels in the cookie.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub user_id: Uuid,
    #[schema(example = "2020-07-26T12:15:00.000Z")]
    pub expiration_date: String,
}

/// Register a new user
#[utoipa::path(
    post,
    path = "/register",
    tag = "Authentication",
    request_body = Credentials,
    responses(
        (status = 201, description = "User registered", body = MessageResponse),
        (status = 400, description = "Required email and password", body = MessageResponse),
        (status = 409, description = "Email already exists", body = MessageResponse)
    )
)]
pub async fn register(
    State(state): State<AppState>,
    RequestBody(credentials): RequestBody<Credentials>,
) -> AppResult<(StatusCode, Json<MessageResponse>)> {
    state.auth_service.register(credentials).await?;

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse {
            message: MSG_REGISTERED.to_string(),
        }),
    ))
}

/// Log in and receive the session cookie
#[utoipa::path(
    post,
    path = "/login",
    tag = "Authentication",
    request_body = Credentials,
    responses(
        (status = 200, description = "Logged in, token set as HttpOnly cookie", body = LoginResponse,
            headers(("Set-Cookie" = String, description = "token=<token>; HttpOnly; Max-Age=900000;"))),
        (status = 400, description = "Incomplete credentials", body = MessageResponse),
        (status = 409, description = "Wrong email or password", body = MessageResponse),
        (status = 500, description = "Missing environment config", body = MessageResponse)
    )
)]
pub async fn login(
    State(state): State<AppState>,
    RequestBody(credentials): RequestBody<Credentials>,
) -> AppResult<impl IntoResponse> {
    let session = state.auth_service.login(credentials).await?;

    Ok((
        [(SET_COOKIE, session.cookie)],
        Json(LoginResponse {
            user_id: session.user_id,
            expiration_date: session.expiration_date,
        }),
    ))
}
