//! Session token and cookie construction.

use chrono::{DateTime, Duration, SecondsFormat, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use common::{AppError, AppResult, TokenConfig};
use domain::{TokenData, User, MILLIS_PER_SECOND, TOKEN_COOKIE_NAME, TOKEN_MAX_AGE_MS};

/// JWT claims payload. Carries nothing but the user id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    #[serde(rename = "_id")]
    pub user_id: String,
    pub iat: i64,
    pub exp: i64,
}

/// Sign a token for `user`, valid for [`TOKEN_MAX_AGE_MS`] from `now`.
///
/// # Errors
/// Returns a configuration error when no signing secret is configured.
pub fn create_token(user: &User, config: &TokenConfig, now: DateTime<Utc>) -> AppResult<TokenData> {
    let secret = config
        .secret_bytes()
        .ok_or_else(|| AppError::config("TOKEN_SECRET"))?;

    let max_age = TOKEN_MAX_AGE_MS;
    let expires_at = now + Duration::milliseconds(max_age);

    let claims = Claims {
        user_id: user.id.to_string(),
        iat: now.timestamp(),
        exp: now.timestamp() + max_age / MILLIS_PER_SECOND,
    };

    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret),
    )?;

    Ok(TokenData {
        token,
        max_age,
        expiration_date: expires_at.to_rfc3339_opts(SecondsFormat::Millis, true),
    })
}

/// Render the `Set-Cookie` directive for a token.
///
/// HttpOnly keeps the token away from scripts. Max-Age carries the
/// millisecond value clients already expect.
pub fn create_cookie(token_data: &TokenData) -> String {
    format!(
        "{}={}; HttpOnly; Max-Age={};",
        TOKEN_COOKIE_NAME, token_data.token, token_data.max_age
    )
}

/// Verify a token's signature and expiry and return its claims.
pub fn decode_claims(token: &str, config: &TokenConfig) -> AppResult<Claims> {
    let secret = config
        .secret_bytes()
        .ok_or_else(|| AppError::config("TOKEN_SECRET"))?;

    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret),
        &Validation::default(),
    )?;

    Ok(token_data.claims)
}
