//! Request body extractor accepting JSON or URL-encoded forms.

use axum::{
    async_trait,
    body::Bytes,
    extract::{FromRequest, Request},
    http::{header::CONTENT_TYPE, HeaderMap},
    Form,
};
use serde::de::DeserializeOwned;

use common::AppError;

/// Body extractor that falls back to `T::default()` when there is nothing to
/// parse: an empty body, a JSON value that is not an object, or a content
/// type other than JSON or form.
///
/// Validation is left to the operation receiving the payload, so missing
/// fields surface as that operation's own message rather than a parser error.
/// Bodies that are present but malformed are rejected with 400.
pub struct RequestBody<T>(pub T);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BodyKind {
    Json,
    Form,
    Other,
}

impl BodyKind {
    fn of(headers: &HeaderMap) -> Self {
        let Some(content_type) = headers.get(CONTENT_TYPE).and_then(|v| v.to_str().ok()) else {
            return BodyKind::Other;
        };
        let mime = content_type
            .split(';')
            .next()
            .unwrap_or_default()
            .trim()
            .to_ascii_lowercase();

        if mime == "application/json" || mime.ends_with("+json") {
            BodyKind::Json
        } else if mime == "application/x-www-form-urlencoded" {
            BodyKind::Form
        } else {
            BodyKind::Other
        }
    }
}

#[async_trait]
impl<S, T> FromRequest<S> for RequestBody<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Default + Send,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match BodyKind::of(req.headers()) {
            BodyKind::Json => {
                let bytes = Bytes::from_request(req, state)
                    .await
                    .map_err(|e| AppError::bad_request(e.body_text()))?;

                if bytes.iter().all(u8::is_ascii_whitespace) {
                    return Ok(RequestBody(T::default()));
                }

                let value: serde_json::Value = serde_json::from_slice(&bytes)
                    .map_err(|e| AppError::bad_request(e.to_string()))?;

                // Arrays and scalars carry no fields
                if !value.is_object() {
                    return Ok(RequestBody(T::default()));
                }

                serde_json::from_value(value)
                    .map(RequestBody)
                    .map_err(|e| AppError::bad_request(e.to_string()))
            }
            BodyKind::Form => Form::<T>::from_request(req, state)
                .await
                .map(|Form(value)| RequestBody(value))
                .map_err(|e| AppError::bad_request(e.body_text())),
            BodyKind::Other => Ok(RequestBody(T::default())),
        }
    }
}
