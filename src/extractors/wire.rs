//! JSON body extractor that accepts both naming conventions.

use crate::case::value_keys_to_camel_case_recursive;
use crate::error::AppError;
use async_trait::async_trait;
use axum::{
    extract::{FromRequest, Request},
    http::StatusCode,
    Json,
};
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Like `Json<T>`, but body keys are normalized to camelCase before deserializing, so
/// `room_name` and `roomName` both land in `room_name`. Rejections become [`AppError`]s
/// and therefore `{ "error": ... }` bodies.
#[derive(Debug, Clone)]
pub struct WireJson<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for WireJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(mut value) = Json::<Value>::from_request(req, state)
            .await
            .map_err(|rejection| {
                if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
                    AppError::PayloadTooLarge(rejection.body_text())
                } else {
                    AppError::BadRequest(rejection.body_text())
                }
            })?;
        value_keys_to_camel_case_recursive(&mut value);
        let parsed = serde_json::from_value(value).map_err(|e| AppError::BadRequest(e.to_string()))?;
        Ok(WireJson(parsed))
    }
}
