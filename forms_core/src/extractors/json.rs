//! JSON extractors matching the API error contract.

use axum::{
    async_trait,
    body::Bytes,
    extract::{FromRequest, Request},
    http::header,
};
use mime::Mime;
use serde::de::DeserializeOwned;

use crate::error::AppError;

/// Lenient JSON extractor: decodes the body as JSON regardless of the
/// declared media type. The beta-signup endpoint takes whatever it is
/// given; only decode failures are rejected, in the API error shape.
pub struct ApiJson<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for ApiJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|err| AppError::MalformedBody(err.to_string()))?;

        let value = serde_json::from_slice(&bytes)
            .map_err(|err| AppError::MalformedBody(err.to_string()))?;

        Ok(ApiJson(value))
    }
}

/// Strict variant for the contact endpoint: the request media type
/// must declare JSON before the body is read, otherwise the request
/// is rejected with 415 ahead of any validation.
pub struct StrictJson<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for StrictJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if !declares_json(&req) {
            let declared = req
                .headers()
                .get(header::CONTENT_TYPE)
                .and_then(|value| value.to_str().ok())
                .unwrap_or("")
                .to_string();
            return Err(AppError::UnsupportedMediaType(declared));
        }

        let ApiJson(value) = ApiJson::from_request(req, state).await?;
        Ok(StrictJson(value))
    }
}

/// Accepts `application/json` and `application/*+json`, with or
/// without parameters such as `; charset=utf-8`.
fn declares_json(req: &Request) -> bool {
    let Some(mime) = req
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.parse::<Mime>().ok())
    else {
        return false;
    };

    mime.type_() == mime::APPLICATION
        && (mime.subtype() == mime::JSON || mime.suffix() == Some(mime::JSON))
}
