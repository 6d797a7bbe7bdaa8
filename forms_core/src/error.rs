//! Application error types and handling

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    i18n::{signup_messages, Lang},
    mailer::MailError,
    models::response::ApiResult,
    validation::FieldErrors,
};

pub type Result<T> = std::result::Result<T, AppError>;

#[derive(Error, Debug)]
pub enum AppError {
    /// Contact submissions must declare a JSON media type. Carries the
    /// declared Content-Type for the server-side log.
    #[error("unsupported media type: {0:?}")]
    UnsupportedMediaType(String),

    #[error("malformed request body: {0}")]
    MalformedBody(String),

    #[error("mail dispatch failed: {0}")]
    Mail(#[from] MailError),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::UnsupportedMediaType(declared) => {
                tracing::warn!(content_type = %declared, "rejecting non-JSON submission");
                let body = ApiResult::validation_error(
                    "Content-Type must be application/json",
                    FieldErrors::new(),
                )
                .to_body();
                (StatusCode::UNSUPPORTED_MEDIA_TYPE, Json(body)).into_response()
            }
            AppError::MalformedBody(detail) => {
                tracing::warn!(error = %detail, "rejecting malformed request body");
                ApiResult::validation_error("Request body must be valid JSON", FieldErrors::new())
                    .into_response()
            }
            AppError::Mail(err) => {
                // Raw provider errors stay server-side; clients get the
                // generic localized message. French here: this path is
                // only reached by the beta-signup handler, whose
                // server-error responses are always French.
                tracing::error!(error = %err, "notification dispatch failed");
                ApiResult::server_error(signup_messages(Lang::Fr).server_error).into_response()
            }
            AppError::Config(msg) => {
                tracing::error!(error = %msg, "configuration error");
                ApiResult::server_error(signup_messages(Lang::Fr).server_error).into_response()
            }
            AppError::Io(err) => {
                tracing::error!(error = %err, "IO error");
                ApiResult::server_error(signup_messages(Lang::Fr).server_error).into_response()
            }
            AppError::Other(err) => {
                tracing::error!(error = ?err, "unexpected error");
                ApiResult::server_error(signup_messages(Lang::Fr).server_error).into_response()
            }
        }
    }
}
