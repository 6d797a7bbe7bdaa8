//! Terminal API results and their wire shape.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::validation::FieldErrors;

pub const CODE_VALIDATION_ERROR: &str = "VALIDATION_ERROR";
pub const CODE_SERVER_ERROR: &str = "SERVER_ERROR";

/// One instance per request; serialized directly as the response body.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiResult {
    Success { message: String },
    ValidationError { message: String, fields: FieldErrors },
    ServerError { message: String },
}

impl ApiResult {
    pub fn success(message: impl Into<String>) -> Self {
        ApiResult::Success {
            message: message.into(),
        }
    }

    pub fn validation_error(message: impl Into<String>, fields: FieldErrors) -> Self {
        ApiResult::ValidationError {
            message: message.into(),
            fields,
        }
    }

    pub fn server_error(message: impl Into<String>) -> Self {
        ApiResult::ServerError {
            message: message.into(),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiResult::Success { .. } => StatusCode::OK,
            ApiResult::ValidationError { .. } => StatusCode::BAD_REQUEST,
            ApiResult::ServerError { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// The JSON wire shape: `{success, message}` on success,
    /// `{success: false, error: {code, message, fields?}}` otherwise.
    /// `fields` is present only on validation errors.
    pub fn to_body(&self) -> serde_json::Value {
        match self {
            ApiResult::Success { message } => json!({
                "success": true,
                "message": message,
            }),
            ApiResult::ValidationError { message, fields } => json!({
                "success": false,
                "error": {
                    "code": CODE_VALIDATION_ERROR,
                    "message": message,
                    "fields": fields,
                },
            }),
            ApiResult::ServerError { message } => json!({
                "success": false,
                "error": {
                    "code": CODE_SERVER_ERROR,
                    "message": message,
                },
            }),
        }
    }
}

impl IntoResponse for ApiResult {
    fn into_response(self) -> Response {
        (self.status(), Json(self.to_body())).into_response()
    }
}
