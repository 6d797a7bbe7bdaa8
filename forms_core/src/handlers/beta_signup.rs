//! Beta signup endpoint.

use axum::response::{IntoResponse, Response};
use axum::extract::State;
use tracing::{error, info};

use crate::{
    extractors::ApiJson,
    i18n::{signup_messages, Lang},
    models::{request::BetaSignupRequest, response::ApiResult},
    notify,
    validation::validate_beta_signup,
    AppState,
};

/// POST /api/beta-signup
///
/// Unlike the contact endpoint there is no media-type gate: the body
/// is decoded as JSON whatever the declared Content-Type.
pub async fn handle_beta_signup(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<BetaSignupRequest>,
) -> Response {
    let lang = req.lang();
    let m = signup_messages(lang);

    let errors = validate_beta_signup(&req, lang);
    if !errors.is_empty() {
        info!(fields = errors.len(), lang = lang.as_str(), "beta signup rejected");
        return ApiResult::validation_error(m.validation_error, errors).into_response();
    }

    match notify::notify_beta_signup(state.mailer.as_ref(), &state.config.mail, &req).await {
        Ok(()) => {
            info!("beta signup notification sent");
            ApiResult::success(m.success).into_response()
        }
        Err(err) => {
            error!(error = %err, "beta signup notification failed");
            // This path always answers in French, regardless of the
            // requester's language. Kept as shipped.
            ApiResult::server_error(signup_messages(Lang::Fr).server_error).into_response()
        }
    }
}
