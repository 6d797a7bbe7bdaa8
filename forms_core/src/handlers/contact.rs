//! Contact form endpoint.

use axum::{
    extract::State,
    http::HeaderMap,
    response::{IntoResponse, Response},
};
use tracing::{error, info};

use crate::{
    extractors::StrictJson,
    i18n::{contact_messages, Lang},
    models::{request::ContactRequest, response::ApiResult},
    notify,
    validation::validate_contact,
    AppState,
};

/// POST /api/contact
///
/// Requires a JSON media type (the extractor answers 415 otherwise),
/// validates with the catalog for the body's `lang`, then dispatches
/// the admin notification. One send attempt, no retry.
pub async fn handle_contact(
    State(state): State<AppState>,
    headers: HeaderMap,
    StrictJson(req): StrictJson<ContactRequest>,
) -> Response {
    let lang = req.lang();
    let m = contact_messages(lang);

    let errors = validate_contact(&req, lang);
    if !errors.is_empty() {
        info!(fields = errors.len(), lang = lang.as_str(), "contact submission rejected");
        return ApiResult::validation_error(m.validation_error, errors).into_response();
    }

    match notify::notify_contact(state.mailer.as_ref(), &state.config.mail, &req).await {
        Ok(()) => {
            info!("contact notification sent");
            ApiResult::success(m.success).into_response()
        }
        Err(err) => {
            error!(error = %err, "contact notification failed");
            // The server-error language comes from Accept-Language
            // here, not from the body's lang field. Kept as shipped.
            let error_lang = Lang::from_accept_language(&headers);
            ApiResult::server_error(contact_messages(error_lang).server_error).into_response()
        }
    }
}
