//! Route table for the form-intake API.

use axum::{
    routing::{get, post},
    Router,
};

use crate::AppState;

use super::{
    beta_signup::handle_beta_signup, contact::handle_contact, health::handle_health,
    skills::handle_skills,
};

pub fn create_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(handle_health))
        .route("/api/contact", post(handle_contact))
        .route("/api/beta-signup", post(handle_beta_signup))
        .route("/api/skills", get(handle_skills))
}
