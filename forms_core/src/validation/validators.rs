//! Per-endpoint validators.
//!
//! Rules run in a fixed order per field and the first failing rule
//! wins: an empty email reports "required", never "invalid".

use super::{
    rules::{is_valid_email, trimmed_len},
    FieldErrors,
};
use crate::{
    i18n::{contact_messages, signup_messages, Lang},
    models::request::{BetaSignupRequest, ContactRequest},
    skills::MAX_SELECTED_SKILLS,
};

pub fn validate_contact(req: &ContactRequest, lang: Lang) -> FieldErrors {
    let m = contact_messages(lang);
    let mut errors = FieldErrors::new();

    match req.name.as_deref() {
        None => errors.add("name", m.name_required),
        Some(name) if name.trim().is_empty() => errors.add("name", m.name_required),
        Some(name) => {
            let len = trimmed_len(name);
            if !(2..=100).contains(&len) {
                errors.add("name", m.name_min);
            }
        }
    }

    match req.email.as_deref() {
        None | Some("") => errors.add("email", m.email_required),
        Some(email) => {
            // The contact form also caps the address length at 255.
            if !is_valid_email(email) || email.chars().count() > 255 {
                errors.add("email", m.email_invalid);
            }
        }
    }

    match req.message.as_deref() {
        None => errors.add("message", m.message_required),
        Some(message) if message.trim().is_empty() => errors.add("message", m.message_required),
        Some(message) => {
            let len = trimmed_len(message);
            if !(10..=2000).contains(&len) {
                errors.add("message", m.message_min);
            }
        }
    }

    errors
}

pub fn validate_beta_signup(req: &BetaSignupRequest, lang: Lang) -> FieldErrors {
    let m = signup_messages(lang);
    let mut errors = FieldErrors::new();

    match req.email.as_deref() {
        None | Some("") => errors.add("email", m.email_required),
        Some(email) => {
            if !is_valid_email(email) {
                errors.add("email", m.email_invalid);
            }
        }
    }

    match req.name.as_deref() {
        None => errors.add("name", m.name_required),
        Some(name) if name.trim().is_empty() => errors.add("name", m.name_required),
        Some(_) => {}
    }

    match req.skills.as_deref() {
        None | Some([]) => errors.add("skills", m.skills_min),
        Some(skills) if skills.len() > MAX_SELECTED_SKILLS => errors.add("skills", m.skills_max),
        Some(_) => {}
    }

    errors
}
