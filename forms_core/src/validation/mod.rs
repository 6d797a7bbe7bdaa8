//! Field-level validation producing localized error maps.

pub mod rules;
pub mod validators;

pub use validators::{validate_beta_signup, validate_contact};

use serde::Serialize;
use std::collections::BTreeMap;

/// Mapping from form field name to one localized error message.
/// An empty map means the request is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a message for a field. The first message recorded for a
    /// field wins; later rules for the same field are ignored, so a
    /// field never carries more than one error.
    pub fn add(&mut self, field: &str, message: &str) {
        self.0
            .entry(field.to_string())
            .or_insert_with(|| message.to_string());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_message_per_field_wins() {
        let mut errors = FieldErrors::new();
        errors.add("email", "required");
        errors.add("email", "invalid");
        assert_eq!(errors.get("email"), Some("required"));
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn test_serializes_as_plain_map() {
        let mut errors = FieldErrors::new();
        errors.add("name", "too short");
        let value = serde_json::to_value(&errors).unwrap();
        assert_eq!(value, serde_json::json!({"name": "too short"}));
    }
}
