//! Language resolution and localized message catalogs for API responses.

pub mod catalog;

pub use catalog::{contact_messages, signup_messages, ContactMessages, SignupMessages};

use http::{header, HeaderMap};
use serde::{Deserialize, Serialize};

/// Response language. Every request resolves to exactly one of the two
/// supported languages; French is the fallback in all cases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Lang {
    #[default]
    Fr,
    En,
}

impl Lang {
    /// Resolves the `lang` tag from a request body. Anything other than
    /// an exact `"en"` falls back to French; a missing or unrecognized
    /// tag is never an error.
    pub fn from_tag(tag: Option<&str>) -> Self {
        match tag {
            Some("en") => Lang::En,
            _ => Lang::Fr,
        }
    }

    /// Resolves a language from the `Accept-Language` request header.
    /// Only used by the contact endpoint's server-error path.
    pub fn from_accept_language(headers: &HeaderMap) -> Self {
        let accept = headers
            .get(header::ACCEPT_LANGUAGE)
            .and_then(|value| value.to_str().ok())
            .unwrap_or("");

        if accept.starts_with("en") {
            Lang::En
        } else {
            Lang::Fr
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Lang::Fr => "fr",
            Lang::En => "en",
        }
    }
}
