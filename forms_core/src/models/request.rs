//! Decoded form submissions.
//!
//! Every field is optional at the decode layer so that a missing
//! field reaches the validator and comes back as a localized
//! "required" error instead of a deserialization failure.

use serde::Deserialize;

use crate::i18n::Lang;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContactRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub lang: Option<String>,
}

impl ContactRequest {
    pub fn lang(&self) -> Lang {
        Lang::from_tag(self.lang.as_deref())
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct BetaSignupRequest {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub skills: Option<Vec<String>>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub lang: Option<String>,
}

impl BetaSignupRequest {
    pub fn lang(&self) -> Lang {
        Lang::from_tag(self.lang.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_decode_to_none() {
        let req: ContactRequest = serde_json::from_str("{}").unwrap();
        assert!(req.name.is_none());
        assert!(req.email.is_none());
        assert!(req.message.is_none());
        assert_eq!(req.lang(), Lang::Fr);
    }

    #[test]
    fn test_unknown_fields_are_ignored() {
        let req: BetaSignupRequest =
            serde_json::from_str(r#"{"email":"a@b.com","extra":42}"#).unwrap();
        assert_eq!(req.email.as_deref(), Some("a@b.com"));
    }

    #[test]
    fn test_lang_resolution() {
        let req: ContactRequest = serde_json::from_str(r#"{"lang":"en"}"#).unwrap();
        assert_eq!(req.lang(), Lang::En);
        let req: ContactRequest = serde_json::from_str(r#"{"lang":"es"}"#).unwrap();
        assert_eq!(req.lang(), Lang::Fr);
    }
}
