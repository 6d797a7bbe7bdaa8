//! Outbound email transport.
//!
//! `EmailSender` is the seam between the notification pipeline and the
//! transactional-email provider; `ResendMailer` is the production
//! implementation speaking the Resend HTTP API. Tests substitute a
//! recording stub.

use async_trait::async_trait;
use http::StatusCode;
use serde_json::json;
use std::time::Duration;
use thiserror::Error;

use crate::config::MailConfig;

#[derive(Error, Debug)]
pub enum MailError {
    #[error("admin email address is not configured")]
    AdminAddressMissing,

    #[error("email provider request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("email provider rejected the message with status {0}")]
    Rejected(StatusCode),
}

/// One fully composed message: both renderings, single recipient.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundEmail {
    pub from: String,
    pub to: String,
    pub subject: String,
    pub html: String,
    pub text: String,
}

#[async_trait]
pub trait EmailSender: Send + Sync {
    /// Dispatches exactly one email. No retry: failures surface
    /// synchronously to the caller.
    async fn send(&self, email: &OutboundEmail) -> Result<(), MailError>;
}

pub struct ResendMailer {
    http: reqwest::Client,
    api_base: String,
    api_key: String,
}

impl ResendMailer {
    pub fn new(config: &MailConfig) -> Result<Self, MailError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.send_timeout_seconds))
            .build()?;

        Ok(Self {
            http,
            api_base: config.api_base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
        })
    }
}

#[async_trait]
impl EmailSender for ResendMailer {
    async fn send(&self, email: &OutboundEmail) -> Result<(), MailError> {
        let payload = json!({
            "from": email.from,
            "to": [email.to],
            "subject": email.subject,
            "html": email.html,
            "text": email.text,
        });

        let response = self
            .http
            .post(format!("{}/emails", self.api_base))
            .bearer_auth(&self.api_key)
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(MailError::Rejected(status));
        }

        Ok(())
    }
}
