//! Admin notification composition and dispatch.
//!
//! Envelopes are write-once: built from a validated request, they hold
//! sanitized copies of every user-supplied string plus a
//! server-generated timestamp, live only for the duration of the send
//! call, and are never persisted.

use chrono::Utc;
use chrono_tz::Europe::Paris;

use crate::{
    config::MailConfig,
    i18n::Lang,
    mailer::{EmailSender, MailError, OutboundEmail},
    models::request::{BetaSignupRequest, ContactRequest},
    sanitize::escape_html,
};

/// Timestamp rendering is fixed to French conventions in the
/// Europe/Paris timezone, independent of requester locale.
fn paris_timestamp() -> String {
    Utc::now()
        .with_timezone(&Paris)
        .format("%d/%m/%Y %H:%M:%S")
        .to_string()
}

/// Validates nothing; callers must run the validator first. Fails
/// before composing anything when the admin address is unconfigured.
pub async fn notify_contact(
    mailer: &dyn EmailSender,
    mail: &MailConfig,
    req: &ContactRequest,
) -> Result<(), MailError> {
    let admin = mail.admin_address().ok_or(MailError::AdminAddressMissing)?;
    let email = ContactEnvelope::from_request(req).into_email(&mail.contact_from, admin);
    mailer.send(&email).await
}

pub async fn notify_beta_signup(
    mailer: &dyn EmailSender,
    mail: &MailConfig,
    req: &BetaSignupRequest,
) -> Result<(), MailError> {
    let admin = mail.admin_address().ok_or(MailError::AdminAddressMissing)?;
    let email = SignupEnvelope::from_request(req).into_email(&mail.signup_from, admin);
    mailer.send(&email).await
}

#[derive(Debug, Clone)]
pub struct ContactEnvelope {
    name: String,
    email: String,
    message: String,
    lang: Lang,
    submitted_at: String,
}

impl ContactEnvelope {
    /// Each user string is trimmed and escaped exactly once, here.
    pub fn from_request(req: &ContactRequest) -> Self {
        Self {
            name: escape_html(req.name.as_deref().unwrap_or_default().trim()),
            email: escape_html(req.email.as_deref().unwrap_or_default().trim()),
            message: escape_html(req.message.as_deref().unwrap_or_default().trim()),
            lang: req.lang(),
            submitted_at: paris_timestamp(),
        }
    }

    pub fn into_email(self, from: &str, to: &str) -> OutboundEmail {
        let subject = format!("New Contact: {}", self.name);

        let html = format!(
            r#"<div style="font-family: Arial, sans-serif; max-width: 600px; margin: 0 auto;">
  <h1 style="color: #1a1a1a;">New Contact Form Submission</h1>
  <div style="background: #f5f5f5; padding: 20px; border-radius: 8px; margin: 20px 0;">
    <p style="margin: 0 0 10px;"><strong>Name:</strong> {name}</p>
    <p style="margin: 0 0 10px;"><strong>Email:</strong> <a href="mailto:{email}">{email}</a></p>
    <p style="margin: 0 0 10px;"><strong>Message:</strong></p>
    <p style="margin: 0; white-space: pre-wrap;">{message}</p>
  </div>
  <p style="color: #666; font-size: 14px;"><strong>Language:</strong> {lang}</p>
  <p style="color: #666; font-size: 14px;"><strong>Submitted:</strong> {submitted}</p>
</div>"#,
            name = self.name,
            email = self.email,
            message = self.message,
            lang = self.lang.as_str(),
            submitted = self.submitted_at,
        );

        let text = format!(
            "New Contact Form Submission\n\n\
             Name: {name}\n\
             Email: {email}\n\
             Message:\n{message}\n\n\
             Language: {lang}\n\
             Submitted: {submitted}",
            name = self.name,
            email = self.email,
            message = self.message,
            lang = self.lang.as_str(),
            submitted = self.submitted_at,
        );

        OutboundEmail {
            from: from.to_string(),
            to: to.to_string(),
            subject,
            html,
            text,
        }
    }
}

#[derive(Debug, Clone)]
pub struct SignupEnvelope {
    name: String,
    email: String,
    skills: Vec<String>,
    role: Option<String>,
    company: Option<String>,
    submitted_at: String,
}

impl SignupEnvelope {
    pub fn from_request(req: &BetaSignupRequest) -> Self {
        Self {
            name: escape_html(req.name.as_deref().unwrap_or_default()),
            email: escape_html(req.email.as_deref().unwrap_or_default()),
            skills: req
                .skills
                .as_deref()
                .unwrap_or_default()
                .iter()
                .map(|s| escape_html(s))
                .collect(),
            role: req.role.as_deref().map(escape_html),
            company: req.company.as_deref().map(escape_html),
            submitted_at: paris_timestamp(),
        }
    }

    pub fn into_email(self, from: &str, to: &str) -> OutboundEmail {
        let subject = format!("🎉 New Beta Signup: {}", self.name);

        let skills_html: String = self
            .skills
            .iter()
            .map(|s| format!("<li>{}</li>", s))
            .collect();
        let skills_text: String = self
            .skills
            .iter()
            .map(|s| format!("• {}", s))
            .collect::<Vec<_>>()
            .join("\n");

        let role_html = self
            .role
            .as_deref()
            .map(|r| format!("  <p style=\"margin: 10px 0 0;\"><strong>Role:</strong> {}</p>\n", r))
            .unwrap_or_default();
        let company_html = self
            .company
            .as_deref()
            .map(|c| format!("  <p style=\"margin: 10px 0 0;\"><strong>Company:</strong> {}</p>\n", c))
            .unwrap_or_default();

        let html = format!(
            r#"<div style="font-family: Arial, sans-serif; max-width: 600px; margin: 0 auto;">
  <h1 style="color: #1a1a1a;">New Beta Signup!</h1>
  <div style="background: #f5f5f5; padding: 20px; border-radius: 8px; margin: 20px 0;">
    <p style="margin: 0 0 10px;"><strong>Name:</strong> {name}</p>
    <p style="margin: 0 0 10px;"><strong>Email:</strong> <a href="mailto:{email}">{email}</a></p>
    <p style="margin: 0 0 10px;"><strong>Skills of Interest:</strong></p>
    <ul style="margin: 0; padding-left: 20px;">{skills}</ul>
{role}{company}  </div>
  <p style="color: #666; font-size: 14px;">Signed up: {submitted}</p>
</div>"#,
            name = self.name,
            email = self.email,
            skills = skills_html,
            role = role_html,
            company = company_html,
            submitted = self.submitted_at,
        );

        let mut text = format!(
            "New Beta Signup!\n\n\
             Name: {name}\n\
             Email: {email}\n\
             Skills:\n{skills}",
            name = self.name,
            email = self.email,
            skills = skills_text,
        );
        if let Some(role) = &self.role {
            text.push_str(&format!("\nRole: {}", role));
        }
        if let Some(company) = &self.company {
            text.push_str(&format!("\nCompany: {}", company));
        }
        text.push_str(&format!("\nSigned up: {}", self.submitted_at));

        OutboundEmail {
            from: from.to_string(),
            to: to.to_string(),
            subject,
            html,
            text,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contact_request() -> ContactRequest {
        ContactRequest {
            name: Some("  Alice <Dev>  ".to_string()),
            email: Some("a@b.com".to_string()),
            message: Some("Hello & welcome, this is a real inquiry.".to_string()),
            lang: Some("en".to_string()),
        }
    }

    #[test]
    fn test_contact_envelope_trims_and_escapes_once() {
        let envelope = ContactEnvelope::from_request(&contact_request());
        assert_eq!(envelope.name, "Alice &lt;Dev&gt;");
        assert_eq!(envelope.message, "Hello &amp; welcome, this is a real inquiry.");
        assert_eq!(envelope.lang, Lang::En);
    }

    #[test]
    fn test_contact_email_has_no_raw_markup_from_input() {
        let email = ContactEnvelope::from_request(&contact_request())
            .into_email("Sender <s@example.com>", "admin@example.com");
        assert_eq!(email.subject, "New Contact: Alice &lt;Dev&gt;");
        assert!(!email.html.contains("<Dev>"));
        assert!(email.html.contains("mailto:a@b.com"));
        assert!(email.text.starts_with("New Contact Form Submission"));
        assert!(email.text.contains("Language: en"));
    }

    #[test]
    fn test_signup_email_lists_skills() {
        let req = BetaSignupRequest {
            email: Some("a@b.com".to_string()),
            name: Some("Bob".to_string()),
            skills: Some(vec!["cloud".to_string(), "ai".to_string()]),
            role: Some("CTO & founder".to_string()),
            company: None,
            lang: Some("fr".to_string()),
        };
        let email = SignupEnvelope::from_request(&req)
            .into_email("Beta <b@example.com>", "admin@example.com");

        assert_eq!(email.subject, "🎉 New Beta Signup: Bob");
        assert!(email.html.contains("<li>cloud</li><li>ai</li>"));
        assert!(email.html.contains("CTO &amp; founder"));
        assert!(!email.html.contains("Company:"));
        assert!(email.text.contains("• cloud\n• ai"));
        assert!(email.text.contains("Role: CTO &amp; founder"));
        assert!(email.text.contains("Signed up: "));
    }

    #[test]
    fn test_paris_timestamp_format() {
        let ts = paris_timestamp();
        // dd/mm/yyyy hh:mm:ss
        assert_eq!(ts.len(), 19);
        assert_eq!(&ts[2..3], "/");
        assert_eq!(&ts[5..6], "/");
        assert_eq!(&ts[10..11], " ");
    }
}
