use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{body::Body, Router};
use forms_core::{
    create_app, AppConfig, AppState, EmailSender, MailError, OutboundEmail,
};
use http::{header, Request, StatusCode};
use serde_json::{json, Value};
use tower::ServiceExt;

struct RecordingMailer {
    fail: bool,
    sent: Mutex<Vec<OutboundEmail>>,
}

impl RecordingMailer {
    fn succeeding() -> Arc<Self> {
        Arc::new(Self {
            fail: false,
            sent: Mutex::new(Vec::new()),
        })
    }

    fn failing() -> Arc<Self> {
        Arc::new(Self {
            fail: true,
            sent: Mutex::new(Vec::new()),
        })
    }

    fn sent(&self) -> Vec<OutboundEmail> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl EmailSender for RecordingMailer {
    async fn send(&self, email: &OutboundEmail) -> Result<(), MailError> {
        if self.fail {
            return Err(MailError::Rejected(StatusCode::BAD_GATEWAY));
        }
        self.sent.lock().unwrap().push(email.clone());
        Ok(())
    }
}

fn app(admin_email: &str, mailer: Arc<RecordingMailer>) -> Router {
    let mut config = AppConfig::default();
    config.mail.admin_email = admin_email.to_string();
    let state = AppState::new(config).unwrap().with_mailer(mailer);
    create_app(state)
}

fn post_json(uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn valid_signup() -> Value {
    json!({
        "email": "bob@example.com",
        "name": "Bob",
        "skills": ["cloud", "ai", "strategy"],
        "role": "CTO",
        "company": "Acme",
        "lang": "en",
    })
}

#[tokio::test]
async fn test_valid_signup_succeeds_and_sends_one_email() {
    let mailer = RecordingMailer::succeeding();
    let app = app("admin@example.com", mailer.clone());

    let response = app
        .oneshot(post_json("/api/beta-signup", &valid_signup()))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["success"], true);
    assert_eq!(
        body["message"],
        "Signup successful! You'll receive a confirmation email."
    );

    let sent = mailer.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].subject, "🎉 New Beta Signup: Bob");
    assert!(sent[0].html.contains("<li>cloud</li><li>ai</li><li>strategy</li>"));
    assert!(sent[0].html.contains("<strong>Role:</strong> CTO"));
    assert!(sent[0].html.contains("<strong>Company:</strong> Acme"));
    assert!(sent[0].text.contains("• cloud\n• ai\n• strategy"));
}

#[tokio::test]
async fn test_zero_skills_reports_minimum() {
    let app = app("admin@example.com", RecordingMailer::succeeding());

    let mut signup = valid_signup();
    signup["skills"] = json!([]);

    let response = app
        .oneshot(post_json("/api/beta-signup", &signup))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    assert_eq!(body["error"]["fields"]["skills"], "Select at least 1 skill");
}

#[tokio::test]
async fn test_six_skills_reports_maximum_but_five_pass() {
    let mailer = RecordingMailer::succeeding();
    let app_ref = app("admin@example.com", mailer.clone());

    let mut signup = valid_signup();
    signup["skills"] = json!(["cloud", "ai", "data", "web", "devops", "security"]);

    let response = app_ref
        .clone()
        .oneshot(post_json("/api/beta-signup", &signup))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["error"]["fields"]["skills"], "You can select up to 5 skills");

    signup["skills"] = json!(["cloud", "ai", "data", "web", "devops"]);
    let response = app_ref
        .oneshot(post_json("/api/beta-signup", &signup))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(mailer.sent().len(), 1);
}

#[tokio::test]
async fn test_signup_has_no_media_type_gate() {
    let app = app("admin@example.com", RecordingMailer::succeeding());

    // No Content-Type header at all; the body is still decoded.
    let request = Request::builder()
        .method("POST")
        .uri("/api/beta-signup")
        .body(Body::from(valid_signup().to_string()))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_french_validation_messages() {
    let app = app("admin@example.com", RecordingMailer::succeeding());

    let response = app
        .oneshot(post_json("/api/beta-signup", &json!({"lang": "fr"})))
        .await
        .unwrap();

    let body = body_json(response).await;
    assert_eq!(body["error"]["message"], "Veuillez corriger les erreurs ci-dessous");
    assert_eq!(body["error"]["fields"]["email"], "L'adresse email est requise");
    assert_eq!(body["error"]["fields"]["name"], "Le prénom est requis");
    assert_eq!(body["error"]["fields"]["skills"], "Sélectionnez au moins 1 compétence");
}

#[tokio::test]
async fn test_server_error_is_always_french() {
    let app = app("admin@example.com", RecordingMailer::failing());

    // English body and English Accept-Language; the server-error path
    // still answers in French on this endpoint.
    let mut request = post_json("/api/beta-signup", &valid_signup());
    request
        .headers_mut()
        .insert(header::ACCEPT_LANGUAGE, "en-US,en;q=0.9".parse().unwrap());

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = body_json(response).await;
    assert_eq!(body["error"]["code"], "SERVER_ERROR");
    assert_eq!(body["error"]["message"], "Une erreur est survenue. Veuillez réessayer.");
}

#[tokio::test]
async fn test_unconfigured_admin_is_server_error_with_no_send() {
    let mailer = RecordingMailer::succeeding();
    let app = app("", mailer.clone());

    let response = app
        .oneshot(post_json("/api/beta-signup", &valid_signup()))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = body_json(response).await;
    assert_eq!(body["error"]["code"], "SERVER_ERROR");
    assert!(mailer.sent().is_empty());
}

#[tokio::test]
async fn test_skills_taxonomy_endpoint() {
    let app = app("admin@example.com", RecordingMailer::succeeding());

    let request = Request::builder()
        .method("GET")
        .uri("/api/skills?lang=en")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["lang"], "en");
    assert_eq!(body["max_selection"], 5);

    let categories = body["categories"].as_array().unwrap();
    assert_eq!(categories.len(), 4);
    assert_eq!(categories[0]["id"], "tech");
    assert_eq!(categories[0]["skills"].as_array().unwrap().len(), 6);
    assert_eq!(categories[0]["skills"][2]["name"], "Cybersecurity");
}

#[tokio::test]
async fn test_skills_taxonomy_defaults_to_french() {
    let app = app("admin@example.com", RecordingMailer::succeeding());

    let request = Request::builder()
        .method("GET")
        .uri("/api/skills")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let body = body_json(response).await;
    assert_eq!(body["lang"], "fr");
    assert_eq!(body["categories"][0]["skills"][2]["name"], "Cybersécurité");
}

#[tokio::test]
async fn test_health_endpoint() {
    let app = app("admin@example.com", RecordingMailer::succeeding());

    let request = Request::builder()
        .method("GET")
        .uri("/health")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["status"], "healthy");
}
