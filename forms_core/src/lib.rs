//! Core library for the bilingual (FR/EN) form-intake API: request
//! decoding, localized validation, HTML sanitization, and admin email
//! notification for the contact and beta-signup forms.

pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod i18n;
pub mod mailer;
pub mod middleware;
pub mod models;
pub mod notify;
pub mod sanitize;
pub mod skills;
pub mod validation;

pub use config::AppConfig;
pub use error::{AppError, Result};
pub use handlers::routes::create_routes;
pub use i18n::Lang;
pub use mailer::{EmailSender, MailError, OutboundEmail, ResendMailer};
pub use models::response::ApiResult;
pub use validation::FieldErrors;

use axum::Router;
use std::{net::SocketAddr, sync::Arc};
use tokio::signal;
use tracing::info;

/// Immutable per-process state shared by all requests. Handlers never
/// mutate it; the only cross-request data are the static catalogs and
/// the provider client behind `mailer`.
#[derive(Clone)]
pub struct AppState {
    pub app_name: String,
    pub version: String,
    pub config: AppConfig,
    pub mailer: Arc<dyn EmailSender>,
}

impl AppState {
    pub fn new(config: AppConfig) -> Result<Self> {
        let mailer = ResendMailer::new(&config.mail)?;

        Ok(Self {
            app_name: "Noosia Forms API".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            config,
            mailer: Arc::new(mailer),
        })
    }

    /// Swaps the transport, used by tests to stub the provider.
    pub fn with_mailer(mut self, mailer: Arc<dyn EmailSender>) -> Self {
        self.mailer = mailer;
        self
    }
}

pub fn create_app(state: AppState) -> Router {
    Router::new()
        .merge(create_routes())
        .layer(middleware::cors::cors_layer_from_config(&state.config.cors))
        .layer(middleware::logging::logging_layer())
        .with_state(state)
}

pub async fn run_server(app: Router, addr: SocketAddr) -> Result<()> {
    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, starting graceful shutdown");
        },
        _ = terminate => {
            info!("Received SIGTERM, starting graceful shutdown");
        },
    }
}
