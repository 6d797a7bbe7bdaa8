use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub mail: MailConfig,
    pub cors: CorsConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MailConfig {
    /// Destination for notification emails. Empty means unconfigured;
    /// submissions then fail with a server error at send time rather
    /// than at startup.
    pub admin_email: String,
    pub api_key: String,
    pub api_base_url: String,
    pub contact_from: String,
    pub signup_from: String,
    pub send_timeout_seconds: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            mail: MailConfig::default(),
            cors: CorsConfig::default(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
        }
    }
}

impl Default for MailConfig {
    fn default() -> Self {
        Self {
            admin_email: String::new(),
            api_key: String::new(),
            api_base_url: "https://api.resend.com".to_string(),
            contact_from: "n∞sia Contact <onboarding@resend.dev>".to_string(),
            signup_from: "Infinity Beta <onboarding@resend.dev>".to_string(),
            send_timeout_seconds: 10,
        }
    }
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: vec![
                "http://localhost:4321".to_string(),
                "http://localhost:3000".to_string(),
                "http://127.0.0.1:4321".to_string(),
            ],
        }
    }
}

impl MailConfig {
    pub fn admin_address(&self) -> Option<&str> {
        let trimmed = self.admin_email.trim();
        (!trimmed.is_empty()).then_some(trimmed)
    }
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        let mut builder = Config::builder().add_source(Config::try_from(&AppConfig::default())?);

        if std::path::Path::new("config.toml").exists() {
            builder = builder.add_source(File::with_name("config"));
        }

        builder = builder.add_source(
            Environment::with_prefix("APP")
                .separator("_")
                .try_parsing(true),
        );

        let config = builder.build()?;
        let app_config: AppConfig = config.try_deserialize()?;

        app_config.validate()?;

        Ok(app_config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Message("Server port cannot be 0".to_string()));
        }

        if self.mail.api_base_url.is_empty() {
            return Err(ConfigError::Message(
                "Mail API base URL cannot be empty".to_string(),
            ));
        }

        if self.mail.send_timeout_seconds == 0 {
            return Err(ConfigError::Message(
                "Mail send timeout must be greater than 0".to_string(),
            ));
        }

        if self.mail.contact_from.is_empty() || self.mail.signup_from.is_empty() {
            return Err(ConfigError::Message(
                "Sender identities cannot be empty".to_string(),
            ));
        }

        if self.mail.api_key.is_empty() {
            tracing::warn!("mail API key is not set - notification sends will be rejected");
        }

        if self.mail.admin_address().is_none() {
            tracing::warn!("admin email is not set - submissions will fail with a server error");
        }

        Ok(())
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
