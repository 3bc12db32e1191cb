//! Environment-based settings for the binaries.
//!
//! Reads `.env` via dotenvy first, then the process environment. Values the
//! original deployment hardcoded get defaults; credentials do not.

use std::env;

use crate::core::CotizaError;

#[derive(Debug, Clone)]
pub struct Settings {
    pub mongo_uri: String,
    pub mongo_db: String,
    pub smtp: SmtpSettings,
    /// Base URL for quote-detail links in alert mail.
    pub base_url: String,
    /// External HTML→PDF renderer command.
    pub pdf_command: String,
}

#[derive(Debug, Clone)]
pub struct SmtpSettings {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub from: String,
    /// Comma-separated recipient list in the environment.
    pub recipients: Vec<String>,
}

fn required(name: &str) -> Result<String, CotizaError> {
    env::var(name).map_err(|_| CotizaError::InvalidInput(format!("missing env var {name}")))
}

fn or_default(name: &str, default: &str) -> String {
    env::var(name).unwrap_or_else(|_| default.to_string())
}

impl Settings {
    /// Load everything the `render` binary needs. SMTP settings stay unread
    /// so rendering works without mail credentials configured.
    pub fn for_render() -> Result<Self, CotizaError> {
        dotenvy::dotenv().ok();
        Ok(Self {
            mongo_uri: or_default("MONGO_URI", "mongodb://localhost:27017"),
            mongo_db: or_default("MONGO_DB", "amas"),
            smtp: SmtpSettings::placeholder(),
            base_url: or_default("BASE_URL", "https://amass.com.co"),
            pdf_command: or_default("PDF_COMMAND", "weasyprint"),
        })
    }

    /// Load everything the `expiry-alert` binary needs, including SMTP
    /// credentials (required).
    pub fn for_alert() -> Result<Self, CotizaError> {
        let mut settings = Self::for_render()?;
        settings.smtp = SmtpSettings::from_env()?;
        Ok(settings)
    }
}

impl SmtpSettings {
    fn from_env() -> Result<Self, CotizaError> {
        let port = or_default("SMTP_PORT", "587")
            .parse()
            .map_err(|e| CotizaError::InvalidInput(format!("bad SMTP_PORT: {e}")))?;
        Ok(Self {
            host: required("SMTP_HOST")?,
            port,
            user: required("SMTP_USER")?,
            password: required("SMTP_PASSWORD")?,
            from: required("MAIL_FROM")?,
            recipients: required("MAIL_TO")?
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect(),
        })
    }

    fn placeholder() -> Self {
        Self {
            host: String::new(),
            port: 587,
            user: String::new(),
            password: String::new(),
            from: String::new(),
            recipients: Vec::new(),
        }
    }
}
