use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Fails at startup if required variables are missing.
///
/// `GEMINI_API_KEY` is deliberately optional: the generation client reports
/// a missing key at first use so the rest of the site stays navigable.
#[derive(Debug, Clone)]
pub struct Config {
    pub gemini_api_key: Option<String>,
    pub emailjs_service_id: String,
    pub emailjs_user_template_id: String,
    pub emailjs_admin_template_id: String,
    pub emailjs_public_key: String,
    pub community_link: String,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            gemini_api_key: std::env::var("GEMINI_API_KEY")
                .ok()
                .filter(|v| !v.trim().is_empty()),
            emailjs_service_id: require_env("EMAILJS_SERVICE_ID")?,
            emailjs_user_template_id: require_env("EMAILJS_USER_TEMPLATE_ID")?,
            emailjs_admin_template_id: require_env("EMAILJS_ADMIN_TEMPLATE_ID")?,
            emailjs_public_key: require_env("EMAILJS_PUBLIC_KEY")?,
            community_link: require_env("COMMUNITY_LINK")?,
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}
