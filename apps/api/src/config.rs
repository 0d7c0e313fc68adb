use anyhow::{Context, Result};

use crate::llm_client::SafetyPolicy;

/// Application configuration loaded from environment variables.
/// Startup aborts if required variables are missing — the Gemini key is
/// checked here, before any route is served.
#[derive(Debug, Clone)]
pub struct Config {
    pub gemini_api_key: String,
    /// Directory scanned for question JSON files on every request.
    pub data_dir: String,
    pub safety_policy: SafetyPolicy,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            gemini_api_key: require_env("GEMINI_API_KEY")?,
            data_dir: std::env::var("DATA_DIR").unwrap_or_else(|_| "data1".to_string()),
            safety_policy: std::env::var("SAFETY_POLICY")
                .unwrap_or_else(|_| "relaxed".to_string())
                .parse::<SafetyPolicy>()
                .map_err(|e| anyhow::anyhow!(e))
                .context("SAFETY_POLICY must be 'relaxed' or 'vendor-default'")?,
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
