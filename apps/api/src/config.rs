use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Startup fails if the Gemini API key is missing; there is no built-in key.
#[derive(Clone)]
pub struct Config {
    pub gemini_api_key: String,
    /// Google Speech-to-Text key. Falls back to the Gemini key when unset.
    pub speech_api_key: String,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let gemini_api_key = require_env("GEMINI_API_KEY")?;
        let speech_api_key = optional_env("SPEECH_API_KEY").unwrap_or_else(|| gemini_api_key.clone());

        Ok(Config {
            gemini_api_key,
            speech_api_key,
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

// Keys are redacted so the config can be logged safely.
impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("gemini_api_key", &"<redacted>")
            .field("speech_api_key", &"<redacted>")
            .field("port", &self.port)
            .field("rust_log", &self.rust_log)
            .finish()
    }
}

fn require_env(key: &str) -> Result<String> {
    optional_env(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}
