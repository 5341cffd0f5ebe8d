// src/config/mod.rs
// All values come from the environment. GEMINI_API_KEY is required and its
// absence is fatal at startup; everything else has a default.

use std::str::FromStr;

use anyhow::Context;

#[derive(Debug, Clone)]
pub struct Config {
    /// Credential for the Gemini API. Injected into the client at
    /// construction; nothing reads it from the environment afterwards.
    pub gemini_api_key: String,
    pub gemini_base_url: String,
    pub host: String,
    pub port: u16,
}

// Handles values with trailing comments and extra whitespace.
fn env_var_or<T>(key: &str, default: T) -> T
where
    T: FromStr,
{
    match std::env::var(key) {
        Ok(val) => {
            let clean_val = val.split('#').next().unwrap_or("").trim();
            clean_val.parse::<T>().unwrap_or(default)
        }
        Err(_) => default,
    }
}

impl Config {
    /// Load configuration, reading a `.env` file first if one exists.
    ///
    /// Fails when `GEMINI_API_KEY` is missing or blank — the service refuses
    /// to start without credentials rather than failing per-request.
    pub fn from_env() -> anyhow::Result<Self> {
        if dotenvy::dotenv().is_err() {
            eprintln!("Warning: .env file not found. Using environment variables and defaults.");
        }

        let gemini_api_key = std::env::var("GEMINI_API_KEY")
            .ok()
            .map(|key| key.trim().to_string())
            .filter(|key| !key.is_empty())
            .context("GEMINI_API_KEY environment variable is required")?;

        Ok(Self {
            gemini_api_key,
            gemini_base_url: env_var_or(
                "GEMINI_BASE_URL",
                crate::llm::DEFAULT_GEMINI_BASE_URL.to_string(),
            ),
            host: env_var_or("SORTIQ_HOST", "0.0.0.0".to_string()),
            port: env_var_or("SORTIQ_PORT", 3000),
        })
    }
}
