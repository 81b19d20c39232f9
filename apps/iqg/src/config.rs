use std::path::PathBuf;

use anyhow::{Context, Result};

/// Base URL of the production analysis service, used when `IQG_API_URL` is unset.
pub const DEFAULT_API_URL: &str = "https://iqg-api.fsgarage.in";
const DEFAULT_TIMEOUT_SECS: u64 = 120;

/// Client configuration loaded from environment variables.
/// Nothing is required; every value has a default.
#[derive(Debug, Clone)]
pub struct Config {
    pub api_url: String,
    pub request_timeout_secs: u64,
    pub output_dir: PathBuf,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            api_url: normalize_base_url(
                &std::env::var("IQG_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string()),
            ),
            request_timeout_secs: match std::env::var("IQG_REQUEST_TIMEOUT_SECS") {
                Ok(raw) => raw
                    .parse::<u64>()
                    .context("IQG_REQUEST_TIMEOUT_SECS must be a whole number of seconds")?,
                Err(_) => DEFAULT_TIMEOUT_SECS,
            },
            output_dir: std::env::var("IQG_OUTPUT_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(".")),
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

/// Trims whitespace and trailing slashes; an empty value falls back to the default.
fn normalize_base_url(raw: &str) -> String {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        DEFAULT_API_URL.to_string()
    } else {
        trimmed.to_string()
    }
}
