//! Client configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All optional:
//! - `FRUITDEX_API_BASE_URL` - Base path of the fruit API
//!   (default: `https://fruityvice.com/api/fruit`)
//! - `FRUITDEX_API_FORMAT` - Response format, `raw` or `enveloped`
//!   (default: `raw`; `enveloped` is for CORS-bypass proxies that wrap the
//!   payload in a JSON envelope)
//! - `FRUITDEX_TIMEOUT_SECS` - HTTP request timeout in seconds (default: 30)
//! - `FRUITDEX_PREFS_DIR` - Directory for persisted preferences such as the
//!   UI language; when unset, preferences degrade to a no-op store

use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;
use url::Url;

use crate::transport::ResponseFormat;

/// Default base path of the public fruit API.
pub const DEFAULT_BASE_URL: &str = "https://fruityvice.com/api/fruit";

const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Fruit API client configuration.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Base path requests are built from (`{base}/all`, `{base}/{name}`).
    pub base_url: Url,
    /// How response bodies are decoded.
    pub format: ResponseFormat,
    /// Per-request timeout.
    pub timeout: Duration,
    /// Directory for persisted preferences; `None` disables persistence.
    pub prefs_dir: Option<PathBuf>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: Url::parse(DEFAULT_BASE_URL).expect("default base URL is valid"),
            format: ResponseFormat::Raw,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            prefs_dir: None,
        }
    }
}

impl ApiConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from a `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is present but cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let base_url = parse_base_url(&get_env_or_default(
            "FRUITDEX_API_BASE_URL",
            DEFAULT_BASE_URL,
        ))?;
        let format = parse_format(&get_env_or_default("FRUITDEX_API_FORMAT", "raw"))?;
        let timeout = parse_timeout(&get_env_or_default(
            "FRUITDEX_TIMEOUT_SECS",
            &DEFAULT_TIMEOUT_SECS.to_string(),
        ))?;
        let prefs_dir = get_optional_env("FRUITDEX_PREFS_DIR").map(PathBuf::from);

        Ok(Self {
            base_url,
            format,
            timeout,
            prefs_dir,
        })
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get an optional environment variable.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

fn parse_base_url(value: &str) -> Result<Url, ConfigError> {
    // A trailing slash would make Url::join drop the last path segment, so
    // normalize it away here.
    let trimmed = value.trim_end_matches('/');
    Url::parse(trimmed)
        .map_err(|e| ConfigError::InvalidEnvVar("FRUITDEX_API_BASE_URL".to_string(), e.to_string()))
}

fn parse_format(value: &str) -> Result<ResponseFormat, ConfigError> {
    ResponseFormat::parse(value).ok_or_else(|| {
        ConfigError::InvalidEnvVar(
            "FRUITDEX_API_FORMAT".to_string(),
            format!("expected 'raw' or 'enveloped', got '{value}'"),
        )
    })
}

fn parse_timeout(value: &str) -> Result<Duration, ConfigError> {
    value
        .parse::<u64>()
        .map(Duration::from_secs)
        .map_err(|e| ConfigError::InvalidEnvVar("FRUITDEX_TIMEOUT_SECS".to_string(), e.to_string()))
}
