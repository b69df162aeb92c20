//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//!
//! ```bash
//! export LISTEN="0.0.0.0:8080"
//! export UPSTREAM_BASE_URL="https://wikimedia.org/api/rest_v1/metrics/pageviews/per-article/en.wikipedia.org/all-access/all-agents"
//! export UPSTREAM_USER_AGENT="WikiViews/1.0"
//! ```
//!
//! ## Optional Variables
//!
//! - `LISTEN` - Bind address (default: `0.0.0.0:8080`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `UPSTREAM_BASE_URL` - Pageviews per-article endpoint (default: Wikimedia, English Wikipedia)
//! - `UPSTREAM_USER_AGENT` - `User-Agent` sent upstream (default: `WikiViews/1.0`)
//! - `UPSTREAM_TIMEOUT_SECS` - Upper bound for one upstream call (default: 10, max: 300)
//! - `RATE_LIMIT_PER_SECOND` - Sustained requests per second per client IP (default: 20)
//! - `RATE_LIMIT_BURST` - Token bucket size per client IP (default: 20)

use anyhow::Result;
use axum::http::HeaderValue;
use std::env;
use url::Url;

pub const DEFAULT_UPSTREAM_BASE_URL: &str = "https://wikimedia.org/api/rest_v1/metrics/pageviews/per-article/en.wikipedia.org/all-access/all-agents";

pub const DEFAULT_USER_AGENT: &str = "WikiViews/1.0";

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
    pub upstream_base_url: String,
    /// Identifies this gateway to the upstream API, which rejects anonymous clients.
    pub upstream_user_agent: String,
    pub upstream_timeout_secs: u64,
    pub rate_limit_per_second: u32,
    pub rate_limit_burst: u32,
}

impl Config {
    /// Loads configuration from environment variables, falling back to defaults.
    ///
    /// Unparseable numeric values fall back to their defaults as well.
    pub fn from_env() -> Self {
        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:8080".to_string());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        let upstream_base_url = env::var("UPSTREAM_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_UPSTREAM_BASE_URL.to_string());
        let upstream_user_agent =
            env::var("UPSTREAM_USER_AGENT").unwrap_or_else(|_| DEFAULT_USER_AGENT.to_string());

        let upstream_timeout_secs = env::var("UPSTREAM_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(10);

        let rate_limit_per_second = env::var("RATE_LIMIT_PER_SECOND")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(20);

        let rate_limit_burst = env::var("RATE_LIMIT_BURST")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(20);

        Self {
            listen_addr,
            log_level,
            log_format,
            upstream_base_url,
            upstream_user_agent,
            upstream_timeout_secs,
            rate_limit_per_second,
            rate_limit_burst,
        }
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is not `host:port`
    /// - `upstream_base_url` is not an absolute HTTP(S) URL
    /// - `upstream_user_agent` is empty or not a valid header value
    /// - timeout or rate limit values are out of range
    pub fn validate(&self) -> Result<()> {
        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        self.upstream_url()?;
        self.user_agent_header()?;

        if self.upstream_timeout_secs == 0 || self.upstream_timeout_secs > 300 {
            anyhow::bail!(
                "UPSTREAM_TIMEOUT_SECS must be between 1 and 300, got {}",
                self.upstream_timeout_secs
            );
        }

        if self.rate_limit_per_second == 0 || self.rate_limit_per_second > 1000 {
            anyhow::bail!(
                "RATE_LIMIT_PER_SECOND must be between 1 and 1000, got {}",
                self.rate_limit_per_second
            );
        }

        if self.rate_limit_burst == 0 {
            anyhow::bail!("RATE_LIMIT_BURST must be at least 1");
        }

        Ok(())
    }

    /// Parses `upstream_base_url`.
    ///
    /// # Errors
    ///
    /// Returns an error unless it is an `http://` or `https://` URL that can carry a path.
    pub fn upstream_url(&self) -> Result<Url> {
        let url = Url::parse(&self.upstream_base_url).map_err(|e| {
            anyhow::anyhow!(
                "UPSTREAM_BASE_URL is not a valid URL ({e}), got '{}'",
                self.upstream_base_url
            )
        })?;

        if !matches!(url.scheme(), "http" | "https") || url.cannot_be_a_base() {
            anyhow::bail!(
                "UPSTREAM_BASE_URL must start with 'http://' or 'https://', got '{}'",
                self.upstream_base_url
            );
        }

        Ok(url)
    }

    /// Converts `upstream_user_agent` into a header value.
    ///
    /// # Errors
    ///
    /// Returns an error if it is empty or contains characters not allowed in headers.
    pub fn user_agent_header(&self) -> Result<HeaderValue> {
        if self.upstream_user_agent.trim().is_empty() {
            anyhow::bail!("UPSTREAM_USER_AGENT must not be empty");
        }

        HeaderValue::from_str(&self.upstream_user_agent).map_err(|_| {
            anyhow::anyhow!(
                "UPSTREAM_USER_AGENT contains invalid characters, got '{}'",
                self.upstream_user_agent
            )
        })
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Upstream: {}", self.upstream_base_url);
        tracing::info!("  Upstream user agent: {}", self.upstream_user_agent);
        tracing::info!("  Upstream timeout: {}s", self.upstream_timeout_secs);
        tracing::info!(
            "  Rate limit: {}/s (burst {})",
            self.rate_limit_per_second,
            self.rate_limit_burst
        );
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env();
    config.validate()?;
    Ok(config)
}
