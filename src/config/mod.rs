#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::domain::ports::ClientSettings;
use crate::utils::validation::{self, Validate};
use crate::utils::error::Result;
use serde::{Deserialize, Serialize};

pub const PRODUCTION_BASE_URL: &str = "https://api.pocket-guide.com";
pub const DEVELOPMENT_BASE_URL: &str = "http://localhost:8000";

const DEFAULT_TIMEOUT_SECONDS: u64 = 30;

/// Resolve the base URL the way the original client did: an explicit
/// `POCKET_GUIDE_API_URL` wins, otherwise `POCKET_GUIDE_ENV=development`
/// selects the local backend, otherwise production.
pub fn resolve_base_url() -> String {
    if let Ok(url) = std::env::var("POCKET_GUIDE_API_URL") {
        if !url.is_empty() {
            return url;
        }
    }
    match std::env::var("POCKET_GUIDE_ENV").as_deref() {
        Ok("development") => DEVELOPMENT_BASE_URL.to_string(),
        _ => PRODUCTION_BASE_URL.to_string(),
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    pub base_url: String,
    pub auth_token: Option<String>,
    pub timeout_seconds: u64,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            auth_token: None,
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
        }
    }

    /// Configuration from the process environment. `POCKET_GUIDE_TOKEN`
    /// supplies the bearer token when the backend requires one.
    pub fn from_env() -> Self {
        Self {
            base_url: resolve_base_url(),
            auth_token: std::env::var("POCKET_GUIDE_TOKEN").ok().filter(|t| !t.is_empty()),
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
        }
    }

    pub fn with_auth_token(mut self, token: impl Into<String>) -> Self {
        self.auth_token = Some(token.into());
        self
    }

    pub fn with_timeout_seconds(mut self, seconds: u64) -> Self {
        self.timeout_seconds = seconds;
        self
    }
}

impl ClientSettings for ClientConfig {
    fn base_url(&self) -> &str {
        &self.base_url
    }

    fn auth_token(&self) -> Option<&str> {
        self.auth_token.as_deref()
    }

    fn timeout_seconds(&self) -> u64 {
        self.timeout_seconds
    }
}

impl Validate for ClientConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_url("base_url", &self.base_url)?;
        validation::validate_range("timeout_seconds", self.timeout_seconds, 1, 600)?;
        if let Some(token) = &self.auth_token {
            validation::validate_non_empty_string("auth_token", token)?;
        }
        Ok(())
    }
}
