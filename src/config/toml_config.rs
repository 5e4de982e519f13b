use crate::config::ClientConfig;
use crate::domain::ports::ClientSettings;
use crate::utils::error::{ApiError, Result};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// File-based configuration for the client, e.g.:
///
/// ```toml
/// [client]
/// base_url = "http://localhost:8000"
/// auth_token = "${POCKET_GUIDE_TOKEN}"
///
/// [defaults]
/// language = "en"
/// limit = 20
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileConfig {
    pub client: ClientSection,
    pub defaults: Option<DefaultsSection>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientSection {
    pub base_url: String,
    pub auth_token: Option<String>,
    pub timeout_seconds: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefaultsSection {
    pub language: Option<String>,
    pub limit: Option<u32>,
}

impl FileConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(ApiError::Io)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| ApiError::InvalidConfigValue {
            field: "toml_parsing".to_string(),
            value: String::new(),
            reason: format!("TOML parsing error: {}", e),
        })
    }

    /// Replace `${VAR_NAME}` markers with environment values. Unset
    /// variables are left in place so validation can report them.
    fn substitute_env_vars(content: &str) -> String {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").unwrap();

        re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        })
        .to_string()
    }

    pub fn to_client_config(&self) -> ClientConfig {
        let mut config = ClientConfig::new(self.client.base_url.clone());
        if let Some(token) = &self.client.auth_token {
            config = config.with_auth_token(token.clone());
        }
        if let Some(timeout) = self.client.timeout_seconds {
            config = config.with_timeout_seconds(timeout);
        }
        config
    }

    pub fn default_language(&self) -> Option<&str> {
        self.defaults.as_ref().and_then(|d| d.language.as_deref())
    }

    pub fn default_limit(&self) -> Option<u32> {
        self.defaults.as_ref().and_then(|d| d.limit)
    }
}

impl ClientSettings for FileConfig {
    fn base_url(&self) -> &str {
        &self.client.base_url
    }

    fn auth_token(&self) -> Option<&str> {
        self.client.auth_token.as_deref()
    }

    fn timeout_seconds(&self) -> u64 {
        self.client.timeout_seconds.unwrap_or(30)
    }
}

impl Validate for FileConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_url("client.base_url", &self.client.base_url)?;

        if let Some(token) = &self.client.auth_token {
            validation::validate_non_empty_string("client.auth_token", token)?;
            // A leftover marker means the env var was never set.
            if token.starts_with("${") {
                return Err(ApiError::MissingConfig {
                    field: format!("environment variable for client.auth_token ({})", token),
                });
            }
        }

        if let Some(timeout) = self.client.timeout_seconds {
            validation::validate_range("client.timeout_seconds", timeout, 1, 600)?;
        }

        Ok(())
    }
}
