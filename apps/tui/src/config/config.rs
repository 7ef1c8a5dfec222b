use dotenv::dotenv;
use std::collections::BTreeSet;
use std::env;
use std::path::PathBuf;
use std::time::Duration;

use crate::domain::Category;

pub const DEFAULT_API_URL: &str = "https://rickandmortyapi.com/api";
pub const DEFAULT_LOG_FILE: &str = "multiverse.log";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("API base URL must start with http:// or https://, got {0:?}")]
    InvalidBaseUrl(String),
    #[error("REQUEST_TIMEOUT_SECS must be a whole number of seconds, got {0:?}")]
    InvalidTimeout(String),
}

/// Where the remote API lives and how requests to it are made.
///
/// Every component that talks to the API receives this explicitly; there is no
/// process-wide URL table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
    /// `None` leaves requests without a client-side deadline.
    pub timeout: Option<Duration>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            timeout: None,
        }
    }
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Result<Self, ConfigError> {
        let base_url = base_url.into().trim().trim_end_matches('/').to_string();
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(ConfigError::InvalidBaseUrl(base_url));
        }

        Ok(Self {
            base_url,
            timeout: None,
        })
    }

    #[must_use]
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    /// Listing endpoint for a category, e.g. `<base>/character`.
    pub fn endpoint(&self, category: Category) -> String {
        format!("{}/{}", self.base_url, category.singular())
    }

    pub fn entity_url(&self, category: Category, id: &str) -> String {
        format!("{}/{id}", self.endpoint(category))
    }

    /// Listing endpoint filtered to `ids`, joined in set order.
    pub fn batch_url(&self, category: Category, ids: &BTreeSet<String>) -> String {
        let joined = ids.iter().map(String::as_str).collect::<Vec<_>>().join(",");
        format!("{}?ids={joined}", self.endpoint(category))
    }

    /// Builds the configuration from a key lookup so callers can supply the
    /// process environment or a fixed map.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let base_url = lookup("API_BASE_URL").unwrap_or_else(|| DEFAULT_API_URL.to_string());
        let timeout = match lookup("REQUEST_TIMEOUT_SECS") {
            Some(raw) if !raw.trim().is_empty() => {
                let secs = raw
                    .trim()
                    .parse::<u64>()
                    .map_err(|_| ConfigError::InvalidTimeout(raw.clone()))?;
                Some(Duration::from_secs(secs))
            }
            _ => None,
        };

        Ok(Self::new(base_url)?.with_timeout(timeout))
    }
}

/// Initializes the API configuration from `.env` and the process environment.
pub fn init_api_config() -> Result<ApiConfig, ConfigError> {
    // Load environment variables from .env file
    dotenv().ok();

    ApiConfig::from_lookup(|key| env::var(key).ok())
}

/// Gets the file the interactive UI writes its logs to
pub fn get_log_file() -> PathBuf {
    env::var("LOG_FILE").map_or_else(|_| PathBuf::from(DEFAULT_LOG_FILE), PathBuf::from)
}

pub fn debug_enabled() -> bool {
    env::var("DEBUG").is_ok_and(|value| !value.is_empty() && value != "0")
}
