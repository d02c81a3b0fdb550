use std::env;

use thiserror::Error;
use url::Url;

/// Environment variable holding the inference endpoint URL.
pub const INFERENCE_URL_VAR: &str = "FASTAPI_URL";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Environment variable {0} is required")]
    Missing(&'static str),

    #[error("Environment variable {name} is not a valid URL: {source}")]
    InvalidUrl {
        name: &'static str,
        #[source]
        source: url::ParseError,
    },
}

/// Process-wide configuration, read once at cold start.
#[derive(Debug, Clone)]
pub struct RelayConfig {
    pub inference_url: Url,
}

impl RelayConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build the configuration from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let raw = lookup(INFERENCE_URL_VAR)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .ok_or(ConfigError::Missing(INFERENCE_URL_VAR))?;

        let inference_url = Url::parse(&raw).map_err(|source| ConfigError::InvalidUrl {
            name: INFERENCE_URL_VAR,
            source,
        })?;

        Ok(Self { inference_url })
    }
}
