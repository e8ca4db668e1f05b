// src/config.rs
use std::fmt;

use thiserror::Error;

pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_ENV: &str = "production";
pub const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com/v1";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("OPENAI_API_KEY must be set")]
    MissingApiKey,

    #[error("PORT is not a valid port number: {0}")]
    InvalidPort(String),
}

/// Process configuration, resolved once at startup.
///
/// | Variable          | Default                     |
/// |-------------------|-----------------------------|
/// | `OPENAI_API_KEY`  | required                    |
/// | `PORT`            | `5000`                      |
/// | `FLASK_ENV`       | `production`                |
/// | `OPENAI_BASE_URL` | `https://api.openai.com/v1` |
#[derive(Clone)]
pub struct ServerConfig {
    pub port: u16,
    pub env: String,
    pub debug: bool,
    pub openai_api_key: String,
    pub openai_base_url: String,
}

// Keeps the key out of logs.
impl fmt::Debug for ServerConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServerConfig")
            .field("port", &self.port)
            .field("env", &self.env)
            .field("debug", &self.debug)
            .field("openai_base_url", &self.openai_base_url)
            .finish()
    }
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the config from any key lookup, so tests can feed a map
    /// instead of touching the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let openai_api_key = lookup("OPENAI_API_KEY")
            .filter(|k| !k.is_empty())
            .ok_or(ConfigError::MissingApiKey)?;

        let port = match lookup("PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort(raw.clone()))?,
            None => DEFAULT_PORT,
        };

        let env = lookup("FLASK_ENV").unwrap_or_else(|| DEFAULT_ENV.to_string());
        let debug = env == "development";

        let openai_base_url = lookup("OPENAI_BASE_URL")
            .filter(|u| !u.is_empty())
            .unwrap_or_else(|| DEFAULT_OPENAI_BASE_URL.to_string());

        Ok(Self {
            port,
            env,
            debug,
            openai_api_key,
            openai_base_url,
        })
    }

    /// Default log filter when `RUST_LOG` is unset.
    pub fn default_log_filter(&self) -> &'static str {
        if self.debug { "debug" } else { "info" }
    }
}
