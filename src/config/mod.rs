// src/config/mod.rs
// Environment-driven configuration, validated once at startup.

use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("GEMINI_API_KEY is not set; the server cannot reach the generation API")]
    MissingApiKey,

    #[error("invalid value for {key}: '{value}'")]
    Invalid { key: String, value: String },
}

/// Process-wide configuration. Constructed once in `main` and passed
/// explicitly; immutable afterwards.
#[derive(Debug, Clone)]
pub struct Config {
    pub gemini_api_key: String,
    pub gemini_model: String,
    pub gemini_timeout_secs: u64,
    pub host: String,
    pub port: u16,
    pub log_level: String,
}

/// Parse an env var, trimming whitespace and stripping trailing comments.
/// Missing variables fall back to the default; unparseable values are a
/// startup error rather than a silent fallback.
fn env_var_or<T>(key: &str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
{
    match std::env::var(key) {
        Ok(val) => {
            let clean_val = val.split('#').next().unwrap_or("").trim();
            clean_val.parse::<T>().map_err(|_| ConfigError::Invalid {
                key: key.to_string(),
                value: val,
            })
        }
        Err(_) => Ok(default),
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let gemini_api_key = std::env::var("GEMINI_API_KEY")
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .ok_or(ConfigError::MissingApiKey)?;

        Ok(Self {
            gemini_api_key,
            gemini_model: env_var_or("GEMINI_MODEL", "gemini-1.5-flash".to_string())?,
            gemini_timeout_secs: env_var_or("GEMINI_TIMEOUT_SECS", 120)?,
            host: env_var_or("BACKEND_HOST", "0.0.0.0".to_string())?,
            port: env_var_or("PORT", 7000)?,
            log_level: env_var_or("LOG_LEVEL", "info".to_string())?,
        })
    }

    /// Server bind address.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
