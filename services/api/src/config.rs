//! services/api/src/config.rs
//!
//! Runtime configuration for the API service.
//!
//! Everything is read from environment variables at startup, with a `.env`
//! file honored during local development.

use std::net::SocketAddr;
use tracing::Level;

/// A configuration loading failure.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for the environment variable {0}: {1}")]
    InvalidValue(String, String),
}

/// Holds all configuration loaded from the environment at startup.
#[derive(Clone, Debug)]
pub struct Config {
    pub bind_address: SocketAddr,
    pub log_level: Level,
    /// The fixed password shared by everyone logging in as a mentor.
    pub mentor_access_code: String,
    /// The fixed password shared by everyone logging in as a student.
    pub student_access_code: String,
    /// Artificial latency applied to login, in milliseconds. Set to 0 to
    /// disable.
    pub login_delay_ms: u64,
    pub allowed_origin: String,
}

/// Reads an environment variable, falling back to `default` when unset.
fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

impl Config {
    /// Loads configuration from environment variables. A `.env` file in the
    /// current directory is honored outside of `cfg(test)`.
    pub fn from_env() -> Result<Self, ConfigError> {
        if !cfg!(test) {
            dotenvy::dotenv().ok();
        }

        // --- Server Settings ---
        let bind_address_str = env_or("BIND_ADDRESS", "0.0.0.0:3000");
        let bind_address = bind_address_str
            .parse::<SocketAddr>()
            .map_err(|e| ConfigError::InvalidValue("BIND_ADDRESS".to_string(), e.to_string()))?;

        let log_level_str = env_or("RUST_LOG", "INFO");
        let log_level = log_level_str.parse::<Level>().map_err(|_| {
            ConfigError::InvalidValue(
                "RUST_LOG".to_string(),
                format!("'{}' is not a valid log level", log_level_str),
            )
        })?;

        let allowed_origin = env_or("ALLOWED_ORIGIN", "http://localhost:3000");

        // --- Login Settings ---
        let mentor_access_code = env_or("MENTOR_ACCESS_CODE", "university");
        let student_access_code = env_or("STUDENT_ACCESS_CODE", "vignan");

        let login_delay_str = env_or("LOGIN_DELAY_MS", "500");
        let login_delay_ms = login_delay_str
            .parse::<u64>()
            .map_err(|e| ConfigError::InvalidValue("LOGIN_DELAY_MS".to_string(), e.to_string()))?;

        Ok(Self {
            bind_address,
            log_level,
            mentor_access_code,
            student_access_code,
            login_delay_ms,
            allowed_origin,
        })
    }
}
