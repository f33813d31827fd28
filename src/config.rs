// src/config.rs
use log::{info, warn};
use std::env;
use std::fmt;

pub const DEFAULT_PORT: u16 = 3030;
pub const DEFAULT_PRICE_API_BASE_URL: &str = "https://www.elprisetjustnu.se";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub port: u16,
    pub price_api_base_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigError {
    pub message: String,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ConfigError {}

impl Config {
    /// Reads `PORT` and `PRICE_API_BASE_URL` from the environment.
    ///
    /// Callers load `.env` first so `RUST_LOG` from it reaches the logger too.
    pub fn from_env() -> Result<Config, ConfigError> {
        Config::from_values(
            env::var("PORT").ok().as_deref(),
            env::var("PRICE_API_BASE_URL").ok().as_deref(),
        )
    }

    pub fn from_values(port: Option<&str>, base_url: Option<&str>) -> Result<Config, ConfigError> {
        let port = match port {
            Some(raw) => raw.trim().parse::<u16>().map_err(|_| ConfigError {
                message: format!("PORT must be a number, got '{}'", raw),
            })?,
            None => {
                warn!("$PORT not set, defaulting to {}", DEFAULT_PORT);
                DEFAULT_PORT
            }
        };

        let price_api_base_url = match base_url.map(str::trim).filter(|url| !url.is_empty()) {
            Some(url) => url.trim_end_matches('/').to_string(),
            None => DEFAULT_PRICE_API_BASE_URL.to_string(),
        };
        info!("Using PORT: {}, pricing API: {}", port, price_api_base_url);

        Ok(Config { port, price_api_base_url })
    }
}
