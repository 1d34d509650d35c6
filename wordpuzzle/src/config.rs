use std::net::SocketAddr;
use std::path::PathBuf;

use thiserror::Error;

pub const DICTIONARY_PATH_VAR: &str = "DICTIONARY_PATH";
pub const BIND_ADDR_VAR: &str = "BIND_ADDR";

pub const DEFAULT_DICTIONARY_PATH: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/resources/dictionary.txt");
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8000";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),
    #[error("{var} is not a valid socket address: '{value}'")]
    BadAddress { var: &'static str, value: String },
}

/// Server settings, read from the environment or a `.env` file.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub dictionary_path: PathBuf,
    pub bind_addr: SocketAddr,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Config::from_lookup(|key| dotenv::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup(entity::DATABASE_URL_VAR)
            .filter(|url| !url.trim().is_empty())
            .ok_or(ConfigError::Missing(entity::DATABASE_URL_VAR))?;
        let dictionary_path = lookup(DICTIONARY_PATH_VAR)
            .unwrap_or_else(|| DEFAULT_DICTIONARY_PATH.to_owned())
            .into();
        let bind_addr = lookup(BIND_ADDR_VAR).unwrap_or_else(|| DEFAULT_BIND_ADDR.to_owned());
        let bind_addr: SocketAddr = bind_addr.parse().map_err(|_| ConfigError::BadAddress {
            var: BIND_ADDR_VAR,
            value: bind_addr.clone(),
        })?;

        Ok(Config {
            database_url,
            dictionary_path,
            bind_addr,
        })
    }
}
