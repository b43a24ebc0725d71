//! Central module for application-wide configuration settings.
//!
//! This module loads the server bind address and the document store selection
//! (in-process memory or MongoDB, with its connection URI) from the process
//! environment, optionally seeded from a `.env` file. Unset variables fall
//! back to logged defaults; malformed ones are startup errors.

use std::env;
use std::fmt::Display;
use std::path::Path;
use std::str::FromStr;

use thiserror::Error;
use tracing::info;

/// Log filter used when `RUST_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "sakhi_backend=info,sakhi_adapters=info,tower_http=info";

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: &str = "5000";
const DEFAULT_STORE: &str = "memory";
const DEFAULT_MONGODB_DATABASE: &str = "sakhi";

/// Env file read at startup, relative to the working directory.
pub const ENV_FILE: &str = ".env";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid {key} value '{value}': {reason}")]
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },

    #[error("{0} must be set when {1}")]
    Missing(&'static str, &'static str),

    #[error("Cannot read env file {path}: {reason}")]
    EnvFile { path: String, reason: String },
}

/// Loads variables from an env file into the process environment.
///
/// Variables already set in the environment keep their values. Returns
/// `Ok(false)` when the file does not exist.
pub fn load_env_file(path: impl AsRef<Path>) -> Result<bool, ConfigError> {
    let path = path.as_ref();
    match dotenvy::from_path(path) {
        Ok(()) => Ok(true),
        Err(err) if err.not_found() => Ok(false),
        Err(err) => Err(ConfigError::EnvFile {
            path: path.display().to_string(),
            reason: err.to_string(),
        }),
    }
}

/// Which document store backs the API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreConfig {
    Memory,
    Mongo { uri: String, database: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub store: StoreConfig,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = load(&lookup, "SAKHI_HOST", DEFAULT_HOST);
        let port = parse(&lookup, "SAKHI_PORT", DEFAULT_PORT)?;

        let store = match load(&lookup, "SAKHI_STORE", DEFAULT_STORE)
            .to_ascii_lowercase()
            .as_str()
        {
            "memory" => StoreConfig::Memory,
            "mongodb" | "mongo" => StoreConfig::Mongo {
                uri: lookup("MONGODB_URI")
                    .filter(|uri| !uri.trim().is_empty())
                    .ok_or(ConfigError::Missing("MONGODB_URI", "SAKHI_STORE=mongodb"))?,
                database: load(&lookup, "MONGODB_DATABASE", DEFAULT_MONGODB_DATABASE),
            },
            other => {
                return Err(ConfigError::Invalid {
                    key: "SAKHI_STORE",
                    value: other.to_string(),
                    reason: "expected 'memory' or 'mongodb'".to_string(),
                })
            }
        };

        Ok(Self { host, port, store })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn load<F>(lookup: &F, key: &str, default: &str) -> String
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key).unwrap_or_else(|| {
        info!("{key} not set, using default: {default}");
        default.to_string()
    })
}

fn parse<F, T>(lookup: &F, key: &'static str, default: &str) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: Display,
{
    let value = load(lookup, key, default);
    value.trim().parse().map_err(|e: T::Err| ConfigError::Invalid {
        key,
        value,
        reason: e.to_string(),
    })
}
