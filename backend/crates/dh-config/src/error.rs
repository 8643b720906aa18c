use std::panic::Location;
use std::path::PathBuf;
use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error as ThisError;

#[derive(ThisError, Debug)]
pub enum ConfigError {
    /// A required setting has neither a value nor a default
    #[error("{key} is required (set {env}) {location}")]
    Missing {
        key: &'static str,
        env: &'static str,
        location: ErrorLocation,
    },

    #[error("{key} {message} {location}")]
    Invalid {
        key: &'static str,
        message: String,
        location: ErrorLocation,
    },

    #[error("Config environment error: {message} {location}")]
    Environment {
        message: String,
        location: ErrorLocation,
    },

    #[error("IO error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("TOML parse error in {path}: {source}")]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

impl ConfigError {
    #[track_caller]
    pub fn missing(key: &'static str, env: &'static str) -> Self {
        ConfigError::Missing {
            key,
            env,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn invalid(key: &'static str, message: impl Into<String>) -> Self {
        ConfigError::Invalid {
            key,
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn environment(message: impl Into<String>) -> Self {
        ConfigError::Environment {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Dotted setting name the error is about, when there is one
    pub fn key(&self) -> Option<&'static str> {
        match self {
            ConfigError::Missing { key, .. } | ConfigError::Invalid { key, .. } => Some(key),
            _ => None,
        }
    }
}

pub type ConfigErrorResult<T> = StdResult<T, ConfigError>;
