use std::panic::Location;
use std::path::PathBuf;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum HostError {
    #[error("Config error: {0}")]
    Config(#[from] lp_config::ConfigError),

    #[error("Database error: {0}")]
    Database(#[from] lp_db::DbError),

    #[error("Authority error: {0}")]
    Authority(#[from] lp_auth::AuthError),

    #[error("authority.base_url is not set; logins need a credential authority {location}")]
    AuthorityNotConfigured { location: ErrorLocation },

    #[error("Failed to prepare {path}: {source} {location}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
        location: ErrorLocation,
    },

    #[error("Logger error: {message} {location}")]
    Logger {
        message: String,
        location: ErrorLocation,
    },

    #[error("Failed to serialize output: {0}")]
    Output(#[from] serde_json::Error),
}

impl HostError {
    #[track_caller]
    pub fn authority_not_configured() -> Self {
        Self::AuthorityNotConfigured {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn logger(message: impl Into<String>) -> Self {
        Self::Logger {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, HostError>;
