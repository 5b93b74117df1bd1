use crate::DbError;

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProvisionError {
    /// No user group exists, so a new user cannot be created
    #[error("No user group available to provision '{username}' {location}")]
    NoGroupAvailable {
        username: String,
        location: ErrorLocation,
    },

    /// The transaction could not complete (store failure, lock timeout,
    /// or a concurrent login inserted the same username first)
    #[error("Provisioning '{username}' failed: {source} {location}")]
    ProvisionFailed {
        username: String,
        #[source]
        source: DbError,
        location: ErrorLocation,
    },
}

impl ProvisionError {
    #[track_caller]
    pub fn no_group(username: &str) -> Self {
        Self::NoGroupAvailable {
            username: username.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn failed(username: &str, source: impl Into<DbError>) -> Self {
        Self::ProvisionFailed {
            username: username.to_string(),
            source: source.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Lost a race against another login creating the same user.
    pub fn is_conflict(&self) -> bool {
        match self {
            Self::ProvisionFailed { source, .. } => source.is_unique_violation(),
            Self::NoGroupAvailable { .. } => false,
        }
    }
}

pub type Result<T> = std::result::Result<T, ProvisionError>;
