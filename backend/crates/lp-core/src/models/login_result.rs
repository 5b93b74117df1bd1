use crate::{CoreError, Result as CoreErrorResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Terminal outcome of a single authentication request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoginResult {
    /// Credentials accepted and a local user is available
    Success,
    /// Internal failure (store, authority, provisioning); not the caller's fault
    Failed,
    /// Credentials were blank or rejected by the authority
    InvalidCredentials,
    /// Required fields missing or malformed
    InvalidParameters,
}

impl LoginResult {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Failed => "failed",
            Self::InvalidCredentials => "invalid_credentials",
            Self::InvalidParameters => "invalid_parameters",
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success)
    }
}

impl FromStr for LoginResult {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreErrorResult<Self> {
        match s {
            "success" => Ok(Self::Success),
            "failed" => Ok(Self::Failed),
            "invalid_credentials" => Ok(Self::InvalidCredentials),
            "invalid_parameters" => Ok(Self::InvalidParameters),
            _ => Err(CoreError::InvalidLoginResult {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

impl std::fmt::Display for LoginResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
