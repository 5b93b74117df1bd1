use lp_core::LoginResult;
use lp_db::ProvisionError;

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Missing required field '{field}' {location}")]
    MissingField {
        field: &'static str,
        location: ErrorLocation,
    },

    #[error("Field '{field}' is null, empty or whitespace {location}")]
    EmptyOrNullValue {
        field: &'static str,
        location: ErrorLocation,
    },

    #[error("Username contains whitespace {location}")]
    IllegalUsernameFormat { location: ErrorLocation },

    #[error("Credentials rejected by authority {location}")]
    CredentialsRejected { location: ErrorLocation },

    #[error("Credential authority unreachable: {message} {location}")]
    AuthorityUnavailable {
        message: String,
        #[source]
        source: reqwest::Error,
        location: ErrorLocation,
    },

    #[error("Unexpected credential authority response (status {status}): {message} {location}")]
    AuthorityResponse {
        status: u16,
        message: String,
        location: ErrorLocation,
    },

    #[error("User provisioning failed: {source} {location}")]
    Provision {
        #[source]
        source: ProvisionError,
        location: ErrorLocation,
    },
}

impl AuthError {
    #[track_caller]
    pub fn rejected() -> Self {
        Self::CredentialsRejected {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Outcome reported to the host for this error. Detail stays in the logs.
    pub fn login_result(&self) -> LoginResult {
        match self {
            Self::MissingField { .. } | Self::IllegalUsernameFormat { .. } => {
                LoginResult::InvalidParameters
            }
            Self::EmptyOrNullValue { .. } | Self::CredentialsRejected { .. } => {
                LoginResult::InvalidCredentials
            }
            Self::AuthorityUnavailable { .. }
            | Self::AuthorityResponse { .. }
            | Self::Provision { .. } => LoginResult::Failed,
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            Self::MissingField { .. } => "MISSING_FIELD",
            Self::EmptyOrNullValue { .. } => "EMPTY_OR_NULL_VALUE",
            Self::IllegalUsernameFormat { .. } => "ILLEGAL_USERNAME_FORMAT",
            Self::CredentialsRejected { .. } => "CREDENTIALS_REJECTED",
            Self::AuthorityUnavailable { .. } => "AUTHORITY_UNAVAILABLE",
            Self::AuthorityResponse { .. } => "AUTHORITY_RESPONSE",
            Self::Provision {
                source: ProvisionError::NoGroupAvailable { .. },
                ..
            } => "NO_GROUP_AVAILABLE",
            Self::Provision { .. } => "PROVISION_FAILED",
        }
    }
}

impl From<reqwest::Error> for AuthError {
    #[track_caller]
    fn from(source: reqwest::Error) -> Self {
        Self::AuthorityUnavailable {
            message: source.to_string(),
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<ProvisionError> for AuthError {
    #[track_caller]
    fn from(source: ProvisionError) -> Self {
        Self::Provision {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, AuthError>;
