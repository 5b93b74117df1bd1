use crate::{AuthError, Result as AuthErrorResult};

use lp_core::{AuthHeaders, Credentials};

use std::panic::Location;

use error_location::ErrorLocation;
use serde_json::Value;

pub const USERNAME_HEADER: &str = "USERNAME";
pub const PASSWORD_HEADER: &str = "PASSWORD";

/// Shape checks on login headers, run before any authority or store call.
pub struct CredentialValidator;

impl CredentialValidator {
    /// Checks, in order: both keys present, both values non-blank, username
    /// free of whitespace. Pure.
    #[track_caller]
    pub fn validate(headers: &AuthHeaders) -> AuthErrorResult<Credentials> {
        let username = Self::require(headers, USERNAME_HEADER)?;
        let password = Self::require(headers, PASSWORD_HEADER)?;

        let username = Self::non_blank_text(USERNAME_HEADER, username)?;
        let password = Self::non_blank_text(PASSWORD_HEADER, password)?;

        // Only whitespace is refused; any other character set is up to the authority
        if username.chars().any(char::is_whitespace) {
            return Err(AuthError::IllegalUsernameFormat {
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(Credentials::new(username, password))
    }

    #[track_caller]
    fn require<'a>(headers: &'a AuthHeaders, field: &'static str) -> AuthErrorResult<&'a Value> {
        headers.get(field).ok_or_else(|| AuthError::MissingField {
            field,
            location: ErrorLocation::from(Location::caller()),
        })
    }

    #[track_caller]
    fn non_blank_text(field: &'static str, value: &Value) -> AuthErrorResult<String> {
        match Self::as_text(value) {
            Some(text) if !text.trim().is_empty() => Ok(text),
            _ => Err(AuthError::EmptyOrNullValue {
                field,
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }

    /// Strings as-is, null as absent, anything else as its JSON text.
    fn as_text(value: &Value) -> Option<String> {
        match value {
            Value::Null => None,
            Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }
}
