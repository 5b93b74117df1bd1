use crate::{
    AuthError, AuthorityProfile, AuthorityVerdict, CredentialAuthority,
    Result as AuthErrorResult,
};

use std::panic::Location;
use std::time::Duration;

use async_trait::async_trait;
use error_location::ErrorLocation;
use log::debug;
use reqwest::{Client as ReqwestClient, StatusCode};
use serde::{Deserialize, Serialize};

/// Credential authority reached over HTTP.
///
/// POSTs `{"username", "password"}` as JSON to the verify URL and expects
/// `{"accepted": bool, "first_name"?, "last_name"?}` back. 401 and 403 count
/// as a rejection; any other non-2xx status is an error.
pub struct HttpCredentialAuthority {
    verify_url: String,
    client: ReqwestClient,
}

#[derive(Serialize)]
struct VerifyRequest<'a> {
    username: &'a str,
    password: &'a str,
}

#[derive(Deserialize)]
struct VerifyResponse {
    accepted: bool,
    #[serde(default)]
    first_name: Option<String>,
    #[serde(default)]
    last_name: Option<String>,
}

impl HttpCredentialAuthority {
    pub fn new(verify_url: impl Into<String>, timeout: Duration) -> AuthErrorResult<Self> {
        let client = ReqwestClient::builder().timeout(timeout).build()?;

        Ok(Self {
            verify_url: verify_url.into(),
            client,
        })
    }

    pub fn verify_url(&self) -> &str {
        &self.verify_url
    }
}

#[async_trait]
impl CredentialAuthority for HttpCredentialAuthority {
    async fn verify(&self, username: &str, password: &str) -> AuthErrorResult<AuthorityVerdict> {
        let response = self
            .client
            .post(&self.verify_url)
            .json(&VerifyRequest { username, password })
            .send()
            .await?;

        let status = response.status();
        debug!("Authority answered {} for '{}'", status, username);

        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            return Ok(AuthorityVerdict::Rejected);
        }

        if !status.is_success() {
            return Err(AuthError::AuthorityResponse {
                status: status.as_u16(),
                message: format!("unexpected status from {}", self.verify_url),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let body: VerifyResponse =
            response
                .json()
                .await
                .map_err(|e| AuthError::AuthorityResponse {
                    status: status.as_u16(),
                    message: format!("malformed verify response: {}", e),
                    location: ErrorLocation::from(Location::caller()),
                })?;

        if body.accepted {
            Ok(AuthorityVerdict::Accepted(AuthorityProfile {
                first_name: body.first_name,
                last_name: body.last_name,
            }))
        } else {
            Ok(AuthorityVerdict::Rejected)
        }
    }
}
