use crate::Result as AuthErrorResult;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Profile fields an authority may return with an acceptance. Not consumed
/// by provisioning yet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorityProfile {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthorityVerdict {
    Accepted(AuthorityProfile),
    Rejected,
}

/// External service that decides whether a username/password pair is valid.
///
/// `Err` means the authority could not give an answer (network, timeout,
/// malformed reply), which is distinct from a `Rejected` verdict.
#[async_trait]
pub trait CredentialAuthority: Send + Sync {
    async fn verify(&self, username: &str, password: &str) -> AuthErrorResult<AuthorityVerdict>;
}
