//! Login entry point: validate → verify with the authority → provision →
//! build the identity claim. Every call is independent and every failure is
//! terminal for that call; retries belong to the host.

use crate::{
    AuthError, AuthorityVerdict, CredentialAuthority, CredentialValidator,
    Result as AuthErrorResult,
};

use lp_core::{AuthHeaders, AuthResult, IdentityClaim, LoginResult, User};
use lp_db::UserProvisioner;

use std::sync::Arc;

use log::{debug, error, info, trace, warn};

#[derive(Clone)]
pub struct AuthOrchestrator {
    authority: Arc<dyn CredentialAuthority>,
    provisioner: UserProvisioner,
}

impl AuthOrchestrator {
    pub fn new(authority: Arc<dyn CredentialAuthority>, provisioner: UserProvisioner) -> Self {
        Self {
            authority,
            provisioner,
        }
    }

    /// Never errors: every failure is folded into the returned outcome.
    pub async fn authenticate(&self, headers: &AuthHeaders) -> AuthResult {
        match self.try_authenticate(headers).await {
            Ok(user) => {
                info!("Login succeeded for '{}' (id={})", user.username, user.id);
                AuthResult::success(IdentityClaim::for_user(&user))
            }
            Err(e) => {
                let outcome = e.login_result();
                match outcome {
                    LoginResult::Failed => error!("Login failed [{}]: {}", e.error_code(), e),
                    _ => warn!("Login refused [{}]: {}", e.error_code(), e),
                }
                AuthResult::failure(outcome)
            }
        }
    }

    /// Extension point for the host (auditing and the like). No logic here.
    pub fn post_authenticate(&self, result: &AuthResult) {
        trace!("post_authenticate: outcome={}", result.outcome);
    }

    async fn try_authenticate(&self, headers: &AuthHeaders) -> AuthErrorResult<User> {
        let credentials = CredentialValidator::validate(headers)?;

        match self
            .authority
            .verify(&credentials.username, &credentials.password)
            .await?
        {
            AuthorityVerdict::Accepted(profile) => {
                debug!(
                    "Authority accepted '{}' (profile: {:?})",
                    credentials.username, profile
                );
            }
            AuthorityVerdict::Rejected => return Err(AuthError::rejected()),
        }

        let user = self
            .provisioner
            .get_or_create_user(&credentials.username)
            .await?;

        Ok(user)
    }
}
