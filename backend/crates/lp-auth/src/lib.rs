pub mod auth_orchestrator;
pub mod credential_authority;
pub mod credential_validator;
pub mod error;
pub mod http_credential_authority;

pub use auth_orchestrator::AuthOrchestrator;
pub use credential_authority::{AuthorityProfile, AuthorityVerdict, CredentialAuthority};
pub use credential_validator::{CredentialValidator, PASSWORD_HEADER, USERNAME_HEADER};
pub use error::{AuthError, Result};
pub use http_credential_authority::HttpCredentialAuthority;

#[cfg(test)]
mod tests;
