pub mod error;
pub mod models;

pub use error::{CoreError, Result};
pub use models::auth_result::AuthResult;
pub use models::credentials::{AuthHeaders, Credentials};
pub use models::identity_claim::IdentityClaim;
pub use models::login_result::LoginResult;
pub use models::user::User;
pub use models::user_group::UserGroup;
pub use models::user_role::UserRole;

#[cfg(test)]
mod tests;
