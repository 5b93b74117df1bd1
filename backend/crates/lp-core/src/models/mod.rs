pub mod auth_result;
pub mod credentials;
pub mod identity_claim;
pub mod login_result;
pub mod user;
pub mod user_group;
pub mod user_role;
