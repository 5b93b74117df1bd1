use crate::{User, UserRole};

use serde::{Deserialize, Serialize};

/// Minimal authenticated-user payload handed back to the host after login
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentityClaim {
    pub username: String,
    pub user_id: i64,
    pub role: UserRole,
}

impl IdentityClaim {
    pub fn new(username: impl Into<String>, user_id: i64, role: UserRole) -> Self {
        Self {
            username: username.into(),
            user_id,
            role,
        }
    }

    /// Claim for a provisioned local user. Logins always carry the `User` role.
    pub fn for_user(user: &User) -> Self {
        Self::new(user.username.clone(), user.id, UserRole::User)
    }
}
