use serde::{Deserialize, Serialize};

/// Local user record, created on the first successful login of an identity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    /// Username as presented on first login (original casing)
    pub username: String,
    pub group_id: i64,
}

impl User {
    /// Case-insensitive uniqueness key for a username.
    pub fn username_key(username: &str) -> String {
        username.to_lowercase()
    }
}
