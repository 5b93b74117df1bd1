#![allow(dead_code)]

use lp_auth::{
    AuthError, AuthorityProfile, AuthorityVerdict, CredentialAuthority, PASSWORD_HEADER,
    Result as AuthErrorResult, USERNAME_HEADER,
};
use lp_core::AuthHeaders;
use lp_db::ConnectionManager;

use std::panic::Location;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use error_location::ErrorLocation;
use serde_json::{Value, json};
use sqlx::SqlitePool;

#[derive(Debug, Clone, Copy)]
pub enum StubVerdict {
    Accept,
    Reject,
    Unavailable,
}

/// In-process authority returning a fixed verdict and counting calls
pub struct StubAuthority {
    verdict: StubVerdict,
    calls: AtomicUsize,
}

impl StubAuthority {
    pub fn new(verdict: StubVerdict) -> Self {
        Self {
            verdict,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CredentialAuthority for StubAuthority {
    async fn verify(&self, _username: &str, _password: &str) -> AuthErrorResult<AuthorityVerdict> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        match self.verdict {
            StubVerdict::Accept => Ok(AuthorityVerdict::Accepted(AuthorityProfile::default())),
            StubVerdict::Reject => Ok(AuthorityVerdict::Rejected),
            StubVerdict::Unavailable => Err(AuthError::AuthorityResponse {
                status: 503,
                message: "stub authority unavailable".to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

/// Creates an in-memory SQLite pool with migrations run
pub async fn create_test_pool() -> SqlitePool {
    ConnectionManager::connect_in_memory()
        .await
        .expect("Failed to create test pool")
}

pub fn login_headers(username: &str, password: &str) -> AuthHeaders {
    headers(&[
        (USERNAME_HEADER, json!(username)),
        (PASSWORD_HEADER, json!(password)),
    ])
}

pub fn headers(pairs: &[(&str, Value)]) -> AuthHeaders {
    pairs
        .iter()
        .map(|(key, value)| (key.to_string(), value.clone()))
        .collect()
}
