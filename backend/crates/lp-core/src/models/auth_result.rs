use crate::{IdentityClaim, LoginResult};

use serde::{Deserialize, Serialize};

/// Outcome of `authenticate`; `identity` is present only on success
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthResult {
    pub outcome: LoginResult,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identity: Option<IdentityClaim>,
}

impl AuthResult {
    pub fn success(identity: IdentityClaim) -> Self {
        Self {
            outcome: LoginResult::Success,
            identity: Some(identity),
        }
    }

    /// A non-success outcome. Passing `Success` here yields `Failed`, since a
    /// successful result without an identity is meaningless.
    pub fn failure(outcome: LoginResult) -> Self {
        let outcome = match outcome {
            LoginResult::Success => LoginResult::Failed,
            other => other,
        };

        Self {
            outcome,
            identity: None,
        }
    }

    pub fn is_success(&self) -> bool {
        self.outcome.is_success()
    }
}
