use crate::{AuthResult, IdentityClaim, LoginResult, User, UserRole};

use googletest::prelude::*;
use serde_json::json;

#[test]
fn given_user_when_success_built_then_identity_carries_user_role() {
    let user = User {
        id: 7,
        username: "carol".to_string(),
        group_id: 5,
    };

    let result = AuthResult::success(IdentityClaim::for_user(&user));

    assert_that!(result.outcome, eq(LoginResult::Success));
    let identity = result.identity.unwrap();
    assert_that!(identity.username, eq("carol"));
    assert_that!(identity.user_id, eq(7));
    assert_that!(identity.role, eq(UserRole::User));
}

#[test]
fn given_success_outcome_when_failure_built_then_downgraded_to_failed() {
    let result = AuthResult::failure(LoginResult::Success);

    assert_that!(result.outcome, eq(LoginResult::Failed));
    assert_that!(result.identity, none());
}

#[test]
fn given_failure_when_serialized_then_identity_omitted() {
    let result = AuthResult::failure(LoginResult::InvalidParameters);

    let value = serde_json::to_value(&result).unwrap();

    assert_that!(value, eq(&json!({ "outcome": "invalid_parameters" })));
}

#[test]
fn given_success_when_serialized_then_snake_case_fields() {
    let result = AuthResult::success(IdentityClaim::new("dave", 3, UserRole::User));

    let value = serde_json::to_value(&result).unwrap();

    assert_that!(
        value,
        eq(&json!({
            "outcome": "success",
            "identity": { "username": "dave", "user_id": 3, "role": "user" }
        }))
    );
}
