use crate::LoginResult;

use std::str::FromStr;

#[test]
fn test_login_result_round_trips_through_str() {
    for outcome in [
        LoginResult::Success,
        LoginResult::Failed,
        LoginResult::InvalidCredentials,
        LoginResult::InvalidParameters,
    ] {
        assert_eq!(LoginResult::from_str(outcome.as_str()).unwrap(), outcome);
    }
}

#[test]
fn test_login_result_rejects_unknown_value() {
    assert!(LoginResult::from_str("sucess").is_err());
}

#[test]
fn test_only_success_is_success() {
    assert!(LoginResult::Success.is_success());
    assert!(!LoginResult::Failed.is_success());
    assert!(!LoginResult::InvalidCredentials.is_success());
    assert!(!LoginResult::InvalidParameters.is_success());
}
