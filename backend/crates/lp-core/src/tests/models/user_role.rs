use crate::UserRole;

use std::str::FromStr;

#[test]
fn test_user_role_as_str() {
    assert_eq!(UserRole::Guest.as_str(), "guest");
    assert_eq!(UserRole::User.as_str(), "user");
    assert_eq!(UserRole::Operator.as_str(), "operator");
}

#[test]
fn test_user_role_from_str() {
    assert_eq!(UserRole::from_str("user").unwrap(), UserRole::User);
    assert_eq!(UserRole::from_str("operator").unwrap(), UserRole::Operator);
    assert!(UserRole::from_str("admin").is_err());
}

#[test]
fn test_user_role_default_is_user() {
    assert_eq!(UserRole::default(), UserRole::User);
}
