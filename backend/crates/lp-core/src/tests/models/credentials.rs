use crate::{Credentials, User};

#[test]
fn test_credentials_debug_redacts_password() {
    let credentials = Credentials::new("alice", "hunter2");

    let rendered = format!("{:?}", credentials);

    assert!(rendered.contains("alice"));
    assert!(!rendered.contains("hunter2"));
}

#[test]
fn test_username_key_is_lowercase() {
    assert_eq!(User::username_key("Alice"), "alice");
    assert_eq!(User::username_key("ÉMILE"), "émile");
}
