use crate::tests::headers;
use crate::{AuthError, CredentialValidator, PASSWORD_HEADER, USERNAME_HEADER};

use lp_core::LoginResult;

use proptest::prelude::*;
use serde_json::json;

// =========================================================================
// Property-Based Tests - Credential Validation
// =========================================================================

proptest! {
    #[test]
    fn given_missing_username_when_validated_then_invalid_parameters(password in ".*") {
        let input = headers(&[(PASSWORD_HEADER, json!(password))]);

        let err = CredentialValidator::validate(&input).unwrap_err();

        prop_assert_eq!(err.login_result(), LoginResult::InvalidParameters);
    }

    #[test]
    fn given_missing_password_when_validated_then_invalid_parameters(username in ".*") {
        let input = headers(&[(USERNAME_HEADER, json!(username))]);

        let err = CredentialValidator::validate(&input).unwrap_err();

        prop_assert_eq!(err.login_result(), LoginResult::InvalidParameters);
    }

    #[test]
    fn given_blank_password_when_validated_then_invalid_credentials(
        username in "[a-zA-Z0-9_.@-]{1,32}",
        password in r"\s{0,8}",
    ) {
        let input = headers(&[
            (USERNAME_HEADER, json!(username)),
            (PASSWORD_HEADER, json!(password)),
        ]);

        let err = CredentialValidator::validate(&input).unwrap_err();

        prop_assert_eq!(err.login_result(), LoginResult::InvalidCredentials);
    }

    #[test]
    fn given_username_with_whitespace_when_validated_then_invalid_parameters(
        head in "[a-z]{1,10}",
        gap in r"[ \t\n\r\u{a0}\u{2003}]{1,3}",
        tail in "[a-z]{0,10}",
        password in "[ -~]{1,20}",
    ) {
        prop_assume!(!password.trim().is_empty());
        let input = headers(&[
            (USERNAME_HEADER, json!(format!("{}{}{}", head, gap, tail))),
            (PASSWORD_HEADER, json!(password)),
        ]);

        let err = CredentialValidator::validate(&input).unwrap_err();

        prop_assert!(
            matches!(err, AuthError::IllegalUsernameFormat { .. }),
            "unexpected error: {:?}",
            err
        );
        prop_assert_eq!(err.login_result(), LoginResult::InvalidParameters);
    }

    #[test]
    fn given_non_whitespace_username_when_validated_then_accepted_unchanged(
        username in r"[^\s]{1,40}",
        password in "[ -~]{1,20}",
    ) {
        prop_assume!(!password.trim().is_empty());
        let input = headers(&[
            (USERNAME_HEADER, json!(username.clone())),
            (PASSWORD_HEADER, json!(password.clone())),
        ]);

        let credentials = CredentialValidator::validate(&input).unwrap();

        prop_assert_eq!(credentials.username, username);
        prop_assert_eq!(credentials.password, password);
    }
}
