use crate::Config;
use crate::tests::{EnvGuard, setup_config_dir};

use googletest::assert_that;
use googletest::prelude::{anything, contains_substring, err, ok};
use serial_test::serial;

// =========================================================================
// Validation Tests - Authority
// =========================================================================

#[test]
#[serial]
fn given_base_url_without_scheme_when_validate_then_error() {
    // Given
    let (_temp, _guard) = setup_config_dir();
    let _url = EnvGuard::set("LP_AUTHORITY_BASE_URL", "auth.example.com");

    // When
    let result = Config::load().unwrap().validate();

    // Then
    assert_that!(result, err(anything()));
    let err_msg = format!("{}", result.unwrap_err());
    assert_that!(err_msg, contains_substring("base_url"));
}

#[test]
#[serial]
fn given_verify_path_without_slash_when_validate_then_error() {
    let (_temp, _guard) = setup_config_dir();
    let _path = EnvGuard::set("LP_AUTHORITY_VERIFY_PATH", "verify");

    let result = Config::load().unwrap().validate();

    assert_that!(result, err(anything()));
}

#[test]
#[serial]
fn given_zero_timeout_when_validate_then_error() {
    let (_temp, _guard) = setup_config_dir();
    let _timeout = EnvGuard::set("LP_AUTHORITY_TIMEOUT_SECS", "0");

    let result = Config::load().unwrap().validate();

    assert_that!(result, err(anything()));
}

#[test]
#[serial]
fn given_https_base_url_when_validate_then_ok() {
    let (_temp, _guard) = setup_config_dir();
    let _url = EnvGuard::set("LP_AUTHORITY_BASE_URL", "https://auth.example.com");

    let result = Config::load().unwrap().validate();

    assert_that!(result, ok(anything()));
}
