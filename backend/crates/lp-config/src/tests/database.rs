use crate::Config;
use crate::tests::{EnvGuard, setup_config_dir};

use googletest::assert_that;
use googletest::prelude::{anything, contains_substring, err, ok};
use serial_test::serial;

// =========================================================================
// Validation Tests - Database
// =========================================================================

#[test]
#[serial]
fn given_absolute_database_path_when_validate_then_error() {
    // Given
    let (_temp, _guard) = setup_config_dir();
    let _path = EnvGuard::set("LP_DATABASE_PATH", "/var/lib/users.db");

    // When
    let result = Config::load().unwrap().validate();

    // Then
    assert_that!(result, err(anything()));
}

#[test]
#[serial]
fn given_parent_traversal_in_database_path_when_validate_then_error() {
    let (_temp, _guard) = setup_config_dir();
    let _path = EnvGuard::set("LP_DATABASE_PATH", "../users.db");

    let result = Config::load().unwrap().validate();

    assert_that!(result, err(anything()));
}

#[test]
#[serial]
fn given_zero_max_connections_when_validate_then_error_mentions_field() {
    let (_temp, _guard) = setup_config_dir();
    let _max = EnvGuard::set("LP_DATABASE_MAX_CONNECTIONS", "0");

    let result = Config::load().unwrap().validate();

    assert_that!(result, err(anything()));
    let err_msg = format!("{}", result.unwrap_err());
    assert_that!(err_msg, contains_substring("max_connections"));
}

#[test]
#[serial]
fn given_busy_timeout_above_max_when_validate_then_error() {
    let (_temp, _guard) = setup_config_dir();
    let _busy = EnvGuard::set("LP_DATABASE_BUSY_TIMEOUT_SECS", "301");

    let result = Config::load().unwrap().validate();

    assert_that!(result, err(anything()));
}

#[test]
#[serial]
fn given_busy_timeout_at_max_when_validate_then_ok() {
    let (_temp, _guard) = setup_config_dir();
    let _busy = EnvGuard::set("LP_DATABASE_BUSY_TIMEOUT_SECS", "300");

    let result = Config::load().unwrap().validate();

    assert_that!(result, ok(anything()));
}
