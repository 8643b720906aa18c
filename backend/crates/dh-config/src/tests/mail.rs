use crate::Config;
use crate::tests::{EnvGuard, set_valid_auth_env, setup_config_dir};

use googletest::assert_that;
use googletest::prelude::{anything, contains_substring, err, ok};
use serial_test::serial;

// =========================================================================
// Validation Tests - Mail
// =========================================================================

#[test]
#[serial]
fn given_smtp_host_without_from_address_when_validate_then_error() {
    // Given
    let (_temp, _guards) = setup_config_dir();
    let _auth = set_valid_auth_env();
    let _host = EnvGuard::set("DH_MAIL_SMTP_HOST", "smtp.example.com");

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, err(anything()));
    let err_msg = format!("{}", result.unwrap_err());
    assert_that!(err_msg, contains_substring("from_address"));
}

#[test]
#[serial]
fn given_username_without_password_when_validate_then_error() {
    // Given
    let (_temp, _guards) = setup_config_dir();
    let _auth = set_valid_auth_env();
    let _user = EnvGuard::set("DH_MAIL_SMTP_USERNAME", "mailer");

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, err(anything()));
}

#[test]
#[serial]
fn given_complete_smtp_settings_when_validate_then_ok() {
    // Given
    let (_temp, _guards) = setup_config_dir();
    let _auth = set_valid_auth_env();
    let _host = EnvGuard::set("DH_MAIL_SMTP_HOST", "smtp.example.com");
    let _from = EnvGuard::set("DH_MAIL_FROM_ADDRESS", "darkhorse@example.com");
    let _user = EnvGuard::set("DH_MAIL_SMTP_USERNAME", "mailer");
    let _pass = EnvGuard::set("DH_MAIL_SMTP_PASSWORD", "hunter2");

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, ok(anything()));
    assert!(config.mail.is_smtp_enabled());
    assert!(!format!("{:?}", config.mail).contains("hunter2"));
}

#[test]
#[serial]
fn given_public_url_without_scheme_when_validate_then_error() {
    // Given
    let (_temp, _guards) = setup_config_dir();
    let _auth = set_valid_auth_env();
    let _url = EnvGuard::set("DH_MAIL_PUBLIC_URL", "darkhorse.example.com");

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, err(anything()));
}
