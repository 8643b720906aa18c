use crate::{AuthenticateResponse, MessageResponse};

use googletest::prelude::*;
use serde_json::json;

#[test]
fn given_bare_success_when_serialized_then_msg_omitted() {
    let value = serde_json::to_value(MessageResponse::ok()).unwrap();

    assert_that!(value, eq(&json!({ "success": true })));
}

#[test]
fn given_failure_when_serialized_then_msg_present() {
    let value = serde_json::to_value(MessageResponse::failure("Invalid request.")).unwrap();

    assert_that!(
        value,
        eq(&json!({ "success": false, "msg": "Invalid request." }))
    );
}

#[test]
fn given_unverified_login_when_serialized_then_flag_in_camel_case() {
    let value =
        serde_json::to_value(AuthenticateResponse::email_not_verified("verify first")).unwrap();

    assert_that!(
        value,
        eq(&json!({ "success": false, "msg": "verify first", "emailNotVerified": true }))
    );
}
