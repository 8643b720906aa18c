use crate::ApiError;

use dh_auth::{AuthError, FORBIDDEN_MESSAGE, ForbiddenReason};
use dh_core::StoreError;

use axum::{http::StatusCode, response::IntoResponse};
use googletest::prelude::*;

#[test]
fn given_forbidden_auth_error_when_converted_then_403_with_public_message() {
    // Given
    let auth_error = AuthError::forbidden(ForbiddenReason::NotAdmin);

    // When
    let api_error = ApiError::from(auth_error);

    // Then
    assert_that!(api_error.status_code(), eq(StatusCode::FORBIDDEN));
    assert_that!(api_error.public_message(), eq(FORBIDDEN_MESSAGE));
    assert_that!(api_error.to_string(), contains_substring("admin privileges"));
}

#[test]
fn given_store_error_when_converted_then_500_without_details() {
    // Given
    let api_error = ApiError::from(StoreError::backend("disk on fire"));

    // When
    let response = api_error.into_response();

    // Then
    assert_that!(response.status(), eq(StatusCode::INTERNAL_SERVER_ERROR));
}

#[test]
fn given_non_forbidden_auth_error_when_converted_then_internal() {
    let api_error = ApiError::from(AuthError::credential("rng failed"));

    assert!(matches!(api_error, ApiError::Internal { .. }));
    assert_that!(api_error.public_message(), not(contains_substring("rng")));
}

#[tokio::test]
async fn given_missing_token_refusal_when_rendered_then_403_with_shared_body() {
    // Given
    let api_error = ApiError::from(AuthError::forbidden(ForbiddenReason::MissingToken));

    // When
    let response = api_error.into_response();

    // Then
    assert_that!(response.status(), eq(StatusCode::FORBIDDEN));
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_that!(
        json,
        eq(&serde_json::json!({ "success": false, "msg": FORBIDDEN_MESSAGE }))
    );
}
