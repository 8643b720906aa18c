use crate::tests::MemoryUserStore;
use crate::{AuthError, ConfirmationTokenIssuer};

use dh_core::Identity;

use googletest::prelude::*;

fn pending_identity(email: &str, token: &str) -> Identity {
    let mut identity = Identity::new(email.to_string(), "Pending User".to_string());
    identity.email_confirmation_token = Some(token.to_string());
    identity
}

#[test]
fn given_issuer_when_token_issued_then_64_lowercase_hex_chars() {
    // When
    let token = ConfirmationTokenIssuer::new().issue().unwrap();

    // Then
    assert_that!(token.len(), eq(64));
    assert!(
        token
            .chars()
            .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c))
    );
}

#[test]
fn given_issuer_when_two_tokens_issued_then_they_differ() {
    let issuer = ConfirmationTokenIssuer::new();

    assert_ne!(issuer.issue().unwrap(), issuer.issue().unwrap());
}

#[test]
fn given_email_when_hex_encoded_then_decodes_back() {
    // Given
    let email = "ana@example.com";

    // When
    let encoded = ConfirmationTokenIssuer::encode_email(email);

    // Then
    assert_that!(encoded, eq("616e61406578616d706c652e636f6d"));
    assert_that!(
        ConfirmationTokenIssuer::decode_email(&encoded).unwrap(),
        eq(email)
    );
}

#[test]
fn given_base_url_with_trailing_slash_when_link_built_then_single_separator() {
    let url = ConfirmationTokenIssuer::verification_url("https://dh.test/", "abc", "a@b");

    assert_that!(url, eq("https://dh.test/verify/abc/614062"));
}

#[tokio::test]
async fn given_matching_link_when_verified_then_identity_confirmed_and_persisted() {
    // Given
    let token = "ab".repeat(32);
    let store = MemoryUserStore::with(vec![pending_identity("ana@example.com", &token)]);
    let email_token = ConfirmationTokenIssuer::encode_email("ana@example.com");

    // When
    let result = ConfirmationTokenIssuer::new()
        .verify(&store, &token, &email_token)
        .await;

    // Then
    let identity = result.unwrap();
    assert!(identity.is_email_confirmed);
    assert!(store.get("ana@example.com").unwrap().is_email_confirmed);
}

#[tokio::test]
async fn given_wrong_token_when_verified_then_invalid_and_not_confirmed() {
    // Given
    let store = MemoryUserStore::with(vec![pending_identity("ana@example.com", &"ab".repeat(32))]);
    let email_token = ConfirmationTokenIssuer::encode_email("ana@example.com");

    // When
    let result = ConfirmationTokenIssuer::new()
        .verify(&store, &"cd".repeat(32), &email_token)
        .await;

    // Then
    assert!(matches!(result, Err(AuthError::InvalidConfirmation { .. })));
    assert!(!store.get("ana@example.com").unwrap().is_email_confirmed);
}

#[tokio::test]
async fn given_already_confirmed_identity_when_verified_again_then_invalid() {
    // Given
    let token = "ab".repeat(32);
    let mut identity = pending_identity("ana@example.com", &token);
    identity.is_email_confirmed = true;
    let store = MemoryUserStore::with(vec![identity]);
    let email_token = ConfirmationTokenIssuer::encode_email("ana@example.com");

    // When
    let result = ConfirmationTokenIssuer::new()
        .verify(&store, &token, &email_token)
        .await;

    // Then
    assert!(matches!(result, Err(AuthError::InvalidConfirmation { .. })));
}

#[tokio::test]
async fn given_non_hex_email_segment_when_verified_then_invalid_without_lookup() {
    // Given
    let store = MemoryUserStore::default();

    // When
    let result = ConfirmationTokenIssuer::new()
        .verify(&store, "abc", "zz-not-hex")
        .await;

    // Then
    assert!(matches!(result, Err(AuthError::InvalidConfirmation { .. })));
    assert_that!(store.lookups(), eq(0));
}

#[tokio::test]
async fn given_identity_without_token_when_verified_then_invalid() {
    // Given
    let store = MemoryUserStore::with(vec![Identity::new(
        "ana@example.com".to_string(),
        "Ana".to_string(),
    )]);
    let email_token = ConfirmationTokenIssuer::encode_email("ana@example.com");

    // When
    let result = ConfirmationTokenIssuer::new()
        .verify(&store, "", &email_token)
        .await;

    // Then
    assert!(matches!(result, Err(AuthError::InvalidConfirmation { .. })));
}

#[tokio::test]
async fn given_failing_store_when_verified_then_store_error_propagates() {
    // Given
    let store = MemoryUserStore::default();
    store.fail_all();
    let email_token = ConfirmationTokenIssuer::encode_email("ana@example.com");

    // When
    let result = ConfirmationTokenIssuer::new()
        .verify(&store, "abc", &email_token)
        .await;

    // Then
    assert!(matches!(result, Err(AuthError::Store { .. })));
}
