use crate::Identity;

#[test]
fn test_identity_new_defaults() {
    let identity = Identity::new("ana@example.com".to_string(), "Ana Lima".to_string());

    assert_eq!(identity.email, "ana@example.com");
    assert_eq!(identity.full_name, "Ana Lima");
    assert!(!identity.is_admin());
    assert!(!identity.is_email_confirmed);
    assert!(identity.email_confirmation_token.is_none());
    assert!(identity.password.is_empty());
}

#[test]
fn test_identity_pending_confirmation() {
    let mut identity = Identity::new("ana@example.com".to_string(), "Ana Lima".to_string());
    assert!(!identity.is_pending_confirmation());

    identity.email_confirmation_token = Some("ab".repeat(32));
    assert!(identity.is_pending_confirmation());

    identity.is_email_confirmed = true;
    assert!(!identity.is_pending_confirmation());
}

#[test]
fn test_identity_serialization_hides_credentials() {
    let mut identity = Identity::new("ana@example.com".to_string(), "Ana Lima".to_string());
    identity.password = "c2VjcmV0LWJsb2I=".to_string();
    identity.email_confirmation_token = Some("ab".repeat(32));

    let json = serde_json::to_value(&identity).unwrap();

    assert_eq!(json["email"], "ana@example.com");
    assert_eq!(json["fullName"], "Ana Lima");
    assert!(json.get("password").is_none());
    assert!(json.get("emailConfirmationToken").is_none());
}
