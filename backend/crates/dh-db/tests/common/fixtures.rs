use dh_core::{Coord, Identity, Location};

/// Unconfirmed identity holding a placeholder password record and token
pub fn create_test_identity(email: &str) -> Identity {
    let mut identity = Identity::new(email.to_string(), "Test User".to_string());
    identity.password = "AAAAgAAAJxA=".to_string();
    identity.email_confirmation_token = Some("ab".repeat(32));
    identity
}

pub fn create_test_location(name: &str) -> Location {
    Location::new(
        name.to_string(),
        vec![Coord::new(51.5, -0.12), Coord::new(51.6, -0.11), Coord::new(51.55, -0.2)],
    )
}
