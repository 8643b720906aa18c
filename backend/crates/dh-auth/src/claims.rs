use crate::{AuthError, Result as AuthErrorResult};

use std::panic::Location;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Payload of a session token. No expiry: a token stays valid until the
/// signing secret is rotated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionClaims {
    /// Email of the identity the token was issued to
    pub email: String,
    /// Issued at timestamp (Unix)
    pub iat: i64,
}

impl SessionClaims {
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            iat: chrono::Utc::now().timestamp(),
        }
    }

    /// Validate claims after signature verification
    #[track_caller]
    pub fn validate(&self) -> AuthErrorResult<()> {
        if self.email.trim().is_empty() {
            return Err(AuthError::InvalidClaim {
                claim: "email".to_string(),
                message: "email cannot be empty".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(())
    }
}
