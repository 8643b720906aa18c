pub mod access_guard;
pub mod claims;
pub mod compare;
pub mod confirmation_token;
pub mod error;
pub mod login;
pub mod password_blob;
pub mod password_codec;
pub mod pending_identity;
pub mod session_token_service;

pub use access_guard::{AccessGuard, extract_token};
pub use claims::SessionClaims;
pub use confirmation_token::ConfirmationTokenIssuer;
pub use error::{AuthError, ForbiddenReason, Result};
pub use login::{LoginOutcome, login};
pub use password_blob::PasswordBlob;
pub use password_codec::PasswordCodec;
pub use pending_identity::{PendingIdentity, prepare_for_persistence};
pub use session_token_service::SessionTokenService;

/// Message returned for every authentication/authorization failure
pub const FORBIDDEN_MESSAGE: &str = "Failed attempt to access restricted area.";
/// Message returned for every rejected confirmation link
pub const INVALID_URL_MESSAGE: &str = "The URL provided is invalid.";
/// Scheme prefixed to session tokens handed out at login
pub const SESSION_TOKEN_SCHEME: &str = "JWT";

#[cfg(test)]
mod tests;
