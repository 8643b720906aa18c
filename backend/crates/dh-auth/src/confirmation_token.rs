use crate::compare::constant_time_eq;
use crate::{AuthError, Result as AuthErrorResult};

use dh_core::{Identity, UserStore};

use log::{info, warn};
use rand::TryRngCore;
use rand::rngs::OsRng;

/// Random bytes per confirmation token (hex-encoded to twice this length)
pub const CONFIRMATION_TOKEN_BYTES: usize = 32;

/// Issues the single-use tokens mailed to new accounts and redeems the
/// verification links built from them.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConfirmationTokenIssuer;

impl ConfirmationTokenIssuer {
    pub fn new() -> Self {
        Self
    }

    /// Fresh 64-character lowercase hex token from the OS random source.
    pub fn issue(&self) -> AuthErrorResult<String> {
        let mut bytes = [0u8; CONFIRMATION_TOKEN_BYTES];
        OsRng
            .try_fill_bytes(&mut bytes)
            .map_err(|e| AuthError::credential(format!("secure random source failed: {e}")))?;
        Ok(hex::encode(bytes))
    }

    /// Hex form of an email used as the second path segment of a link.
    /// A carrier only; it provides no secrecy.
    pub fn encode_email(email: &str) -> String {
        hex::encode(email.as_bytes())
    }

    #[track_caller]
    pub fn decode_email(email_token: &str) -> AuthErrorResult<String> {
        let bytes = hex::decode(email_token)
            .map_err(|_| AuthError::invalid_confirmation("email segment is not hex"))?;
        String::from_utf8(bytes)
            .map_err(|_| AuthError::invalid_confirmation("email segment is not utf-8"))
    }

    /// `/verify/<token>/<hex email>` relative to `base_url`.
    pub fn verification_url(base_url: &str, token: &str, email: &str) -> String {
        format!(
            "{}/verify/{}/{}",
            base_url.trim_end_matches('/'),
            token,
            Self::encode_email(email)
        )
    }

    /// Redeem a confirmation link. On success the identity is marked
    /// confirmed and written back to the store.
    ///
    /// Every link problem maps to `InvalidConfirmation`; store failures
    /// propagate as `Store` errors.
    pub async fn verify<S>(
        &self,
        store: &S,
        token: &str,
        email_token: &str,
    ) -> AuthErrorResult<Identity>
    where
        S: UserStore + ?Sized,
    {
        let email = Self::decode_email(email_token).inspect_err(|e| {
            warn!("Confirmation link rejected: {}", e);
        })?;

        let Some(mut identity) = store.find_unconfirmed_by_email(&email).await? else {
            warn!("Confirmation link rejected: no pending identity for {}", email);
            return Err(AuthError::invalid_confirmation(
                "no unconfirmed identity for email",
            ));
        };

        let matches = identity
            .email_confirmation_token
            .as_deref()
            .is_some_and(|stored| constant_time_eq(stored.as_bytes(), token.as_bytes()));
        if !matches {
            warn!("Confirmation link rejected: token mismatch for {}", email);
            return Err(AuthError::invalid_confirmation("token does not match"));
        }

        identity.is_email_confirmed = true;
        store.update(&identity).await?;

        info!("Email confirmed for {}", identity.email);
        Ok(identity)
    }
}
