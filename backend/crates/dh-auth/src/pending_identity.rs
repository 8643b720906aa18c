use crate::{AuthError, ConfirmationTokenIssuer, PasswordCodec, Result as AuthErrorResult};

use dh_core::Identity;

use std::fmt;

use log::debug;

/// An identity about to be written, plus the plaintext password if one was
/// set since it was loaded.
pub struct PendingIdentity {
    identity: Identity,
    new_password: Option<String>,
    is_new: bool,
}

impl PendingIdentity {
    /// A signup that has never been stored
    pub fn new(
        email: impl Into<String>,
        password: impl Into<String>,
        full_name: impl Into<String>,
    ) -> Self {
        Self {
            identity: Identity::new(email.into(), full_name.into()),
            new_password: Some(password.into()),
            is_new: true,
        }
    }

    /// A stored identity being updated. Its password is left as is unless
    /// `set_password` is called.
    pub fn existing(identity: Identity) -> Self {
        Self {
            identity,
            new_password: None,
            is_new: false,
        }
    }

    pub fn set_password(&mut self, plaintext: impl Into<String>) {
        self.new_password = Some(plaintext.into());
    }

    pub fn identity(&self) -> &Identity {
        &self.identity
    }

    pub fn identity_mut(&mut self) -> &mut Identity {
        &mut self.identity
    }

    pub fn is_new(&self) -> bool {
        self.is_new
    }

    pub fn password_changed(&self) -> bool {
        self.new_password.is_some()
    }
}

impl fmt::Debug for PendingIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PendingIdentity")
            .field("email", &self.identity.email)
            .field("is_new", &self.is_new)
            .field("password_changed", &self.password_changed())
            .finish()
    }
}

/// Pre-persistence step: a changed password is replaced by its derived
/// record, and a brand new identity gets a confirmation token.
///
/// Runs before every insert or update so plaintext never reaches the store.
pub async fn prepare_for_persistence(
    pending: PendingIdentity,
    codec: &PasswordCodec,
    issuer: &ConfirmationTokenIssuer,
) -> AuthErrorResult<Identity> {
    let PendingIdentity {
        mut identity,
        new_password,
        is_new,
    } = pending;

    if is_new && new_password.as_deref().is_none_or(str::is_empty) {
        return Err(AuthError::credential(format!(
            "new identity {} has no password",
            identity.email
        )));
    }

    if let Some(plaintext) = new_password {
        identity.password = codec.derive(&plaintext).await?;
        debug!("Password record refreshed for {}", identity.email);
    }

    if is_new {
        identity.email_confirmation_token = Some(issuer.issue()?);
        identity.is_email_confirmed = false;
    }

    Ok(identity)
}
