use crate::{PasswordCodec, Result as AuthErrorResult, SessionTokenService};

use dh_core::{Identity, UserStore};

use log::{info, warn};

/// Result of an email/password login attempt
#[derive(Debug)]
pub enum LoginOutcome {
    Authenticated { identity: Identity, token: String },
    /// Password matched but the email was never confirmed
    EmailNotConfirmed,
    /// Unknown email or wrong password; deliberately not distinguished
    InvalidCredentials,
}

/// Check credentials and mint a session token for a confirmed identity.
pub async fn login<S>(
    store: &S,
    codec: &PasswordCodec,
    sessions: &SessionTokenService,
    email: &str,
    password: &str,
) -> AuthErrorResult<LoginOutcome>
where
    S: UserStore + ?Sized,
{
    let Some(identity) = store.find_by_email(email).await? else {
        codec.verify_missing(password).await?;
        warn!("Login failed: unknown email {}", email);
        return Ok(LoginOutcome::InvalidCredentials);
    };

    if !codec.verify(password, &identity.password).await? {
        warn!("Login failed: wrong password for {}", email);
        return Ok(LoginOutcome::InvalidCredentials);
    }

    if !identity.is_email_confirmed {
        info!("Login refused: {} has not confirmed their email", email);
        return Ok(LoginOutcome::EmailNotConfirmed);
    }

    let token = sessions.issue(&identity)?;
    info!("Login succeeded for {}", email);
    Ok(LoginOutcome::Authenticated { identity, token })
}
