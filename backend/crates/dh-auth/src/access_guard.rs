use crate::{AuthError, ForbiddenReason, Result as AuthErrorResult, SessionTokenService};

use dh_core::{Identity, UserStore};

use std::sync::Arc;

use http::HeaderMap;
use http::header::AUTHORIZATION;
use log::{debug, warn};

/// Token from an `Authorization: <scheme> <token>` header.
///
/// The value must split on single spaces into exactly two non-empty parts.
/// The scheme itself is not checked.
pub fn extract_token(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(AUTHORIZATION)?.to_str().ok()?;

    let mut parts = value.split(' ');
    let (scheme, token) = (parts.next()?, parts.next()?);
    if parts.next().is_some() || scheme.is_empty() || token.is_empty() {
        return None;
    }

    Some(token)
}

/// Per-request authorization: bearer token, then identity lookup, then the
/// optional admin check. Every refusal surfaces as `AuthError::Forbidden`.
#[derive(Clone)]
pub struct AccessGuard {
    sessions: Arc<SessionTokenService>,
    store: Arc<dyn UserStore>,
}

impl AccessGuard {
    pub fn new(sessions: Arc<SessionTokenService>, store: Arc<dyn UserStore>) -> Self {
        Self { sessions, store }
    }

    pub async fn check_authenticated(
        &self,
        headers: &HeaderMap,
        admin_only: bool,
    ) -> AuthErrorResult<Identity> {
        let Some(token) = extract_token(headers) else {
            return Err(refuse(ForbiddenReason::MissingToken));
        };

        let email = match self.sessions.decode(token) {
            Ok(email) => email,
            Err(e) => {
                debug!("Session token rejected: {}", e);
                return Err(refuse(ForbiddenReason::InvalidToken));
            }
        };

        let Some(identity) = self.store.find_by_email(&email).await? else {
            return Err(refuse(ForbiddenReason::UnknownIdentity));
        };

        if admin_only && !identity.is_admin() {
            return Err(refuse(ForbiddenReason::NotAdmin));
        }

        Ok(identity)
    }
}

#[track_caller]
fn refuse(reason: ForbiddenReason) -> AuthError {
    warn!("Access refused: {}", reason);
    AuthError::forbidden(reason)
}
