use crate::{ConfirmationMailer, ConfirmationMessage};

use dh_auth::{AccessGuard, ConfirmationTokenIssuer, PasswordCodec, SessionTokenService};
use dh_core::{Identity, UserStore};
use dh_db::{LocationRepository, UserRepository};

use std::sync::Arc;

use log::error;
use sqlx::SqlitePool;

/// Shared handles for every request handler
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub users: Arc<dyn UserStore>,
    pub locations: Arc<LocationRepository>,
    pub codec: PasswordCodec,
    pub issuer: ConfirmationTokenIssuer,
    pub sessions: Arc<SessionTokenService>,
    pub guard: AccessGuard,
    pub mailer: Arc<dyn ConfirmationMailer>,
    /// Base URL confirmation links point at, without the `/api` prefix
    pub public_url: String,
}

impl AppState {
    pub fn new(
        pool: SqlitePool,
        codec: PasswordCodec,
        sessions: SessionTokenService,
        mailer: Arc<dyn ConfirmationMailer>,
        public_url: impl Into<String>,
    ) -> Self {
        let users: Arc<dyn UserStore> = Arc::new(UserRepository::new(pool.clone()));
        let sessions = Arc::new(sessions);
        let guard = AccessGuard::new(sessions.clone(), users.clone());

        Self {
            locations: Arc::new(LocationRepository::new(pool.clone())),
            pool,
            users,
            codec,
            issuer: ConfirmationTokenIssuer::new(),
            sessions,
            guard,
            mailer,
            public_url: public_url.into(),
        }
    }

    /// Confirmation mail for `identity`, or None once it has no token
    pub fn confirmation_message(&self, identity: &Identity) -> Option<ConfirmationMessage> {
        let token = identity.email_confirmation_token.as_deref()?;
        let api_base = format!("{}/api", self.public_url.trim_end_matches('/'));

        Some(ConfirmationMessage {
            to: identity.email.clone(),
            full_name: identity.full_name.clone(),
            link: ConfirmationTokenIssuer::verification_url(&api_base, token, &identity.email),
        })
    }

    /// Send in the background. Failures are logged and never reach the caller.
    pub fn spawn_confirmation_mail(&self, message: ConfirmationMessage) {
        let mailer = self.mailer.clone();
        tokio::spawn(async move {
            if let Err(e) = mailer.send_confirmation(&message).await {
                error!("Failed to send confirmation email to {}: {}", message.to, e);
            }
        });
    }
}
