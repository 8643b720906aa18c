use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A user account as persisted by the store.
///
/// `password` always holds the encoded password blob once the record has been
/// through `prepare_for_persistence`; plaintext never lives on this type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Identity {
    pub id: Uuid,
    pub email: String,
    #[serde(skip_serializing)]
    pub password: String,
    pub full_name: String,
    pub is_admin: bool,
    pub is_email_confirmed: bool,
    #[serde(skip_serializing, default)]
    pub email_confirmation_token: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Identity {
    pub fn new(email: String, full_name: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            email,
            password: String::new(),
            full_name,
            is_admin: false,
            is_email_confirmed: false,
            email_confirmation_token: None,
            created_at: Utc::now(),
        }
    }

    pub fn is_admin(&self) -> bool {
        self.is_admin
    }

    /// Awaiting confirmation and still holding a token to confirm with
    pub fn is_pending_confirmation(&self) -> bool {
        !self.is_email_confirmed && self.email_confirmation_token.is_some()
    }
}
