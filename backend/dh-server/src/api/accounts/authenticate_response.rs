use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthenticateResponse {
    pub success: bool,
    /// `"JWT <token>"`, ready to use as an Authorization header value
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub msg: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email_not_verified: Option<bool>,
}

impl AuthenticateResponse {
    pub fn token(token: String) -> Self {
        Self {
            success: true,
            token: Some(token),
            msg: None,
            email_not_verified: None,
        }
    }

    pub fn failure(msg: impl Into<String>) -> Self {
        Self {
            success: false,
            token: None,
            msg: Some(msg.into()),
            email_not_verified: None,
        }
    }

    pub fn email_not_verified(msg: impl Into<String>) -> Self {
        Self {
            email_not_verified: Some(true),
            ..Self::failure(msg)
        }
    }
}
