use serde::{Deserialize, Serialize};

/// `{ success, msg }` envelope shared by most routes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub msg: Option<String>,
}

impl MessageResponse {
    /// Bare `{ "success": true }`
    pub fn ok() -> Self {
        Self {
            success: true,
            msg: None,
        }
    }

    pub fn success(msg: impl Into<String>) -> Self {
        Self {
            success: true,
            msg: Some(msg.into()),
        }
    }

    pub fn failure(msg: impl Into<String>) -> Self {
        Self {
            success: false,
            msg: Some(msg.into()),
        }
    }
}
