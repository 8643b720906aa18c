use serde::Deserialize;

/// POST /api/send-verify-email body
#[derive(Debug, Deserialize)]
pub struct EmailRequest {
    pub email: Option<String>,
}
