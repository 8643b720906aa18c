use std::fmt;

use serde::Deserialize;

#[derive(Deserialize)]
pub struct AuthenticateRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

impl fmt::Debug for AuthenticateRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthenticateRequest")
            .field("email", &self.email)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}
