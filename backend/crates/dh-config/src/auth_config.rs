use crate::{
    ConfigError, ConfigErrorResult, MAX_PASSWORD_ITERATIONS, MIN_JWT_SECRET_LENGTH,
    MIN_PASSWORD_ITERATIONS,
};

use std::fmt;

use serde::Deserialize;

/// Credential settings. Both values are required; there are no defaults
/// because a missing secret or iteration count must stop the server at
/// startup rather than surface later as a crypto failure.
#[derive(Clone, Default, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    /// HS256 session-signing secret
    pub jwt_secret: Option<String>,
    /// PBKDF2 iteration count used for newly derived password blobs
    pub password_iterations: Option<u32>,
}

impl AuthConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        let secret = self
            .jwt_secret
            .as_deref()
            .ok_or_else(|| ConfigError::missing("auth.jwt_secret", "DH_AUTH_JWT_SECRET"))?;

        if secret.len() < MIN_JWT_SECRET_LENGTH {
            return Err(ConfigError::invalid(
                "auth.jwt_secret",
                format!("must be at least {} characters", MIN_JWT_SECRET_LENGTH),
            ));
        }

        let iterations = self.password_iterations.ok_or_else(|| {
            ConfigError::missing("auth.password_iterations", "DH_AUTH_PASSWORD_ITERATIONS")
        })?;

        if !(MIN_PASSWORD_ITERATIONS..=MAX_PASSWORD_ITERATIONS).contains(&iterations) {
            return Err(ConfigError::invalid(
                "auth.password_iterations",
                format!(
                    "must be {}-{}, got {}",
                    MIN_PASSWORD_ITERATIONS, MAX_PASSWORD_ITERATIONS, iterations
                ),
            ));
        }

        Ok(())
    }

    /// Secret bytes; only meaningful after `validate()`
    pub fn jwt_secret_bytes(&self) -> &[u8] {
        self.jwt_secret.as_deref().unwrap_or_default().as_bytes()
    }

    /// Iteration count; only meaningful after `validate()`
    pub fn iterations(&self) -> u32 {
        self.password_iterations.unwrap_or(MIN_PASSWORD_ITERATIONS)
    }
}

impl fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthConfig")
            .field("jwt_secret", &self.jwt_secret.as_ref().map(|_| "<redacted>"))
            .field("password_iterations", &self.password_iterations)
            .finish()
    }
}
