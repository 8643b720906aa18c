use crate::{ConfigError, ConfigErrorResult, DEFAULT_PUBLIC_URL, DEFAULT_SMTP_PORT};

use std::fmt;

use serde::Deserialize;

/// Outbound confirmation email. With no `smtp_host` the server only logs
/// that a confirmation was due.
#[derive(Clone, Deserialize)]
#[serde(default)]
pub struct MailConfig {
    pub smtp_host: Option<String>,
    pub smtp_port: u16,
    pub smtp_username: Option<String>,
    pub smtp_password: Option<String>,
    pub from_address: Option<String>,
    /// Base URL used to build `/api/verify/...` links
    pub public_url: String,
}

impl Default for MailConfig {
    fn default() -> Self {
        Self {
            smtp_host: None,
            smtp_port: DEFAULT_SMTP_PORT,
            smtp_username: None,
            smtp_password: None,
            from_address: None,
            public_url: String::from(DEFAULT_PUBLIC_URL),
        }
    }
}

impl MailConfig {
    pub fn is_smtp_enabled(&self) -> bool {
        self.smtp_host.is_some()
    }

    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.is_smtp_enabled() && self.from_address.is_none() {
            return Err(ConfigError::invalid(
                "mail.from_address",
                "is required when mail.smtp_host is set",
            ));
        }

        if self.smtp_username.is_some() != self.smtp_password.is_some() {
            return Err(ConfigError::invalid(
                "mail.smtp_username",
                "and mail.smtp_password must be set together",
            ));
        }

        if !(self.public_url.starts_with("http://") || self.public_url.starts_with("https://")) {
            return Err(ConfigError::invalid(
                "mail.public_url",
                format!("must start with http:// or https://, got {}", self.public_url),
            ));
        }

        Ok(())
    }
}

impl fmt::Debug for MailConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MailConfig")
            .field("smtp_host", &self.smtp_host)
            .field("smtp_port", &self.smtp_port)
            .field("smtp_username", &self.smtp_username)
            .field("smtp_password", &self.smtp_password.as_ref().map(|_| "<redacted>"))
            .field("from_address", &self.from_address)
            .field("public_url", &self.public_url)
            .finish()
    }
}
