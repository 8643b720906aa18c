//! Outbound confirmation email

use dh_config::MailConfig;

use std::panic::Location;
use std::sync::Arc;

use async_trait::async_trait;
use error_location::ErrorLocation;
use lettre::message::Mailbox;
use lettre::message::header::ContentType;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use log::info;
use thiserror::Error;

pub const CONFIRMATION_SUBJECT: &str = "Confirm your Dark Horse Music account.";
const SENDER_NAME: &str = "Dark Horse Music";

#[derive(Error, Debug)]
pub enum MailError {
    #[error("Invalid mail address '{address}': {source} {location}")]
    Address {
        address: String,
        #[source]
        source: lettre::address::AddressError,
        location: ErrorLocation,
    },

    #[error("Failed to build message: {source} {location}")]
    Message {
        #[source]
        source: lettre::error::Error,
        location: ErrorLocation,
    },

    #[error("SMTP transport error: {source} {location}")]
    Transport {
        #[source]
        source: lettre::transport::smtp::Error,
        location: ErrorLocation,
    },

    #[error("Mail configuration error: {message} {location}")]
    Config {
        message: String,
        location: ErrorLocation,
    },
}

impl MailError {
    #[track_caller]
    fn config(message: impl Into<String>) -> Self {
        MailError::Config {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    fn transport(source: lettre::transport::smtp::Error) -> Self {
        MailError::Transport {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type MailResult<T> = std::result::Result<T, MailError>;

/// Everything needed to tell a new account how to confirm its email
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmationMessage {
    pub to: String,
    pub full_name: String,
    pub link: String,
}

impl ConfirmationMessage {
    pub fn html_body(&self) -> String {
        let greeting = if self.full_name.trim().is_empty() {
            "Hello!".to_string()
        } else {
            format!("Hello, {}!", escape_html(&self.full_name))
        };

        format!(
            "<html><body>\
             <p>{greeting}</p>\
             <p>You have just signed up for an account with Dark Horse Music, so we need you \
             to confirm your email address by clicking <a href=\"{link}\">this link</a>.</p>\
             <p>If you have not created an account we apologise; please simply ignore this \
             email.</p>\
             </body></html>",
            greeting = greeting,
            link = escape_html(&self.link),
        )
    }
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[async_trait]
pub trait ConfirmationMailer: Send + Sync {
    async fn send_confirmation(&self, message: &ConfirmationMessage) -> MailResult<()>;
}

/// Sends through an SMTP relay with STARTTLS
pub struct SmtpMailer {
    from: Mailbox,
    transport: AsyncSmtpTransport<Tokio1Executor>,
}

impl SmtpMailer {
    pub fn from_config(config: &MailConfig) -> MailResult<Self> {
        let host = config
            .smtp_host
            .as_deref()
            .ok_or_else(|| MailError::config("mail.smtp_host is not set"))?;
        let from_address = config
            .from_address
            .as_deref()
            .ok_or_else(|| MailError::config("mail.from_address is not set"))?;

        let from = parse_mailbox(&format!("{} <{}>", SENDER_NAME, from_address))?;

        let mut builder = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(host)
            .map_err(MailError::transport)?
            .port(config.smtp_port);
        if let (Some(username), Some(password)) = (&config.smtp_username, &config.smtp_password) {
            builder = builder.credentials(Credentials::new(username.clone(), password.clone()));
        }

        Ok(Self {
            from,
            transport: builder.build(),
        })
    }
}

#[async_trait]
impl ConfirmationMailer for SmtpMailer {
    async fn send_confirmation(&self, message: &ConfirmationMessage) -> MailResult<()> {
        let email = Message::builder()
            .from(self.from.clone())
            .to(parse_mailbox(&message.to)?)
            .subject(CONFIRMATION_SUBJECT)
            .header(ContentType::TEXT_HTML)
            .body(message.html_body())
            .map_err(|e| MailError::Message {
                source: e,
                location: ErrorLocation::from(Location::caller()),
            })?;

        self.transport
            .send(email)
            .await
            .map_err(MailError::transport)?;

        info!("Confirmation email sent to {}", message.to);
        Ok(())
    }
}

/// Used when no SMTP relay is configured. Records that a mail was due
/// without the link, which carries the confirmation token.
pub struct LogMailer;

#[async_trait]
impl ConfirmationMailer for LogMailer {
    async fn send_confirmation(&self, message: &ConfirmationMessage) -> MailResult<()> {
        info!(
            "SMTP disabled; confirmation email for {} not sent",
            message.to
        );
        Ok(())
    }
}

/// SMTP when a relay is configured, otherwise the logging stand-in
pub fn build_mailer(config: &MailConfig) -> MailResult<Arc<dyn ConfirmationMailer>> {
    if config.is_smtp_enabled() {
        Ok(Arc::new(SmtpMailer::from_config(config)?))
    } else {
        Ok(Arc::new(LogMailer))
    }
}

#[track_caller]
fn parse_mailbox(address: &str) -> MailResult<Mailbox> {
    address.parse().map_err(|e| MailError::Address {
        address: address.to_string(),
        source: e,
        location: ErrorLocation::from(Location::caller()),
    })
}
