mod auth_config;
mod config;
mod database_config;
mod error;
mod log_level;
mod logging_config;
mod mail_config;
mod server_config;

#[cfg(test)]
mod tests;

pub use auth_config::AuthConfig;
pub use config::Config;
pub use database_config::DatabaseConfig;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use mail_config::MailConfig;
pub use server_config::ServerConfig;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 5000;
const MIN_PORT: u16 = 1024;
const DEFAULT_DATABASE_FILENAME: &str = "darkhorse.db";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";
const DEFAULT_LOG_COLORED: bool = true;
const DEFAULT_SMTP_PORT: u16 = 587;
const DEFAULT_PUBLIC_URL: &str = "http://localhost:5000";

/// Minimum length of the session-signing secret
pub const MIN_JWT_SECRET_LENGTH: usize = 32;
/// Bounds accepted for the PBKDF2 iteration count
pub const MIN_PASSWORD_ITERATIONS: u32 = 1;
pub const MAX_PASSWORD_ITERATIONS: u32 = 10_000_000;
