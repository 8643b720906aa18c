use crate::{
    AuthConfig, ConfigError, ConfigErrorResult, DatabaseConfig, LoggingConfig, MailConfig,
    ServerConfig,
};

use std::path::{Path, PathBuf};

use log::info;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub auth: AuthConfig,
    pub logging: LoggingConfig,
    pub mail: MailConfig,
}

impl Config {
    /// Load config.
    ///
    /// Loading order:
    /// 1. Check for DH_CONFIG_DIR env var, else use ./.dh/
    /// 2. Auto-create config directory if it doesn't exist
    /// 3. Load config.toml if it exists, else use defaults
    /// 4. Apply DH_* environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_dir = Self::config_dir()?;

        if !config_dir.exists() {
            std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::Io {
                path: config_dir.clone(),
                source: e,
            })?;
        }

        let config_path = config_dir.join("config.toml");

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    fn load_toml(path: &Path) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Get the config directory.
    /// Priority: DH_CONFIG_DIR env var > ./.dh/ (relative to cwd)
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var("DH_CONFIG_DIR") {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::environment("cannot determine current working directory"))?;
        Ok(cwd.join(".dh"))
    }

    /// Validate all configuration.
    /// Call after load() so a missing secret or iteration count stops startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.server.validate()?;
        self.auth.validate()?;
        self.mail.validate()?;
        self.database.validate()?;

        Ok(())
    }

    /// Get absolute path to database file.
    pub fn database_path(&self) -> ConfigErrorResult<PathBuf> {
        Ok(self.database.resolve(&Self::config_dir()?))
    }

    /// Get bind address as string.
    pub fn bind_addr(&self) -> String {
        self.server.bind_addr()
    }

    /// Log configuration summary (NEVER logs secrets).
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!("  server: {}:{}", self.server.host, self.server.port);
        info!("  database: {}", self.database.path);
        info!(
            "  auth: HS256 session tokens (secret {}), pbkdf2 iterations={}",
            if self.auth.jwt_secret.is_some() {
                "set"
            } else {
                "missing"
            },
            self.auth
                .password_iterations
                .map(|n| n.to_string())
                .unwrap_or_else(|| "missing".to_string())
        );
        info!(
            "  logging: {} (colored: {})",
            self.logging.level, self.logging.colored
        );
        info!(
            "  mail: {} (links to {})",
            match &self.mail.smtp_host {
                Some(host) => format!("smtp {}:{}", host, self.mail.smtp_port),
                None => "log only".to_string(),
            },
            self.mail.public_url
        );
    }

    fn apply_env_overrides(&mut self) {
        // Server
        Self::apply_env_string("DH_SERVER_HOST", &mut self.server.host);
        Self::apply_env_parse("DH_SERVER_PORT", &mut self.server.port);

        // Database
        Self::apply_env_string("DH_DATABASE_PATH", &mut self.database.path);

        // Auth
        Self::apply_env_option_string("DH_AUTH_JWT_SECRET", &mut self.auth.jwt_secret);
        Self::apply_env_option_parse(
            "DH_AUTH_PASSWORD_ITERATIONS",
            &mut self.auth.password_iterations,
        );

        // Logging
        Self::apply_env_parse("DH_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("DH_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("DH_LOG_FILE", &mut self.logging.file);

        // Mail
        Self::apply_env_option_string("DH_MAIL_SMTP_HOST", &mut self.mail.smtp_host);
        Self::apply_env_parse("DH_MAIL_SMTP_PORT", &mut self.mail.smtp_port);
        Self::apply_env_option_string("DH_MAIL_SMTP_USERNAME", &mut self.mail.smtp_username);
        Self::apply_env_option_string("DH_MAIL_SMTP_PASSWORD", &mut self.mail.smtp_password);
        Self::apply_env_option_string("DH_MAIL_FROM_ADDRESS", &mut self.mail.from_address);
        Self::apply_env_string("DH_MAIL_PUBLIC_URL", &mut self.mail.public_url);
    }

    /// Helper: Apply environment variable override for String values
    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Helper: Apply environment variable override for bool values (accepts "true"/"1")
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    /// Helper: Apply environment variable override for parseable values
    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }

    /// Helper: Apply environment variable override for Option<parseable> values.
    /// An unparseable value clears the setting so validate() reports it.
    fn apply_env_option_parse<T: std::str::FromStr>(var_name: &str, target: &mut Option<T>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val.trim().parse().ok();
        }
    }

    /// Helper: Apply environment variable override for Option<String> values
    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val);
        }
    }
}
