use crate::{ConfigError, ConfigErrorResult, DEFAULT_DATABASE_FILENAME};

use std::path::{Component, Path, PathBuf};

use serde::Deserialize;

/// Location of the SQLite file holding accounts and locations
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// Relative to the config directory
    pub path: String,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: DEFAULT_DATABASE_FILENAME.to_string(),
        }
    }
}

impl DatabaseConfig {
    /// The file must stay inside the config directory.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        let path = Path::new(self.path.trim());
        if path.as_os_str().is_empty() {
            return Err(ConfigError::invalid("database.path", "cannot be empty"));
        }

        let escapes = path
            .components()
            .any(|c| !matches!(c, Component::Normal(_) | Component::CurDir));
        if escapes {
            return Err(ConfigError::invalid(
                "database.path",
                format!(
                    "must be relative and cannot contain '..', got {}",
                    self.path
                ),
            ));
        }

        Ok(())
    }

    pub fn resolve(&self, config_dir: &Path) -> PathBuf {
        config_dir.join(self.path.trim())
    }
}
