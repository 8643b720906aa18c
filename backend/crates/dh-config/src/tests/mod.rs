mod mail;

use std::env;

use tempfile::TempDir;

pub(crate) const VALID_SECRET: &str = "0123456789abcdef0123456789abcdef";

/// RAII guard for environment variables - automatically restores on drop
pub(crate) struct EnvGuard {
    key: &'static str,
    original: Option<String>,
}

impl EnvGuard {
    pub(crate) fn set(key: &'static str, value: &str) -> Self {
        unsafe {
            let original = env::var(key).ok();
            env::set_var(key, value);
            Self { key, original }
        }
    }

    pub(crate) fn remove(key: &'static str) -> Self {
        unsafe {
            let original = env::var(key).ok();
            env::remove_var(key);
            Self { key, original }
        }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        unsafe {
            match &self.original {
                Some(val) => env::set_var(self.key, val),
                None => env::remove_var(self.key),
            }
        }
    }
}

/// Create a temp config directory and set DH_CONFIG_DIR.
/// Auth variables are cleared so each test starts from an empty environment.
pub(crate) fn setup_config_dir() -> (TempDir, Vec<EnvGuard>) {
    let temp = TempDir::new().unwrap();
    let guards = vec![
        EnvGuard::set("DH_CONFIG_DIR", temp.path().to_str().unwrap()),
        EnvGuard::remove("DH_AUTH_JWT_SECRET"),
        EnvGuard::remove("DH_AUTH_PASSWORD_ITERATIONS"),
    ];
    (temp, guards)
}

/// Valid credential settings so tests can focus on other sections
pub(crate) fn set_valid_auth_env() -> Vec<EnvGuard> {
    vec![
        EnvGuard::set("DH_AUTH_JWT_SECRET", VALID_SECRET),
        EnvGuard::set("DH_AUTH_PASSWORD_ITERATIONS", "10000"),
    ]
}
