
use std::env;

use tempfile::TempDir;

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

/// Create a temp config directory and set BS_CONFIG_DIR.
/// Upstream variables from the host environment are cleared for the test.
pub(crate) fn setup_config_dir() -> (TempDir, Vec<EnvGuard>) {
    let temp = TempDir::new().unwrap();
    let guards = vec![
        EnvGuard::set("BS_CONFIG_DIR", temp.path().to_str().unwrap()),
        EnvGuard::remove("BS_UPSTREAM_BASE_URL"),
        EnvGuard::remove("BS_UPSTREAM_API_KEY"),
        EnvGuard::remove("BS_UPSTREAM_TIMEOUT_SECS"),
    ];
    (temp, guards)
}

/// Set the two required upstream variables to valid values
pub(crate) fn valid_upstream_env() -> Vec<EnvGuard> {
    vec![
        EnvGuard::set("BS_UPSTREAM_BASE_URL", "https://example.backlog.jp/api/v2"),
        EnvGuard::set("BS_UPSTREAM_API_KEY", "test-api-key"),
    ]
}
