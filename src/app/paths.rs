// SPDX-License-Identifier: MPL-2.0
//! Centralized path management for application directories.
//!
//! # Path Resolution Order
//!
//! 1. **Explicit override** - parameter to `_with_override()` functions (for tests)
//! 2. **CLI arguments** (`--data-dir`, `--config-dir`) - set via [`init_cli_overrides`]
//! 3. **Environment variables** (`ICED_LOUPE_DATA_DIR`, `ICED_LOUPE_CONFIG_DIR`)
//! 4. **Platform default** - via `dirs` crate
//!
//! The data directory holds the preference store (`storage.cbor`); the config
//! directory holds the user-editable `settings.toml`.

use std::path::PathBuf;
use std::sync::OnceLock;

/// Application name used for directory naming.
const APP_NAME: &str = "IcedLoupe";

/// Environment variable to override the data directory.
pub const ENV_DATA_DIR: &str = "ICED_LOUPE_DATA_DIR";

/// Environment variable to override the config directory.
pub const ENV_CONFIG_DIR: &str = "ICED_LOUPE_CONFIG_DIR";

static CLI_DATA_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();
static CLI_CONFIG_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();

/// Records the `--data-dir` / `--config-dir` overrides.
///
/// Only the first call has an effect; later calls are ignored and logged.
pub fn init_cli_overrides(data_dir: Option<String>, config_dir: Option<String>) {
    if CLI_DATA_DIR.set(data_dir.map(PathBuf::from)).is_err()
        || CLI_CONFIG_DIR.set(config_dir.map(PathBuf::from)).is_err()
    {
        tracing::warn!("directory overrides were already initialized");
    }
}

fn get_cli_data_dir() -> Option<PathBuf> {
    CLI_DATA_DIR.get().and_then(Clone::clone)
}

fn get_cli_config_dir() -> Option<PathBuf> {
    CLI_CONFIG_DIR.get().and_then(Clone::clone)
}

fn env_dir(name: &str) -> Option<PathBuf> {
    match std::env::var(name) {
        Ok(value) if !value.is_empty() => Some(PathBuf::from(value)),
        _ => None,
    }
}

/// Returns the application data directory path.
///
/// Platform defaults:
/// - Linux: `~/.local/share/IcedLoupe/`
/// - macOS: `~/Library/Application Support/IcedLoupe/`
/// - Windows: `C:\Users\<User>\AppData\Roaming\IcedLoupe\`
///
/// Returns `None` if the data directory cannot be determined.
pub fn get_app_data_dir() -> Option<PathBuf> {
    get_app_data_dir_with_override(None)
}

/// Returns the application data directory path with an optional override.
pub fn get_app_data_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    override_path
        .or_else(get_cli_data_dir)
        .or_else(|| env_dir(ENV_DATA_DIR))
        .or_else(|| {
            dirs::data_dir().map(|mut path| {
                path.push(APP_NAME);
                path
            })
        })
}

/// Returns the application config directory path.
pub fn get_app_config_dir() -> Option<PathBuf> {
    get_app_config_dir_with_override(None)
}

/// Returns the application config directory path with an optional override.
pub fn get_app_config_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    override_path
        .or_else(get_cli_config_dir)
        .or_else(|| env_dir(ENV_CONFIG_DIR))
        .or_else(|| {
            dirs::config_dir().map(|mut path| {
                path.push(APP_NAME);
                path
            })
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Mutex to prevent parallel tests from interfering with each other's env vars
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    #[test]
    fn app_data_dir_contains_app_name() {
        let _lock = ENV_MUTEX.lock().unwrap();
        std::env::remove_var(ENV_DATA_DIR);

        if let Some(path) = get_app_data_dir() {
            assert!(
                path.to_string_lossy().contains(APP_NAME),
                "App data dir should contain app name"
            );
        }
    }

    #[test]
    fn app_config_dir_contains_app_name() {
        let _lock = ENV_MUTEX.lock().unwrap();
        std::env::remove_var(ENV_CONFIG_DIR);

        if let Some(path) = get_app_config_dir() {
            assert!(path.to_string_lossy().contains(APP_NAME));
        }
    }

    #[test]
    fn override_path_takes_precedence_for_data_dir() {
        let override_path = PathBuf::from("/custom/data/path");
        let result = get_app_data_dir_with_override(Some(override_path.clone()));
        assert_eq!(result, Some(override_path));
    }

    #[test]
    fn override_path_takes_precedence_for_config_dir() {
        let override_path = PathBuf::from("/custom/config/path");
        let result = get_app_config_dir_with_override(Some(override_path.clone()));
        assert_eq!(result, Some(override_path));
    }

    #[test]
    fn env_var_overrides_default_data_dir() {
        let _lock = ENV_MUTEX.lock().unwrap();
        let test_path = "/test/data/dir";
        std::env::set_var(ENV_DATA_DIR, test_path);

        let result = get_app_data_dir();
        assert_eq!(result, Some(PathBuf::from(test_path)));

        std::env::remove_var(ENV_DATA_DIR);
    }

    #[test]
    fn empty_env_var_uses_default() {
        let _lock = ENV_MUTEX.lock().unwrap();
        std::env::set_var(ENV_CONFIG_DIR, "");

        if let Some(path) = get_app_config_dir() {
            assert!(path.to_string_lossy().contains(APP_NAME));
        }

        std::env::remove_var(ENV_CONFIG_DIR);
    }

    #[test]
    fn override_path_takes_precedence_over_env_var() {
        let _lock = ENV_MUTEX.lock().unwrap();
        std::env::set_var(ENV_DATA_DIR, "/env/path");

        let override_path = PathBuf::from("/override/path");
        let result = get_app_data_dir_with_override(Some(override_path.clone()));
        assert_eq!(result, Some(override_path));

        std::env::remove_var(ENV_DATA_DIR);
    }
}
