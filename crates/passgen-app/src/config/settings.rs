//! Settings loader for config.toml

use super::types::Settings;
use passgen_core::prelude::*;
use std::path::{Path, PathBuf};

pub const CONFIG_FILENAME: &str = "config.toml";
const CONFIG_DIR: &str = "passgen";

/// Environment variable overriding the config file location
pub const CONFIG_ENV_VAR: &str = "PASSGEN_CONFIG";

/// Resolve the default config path
///
/// `PASSGEN_CONFIG` wins when set, otherwise `<config_dir>/passgen/config.toml`.
pub fn default_config_path() -> Option<PathBuf> {
    if let Some(path) = std::env::var_os(CONFIG_ENV_VAR) {
        return Some(PathBuf::from(path));
    }
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR).join(CONFIG_FILENAME))
}

/// Load settings from a config file
///
/// A missing file yields defaults. Unreadable or malformed files are logged
/// and also yield defaults, so a broken config never blocks startup.
pub fn load_settings(config_path: &Path) -> Settings {
    if !config_path.exists() {
        debug!("No config file at {:?}, using defaults", config_path);
        return Settings::default();
    }

    match std::fs::read_to_string(config_path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(settings) => {
                debug!("Loaded settings from {:?}", config_path);
                settings
            }
            Err(e) => {
                warn!("Failed to parse {:?}: {}", config_path, e);
                Settings::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", config_path, e);
            Settings::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = TempDir::new().unwrap();
        let settings = load_settings(&dir.path().join(CONFIG_FILENAME));
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_loads_values_from_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILENAME);
        std::fs::write(&path, "[ui]\nstatus_ttl_secs = 7\n").unwrap();

        let settings = load_settings(&path);
        assert_eq!(settings.ui.status_ttl_secs, 7);
    }

    #[test]
    fn test_malformed_file_uses_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILENAME);
        std::fs::write(&path, "[generator\nlength = ").unwrap();

        assert_eq!(load_settings(&path), Settings::default());
    }

    #[test]
    #[serial]
    fn test_env_var_overrides_config_path() {
        std::env::set_var(CONFIG_ENV_VAR, "/tmp/custom-passgen.toml");
        let path = default_config_path();
        std::env::remove_var(CONFIG_ENV_VAR);

        assert_eq!(path, Some(PathBuf::from("/tmp/custom-passgen.toml")));
    }

    #[test]
    #[serial]
    fn test_default_config_path_is_namespaced() {
        std::env::remove_var(CONFIG_ENV_VAR);
        if let Some(path) = default_config_path() {
            assert!(path.ends_with("passgen/config.toml"));
        }
    }
}
