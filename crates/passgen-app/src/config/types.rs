//! Configuration types for passgen
//!
//! Defines:
//! - `Settings` - Global application settings (config.toml)
//! - Related sub-sections

use passgen_core::{GenerationSettings, DEFAULT_LENGTH, DEFAULT_STORE_FILENAME};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;
use tracing::warn;

/// Application settings (config.toml)
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub store: StoreSettings,

    #[serde(default)]
    pub generator: GeneratorSettings,

    #[serde(default)]
    pub ui: UiSettings,
}

/// Credential file location
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct StoreSettings {
    /// Backing CSV file, relative paths resolve against the working directory
    #[serde(default = "default_store_path")]
    pub path: PathBuf,
}

impl Default for StoreSettings {
    fn default() -> Self {
        Self {
            path: default_store_path(),
        }
    }
}

fn default_store_path() -> PathBuf {
    PathBuf::from(DEFAULT_STORE_FILENAME)
}

/// Startup defaults for the generation settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct GeneratorSettings {
    #[serde(default = "default_length")]
    pub length: usize,

    #[serde(default = "default_true")]
    pub lowercase: bool,

    #[serde(default = "default_true")]
    pub uppercase: bool,

    #[serde(default = "default_true")]
    pub numbers: bool,

    #[serde(default = "default_true")]
    pub symbols: bool,
}

impl Default for GeneratorSettings {
    fn default() -> Self {
        Self {
            length: default_length(),
            lowercase: true,
            uppercase: true,
            numbers: true,
            symbols: true,
        }
    }
}

impl GeneratorSettings {
    /// Convert into generation settings, replacing an out-of-range length
    /// with the default
    pub fn to_generation_settings(&self) -> GenerationSettings {
        let length = if GenerationSettings::length_in_range(self.length) {
            self.length
        } else {
            warn!(
                "Configured length {} out of range, using {}",
                self.length, DEFAULT_LENGTH
            );
            DEFAULT_LENGTH
        };
        GenerationSettings {
            length,
            include_lower: self.lowercase,
            include_upper: self.uppercase,
            include_numbers: self.numbers,
            include_symbols: self.symbols,
        }
    }
}

fn default_length() -> usize {
    DEFAULT_LENGTH
}

fn default_true() -> bool {
    true
}

/// UI behavior
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct UiSettings {
    /// How long a status message stays visible, in seconds
    #[serde(default = "default_status_ttl_secs")]
    pub status_ttl_secs: u64,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            status_ttl_secs: default_status_ttl_secs(),
        }
    }
}

/// Longest accepted status lifetime, one hour
pub const MAX_STATUS_TTL_SECS: u64 = 60 * 60;

impl UiSettings {
    /// Status lifetime, replacing a zero or over-long value with the default
    pub fn status_ttl(&self) -> Duration {
        let secs = if (1..=MAX_STATUS_TTL_SECS).contains(&self.status_ttl_secs) {
            self.status_ttl_secs
        } else {
            warn!(
                "Configured status_ttl_secs {} out of range, using {}",
                self.status_ttl_secs,
                default_status_ttl_secs()
            );
            default_status_ttl_secs()
        };
        Duration::from_secs(secs)
    }
}

fn default_status_ttl_secs() -> u64 {
    3
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.store.path, PathBuf::from("passwords.csv"));
        assert_eq!(settings.generator.length, 16);
        assert_eq!(settings.ui.status_ttl(), Duration::from_secs(3));
        assert_eq!(
            settings.generator.to_generation_settings(),
            GenerationSettings::default()
        );
    }

    #[test]
    fn test_parse_partial_config() {
        let toml = r#"
[generator]
length = 24
symbols = false
"#;
        let settings: Settings = toml::from_str(toml).unwrap();
        assert_eq!(settings.generator.length, 24);
        assert!(!settings.generator.symbols);
        assert!(settings.generator.lowercase);
        assert_eq!(settings.store, StoreSettings::default());
        assert_eq!(settings.ui.status_ttl_secs, 3);
    }

    #[test]
    fn test_parse_full_config() {
        let toml = r#"
[store]
path = "/home/me/secrets.csv"

[generator]
length = 32
lowercase = true
uppercase = false
numbers = true
symbols = true

[ui]
status_ttl_secs = 5
"#;
        let settings: Settings = toml::from_str(toml).unwrap();
        assert_eq!(settings.store.path, PathBuf::from("/home/me/secrets.csv"));
        assert!(!settings.generator.uppercase);
        assert_eq!(settings.ui.status_ttl(), Duration::from_secs(5));
    }

    #[test]
    fn test_out_of_range_status_ttl_falls_back() {
        let settings: Settings =
            toml::from_str("[ui]\nstatus_ttl_secs = 9223372036854775807\n").unwrap();
        assert_eq!(settings.ui.status_ttl(), Duration::from_secs(3));

        let ui = UiSettings { status_ttl_secs: 0 };
        assert_eq!(ui.status_ttl(), Duration::from_secs(3));

        let ui = UiSettings {
            status_ttl_secs: MAX_STATUS_TTL_SECS,
        };
        assert_eq!(ui.status_ttl(), Duration::from_secs(MAX_STATUS_TTL_SECS));
    }

    #[test]
    fn test_out_of_range_length_falls_back() {
        let generator = GeneratorSettings {
            length: 500,
            ..Default::default()
        };
        assert_eq!(generator.to_generation_settings().length, DEFAULT_LENGTH);

        let generator = GeneratorSettings {
            length: 2,
            numbers: false,
            ..Default::default()
        };
        let converted = generator.to_generation_settings();
        assert_eq!(converted.length, DEFAULT_LENGTH);
        assert!(!converted.include_numbers);
    }
}
