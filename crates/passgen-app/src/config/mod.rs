//! Configuration file parsing for passgen
//!
//! Supports `<config_dir>/passgen/config.toml` (or an explicit `--config`
//! path). Command-line flags override values read from the file.

pub mod settings;
pub mod types;

pub use settings::{default_config_path, load_settings, CONFIG_FILENAME};
pub use types::*;
