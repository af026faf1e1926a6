//! passgen - An interactive terminal password generator
//!
//! This is the binary entry point. All logic lives in the workspace crates.

use std::path::PathBuf;

use clap::Parser;
use passgen_app::config::{self, Settings};
use tracing::info;

/// passgen - An interactive terminal password generator
#[derive(Parser, Debug)]
#[command(name = "passgen")]
#[command(version, about = "An interactive terminal password generator", long_about = None)]
struct Args {
    /// CSV file where saved credentials are appended
    #[arg(long, value_name = "PATH")]
    store: Option<PathBuf>,

    /// Config file (defaults to $PASSGEN_CONFIG or <config dir>/passgen/config.toml)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let args = Args::parse();

    if let Err(e) = passgen_core::logging::init() {
        eprintln!("warning: file logging disabled: {e}");
    }

    let settings = resolve_settings(&args);
    info!(
        "Loaded settings: store={}, length={}",
        settings.store.path.display(),
        settings.generator.length
    );

    passgen_tui::run(settings).await?;
    Ok(())
}

/// Load the config file and apply command-line overrides
fn resolve_settings(args: &Args) -> Settings {
    let config_path = args.config.clone().or_else(config::default_config_path);
    let mut settings = match config_path {
        Some(path) => config::load_settings(&path),
        None => Settings::default(),
    };

    if let Some(store) = &args.store {
        settings.store.path = store.clone();
    }
    settings
}
