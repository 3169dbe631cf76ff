//! Path resolution for config and store files.

use std::path::{Path, PathBuf};

use crate::cli::Cli;
use crate::config::{default_config_path, RibbonConfig};
use crate::constants::CONFIG_ENV;
use crate::errors::CliError;

/// Resolve the config file path, checking RIBBON_CONFIG first.
pub fn resolve_config_path() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var(CONFIG_ENV) {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value));
        }
    }
    default_config_path()
}

/// Resolve the store path from `--store`/RIBBON_STORE, then the config file.
pub fn resolve_store_path(
    cli: &Cli,
    config: Option<&RibbonConfig>,
    config_path: &Path,
) -> anyhow::Result<PathBuf> {
    if let Some(path) = cli.store.as_deref() {
        if !path.trim().is_empty() {
            return Ok(PathBuf::from(path));
        }
    }

    match config {
        Some(config) => Ok(PathBuf::from(&config.storage.path)),
        None => Err(CliError::not_found(
            missing_config_message(config_path),
            "Hint: Run `ribbon init` or pass --store <PATH>.",
        )
        .into()),
    }
}

/// Error message when the config file is missing.
pub fn missing_config_message(config_path: &Path) -> String {
    format!("No store configured ({} not found)", config_path.display())
}

/// Error message when the configured store file is missing.
pub fn missing_store_message(store_path: &Path) -> String {
    format!("No store found at {}", store_path.display())
}
