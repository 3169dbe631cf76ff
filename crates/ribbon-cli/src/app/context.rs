//! Application context for the ribbon CLI.
//!
//! Bundles CLI arguments with a lazily-loaded config so handlers don't
//! re-read it or thread extra parameters around.

use std::path::PathBuf;
use std::sync::Arc;

use once_cell::unsync::OnceCell;

use ribbon_core::{load_catalog, SqliteStore, Tracker};

use crate::cli::Cli;
use crate::config::{read_config, write_config, RibbonConfig};
use crate::errors::CliError;
use crate::ui::{OutputFormat, UiContext, UiSettings};

use super::resolver::{missing_store_message, resolve_config_path, resolve_store_path};

pub struct AppContext<'a> {
    cli: &'a Cli,
    config: OnceCell<Option<RibbonConfig>>,
}

impl<'a> AppContext<'a> {
    pub fn new(cli: &'a Cli) -> Self {
        Self {
            cli,
            config: OnceCell::new(),
        }
    }

    pub fn quiet(&self) -> bool {
        self.cli.quiet
    }

    /// The config file, or `None` when it has not been created yet.
    pub fn config(&self) -> anyhow::Result<Option<&RibbonConfig>> {
        let config = self.config.get_or_try_init(|| {
            let path = resolve_config_path()?;
            if path.exists() {
                read_config(&path).map(Some)
            } else {
                Ok::<_, anyhow::Error>(None)
            }
        })?;
        Ok(config.as_ref())
    }

    /// Build a UI context for the given output flags.
    ///
    /// A broken config file never blocks output formatting.
    pub fn ui_context(&self, json: bool, format: Option<OutputFormat>) -> UiContext {
        let config_ascii = matches!(self.config(), Ok(Some(config)) if config.ui.ascii);
        UiContext::from_env(UiSettings {
            json,
            format,
            no_color: self.cli.no_color,
            ascii: self.cli.ascii || config_ascii,
        })
    }

    pub fn store_path(&self) -> anyhow::Result<PathBuf> {
        let config_path = resolve_config_path()?;
        resolve_store_path(self.cli, self.config()?, &config_path)
    }

    /// Open the configured store and load the tracker state from it.
    pub fn open_tracker(&self) -> anyhow::Result<Tracker<'static>> {
        let path = self.store_path()?;
        if !path.exists() {
            return Err(CliError::not_found(
                missing_store_message(&path),
                "Hint: Run `ribbon init` to create it.",
            )
            .into());
        }
        let storage = SqliteStore::open(&path)?;
        tracing::debug!(path = %path.display(), "store opened");
        Ok(Tracker::open(load_catalog(), Arc::new(storage)))
    }

    /// Key remembered by `ribbon pokemon use`.
    pub fn session_active(&self) -> anyhow::Result<Option<String>> {
        Ok(self
            .config()?
            .and_then(|config| config.session.active.clone()))
    }

    /// Persist (or clear) the remembered key, creating the config if needed.
    pub fn set_session_active(&self, key: Option<String>) -> anyhow::Result<()> {
        let config_path = resolve_config_path()?;
        let mut config = if config_path.exists() {
            read_config(&config_path)?
        } else {
            RibbonConfig::new(self.store_path()?, self.cli.ascii)
        };
        config.session.active = key;
        write_config(&config_path, &config)
    }
}
