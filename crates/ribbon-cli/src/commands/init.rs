use std::path::PathBuf;

use ribbon_core::SqliteStore;

use crate::app::{resolve_config_path, AppContext};
use crate::cli::{Cli, InitArgs};
use crate::config::{default_store_path, write_config, RibbonConfig};
use crate::errors::CliError;
use crate::ui::{hint, print, receipt};

pub fn handle_init(ctx: &AppContext, cli: &Cli, args: &InitArgs) -> anyhow::Result<()> {
    let config_path = resolve_config_path()?;
    if config_path.exists() && !args.force {
        return Err(CliError::invalid_input(format!(
            "A config already exists at {}\nHint: Pass --force to overwrite it.",
            config_path.display()
        ))
        .into());
    }

    let store_path = match args.path.as_deref().or(cli.store.as_deref()) {
        Some(path) if !path.trim().is_empty() => PathBuf::from(path),
        _ => default_store_path()?,
    };

    // An existing store is adopted as-is so re-running init never loses progress.
    let reused = store_path.exists();
    if reused {
        SqliteStore::open(&store_path)?;
    } else {
        SqliteStore::create(&store_path)?;
    }
    tracing::debug!(path = %store_path.display(), reused, "store ready");

    write_config(&config_path, &RibbonConfig::new(store_path.clone(), cli.ascii))?;

    if ctx.quiet() {
        return Ok(());
    }

    let ui_ctx = ctx.ui_context(false, None);
    let store_display = store_path.display().to_string();
    let config_display = config_path.display().to_string();
    let title = if reused {
        "Using existing ribbon store"
    } else {
        "Initialized ribbon store"
    };
    print(
        &ui_ctx,
        &receipt(
            &ui_ctx,
            title,
            &[("Store", store_display.as_str()), ("Config", config_display.as_str())],
        ),
    );
    print(
        &ui_ctx,
        &hint(&ui_ctx, "ribbon setup game <id>, then ribbon pokemon add <species> --origin <game>"),
    );
    Ok(())
}
