use clap::CommandFactory;
use clap_complete::generate;

use crate::app::AppContext;
use crate::cli::Cli;
use crate::ui::{header_with_context, hint, kv, print};

pub fn handle_completions(shell: clap_complete::Shell) -> anyhow::Result<()> {
    let mut cmd = Cli::command();
    generate(shell, &mut cmd, "ribbon", &mut std::io::stdout());
    Ok(())
}

/// Bare `ribbon`: a short overview of the configured store.
pub fn handle_default(ctx: &AppContext) -> anyhow::Result<()> {
    let ui_ctx = ctx.ui_context(false, None);

    if ctx.config()?.is_none() && ctx.store_path().is_err() {
        print(&ui_ctx, &header_with_context(&ui_ctx, "overview", None, None));
        print(&ui_ctx, &hint(&ui_ctx, "ribbon init"));
        return Ok(());
    }

    let tracker = ctx.open_tracker()?;
    let path = ctx.store_path()?.display().to_string();
    print(&ui_ctx, &header_with_context(&ui_ctx, "overview", None, Some(&path)));
    print(
        &ui_ctx,
        &kv(&ui_ctx, "Pokemon", &tracker.progress.instances().len().to_string()),
    );
    print(
        &ui_ctx,
        &kv(&ui_ctx, "Tracked", &tracker.progress.progress().len().to_string()),
    );
    if let Some(active) = ctx.session_active()? {
        print(&ui_ctx, &kv(&ui_ctx, "Active", &active));
    }
    print(&ui_ctx, &hint(&ui_ctx, "ribbon --help"));
    Ok(())
}
