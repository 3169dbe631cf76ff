use ribbon_core::Hardware;
use serde_json::json;

use crate::app::AppContext;
use crate::cli::OutputArgs;
use crate::helpers::{confirm_destructive, parse_hardware, require_game};
use crate::output::print_json;
use crate::ui::{blank_line, header, hint, kv, print, receipt};

pub fn handle_show(ctx: &AppContext, args: &OutputArgs) -> anyhow::Result<()> {
    let tracker = ctx.open_tracker()?;
    let setup = &tracker.setup;

    let ui_ctx = ctx.ui_context(args.json, args.format);
    if ui_ctx.mode.is_json() {
        return print_json(&json!(setup.state()));
    }

    print(&ui_ctx, &header(&ui_ctx, "setup", None));
    blank_line(&ui_ctx);
    let games: Vec<&str> = setup
        .owned_games()
        .iter()
        .map(|id| tracker.catalog.game_name(id))
        .collect();
    let hardware: Vec<&str> = setup.owned_hardware().iter().map(Hardware::label).collect();
    print(&ui_ctx, &kv(&ui_ctx, "Games", &join_or_none(&games)));
    print(&ui_ctx, &kv(&ui_ctx, "Hardware", &join_or_none(&hardware)));
    print(
        &ui_ctx,
        &kv(
            &ui_ctx,
            "Completed",
            if setup.is_completed() { "yes" } else { "no" },
        ),
    );
    if !setup.is_completed() {
        print(&ui_ctx, &hint(&ui_ctx, "ribbon setup game <id>, then ribbon setup complete"));
    }
    Ok(())
}

fn join_or_none(values: &[&str]) -> String {
    if values.is_empty() {
        "none".to_string()
    } else {
        values.join(", ")
    }
}

pub fn handle_game(ctx: &AppContext, id: &str) -> anyhow::Result<()> {
    let mut tracker = ctx.open_tracker()?;
    let game = require_game(tracker.catalog, id)?;
    let owned = tracker.setup.toggle_game(&game.id);

    if !ctx.quiet() {
        let ui_ctx = ctx.ui_context(false, None);
        let title = if owned { "Game added" } else { "Game removed" };
        print(
            &ui_ctx,
            &receipt(&ui_ctx, title, &[("Game", game.name.as_str())]),
        );
    }
    Ok(())
}

pub fn handle_hardware(ctx: &AppContext, name: &str) -> anyhow::Result<()> {
    let hardware = parse_hardware(name)?;
    let mut tracker = ctx.open_tracker()?;
    let owned = tracker.setup.toggle_hardware(hardware);

    if !ctx.quiet() {
        let ui_ctx = ctx.ui_context(false, None);
        let title = if owned {
            "Hardware added"
        } else {
            "Hardware removed"
        };
        print(
            &ui_ctx,
            &receipt(&ui_ctx, title, &[("Hardware", hardware.label())]),
        );
    }
    Ok(())
}

pub fn handle_complete(ctx: &AppContext) -> anyhow::Result<()> {
    let mut tracker = ctx.open_tracker()?;
    tracker.setup.complete_setup();

    if !ctx.quiet() {
        let ui_ctx = ctx.ui_context(false, None);
        print(&ui_ctx, &receipt(&ui_ctx, "Setup completed", &[]));
    }
    Ok(())
}

pub fn handle_reset(ctx: &AppContext, yes: bool) -> anyhow::Result<()> {
    let ui_ctx = ctx.ui_context(false, None);
    if !confirm_destructive(&ui_ctx, "Clear all owned games and hardware?", yes)? {
        print(&ui_ctx, "Cancelled.");
        return Ok(());
    }

    let mut tracker = ctx.open_tracker()?;
    tracker.setup.reset_setup();

    if !ctx.quiet() {
        print(&ui_ctx, &receipt(&ui_ctx, "Setup reset", &[]));
    }
    Ok(())
}
