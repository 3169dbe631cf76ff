//! Ribbon CLI - track ribbon and mark progress across a Pokémon collection
//!
//! This is the command-line interface for Ribbon Tracker. It provides a
//! user-friendly interface to the core library functionality.

mod app;
mod cli;
mod commands;
mod config;
mod constants;
mod errors;
mod helpers;
mod logging;
mod output;
mod ui;

use clap::Parser;

use crate::app::AppContext;
use crate::cli::{Cli, Commands, PokemonSubcommand, SetupSubcommand};
use crate::commands::{catalog, data, init, misc, pokemon, progress, setup, transfers};
use crate::errors::exit_code_for;
use crate::ui::print_error;

fn main() {
    let cli = Cli::parse();
    logging::init_logging(cli.quiet);
    let ctx = AppContext::new(&cli);

    if let Err(e) = run(&ctx, &cli) {
        let ui_ctx = ctx.ui_context(false, None);

        let error_msg = format!("{}", e);
        let (message, hint) = split_error_hint(&error_msg);

        print_error(&ui_ctx, message, hint.as_deref());
        std::process::exit(exit_code_for(&e));
    }
}

/// Split an explicit "Hint:" line off an error message, or supply a
/// contextual hint for common failures.
fn split_error_hint(error: &str) -> (&str, Option<String>) {
    if let Some(idx) = error.find("\nHint:") {
        return (&error[..idx], Some(error[idx + 1..].to_string()));
    }

    let error_lower = error.to_lowercase();

    if error_lower.contains("unsupported export version") {
        return (
            error,
            Some("Hint: Re-export the data with this version of ribbon.".to_string()),
        );
    }

    if error_lower.contains("validation error") {
        return (
            error,
            Some("Hint: Import expects a file produced by `ribbon export`.".to_string()),
        );
    }

    if error_lower.contains("sqlite error") {
        return (
            error,
            Some("Hint: Check that the store path points to a ribbon store.".to_string()),
        );
    }

    (error, None)
}

fn run(ctx: &AppContext, cli: &Cli) -> anyhow::Result<()> {
    match &cli.command {
        Some(Commands::Init(args)) => init::handle_init(ctx, cli, args),
        Some(Commands::Games(args)) => catalog::handle_games(ctx, args),
        Some(Commands::Items(args)) => catalog::handle_items(ctx, args),
        Some(Commands::Ribbons(args)) => catalog::handle_ribbons(ctx, args),
        Some(Commands::Pokemon(subcommand)) => match subcommand {
            PokemonSubcommand::Add(args) => pokemon::handle_add(ctx, args),
            PokemonSubcommand::List(args) => pokemon::handle_list(ctx, args),
            PokemonSubcommand::Show(args) => pokemon::handle_show(ctx, args),
            PokemonSubcommand::Edit(args) => pokemon::handle_edit(ctx, args),
            PokemonSubcommand::Remove(args) => pokemon::handle_remove(ctx, args),
            PokemonSubcommand::Use(args) => pokemon::handle_use(ctx, args),
        },
        Some(Commands::Toggle(args)) => progress::handle_toggle(ctx, args),
        Some(Commands::Reset(args)) => progress::handle_reset(ctx, args),
        Some(Commands::Status(args)) => progress::handle_status(ctx, args),
        Some(Commands::Check(args)) => progress::handle_check(ctx, args),
        Some(Commands::Roadmap(args)) => progress::handle_roadmap(ctx, args),
        Some(Commands::Export(args)) => data::handle_export(ctx, args),
        Some(Commands::Import(args)) => data::handle_import(ctx, args),
        Some(Commands::Setup(subcommand)) => match subcommand {
            SetupSubcommand::Show(args) => setup::handle_show(ctx, args),
            SetupSubcommand::Game { id } => setup::handle_game(ctx, id),
            SetupSubcommand::Hardware { name } => setup::handle_hardware(ctx, name),
            SetupSubcommand::Complete => setup::handle_complete(ctx),
            SetupSubcommand::Reset { yes } => setup::handle_reset(ctx, *yes),
        },
        Some(Commands::Transfers(args)) => transfers::handle_transfers(ctx, args),
        Some(Commands::Completions { shell }) => misc::handle_completions(*shell),
        None => misc::handle_default(ctx),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_explicit_hint() {
        let (message, hint) = split_error_hint("Ribbon 'x' not found\nHint: Run `ribbon ribbons`.");
        assert_eq!(message, "Ribbon 'x' not found");
        assert_eq!(hint.as_deref(), Some("Hint: Run `ribbon ribbons`."));
    }

    #[test]
    fn test_contextual_hint_for_bad_import() {
        let (_, hint) = split_error_hint("Validation error: Invalid progress entry 'eevee'");
        assert!(hint.unwrap().contains("ribbon export"));
    }

    #[test]
    fn test_no_hint_for_unknown_errors() {
        assert_eq!(split_error_hint("boom"), ("boom", None));
    }
}
