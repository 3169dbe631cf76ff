use std::path::Path;

use ribbon_core::ImportDocument;

use crate::app::AppContext;
use crate::cli::{ExportArgs, ImportArgs};
use crate::helpers::{confirm_destructive, read_import_source, resolve_target};
use crate::output::{print_json, summary_json};
use crate::ui::{print, receipt};

pub fn handle_export(ctx: &AppContext, args: &ExportArgs) -> anyhow::Result<()> {
    let tracker = ctx.open_tracker()?;
    let document = tracker.progress.export();
    let mut text = document.to_json_pretty()?;
    text.push('\n');

    let Some(output) = args.output.as_deref() else {
        print!("{}", text);
        return Ok(());
    };

    ribbon_core::fs::write_atomic(Path::new(output), text.as_bytes())?;
    tracing::debug!(path = output, "export written");

    if !ctx.quiet() {
        let ui_ctx = ctx.ui_context(false, None);
        let pokemon = document.my_pokemon_list.len().to_string();
        let keys = document.progress.len().to_string();
        print(
            &ui_ctx,
            &receipt(
                &ui_ctx,
                "Progress exported",
                &[
                    ("Path", output),
                    ("Pokemon", pokemon.as_str()),
                    ("Keys", keys.as_str()),
                ],
            ),
        );
    }
    Ok(())
}

fn import_prompt(document: &ImportDocument) -> &'static str {
    if document.replaces_registry() {
        "Replace all Pokémon and ribbons with this file?"
    } else {
        "Replace all recorded ribbons with this file?"
    }
}

pub fn handle_import(ctx: &AppContext, args: &ImportArgs) -> anyhow::Result<()> {
    let text = read_import_source(&args.path)?;
    // Validate before asking so a bad file never prompts.
    let document = ImportDocument::parse(&text)?;

    let prompt = import_prompt(&document);
    let ui_ctx = ctx.ui_context(args.json, None);
    if !confirm_destructive(&ui_ctx, prompt, args.yes)? {
        print(&ui_ctx, "Cancelled.");
        return Ok(());
    }

    let mut tracker = ctx.open_tracker()?;
    let summary = tracker.progress.apply_import(document);

    // Forget a remembered key the import made meaningless.
    if let Some(active) = ctx.session_active()? {
        if resolve_target(&tracker.progress, &active).is_err() {
            ctx.set_session_active(None)?;
        }
    }

    if ui_ctx.mode.is_json() {
        return print_json(&summary_json(&summary));
    }
    if ctx.quiet() {
        return Ok(());
    }

    let keys = summary.progress_keys.to_string();
    let pokemon = summary
        .instances
        .map(|count| count.to_string())
        .unwrap_or_else(|| "unchanged".to_string());
    let format = if summary.legacy { "legacy" } else { "versioned" };
    print(
        &ui_ctx,
        &receipt(
            &ui_ctx,
            "Progress imported",
            &[
                ("Keys", keys.as_str()),
                ("Pokemon", pokemon.as_str()),
                ("Format", format),
            ],
        ),
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_import_prompt_mentions_pokemon_only_with_registry() {
        let progress_only = ImportDocument::parse(r#"{"version":1,"progress":{}}"#).unwrap();
        assert_eq!(
            import_prompt(&progress_only),
            "Replace all recorded ribbons with this file?"
        );

        let legacy = ImportDocument::parse(r#"{"eevee":["effort-ribbon"]}"#).unwrap();
        assert_eq!(
            import_prompt(&legacy),
            "Replace all recorded ribbons with this file?"
        );

        let full =
            ImportDocument::parse(r#"{"version":1,"myPokemonList":[],"progress":{}}"#).unwrap();
        assert_eq!(
            import_prompt(&full),
            "Replace all Pokémon and ribbons with this file?"
        );
    }
}
