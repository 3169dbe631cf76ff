use ribbon_core::catalog::{category_label, is_shadow_capable};
use ribbon_core::{load_catalog, RibbonFilter};
use serde_json::json;

use crate::app::AppContext;
use crate::cli::{GamesArgs, ItemsArgs, RibbonsArgs};
use crate::commands::progress::{describe_key, eligibility_label};
use crate::errors::CliError;
use crate::helpers::{focus_key, parse_status};
use crate::output::{item_json, print_json, ribbon_json};
use crate::ui::theme::{BLOCKED, MISSING, OBTAINED};
use crate::ui::{blank_line, header, kv, print, simple_table, Column};

pub fn handle_games(ctx: &AppContext, args: &GamesArgs) -> anyhow::Result<()> {
    let catalog = load_catalog();
    let owned = if args.owned {
        Some(ctx.open_tracker()?.setup.owned_games().to_vec())
    } else {
        None
    };

    let games: Vec<_> = catalog
        .games()
        .iter()
        .filter(|game| args.generation.map_or(true, |g| game.generation == g))
        .filter(|game| {
            owned
                .as_ref()
                .map_or(true, |owned| owned.iter().any(|id| id == &game.id))
        })
        .collect();

    let ui_ctx = ctx.ui_context(args.output.json, args.output.format);
    if ui_ctx.mode.is_json() {
        return print_json(&json!(games));
    }

    let context = args.generation.map(|g| format!("gen {}", g));
    print(&ui_ctx, &header(&ui_ctx, "games", context.as_deref()));
    blank_line(&ui_ctx);
    let columns = [
        Column::new("ID"),
        Column::new("Name"),
        Column::new("Gen"),
        Column::new("Platform"),
        Column::new("Released"),
    ];
    let rows: Vec<Vec<String>> = games
        .iter()
        .map(|game| {
            vec![
                game.id.clone(),
                game.name.clone(),
                game.generation.to_string(),
                game.platform.clone(),
                game.release_date.clone(),
            ]
        })
        .collect();
    print(&ui_ctx, &simple_table(&ui_ctx, &columns, &rows));
    Ok(())
}

pub fn handle_items(ctx: &AppContext, args: &ItemsArgs) -> anyhow::Result<()> {
    let catalog = load_catalog();
    let needle = args
        .search
        .as_deref()
        .map(|s| s.trim().to_lowercase())
        .unwrap_or_default();

    let items: Vec<_> = catalog
        .items()
        .iter()
        .filter(|item| args.generation.map_or(true, |g| item.generation == g))
        .filter(|item| !args.shadow || is_shadow_capable(&item.id))
        .filter(|item| {
            needle.is_empty()
                || item.name.to_lowercase().contains(&needle)
                || item.id.contains(&needle)
        })
        .collect();

    let ui_ctx = ctx.ui_context(args.output.json, args.output.format);
    if ui_ctx.mode.is_json() {
        let values: Vec<_> = items.iter().map(|item| item_json(item)).collect();
        return print_json(&json!(values));
    }

    print(&ui_ctx, &header(&ui_ctx, "items", None));
    blank_line(&ui_ctx);
    let columns = [
        Column::new("#"),
        Column::new("ID"),
        Column::new("Name"),
        Column::new("Types"),
        Column::new("Gen"),
        Column::new("Shadow"),
    ];
    let rows: Vec<Vec<String>> = items
        .iter()
        .map(|item| {
            vec![
                item.display_number(),
                item.id.clone(),
                item.name.clone(),
                item.types.join("/"),
                item.generation.to_string(),
                if is_shadow_capable(&item.id) { "yes" } else { "" }.to_string(),
            ]
        })
        .collect();
    print(&ui_ctx, &simple_table(&ui_ctx, &columns, &rows));
    Ok(())
}

pub fn handle_ribbons(ctx: &AppContext, args: &RibbonsArgs) -> anyhow::Result<()> {
    let catalog = load_catalog();
    let status = args.status.as_deref().map(parse_status).transpose()?;
    if status.is_some() && args.key.is_none() {
        return Err(CliError::invalid_input(
            "--status needs a Pokémon to compare against\nHint: Add --for <KEY>.",
        )
        .into());
    }

    let filter = RibbonFilter::new()
        .generation(args.generation)
        .category(args.category.clone())
        .status(status)
        .search(args.search.clone().unwrap_or_default());

    let ui_ctx = ctx.ui_context(args.output.json, args.output.format);

    let Some(key_arg) = args.key.as_deref() else {
        let ribbons = filter.apply(catalog.ribbons(), None);
        if ui_ctx.mode.is_json() {
            let values: Vec<_> = ribbons.iter().map(|r| ribbon_json(r, None, None)).collect();
            return print_json(&json!(values));
        }
        print(&ui_ctx, &header(&ui_ctx, "ribbons", filter_context(args).as_deref()));
        blank_line(&ui_ctx);
        let columns = [
            Column::new("ID"),
            Column::new("Name"),
            Column::new("Gen"),
            Column::new("Category"),
        ];
        let rows: Vec<Vec<String>> = ribbons
            .iter()
            .map(|ribbon| {
                vec![
                    ribbon.id.clone(),
                    ribbon.name.clone(),
                    ribbon.generation.to_string(),
                    category_label(&ribbon.category).to_string(),
                ]
            })
            .collect();
        print(&ui_ctx, &simple_table(&ui_ctx, &columns, &rows));
        return Ok(());
    };

    let mut tracker = ctx.open_tracker()?;
    let key = focus_key(&mut tracker.progress, key_arg)?;
    let store = &tracker.progress;
    let obtained = store.obtained(&key);
    let ribbons = filter.apply(catalog.ribbons(), obtained);

    if ui_ctx.mode.is_json() {
        let values: Vec<_> = ribbons
            .iter()
            .map(|ribbon| {
                let verdict = store.compute_eligibility(ribbon);
                ribbon_json(ribbon, Some(store.has_ribbon(&key, &ribbon.id)), Some(&verdict))
            })
            .collect();
        return print_json(&json!(values));
    }

    print(&ui_ctx, &header(&ui_ctx, "ribbons", filter_context(args).as_deref()));
    print(&ui_ctx, &kv(&ui_ctx, "Pokemon", &describe_key(store, &key)));
    blank_line(&ui_ctx);
    let columns = [
        Column::new(""),
        Column::new("ID"),
        Column::new("Name"),
        Column::new("Gen"),
        Column::new("Eligible"),
    ];
    let rows: Vec<Vec<String>> = ribbons
        .iter()
        .map(|ribbon| {
            let verdict = store.compute_eligibility(ribbon);
            let marker = if store.has_ribbon(&key, &ribbon.id) {
                ui_ctx.symbol(OBTAINED)
            } else if verdict.eligible {
                ui_ctx.symbol(MISSING)
            } else {
                ui_ctx.symbol(BLOCKED)
            };
            vec![
                marker.to_string(),
                ribbon.id.clone(),
                ribbon.name.clone(),
                ribbon.generation.to_string(),
                eligibility_label(&verdict).to_string(),
            ]
        })
        .collect();
    print(&ui_ctx, &simple_table(&ui_ctx, &columns, &rows));
    Ok(())
}

fn filter_context(args: &RibbonsArgs) -> Option<String> {
    let mut parts = Vec::new();
    if let Some(generation) = args.generation {
        parts.push(format!("gen {}", generation));
    }
    if let Some(category) = args.category.as_deref() {
        parts.push(category_label(category).to_string());
    }
    if let Some(search) = args.search.as_deref() {
        parts.push(format!("\"{}\"", search));
    }
    if parts.is_empty() {
        None
    } else {
        Some(parts.join(", "))
    }
}
