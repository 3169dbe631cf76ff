use ribbon_core::catalog::is_shadow_capable;
use ribbon_core::{InstancePatch, NewInstance};
use serde_json::{json, Value};

use crate::app::AppContext;
use crate::cli::{
    OutputArgs, PokemonAddArgs, PokemonEditArgs, PokemonRemoveArgs, PokemonShowArgs,
    PokemonUseArgs,
};
use crate::commands::progress::{describe_key, key_or_active};
use crate::errors::CliError;
use crate::helpers::{
    confirm_destructive, focus_key, require_game, resolve_instance, resolve_target, Target,
};
use crate::output::{instance_json, item_json, print_json};
use crate::ui::format::{format_datetime, short_id, single_line, truncate};
use crate::ui::{blank_line, header, hint, kv, print, receipt, simple_table, Column};

fn validate_level(level: Option<u32>) -> anyhow::Result<Option<u32>> {
    match level {
        Some(level) if !(1..=100).contains(&level) => Err(CliError::invalid_input(format!(
            "Level must be between 1 and 100, got {}",
            level
        ))
        .into()),
        other => Ok(other),
    }
}

pub fn handle_add(ctx: &AppContext, args: &PokemonAddArgs) -> anyhow::Result<()> {
    let mut tracker = ctx.open_tracker()?;
    let catalog = tracker.catalog;

    let species = catalog.item(args.species.trim()).ok_or_else(|| {
        CliError::not_found(
            format!("Species '{}' not found", args.species),
            "Hint: Run `ribbon items --search <name>` to find species ids.",
        )
    })?;
    let origin = require_game(catalog, &args.origin)?;
    let current = match args.current.as_deref() {
        Some(id) => require_game(catalog, id)?,
        None => origin,
    };

    let mut data = NewInstance::new(species.id.clone(), origin.id.clone())
        .with_current(current.id.clone(), current.generation)
        .transferred_to_home(args.home);
    if let Some(nickname) = args.nickname.as_deref() {
        data = data.with_nickname(nickname.trim());
    }
    if let Some(level) = validate_level(args.level)? {
        data = data.with_level(level);
    }
    if let Some(memo) = args.memo.as_deref() {
        data = data.with_memo(memo);
    }

    let id = tracker.progress.register_owned_instance(data);
    if args.make_active {
        ctx.set_session_active(Some(id.clone()))?;
    }

    let ui_ctx = ctx.ui_context(args.output.json, args.output.format);
    if ui_ctx.mode.is_json() {
        if let Some(instance) = tracker.progress.instance(&id) {
            return print_json(&instance_json(instance, catalog));
        }
        return Ok(());
    }
    if ctx.quiet() {
        println!("{}", id);
        return Ok(());
    }

    print(
        &ui_ctx,
        &receipt(
            &ui_ctx,
            "Pokemon registered",
            &[
                ("ID", id.as_str()),
                ("Species", species.name.as_str()),
                ("Origin", catalog.game_name(&origin.id)),
            ],
        ),
    );
    print(
        &ui_ctx,
        &hint(&ui_ctx, &format!("ribbon ribbons --for {}", short_id(&id))),
    );
    Ok(())
}

pub fn handle_list(ctx: &AppContext, args: &OutputArgs) -> anyhow::Result<()> {
    let tracker = ctx.open_tracker()?;
    let store = &tracker.progress;
    let catalog = tracker.catalog;
    let active = ctx.session_active()?;
    let ribbon_count = |id: &str| store.obtained(id).map_or(0, |set| set.len());

    let ui_ctx = ctx.ui_context(args.json, args.format);
    if ui_ctx.mode.is_json() {
        let values: Vec<Value> = store
            .instances()
            .iter()
            .map(|instance| {
                let mut value = instance_json(instance, catalog);
                value["ribbons"] = json!(ribbon_count(&instance.id));
                value["active"] = json!(active.as_deref() == Some(instance.id.as_str()));
                value
            })
            .collect();
        return print_json(&json!(values));
    }

    print(&ui_ctx, &header(&ui_ctx, "pokemon list", None));
    blank_line(&ui_ctx);
    if store.instances().is_empty() {
        print(&ui_ctx, "No Pokémon registered yet.");
        print(
            &ui_ctx,
            &hint(&ui_ctx, "ribbon pokemon add <species> --origin <game>"),
        );
        return Ok(());
    }

    let columns = [
        Column::new(""),
        Column::new("ID"),
        Column::new("Name"),
        Column::new("Species"),
        Column::new("Origin"),
        Column::new("Current"),
        Column::new("Lv"),
        Column::new("Ribbons"),
    ];
    let rows: Vec<Vec<String>> = store
        .instances()
        .iter()
        .map(|instance| {
            let marker = if active.as_deref() == Some(instance.id.as_str()) {
                "*"
            } else {
                ""
            };
            let species = catalog
                .item(&instance.pokemon_id)
                .map(|item| item.name.clone())
                .unwrap_or_else(|| instance.pokemon_id.clone());
            vec![
                marker.to_string(),
                short_id(&instance.id),
                truncate(instance.display_name(), 20),
                species,
                catalog.game_name(&instance.origin_game).to_string(),
                catalog.game_name(&instance.current_game).to_string(),
                instance.level.to_string(),
                ribbon_count(&instance.id).to_string(),
            ]
        })
        .collect();
    print(&ui_ctx, &simple_table(&ui_ctx, &columns, &rows));
    Ok(())
}

pub fn handle_show(ctx: &AppContext, args: &PokemonShowArgs) -> anyhow::Result<()> {
    let key_arg = key_or_active(ctx, args.key.as_deref())?;
    let tracker = ctx.open_tracker()?;
    let store = &tracker.progress;
    let catalog = tracker.catalog;
    let target = resolve_target(store, &key_arg)?;
    let key = match &target {
        Target::Instance(id) => id.clone(),
        Target::Species(item) => item.id.clone(),
        Target::Raw(raw) => raw.clone(),
    };
    let ribbons: Vec<&str> = store
        .obtained(&key)
        .map(|set| set.iter().map(String::as_str).collect())
        .unwrap_or_default();

    let ui_ctx = ctx.ui_context(args.output.json, args.output.format);
    if ui_ctx.mode.is_json() {
        let value = match &target {
            Target::Instance(id) => json!({
                "kind": "instance",
                "instance": store.instance(id).map(|i| instance_json(i, catalog)),
                "ribbons": ribbons,
            }),
            Target::Species(item) => json!({
                "kind": "species",
                "item": item_json(item),
                "ribbons": ribbons,
            }),
            Target::Raw(raw) => json!({
                "kind": "key",
                "key": raw,
                "ribbons": ribbons,
            }),
        };
        return print_json(&value);
    }

    print(&ui_ctx, &header(&ui_ctx, "pokemon show", None));
    blank_line(&ui_ctx);
    match &target {
        Target::Instance(id) => {
            if let Some(instance) = store.instance(id) {
                print(&ui_ctx, &kv(&ui_ctx, "ID", &instance.id));
                print(&ui_ctx, &kv(&ui_ctx, "Name", &describe_key(store, id)));
                print(
                    &ui_ctx,
                    &kv(&ui_ctx, "Origin", catalog.game_name(&instance.origin_game)),
                );
                print(
                    &ui_ctx,
                    &kv(
                        &ui_ctx,
                        "Current",
                        &format!(
                            "{} (gen {})",
                            catalog.game_name(&instance.current_game),
                            instance.current_generation
                        ),
                    ),
                );
                print(&ui_ctx, &kv(&ui_ctx, "Level", &instance.level.to_string()));
                print(
                    &ui_ctx,
                    &kv(
                        &ui_ctx,
                        "In HOME",
                        if instance.is_transferred_to_home { "yes" } else { "no" },
                    ),
                );
                if !instance.memo.is_empty() {
                    print(&ui_ctx, &kv(&ui_ctx, "Memo", &single_line(&instance.memo)));
                }
                print(
                    &ui_ctx,
                    &kv(
                        &ui_ctx,
                        "Registered",
                        &format_datetime(&instance.created_at, ui_ctx.mode.is_table()),
                    ),
                );
            }
        }
        Target::Species(item) => {
            print(&ui_ctx, &kv(&ui_ctx, "Species", &describe_key(store, &item.id)));
            print(&ui_ctx, &kv(&ui_ctx, "Types", &item.types.join("/")));
            print(&ui_ctx, &kv(&ui_ctx, "Generation", &item.generation.to_string()));
            print(
                &ui_ctx,
                &kv(
                    &ui_ctx,
                    "Shadow",
                    if is_shadow_capable(&item.id) { "yes" } else { "no" },
                ),
            );
        }
        Target::Raw(raw) => {
            print(&ui_ctx, &kv(&ui_ctx, "Key", raw));
        }
    }

    let names: Vec<String> = ribbons
        .iter()
        .map(|id| {
            catalog
                .ribbon(id)
                .map(|ribbon| ribbon.name.clone())
                .unwrap_or_else(|| id.to_string())
        })
        .collect();
    print(
        &ui_ctx,
        &kv(&ui_ctx, "Ribbons", &format!("{} obtained", names.len())),
    );
    for name in names {
        print(&ui_ctx, &format!("  {}", name));
    }
    Ok(())
}

pub fn handle_edit(ctx: &AppContext, args: &PokemonEditArgs) -> anyhow::Result<()> {
    let mut tracker = ctx.open_tracker()?;
    let catalog = tracker.catalog;
    let id = resolve_instance(&tracker.progress, &args.id)?;

    let mut patch = InstancePatch {
        nickname: args.nickname.as_deref().map(|n| n.trim().to_string()),
        level: validate_level(args.level)?,
        memo: args.memo.clone(),
        is_transferred_to_home: args.home,
        ..Default::default()
    };
    if let Some(origin) = args.origin.as_deref() {
        patch.origin_game = Some(require_game(catalog, origin)?.id.clone());
    }
    if let Some(current) = args.current.as_deref() {
        let game = require_game(catalog, current)?;
        patch.current_game = Some(game.id.clone());
        patch.current_generation = Some(game.generation);
    }
    if patch.is_empty() {
        return Err(CliError::invalid_input(
            "Nothing to change\nHint: Pass --nickname, --origin, --current, --level, --memo or --home.",
        )
        .into());
    }

    tracker.progress.update_owned_instance(&id, patch);

    if !ctx.quiet() {
        let ui_ctx = ctx.ui_context(false, None);
        let label = describe_key(&tracker.progress, &id);
        print(
            &ui_ctx,
            &receipt(&ui_ctx, "Pokemon updated", &[("Pokemon", label.as_str())]),
        );
    }
    Ok(())
}

pub fn handle_remove(ctx: &AppContext, args: &PokemonRemoveArgs) -> anyhow::Result<()> {
    let mut tracker = ctx.open_tracker()?;
    let id = resolve_instance(&tracker.progress, &args.id)?;
    let label = describe_key(&tracker.progress, &id);

    let ui_ctx = ctx.ui_context(false, None);
    let prompt = format!("Remove {} and all of its ribbons?", label);
    if !confirm_destructive(&ui_ctx, &prompt, args.yes)? {
        print(&ui_ctx, "Cancelled.");
        return Ok(());
    }

    tracker.progress.remove_owned_instance(&id);
    if ctx.session_active()?.as_deref() == Some(id.as_str()) {
        ctx.set_session_active(None)?;
    }

    if !ctx.quiet() {
        print(
            &ui_ctx,
            &receipt(&ui_ctx, "Pokemon removed", &[("Pokemon", label.as_str())]),
        );
    }
    Ok(())
}

pub fn handle_use(ctx: &AppContext, args: &PokemonUseArgs) -> anyhow::Result<()> {
    let ui_ctx = ctx.ui_context(false, None);

    if args.clear {
        ctx.set_session_active(None)?;
        if !ctx.quiet() {
            print(&ui_ctx, &receipt(&ui_ctx, "Active Pokémon cleared", &[]));
        }
        return Ok(());
    }

    let Some(key_arg) = args.key.as_deref() else {
        match ctx.session_active()? {
            Some(active) => print(&ui_ctx, &kv(&ui_ctx, "Active", &active)),
            None => print(&ui_ctx, &hint(&ui_ctx, "ribbon pokemon use <KEY>")),
        }
        return Ok(());
    };

    let mut tracker = ctx.open_tracker()?;
    let key = focus_key(&mut tracker.progress, key_arg)?;
    ctx.set_session_active(Some(key.clone()))?;

    if !ctx.quiet() {
        let label = describe_key(&tracker.progress, &key);
        print(
            &ui_ctx,
            &receipt(&ui_ctx, "Active Pokémon set", &[("Pokemon", label.as_str())]),
        );
    }
    Ok(())
}
