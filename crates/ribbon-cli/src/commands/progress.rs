use ribbon_core::{acquisition_phase, load_catalog, Eligibility, GenerationProgress, ProgressStore};
use serde_json::json;

use crate::app::AppContext;
use crate::cli::{CheckArgs, KeyArgs, ResetArgs, ToggleArgs};
use crate::errors::CliError;
use crate::helpers::{confirm_destructive, focus_key, require_ribbon};
use crate::output::{print_json, progress_json, ribbon_json};
use crate::ui::format::{progress_bar, short_id};
use crate::ui::{
    badge, blank_line, header, hint, kv, print, receipt, simple_table, table, Badge, Column,
};

/// Human label for a progress key: nickname and species for instances,
/// species name for catalog ids, the raw key otherwise.
pub fn describe_key(store: &ProgressStore<'_>, key: &str) -> String {
    if let Some(instance) = store.instance(key) {
        let species = store
            .catalog()
            .item(&instance.pokemon_id)
            .map(|item| item.name.as_str())
            .unwrap_or(instance.pokemon_id.as_str());
        if instance.display_name() == instance.pokemon_id {
            return format!("{} ({})", species, short_id(&instance.id));
        }
        return format!(
            "{} the {} ({})",
            instance.display_name(),
            species,
            short_id(&instance.id)
        );
    }
    match store.catalog().item(key) {
        Some(item) => format!("{} #{}", item.name, item.display_number()),
        None => key.to_string(),
    }
}

pub fn eligibility_label(verdict: &Eligibility) -> &'static str {
    if !verdict.eligible {
        "no"
    } else if verdict.is_advisory() {
        "advisory"
    } else {
        "yes"
    }
}

/// The KEY argument, or the Pokémon remembered by `ribbon pokemon use`.
pub fn key_or_active(ctx: &AppContext, key: Option<&str>) -> anyhow::Result<String> {
    if let Some(key) = key {
        return Ok(key.to_string());
    }
    ctx.session_active()?.ok_or_else(|| {
        CliError::invalid_input(
            "No Pokémon given\nHint: Pass a KEY or run `ribbon pokemon use <KEY>` first.",
        )
        .into()
    })
}

pub fn handle_toggle(ctx: &AppContext, args: &ToggleArgs) -> anyhow::Result<()> {
    let mut tracker = ctx.open_tracker()?;
    let key = focus_key(&mut tracker.progress, &args.key)?;
    let ribbon = require_ribbon(tracker.catalog, &args.ribbon)?;
    let verdict = tracker.progress.compute_eligibility(ribbon);
    let had = tracker.progress.has_ribbon(&key, &ribbon.id);
    let label = describe_key(&tracker.progress, &key);

    if !had && !verdict.eligible && !args.force {
        return Err(CliError::invalid_input(format!(
            "{} cannot earn the {}: {}\nHint: Pass --force to record it anyway.",
            label,
            ribbon.name,
            verdict.reason.as_deref().unwrap_or("not eligible")
        ))
        .into());
    }

    let obtained = tracker.progress.toggle_ribbon(&key, &ribbon.id);

    if args.json {
        return print_json(&json!({
            "key": key,
            "ribbon": ribbon.id,
            "obtained": obtained,
            "eligibility": verdict,
        }));
    }
    if ctx.quiet() {
        return Ok(());
    }

    let ui_ctx = ctx.ui_context(false, None);
    let title = if obtained {
        "Ribbon added"
    } else {
        "Ribbon removed"
    };
    print(
        &ui_ctx,
        &receipt(
            &ui_ctx,
            title,
            &[("Pokemon", label.as_str()), ("Ribbon", ribbon.name.as_str())],
        ),
    );
    if obtained {
        if let Some(reason) = verdict.reason.as_deref() {
            let kind = if verdict.eligible {
                Badge::Warn
            } else {
                Badge::Err
            };
            print(&ui_ctx, &badge(&ui_ctx, kind, reason));
        }
    }
    Ok(())
}

pub fn handle_reset(ctx: &AppContext, args: &ResetArgs) -> anyhow::Result<()> {
    let key_arg = key_or_active(ctx, args.key.as_deref())?;
    let mut tracker = ctx.open_tracker()?;
    let key = focus_key(&mut tracker.progress, &key_arg)?;
    let label = describe_key(&tracker.progress, &key);
    let count = tracker.progress.obtained(&key).map_or(0, |set| set.len());

    let ui_ctx = ctx.ui_context(false, None);
    let prompt = format!("Clear {} ribbon(s) recorded for {}?", count, label);
    if !confirm_destructive(&ui_ctx, &prompt, args.yes)? {
        print(&ui_ctx, "Cancelled.");
        return Ok(());
    }

    tracker.progress.reset_progress(&key);

    if !ctx.quiet() {
        let cleared = count.to_string();
        print(
            &ui_ctx,
            &receipt(
                &ui_ctx,
                "Progress reset",
                &[("Pokemon", label.as_str()), ("Cleared", cleared.as_str())],
            ),
        );
    }
    Ok(())
}

pub fn handle_status(ctx: &AppContext, args: &KeyArgs) -> anyhow::Result<()> {
    let key_arg = key_or_active(ctx, args.key.as_deref())?;
    let mut tracker = ctx.open_tracker()?;
    let key = focus_key(&mut tracker.progress, &key_arg)?;
    let store = &tracker.progress;
    let label = describe_key(store, &key);
    let progress = store.generation_progress_for(&key);

    let total = progress
        .values()
        .fold(GenerationProgress::default(), |acc, entry| GenerationProgress {
            obtained: acc.obtained + entry.obtained,
            total: acc.total + entry.total,
        });

    let ui_ctx = ctx.ui_context(args.output.json, args.output.format);
    if ui_ctx.mode.is_json() {
        return print_json(&json!({
            "key": key,
            "pokemon": label,
            "generations": progress_json(&progress),
            "total": {
                "obtained": total.obtained,
                "total": total.total,
                "percent": total.percent(),
            },
        }));
    }

    print(&ui_ctx, &header(&ui_ctx, "status", Some(&label)));
    blank_line(&ui_ctx);
    let columns = [
        Column::new("Gen"),
        Column::new("Obtained"),
        Column::new("Total"),
        Column::new("%"),
        Column::new("Progress"),
    ];
    let rows: Vec<Vec<String>> = progress
        .iter()
        .map(|(generation, entry)| {
            vec![
                generation.to_string(),
                entry.obtained.to_string(),
                entry.total.to_string(),
                entry.percent().to_string(),
                progress_bar(entry.percent(), ui_ctx.bar_width(), ui_ctx.unicode),
            ]
        })
        .collect();
    print(&ui_ctx, &table(&ui_ctx, &columns, &rows));
    blank_line(&ui_ctx);
    print(
        &ui_ctx,
        &kv(
            &ui_ctx,
            "Total",
            &format!("{}/{} ({}%)", total.obtained, total.total, total.percent()),
        ),
    );
    Ok(())
}

pub fn handle_check(ctx: &AppContext, args: &CheckArgs) -> anyhow::Result<()> {
    let mut tracker = ctx.open_tracker()?;
    let key = focus_key(&mut tracker.progress, &args.key)?;
    let ribbon = require_ribbon(tracker.catalog, &args.ribbon)?;
    let store = &tracker.progress;
    let verdict = store.compute_eligibility(ribbon);
    let obtained = store.has_ribbon(&key, &ribbon.id);

    if args.json {
        return print_json(&json!({
            "key": key,
            "ribbon": ribbon.id,
            "obtained": obtained,
            "eligible": verdict.eligible,
            "reason": verdict.reason,
        }));
    }

    let ui_ctx = ctx.ui_context(false, None);
    let label = describe_key(store, &key);
    let (kind, message) = match (verdict.eligible, verdict.is_advisory()) {
        (true, false) => (Badge::Ok, format!("{} can earn the {}", label, ribbon.name)),
        (true, true) => (
            Badge::Warn,
            format!("{} can earn the {}, with a caveat", label, ribbon.name),
        ),
        (false, _) => (
            Badge::Err,
            format!("{} cannot earn the {}", label, ribbon.name),
        ),
    };
    print(&ui_ctx, &badge(&ui_ctx, kind, &message));
    if let Some(reason) = verdict.reason.as_deref() {
        print(&ui_ctx, &kv(&ui_ctx, "Reason", reason));
    }
    print(
        &ui_ctx,
        &kv(&ui_ctx, "Obtained", if obtained { "yes" } else { "no" }),
    );
    if let Some(requirements) = ribbon.requirements.as_deref() {
        print(&ui_ctx, &kv(&ui_ctx, "Requirements", requirements));
    }
    Ok(())
}

fn phase_label(phase: u8) -> &'static str {
    match phase {
        1 => "before leveling",
        2 => "contests",
        _ => "anytime",
    }
}

pub fn handle_roadmap(ctx: &AppContext, args: &KeyArgs) -> anyhow::Result<()> {
    let key_arg = key_or_active(ctx, args.key.as_deref())?;
    let mut tracker = ctx.open_tracker()?;
    let key = focus_key(&mut tracker.progress, &key_arg)?;
    let store = &tracker.progress;

    let mut blocked = 0usize;
    let mut steps: Vec<_> = load_catalog()
        .ribbons()
        .iter()
        .filter(|ribbon| !store.has_ribbon(&key, &ribbon.id))
        .filter_map(|ribbon| {
            let verdict = store.compute_eligibility(ribbon);
            if verdict.eligible {
                Some((acquisition_phase(ribbon), ribbon, verdict))
            } else {
                blocked += 1;
                None
            }
        })
        .collect();
    // Stable: catalog order is kept within a phase and generation.
    steps.sort_by_key(|(phase, ribbon, _)| (*phase, ribbon.generation));

    let ui_ctx = ctx.ui_context(args.output.json, args.output.format);
    if ui_ctx.mode.is_json() {
        let values: Vec<_> = steps
            .iter()
            .map(|(phase, ribbon, verdict)| {
                json!({
                    "phase": phase,
                    "phaseLabel": phase_label(*phase),
                    "ribbon": ribbon_json(ribbon, Some(false), Some(verdict)),
                })
            })
            .collect();
        return print_json(&json!({
            "key": key,
            "steps": values,
            "blocked": blocked,
        }));
    }

    let label = describe_key(store, &key);
    print(&ui_ctx, &header(&ui_ctx, "roadmap", Some(&label)));
    blank_line(&ui_ctx);
    if steps.is_empty() {
        print(&ui_ctx, &badge(&ui_ctx, Badge::Ok, "Nothing left to earn"));
    } else {
        let columns = [
            Column::new("Phase"),
            Column::new("Gen"),
            Column::new("ID"),
            Column::new("Name"),
            Column::new("Note"),
        ];
        let rows: Vec<Vec<String>> = steps
            .iter()
            .map(|(phase, ribbon, verdict)| {
                vec![
                    phase_label(*phase).to_string(),
                    ribbon.generation.to_string(),
                    ribbon.id.clone(),
                    ribbon.name.clone(),
                    verdict.reason.clone().unwrap_or_default(),
                ]
            })
            .collect();
        print(&ui_ctx, &simple_table(&ui_ctx, &columns, &rows));
    }
    if blocked > 0 {
        blank_line(&ui_ctx);
        print(
            &ui_ctx,
            &hint(
                &ui_ctx,
                &format!(
                    "{} ribbon(s) are out of reach for this Pokémon; see `ribbon ribbons --for {}`",
                    blocked, key
                ),
            ),
        );
    }
    Ok(())
}
