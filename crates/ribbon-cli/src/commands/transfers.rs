use ribbon_core::transfer::{self, TransferRoute};
use ribbon_core::Hardware;
use serde_json::json;

use crate::app::AppContext;
use crate::cli::TransfersArgs;
use crate::output::print_json;
use crate::ui::theme::ARROW;
use crate::ui::{badge, blank_line, divider, header, kv, print, Badge};

pub fn handle_transfers(ctx: &AppContext, args: &TransfersArgs) -> anyhow::Result<()> {
    let routes: Vec<&TransferRoute> = match (args.from, args.to) {
        (Some(from), Some(to)) => transfer::routes_between(from, to).collect(),
        (Some(from), None) => transfer::routes_from(from).collect(),
        (None, Some(to)) => transfer::routes()
            .iter()
            .filter(|route| route.to_generation == to)
            .collect(),
        (None, None) => transfer::routes().iter().collect(),
    };
    let routes: Vec<&TransferRoute> = routes
        .into_iter()
        .filter(|route| !args.active || !route.is_deprecated)
        .collect();

    let ui_ctx = ctx.ui_context(args.output.json, args.output.format);
    if ui_ctx.mode.is_json() {
        return print_json(&json!(routes));
    }

    print(&ui_ctx, &header(&ui_ctx, "transfers", None));
    for route in routes {
        blank_line(&ui_ctx);
        let title = format!(
            "Gen {} {} Gen {}: {}",
            route.from_generation,
            ui_ctx.symbol(ARROW),
            route.to_generation,
            route.method_name
        );
        if route.is_deprecated {
            print(&ui_ctx, &badge(&ui_ctx, Badge::Warn, &title));
        } else {
            print(&ui_ctx, &badge(&ui_ctx, Badge::Info, &title));
        }
        print(&ui_ctx, &kv(&ui_ctx, "Route", &route.id));

        let hardware: Vec<&str> = route.hardware_required.iter().map(Hardware::label).collect();
        if !hardware.is_empty() {
            print(&ui_ctx, &kv(&ui_ctx, "Hardware", &hardware.join(", ")));
        }
        if let Some(note) = route.hardware_note.as_deref() {
            print(&ui_ctx, &kv(&ui_ctx, "Hardware Note", note));
        }
        if !route.software_required.is_empty() {
            print(
                &ui_ctx,
                &kv(&ui_ctx, "Software", &route.software_required.join(", ")),
            );
        }
        if let Some(limit) = route.daily_limit {
            print(&ui_ctx, &kv(&ui_ctx, "Daily Limit", &limit.to_string()));
        }
        for restriction in &route.restrictions {
            print(&ui_ctx, &format!("  - {}", restriction));
        }
        if let Some(note) = route.deprecation_note.as_deref() {
            print(&ui_ctx, &kv(&ui_ctx, "Deprecated", note));
        }
    }
    blank_line(&ui_ctx);
    print(&ui_ctx, &divider(&ui_ctx));
    Ok(())
}
