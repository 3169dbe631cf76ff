//! JSON output formatting.

use std::collections::BTreeMap;

use ribbon_core::catalog::{category_label, ItemDetail, Ribbon};
use ribbon_core::{Catalog, Eligibility, GenerationProgress, ImportSummary, OwnedInstance};
use serde_json::{json, Value};

/// Convert an owned instance to JSON, resolving display names.
pub fn instance_json(instance: &OwnedInstance, catalog: &Catalog) -> Value {
    let species = catalog
        .item(&instance.pokemon_id)
        .map(|item| item.name.clone());
    json!({
        "id": instance.id,
        "pokemonId": instance.pokemon_id,
        "species": species,
        "nickname": instance.nickname,
        "originGame": instance.origin_game,
        "originGameName": catalog.game_name(&instance.origin_game),
        "currentGame": instance.current_game,
        "currentGeneration": instance.current_generation,
        "level": instance.level,
        "isTransferredToHome": instance.is_transferred_to_home,
        "memo": instance.memo,
        "createdAt": instance.created_at,
    })
}

pub fn item_json(item: &ItemDetail) -> Value {
    json!({
        "id": item.id,
        "dexNumber": item.dex_number,
        "name": item.name,
        "types": item.types,
        "generation": item.generation,
        "shadowCapable": ribbon_core::catalog::is_shadow_capable(&item.id),
    })
}

/// Convert a ribbon to JSON. `obtained` and `eligibility` are only present
/// when a Pokémon is being viewed.
pub fn ribbon_json(
    ribbon: &Ribbon,
    obtained: Option<bool>,
    eligibility: Option<&Eligibility>,
) -> Value {
    let mut value = json!({
        "id": ribbon.id,
        "name": ribbon.name,
        "description": ribbon.description,
        "generation": ribbon.generation,
        "games": ribbon.games,
        "category": ribbon.category,
        "categoryLabel": category_label(&ribbon.category),
        "type": ribbon.kind,
        "requirements": ribbon.requirements,
        "transferable": ribbon.transferable,
    });
    if let Some(map) = value.as_object_mut() {
        if let Some(obtained) = obtained {
            map.insert("obtained".to_string(), Value::Bool(obtained));
        }
        if let Some(eligibility) = eligibility {
            map.insert("eligibility".to_string(), json!(eligibility));
        }
    }
    value
}

/// Per-generation completion as an array ordered by generation.
pub fn progress_json(progress: &BTreeMap<u32, GenerationProgress>) -> Value {
    Value::Array(
        progress
            .iter()
            .map(|(generation, entry)| {
                json!({
                    "generation": generation,
                    "obtained": entry.obtained,
                    "total": entry.total,
                    "percent": entry.percent(),
                })
            })
            .collect(),
    )
}

pub fn summary_json(summary: &ImportSummary) -> Value {
    json!({
        "progressKeys": summary.progress_keys,
        "instances": summary.instances,
        "legacy": summary.legacy,
    })
}

/// Print a JSON value to stdout.
pub fn print_json(value: &Value) -> anyhow::Result<()> {
    let text = serde_json::to_string_pretty(value)
        .map_err(|e| anyhow::anyhow!("JSON error: {}", e))?;
    println!("{}", text);
    Ok(())
}

#[cfg(test)]
mod tests {
    use ribbon_core::load_catalog;

    use super::*;

    #[test]
    fn test_ribbon_json_without_viewer() {
        let ribbon = load_catalog().ribbon("national-ribbon").unwrap();
        let value = ribbon_json(ribbon, None, None);
        assert_eq!(value["id"], "national-ribbon");
        assert_eq!(value["generation"], 3);
        assert!(value.get("obtained").is_none());
        assert!(value.get("eligibility").is_none());
    }

    #[test]
    fn test_ribbon_json_with_eligibility() {
        let ribbon = load_catalog().ribbon("national-ribbon").unwrap();
        let verdict = Eligibility::denied("only shadow-type items qualify");
        let value = ribbon_json(ribbon, Some(false), Some(&verdict));
        assert_eq!(value["obtained"], false);
        assert_eq!(value["eligibility"]["eligible"], false);
        assert_eq!(
            value["eligibility"]["reason"],
            "only shadow-type items qualify"
        );
    }

    #[test]
    fn test_progress_json_is_ordered() {
        let mut progress = BTreeMap::new();
        progress.insert(4, GenerationProgress { obtained: 1, total: 3 });
        progress.insert(3, GenerationProgress { obtained: 2, total: 3 });
        let value = progress_json(&progress);
        assert_eq!(value[0]["generation"], 3);
        assert_eq!(value[0]["percent"], 67);
        assert_eq!(value[1]["percent"], 33);
    }
}
