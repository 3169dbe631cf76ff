//! Parsing and lookup helpers for user-supplied identifiers.

use ribbon_core::catalog::{Game, ItemDetail, Ribbon};
use ribbon_core::{Catalog, Hardware, OwnedInstance, ProgressStore, RibbonStatus};

use crate::errors::CliError;

/// What a KEY argument refers to.
#[derive(Debug, Clone, PartialEq)]
pub enum Target<'c> {
    /// A registered instance, by full id
    Instance(String),
    /// A catalog species tracked without an instance
    Species(&'c ItemDetail),
    /// A progress key with no catalog entry (e.g. from a legacy import)
    Raw(String),
}

/// Resolve a KEY: exact instance id, species id, existing progress key,
/// then a unique instance id prefix.
pub fn resolve_target<'c>(store: &ProgressStore<'c>, key: &str) -> anyhow::Result<Target<'c>> {
    let key = key.trim();
    if key.is_empty() {
        return Err(CliError::invalid_input("KEY cannot be empty").into());
    }

    if store.instance(key).is_some() {
        return Ok(Target::Instance(key.to_string()));
    }

    if let Some(item) = store.catalog().item(key) {
        return Ok(Target::Species(item));
    }

    if store.obtained(key).is_some() {
        return Ok(Target::Raw(key.to_string()));
    }

    let matches: Vec<&OwnedInstance> = store
        .instances()
        .iter()
        .filter(|instance| instance.id.starts_with(key))
        .collect();
    match matches.as_slice() {
        [only] => return Ok(Target::Instance(only.id.clone())),
        [] => {}
        _ => {
            return Err(CliError::invalid_input(format!(
                "Ambiguous id prefix '{}' matches {} Pokémon; use more characters",
                key,
                matches.len()
            ))
            .into())
        }
    }

    Err(CliError::not_found(
        format!("No Pokémon or species matches '{}'", key),
        "Hint: Run `ribbon pokemon list` or `ribbon items` to find ids.",
    )
    .into())
}

/// Resolve an id that must name a registered instance.
pub fn resolve_instance(store: &ProgressStore<'_>, key: &str) -> anyhow::Result<String> {
    let hint = if store.instances().is_empty() {
        "Hint: Run `ribbon pokemon add` to register one."
    } else {
        "Hint: Run `ribbon pokemon list` to see instance ids."
    };
    let not_found = || CliError::not_found(format!("No owned Pokémon matches '{}'", key), hint);

    match resolve_target(store, key) {
        Ok(Target::Instance(id)) => Ok(id),
        Ok(_) => Err(not_found().into()),
        Err(err) => match err.downcast_ref::<CliError>() {
            Some(CliError::InvalidInput(_)) => Err(err),
            _ => Err(not_found().into()),
        },
    }
}

/// Resolve a KEY, make it the store's current selection, and return the
/// progress key it maps to.
pub fn focus_key(store: &mut ProgressStore<'_>, key: &str) -> anyhow::Result<String> {
    match resolve_target(store, key)? {
        Target::Instance(id) => {
            store.switch_active_instance(&id);
            Ok(id)
        }
        Target::Species(item) => {
            store.select_item(item);
            Ok(item.id.clone())
        }
        Target::Raw(raw) => Ok(raw),
    }
}

pub fn require_ribbon<'c>(catalog: &'c Catalog, id: &str) -> anyhow::Result<&'c Ribbon> {
    catalog.ribbon(id.trim()).ok_or_else(|| {
        CliError::not_found(
            format!("Ribbon '{}' not found", id),
            "Hint: Run `ribbon ribbons --search <text>` to find ribbon ids.",
        )
        .into()
    })
}

pub fn require_game<'c>(catalog: &'c Catalog, id: &str) -> anyhow::Result<&'c Game> {
    catalog.game(id.trim()).ok_or_else(|| {
        CliError::not_found(
            format!("Game '{}' not found", id),
            "Hint: Run `ribbon games` to see game ids.",
        )
        .into()
    })
}

pub fn parse_hardware(value: &str) -> anyhow::Result<Hardware> {
    value
        .parse::<Hardware>()
        .map_err(|e| CliError::invalid_input(e.to_string()).into())
}

pub fn parse_status(value: &str) -> anyhow::Result<RibbonStatus> {
    value
        .parse::<RibbonStatus>()
        .map_err(|e| CliError::invalid_input(e.to_string()).into())
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use ribbon_core::{load_catalog, MemoryStore, NewInstance};

    use super::*;

    fn store() -> ProgressStore<'static> {
        ProgressStore::load(load_catalog(), Arc::new(MemoryStore::new()))
    }

    #[test]
    fn test_resolve_species_and_instance() {
        let mut store = store();
        let id = store.register_owned_instance(NewInstance::new("makuhita", "xd"));

        assert_eq!(
            resolve_target(&store, &id).unwrap(),
            Target::Instance(id.clone())
        );
        assert_eq!(
            resolve_target(&store, &id[..8]).unwrap(),
            Target::Instance(id.clone())
        );
        match resolve_target(&store, "makuhita").unwrap() {
            Target::Species(item) => assert_eq!(item.dex_number, 296),
            other => panic!("unexpected target: {:?}", other),
        }
    }

    #[test]
    fn test_resolve_raw_progress_key() {
        let mut store = store();
        store.toggle_ribbon("missingno", "effort-ribbon");
        assert_eq!(
            resolve_target(&store, "missingno").unwrap(),
            Target::Raw("missingno".to_string())
        );
    }

    #[test]
    fn test_raw_key_wins_over_id_prefix() {
        let mut store = store();
        let id = store.register_owned_instance(NewInstance::new("eevee", "xd"));
        let short = &id[..2];
        assert_eq!(
            resolve_target(&store, short).unwrap(),
            Target::Instance(id.clone())
        );

        store.toggle_ribbon(short, "effort-ribbon");
        assert_eq!(
            resolve_target(&store, short).unwrap(),
            Target::Raw(short.to_string())
        );
    }

    #[test]
    fn test_unknown_key_is_not_found() {
        let err = resolve_target(&store(), "agumon").unwrap_err();
        let cli_err = err.downcast_ref::<CliError>().expect("cli error");
        assert!(matches!(cli_err, CliError::NotFound { .. }));
    }

    #[test]
    fn test_focus_species_selects_item() {
        let mut store = store();
        let key = focus_key(&mut store, "eevee").unwrap();
        assert_eq!(key, "eevee");
        assert_eq!(store.active_key(), Some("eevee"));
        assert!(store.active_instance().is_none());
    }

    #[test]
    fn test_focus_instance_activates_it() {
        let mut store = store();
        let id = store.register_owned_instance(NewInstance::new("eevee", "xd"));
        let key = focus_key(&mut store, &id).unwrap();
        assert_eq!(key, id);
        assert_eq!(store.active_instance().map(|i| i.id.as_str()), Some(id.as_str()));
        assert_eq!(store.selected_item().map(|i| i.id.as_str()), Some("eevee"));
    }

    #[test]
    fn test_parse_hardware_rejects_unknown() {
        assert_eq!(parse_hardware("3ds").unwrap(), Hardware::N3ds);
        assert!(parse_hardware("gamecube").is_err());
    }

    #[test]
    fn test_require_ribbon() {
        assert!(require_ribbon(load_catalog(), "national-ribbon").is_ok());
        assert!(require_ribbon(load_catalog(), "nope").is_err());
    }
}
