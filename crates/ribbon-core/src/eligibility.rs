//! Ribbon eligibility rules.
//!
//! `evaluate` decides whether an item can earn a ribbon. Checks run in a
//! fixed order and the first one that decides wins:
//!
//! 1. Items introduced after the ribbon's generation can never earn it.
//! 2. Ribbons without a rule (or with `all`) are open to everything else.
//! 3. `shadow_only` requires a shadow-capable species, and when an owned
//!    instance is known, an origin game from the rule's list.
//! 4. `level_max` never blocks; it attaches an advisory reason instead.
//! 5. Unrecognized rules are treated as permissive.

use serde::Serialize;

use crate::catalog::{is_shadow_capable, load_catalog, EligibilityRule, ItemDetail, Ribbon};
use crate::progress::OwnedInstance;

/// Outcome of an eligibility check.
///
/// `reason` is set when the item is ineligible, or when it is eligible
/// with a caveat the caller should surface as a warning.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Eligibility {
    pub eligible: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl Eligibility {
    pub fn allowed() -> Self {
        Self {
            eligible: true,
            reason: None,
        }
    }

    pub fn denied(reason: impl Into<String>) -> Self {
        Self {
            eligible: false,
            reason: Some(reason.into()),
        }
    }

    pub fn advisory(reason: impl Into<String>) -> Self {
        Self {
            eligible: true,
            reason: Some(reason.into()),
        }
    }

    /// Eligible, but with a warning attached.
    pub fn is_advisory(&self) -> bool {
        self.eligible && self.reason.is_some()
    }
}

/// Decide whether `item` can earn `ribbon`.
///
/// `owned` narrows origin-game checks to a specific instance; without it
/// only species-level rules apply.
pub fn evaluate(item: &ItemDetail, ribbon: &Ribbon, owned: Option<&OwnedInstance>) -> Eligibility {
    if item.generation > ribbon.generation {
        return Eligibility::denied(format!(
            "only items from generation {} or earlier qualify",
            ribbon.generation
        ));
    }

    let Some(rule) = &ribbon.eligibility else {
        return Eligibility::allowed();
    };

    match rule {
        EligibilityRule::All => Eligibility::allowed(),
        EligibilityRule::ShadowOnly { shadow_games } => {
            if !is_shadow_capable(&item.id) {
                return Eligibility::denied("only shadow-type items qualify");
            }
            if let Some(instance) = owned {
                if !shadow_games.is_empty() && !shadow_games.contains(&instance.origin_game) {
                    let catalog = load_catalog();
                    let names: Vec<&str> = shadow_games
                        .iter()
                        .map(|game| catalog.game_name(game))
                        .collect();
                    return Eligibility::denied(format!(
                        "only items originating from {} qualify",
                        names.join("/")
                    ));
                }
            }
            Eligibility::allowed()
        }
        EligibilityRule::LevelMax { max_level } => Eligibility::advisory(format!(
            "advisory: only items at or below level {} may participate",
            max_level
        )),
        EligibilityRule::Unknown => {
            tracing::warn!(ribbon = %ribbon.id, "unrecognized eligibility rule, allowing");
            Eligibility::allowed()
        }
    }
}

/// Rough order in which ribbons should be pursued.
///
/// Level-capped ribbons come first (1) since they close once the item
/// levels past the cap, then contests (2), then everything else (3).
pub fn acquisition_phase(ribbon: &Ribbon) -> u8 {
    if matches!(ribbon.eligibility, Some(EligibilityRule::LevelMax { .. })) {
        1
    } else if ribbon.category == "contest" {
        2
    } else {
        3
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;
    use crate::catalog::load_catalog;

    fn item(id: &str) -> &'static ItemDetail {
        load_catalog().item(id).unwrap()
    }

    fn ribbon(id: &str) -> &'static Ribbon {
        load_catalog().ribbon(id).unwrap()
    }

    fn instance(pokemon_id: &str, origin_game: &str) -> OwnedInstance {
        OwnedInstance {
            id: "inst-1".to_string(),
            pokemon_id: pokemon_id.to_string(),
            nickname: String::new(),
            origin_game: origin_game.to_string(),
            current_game: String::new(),
            current_generation: 3,
            level: 5,
            is_transferred_to_home: false,
            memo: String::new(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_later_generation_is_rejected() {
        let result = evaluate(item("bidoof"), ribbon("champion-hoenn"), None);
        assert!(!result.eligible);
        assert_eq!(
            result.reason.as_deref(),
            Some("only items from generation 3 or earlier qualify")
        );
    }

    #[test]
    fn test_no_rule_is_permissive() {
        let result = evaluate(item("pikachu"), ribbon("champion-hoenn"), None);
        assert_eq!(result, Eligibility::allowed());
    }

    #[test]
    fn test_explicit_all_rule() {
        let open = Ribbon::new("open", "Open", "", 3, &["ruby"], "memory")
            .with_eligibility(EligibilityRule::All);
        assert_eq!(evaluate(item("pikachu"), &open, None), Eligibility::allowed());
    }

    #[test]
    fn test_shadow_only_requires_shadow_species() {
        let result = evaluate(item("pikachu"), ribbon("national-ribbon"), None);
        assert!(!result.eligible);
        assert_eq!(result.reason.as_deref(), Some("only shadow-type items qualify"));

        let result = evaluate(item("makuhita"), ribbon("national-ribbon"), None);
        assert!(result.eligible);
        assert!(result.reason.is_none());
    }

    #[test]
    fn test_shadow_only_checks_origin_game() {
        let wrong_origin = instance("makuhita", "ruby");
        let result = evaluate(item("makuhita"), ribbon("national-ribbon"), Some(&wrong_origin));
        assert!(!result.eligible);
        assert_eq!(
            result.reason.as_deref(),
            Some("only items originating from Colosseum/XD qualify")
        );

        let right_origin = instance("makuhita", "colosseum");
        let result = evaluate(item("makuhita"), ribbon("national-ribbon"), Some(&right_origin));
        assert!(result.eligible);
    }

    #[test]
    fn test_shadow_only_without_origin_list() {
        let any_origin = Ribbon::new("shadowy", "Shadowy", "", 3, &["xd"], "memory")
            .shadow_only(&[]);
        let owned = instance("makuhita", "ruby");
        assert!(evaluate(item("makuhita"), &any_origin, Some(&owned)).eligible);
    }

    #[test]
    fn test_level_max_is_advisory() {
        let result = evaluate(item("pikachu"), ribbon("winning-ribbon"), None);
        assert!(result.eligible);
        assert!(result.is_advisory());
        assert!(result.reason.unwrap().contains("50"));
    }

    #[test]
    fn test_unknown_rule_is_permissive() {
        let odd = Ribbon::new("odd", "Odd", "", 8, &["sword"], "event")
            .with_eligibility(EligibilityRule::Unknown);
        assert_eq!(evaluate(item("pikachu"), &odd, None), Eligibility::allowed());
    }

    #[test]
    fn test_generation_gate_precedes_rules() {
        let result = evaluate(item("sprigatito"), ribbon("national-ribbon"), None);
        assert!(result.reason.unwrap().contains("generation 3"));
    }

    #[test]
    fn test_generation_gate_holds_for_whole_catalog() {
        let catalog = load_catalog();
        for item in catalog.items() {
            for ribbon in catalog.ribbons() {
                let result = evaluate(item, ribbon, None);
                if item.generation > ribbon.generation {
                    assert!(!result.eligible, "{} -> {}", item.id, ribbon.id);
                } else if matches!(ribbon.eligibility, None | Some(EligibilityRule::All)) {
                    assert!(result.eligible, "{} -> {}", item.id, ribbon.id);
                    assert!(result.reason.is_none(), "{} -> {}", item.id, ribbon.id);
                }
            }
        }
    }

    #[test]
    fn test_shadow_rules_hold_for_whole_catalog() {
        let catalog = load_catalog();
        let shadow_ribbons = catalog
            .ribbons()
            .iter()
            .filter(|r| matches!(r.eligibility, Some(EligibilityRule::ShadowOnly { .. })));
        for ribbon in shadow_ribbons {
            for item in catalog.items() {
                if item.generation > ribbon.generation {
                    continue;
                }
                let species_only = evaluate(item, ribbon, None);
                assert_eq!(
                    species_only.eligible,
                    is_shadow_capable(&item.id),
                    "{} -> {}",
                    item.id,
                    ribbon.id
                );

                let wrong_origin = instance(&item.id, "ruby");
                assert!(!evaluate(item, ribbon, Some(&wrong_origin)).eligible);
            }
        }
    }

    #[test]
    fn test_acquisition_phase() {
        assert_eq!(acquisition_phase(ribbon("winning-ribbon")), 1);
        assert_eq!(acquisition_phase(ribbon("cool-ribbon-master")), 2);
        assert_eq!(acquisition_phase(ribbon("champion-hoenn")), 3);
    }
}
