//! Species that can appear as Shadow Pokémon in Colosseum or XD.

use std::collections::HashSet;

use once_cell::sync::Lazy;

const SHADOW_SPECIES: &[&str] = &[
    // Colosseum
    "makuhita",
    "bayleef",
    "quilava",
    "croconaw",
    "teddiursa",
    "ledyba",
    "gligar",
    "skarmory",
    "houndour",
    "heracross",
    "sneasel",
    "misdreavus",
    "ursaring",
    "entei",
    "raikou",
    "suicune",
    "tyranitar",
    "metagross",
    // XD
    "togepi",
    "zubat",
    "seedot",
    "spheal",
    "shroomish",
    "swablu",
    "poochyena",
    "zangoose",
    "snorlax",
    "dragonite",
    "lugia",
];

static SHADOW_SET: Lazy<HashSet<&'static str>> =
    Lazy::new(|| SHADOW_SPECIES.iter().copied().collect());

/// Whether the species can be obtained as a Shadow Pokémon.
pub fn is_shadow_capable(item_id: &str) -> bool {
    SHADOW_SET.contains(item_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_shadow_species() {
        assert!(is_shadow_capable("makuhita"));
        assert!(is_shadow_capable("lugia"));
        assert!(!is_shadow_capable("pikachu"));
        assert!(!is_shadow_capable(""));
    }

    #[test]
    fn test_every_shadow_species_is_in_catalog() {
        let catalog = crate::catalog::load_catalog();
        let missing: Vec<_> = SHADOW_SPECIES
            .iter()
            .filter(|id| catalog.item(id).is_none())
            .collect();
        assert!(missing.is_empty(), "missing species: {:?}", missing);
    }
}
