//! Static reference data: games, ribbons, and species.
//!
//! The bundled catalog is built once on first access and shared for the
//! life of the process. Callers that need a custom catalog (tests, tools)
//! can build one with [`Catalog::new`].

mod games;
mod items;
mod ribbons;
mod shadow;
pub mod types;

use std::collections::BTreeSet;

use once_cell::sync::Lazy;

pub use shadow::is_shadow_capable;
pub use types::{EligibilityRule, Game, ItemDetail, Ribbon, RibbonKind};

static BUNDLED: Lazy<Catalog> =
    Lazy::new(|| Catalog::new(games::games(), ribbons::ribbons(), items::items()));

/// The bundled catalog.
pub fn load_catalog() -> &'static Catalog {
    &BUNDLED
}

/// Known category ids and their display labels.
const CATEGORY_LABELS: &[(&str, &str)] = &[
    ("champion", "Champion"),
    ("contest", "Contest"),
    ("battle", "Battle Facility"),
    ("memory", "Memorial"),
    ("event", "Event"),
    ("mark", "Mark"),
];

/// Display label for a category id. Unknown ids are returned unchanged.
pub fn category_label(category: &str) -> &str {
    CATEGORY_LABELS
        .iter()
        .find(|(id, _)| *id == category)
        .map(|(_, label)| *label)
        .unwrap_or(category)
}

/// Every category id the catalog knows a label for.
pub fn categories() -> impl Iterator<Item = &'static str> {
    CATEGORY_LABELS.iter().map(|(id, _)| *id)
}

#[derive(Debug, Clone, Default)]
pub struct Catalog {
    games: Vec<Game>,
    ribbons: Vec<Ribbon>,
    items: Vec<ItemDetail>,
}

impl Catalog {
    pub fn new(games: Vec<Game>, ribbons: Vec<Ribbon>, items: Vec<ItemDetail>) -> Self {
        Self {
            games,
            ribbons,
            items,
        }
    }

    pub fn games(&self) -> &[Game] {
        &self.games
    }

    /// All ribbons in definition order (by introducing generation, marks last).
    pub fn ribbons(&self) -> &[Ribbon] {
        &self.ribbons
    }

    pub fn items(&self) -> &[ItemDetail] {
        &self.items
    }

    pub fn game(&self, id: &str) -> Option<&Game> {
        self.games.iter().find(|game| game.id == id)
    }

    pub fn ribbon(&self, id: &str) -> Option<&Ribbon> {
        self.ribbons.iter().find(|ribbon| ribbon.id == id)
    }

    pub fn item(&self, id: &str) -> Option<&ItemDetail> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Short display name of a game, or the id itself when unknown.
    pub fn game_name<'a>(&'a self, id: &'a str) -> &'a str {
        self.game(id).map(|game| game.short_name.as_str()).unwrap_or(id)
    }

    pub fn ribbons_in_generation(&self, generation: u32) -> impl Iterator<Item = &Ribbon> {
        self.ribbons
            .iter()
            .filter(move |ribbon| ribbon.generation == generation)
    }

    /// Distinct ribbon generations, ascending.
    pub fn generations(&self) -> Vec<u32> {
        self.ribbons
            .iter()
            .map(|ribbon| ribbon.generation)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }
}
