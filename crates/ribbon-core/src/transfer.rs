//! Cross-generation transfer routes.
//!
//! A read-only table of the ways an item can be moved forward between
//! generations, with the hardware and software each route needs.

use once_cell::sync::Lazy;
use serde::Serialize;

use crate::setup::Hardware;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferRoute {
    pub id: String,
    pub from_generation: u32,
    pub to_generation: u32,
    pub method_name: String,
    pub hardware_required: Vec<Hardware>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hardware_note: Option<String>,
    /// Game ids that must be owned on the sending side
    pub software_required: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub daily_limit: Option<u32>,
    pub restrictions: Vec<String>,
    pub is_deprecated: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deprecation_note: Option<String>,
}

impl TransferRoute {
    fn new(id: &str, from_generation: u32, to_generation: u32, method_name: &str) -> Self {
        Self {
            id: id.to_string(),
            from_generation,
            to_generation,
            method_name: method_name.to_string(),
            hardware_required: Vec::new(),
            hardware_note: None,
            software_required: Vec::new(),
            daily_limit: None,
            restrictions: Vec::new(),
            is_deprecated: false,
            deprecation_note: None,
        }
    }

    fn hardware(mut self, hardware: &[Hardware], note: Option<&str>) -> Self {
        self.hardware_required = hardware.to_vec();
        self.hardware_note = note.map(str::to_string);
        self
    }

    fn software(mut self, games: &[&str]) -> Self {
        self.software_required = games.iter().map(|g| g.to_string()).collect();
        self
    }

    fn daily_limit(mut self, limit: u32) -> Self {
        self.daily_limit = Some(limit);
        self
    }

    fn restrictions(mut self, restrictions: &[&str]) -> Self {
        self.restrictions = restrictions.iter().map(|r| r.to_string()).collect();
        self
    }

    fn deprecated(mut self, note: &str) -> Self {
        self.is_deprecated = true;
        self.deprecation_note = Some(note.to_string());
        self
    }
}

static ROUTES: Lazy<Vec<TransferRoute>> = Lazy::new(|| {
    vec![
        TransferRoute::new("gen3-to-gen4", 3, 4, "Pal Park")
            .hardware(
                &[Hardware::DsLite],
                Some("Original DS / DS Lite only. DSi and 3DS lack the GBA slot."),
            )
            .software(&["ruby", "sapphire", "emerald", "firered", "leafgreen"])
            .daily_limit(6)
            .restrictions(&[
                "One-way: items cannot return to Gen 3",
                "Up to 6 items per day",
                "Insert the GBA cartridge into slot 2 of the DS",
                "Migrated items arrive in the party automatically at Pal Park",
            ]),
        TransferRoute::new("gen4-to-gen5", 4, 5, "Poké Transfer")
            .hardware(
                &[Hardware::DsLite, Hardware::Dsi],
                Some("Two DS systems are needed: one for the Gen 4 game, one for Gen 5."),
            )
            .software(&["diamond", "pearl", "platinum", "heartgold", "soulsilver"])
            .restrictions(&[
                "One-way",
                "The Poké Transfer Lab must be unlocked through the story",
                "Transferred items are caught in the lab's minigame",
                "Up to 6 items per session",
            ]),
        TransferRoute::new("gen5-to-bank", 5, 6, "Pokémon Bank")
            .hardware(&[Hardware::N3ds], None)
            .software(&["black", "white", "black2", "white2"])
            .restrictions(&[
                "One-way",
                "Use Poké Transporter (free) to move items from Gen 5 into Bank",
                "From Bank, move to Gen 6/7 games or on to HOME",
            ])
            .deprecated(
                "Pokémon Bank left the Nintendo eShop in March 2023. Only systems that \
                 already downloaded it can use it; transfer as soon as possible.",
            ),
        TransferRoute::new("bank-to-home", 7, 8, "Pokémon HOME (move from Bank)")
            .hardware(&[Hardware::N3ds, Hardware::Switch], None)
            .restrictions(&[
                "Requires the mobile or Switch version of Pokémon HOME",
                "Bank and HOME must be linked",
                "Items moved to HOME cannot return to Bank",
                "A Premium plan raises the number of items that can be stored",
            ]),
        TransferRoute::new("gen8-to-gen9", 8, 9, "Pokémon HOME")
            .hardware(&[Hardware::Switch], None)
            .software(&["sword", "shield", "legends_arceus"])
            .restrictions(&[
                "Two-way through HOME (Gen 9 to HOME also works)",
                "Species missing from the Gen 9 dex cannot be sent",
            ]),
        TransferRoute::new("frlg-switch-to-home", 3, 8, "Pokémon HOME direct link (Switch FRLG)")
            .hardware(&[Hardware::Switch], None)
            .software(&["firered_switch", "leafgreen_switch"])
            .restrictions(&[
                "A Pokémon HOME Premium plan may be required",
                "Requires the Switch release of FireRed or LeafGreen",
            ]),
    ]
});

/// Every known route, in table order.
pub fn routes() -> &'static [TransferRoute] {
    &ROUTES
}

pub fn route(id: &str) -> Option<&'static TransferRoute> {
    ROUTES.iter().find(|route| route.id == id)
}

/// Routes leaving `generation`.
pub fn routes_from(generation: u32) -> impl Iterator<Item = &'static TransferRoute> {
    ROUTES
        .iter()
        .filter(move |route| route.from_generation == generation)
}

pub fn routes_between(from: u32, to: u32) -> impl Iterator<Item = &'static TransferRoute> {
    ROUTES
        .iter()
        .filter(move |route| route.from_generation == from && route.to_generation == to)
}

/// Routes that are still usable.
pub fn active_routes() -> impl Iterator<Item = &'static TransferRoute> {
    ROUTES.iter().filter(|route| !route.is_deprecated)
}
