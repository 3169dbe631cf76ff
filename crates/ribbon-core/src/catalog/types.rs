//! Catalog record types.
//!
//! These are immutable records compiled into the binary; serde derives
//! exist for JSON output, not for loading.

use serde::{Deserialize, Serialize};

/// A game title.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Game {
    /// Stable identifier (e.g., "emerald")
    pub id: String,

    /// Full title
    pub name: String,

    /// Short display label
    pub short_name: String,

    /// Generation the game belongs to
    pub generation: u32,

    /// Release date ("YYYY-MM-DD")
    pub release_date: String,

    /// Platform label (e.g., "GBA", "Switch")
    pub platform: String,
}

/// A species entry in the item catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemDetail {
    pub id: String,
    pub dex_number: u32,
    pub name: String,
    pub types: Vec<String>,
    /// Generation the species was introduced in
    pub generation: u32,
    pub image: String,
    pub category: String,
    /// Height in decimetres
    pub height: u32,
    /// Weight in hectograms
    pub weight: u32,
    pub abilities: Vec<String>,
}

impl ItemDetail {
    /// Dex number padded to three digits ("025").
    pub fn display_number(&self) -> String {
        format!("{:03}", self.dex_number)
    }
}

/// Whether a catalog entry is a ribbon or a mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RibbonKind {
    #[default]
    Ribbon,
    Mark,
}

/// Extra restriction on which items can earn a ribbon.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum EligibilityRule {
    /// No restriction beyond generation compatibility.
    All,

    /// Shadow-capable items only, optionally limited to the listed origin games.
    /// An empty list means any origin.
    ShadowOnly {
        #[serde(
            rename = "shadowGames",
            default,
            skip_serializing_if = "Vec::is_empty"
        )]
        shadow_games: Vec<String>,
    },

    /// Advisory level cap; never blocks eligibility.
    LevelMax {
        #[serde(rename = "maxLevel")]
        max_level: u32,
    },

    /// A rule tag this build does not recognize.
    #[serde(other)]
    Unknown,
}

/// A collectible ribbon (or mark).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ribbon {
    pub id: String,
    pub name: String,
    pub description: String,

    /// Earliest generation in which the ribbon exists
    pub generation: u32,

    /// Games where it can be earned
    pub games: Vec<String>,

    /// Category id (see [`category_label`](super::category_label))
    pub category: String,

    #[serde(rename = "type", default)]
    pub kind: RibbonKind,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub requirements: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub eligibility: Option<EligibilityRule>,

    /// Whether the ribbon survives a transfer into the cloud box
    #[serde(default = "default_transferable")]
    pub transferable: bool,
}

fn default_transferable() -> bool {
    true
}

impl Ribbon {
    pub fn new(
        id: &str,
        name: &str,
        description: &str,
        generation: u32,
        games: &[&str],
        category: &str,
    ) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            description: description.to_string(),
            generation,
            games: games.iter().map(|game| game.to_string()).collect(),
            category: category.to_string(),
            kind: RibbonKind::Ribbon,
            requirements: None,
            eligibility: None,
            transferable: true,
        }
    }

    pub fn with_requirements(mut self, requirements: &str) -> Self {
        self.requirements = Some(requirements.to_string());
        self
    }

    pub fn with_eligibility(mut self, rule: EligibilityRule) -> Self {
        self.eligibility = Some(rule);
        self
    }

    pub fn level_max(self, max_level: u32) -> Self {
        self.with_eligibility(EligibilityRule::LevelMax { max_level })
    }

    pub fn shadow_only(self, shadow_games: &[&str]) -> Self {
        self.with_eligibility(EligibilityRule::ShadowOnly {
            shadow_games: shadow_games.iter().map(|g| g.to_string()).collect(),
        })
    }

    pub fn as_mark(mut self) -> Self {
        self.kind = RibbonKind::Mark;
        self
    }

    pub fn not_transferable(mut self) -> Self {
        self.transferable = false;
        self
    }

    pub fn is_mark(&self) -> bool {
        self.kind == RibbonKind::Mark
    }
}
