//! Owned games and hardware, declared once during onboarding.
//!
//! Every mutation writes the whole document through to storage under
//! [`SETUP_KEY`]. Write failures are logged and the in-memory state stays
//! authoritative.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::RibbonError;
use crate::storage::{KeyValueStore, SETUP_KEY};

/// A piece of console hardware relevant to transfers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Hardware {
    #[serde(rename = "gba")]
    Gba,
    #[serde(rename = "ds_lite")]
    DsLite,
    #[serde(rename = "dsi")]
    Dsi,
    #[serde(rename = "3ds")]
    N3ds,
    #[serde(rename = "switch")]
    Switch,
}

impl Hardware {
    pub const ALL: [Hardware; 5] = [
        Hardware::Gba,
        Hardware::DsLite,
        Hardware::Dsi,
        Hardware::N3ds,
        Hardware::Switch,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Hardware::Gba => "gba",
            Hardware::DsLite => "ds_lite",
            Hardware::Dsi => "dsi",
            Hardware::N3ds => "3ds",
            Hardware::Switch => "switch",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Hardware::Gba => "Game Boy Advance",
            Hardware::DsLite => "DS / DS Lite",
            Hardware::Dsi => "DSi",
            Hardware::N3ds => "3DS",
            Hardware::Switch => "Switch",
        }
    }
}

impl fmt::Display for Hardware {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Hardware {
    type Err = RibbonError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Hardware::ALL
            .into_iter()
            .find(|hw| hw.as_str() == s.trim().to_ascii_lowercase())
            .ok_or_else(|| {
                RibbonError::InvalidInput(format!(
                    "Unknown hardware '{}'. Expected one of: gba, ds_lite, dsi, 3ds, switch",
                    s
                ))
            })
    }
}

/// Persisted setup document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Setup {
    pub owned_games: Vec<String>,
    pub owned_hardware: Vec<Hardware>,
    pub setup_completed: bool,
}

pub struct SetupStore {
    state: Setup,
    storage: Arc<dyn KeyValueStore>,
}

impl SetupStore {
    /// Load setup from storage. Missing or unreadable data yields defaults.
    pub fn load(storage: Arc<dyn KeyValueStore>) -> Self {
        let state = match storage.get(SETUP_KEY) {
            Ok(Some(raw)) => serde_json::from_str(&raw).unwrap_or_else(|e| {
                tracing::warn!(error = %e, "setup data is corrupt, using defaults");
                Setup::default()
            }),
            Ok(None) => Setup::default(),
            Err(e) => {
                tracing::warn!(error = %e, "failed to read setup, using defaults");
                Setup::default()
            }
        };
        Self { state, storage }
    }

    pub fn state(&self) -> &Setup {
        &self.state
    }

    pub fn owned_games(&self) -> &[String] {
        &self.state.owned_games
    }

    pub fn owned_hardware(&self) -> &[Hardware] {
        &self.state.owned_hardware
    }

    pub fn is_completed(&self) -> bool {
        self.state.setup_completed
    }

    pub fn owns_game(&self, game_id: &str) -> bool {
        self.state.owned_games.iter().any(|g| g == game_id)
    }

    pub fn owns_hardware(&self, hardware: Hardware) -> bool {
        self.state.owned_hardware.contains(&hardware)
    }

    pub fn set_owned_games(&mut self, games: Vec<String>) {
        let mut unique: Vec<String> = Vec::with_capacity(games.len());
        for game in games {
            if !unique.contains(&game) {
                unique.push(game);
            }
        }
        self.state.owned_games = unique;
        self.save();
    }

    /// Flip ownership of a game. Returns whether it is now owned.
    pub fn toggle_game(&mut self, game_id: &str) -> bool {
        let owned = toggle(&mut self.state.owned_games, game_id.to_string());
        self.save();
        owned
    }

    pub fn set_owned_hardware(&mut self, hardware: Vec<Hardware>) {
        let mut unique: Vec<Hardware> = Vec::with_capacity(hardware.len());
        for hw in hardware {
            if !unique.contains(&hw) {
                unique.push(hw);
            }
        }
        self.state.owned_hardware = unique;
        self.save();
    }

    /// Flip ownership of a hardware item. Returns whether it is now owned.
    pub fn toggle_hardware(&mut self, hardware: Hardware) -> bool {
        let owned = toggle(&mut self.state.owned_hardware, hardware);
        self.save();
        owned
    }

    pub fn complete_setup(&mut self) {
        self.state.setup_completed = true;
        self.save();
    }

    pub fn reset_setup(&mut self) {
        self.state = Setup::default();
        self.save();
    }

    fn save(&self) {
        let encoded = match serde_json::to_string(&self.state) {
            Ok(encoded) => encoded,
            Err(e) => {
                tracing::warn!(error = %e, "failed to encode setup");
                return;
            }
        };
        if let Err(e) = self.storage.set(SETUP_KEY, &encoded) {
            tracing::warn!(error = %e, "failed to persist setup");
        }
    }
}

/// Insert `value` if absent, remove it if present. Returns presence after the flip.
fn toggle<T: PartialEq>(list: &mut Vec<T>, value: T) -> bool {
    if let Some(pos) = list.iter().position(|v| *v == value) {
        list.remove(pos);
        false
    } else {
        list.push(value);
        true
    }
}
