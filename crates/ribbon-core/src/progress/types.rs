//! Progress domain types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A specific owned item the user is tracking ribbons for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OwnedInstance {
    /// Unique identifier (UUIDv4 string, opaque)
    pub id: String,

    /// Species id in the item catalog
    #[serde(alias = "itemId")]
    pub pokemon_id: String,

    #[serde(default)]
    pub nickname: String,

    /// Game the instance was caught or hatched in
    #[serde(default)]
    pub origin_game: String,

    #[serde(default)]
    pub current_game: String,

    #[serde(default)]
    pub current_generation: u32,

    #[serde(default)]
    pub level: u32,

    #[serde(default)]
    pub is_transferred_to_home: bool,

    #[serde(default)]
    pub memo: String,

    #[serde(default)]
    pub created_at: DateTime<Utc>,
}

impl OwnedInstance {
    /// Nickname if set, otherwise the species id.
    pub fn display_name(&self) -> &str {
        if self.nickname.trim().is_empty() {
            &self.pokemon_id
        } else {
            &self.nickname
        }
    }
}

/// Fields supplied when registering a new instance.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewInstance {
    pub pokemon_id: String,
    pub nickname: String,
    pub origin_game: String,
    pub current_game: String,
    pub current_generation: u32,
    pub level: u32,
    pub is_transferred_to_home: bool,
    pub memo: String,
}

impl NewInstance {
    pub fn new(pokemon_id: impl Into<String>, origin_game: impl Into<String>) -> Self {
        Self {
            pokemon_id: pokemon_id.into(),
            origin_game: origin_game.into(),
            ..Default::default()
        }
    }

    pub fn with_nickname(mut self, nickname: impl Into<String>) -> Self {
        self.nickname = nickname.into();
        self
    }

    pub fn with_current(mut self, game: impl Into<String>, generation: u32) -> Self {
        self.current_game = game.into();
        self.current_generation = generation;
        self
    }

    pub fn with_level(mut self, level: u32) -> Self {
        self.level = level;
        self
    }

    pub fn with_memo(mut self, memo: impl Into<String>) -> Self {
        self.memo = memo.into();
        self
    }

    pub fn transferred_to_home(mut self, transferred: bool) -> Self {
        self.is_transferred_to_home = transferred;
        self
    }
}

/// Partial update for an existing instance. `None` leaves a field untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InstancePatch {
    pub pokemon_id: Option<String>,
    pub nickname: Option<String>,
    pub origin_game: Option<String>,
    pub current_game: Option<String>,
    pub current_generation: Option<u32>,
    pub level: Option<u32>,
    pub is_transferred_to_home: Option<bool>,
    pub memo: Option<String>,
}

impl InstancePatch {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub(crate) fn apply_to(self, instance: &mut OwnedInstance) {
        if let Some(pokemon_id) = self.pokemon_id {
            instance.pokemon_id = pokemon_id;
        }
        if let Some(nickname) = self.nickname {
            instance.nickname = nickname;
        }
        if let Some(origin_game) = self.origin_game {
            instance.origin_game = origin_game;
        }
        if let Some(current_game) = self.current_game {
            instance.current_game = current_game;
        }
        if let Some(current_generation) = self.current_generation {
            instance.current_generation = current_generation;
        }
        if let Some(level) = self.level {
            instance.level = level;
        }
        if let Some(transferred) = self.is_transferred_to_home {
            instance.is_transferred_to_home = transferred;
        }
        if let Some(memo) = self.memo {
            instance.memo = memo;
        }
    }
}

/// Obtained vs. total ribbons for one generation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct GenerationProgress {
    pub obtained: usize,
    pub total: usize,
}

impl GenerationProgress {
    /// Completion percentage rounded to the nearest integer; 0 when empty.
    pub fn percent(&self) -> u32 {
        if self.total == 0 {
            return 0;
        }
        ((self.obtained as f64 / self.total as f64) * 100.0).round() as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percent_rounding() {
        let p = |obtained, total| GenerationProgress { obtained, total }.percent();
        assert_eq!(p(1, 3), 33);
        assert_eq!(p(2, 3), 67);
        assert_eq!(p(3, 3), 100);
        assert_eq!(p(0, 0), 0);
    }

    #[test]
    fn test_instance_accepts_item_id_alias_and_defaults() {
        let instance: OwnedInstance = serde_json::from_str(
            r#"{"id":"a","itemId":"pikachu","nickname":"Sparky","originGame":"xd",
                "createdAt":"2024-05-01T10:00:00Z"}"#,
        )
        .unwrap();
        assert_eq!(instance.pokemon_id, "pikachu");
        assert_eq!(instance.level, 0);
        assert_eq!(instance.current_game, "");
        assert!(!instance.is_transferred_to_home);
    }

    #[test]
    fn test_instance_serializes_pokemon_id() {
        let instance: OwnedInstance =
            serde_json::from_str(r#"{"id":"a","pokemonId":"eevee"}"#).unwrap();
        let json = serde_json::to_value(&instance).unwrap();
        assert_eq!(json["pokemonId"], "eevee");
        assert!(json.get("itemId").is_none());
        assert_eq!(json["isTransferredToHome"], false);
    }

    #[test]
    fn test_patch_merges_only_set_fields() {
        let mut instance: OwnedInstance =
            serde_json::from_str(r#"{"id":"a","pokemonId":"eevee","nickname":"Vee","level":5}"#)
                .unwrap();
        InstancePatch {
            level: Some(50),
            ..Default::default()
        }
        .apply_to(&mut instance);
        assert_eq!(instance.level, 50);
        assert_eq!(instance.nickname, "Vee");
        assert!(InstancePatch::default().is_empty());
    }

    #[test]
    fn test_display_name_falls_back_to_species() {
        let instance: OwnedInstance =
            serde_json::from_str(r#"{"id":"a","pokemonId":"eevee"}"#).unwrap();
        assert_eq!(instance.display_name(), "eevee");
    }
}
