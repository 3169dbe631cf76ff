//! Local storage layer.
//!
//! Every persisted component writes through a [`KeyValueStore`]: a flat
//! map of well-known keys to JSON-encoded strings.

mod memory;
mod sqlite;
mod traits;

pub use memory::MemoryStore;
pub use sqlite::SqliteStore;
pub use traits::{KeyValueStore, StorageOp};

/// Key holding the owned-instance registry.
pub const MY_POKEMON_KEY: &str = "my_pokemon_list";

/// Key holding the setup/preferences document.
pub const SETUP_KEY: &str = "setup";

/// Prefix for per-key progress entries (`progress:<key>`).
pub const PROGRESS_PREFIX: &str = "progress:";

/// Storage key for a single progress entry.
pub fn progress_key(key: &str) -> String {
    format!("{}{}", PROGRESS_PREFIX, key)
}
