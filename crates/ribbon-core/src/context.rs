//! Tracker context.
//!
//! `Tracker` owns every stateful component for a session. Build one with
//! [`Tracker::open`] and pass it by reference to whatever needs it.

use std::sync::Arc;

use crate::catalog::Catalog;
use crate::progress::ProgressStore;
use crate::setup::SetupStore;
use crate::storage::KeyValueStore;

pub struct Tracker<'a> {
    pub catalog: &'a Catalog,
    pub progress: ProgressStore<'a>,
    pub setup: SetupStore,
}

impl<'a> Tracker<'a> {
    /// Load progress and setup from `storage`.
    pub fn open(catalog: &'a Catalog, storage: Arc<dyn KeyValueStore>) -> Self {
        Self {
            catalog,
            progress: ProgressStore::load(catalog, storage.clone()),
            setup: SetupStore::load(storage),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::load_catalog;
    use crate::progress::NewInstance;
    use crate::storage::MemoryStore;

    #[test]
    fn test_components_share_storage() {
        let storage: Arc<dyn KeyValueStore> = Arc::new(MemoryStore::new());

        {
            let mut tracker = Tracker::open(load_catalog(), storage.clone());
            tracker.setup.toggle_game("emerald");
            let id = tracker
                .progress
                .register_owned_instance(NewInstance::new("torchic", "emerald"));
            tracker.progress.toggle_ribbon(&id, "effort-ribbon");
        }

        let tracker = Tracker::open(load_catalog(), storage);
        assert!(tracker.setup.owns_game("emerald"));
        let instance = &tracker.progress.instances()[0];
        assert!(tracker.progress.has_ribbon(&instance.id, "effort-ribbon"));
    }
}
