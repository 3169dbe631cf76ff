//! Ribbon progress and the owned-instance registry.
//!
//! Progress is a map from a progress key to the set of obtained ribbon ids.
//! The key is an owned instance id, or a bare species id when the user
//! tracks a species without registering an instance.
//!
//! Every mutation writes through to storage before returning. Storage
//! failures are logged and swallowed: the in-memory state is authoritative
//! for the rest of the session.

mod document;
mod types;

use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;

use crate::catalog::{Catalog, ItemDetail, Ribbon};
use crate::eligibility::{evaluate, Eligibility};
use crate::error::Result;
use crate::storage::{progress_key, KeyValueStore, StorageOp, MY_POKEMON_KEY, PROGRESS_PREFIX};

pub use document::{ExportDocument, ImportDocument, EXPORT_VERSION};
pub use types::{GenerationProgress, InstancePatch, NewInstance, OwnedInstance};

/// What an import replaced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImportSummary {
    pub progress_keys: usize,
    /// Number of registry entries, when the document carried a registry
    pub instances: Option<usize>,
    pub legacy: bool,
}

pub struct ProgressStore<'a> {
    catalog: &'a Catalog,
    storage: Arc<dyn KeyValueStore>,
    progress: BTreeMap<String, BTreeSet<String>>,
    instances: Vec<OwnedInstance>,
    active_instance: Option<String>,
    selected_item: Option<String>,
}

impl<'a> ProgressStore<'a> {
    /// Restore progress and the registry from storage.
    ///
    /// Unreadable or corrupt entries are skipped with a warning.
    pub fn load(catalog: &'a Catalog, storage: Arc<dyn KeyValueStore>) -> Self {
        let instances = match storage.get(MY_POKEMON_KEY) {
            Ok(Some(raw)) => serde_json::from_str(&raw).unwrap_or_else(|e| {
                tracing::warn!(error = %e, "owned instance registry is corrupt, starting empty");
                Vec::new()
            }),
            Ok(None) => Vec::new(),
            Err(e) => {
                tracing::warn!(error = %e, "failed to read owned instance registry");
                Vec::new()
            }
        };

        let mut progress = BTreeMap::new();
        match storage.keys_with_prefix(PROGRESS_PREFIX) {
            Ok(keys) => {
                for storage_key in keys {
                    let Some(key) = storage_key.strip_prefix(PROGRESS_PREFIX) else {
                        continue;
                    };
                    match storage.get(&storage_key) {
                        Ok(Some(raw)) => match serde_json::from_str::<BTreeSet<String>>(&raw) {
                            Ok(ribbons) => {
                                progress.insert(key.to_string(), ribbons);
                            }
                            Err(e) => {
                                tracing::warn!(key, error = %e, "skipping corrupt progress entry")
                            }
                        },
                        Ok(None) => {}
                        Err(e) => tracing::warn!(key, error = %e, "failed to read progress entry"),
                    }
                }
            }
            Err(e) => tracing::warn!(error = %e, "failed to list progress entries"),
        }

        tracing::debug!(
            keys = progress.len(),
            instances = instances.len(),
            "progress loaded"
        );

        Self {
            catalog,
            storage,
            progress,
            instances,
            active_instance: None,
            selected_item: None,
        }
    }

    pub fn catalog(&self) -> &'a Catalog {
        self.catalog
    }

    pub fn instances(&self) -> &[OwnedInstance] {
        &self.instances
    }

    pub fn instance(&self, id: &str) -> Option<&OwnedInstance> {
        self.instances.iter().find(|instance| instance.id == id)
    }

    pub fn active_instance(&self) -> Option<&OwnedInstance> {
        self.active_instance
            .as_deref()
            .and_then(|id| self.instance(id))
    }

    pub fn selected_item(&self) -> Option<&'a ItemDetail> {
        self.selected_item
            .as_deref()
            .and_then(|id| self.catalog.item(id))
    }

    /// Progress key the current selection resolves to: the active instance,
    /// otherwise the selected species.
    pub fn active_key(&self) -> Option<&str> {
        self.active_instance
            .as_deref()
            .or(self.selected_item.as_deref())
    }

    pub fn progress(&self) -> &BTreeMap<String, BTreeSet<String>> {
        &self.progress
    }

    pub fn obtained(&self, key: &str) -> Option<&BTreeSet<String>> {
        self.progress.get(key)
    }

    pub fn has_ribbon(&self, key: &str, ribbon_id: &str) -> bool {
        self.progress
            .get(key)
            .is_some_and(|ribbons| ribbons.contains(ribbon_id))
    }

    /// Select a species and leave instance mode.
    pub fn select_item(&mut self, item: &ItemDetail) {
        self.selected_item = Some(item.id.clone());
        self.active_instance = None;
    }

    /// Flip a ribbon for `key`. Returns whether the ribbon is now obtained.
    pub fn toggle_ribbon(&mut self, key: &str, ribbon_id: &str) -> bool {
        let ribbons = self.progress.entry(key.to_string()).or_default();
        let obtained = if ribbons.remove(ribbon_id) {
            false
        } else {
            ribbons.insert(ribbon_id.to_string());
            true
        };
        tracing::debug!(key, ribbon = ribbon_id, obtained, "ribbon toggled");
        self.persist_progress(key);
        obtained
    }

    /// Clear every ribbon for `key`. The key itself is kept.
    pub fn reset_progress(&mut self, key: &str) {
        self.progress.insert(key.to_string(), BTreeSet::new());
        tracing::debug!(key, "progress reset");
        self.persist_progress(key);
    }

    /// Register a new owned instance and return its id.
    pub fn register_owned_instance(&mut self, data: NewInstance) -> String {
        let id = Uuid::new_v4().to_string();
        self.instances.push(OwnedInstance {
            id: id.clone(),
            pokemon_id: data.pokemon_id,
            nickname: data.nickname,
            origin_game: data.origin_game,
            current_game: data.current_game,
            current_generation: data.current_generation,
            level: data.level,
            is_transferred_to_home: data.is_transferred_to_home,
            memo: data.memo,
            created_at: Utc::now(),
        });
        self.progress.insert(id.clone(), BTreeSet::new());
        tracing::debug!(id = %id, "owned instance registered");

        let mut ops = Vec::with_capacity(2);
        if let Some(op) = self.registry_op() {
            ops.push(op);
        }
        if let Some(op) = self.progress_op(&id) {
            ops.push(op);
        }
        self.write_batch(&ops, "registration");
        id
    }

    /// Merge `patch` into an instance. Returns false for unknown ids.
    pub fn update_owned_instance(&mut self, id: &str, patch: InstancePatch) -> bool {
        let Some(instance) = self.instances.iter_mut().find(|i| i.id == id) else {
            return false;
        };
        patch.apply_to(instance);
        tracing::debug!(id, "owned instance updated");
        if let Some(op) = self.registry_op() {
            self.write_batch(&[op], "instance update");
        }
        true
    }

    /// Remove an instance together with its progress entry.
    ///
    /// Both writes land in one batch so storage never holds an orphaned
    /// progress entry. Returns false for unknown ids.
    pub fn remove_owned_instance(&mut self, id: &str) -> bool {
        let before = self.instances.len();
        self.instances.retain(|i| i.id != id);
        if self.instances.len() == before {
            return false;
        }
        self.progress.remove(id);
        if self.active_instance.as_deref() == Some(id) {
            self.active_instance = None;
        }
        tracing::debug!(id, "owned instance removed");

        let mut ops = Vec::with_capacity(2);
        if let Some(op) = self.registry_op() {
            ops.push(op);
        }
        ops.push(StorageOp::remove(progress_key(id)));
        self.write_batch(&ops, "instance removal");
        true
    }

    /// Make an instance active and select its species when the catalog knows it.
    pub fn switch_active_instance(&mut self, id: &str) -> bool {
        let Some(instance) = self.instance(id) else {
            return false;
        };
        let species = self
            .catalog
            .item(&instance.pokemon_id)
            .map(|item| item.id.clone());
        self.active_instance = Some(id.to_string());
        if species.is_some() {
            self.selected_item = species;
        }
        true
    }

    /// Eligibility of `ribbon` for the current selection.
    ///
    /// Permissive when nothing is selected.
    pub fn compute_eligibility(&self, ribbon: &Ribbon) -> Eligibility {
        match self.selected_item() {
            Some(item) => evaluate(item, ribbon, self.active_instance()),
            None => Eligibility::allowed(),
        }
    }

    /// Per-generation progress for the active key.
    pub fn generation_progress(&self) -> BTreeMap<u32, GenerationProgress> {
        self.generation_progress_for(self.active_key().unwrap_or_default())
    }

    /// Per-generation progress for an explicit key.
    pub fn generation_progress_for(&self, key: &str) -> BTreeMap<u32, GenerationProgress> {
        let obtained = self.progress.get(key);
        let mut result: BTreeMap<u32, GenerationProgress> = BTreeMap::new();
        for ribbon in self.catalog.ribbons() {
            let entry = result.entry(ribbon.generation).or_default();
            entry.total += 1;
            if obtained.is_some_and(|set| set.contains(&ribbon.id)) {
                entry.obtained += 1;
            }
        }
        result
    }

    pub fn export(&self) -> ExportDocument {
        ExportDocument {
            version: EXPORT_VERSION,
            my_pokemon_list: self.instances.clone(),
            progress: self
                .progress
                .iter()
                .map(|(key, ribbons)| (key.clone(), ribbons.iter().cloned().collect()))
                .collect(),
        }
    }

    /// Replace progress (and the registry, when present) from a JSON document.
    ///
    /// # Errors
    ///
    /// Returns `RibbonError::Validation` when the document is malformed.
    /// Nothing changes in that case.
    pub fn import(&mut self, json: &str) -> Result<ImportSummary> {
        let document = ImportDocument::parse(json)?;
        Ok(self.apply_import(document))
    }

    /// Apply an already-validated import document.
    pub fn apply_import(&mut self, document: ImportDocument) -> ImportSummary {
        let legacy = document.is_legacy();
        let (registry, progress) = match document {
            ImportDocument::Versioned { registry, progress } => (registry, progress),
            ImportDocument::Legacy { progress } => (None, progress),
        };

        let stale: Vec<String> = self
            .progress
            .keys()
            .filter(|key| !progress.contains_key(*key))
            .cloned()
            .collect();

        self.progress = progress;
        let instances = registry.map(|registry| {
            self.instances = registry;
            self.instances.len()
        });
        if let Some(active) = self.active_instance.as_deref() {
            if self.instance(active).is_none() {
                self.active_instance = None;
            }
        }

        let mut ops: Vec<StorageOp> = Vec::new();
        if instances.is_some() {
            ops.extend(self.registry_op());
        }
        for key in self.progress.keys() {
            ops.extend(self.progress_op(key));
        }
        ops.extend(stale.iter().map(|key| StorageOp::remove(progress_key(key))));
        self.write_batch(&ops, "import");

        tracing::debug!(
            keys = self.progress.len(),
            legacy,
            "progress imported"
        );

        ImportSummary {
            progress_keys: self.progress.len(),
            instances,
            legacy,
        }
    }

    fn registry_op(&self) -> Option<StorageOp> {
        match serde_json::to_string(&self.instances) {
            Ok(encoded) => Some(StorageOp::set(MY_POKEMON_KEY, encoded)),
            Err(e) => {
                tracing::warn!(error = %e, "failed to encode owned instance registry");
                None
            }
        }
    }

    fn progress_op(&self, key: &str) -> Option<StorageOp> {
        let ribbons = self.progress.get(key)?;
        match serde_json::to_string(ribbons) {
            Ok(encoded) => Some(StorageOp::set(progress_key(key), encoded)),
            Err(e) => {
                tracing::warn!(key, error = %e, "failed to encode progress entry");
                None
            }
        }
    }

    fn persist_progress(&self, key: &str) {
        if let Some(op) = self.progress_op(key) {
            self.write_batch(&[op], "progress update");
        }
    }

    fn write_batch(&self, ops: &[StorageOp], what: &str) {
        if ops.is_empty() {
            return;
        }
        if let Err(e) = self.storage.apply(ops) {
            tracing::warn!(error = %e, "failed to persist {}", what);
        }
    }
}
