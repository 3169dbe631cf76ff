//! Export and import documents.
//!
//! Exports are always versioned. Imports accept either a versioned
//! document or a legacy bare map of progress key to ribbon ids. Every
//! progress value is checked before anything is handed back, so a bad
//! entry rejects the whole document.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{Result, RibbonError};

use super::types::OwnedInstance;

/// Current export format version.
pub const EXPORT_VERSION: u32 = 1;

/// Full snapshot of progress and the owned-instance registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportDocument {
    pub version: u32,
    pub my_pokemon_list: Vec<OwnedInstance>,
    pub progress: BTreeMap<String, Vec<String>>,
}

impl ExportDocument {
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// A decoded, validated import.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImportDocument {
    /// `{version, myPokemonList?, progress}`. The registry is replaced only
    /// when present.
    Versioned {
        registry: Option<Vec<OwnedInstance>>,
        progress: BTreeMap<String, BTreeSet<String>>,
    },
    /// Bare `{key: [ribbonId]}`.
    Legacy {
        progress: BTreeMap<String, BTreeSet<String>>,
    },
}

impl ImportDocument {
    /// Parse and validate an import document.
    ///
    /// # Errors
    ///
    /// Returns `RibbonError::Validation` for malformed JSON, an unsupported
    /// version, a malformed registry, or any progress value that is not an
    /// array of strings (the message names the offending key).
    pub fn parse(json: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(json)
            .map_err(|e| RibbonError::Validation(format!("Import is not valid JSON: {}", e)))?;
        Self::from_value(value)
    }

    pub fn from_value(value: Value) -> Result<Self> {
        let Value::Object(mut root) = value else {
            return Err(RibbonError::Validation(
                "Import document must be a JSON object".to_string(),
            ));
        };

        // Unversioned exports still carry an object-valued `progress`; a
        // legacy map never does, since its values must be arrays.
        let versioned = root.contains_key("version")
            || matches!(root.get("progress"), Some(Value::Object(_)));

        if !versioned {
            return Ok(ImportDocument::Legacy {
                progress: decode_progress(&root)?,
            });
        }

        if let Some(version) = root.get("version") {
            match version.as_u64() {
                Some(v) if v == u64::from(EXPORT_VERSION) => {}
                _ => {
                    return Err(RibbonError::Validation(format!(
                        "Unsupported export version: {}",
                        version
                    )))
                }
            }
        }

        let progress = match root.get("progress") {
            Some(Value::Object(map)) => decode_progress(map)?,
            Some(_) => {
                return Err(RibbonError::Validation(
                    "'progress' must be an object".to_string(),
                ))
            }
            None => {
                return Err(RibbonError::Validation(
                    "Versioned document is missing 'progress'".to_string(),
                ))
            }
        };

        let registry_value = root
            .remove("myPokemonList")
            .or_else(|| root.remove("ownedInstances"));
        let registry = match registry_value {
            None | Some(Value::Null) => None,
            Some(value) => Some(serde_json::from_value::<Vec<OwnedInstance>>(value).map_err(
                |e| RibbonError::Validation(format!("Invalid 'myPokemonList': {}", e)),
            )?),
        };

        Ok(ImportDocument::Versioned { registry, progress })
    }

    pub fn progress(&self) -> &BTreeMap<String, BTreeSet<String>> {
        match self {
            ImportDocument::Versioned { progress, .. } => progress,
            ImportDocument::Legacy { progress } => progress,
        }
    }

    pub fn is_legacy(&self) -> bool {
        matches!(self, ImportDocument::Legacy { .. })
    }

    /// Whether applying this document replaces the owned-instance registry.
    pub fn replaces_registry(&self) -> bool {
        matches!(
            self,
            ImportDocument::Versioned {
                registry: Some(_),
                ..
            }
        )
    }
}

fn decode_progress(map: &Map<String, Value>) -> Result<BTreeMap<String, BTreeSet<String>>> {
    let mut progress = BTreeMap::new();
    for (key, value) in map {
        let invalid = || {
            RibbonError::Validation(format!(
                "Invalid progress entry '{}': expected an array of ribbon ids",
                key
            ))
        };
        let Value::Array(items) = value else {
            return Err(invalid());
        };
        let mut ribbons = BTreeSet::new();
        for item in items {
            let Value::String(ribbon_id) = item else {
                return Err(invalid());
            };
            ribbons.insert(ribbon_id.clone());
        }
        progress.insert(key.clone(), ribbons);
    }
    Ok(progress)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_legacy_map() {
        let doc = ImportDocument::parse(r#"{"pikachu": ["champion-hoenn"]}"#).unwrap();
        assert!(doc.is_legacy());
        assert!(doc.progress()["pikachu"].contains("champion-hoenn"));
    }

    #[test]
    fn test_replaces_registry_only_when_list_present() {
        let legacy = ImportDocument::parse(r#"{"pikachu": []}"#).unwrap();
        assert!(!legacy.replaces_registry());

        let progress_only = ImportDocument::parse(r#"{"version":1,"progress":{}}"#).unwrap();
        assert!(!progress_only.replaces_registry());

        let full =
            ImportDocument::parse(r#"{"version":1,"myPokemonList":[],"progress":{}}"#).unwrap();
        assert!(full.replaces_registry());
    }

    #[test]
    fn test_versioned_document() {
        let doc = ImportDocument::parse(
            r#"{"version":1,"myPokemonList":[{"id":"a","pokemonId":"eevee"}],
                "progress":{"a":["effort-ribbon"]}}"#,
        )
        .unwrap();
        match doc {
            ImportDocument::Versioned { registry, progress } => {
                assert_eq!(registry.unwrap()[0].pokemon_id, "eevee");
                assert_eq!(progress["a"].len(), 1);
            }
            other => panic!("expected versioned, got {:?}", other),
        }
    }

    #[test]
    fn test_unversioned_export_shape_is_versioned() {
        let doc = ImportDocument::parse(r#"{"progress":{"a":[]}}"#).unwrap();
        assert_eq!(
            doc,
            ImportDocument::Versioned {
                registry: None,
                progress: BTreeMap::from([("a".to_string(), BTreeSet::new())]),
            }
        );
    }

    #[test]
    fn test_rejects_non_string_ribbon_and_names_key() {
        let err = ImportDocument::parse(r#"{"version":1,"progress":{"bad-key":[1,2]}}"#)
            .unwrap_err();
        assert!(matches!(err, RibbonError::Validation(_)));
        assert!(err.to_string().contains("bad-key"));

        let err = ImportDocument::parse(r#"{"eevee":"champion-hoenn"}"#).unwrap_err();
        assert!(err.to_string().contains("eevee"));
    }

    #[test]
    fn test_rejects_unknown_version() {
        let err = ImportDocument::parse(r#"{"version":2,"progress":{}}"#).unwrap_err();
        assert!(err.to_string().contains("Unsupported export version"));
    }

    #[test]
    fn test_rejects_non_object_root() {
        assert!(ImportDocument::parse("[]").is_err());
        assert!(ImportDocument::parse("not json").is_err());
    }

    #[test]
    fn test_export_field_names() {
        let doc = ExportDocument {
            version: EXPORT_VERSION,
            my_pokemon_list: Vec::new(),
            progress: BTreeMap::from([("pikachu".to_string(), vec!["x".to_string()])]),
        };
        let json: Value = serde_json::from_str(&doc.to_json_pretty().unwrap()).unwrap();
        assert_eq!(json["version"], 1);
        assert!(json["myPokemonList"].is_array());
        assert_eq!(json["progress"]["pikachu"][0], "x");
    }
}
