//! Metadata file loader
//!
//! File format:
//!
//! ```json
//! {
//!   "indices": [
//!     {
//!       "name": "logs-1",
//!       "uuid": "5c1c0c5e-6f57-4a8e-9a7c-3f7f3e1b2a10",
//!       "settings": { "hidden": false, "number_of_shards": 1 },
//!       "aliases": { "logs": { "is_write_index": true, "routing": "1" } }
//!     }
//!   ]
//! }
//! ```
//!
//! `uuid`, `settings` and `aliases` are optional. Every name is validated.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;
use serde_json::Value;
use uuid::Uuid;

use super::alias_metadata::AliasMetadata;
use super::errors::{MetadataError, MetadataResult};
use super::index_metadata::{IndexMetadata, IndexSettings};
use crate::observability::{log_event_with_fields, Event};

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct MetadataFile {
    #[serde(default)]
    indices: Vec<IndexDefinition>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct IndexDefinition {
    name: String,
    #[serde(default)]
    uuid: Option<Uuid>,
    #[serde(default)]
    settings: IndexSettings,
    #[serde(default)]
    aliases: BTreeMap<String, AliasDefinition>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct AliasDefinition {
    #[serde(default)]
    filter: Option<Value>,
    #[serde(default)]
    routing: Option<String>,
    #[serde(default)]
    index_routing: Option<String>,
    #[serde(default)]
    search_routing: Option<String>,
    #[serde(default)]
    is_write_index: Option<bool>,
    #[serde(default)]
    is_hidden: Option<bool>,
}

impl AliasDefinition {
    fn into_metadata(self, alias: String) -> MetadataResult<AliasMetadata> {
        let mut builder = AliasMetadata::builder(alias)
            .write_index(self.is_write_index)
            .is_hidden(self.is_hidden);
        if let Some(filter) = self.filter {
            builder = builder.filter(filter);
        }
        if let Some(routing) = self.routing {
            builder = builder.routing(routing);
        }
        if let Some(routing) = self.index_routing {
            builder = builder.index_routing(routing);
        }
        if let Some(routing) = self.search_routing {
            builder = builder.search_routing(routing);
        }
        builder.build()
    }
}

impl IndexDefinition {
    fn into_metadata(self) -> MetadataResult<IndexMetadata> {
        let mut index = IndexMetadata::new(self.name)?.with_settings(self.settings);
        if let Some(uuid) = self.uuid {
            index = index.with_uuid(uuid);
        }
        for (alias, definition) in self.aliases {
            index = index.put_alias(definition.into_metadata(alias)?);
        }
        Ok(index)
    }
}

/// Reads index metadata records from JSON.
pub struct MetadataLoader;

impl MetadataLoader {
    /// Loads every index record from a metadata file.
    ///
    /// Unreadable or malformed files fail with AERO_METADATA_MALFORMED;
    /// invalid names fail with AERO_METADATA_INVALID_NAME.
    pub fn load_file(path: &Path) -> MetadataResult<Vec<IndexMetadata>> {
        let display = path.display().to_string();
        log_event_with_fields(Event::MetadataLoadStart, &[("path", display.as_str())]);

        let content = fs::read_to_string(path)
            .map_err(|e| MetadataError::malformed(&display, format!("Failed to read file: {}", e)))?;

        let indices = Self::parse(&display, &content)?;

        let count = indices.len().to_string();
        log_event_with_fields(
            Event::MetadataLoaded,
            &[("indices", count.as_str()), ("path", display.as_str())],
        );
        Ok(indices)
    }

    /// Loads index records from an in-memory JSON document.
    pub fn load_str(content: &str) -> MetadataResult<Vec<IndexMetadata>> {
        Self::parse("<in-memory>", content)
    }

    fn parse(origin: &str, content: &str) -> MetadataResult<Vec<IndexMetadata>> {
        let file: MetadataFile = serde_json::from_str(content)
            .map_err(|e| MetadataError::malformed(origin, format!("Invalid JSON: {}", e)))?;

        file.indices
            .into_iter()
            .map(IndexDefinition::into_metadata)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metadata::MetadataErrorCode;
    use serde_json::json;

    #[test]
    fn test_load_minimal() {
        let indices = MetadataLoader::load_str(r#"{"indices":[{"name":"orders"}]}"#).unwrap();
        assert_eq!(indices.len(), 1);
        assert_eq!(indices[0].name(), "orders");
        assert!(!indices[0].is_hidden());
    }

    #[test]
    fn test_load_aliases_and_settings() {
        let doc = json!({
            "indices": [{
                "name": "logs-1",
                "uuid": "5c1c0c5e-6f57-4a8e-9a7c-3f7f3e1b2a10",
                "settings": { "hidden": true, "number_of_shards": 3 },
                "aliases": {
                    "logs": { "is_write_index": true, "routing": "1", "is_hidden": true }
                }
            }]
        });
        let indices = MetadataLoader::load_str(&doc.to_string()).unwrap();
        let index = &indices[0];

        assert!(index.is_hidden());
        assert_eq!(index.settings().number_of_shards, 3);
        assert_eq!(index.settings().number_of_replicas, 1);
        assert_eq!(index.uuid().to_string(), "5c1c0c5e-6f57-4a8e-9a7c-3f7f3e1b2a10");

        let alias = index.alias("logs").unwrap();
        assert_eq!(alias.write_index(), Some(true));
        assert_eq!(alias.is_hidden(), Some(true));
        assert_eq!(alias.index_routing(), Some("1"));
        assert_eq!(alias.search_routing(), Some("1"));
    }

    #[test]
    fn test_malformed_json() {
        let err = MetadataLoader::load_str("{not json").unwrap_err();
        assert_eq!(err.code(), MetadataErrorCode::AeroMetadataMalformed);
        assert!(err.is_fatal());
    }

    #[test]
    fn test_unknown_field_rejected() {
        let err = MetadataLoader::load_str(r#"{"indices":[{"name":"orders","shards":2}]}"#).unwrap_err();
        assert_eq!(err.code(), MetadataErrorCode::AeroMetadataMalformed);
    }

    #[test]
    fn test_invalid_alias_name() {
        let err = MetadataLoader::load_str(r#"{"indices":[{"name":"orders","aliases":{"Bad":{}}}]}"#)
            .unwrap_err();
        assert_eq!(err.code(), MetadataErrorCode::AeroMetadataInvalidName);
    }

    #[test]
    fn test_missing_file() {
        let err = MetadataLoader::load_file(Path::new("/nonexistent/metadata.json")).unwrap_err();
        assert_eq!(err.code(), MetadataErrorCode::AeroMetadataMalformed);
    }
}
