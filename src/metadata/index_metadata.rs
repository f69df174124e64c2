//! Per-index metadata snapshot
//!
//! Only the hidden setting and the alias declarations are consumed by the
//! abstraction layer; the remaining settings are carried for callers.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::alias_metadata::AliasMetadata;
use super::errors::MetadataResult;
use super::names::validate_name;

fn default_shards() -> u32 {
    1
}

fn default_replicas() -> u32 {
    1
}

/// Index settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexSettings {
    /// Excluded from default discovery when true
    #[serde(default)]
    pub hidden: bool,
    /// Number of primary shards
    #[serde(default = "default_shards")]
    pub number_of_shards: u32,
    /// Number of replicas per primary
    #[serde(default = "default_replicas")]
    pub number_of_replicas: u32,
    /// Creation timestamp
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creation_date: Option<DateTime<Utc>>,
}

impl Default for IndexSettings {
    fn default() -> Self {
        Self {
            hidden: false,
            number_of_shards: default_shards(),
            number_of_replicas: default_replicas(),
            creation_date: None,
        }
    }
}

/// Immutable metadata of one concrete index.
///
/// Built through [`IndexMetadata::new`] so every name is validated and
/// every alias is keyed by its own name.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IndexMetadata {
    name: String,
    uuid: Uuid,
    settings: IndexSettings,
    aliases: BTreeMap<String, AliasMetadata>,
}

impl IndexMetadata {
    /// Creates metadata for a new index with default settings and a fresh UUID.
    pub fn new(name: impl Into<String>) -> MetadataResult<Self> {
        let name = name.into();
        validate_name(&name)?;

        Ok(Self {
            name,
            uuid: Uuid::new_v4(),
            settings: IndexSettings::default(),
            aliases: BTreeMap::new(),
        })
    }

    pub fn with_uuid(mut self, uuid: Uuid) -> Self {
        self.uuid = uuid;
        self
    }

    pub fn with_settings(mut self, settings: IndexSettings) -> Self {
        self.settings = settings;
        self
    }

    pub fn hidden(mut self, hidden: bool) -> Self {
        self.settings.hidden = hidden;
        self
    }

    /// Adds or replaces the declaration for `alias.alias()`.
    pub fn put_alias(mut self, alias: AliasMetadata) -> Self {
        self.aliases.insert(alias.alias().to_string(), alias);
        self
    }

    /// Returns the index name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the index UUID
    pub fn uuid(&self) -> Uuid {
        self.uuid
    }

    /// Returns the index settings
    pub fn settings(&self) -> &IndexSettings {
        &self.settings
    }

    /// Returns the hidden setting
    pub fn is_hidden(&self) -> bool {
        self.settings.hidden
    }

    /// Returns this index's declaration for `alias`, if any
    pub fn alias(&self, alias: &str) -> Option<&AliasMetadata> {
        self.aliases.get(alias)
    }

    pub fn has_alias(&self, alias: &str) -> bool {
        self.aliases.contains_key(alias)
    }

    /// Iterates alias declarations in alias-name order
    pub fn aliases(&self) -> impl Iterator<Item = &AliasMetadata> {
        self.aliases.values()
    }
}
