//! Per-index alias declarations
//!
//! Each index declares its own view of an alias: routing, filter and the
//! tri-state `is_write_index` / `is_hidden` flags. Unset flags are `None`.

use std::collections::BTreeSet;

use serde::Serialize;
use serde_json::Value;

use super::errors::MetadataResult;
use super::names::validate_name;

/// Alias declaration made by one index for one alias name.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AliasMetadata {
    /// Alias name
    alias: String,
    /// Optional filter applied to searches through this alias
    #[serde(skip_serializing_if = "Option::is_none")]
    filter: Option<Value>,
    /// Routing value used for writes
    #[serde(skip_serializing_if = "Option::is_none")]
    index_routing: Option<String>,
    /// Comma-separated routing values used for searches
    #[serde(skip_serializing_if = "Option::is_none")]
    search_routing: Option<String>,
    /// Whether this index is the write target of the alias
    #[serde(rename = "is_write_index", skip_serializing_if = "Option::is_none")]
    write_index: Option<bool>,
    /// Whether the alias is hidden on this index
    #[serde(skip_serializing_if = "Option::is_none")]
    is_hidden: Option<bool>,
}

impl AliasMetadata {
    /// Start building a declaration for `alias`
    pub fn builder(alias: impl Into<String>) -> AliasMetadataBuilder {
        AliasMetadataBuilder::new(alias)
    }

    /// Returns the alias name
    pub fn alias(&self) -> &str {
        &self.alias
    }

    /// Returns the filter, if any
    pub fn filter(&self) -> Option<&Value> {
        self.filter.as_ref()
    }

    /// Returns the index routing, if any
    pub fn index_routing(&self) -> Option<&str> {
        self.index_routing.as_deref()
    }

    /// Returns the raw search routing, if any
    pub fn search_routing(&self) -> Option<&str> {
        self.search_routing.as_deref()
    }

    /// Returns the search routing split into its distinct values
    pub fn search_routing_values(&self) -> BTreeSet<String> {
        self.search_routing
            .as_deref()
            .map(|routing| {
                routing
                    .split(',')
                    .map(str::trim)
                    .filter(|v| !v.is_empty())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Returns the declared write flag (None when unset)
    pub fn write_index(&self) -> Option<bool> {
        self.write_index
    }

    /// Returns the declared hidden flag (None when unset)
    pub fn is_hidden(&self) -> Option<bool> {
        self.is_hidden
    }
}

/// Builder for [`AliasMetadata`]
#[derive(Debug, Clone)]
pub struct AliasMetadataBuilder {
    alias: String,
    filter: Option<Value>,
    routing: Option<String>,
    index_routing: Option<String>,
    search_routing: Option<String>,
    write_index: Option<bool>,
    is_hidden: Option<bool>,
}

impl AliasMetadataBuilder {
    fn new(alias: impl Into<String>) -> Self {
        Self {
            alias: alias.into(),
            filter: None,
            routing: None,
            index_routing: None,
            search_routing: None,
            write_index: None,
            is_hidden: None,
        }
    }

    pub fn filter(mut self, filter: Value) -> Self {
        self.filter = Some(filter);
        self
    }

    /// Sets both index and search routing, unless either is set explicitly.
    pub fn routing(mut self, routing: impl Into<String>) -> Self {
        self.routing = Some(routing.into());
        self
    }

    pub fn index_routing(mut self, routing: impl Into<String>) -> Self {
        self.index_routing = Some(routing.into());
        self
    }

    pub fn search_routing(mut self, routing: impl Into<String>) -> Self {
        self.search_routing = Some(routing.into());
        self
    }

    pub fn write_index(mut self, write_index: Option<bool>) -> Self {
        self.write_index = write_index;
        self
    }

    pub fn is_hidden(mut self, is_hidden: Option<bool>) -> Self {
        self.is_hidden = is_hidden;
        self
    }

    /// Validates the alias name and builds the declaration.
    pub fn build(self) -> MetadataResult<AliasMetadata> {
        validate_name(&self.alias)?;

        Ok(AliasMetadata {
            alias: self.alias,
            filter: self.filter,
            index_routing: self.index_routing.or_else(|| self.routing.clone()),
            search_routing: self.search_routing.or(self.routing),
            write_index: self.write_index,
            is_hidden: self.is_hidden,
        })
    }
}
