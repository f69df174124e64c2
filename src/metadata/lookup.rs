//! Indices lookup
//!
//! Builds the name → abstraction map for one cluster-state snapshot.
//!
//! # Build order
//!
//! 1. Register one concrete index per index record (names must be unique)
//! 2. Group records by alias name, appending members in index-name order
//! 3. Reject alias names that collide with an index name
//! 4. Validate every alias group in alias-name order
//!
//! The first failure aborts the build. A built lookup is immutable and is
//! passed explicitly to whatever needs it.

use std::collections::btree_map::Entry;
use std::collections::BTreeMap;
use std::sync::Arc;

use super::abstraction::{ConcreteIndex, IndexAbstraction};
use super::alias::AliasGroup;
use super::errors::{MetadataError, MetadataResult};
use super::index_metadata::IndexMetadata;
use crate::observability::{log_event, log_event_with_fields, Event};

/// Immutable name → abstraction map for one metadata snapshot
#[derive(Debug, Default)]
pub struct IndicesLookup {
    abstractions: BTreeMap<String, IndexAbstraction>,
    index_count: usize,
}

impl IndicesLookup {
    /// Builds and validates the lookup for a set of index records.
    pub fn build<I>(indices: I) -> MetadataResult<Self>
    where
        I: IntoIterator<Item = IndexMetadata>,
    {
        log_event(Event::LookupBuildStart);

        match Self::assemble(indices) {
            Ok(lookup) => {
                let index_count = lookup.index_count.to_string();
                let alias_count = lookup.alias_count().to_string();
                log_event_with_fields(
                    Event::LookupBuilt,
                    &[("aliases", alias_count.as_str()), ("indices", index_count.as_str())],
                );
                Ok(lookup)
            }
            Err(err) => {
                log_event_with_fields(
                    Event::LookupRejected,
                    &[("code", err.code().code()), ("message", err.message())],
                );
                Err(err)
            }
        }
    }

    fn assemble<I>(indices: I) -> MetadataResult<Self>
    where
        I: IntoIterator<Item = IndexMetadata>,
    {
        let mut concrete: BTreeMap<String, Arc<IndexMetadata>> = BTreeMap::new();
        for index in indices {
            match concrete.entry(index.name().to_string()) {
                Entry::Occupied(entry) => {
                    return Err(MetadataError::name_conflict(
                        entry.key().as_str(),
                        "is used by more than one index",
                    ));
                }
                Entry::Vacant(entry) => {
                    entry.insert(Arc::new(index));
                }
            }
        }

        let mut aliases: BTreeMap<String, AliasGroup> = BTreeMap::new();
        for index in concrete.values() {
            for declaration in index.aliases() {
                match aliases.entry(declaration.alias().to_string()) {
                    Entry::Occupied(mut entry) => entry.get_mut().append(Arc::clone(index))?,
                    Entry::Vacant(entry) => {
                        entry.insert(AliasGroup::new(declaration.alias(), Arc::clone(index))?);
                    }
                }
            }
        }

        let index_count = concrete.len();
        let mut abstractions: BTreeMap<String, IndexAbstraction> = concrete
            .into_iter()
            .map(|(name, index)| (name, IndexAbstraction::Index(ConcreteIndex::new(index))))
            .collect();

        for (name, group) in aliases {
            if abstractions.contains_key(&name) {
                return Err(MetadataError::name_conflict(
                    name,
                    "is both an index and an alias; index and alias names must be unique",
                ));
            }
            group.validate()?;
            abstractions.insert(name, group.into());
        }

        Ok(Self {
            abstractions,
            index_count,
        })
    }

    /// Returns the abstraction registered under `name`
    pub fn get(&self, name: &str) -> Option<&IndexAbstraction> {
        self.abstractions.get(name)
    }

    /// Same as `get`, but records the resolution
    pub fn resolve(&self, name: &str) -> Option<&IndexAbstraction> {
        let abstraction = self.abstractions.get(name)?;
        log_event_with_fields(
            Event::AbstractionResolved,
            &[("name", name), ("type", abstraction.kind().display_name())],
        );
        Some(abstraction)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.abstractions.contains_key(name)
    }

    /// Number of abstractions (indices and aliases)
    pub fn len(&self) -> usize {
        self.abstractions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.abstractions.is_empty()
    }

    pub fn index_count(&self) -> usize {
        self.index_count
    }

    pub fn alias_count(&self) -> usize {
        self.abstractions.len() - self.index_count
    }

    /// Iterates abstractions in name order
    pub fn iter(&self) -> impl Iterator<Item = &IndexAbstraction> {
        self.abstractions.values()
    }

    /// Iterates alias groups in name order
    pub fn aliases(&self) -> impl Iterator<Item = &AliasGroup> {
        self.abstractions.values().filter_map(IndexAbstraction::as_alias)
    }

    /// Names of the concrete indices behind `name`, in member order
    pub fn concrete_index_names(&self, name: &str) -> Option<Vec<&str>> {
        self.get(name)
            .map(|abstraction| abstraction.indices().iter().map(|i| i.name()).collect())
    }

    /// The write index behind `name`, if `name` exists and has one
    pub fn write_index(&self, name: &str) -> Option<&Arc<IndexMetadata>> {
        self.get(name).and_then(IndexAbstraction::write_index)
    }

    /// Names visible to default discovery, i.e. not hidden
    pub fn visible_names(&self) -> Vec<&str> {
        self.abstractions
            .values()
            .filter(|abstraction| !abstraction.is_hidden())
            .map(IndexAbstraction::name)
            .collect()
    }
}
