//! Index abstractions
//!
//! An index abstraction is a named handle over one or more concrete indices:
//! either a single concrete index or an alias group. Callers resolve a name to
//! an abstraction and then read its indices and write index without caring
//! which kind it is.

use std::fmt;
use std::slice;
use std::sync::Arc;

use serde::Serialize;

use super::alias::AliasGroup;
use super::index_metadata::IndexMetadata;

/// Kind of index abstraction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AbstractionType {
    /// A single concrete index, which is also its own write index
    ConcreteIndex,
    /// An alias over any number of indices, with at most one write index
    Alias,
}

impl AbstractionType {
    /// Returns the human-readable name
    pub fn display_name(&self) -> &'static str {
        match self {
            AbstractionType::ConcreteIndex => "concrete index",
            AbstractionType::Alias => "alias",
        }
    }
}

impl fmt::Display for AbstractionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// A concrete index viewed as an abstraction.
#[derive(Debug, Clone)]
pub struct ConcreteIndex {
    index: Arc<IndexMetadata>,
}

impl ConcreteIndex {
    pub fn new(index: Arc<IndexMetadata>) -> Self {
        Self { index }
    }

    pub fn name(&self) -> &str {
        self.index.name()
    }

    /// Returns a single-element slice holding the wrapped index
    pub fn members(&self) -> &[Arc<IndexMetadata>] {
        slice::from_ref(&self.index)
    }

    /// A concrete index is always its own write index
    pub fn write_index(&self) -> &Arc<IndexMetadata> {
        &self.index
    }

    pub fn is_hidden(&self) -> bool {
        self.index.is_hidden()
    }
}

/// Either a concrete index or an alias group.
#[derive(Debug)]
pub enum IndexAbstraction {
    Index(ConcreteIndex),
    Alias(AliasGroup),
}

impl IndexAbstraction {
    /// Returns the abstraction type
    pub fn kind(&self) -> AbstractionType {
        match self {
            IndexAbstraction::Index(_) => AbstractionType::ConcreteIndex,
            IndexAbstraction::Alias(_) => AbstractionType::Alias,
        }
    }

    /// Returns the index or alias name
    pub fn name(&self) -> &str {
        match self {
            IndexAbstraction::Index(index) => index.name(),
            IndexAbstraction::Alias(alias) => alias.name(),
        }
    }

    /// Returns every concrete index this abstraction refers to
    pub fn indices(&self) -> &[Arc<IndexMetadata>] {
        match self {
            IndexAbstraction::Index(index) => index.members(),
            IndexAbstraction::Alias(alias) => alias.members(),
        }
    }

    /// Returns the index accepting new documents, if there is one.
    ///
    /// The write index is also one of `indices()`.
    pub fn write_index(&self) -> Option<&Arc<IndexMetadata>> {
        match self {
            IndexAbstraction::Index(index) => Some(index.write_index()),
            IndexAbstraction::Alias(alias) => alias.write_index(),
        }
    }

    pub fn is_hidden(&self) -> bool {
        match self {
            IndexAbstraction::Index(index) => index.is_hidden(),
            IndexAbstraction::Alias(alias) => alias.is_hidden(),
        }
    }

    pub fn as_alias(&self) -> Option<&AliasGroup> {
        match self {
            IndexAbstraction::Alias(alias) => Some(alias),
            IndexAbstraction::Index(_) => None,
        }
    }
}

impl From<ConcreteIndex> for IndexAbstraction {
    fn from(index: ConcreteIndex) -> Self {
        IndexAbstraction::Index(index)
    }
}

impl From<AliasGroup> for IndexAbstraction {
    fn from(alias: AliasGroup) -> Self {
        IndexAbstraction::Alias(alias)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metadata::AliasMetadata;

    #[test]
    fn test_concrete_index_reads_through() {
        let record = Arc::new(IndexMetadata::new("orders").unwrap());
        let abstraction = IndexAbstraction::from(ConcreteIndex::new(Arc::clone(&record)));

        assert_eq!(abstraction.kind(), AbstractionType::ConcreteIndex);
        assert_eq!(abstraction.name(), "orders");
        assert_eq!(abstraction.indices().len(), 1);
        assert_eq!(abstraction.indices()[0].name(), "orders");
        assert!(Arc::ptr_eq(abstraction.write_index().unwrap(), &record));
        assert!(!abstraction.is_hidden());
        assert!(abstraction.as_alias().is_none());
    }

    #[test]
    fn test_hidden_concrete_index() {
        let record = Arc::new(IndexMetadata::new(".tasks").unwrap().hidden(true));
        assert!(ConcreteIndex::new(record).is_hidden());
    }

    #[test]
    fn test_alias_abstraction() {
        let alias = AliasMetadata::builder("logs").is_hidden(Some(true)).build().unwrap();
        let record = Arc::new(IndexMetadata::new("logs-1").unwrap().put_alias(alias));
        let group = AliasGroup::new("logs", record).unwrap();
        group.validate().unwrap();
        let abstraction = IndexAbstraction::from(group);

        assert_eq!(abstraction.kind(), AbstractionType::Alias);
        assert_eq!(abstraction.name(), "logs");
        assert_eq!(abstraction.write_index().unwrap().name(), "logs-1");
        assert!(abstraction.is_hidden());
        assert!(abstraction.as_alias().is_some());
    }

    #[test]
    fn test_display_names() {
        assert_eq!(AbstractionType::ConcreteIndex.to_string(), "concrete index");
        assert_eq!(AbstractionType::Alias.to_string(), "alias");
    }
}
