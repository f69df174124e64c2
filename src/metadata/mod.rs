//! Cluster metadata index abstractions
//!
//! Callers address either a concrete index or an alias through one
//! `IndexAbstraction` handle. Alias groups aggregate the per-index alias
//! declarations of every member and derive a single write index and hidden
//! flag for the whole group.
//!
//! # Design Principles
//!
//! - Index records are shared (`Arc`), never copied per abstraction
//! - Alias groups are built by one writer, then sealed by validation
//! - Sealed groups and built lookups are immutable and freely shared across readers
//! - Deterministic: BTreeMap iteration order everywhere
//!
//! # Invariants
//!
//! - An alias has at most one write index
//! - All members of an alias agree on its hidden flag
//! - Index and alias names are unique within a lookup

mod abstraction;
mod alias;
mod alias_metadata;
mod errors;
mod index_metadata;
mod loader;
mod lookup;
mod names;

pub use abstraction::{AbstractionType, ConcreteIndex, IndexAbstraction};
pub use alias::{AliasGroup, MemberAliases};
pub use alias_metadata::{AliasMetadata, AliasMetadataBuilder};
pub use errors::{AliasViolation, MetadataError, MetadataErrorCode, MetadataResult, Severity};
pub use index_metadata::{IndexMetadata, IndexSettings};
pub use loader::MetadataLoader;
pub use lookup::IndicesLookup;
pub use names::{validate_name, MAX_NAME_BYTES};
