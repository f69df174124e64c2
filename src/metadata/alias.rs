//! Alias groups
//!
//! An alias group collects every index declaring the same alias name. It is
//! assembled by appending members one at a time, then sealed by a single
//! validation pass that derives the write index and checks that all members
//! agree on the hidden flag.
//!
//! # Invariants
//!
//! - At most one member is the write index
//! - Either every member declares the alias hidden, or none does
//! - Every member declares the alias
//! - Members are never reordered by the group

use std::slice;
use std::sync::{Arc, OnceLock};

use super::alias_metadata::AliasMetadata;
use super::errors::{AliasViolation, MetadataError, MetadataResult};
use super::index_metadata::IndexMetadata;
use crate::observability::{log_event_with_fields, Event};

/// Every index sharing one alias name.
#[derive(Debug)]
pub struct AliasGroup {
    alias_name: String,
    members: Vec<Arc<IndexMetadata>>,
    /// Filled exactly once by `validate`; a filled slot means sealed.
    write_index: OnceLock<Option<Arc<IndexMetadata>>>,
    /// Taken from the first member and never re-derived.
    is_hidden: bool,
}

impl AliasGroup {
    /// Creates a group with `first` as its only member.
    ///
    /// Fails with AERO_METADATA_INVALID_STATE if `first` does not declare `alias_name`,
    /// or declares it under a different name.
    pub fn new(alias_name: &str, first: Arc<IndexMetadata>) -> MetadataResult<Self> {
        let declaration = first.alias(alias_name).ok_or_else(|| {
            MetadataError::invalid_state(format!(
                "index [{}] does not declare alias [{}]",
                first.name(),
                alias_name
            ))
        })?;
        if declaration.alias() != alias_name {
            return Err(MetadataError::invalid_state(format!(
                "index [{}] declares alias [{}] under name [{}]",
                first.name(),
                declaration.alias(),
                alias_name
            )));
        }

        Ok(Self {
            alias_name: alias_name.to_string(),
            is_hidden: declaration.is_hidden().unwrap_or(false),
            members: vec![first],
            write_index: OnceLock::new(),
        })
    }

    /// Appends a member.
    ///
    /// Fails with AERO_METADATA_INVALID_STATE if the group is sealed or if
    /// `index` does not declare this alias.
    pub fn append(&mut self, index: Arc<IndexMetadata>) -> MetadataResult<()> {
        if self.is_sealed() {
            return Err(MetadataError::invalid_state(format!(
                "alias [{}] is sealed; cannot add index [{}]",
                self.alias_name,
                index.name()
            )));
        }
        if !index.has_alias(&self.alias_name) {
            return Err(MetadataError::invalid_state(format!(
                "index [{}] does not declare alias [{}]",
                index.name(),
                self.alias_name
            )));
        }

        self.members.push(index);
        Ok(())
    }

    /// Derives the write index, checks hidden consistency, and seals the group.
    ///
    /// Both checks always run; every violation found is carried by the returned
    /// AERO_ALIAS_STATE_INVALID error. Re-running on a sealed group repeats the
    /// checks and leaves the sealed write index untouched.
    pub fn validate(&self) -> MetadataResult<()> {
        let mut violations = Vec::new();

        let write_index = match self.resolve_write_index() {
            Ok(write_index) => write_index,
            Err(violation) => {
                violations.push(violation);
                None
            }
        };

        if let Some(violation) = self.check_hidden_consistency() {
            violations.push(violation);
        }

        if !violations.is_empty() {
            let err = MetadataError::alias_state(&self.alias_name, violations);
            log_event_with_fields(
                Event::AliasRejected,
                &[("alias", self.alias_name.as_str()), ("reason", err.message())],
            );
            return Err(err);
        }

        // Already sealed: the slot keeps its first value.
        let _ = self.write_index.set(write_index);

        let members = self.members.len().to_string();
        log_event_with_fields(
            Event::AliasValidated,
            &[
                ("alias", self.alias_name.as_str()),
                ("members", members.as_str()),
                ("write_index", self.write_index().map_or("", |i| i.name())),
            ],
        );
        Ok(())
    }

    fn resolve_write_index(&self) -> Result<Option<Arc<IndexMetadata>>, AliasViolation> {
        let mut candidates: Vec<&Arc<IndexMetadata>> = self
            .members
            .iter()
            .filter(|index| self.declaration(index).and_then(AliasMetadata::write_index) == Some(true))
            .collect();

        // A lone member with no explicit flag is writable.
        if candidates.is_empty() && self.members.len() == 1 {
            let only = &self.members[0];
            if self.declaration(only).and_then(AliasMetadata::write_index).is_none() {
                candidates.push(only);
            }
        }

        match candidates.as_slice() {
            [] => Ok(None),
            [single] => Ok(Some(Arc::clone(*single))),
            many => {
                let mut indices: Vec<String> = many.iter().map(|i| i.name().to_string()).collect();
                indices.sort();
                Err(AliasViolation::MultipleWriteIndices { indices })
            }
        }
    }

    fn check_hidden_consistency(&self) -> Option<AliasViolation> {
        let (hidden_on, not_hidden_on): (Vec<_>, Vec<_>) = self
            .members
            .iter()
            .partition(|index| self.declaration(index).and_then(AliasMetadata::is_hidden) == Some(true));

        if hidden_on.is_empty() || not_hidden_on.is_empty() {
            return None;
        }

        Some(AliasViolation::InconsistentHidden {
            hidden_on: hidden_on.iter().map(|i| i.name().to_string()).collect(),
            not_hidden_on: not_hidden_on.iter().map(|i| i.name().to_string()).collect(),
        })
    }

    fn declaration<'a>(&self, index: &'a IndexMetadata) -> Option<&'a AliasMetadata> {
        index.alias(&self.alias_name)
    }

    /// Returns the alias name
    pub fn name(&self) -> &str {
        &self.alias_name
    }

    /// Returns the members in insertion order; never empty
    pub fn members(&self) -> &[Arc<IndexMetadata>] {
        &self.members
    }

    /// Returns the write index. `None` before validation or when the alias has no write target.
    pub fn write_index(&self) -> Option<&Arc<IndexMetadata>> {
        self.write_index.get().and_then(Option::as_ref)
    }

    /// Returns the hidden flag fixed from the first member
    pub fn is_hidden(&self) -> bool {
        self.is_hidden
    }

    /// Returns whether validation has sealed the group
    pub fn is_sealed(&self) -> bool {
        self.write_index.get().is_some()
    }

    /// Returns the first member's declaration of this alias
    pub fn first_alias_metadata(&self) -> Option<&AliasMetadata> {
        self.members.first().and_then(|index| self.declaration(index))
    }

    pub fn contains_index(&self, index_name: &str) -> bool {
        self.members.iter().any(|index| index.name() == index_name)
    }

    /// Iterates `(index name, alias declaration)` pairs in member order.
    ///
    /// Each call starts from the first member. Routing and filters may differ
    /// per member even though the alias name is shared.
    pub fn per_member_alias_view(&self) -> MemberAliases<'_> {
        MemberAliases {
            alias_name: &self.alias_name,
            members: self.members.iter(),
        }
    }
}

/// Iterator over each member's declaration of an alias
#[derive(Debug, Clone)]
pub struct MemberAliases<'a> {
    alias_name: &'a str,
    members: slice::Iter<'a, Arc<IndexMetadata>>,
}

impl<'a> Iterator for MemberAliases<'a> {
    type Item = (&'a str, &'a AliasMetadata);

    fn next(&mut self) -> Option<Self::Item> {
        // append() rejects members without a declaration, so nothing is skipped here
        for index in self.members.by_ref() {
            if let Some(declaration) = index.alias(self.alias_name) {
                return Some((index.name(), declaration));
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.members.len()))
    }
}
