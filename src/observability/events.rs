//! Observability events for the metadata layer
//!
//! Events are explicit and typed.

use std::fmt;

use super::logger::Severity;

/// Observable events in aerometa
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    // Configuration
    /// Configuration loaded
    ConfigLoaded,

    // Metadata loading
    /// Metadata file read begins
    MetadataLoadStart,
    /// Metadata file parsed
    MetadataLoaded,

    // Lookup construction
    /// Indices lookup build begins
    LookupBuildStart,
    /// Indices lookup built and every alias validated
    LookupBuilt,
    /// Indices lookup build rejected
    LookupRejected,

    // Alias validation
    /// Alias group sealed
    AliasValidated,
    /// Alias group failed validation
    AliasRejected,

    // Resolution
    /// A name was resolved to an index abstraction
    AbstractionResolved,
}

impl Event {
    /// Returns the string representation of the event
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::ConfigLoaded => "CONFIG_LOADED",

            Event::MetadataLoadStart => "METADATA_LOAD_BEGIN",
            Event::MetadataLoaded => "METADATA_LOADED",

            Event::LookupBuildStart => "LOOKUP_BUILD_BEGIN",
            Event::LookupBuilt => "LOOKUP_BUILD_COMPLETE",
            Event::LookupRejected => "LOOKUP_BUILD_REJECTED",

            Event::AliasValidated => "ALIAS_VALIDATED",
            Event::AliasRejected => "ALIAS_REJECTED",

            Event::AbstractionResolved => "ABSTRACTION_RESOLVED",
        }
    }

    /// Returns the severity this event is logged at
    pub fn severity(&self) -> Severity {
        match self {
            Event::AliasRejected | Event::LookupRejected => Severity::Warn,
            Event::AliasValidated | Event::AbstractionResolved => Severity::Trace,
            _ => Severity::Info,
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
