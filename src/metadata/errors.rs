//! Metadata error types
//!
//! Error codes:
//! - AERO_METADATA_INVALID_STATE (FATAL)
//! - AERO_ALIAS_STATE_INVALID (REJECT)
//! - AERO_METADATA_NAME_CONFLICT (REJECT)
//! - AERO_METADATA_INVALID_NAME (REJECT)
//! - AERO_METADATA_MALFORMED (FATAL)

use std::fmt;

use thiserror::Error;

/// Severity levels for metadata errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// The metadata change is rejected
    Reject,
    /// The enclosing cluster-state build must abort
    Fatal,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Reject => write!(f, "REJECT"),
            Severity::Fatal => write!(f, "FATAL"),
        }
    }
}

/// Metadata-specific error codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetadataErrorCode {
    /// Structural misuse of the abstraction API
    AeroMetadataInvalidState,
    /// Alias members disagree with each other
    AeroAliasStateInvalid,
    /// An index and an alias (or two indices) share a name
    AeroMetadataNameConflict,
    /// Index or alias name is not allowed
    AeroMetadataInvalidName,
    /// Metadata file could not be read or parsed
    AeroMetadataMalformed,
}

impl MetadataErrorCode {
    /// Returns the string code
    pub fn code(&self) -> &'static str {
        match self {
            MetadataErrorCode::AeroMetadataInvalidState => "AERO_METADATA_INVALID_STATE",
            MetadataErrorCode::AeroAliasStateInvalid => "AERO_ALIAS_STATE_INVALID",
            MetadataErrorCode::AeroMetadataNameConflict => "AERO_METADATA_NAME_CONFLICT",
            MetadataErrorCode::AeroMetadataInvalidName => "AERO_METADATA_INVALID_NAME",
            MetadataErrorCode::AeroMetadataMalformed => "AERO_METADATA_MALFORMED",
        }
    }

    /// Returns the severity level for this error
    pub fn severity(&self) -> Severity {
        match self {
            MetadataErrorCode::AeroMetadataInvalidState
            | MetadataErrorCode::AeroMetadataMalformed => Severity::Fatal,
            _ => Severity::Reject,
        }
    }
}

impl fmt::Display for MetadataErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A single inconsistency found while validating an alias group
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AliasViolation {
    /// More than one member claims to be the write index
    #[error("has more than one write index [{}]", .indices.join(","))]
    MultipleWriteIndices {
        /// Conflicting index names, sorted
        indices: Vec<String>,
    },

    /// Members disagree on whether the alias is hidden
    #[error(
        "has is_hidden set to true on indices [{}] but does not have is_hidden set to true on indices [{}]; \
         alias must have the same is_hidden setting on all indices",
        .hidden_on.join(","),
        .not_hidden_on.join(",")
    )]
    InconsistentHidden {
        /// Indices declaring the alias hidden
        hidden_on: Vec<String>,
        /// Indices declaring it visible or not declaring it at all
        not_hidden_on: Vec<String>,
    },
}

/// Metadata error type with full context
#[derive(Debug, Clone)]
pub struct MetadataError {
    /// Error code
    code: MetadataErrorCode,
    /// Human-readable message
    message: String,
    /// Offending index or alias name, if applicable
    name: Option<String>,
    /// Alias violations, non-empty only for AERO_ALIAS_STATE_INVALID
    violations: Vec<AliasViolation>,
}

impl MetadataError {
    /// Create an invalid state error
    pub fn invalid_state(message: impl Into<String>) -> Self {
        Self {
            code: MetadataErrorCode::AeroMetadataInvalidState,
            message: message.into(),
            name: None,
            violations: Vec::new(),
        }
    }

    /// Create an alias state error carrying every violation found
    pub fn alias_state(alias: impl Into<String>, violations: Vec<AliasViolation>) -> Self {
        let alias = alias.into();
        let message = violations
            .iter()
            .map(|v| format!("alias [{}] {}", alias, v))
            .collect::<Vec<_>>()
            .join("; ");
        Self {
            code: MetadataErrorCode::AeroAliasStateInvalid,
            message,
            name: Some(alias),
            violations,
        }
    }

    /// Create a name conflict error
    pub fn name_conflict(name: impl Into<String>, reason: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            code: MetadataErrorCode::AeroMetadataNameConflict,
            message: format!("Name '{}' {}", name, reason.into()),
            name: Some(name),
            violations: Vec::new(),
        }
    }

    /// Create an invalid name error
    pub fn invalid_name(name: impl Into<String>, reason: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            code: MetadataErrorCode::AeroMetadataInvalidName,
            message: format!("Invalid name '{}': {}", name, reason.into()),
            name: Some(name),
            violations: Vec::new(),
        }
    }

    /// Create an error for a malformed metadata file
    pub fn malformed(path: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            code: MetadataErrorCode::AeroMetadataMalformed,
            message: format!("Malformed metadata file '{}': {}", path.into(), reason.into()),
            name: None,
            violations: Vec::new(),
        }
    }

    /// Returns the error code
    pub fn code(&self) -> MetadataErrorCode {
        self.code
    }

    /// Returns the severity level
    pub fn severity(&self) -> Severity {
        self.code.severity()
    }

    /// Returns the error message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the offending index or alias name if applicable
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Returns the alias violations
    pub fn violations(&self) -> &[AliasViolation] {
        &self.violations
    }

    /// Returns whether this is a fatal error
    pub fn is_fatal(&self) -> bool {
        self.severity() == Severity::Fatal
    }
}

impl fmt::Display for MetadataError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}: {}", self.code.severity(), self.code.code(), self.message)
    }
}

impl std::error::Error for MetadataError {}

/// Result type for metadata operations
pub type MetadataResult<T> = Result<T, MetadataError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(MetadataErrorCode::AeroMetadataInvalidState.code(), "AERO_METADATA_INVALID_STATE");
        assert_eq!(MetadataErrorCode::AeroAliasStateInvalid.code(), "AERO_ALIAS_STATE_INVALID");
        assert_eq!(MetadataErrorCode::AeroMetadataNameConflict.code(), "AERO_METADATA_NAME_CONFLICT");
        assert_eq!(MetadataErrorCode::AeroMetadataInvalidName.code(), "AERO_METADATA_INVALID_NAME");
        assert_eq!(MetadataErrorCode::AeroMetadataMalformed.code(), "AERO_METADATA_MALFORMED");
    }

    #[test]
    fn test_severity_levels() {
        assert_eq!(MetadataErrorCode::AeroMetadataInvalidState.severity(), Severity::Fatal);
        assert_eq!(MetadataErrorCode::AeroAliasStateInvalid.severity(), Severity::Reject);
        assert_eq!(MetadataErrorCode::AeroMetadataMalformed.severity(), Severity::Fatal);
    }

    #[test]
    fn test_violation_display() {
        let v = AliasViolation::MultipleWriteIndices {
            indices: vec!["logs-1".into(), "logs-2".into()],
        };
        assert_eq!(v.to_string(), "has more than one write index [logs-1,logs-2]");
    }

    #[test]
    fn test_alias_state_message_names_alias() {
        let err = MetadataError::alias_state(
            "logs",
            vec![AliasViolation::InconsistentHidden {
                hidden_on: vec!["logs-1".into()],
                not_hidden_on: vec!["logs-2".into()],
            }],
        );
        let display = format!("{}", err);
        assert!(display.contains("REJECT"));
        assert!(display.contains("AERO_ALIAS_STATE_INVALID"));
        assert!(display.contains("alias [logs] has is_hidden set to true on indices [logs-1]"));
        assert_eq!(err.name(), Some("logs"));
        assert!(!err.is_fatal());
    }

    #[test]
    fn test_alias_state_joins_multiple_violations() {
        let err = MetadataError::alias_state(
            "logs",
            vec![
                AliasViolation::MultipleWriteIndices {
                    indices: vec!["a".into(), "b".into()],
                },
                AliasViolation::InconsistentHidden {
                    hidden_on: vec!["a".into()],
                    not_hidden_on: vec!["b".into()],
                },
            ],
        );
        assert_eq!(err.violations().len(), 2);
        assert!(err.message().contains("more than one write index"));
        assert!(err.message().contains("is_hidden"));
    }
}
