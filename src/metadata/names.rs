//! Index and alias name rules
//!
//! A name is rejected if it:
//! - is empty or longer than 255 bytes
//! - contains uppercase characters
//! - starts with `_`, `-` or `+`
//! - is `.` or `..`
//! - contains `\ / * ? " < > | , #` or whitespace

use std::sync::OnceLock;

use regex::Regex;

use super::errors::{MetadataError, MetadataResult};

/// Maximum name length in bytes
pub const MAX_NAME_BYTES: usize = 255;

fn forbidden_chars() -> &'static Regex {
    static FORBIDDEN: OnceLock<Regex> = OnceLock::new();
    FORBIDDEN.get_or_init(|| Regex::new(r#"[\\/*?"<>|,#\s]"#).expect("name pattern must compile"))
}

/// Validates an index or alias name.
pub fn validate_name(name: &str) -> MetadataResult<()> {
    if name.is_empty() {
        return Err(MetadataError::invalid_name(name, "must not be empty"));
    }
    if name.len() > MAX_NAME_BYTES {
        return Err(MetadataError::invalid_name(
            name,
            format!("must not be longer than {} bytes", MAX_NAME_BYTES),
        ));
    }
    if name == "." || name == ".." {
        return Err(MetadataError::invalid_name(name, "must not be '.' or '..'"));
    }
    if name.starts_with(['_', '-', '+']) {
        return Err(MetadataError::invalid_name(
            name,
            "must not start with '_', '-', or '+'",
        ));
    }
    if name.chars().any(char::is_uppercase) {
        return Err(MetadataError::invalid_name(name, "must be lowercase"));
    }
    if let Some(m) = forbidden_chars().find(name) {
        return Err(MetadataError::invalid_name(
            name,
            format!("must not contain '{}'", m.as_str()),
        ));
    }
    Ok(())
}
