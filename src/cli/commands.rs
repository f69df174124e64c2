//! CLI command implementations
//!
//! Every command follows the same sequence:
//! 1. Configuration Load
//! 2. Metadata Load
//! 3. Lookup Build (every alias validated)
//! 4. One JSON response on stdout

use std::path::Path;

use serde_json::{json, Value};

use crate::metadata::{AliasGroup, IndexAbstraction, IndicesLookup, MetadataLoader};

use super::args::Command;
use super::config::Config;
use super::errors::{CliError, CliResult};
use super::io::{write_error, write_response};

/// Main CLI entry point
///
/// Parses arguments and dispatches to the appropriate command. Failures are
/// written as an error response before being returned.
pub fn run() -> CliResult<()> {
    let cli = super::args::Cli::parse_args();
    let result = run_command(cli.command);
    if let Err(ref e) = result {
        write_error(e.code_str(), e.message())?;
    }
    result
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Validate { config } => validate(&config),
        Command::Resolve { config, name } => resolve(&config, &name),
        Command::Aliases { config, name } => aliases(&config, &name),
    }
}

/// Build the lookup and report what it contains
pub fn validate(config_path: &Path) -> CliResult<()> {
    let config = Config::load(config_path)?;
    let lookup = load_lookup(&config)?;
    write_response(summarize_lookup(&lookup), config.pretty_output)
}

/// Resolve one name and print its abstraction
pub fn resolve(config_path: &Path, name: &str) -> CliResult<()> {
    let config = Config::load(config_path)?;
    let lookup = load_lookup(&config)?;

    let abstraction = lookup
        .resolve(name)
        .ok_or_else(|| CliError::not_found(format!("'{}' is neither an index nor an alias", name)))?;

    write_response(describe_abstraction(abstraction), config.pretty_output)
}

/// Print each member's declaration of an alias
pub fn aliases(config_path: &Path, name: &str) -> CliResult<()> {
    let config = Config::load(config_path)?;
    let lookup = load_lookup(&config)?;

    let group = lookup
        .resolve(name)
        .and_then(IndexAbstraction::as_alias)
        .ok_or_else(|| CliError::not_found(format!("'{}' is not an alias", name)))?;

    write_response(describe_member_aliases(group)?, config.pretty_output)
}

/// Load the configured metadata file and build its lookup
pub fn load_lookup(config: &Config) -> CliResult<IndicesLookup> {
    let indices = MetadataLoader::load_file(config.metadata_path())?;
    Ok(IndicesLookup::build(indices)?)
}

/// Counts plus the write index of every alias
pub fn summarize_lookup(lookup: &IndicesLookup) -> Value {
    let write_indices: serde_json::Map<String, Value> = lookup
        .aliases()
        .map(|alias| {
            let write_index = alias.write_index().map(|i| i.name());
            (alias.name().to_string(), json!(write_index))
        })
        .collect();

    json!({
        "valid": true,
        "indices": lookup.index_count(),
        "aliases": lookup.alias_count(),
        "write_indices": write_indices,
        "visible": lookup.visible_names(),
    })
}

/// Type, name, indices, write index and hidden flag of an abstraction
pub fn describe_abstraction(abstraction: &IndexAbstraction) -> Value {
    let indices: Vec<&str> = abstraction.indices().iter().map(|i| i.name()).collect();

    json!({
        "type": abstraction.kind(),
        "name": abstraction.name(),
        "indices": indices,
        "write_index": abstraction.write_index().map(|i| i.name()),
        "is_hidden": abstraction.is_hidden(),
    })
}

/// One entry per member, in member order
pub fn describe_member_aliases(group: &AliasGroup) -> CliResult<Value> {
    let members = group
        .per_member_alias_view()
        .map(|(index, declaration)| -> CliResult<Value> {
            Ok(json!({
                "index": index,
                "declaration": serde_json::to_value(declaration)?,
            }))
        })
        .collect::<CliResult<Vec<_>>>()?;

    Ok(json!({
        "alias": group.name(),
        "members": members,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metadata::{AliasMetadata, IndexMetadata};

    fn lookup() -> IndicesLookup {
        let write = AliasMetadata::builder("logs")
            .write_index(Some(true))
            .routing("1")
            .build()
            .unwrap();
        let read = AliasMetadata::builder("logs").build().unwrap();
        IndicesLookup::build(vec![
            IndexMetadata::new("logs-1").unwrap().put_alias(write),
            IndexMetadata::new("logs-2").unwrap().put_alias(read),
        ])
        .unwrap()
    }

    #[test]
    fn test_summarize() {
        let summary = summarize_lookup(&lookup());
        assert_eq!(summary["indices"], 2);
        assert_eq!(summary["aliases"], 1);
        assert_eq!(summary["write_indices"]["logs"], "logs-1");
    }

    #[test]
    fn test_describe_alias() {
        let lookup = lookup();
        let described = describe_abstraction(lookup.get("logs").unwrap());
        assert_eq!(described["type"], "alias");
        assert_eq!(described["indices"], json!(["logs-1", "logs-2"]));
        assert_eq!(described["write_index"], "logs-1");
        assert_eq!(described["is_hidden"], false);
    }

    #[test]
    fn test_describe_concrete_index() {
        let lookup = lookup();
        let described = describe_abstraction(lookup.get("logs-2").unwrap());
        assert_eq!(described["type"], "concrete_index");
        assert_eq!(described["write_index"], "logs-2");
    }

    #[test]
    fn test_describe_member_aliases() {
        let lookup = lookup();
        let group = lookup.get("logs").unwrap().as_alias().unwrap();
        let described = describe_member_aliases(group).unwrap();
        assert_eq!(described["members"][0]["index"], "logs-1");
        assert_eq!(described["members"][0]["declaration"]["index_routing"], "1");
        assert_eq!(described["members"][1]["index"], "logs-2");
        assert!(described["members"][1]["declaration"].get("is_write_index").is_none());
    }
}
