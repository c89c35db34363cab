#![deny(warnings)]
#![deny(rust_2018_idioms)]
#![warn(clippy::all)]

//! # edi-reference
//!
//! Built-in EDI specification explanation tables and table file loading.
//!
//! The built-in dataset covers the four EDIFACT specifications used in the
//! automotive supply-chain flow: DELFOR D04A, DELFOR D96A, DESADV D07A,
//! and DESADV D96A. Additional tables can be loaded from JSON/YAML files
//! at startup via [`TableLoader`].

mod delfor_d04a;
mod delfor_d96a;
mod desadv_d07a;
mod desadv_d96a;
pub mod loader;

pub use loader::TableLoader;

use edi_explain::{SpecRegistry, SpecificationTable};
use thiserror::Error;
use tracing::info;

/// Errors that can occur when building or loading specification tables
#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid table file format: {0}")]
    InvalidFormat(String),

    #[error("Table definition error: {0}")]
    Definition(#[from] edi_explain::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

/// Build a registry containing the built-in tables.
///
/// # Errors
///
/// Returns an error when a built-in table definition is structurally
/// invalid; callers treat this as fatal and abort initialization.
pub fn builtin_registry() -> Result<SpecRegistry> {
    let mut registry = SpecRegistry::new();
    register_builtin(&mut registry)?;
    info!(tables = registry.len(), "built-in specification tables registered");
    Ok(registry)
}

/// Register the built-in tables into an existing registry.
///
/// # Errors
///
/// Returns an error on an invalid table definition or a conflicting
/// registration.
pub fn register_builtin(registry: &mut SpecRegistry) -> Result<()> {
    let tables = [
        (delfor_d04a::descriptor(), delfor_d04a::entries()),
        (delfor_d96a::descriptor(), delfor_d96a::entries()),
        (desadv_d07a::descriptor(), desadv_d07a::entries()),
        (desadv_d96a::descriptor(), desadv_d96a::entries()),
    ];

    for (descriptor, entries) in tables {
        let table = SpecificationTable::build(descriptor, entries)?;
        registry.register(table)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_registry_has_four_tables() {
        let registry = builtin_registry().unwrap();
        assert_eq!(registry.len(), 4);

        let keys: Vec<String> = registry
            .descriptors()
            .iter()
            .map(|d| d.selection_key())
            .collect();
        assert_eq!(
            keys,
            vec!["DELFOR_D04A", "DELFOR_D96A", "DESADV_D07A", "DESADV_D96A"]
        );
    }

    #[test]
    fn test_builtin_tables_are_populated() {
        let registry = builtin_registry().unwrap();
        for descriptor in registry.descriptors() {
            let table = registry.route_descriptor(descriptor).unwrap();
            assert!(!table.is_empty(), "{} is empty", descriptor.display_name);
            assert!(table.lookup("UNH").is_some(), "{descriptor} lacks UNH");
        }
    }

    #[test]
    fn test_every_builtin_key_resolves_in_any_case() {
        let registry = builtin_registry().unwrap();
        for descriptor in registry.descriptors() {
            let table = registry.route_descriptor(descriptor).unwrap();
            for key in table.keys() {
                assert!(table.lookup(key).is_some());
                assert!(table.lookup(&key.to_ascii_lowercase()).is_some());
            }
        }
    }
}
