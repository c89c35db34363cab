//! Specification table registry and routing
//!
//! An explicit registry populated at startup replaces routing by name
//! construction: every supported (standard, message type, version) triple
//! maps to exactly one registered table, and a missing registration is a
//! diagnosable `TableNotFound` rather than a silent fallback.

use crate::model::{SpecDescriptor, SpecificationTable, Standard, compose_key};
use crate::{Error, Result};
use std::collections::HashMap;
use tracing::debug;

/// Registry mapping (standard, message type, version) to explanation tables.
///
/// Built once at startup and shared read-only afterwards; lookups take
/// `&self` and never mutate.
#[derive(Debug, Clone, Default)]
pub struct SpecRegistry {
    tables: HashMap<String, SpecificationTable>,
}

impl SpecRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            tables: HashMap::new(),
        }
    }

    /// Register a table under its descriptor's triple.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidTable` if a table is already registered for
    /// the same triple; exactly one table may exist per triple.
    pub fn register(&mut self, table: SpecificationTable) -> Result<()> {
        let key = scoped_key(table.descriptor());
        debug!(key = %key, entries = table.len(), "registering specification table");

        if self.tables.contains_key(&key) {
            return Err(Error::InvalidTable {
                table: table.descriptor().display_name.clone(),
                detail: format!("a table is already registered for '{key}'"),
            });
        }
        self.tables.insert(key, table);
        Ok(())
    }

    /// Route a (standard, message type, version) triple to its table.
    ///
    /// Inputs are matched case-insensitively. When the version is empty
    /// the table is selected by message type alone.
    ///
    /// # Errors
    ///
    /// `Error::UnsupportedStandard` when the standard is not recognized at
    /// all; `Error::TableNotFound` carrying the attempted selection key
    /// when the standard is recognized but the composite has no table.
    pub fn route(
        &self,
        standard: &str,
        message_type: &str,
        version: &str,
    ) -> Result<&SpecificationTable> {
        let standard = Standard::parse(standard)?;
        let key = compose_key(message_type, version);

        self.tables
            .get(&format!("{standard}/{key}"))
            .ok_or(Error::TableNotFound { standard, key })
    }

    /// Route directly by descriptor, for callers that hold one.
    pub fn route_descriptor(&self, descriptor: &SpecDescriptor) -> Result<&SpecificationTable> {
        self.route(
            descriptor.standard.as_str(),
            &descriptor.message_type,
            &descriptor.version,
        )
    }

    /// Descriptors of all registered tables, sorted by selection key for
    /// deterministic listings.
    pub fn descriptors(&self) -> Vec<&SpecDescriptor> {
        let mut descriptors: Vec<&SpecDescriptor> =
            self.tables.values().map(SpecificationTable::descriptor).collect();
        descriptors.sort_by_key(|d| (d.standard.as_str(), d.selection_key()));
        descriptors
    }

    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }
}

fn scoped_key(descriptor: &SpecDescriptor) -> String {
    format!("{}/{}", descriptor.standard, descriptor.selection_key())
}
