//! Segment resolution against a routed table
//!
//! An unknown segment key is an expected, common case, so resolution
//! returns a structured outcome instead of an error; only routing failures
//! (see `registry`) are treated as exceptional.

use crate::model::{SegmentExplanation, SpecDescriptor, SpecificationTable};

/// Outcome of resolving a segment key against one table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution<'a> {
    /// The key is documented in the table.
    Found(&'a SegmentExplanation),
    /// The key is well-formed but not documented in this table; carries
    /// the normalized key and the table's identity for diagnostics.
    NotFound {
        key: String,
        table: &'a SpecDescriptor,
    },
}

impl Resolution<'_> {
    pub fn is_found(&self) -> bool {
        matches!(self, Resolution::Found(_))
    }
}

/// Resolve a segment key against a table, case-insensitively.
pub fn resolve<'a>(table: &'a SpecificationTable, key: &str) -> Resolution<'a> {
    let normalized = key.trim().to_ascii_uppercase();
    match table.lookup(&normalized) {
        Some(explanation) => Resolution::Found(explanation),
        None => Resolution::NotFound {
            key: normalized,
            table: table.descriptor(),
        },
    }
}
