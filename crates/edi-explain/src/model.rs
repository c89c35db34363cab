//! Data model for specification tables and segment explanations

use crate::{Error, Result};
use std::collections::HashMap;
use std::fmt;

/// EDI standards the router recognizes
///
/// `X12` is recognized for routing purposes but has no backing tables in
/// the built-in dataset; routing an X12 triple fails with `TableNotFound`
/// rather than `UnsupportedStandard`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Standard {
    Edifact,
    X12,
}

impl Standard {
    /// Parse a standard name, case-insensitively.
    pub fn parse(value: &str) -> Result<Self> {
        match value.trim().to_ascii_uppercase().as_str() {
            "EDIFACT" => Ok(Standard::Edifact),
            "X12" => Ok(Standard::X12),
            _ => Err(Error::UnsupportedStandard(value.trim().to_string())),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Standard::Edifact => "EDIFACT",
            Standard::X12 => "X12",
        }
    }
}

impl fmt::Display for Standard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Standard {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Standard::parse(s)
    }
}

/// Documentation for one segment (or segment+qualifier) within one
/// message specification version.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SegmentExplanation {
    /// What the segment means in this specification
    pub explanation: String,
    /// Status, data-element format constraints, and a literal example
    pub usage: String,
}

/// One raw table entry as supplied by a table definition.
///
/// Keys are segment tags with an optional qualifier joined by `+`
/// (e.g. `UNB`, `NAD+SE`, `DTM+137`). Stored upper-case; validated when
/// the table is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SegmentEntry {
    pub key: String,
    pub explanation: String,
    pub usage: String,
}

impl SegmentEntry {
    pub fn new(
        key: impl Into<String>,
        explanation: impl Into<String>,
        usage: impl Into<String>,
    ) -> Self {
        Self {
            key: key.into(),
            explanation: explanation.into(),
            usage: usage.into(),
        }
    }
}

/// Identifies a specification table to external callers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecDescriptor {
    pub standard: Standard,
    pub message_type: String,
    pub version: String,
    pub display_name: String,
}

impl SpecDescriptor {
    /// Create a descriptor; message type and version are normalized to
    /// upper-case. The version may be empty for specifications without a
    /// version dimension.
    pub fn new(
        standard: Standard,
        message_type: impl Into<String>,
        version: impl Into<String>,
        display_name: impl Into<String>,
    ) -> Self {
        Self {
            standard,
            message_type: message_type.into().trim().to_ascii_uppercase(),
            version: version.into().trim().to_ascii_uppercase(),
            display_name: display_name.into(),
        }
    }

    /// Table selection key: message type and version composed, or the
    /// message type alone when the version is empty.
    pub fn selection_key(&self) -> String {
        compose_key(&self.message_type, &self.version)
    }
}

impl fmt::Display for SpecDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display_name)
    }
}

/// Compose a table selection key from a message type and version,
/// normalized to upper-case.
pub(crate) fn compose_key(message_type: &str, version: &str) -> String {
    let message_type = message_type.trim().to_ascii_uppercase();
    let version = version.trim().to_ascii_uppercase();
    if version.is_empty() {
        message_type
    } else {
        format!("{message_type}_{version}")
    }
}

/// An immutable mapping from segment key to explanation, scoped to exactly
/// one (standard, message type, version) triple.
#[derive(Debug, Clone)]
pub struct SpecificationTable {
    descriptor: SpecDescriptor,
    segments: HashMap<String, SegmentExplanation>,
}

impl SpecificationTable {
    /// Build a table from raw entries, validating structure.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidTable` on an empty key or a duplicate key
    /// (compared case-insensitively). Callers treat this as fatal: a
    /// corrupted table definition aborts initialization.
    pub fn build(descriptor: SpecDescriptor, entries: Vec<SegmentEntry>) -> Result<Self> {
        let mut segments = HashMap::with_capacity(entries.len());

        for entry in entries {
            let key = entry.key.trim().to_ascii_uppercase();
            if key.is_empty() {
                return Err(Error::InvalidTable {
                    table: descriptor.display_name.clone(),
                    detail: "entry with empty segment key".to_string(),
                });
            }
            if segments
                .insert(
                    key.clone(),
                    SegmentExplanation {
                        explanation: entry.explanation,
                        usage: entry.usage,
                    },
                )
                .is_some()
            {
                return Err(Error::InvalidTable {
                    table: descriptor.display_name.clone(),
                    detail: format!("duplicate segment key '{key}'"),
                });
            }
        }

        Ok(Self {
            descriptor,
            segments,
        })
    }

    /// Look up a segment key, case-insensitively. Exact key match only;
    /// no partial or fuzzy matching.
    pub fn lookup(&self, key: &str) -> Option<&SegmentExplanation> {
        self.segments.get(&key.trim().to_ascii_uppercase())
    }

    pub fn descriptor(&self) -> &SpecDescriptor {
        &self.descriptor
    }

    /// Registered segment keys, sorted for deterministic listings.
    pub fn keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.segments.keys().map(String::as_str).collect();
        keys.sort_unstable();
        keys
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn descriptor() -> SpecDescriptor {
        SpecDescriptor::new(Standard::Edifact, "delfor", "d04a", "EDIFACT DELFOR D04A")
    }

    #[test]
    fn test_descriptor_normalizes_case() {
        let d = descriptor();
        assert_eq!(d.message_type, "DELFOR");
        assert_eq!(d.version, "D04A");
        assert_eq!(d.selection_key(), "DELFOR_D04A");
    }

    #[test]
    fn test_selection_key_without_version() {
        let d = SpecDescriptor::new(Standard::X12, "830", "", "X12 830");
        assert_eq!(d.selection_key(), "830");
    }

    #[test]
    fn test_build_stores_keys_upper_case() {
        let table = SpecificationTable::build(
            descriptor(),
            vec![SegmentEntry::new("nad+se", "seller party", "mandatory")],
        )
        .unwrap();

        assert!(table.lookup("NAD+SE").is_some());
        assert!(table.lookup("nad+se").is_some());
        assert_eq!(table.keys(), vec!["NAD+SE"]);
    }

    #[test]
    fn test_lookup_is_exact_match_only() {
        let table = SpecificationTable::build(
            descriptor(),
            vec![SegmentEntry::new("NAD+SE", "seller party", "mandatory")],
        )
        .unwrap();

        assert!(table.lookup("NAD").is_none());
        assert!(table.lookup("NAD+S").is_none());
    }

    #[test]
    fn test_build_rejects_duplicate_keys() {
        let result = SpecificationTable::build(
            descriptor(),
            vec![
                SegmentEntry::new("UNB", "a", "b"),
                SegmentEntry::new("unb", "c", "d"),
            ],
        );

        match result.unwrap_err() {
            Error::InvalidTable { table, detail } => {
                assert_eq!(table, "EDIFACT DELFOR D04A");
                assert!(detail.contains("duplicate"));
                assert!(detail.contains("UNB"));
            }
            e => panic!("expected InvalidTable, got {e:?}"),
        }
    }

    #[test]
    fn test_build_rejects_empty_key() {
        let result =
            SpecificationTable::build(descriptor(), vec![SegmentEntry::new("  ", "a", "b")]);
        assert!(matches!(result, Err(Error::InvalidTable { .. })));
    }

    #[test]
    fn test_standard_parse() {
        assert_eq!(Standard::parse("edifact").unwrap(), Standard::Edifact);
        assert_eq!(Standard::parse(" X12 ").unwrap(), Standard::X12);

        match Standard::parse("TRADACOMS").unwrap_err() {
            Error::UnsupportedStandard(value) => assert_eq!(value, "TRADACOMS"),
            e => panic!("expected UnsupportedStandard, got {e:?}"),
        }
    }
}
