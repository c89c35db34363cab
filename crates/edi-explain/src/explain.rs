//! The top-level explain operation
//!
//! Ties the components together in the order extraction → routing →
//! resolution → formatting. This is the single logical operation the
//! request-handling layer calls.

use crate::extract::extract_segment;
use crate::format::format_explanation;
use crate::registry::SpecRegistry;
use crate::resolve::{Resolution, resolve};
use crate::{Error, Result};
use tracing::debug;

/// One explanation request against the registry.
#[derive(Debug, Clone)]
pub struct ExplainRequest {
    pub standard: String,
    pub message_type: String,
    /// May be empty for specifications without a version dimension.
    pub version: String,
    /// Either a segment key (`free_text == false`) or an arbitrary
    /// utterance to extract a candidate key from.
    pub query: String,
    pub free_text: bool,
}

impl ExplainRequest {
    pub fn segment(
        standard: impl Into<String>,
        message_type: impl Into<String>,
        version: impl Into<String>,
        segment: impl Into<String>,
    ) -> Self {
        Self {
            standard: standard.into(),
            message_type: message_type.into(),
            version: version.into(),
            query: segment.into(),
            free_text: false,
        }
    }

    pub fn free_text(
        standard: impl Into<String>,
        message_type: impl Into<String>,
        version: impl Into<String>,
        query: impl Into<String>,
    ) -> Self {
        Self {
            standard: standard.into(),
            message_type: message_type.into(),
            version: version.into(),
            query: query.into(),
            free_text: true,
        }
    }
}

/// Explain a segment, or a segment extracted from free text, against the
/// specification selected by the request's triple.
///
/// # Errors
///
/// `UnsupportedStandard` and `TableNotFound` for routing failures,
/// `NoSegmentFound` when free-text extraction yields no candidate, and
/// `NotFoundInTable` when the key is not documented in the routed table.
/// All four are expected, recoverable outcomes.
pub fn explain(registry: &SpecRegistry, request: &ExplainRequest) -> Result<String> {
    let key = if request.free_text {
        extract_segment(&request.query).ok_or_else(|| Error::NoSegmentFound {
            query: request.query.clone(),
        })?
    } else {
        request.query.trim().to_ascii_uppercase()
    };

    let table = registry.route(&request.standard, &request.message_type, &request.version)?;
    debug!(
        key = %key,
        table = %table.descriptor().selection_key(),
        "resolving segment"
    );

    match resolve(table, &key) {
        Resolution::Found(record) => Ok(format_explanation(record)),
        Resolution::NotFound { key, table } => Err(Error::NotFoundInTable {
            key,
            table: table.display_name.clone(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{SegmentEntry, SpecDescriptor, SpecificationTable, Standard};

    fn registry() -> SpecRegistry {
        let table = SpecificationTable::build(
            SpecDescriptor::new(Standard::Edifact, "DELFOR", "D04A", "EDIFACT DELFOR D04A"),
            vec![
                SegmentEntry::new("UNH", "Message header.", "Mandatory."),
                SegmentEntry::new("NAD+SE", "Seller party.", "Mandatory."),
            ],
        )
        .unwrap();

        let mut registry = SpecRegistry::new();
        registry.register(table).unwrap();
        registry
    }

    #[test]
    fn test_explain_direct_segment() {
        let registry = registry();
        let request = ExplainRequest::segment("EDIFACT", "DELFOR", "D04A", "unh");
        let text = explain(&registry, &request).unwrap();
        assert!(text.starts_with("**Explanation**\nMessage header."));
        assert!(text.contains("**Usage**\nMandatory."));
    }

    #[test]
    fn test_explain_free_text() {
        let registry = registry();
        let request = ExplainRequest::free_text("EDIFACT", "DELFOR", "D04A", "What is UNH?");
        assert!(explain(&registry, &request).is_ok());
    }

    #[test]
    fn test_explain_free_text_without_candidate() {
        let registry = registry();
        let request = ExplainRequest::free_text("EDIFACT", "DELFOR", "D04A", "hello there");
        match explain(&registry, &request).unwrap_err() {
            Error::NoSegmentFound { query } => assert_eq!(query, "hello there"),
            e => panic!("expected NoSegmentFound, got {e:?}"),
        }
    }

    #[test]
    fn test_explain_unknown_segment() {
        let registry = registry();
        let request = ExplainRequest::segment("EDIFACT", "DELFOR", "D04A", "BGM");
        match explain(&registry, &request).unwrap_err() {
            Error::NotFoundInTable { key, table } => {
                assert_eq!(key, "BGM");
                assert_eq!(table, "EDIFACT DELFOR D04A");
            }
            e => panic!("expected NotFoundInTable, got {e:?}"),
        }
    }

    #[test]
    fn test_explain_extraction_precedes_routing() {
        // The spec flow runs the extractor before the router, so an
        // ambiguous query reports NoSegmentFound even for a bad triple.
        let registry = registry();
        let request = ExplainRequest::free_text("EDIFACT", "ORDERS", "D96A", "hello there");
        assert!(matches!(
            explain(&registry, &request),
            Err(Error::NoSegmentFound { .. })
        ));
    }

    #[test]
    fn test_explain_is_idempotent() {
        let registry = registry();
        let request = ExplainRequest::segment("EDIFACT", "DELFOR", "D04A", "NAD+SE");
        let first = explain(&registry, &request).unwrap();
        let second = explain(&registry, &request).unwrap();
        assert_eq!(first, second);
    }
}
