//! Request/response contract for the transport boundary
//!
//! A host server deserializes a [`SegmentRequest`], calls
//! [`answer_segment_request`], and serializes the [`SegmentResponse`]. The
//! response always carries an explanation string: engine failures are
//! rendered into their user-facing messages here, so the transport layer
//! has no error mapping of its own.

use edi_explain::{ExplainRequest, SpecRegistry, explain, render_failure};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// A segment explanation request as received from the transport layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SegmentRequest {
    /// e.g. `BGM`, `NAD+SE`
    pub segment: String,
    /// e.g. `EDIFACT`, `X12`
    pub standard: String,
    /// e.g. `DELFOR`, `830`
    pub message_type: String,
    /// e.g. `D04A`; may be empty for version-less specifications
    #[serde(default)]
    pub version: String,
}

/// The answer returned to the transport layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SegmentResponse {
    /// The requested segment, echoed verbatim
    pub segment: String,
    pub explanation: String,
}

/// Answer a segment request against the registry.
pub fn answer_segment_request(
    registry: &SpecRegistry,
    request: &SegmentRequest,
) -> SegmentResponse {
    debug!(
        segment = %request.segment,
        standard = %request.standard,
        message_type = %request.message_type,
        version = %request.version,
        "answering segment request"
    );

    let explain_request = ExplainRequest::segment(
        &request.standard,
        &request.message_type,
        &request.version,
        &request.segment,
    );

    let explanation = match explain(registry, &explain_request) {
        Ok(text) => text,
        Err(error) => render_failure(&error),
    };

    SegmentResponse {
        segment: request.segment.clone(),
        explanation,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use edi_explain::{SegmentEntry, SpecDescriptor, SpecificationTable, Standard};

    fn registry() -> SpecRegistry {
        let table = SpecificationTable::build(
            SpecDescriptor::new(Standard::Edifact, "DELFOR", "D04A", "EDIFACT DELFOR D04A"),
            vec![SegmentEntry::new("BGM", "Beginning of message.", "Mandatory.")],
        )
        .unwrap();
        let mut registry = SpecRegistry::new();
        registry.register(table).unwrap();
        registry
    }

    #[test]
    fn test_request_deserializes_from_wire_shape() {
        let json = r#"
        {
            "segment": "NAD+SE",
            "standard": "EDIFACT",
            "message_type": "DELFOR",
            "version": "D04A"
        }
        "#;
        let request: SegmentRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.segment, "NAD+SE");
        assert_eq!(request.version, "D04A");
    }

    #[test]
    fn test_version_defaults_to_empty() {
        let json = r#"{ "segment": "ST", "standard": "X12", "message_type": "830" }"#;
        let request: SegmentRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.version, "");
    }

    #[test]
    fn test_answer_echoes_segment_verbatim() {
        let registry = registry();
        let request = SegmentRequest {
            segment: "bgm".to_string(),
            standard: "EDIFACT".to_string(),
            message_type: "DELFOR".to_string(),
            version: "D04A".to_string(),
        };

        let response = answer_segment_request(&registry, &request);
        assert_eq!(response.segment, "bgm");
        assert!(response.explanation.contains("Beginning of message."));
    }

    #[test]
    fn test_answer_renders_failures_as_explanations() {
        let registry = registry();
        let request = SegmentRequest {
            segment: "XYZ".to_string(),
            standard: "EDIFACT".to_string(),
            message_type: "DELFOR".to_string(),
            version: "D04A".to_string(),
        };

        let response = answer_segment_request(&registry, &request);
        assert!(response.explanation.contains("No explanation available"));
        assert!(response.explanation.contains("XYZ"));
    }
}
