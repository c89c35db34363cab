//! Rendering of explanations and failure outcomes
//!
//! Every failure kind renders a distinct message so callers (and tests)
//! can tell an unknown segment from an unknown specification from an
//! ambiguous query.

use crate::Error;
use crate::model::{SegmentExplanation, SpecDescriptor};
use crate::resolve::Resolution;

/// Render a found record into the two-section text block used uniformly
/// across all tables.
pub fn format_explanation(record: &SegmentExplanation) -> String {
    format!(
        "**Explanation**\n{}\n\n**Usage**\n{}",
        record.explanation, record.usage
    )
}

/// Render a resolution outcome into the caller-facing text.
pub fn render_resolution(resolution: &Resolution<'_>) -> String {
    match resolution {
        Resolution::Found(record) => format_explanation(record),
        Resolution::NotFound { key, table } => not_found_message(key, table),
    }
}

fn not_found_message(key: &str, table: &SpecDescriptor) -> String {
    format!(
        "No explanation available for {} segment {key}.",
        table.display_name
    )
}

/// Render a request-level failure into the caller-facing text.
///
/// All four expected kinds are user-facing outcomes, not faults; the
/// wording asks for clarification where clarification can help.
pub fn render_failure(error: &Error) -> String {
    match error {
        Error::UnsupportedStandard(value) => {
            format!("Unsupported EDI standard '{value}'.")
        }
        Error::TableNotFound { standard, key } => format!(
            "No specification is registered for {standard} '{key}'. \
             Check the message type and version."
        ),
        Error::NoSegmentFound { query } => format!(
            "Could not identify a specific segment in your query '{query}'. \
             Please ask about a specific segment (e.g., 'BGM', 'NAD+SE')."
        ),
        Error::NotFoundInTable { key, table } => {
            format!("No explanation available for {table} segment {key}.")
        }
        // Not a request outcome; init-time failures abort startup instead.
        Error::InvalidTable { .. } => error.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Standard;

    #[test]
    fn test_two_section_block() {
        let record = SegmentExplanation {
            explanation: "Marks the start of the message.".to_string(),
            usage: "Mandatory. Example: UNH+1+DELFOR:D:04A:UN".to_string(),
        };
        assert_eq!(
            format_explanation(&record),
            "**Explanation**\nMarks the start of the message.\n\n\
             **Usage**\nMandatory. Example: UNH+1+DELFOR:D:04A:UN"
        );
    }

    #[test]
    fn test_failure_messages_are_distinct() {
        let failures = [
            Error::UnsupportedStandard("TRADACOMS".to_string()),
            Error::TableNotFound {
                standard: Standard::X12,
                key: "830".to_string(),
            },
            Error::NoSegmentFound {
                query: "hello there".to_string(),
            },
            Error::NotFoundInTable {
                key: "TODAY".to_string(),
                table: "EDIFACT DELFOR D04A".to_string(),
            },
        ];

        let rendered: Vec<String> = failures.iter().map(render_failure).collect();
        for (i, message) in rendered.iter().enumerate() {
            for other in &rendered[i + 1..] {
                assert_ne!(message, other);
            }
        }
    }

    #[test]
    fn test_not_found_message_names_spec_and_segment() {
        let message = render_failure(&Error::NotFoundInTable {
            key: "XYZ".to_string(),
            table: "EDIFACT DESADV D96A".to_string(),
        });
        assert!(message.contains("EDIFACT DESADV D96A"));
        assert!(message.contains("XYZ"));
    }
}
