//! End-to-end resolution tests over the built-in tables

use edi_explain::{Error, ExplainRequest, explain, render_failure};
use edi_reference::builtin_registry;

#[test]
fn test_explain_delfor_d04a_unb() {
    let registry = builtin_registry().unwrap();
    let request = ExplainRequest::segment("EDIFACT", "DELFOR", "D04A", "UNB");

    let text = explain(&registry, &request).unwrap();
    assert!(text.contains("Interchange Header"));
    assert!(text.starts_with("**Explanation**\n"));
    assert!(text.contains("\n\n**Usage**\n"));
}

#[test]
fn test_explain_desadv_d96a_batch_number() {
    let registry = builtin_registry().unwrap();
    let request = ExplainRequest::segment("EDIFACT", "DESADV", "D96A", "GIN+BJ");

    let text = explain(&registry, &request).unwrap();
    assert!(text.contains("batch number"));
}

#[test]
fn test_explain_is_case_insensitive_end_to_end() {
    let registry = builtin_registry().unwrap();

    let upper = explain(
        &registry,
        &ExplainRequest::segment("EDIFACT", "DELFOR", "D04A", "NAD+SE"),
    )
    .unwrap();
    let lower = explain(
        &registry,
        &ExplainRequest::segment("edifact", "delfor", "d04a", "nad+se"),
    )
    .unwrap();

    assert_eq!(upper, lower);
}

#[test]
fn test_explain_routes_versions_to_distinct_tables() {
    let registry = builtin_registry().unwrap();

    // UNH is documented in both DELFOR versions with different wording.
    let d04a = explain(
        &registry,
        &ExplainRequest::segment("EDIFACT", "DELFOR", "D04A", "UNH"),
    )
    .unwrap();
    let d96a = explain(
        &registry,
        &ExplainRequest::segment("EDIFACT", "DELFOR", "D96A", "UNH"),
    )
    .unwrap();

    assert_ne!(d04a, d96a);
}

#[test]
fn test_explain_free_text_flow() {
    let registry = builtin_registry().unwrap();
    let request = ExplainRequest::free_text("EDIFACT", "DELFOR", "D96A", "Tell me about DTM+137");

    let text = explain(&registry, &request).unwrap();
    assert!(text.contains("qualifier 137"));
}

#[test]
fn test_explain_x12_has_no_backing_table() {
    let registry = builtin_registry().unwrap();
    let request = ExplainRequest::segment("X12", "830", "", "ST");

    match explain(&registry, &request).unwrap_err() {
        Error::TableNotFound { key, .. } => assert_eq!(key, "830"),
        e => panic!("expected TableNotFound, got {e:?}"),
    }
}

#[test]
fn test_unknown_segment_and_unknown_spec_render_differently() {
    let registry = builtin_registry().unwrap();

    let unknown_segment = explain(
        &registry,
        &ExplainRequest::segment("EDIFACT", "DELFOR", "D04A", "TODAY"),
    )
    .unwrap_err();
    let unknown_spec = explain(
        &registry,
        &ExplainRequest::segment("EDIFACT", "ORDERS", "D96A", "UNB"),
    )
    .unwrap_err();

    assert_ne!(render_failure(&unknown_segment), render_failure(&unknown_spec));
}

#[test]
fn test_repeated_calls_are_byte_identical() {
    let registry = builtin_registry().unwrap();
    let request = ExplainRequest::free_text("EDIFACT", "DESADV", "D07A", "explain RFF+ON segment");

    let first = explain(&registry, &request).unwrap();
    for _ in 0..3 {
        assert_eq!(explain(&registry, &request).unwrap(), first);
    }
}
