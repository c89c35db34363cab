//! Assistant flow tests over the built-in specification tables

use edi_assistant::{Assistant, AssistantMode, SegmentRequest, answer_segment_request};
use edi_reference::builtin_registry;
use std::sync::Arc;

fn assistant() -> Assistant {
    Assistant::new(Arc::new(builtin_registry().unwrap()))
}

fn delfor_d04a(assistant: &Assistant) -> edi_explain::SpecDescriptor {
    assistant
        .registry()
        .route("EDIFACT", "DELFOR", "D04A")
        .unwrap()
        .descriptor()
        .clone()
}

#[tokio::test]
async fn local_mode_answers_segment_question() {
    let assistant = assistant();
    let spec = delfor_d04a(&assistant);

    let answer = assistant
        .respond("What is UNB?", AssistantMode::LocalData, Some(&spec))
        .await;
    assert!(answer.contains("Interchange Header"));
}

#[tokio::test]
async fn local_mode_reports_unknown_segment_with_spec_name() {
    let assistant = assistant();
    let spec = delfor_d04a(&assistant);

    let answer = assistant
        .respond("What is TODAY?", AssistantMode::LocalData, Some(&spec))
        .await;
    assert!(answer.contains("No explanation available"));
    assert!(answer.contains("EDIFACT DELFOR D04A"));
    assert!(answer.contains("TODAY"));
}

#[tokio::test]
async fn local_mode_clarification_differs_from_unknown_segment() {
    let assistant = assistant();
    let spec = delfor_d04a(&assistant);

    let vague = assistant
        .respond("hello there", AssistantMode::LocalData, Some(&spec))
        .await;
    let unknown = assistant
        .respond("What is TODAY?", AssistantMode::LocalData, Some(&spec))
        .await;
    assert_ne!(vague, unknown);
}

#[test]
fn segment_service_round_trip() {
    let registry = builtin_registry().unwrap();
    let request = SegmentRequest {
        segment: "GIN+BJ".to_string(),
        standard: "EDIFACT".to_string(),
        message_type: "DESADV".to_string(),
        version: "D96A".to_string(),
    };

    let response = answer_segment_request(&registry, &request);
    assert_eq!(response.segment, "GIN+BJ");
    assert!(response.explanation.contains("batch number"));

    let wire = serde_json::to_string(&response).unwrap();
    let parsed: edi_assistant::SegmentResponse = serde_json::from_str(&wire).unwrap();
    assert_eq!(parsed.segment, "GIN+BJ");
}
