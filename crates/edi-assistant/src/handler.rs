//! Assistant handler: mode dispatch and chat turns
//!
//! The handler answers each user utterance either from the local tables
//! (extract → route → resolve → format) or by forwarding a prompt to the
//! completion service. Every outcome is a user-facing answer string; the
//! handler never surfaces an error to the chat layer.

use crate::completion::CompletionService;
use chrono::{DateTime, Utc};
use edi_explain::{ExplainRequest, SpecDescriptor, SpecRegistry, explain, render_failure};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, warn};

const SPECIFICATIONS_URL: &str = "https://explore.hcltech.com/EDI/cars/specifications.html";

/// Keywords that short-circuit to the specifications URL answer.
const URL_KEYWORDS: [&str; 5] = [
    "specification url",
    "specs url",
    "guidelines url",
    "documentation url",
    "link for edi specs",
];

/// How the assistant answers a given utterance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssistantMode {
    /// Answer from the local specification tables.
    LocalData,
    /// Forward the utterance to the completion service.
    AiModel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Assistant,
}

/// One turn in a chat session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatTurn {
    pub role: ChatRole,
    pub content: String,
    pub at: DateTime<Utc>,
}

/// An ordered chat history
#[derive(Debug, Clone, Default)]
pub struct ChatSession {
    turns: Vec<ChatTurn>,
}

impl ChatSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_user(&mut self, content: impl Into<String>) {
        self.push(ChatRole::User, content.into());
    }

    pub fn push_assistant(&mut self, content: impl Into<String>) {
        self.push(ChatRole::Assistant, content.into());
    }

    fn push(&mut self, role: ChatRole, content: String) {
        self.turns.push(ChatTurn {
            role,
            content,
            at: Utc::now(),
        });
    }

    pub fn turns(&self) -> &[ChatTurn] {
        &self.turns
    }
}

/// The two-mode chat assistant.
pub struct Assistant {
    registry: Arc<SpecRegistry>,
    completion: Option<Box<dyn CompletionService>>,
}

impl Assistant {
    pub fn new(registry: Arc<SpecRegistry>) -> Self {
        Self {
            registry,
            completion: None,
        }
    }

    pub fn with_completion(mut self, service: Box<dyn CompletionService>) -> Self {
        self.completion = Some(service);
        self
    }

    pub fn registry(&self) -> &SpecRegistry {
        &self.registry
    }

    /// Answer one utterance. Always produces an answer string; failures
    /// from the engine or the completion service are rendered as
    /// user-facing messages.
    pub async fn respond(
        &self,
        input: &str,
        mode: AssistantMode,
        spec: Option<&SpecDescriptor>,
    ) -> String {
        let normalized = input.to_lowercase();
        if URL_KEYWORDS.iter().any(|k| normalized.contains(k)) {
            return format!("You can find the Volvo Cars EDI specifications at: {SPECIFICATIONS_URL}");
        }

        match mode {
            AssistantMode::LocalData => self.respond_local(input, spec),
            AssistantMode::AiModel => self.respond_ai(input, spec).await,
        }
    }

    fn respond_local(&self, input: &str, spec: Option<&SpecDescriptor>) -> String {
        let Some(spec) = spec else {
            return "In local data mode, please select a specific EDI specification to query its \
                    details."
                .to_string();
        };

        if input.starts_with(&format!("Show information for {}", spec.display_name)) {
            return format!(
                "You've selected {}. Please ask about a specific segment (e.g., 'What is UNH?').",
                spec.display_name
            );
        }

        debug!(spec = %spec.display_name, "answering from local tables");
        let request = ExplainRequest::free_text(
            spec.standard.as_str(),
            &spec.message_type,
            &spec.version,
            input,
        );

        match explain(&self.registry, &request) {
            Ok(text) => text,
            Err(error) => render_failure(&error),
        }
    }

    async fn respond_ai(&self, input: &str, spec: Option<&SpecDescriptor>) -> String {
        let Some(service) = &self.completion else {
            return "AI model is currently unavailable. API key might be missing or invalid."
                .to_string();
        };

        let prompt = build_prompt(input, spec);
        debug!(prompt_len = prompt.len(), "forwarding to completion service");

        match service.complete(&prompt).await {
            Ok(text) => text,
            Err(error) => {
                warn!(error = %error, "completion service failed");
                "Error communicating with the AI service. Please try again later.".to_string()
            }
        }
    }
}

fn build_prompt(input: &str, spec: Option<&SpecDescriptor>) -> String {
    let context = spec
        .map(|s| {
            format!(
                "The user might be asking in the context of {} ({}-{} {}).\n",
                s.display_name, s.standard, s.message_type, s.version
            )
        })
        .unwrap_or_default();

    format!(
        "You are an expert AI assistant for Volvo Cars EDI (Electronic Data Interchange).\n\
         Your primary goal is to provide accurate and helpful information regarding EDI \
         standards and practices relevant to Volvo Cars suppliers.\n\
         {context}Be concise, clear, and directly answer the user's question.\n\n\
         User's question: \"{input}\"\n\nAnswer:"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Result;
    use async_trait::async_trait;
    use edi_explain::{SegmentEntry, SpecificationTable, Standard};

    struct EchoService;

    #[async_trait]
    impl CompletionService for EchoService {
        async fn complete(&self, prompt: &str) -> Result<String> {
            Ok(format!("echo: {prompt}"))
        }
    }

    struct FailingService;

    #[async_trait]
    impl CompletionService for FailingService {
        async fn complete(&self, _prompt: &str) -> Result<String> {
            Err(crate::Error::Completion {
                details: "down".to_string(),
            })
        }
    }

    fn registry() -> Arc<SpecRegistry> {
        let table = SpecificationTable::build(
            SpecDescriptor::new(Standard::Edifact, "DELFOR", "D04A", "EDIFACT DELFOR D04A"),
            vec![SegmentEntry::new("UNH", "Message header.", "Mandatory.")],
        )
        .unwrap();
        let mut registry = SpecRegistry::new();
        registry.register(table).unwrap();
        Arc::new(registry)
    }

    fn descriptor() -> SpecDescriptor {
        SpecDescriptor::new(Standard::Edifact, "DELFOR", "D04A", "EDIFACT DELFOR D04A")
    }

    #[tokio::test]
    async fn test_local_mode_answers_from_tables() {
        let assistant = Assistant::new(registry());
        let spec = descriptor();

        let answer = assistant
            .respond("What is UNH?", AssistantMode::LocalData, Some(&spec))
            .await;
        assert!(answer.contains("Message header."));
    }

    #[tokio::test]
    async fn test_local_mode_requires_spec_selection() {
        let assistant = Assistant::new(registry());

        let answer = assistant
            .respond("What is UNH?", AssistantMode::LocalData, None)
            .await;
        assert!(answer.contains("select a specific EDI specification"));
    }

    #[tokio::test]
    async fn test_local_mode_asks_for_clarification() {
        let assistant = Assistant::new(registry());
        let spec = descriptor();

        let answer = assistant
            .respond("hello there", AssistantMode::LocalData, Some(&spec))
            .await;
        assert!(answer.contains("Could not identify a specific segment"));
    }

    #[tokio::test]
    async fn test_selection_greeting() {
        let assistant = Assistant::new(registry());
        let spec = descriptor();

        let answer = assistant
            .respond(
                "Show information for EDIFACT DELFOR D04A",
                AssistantMode::LocalData,
                Some(&spec),
            )
            .await;
        assert!(answer.starts_with("You've selected EDIFACT DELFOR D04A."));
    }

    #[tokio::test]
    async fn test_url_shortcut_bypasses_both_modes() {
        let assistant = Assistant::new(registry());

        let answer = assistant
            .respond(
                "where is the specification URL?",
                AssistantMode::AiModel,
                None,
            )
            .await;
        assert!(answer.contains("specifications.html"));
    }

    #[tokio::test]
    async fn test_ai_mode_without_client() {
        let assistant = Assistant::new(registry());

        let answer = assistant
            .respond("What is EDIFACT?", AssistantMode::AiModel, None)
            .await;
        assert!(answer.contains("AI model is currently unavailable"));
    }

    #[tokio::test]
    async fn test_ai_mode_builds_context_prompt() {
        let assistant = Assistant::new(registry()).with_completion(Box::new(EchoService));
        let spec = descriptor();

        let answer = assistant
            .respond("What is EDIFACT?", AssistantMode::AiModel, Some(&spec))
            .await;
        assert!(answer.starts_with("echo: "));
        assert!(answer.contains("EDIFACT DELFOR D04A"));
        assert!(answer.contains("User's question: \"What is EDIFACT?\""));
    }

    #[tokio::test]
    async fn test_ai_mode_failure_is_user_facing() {
        let assistant = Assistant::new(registry()).with_completion(Box::new(FailingService));

        let answer = assistant
            .respond("What is EDIFACT?", AssistantMode::AiModel, None)
            .await;
        assert!(answer.contains("Error communicating with the AI service"));
    }

    #[test]
    fn test_chat_session_ordering() {
        let mut session = ChatSession::new();
        session.push_user("What is UNH?");
        session.push_assistant("**Explanation**\n...");

        let turns = session.turns();
        assert_eq!(turns.len(), 2);
        assert_eq!(turns[0].role, ChatRole::User);
        assert_eq!(turns[1].role, ChatRole::Assistant);
        assert!(turns[0].at <= turns[1].at);
    }
}
