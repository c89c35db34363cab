//! # edi-assistant
//!
//! Chat assistant layer over the segment-explanation engine.
//!
//! This crate provides the two-mode assistant handler (local table lookup
//! vs. forwarding to a generative text-completion service), the completion
//! service client, and the request/response contract used by the transport
//! boundary.

pub mod completion;
pub mod handler;
pub mod service;

pub use completion::{CompletionConfig, CompletionService, GenerativeClient};
pub use handler::{Assistant, AssistantMode, ChatRole, ChatSession, ChatTurn};
pub use service::{SegmentRequest, SegmentResponse, answer_segment_request};

use thiserror::Error;

/// Errors that can occur in the assistant layer
#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {details}")]
    Configuration { details: String },

    #[error("Completion request failed during {context}: {source}")]
    Http {
        context: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Completion service error: {details}")]
    Completion { details: String },
}

pub type Result<T> = std::result::Result<T, Error>;
