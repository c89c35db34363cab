//! # edi-explain
//!
//! Segment-explanation resolution engine for EDI message specifications.
//!
//! This crate provides the core lookup flow for explaining EDI segments:
//! immutable explanation tables, a registry routing
//! (standard, message type, version) triples to tables, a case-insensitive
//! segment resolver, a free-text candidate extractor, and a formatter that
//! renders explanations and failure messages for callers.

pub mod explain;
pub mod extract;
pub mod format;
pub mod model;
pub mod registry;
pub mod resolve;

pub use explain::{ExplainRequest, explain};
pub use extract::extract_segment;
pub use format::{format_explanation, render_failure, render_resolution};
pub use model::{SegmentEntry, SegmentExplanation, SpecDescriptor, SpecificationTable, Standard};
pub use registry::SpecRegistry;
pub use resolve::{Resolution, resolve};

use thiserror::Error;

/// Errors that can occur when resolving segment explanations
///
/// The first four variants are the expected, recoverable request outcomes;
/// `InvalidTable` only occurs while building a registry at startup and is
/// treated as fatal by callers.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Unsupported EDI standard: {0}")]
    UnsupportedStandard(String),

    #[error("No specification table registered for {standard} key '{key}'")]
    TableNotFound { standard: Standard, key: String },

    #[error("Could not identify a segment in query '{query}'")]
    NoSegmentFound { query: String },

    #[error("No explanation available for {table} segment {key}")]
    NotFoundInTable { key: String, table: String },

    #[error("Invalid specification table '{table}': {detail}")]
    InvalidTable { table: String, detail: String },
}

pub type Result<T> = std::result::Result<T, Error>;
