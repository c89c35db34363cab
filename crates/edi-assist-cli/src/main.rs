//! # edi-assist-cli
//!
//! CLI for the EDI segment-explanation assistant.
//!
//! Provides direct segment lookups, free-text extraction, specification
//! listing, and an interactive chat session over the built-in tables
//! (plus any table files supplied with `--tables`).

use anyhow::Context;
use clap::Parser;
use edi_assistant::{Assistant, AssistantMode, ChatSession, CompletionConfig, GenerativeClient};
use edi_explain::{
    ExplainRequest, SpecDescriptor, SpecRegistry, explain, extract_segment, render_failure,
};
use edi_reference::TableLoader;
use std::io::{BufRead, Write};
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Parser)]
#[command(name = "edi-assist")]
#[command(about = "EDI segment explanation assistant")]
#[command(version)]
struct Cli {
    /// Directory with additional specification table files (JSON/YAML)
    #[arg(long)]
    tables: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,
}

#[derive(Parser)]
enum Commands {
    /// Explain a segment from a specification table
    Explain {
        /// Segment key (e.g. UNB, NAD+SE) or, with --free-text, a query
        query: String,

        /// EDI standard (e.g. EDIFACT)
        #[arg(short, long, default_value = "EDIFACT")]
        standard: String,

        /// Message type (e.g. DELFOR, DESADV)
        #[arg(short, long)]
        message_type: String,

        /// Specification version (e.g. D04A); may be empty
        #[arg(long, default_value = "")]
        version: String,

        /// Treat the query as free text and extract a candidate segment
        #[arg(long)]
        free_text: bool,
    },

    /// Extract a candidate segment key from free text
    Extract {
        /// The utterance to extract from
        query: String,
    },

    /// List registered specifications
    Specs {
        /// Emit JSON instead of plain text
        #[arg(long)]
        json: bool,
    },

    /// Interactive chat session
    Chat {
        /// EDI standard (e.g. EDIFACT)
        #[arg(short, long, default_value = "EDIFACT")]
        standard: String,

        /// Message type to answer from (e.g. DELFOR); omit for AI mode
        #[arg(short, long)]
        message_type: Option<String>,

        /// Specification version (e.g. D04A); may be empty
        #[arg(long, default_value = "")]
        version: String,

        /// Answer with the AI model instead of local tables
        #[arg(long)]
        ai: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Keep stdout clean for command output; logs go to stderr.
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let cli = Cli::parse();
    let registry = build_registry(cli.tables.as_deref())?;

    match cli.command {
        Commands::Explain {
            query,
            standard,
            message_type,
            version,
            free_text,
        } => {
            let request = if free_text {
                ExplainRequest::free_text(standard, message_type, version, query)
            } else {
                ExplainRequest::segment(standard, message_type, version, query)
            };

            // The four engine outcomes are answers, not process failures.
            match explain(&registry, &request) {
                Ok(text) => println!("{text}"),
                Err(error) => println!("{}", render_failure(&error)),
            }
        }

        Commands::Extract { query } => match extract_segment(&query) {
            Some(key) => println!("{key}"),
            None => println!("No segment identified. Try e.g. 'What is UNH?'."),
        },

        Commands::Specs { json } => {
            if json {
                let specs: Vec<serde_json::Value> = registry
                    .descriptors()
                    .iter()
                    .map(|d| {
                        serde_json::json!({
                            "standard": d.standard.as_str(),
                            "message_type": d.message_type,
                            "version": d.version,
                            "display_name": d.display_name,
                        })
                    })
                    .collect();
                println!("{}", serde_json::to_string_pretty(&specs)?);
            } else {
                for descriptor in registry.descriptors() {
                    println!("{}", descriptor.display_name);
                }
            }
        }

        Commands::Chat {
            standard,
            message_type,
            version,
            ai,
        } => {
            let spec = match message_type {
                Some(message_type) => Some(find_spec(&registry, &standard, &message_type, &version)?),
                None => None,
            };
            run_chat(registry, spec, ai).await?;
        }
    }

    Ok(())
}

fn build_registry(tables: Option<&std::path::Path>) -> anyhow::Result<SpecRegistry> {
    let mut registry = edi_reference::builtin_registry()
        .context("failed to build the built-in specification tables")?;

    if let Some(dir) = tables {
        let loader = TableLoader::new(vec![dir.to_path_buf()]);
        let count = loader
            .register_all(&mut registry)
            .with_context(|| format!("failed to load table files from {}", dir.display()))?;
        tracing::info!(count, dir = %dir.display(), "loaded additional specification tables");
    }

    Ok(registry)
}

fn find_spec(
    registry: &SpecRegistry,
    standard: &str,
    message_type: &str,
    version: &str,
) -> anyhow::Result<SpecDescriptor> {
    let table = registry
        .route(standard, message_type, version)
        .map_err(|error| anyhow::anyhow!(render_failure(&error)))?;
    Ok(table.descriptor().clone())
}

async fn run_chat(
    registry: SpecRegistry,
    spec: Option<SpecDescriptor>,
    ai: bool,
) -> anyhow::Result<()> {
    let mut assistant = Assistant::new(Arc::new(registry));
    if ai {
        match CompletionConfig::from_env() {
            Ok(config) => {
                assistant = assistant.with_completion(Box::new(GenerativeClient::new(config)?));
            }
            Err(error) => tracing::warn!(error = %error, "AI mode requested without configuration"),
        }
    }
    let mode = if ai {
        AssistantMode::AiModel
    } else {
        AssistantMode::LocalData
    };

    match &spec {
        Some(spec) => println!("Chatting about {}. Type 'exit' to quit.", spec.display_name),
        None => println!("Chatting without a selected specification. Type 'exit' to quit."),
    }

    let mut session = ChatSession::new();
    let stdin = std::io::stdin();
    loop {
        print!("> ");
        std::io::stdout().flush()?;

        let Some(line) = stdin.lock().lines().next() else {
            break;
        };
        let line = line?;
        let input = line.trim();
        if input.is_empty() {
            continue;
        }
        if input.eq_ignore_ascii_case("exit") || input.eq_ignore_ascii_case("quit") {
            break;
        }

        session.push_user(input);
        let answer = assistant.respond(input, mode, spec.as_ref()).await;
        session.push_assistant(answer.clone());
        println!("{answer}\n");
    }

    println!("Bye. ({} turns)", session.turns().len());
    Ok(())
}
