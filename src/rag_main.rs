//! # tutor-rag — LightRAG command-line bridge
//!
//! Usage:
//!   tutor-rag insert "Course: Rust\n..."   # Index a document
//!   tutor-rag query "What is ownership?"   # Prints {"result": "..."}

use anyhow::Result;
use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;
use tutor_core::{RagBackend, TutorConfig};
use tutor_rag::LightRagClient;

#[derive(Clone, Copy, ValueEnum)]
enum Action {
    Insert,
    Query,
}

#[derive(Parser)]
#[command(name = "tutor-rag", version, about = "Forward course content and questions to LightRAG")]
struct Cli {
    /// What to do with DATA
    action: Action,

    /// Document text (insert) or question (query)
    data: String,

    /// Config file (defaults to $TUTOR_CONFIG, then ~/.tutor/config.toml)
    #[arg(short, long)]
    config: Option<String>,

    /// LightRAG server URL (overrides config)
    #[arg(long)]
    endpoint: Option<String>,

    /// Retrieval mode (overrides config)
    #[arg(long)]
    mode: Option<String>,

    /// Verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "tutor_rag=debug" } else { "tutor_rag=warn" };
    // stdout carries the result; logs go to stderr.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let path = cli.config.or_else(|| std::env::var("TUTOR_CONFIG").ok());
    let mut config = match path {
        Some(p) => TutorConfig::load_from(std::path::Path::new(&*shellexpand::tilde(&p)))?,
        None => TutorConfig::load()?,
    };
    if let Some(endpoint) = cli.endpoint {
        config.rag.endpoint = endpoint;
    }
    if let Some(mode) = cli.mode {
        config.rag.mode = mode;
    }

    let rag = LightRagClient::new(&config.rag)?;
    tracing::debug!("Using {} backend at {}", rag.name(), rag.base_url());

    match cli.action {
        Action::Insert => {
            rag.insert(&cli.data).await?;
            println!("Content inserted successfully");
        }
        Action::Query => {
            let result = rag.query(&cli.data).await?;
            println!("{}", serde_json::json!({ "result": result }));
        }
    }
    Ok(())
}
