//! # Tutor — Course Knowledge Server
//!
//! Serves the keyword resolver, course insertion and the topic graph over HTTP.
//!
//! Usage:
//!   tutor                          # Serve on 127.0.0.1:8000
//!   tutor --port 9000              # Custom port
//!   tutor --config ./tutor.toml    # Explicit config file
//!   tutor --init-config            # Write a default config file and exit

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use tutor_core::TutorConfig;
use tutor_knowledge::KnowledgeStore;

#[derive(Parser)]
#[command(name = "tutor", version, about = "📚 Tutor — course knowledge server")]
struct Cli {
    /// Config file (defaults to $TUTOR_CONFIG, then ~/.tutor/config.toml)
    #[arg(short, long)]
    config: Option<String>,

    /// Bind host (overrides config)
    #[arg(long)]
    host: Option<String>,

    /// Bind port (overrides config)
    #[arg(short, long)]
    port: Option<u16>,

    /// Write a default config file to the config path and exit
    #[arg(long)]
    init_config: bool,

    /// Verbose logging
    #[arg(short, long)]
    verbose: bool,
}

/// `--config`, then `$TUTOR_CONFIG`. `None` means the default path.
fn explicit_config_path(flag: Option<&str>) -> Option<PathBuf> {
    flag.map(str::to_string)
        .or_else(|| std::env::var("TUTOR_CONFIG").ok())
        .map(|p| PathBuf::from(&*shellexpand::tilde(&p)))
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        "tutor=debug,tutor_gateway=debug,tutor_knowledge=debug,tower_http=debug"
    } else {
        "tutor=info,tutor_gateway=info,tutor_knowledge=info"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_target(false)
        .init();

    let explicit = explicit_config_path(cli.config.as_deref());

    if cli.init_config {
        let path = explicit.unwrap_or_else(TutorConfig::default_path);
        if path.exists() {
            println!("⚠️  Config already exists: {}", path.display());
        } else {
            TutorConfig::default().save_to(&path)?;
            println!("✅ Default config written to {}", path.display());
        }
        return Ok(());
    }

    let mut config = match explicit {
        Some(path) => TutorConfig::load_from(&path)?,
        None => TutorConfig::load()?,
    };
    if let Some(host) = cli.host {
        config.gateway.host = host;
    }
    if let Some(port) = cli.port {
        config.gateway.port = port;
    }

    tutor_gateway::start(&config.gateway, KnowledgeStore::seeded()).await
}
