use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

use chatbridge_core::Config;

#[derive(Args)]
pub struct ServeArgs {
    /// Port to listen on
    #[arg(short, long, env = "PORT", default_value_t = 5000)]
    pub port: u16,

    /// Host to bind to
    #[arg(long, default_value = "0.0.0.0")]
    pub host: String,

    /// Verbose logging
    #[arg(long, env = "DEBUG", default_value_t = true, action = clap::ArgAction::Set)]
    pub debug: bool,

    /// Base URL of the Ollama daemon
    #[arg(long, env = "OLLAMA_HOST", default_value = "http://localhost:11434")]
    pub ollama_host: String,

    /// Model used by the /api/v1/compact endpoint
    #[arg(long, env = "CHATBRIDGE_COMPACT_MODEL", default_value = "granite3.2:8b")]
    pub compact_model: String,

    /// Directory holding the static frontend
    #[arg(long, env = "CHATBRIDGE_STATIC_DIR", default_value = "static")]
    pub static_dir: PathBuf,
}

pub async fn execute(args: ServeArgs) -> Result<()> {
    let level = if args.debug {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()),
        )
        .init();

    let mut config = Config::default();
    config.server.port = args.port;
    config.server.host = args.host;
    config.server.debug = args.debug;
    config.ollama.host = args.ollama_host;
    config.ollama.compact_model = args.compact_model;
    config.static_dir = args.static_dir;

    println!(
        "Starting chatbridge on http://{}:{}",
        config.server.host, config.server.port
    );
    println!("Ollama host: {}", config.ollama.host);
    println!("\nAPI endpoints:");
    println!("  GET  /                 - Chat frontend");
    println!("  GET  /api/v1/models    - List Ollama models");
    println!("  POST /api/v1/response  - Chat completion");
    println!("  POST /api/v1/compact   - Summarize a conversation");
    println!("\nPress Ctrl+C to stop.\n");

    chatbridge_daemon::run_server(config).await?;

    Ok(())
}
