mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::serve::ServeArgs;

#[derive(Parser)]
#[command(name = "chatbridge")]
#[command(author, version, about = "HTTP gateway in front of a local Ollama daemon", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the gateway server
    Serve(ServeArgs),

    /// Check whether a running gateway is reachable
    Status {
        /// Gateway base URL
        #[arg(long, default_value = "http://localhost:5000")]
        url: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Serve(args) => {
            commands::serve::execute(args).await?;
        }
        Commands::Status { url } => {
            commands::status::execute(&url).await?;
        }
    }

    Ok(())
}
