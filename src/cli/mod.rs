use crate::errors::AppResult;
use clap::{Parser, Subcommand};
use tracing_subscriber;

pub mod commands;

/// Base64 Image Extraction Tool
#[derive(Parser)]
#[command(name = "b64image")]
#[command(about = "Convert base64 image payloads into image files")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Convert base64/data-URL payloads (inline, file, or scraped from a web page) into image files
    Convert(commands::convert::ConvertCommand),
    /// Report the detected MIME type and decoded size of payloads without writing files
    Detect(commands::detect::DetectCommand),
}

pub async fn run() -> AppResult<()> {
    // Initialise tracing subscriber to capture info!() macros
    // Uses RUST_LOG environment variable (defaults to "error" if not set)
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("error")),
        )
        .try_init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Convert(command) => command.run().await,
        Commands::Detect(command) => command.run().await,
    }
}
