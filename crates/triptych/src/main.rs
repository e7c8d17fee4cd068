//! Triptych CLI binary.
//!
//! Command-line access to the variation orchestrator: generate the
//! initial set for an idea, apply tweak rounds, and write the resulting
//! documents to disk.

use clap::Parser;

mod cli;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    use cli::{run, Cli};

    // Load OPENROUTER_API_KEY and endpoint overrides from .env if present
    dotenvy::dotenv().ok();

    // Parse command-line arguments
    let cli = Cli::parse();

    // Initialize tracing
    let log_level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_target(false)
        .init();

    run(cli).await
}
