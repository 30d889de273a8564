//! Todo List API server entry point

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use todo_api::{ApiServer, ServerConfig};

/// Todo list HTTP API with progress tracking
#[derive(Parser)]
#[command(name = "todo-api")]
#[command(version, about = "Todo list HTTP API with progress tracking")]
struct Cli {
    /// Configuration file (TOML); defaults to ./todo-api.toml if present
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Interface to bind
    #[arg(long)]
    host: Option<String>,

    /// Port to bind
    #[arg(short, long)]
    port: Option<u16>,

    /// Seed the sample item at startup
    #[arg(long)]
    seed: Option<bool>,
}

impl Cli {
    fn apply(self, mut config: ServerConfig) -> ServerConfig {
        if let Some(host) = self.host {
            config.host = host;
        }
        if let Some(port) = self.port {
            config.port = port;
        }
        if let Some(seed) = self.seed {
            config.seed_sample_data = seed;
        }
        config
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = ServerConfig::load(cli.config.as_deref()).context("loading configuration")?;
    let config = cli.apply(config);

    // Initialize tracing for logging
    tracing_subscriber::fmt()
        .with_max_level(config.log_level()?)
        .init();

    tracing::info!(address = %config.bind_address(), "Starting Todo API...");

    let server = ApiServer::from_config(config).await?;

    match server.run().await {
        Ok(()) => {
            tracing::info!("Todo API exited gracefully");
            Ok(())
        }
        Err(e) => {
            tracing::error!("Todo API error: {}", e);
            Err(e.into())
        }
    }
}
