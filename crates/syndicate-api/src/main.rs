//! Syndicate API Server binary.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use syndicate_api::{server::run_server, state::AppState, ServerConfig};
use tracing_subscriber::EnvFilter;

/// DCM Syndicate Pricing REST API Server
#[derive(Parser, Debug)]
#[command(name = "syndicate-api-server")]
#[command(version, about, long_about = None)]
struct Args {
    /// Configuration file (TOML)
    #[arg(short, long, env = "SYNDICATE_CONFIG")]
    config: Option<PathBuf>,

    /// Host address to bind to [default: 127.0.0.1]
    #[arg(short = 'H', long, env = "SYNDICATE_HOST")]
    host: Option<String>,

    /// Port to listen on [default: 8000]
    #[arg(short, long, env = "SYNDICATE_PORT")]
    port: Option<u16>,

    /// Origins allowed by CORS, comma separated; `*` allows any
    #[arg(long, env = "SYNDICATE_ALLOWED_ORIGINS", value_delimiter = ',')]
    allowed_origins: Vec<String>,

    /// Reference tables file (TOML) replacing the built-in tables
    #[arg(short, long, env = "SYNDICATE_REFERENCE_DATA")]
    tables: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    /// Layers command-line and environment settings over the config file.
    fn into_config(self) -> anyhow::Result<ServerConfig> {
        let mut config = match &self.config {
            Some(path) => ServerConfig::from_file(path)?,
            None => ServerConfig::default(),
        };

        if let Some(host) = self.host {
            config.host = host;
        }
        if let Some(port) = self.port {
            config.port = port;
        }
        if !self.allowed_origins.is_empty() {
            config.allowed_origins = self.allowed_origins;
        }
        if self.tables.is_some() {
            config.reference_data = self.tables;
        }

        Ok(config)
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Initialize logging
    let default_filter = if args.verbose {
        "debug,tower_http=debug"
    } else {
        "info,tower_http=info"
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .init();

    let config = args.into_config()?;
    let state = AppState::from_config(&config).context("failed to load reference tables")?;
    tracing::info!("Pricing against {} reference tables", state.reference_source);

    run_server(state, &config).await
}
