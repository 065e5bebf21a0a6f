//! Server builder and run_server function
//!
//! This module provides the ServerBuilder for programmatic embedding and
//! the run_server function used by the binary, which loads configuration
//! from the CLI, config file, and environment.

use crate::config::Config;
use crate::server::server::HttpServer;
use crate::utils::error::{HubError, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing::info;

/// Command-line arguments
#[derive(Parser, Debug)]
#[command(name = "studyhub", about = "AZ-104 study hub edge API", version)]
pub struct Cli {
    /// Path to the YAML configuration file
    #[arg(long, env = "STUDYHUB_CONFIG", default_value = "config/studyhub.yaml")]
    pub config: PathBuf,
    /// Override the bind host
    #[arg(long)]
    pub host: Option<String>,
    /// Override the bind port
    #[arg(long)]
    pub port: Option<u16>,
}

/// Server builder for embedding the hub in another binary
pub struct ServerBuilder {
    config: Option<Config>,
}

impl ServerBuilder {
    /// Create a new server builder
    pub fn new() -> Self {
        Self { config: None }
    }

    /// Set configuration
    pub fn with_config(mut self, config: Config) -> Self {
        self.config = Some(config);
        self
    }

    /// Build the HTTP server
    pub async fn build(self) -> Result<HttpServer> {
        let config = self
            .config
            .ok_or_else(|| HubError::Config("Configuration is required".to_string()))?;

        HttpServer::new(&config).await
    }
}

impl Default for ServerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Run the server with automatic configuration loading
pub async fn run_server() -> Result<()> {
    let cli = Cli::parse();

    // Populate the process environment from .env before reading config
    let _ = dotenvy::dotenv();

    info!("Starting AZ-104 Study Hub API");

    let mut config = if cli.config.exists() {
        Config::from_file(&cli.config).await?
    } else {
        info!(
            "Configuration file {:?} not found, using environment configuration",
            cli.config
        );
        Config::from_env()?
    };

    if let Some(host) = cli.host {
        config.hub.server.host = host;
    }
    if let Some(port) = cli.port {
        config.hub.server.port = port;
    }

    let server = HttpServer::new(&config).await?;
    info!(
        "Server starting at: http://{}:{}",
        config.server().host,
        config.server().port
    );
    info!("API Endpoints:");
    info!("   POST /api/extract-concepts - CPRS concept extraction");
    info!("   POST /api/generate-cprs - Quiz generation");
    info!("   GET  /api/sync?userId=xxx - Score read");
    info!("   PUT  /api/sync - Score write");
    info!("   POST /api/user - User id issuance");
    info!("   GET  /api/anki-decks - Deck listing");
    info!("   GET  /api/anki-decks/:name - Deck download");

    server.start().await
}
