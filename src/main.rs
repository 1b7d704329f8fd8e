//! frontdesk - MCP server that files Zendesk support tickets
//!
//! This binary runs as an MCP server using stdio transport, so agent hosts
//! such as Claude Desktop can create Zendesk tickets through a tool call.
//!
//! # Configuration
//!
//! Set the following environment variables (or use a `.env` file):
//!
//! - `ZENDESK_URL`: account URL or subdomain
//! - `ZENDESK_EMAIL`: agent email for token authentication
//! - `ZENDESK_TOKEN`: Zendesk API token
//!
//! They are read on every tool call, so the server starts even if they are
//! not set yet.
//!
//! # Usage
//!
//! ```bash
//! ZENDESK_URL=acme ZENDESK_EMAIL=agent@acme.com ZENDESK_TOKEN=xxx ./frontdesk
//! ```

use anyhow::{Context, Result};
use rmcp::{transport::stdio, ServiceExt};
use tracing_subscriber::{fmt, EnvFilter};

use frontdesk::{config, server, submitter, zendesk_client};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (ignore errors if not found)
    dotenvy::dotenv().ok();

    // Log to stderr; stdout is reserved for MCP JSON-RPC messages
    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("frontdesk=info")),
        )
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    tracing::info!("Starting frontdesk MCP server v{}", env!("CARGO_PKG_VERSION"));

    // Configuration is only checked here, not cached
    match config::Config::from_env() {
        Ok(config) => match zendesk_client::ZendeskClient::tickets_endpoint(&config.base_url) {
            Ok(endpoint) => tracing::info!(endpoint = %endpoint, "Zendesk configuration found"),
            Err(e) => tracing::warn!(error = %e, "ZENDESK_URL is not usable"),
        },
        Err(e) => {
            tracing::warn!(
                error = %e,
                "Zendesk configuration incomplete; new_ticket will fail until it is set"
            );
        }
    }

    let server = server::DeskServer::new(submitter::TicketSubmitter::from_env());

    tracing::info!("Server initialized, starting stdio transport");

    let service = server
        .serve(stdio())
        .await
        .inspect_err(|e| {
            tracing::error!("serving error: {:?}", e);
        })
        .context("Failed to start server")?;

    tracing::info!("Server running, waiting for requests");

    service
        .waiting()
        .await
        .context("Server error during operation")?;

    tracing::info!("Server shutting down");

    Ok(())
}
