//! arXiv Search MCP Server - Entry Point
//!
//! Serves the `search_paper` tool over stdio (default) or HTTP.

use std::time::Duration;

use clap::Parser;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use arxiv_search_mcp::{ArxivSearchClient, config::Config, server::McpServer};

#[derive(Parser, Debug)]
#[command(name = "arxiv-search-mcp")]
#[command(about = "MCP server for arXiv paper search")]
#[command(version)]
struct Cli {
    /// RapidAPI key for the arXiv search API (overrides RAPID_API_KEY)
    #[arg(long)]
    api_key: Option<String>,

    /// Override the search endpoint URL (overrides ARXIV_SEARCH_API_URL)
    #[arg(long)]
    api_url: Option<String>,

    /// Request timeout in seconds
    #[arg(long, default_value = "30")]
    timeout_secs: u64,

    /// Transport mode: stdio or http
    #[arg(long, default_value = "stdio")]
    transport: Transport,

    /// HTTP server port (only used with --transport http)
    #[arg(long, default_value = "9997", env = "PORT")]
    port: u16,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info", env = "RUST_LOG")]
    log_level: String,

    /// Output logs as JSON
    #[arg(long)]
    json_logs: bool,
}

#[derive(Debug, Clone, Copy, Default, clap::ValueEnum)]
enum Transport {
    /// Standard input/output
    #[default]
    Stdio,
    /// JSON-RPC over HTTP POST
    Http,
}

fn init_tracing(log_level: &str, json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    let subscriber = tracing_subscriber::registry().with(filter);

    // stdout belongs to the stdio transport
    if json {
        subscriber.with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr)).init();
    } else {
        subscriber
            .with(tracing_subscriber::fmt::layer().compact().with_writer(std::io::stderr))
            .init();
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // A missing .env file is fine
    dotenv::dotenv().ok();

    let cli = Cli::parse();

    init_tracing(&cli.log_level, cli.json_logs);

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        transport = ?cli.transport,
        "Starting arXiv search MCP server"
    );

    let mut config =
        Config::from_env()?.with_request_timeout(Duration::from_secs(cli.timeout_secs));
    if let Some(key) = cli.api_key {
        config = config.with_api_key(key);
    }
    if let Some(url) = cli.api_url {
        config = config.try_with_search_url(url)?;
    }

    if !config.has_api_key() {
        tracing::warn!("RAPID_API_KEY is not set; upstream requests will be rejected");
    }

    let client = ArxivSearchClient::new(config)?;
    let server = McpServer::new(client);

    match cli.transport {
        Transport::Stdio => {
            tracing::info!("Running in stdio mode");
            server.run_stdio().await?;
        }
        Transport::Http => {
            tracing::info!(port = cli.port, "Running in HTTP mode");
            server.run_http(cli.port).await?;
        }
    }

    Ok(())
}
