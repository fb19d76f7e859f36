//! arXiv Search MCP Server
//!
//! A Model Context Protocol (MCP) server exposing a single `search_paper` tool
//! backed by the RapidAPI arXiv research paper search API.
//!
//! # Features
//!
//! - **One MCP tool**: `search_paper` with typed, optional filters
//! - **Pass-through results**: upstream JSON is returned verbatim
//! - **Never-failing calls**: every failure becomes a `{status, reason}` record
//! - **Two transports**: stdio (default) and HTTP
//!
//! # Example
//!
//! ```no_run
//! use arxiv_search_mcp::{ArxivSearchClient, Config, SearchRequest};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env()?;
//!     let client = ArxivSearchClient::new(config)?;
//!
//!     let outcome = client.search(&SearchRequest::new("diffusion models")).await;
//!     println!("{}", serde_json::to_string_pretty(&outcome)?);
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod server;
pub mod tools;

pub use client::ArxivSearchClient;
pub use config::Config;
pub use error::{ClientError, ToolError};
pub use models::{FailureResult, SearchOutcome, SearchRequest};
