//! Stdio transport for MCP protocol.
//!
//! Handles newline-delimited JSON-RPC 2.0 over stdin/stdout. Logs go to
//! stderr so stdout carries protocol messages only.
//!
//! Each request runs in its own task, so a slow `tools/call` does not hold
//! up `ping` or other calls behind it. Responses are funnelled through one
//! channel to a single writer and may leave in a different order than
//! their requests arrived.

use std::sync::Arc;

use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tokio::sync::mpsc;

use super::McpServer;
use super::transport::{JsonRpcRequest, JsonRpcResponse, parse_error};

/// Serve MCP requests from `reader` until EOF, writing responses to `writer`.
///
/// Returns once input is exhausted and every in-flight request has been
/// answered.
///
/// # Errors
///
/// Returns error on read or write failure.
pub async fn serve<R, W>(server: Arc<McpServer>, reader: R, writer: W) -> anyhow::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let (tx, rx) = mpsc::unbounded_channel();

    tracing::info!("MCP stdio server ready, waiting for requests...");

    tokio::try_join!(read_requests(server, reader, tx), write_responses(writer, rx))?;
    Ok(())
}

/// Read lines until EOF, spawning one task per request.
///
/// The sender is dropped on return; the writer finishes once the spawned
/// tasks have dropped their clones too.
async fn read_requests<R>(
    server: Arc<McpServer>,
    mut reader: R,
    tx: mpsc::UnboundedSender<JsonRpcResponse>,
) -> anyhow::Result<()>
where
    R: AsyncBufRead + Unpin,
{
    let mut line = String::new();

    loop {
        line.clear();
        let bytes_read = reader.read_line(&mut line).await?;

        if bytes_read == 0 {
            tracing::info!("Stdin closed, shutting down");
            break;
        }

        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        match serde_json::from_str::<JsonRpcRequest>(trimmed) {
            Ok(request) => {
                tracing::debug!(method = %request.method, "Received request");
                let server = Arc::clone(&server);
                let tx = tx.clone();
                tokio::spawn(async move {
                    if let Some(response) = server.handle_request(&request).await {
                        // Writer gone means output already failed
                        let _ = tx.send(response);
                    }
                });
            }
            Err(e) => {
                let _ = tx.send(parse_error(&e));
            }
        }
    }

    Ok(())
}

async fn write_responses<W>(
    mut writer: W,
    mut rx: mpsc::UnboundedReceiver<JsonRpcResponse>,
) -> anyhow::Result<()>
where
    W: AsyncWrite + Unpin,
{
    while let Some(response) = rx.recv().await {
        write_message(&mut writer, &response).await?;
    }
    Ok(())
}

async fn write_message<W>(writer: &mut W, response: &JsonRpcResponse) -> anyhow::Result<()>
where
    W: AsyncWrite + Unpin,
{
    let response_json = serde_json::to_string(response)?;
    writer.write_all(response_json.as_bytes()).await?;
    writer.write_all(b"\n").await?;
    writer.flush().await?;
    Ok(())
}
