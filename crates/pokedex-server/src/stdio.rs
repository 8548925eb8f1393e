//! Newline-delimited JSON-RPC over a byte stream (normally stdin/stdout).

use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

use pokedex_mcp::McpService;

/// Serve requests from `reader` until EOF, writing one response line per
/// request to `writer`. Requests are handled one at a time, in order.
///
/// # Errors
///
/// Returns an error if reading or writing the stream fails.
pub async fn serve<R, W>(service: &McpService, mut reader: R, mut writer: W) -> std::io::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut line = Vec::new();

    // Raw bytes: invalid UTF-8 must become a parse error, not end the loop.
    while reader.read_until(b'\n', &mut line).await? > 0 {
        let trimmed = line.trim_ascii();
        if trimmed.is_empty() {
            line.clear();
            continue;
        }

        let response = service.handle_message(trimmed).await;
        line.clear();
        let Some(response) = response else {
            continue;
        };

        let mut json = serde_json::to_string(&response)?;
        json.push('\n');
        writer.write_all(json.as_bytes()).await?;
        writer.flush().await?;
    }

    tracing::info!("stdin closed, shutting down");
    Ok(())
}
