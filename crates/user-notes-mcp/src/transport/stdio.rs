//! Stdio transport — reads JSON-RPC from stdin, writes to stdout.
//!
//! Accepts both newline-delimited JSON and `Content-Length` framed messages.
//! Responses use whichever framing the client used last.

use tokio::io::{
    AsyncBufRead, AsyncBufReadExt, AsyncReadExt, AsyncWrite, AsyncWriteExt, BufReader,
};

use crate::protocol::ProtocolHandler;
use crate::types::{McpError, McpResult, RequestId};

use super::framing;

/// Hard limit for framed stdio payloads (8 MiB).
const MAX_CONTENT_LENGTH_BYTES: usize = 8 * 1024 * 1024;

/// Stdio transport for desktop MCP clients.
pub struct StdioTransport {
    handler: ProtocolHandler,
}

impl StdioTransport {
    /// Create a new stdio transport with the given handler.
    pub fn new(handler: ProtocolHandler) -> Self {
        Self { handler }
    }

    /// Run the transport loop on the process's stdin and stdout.
    pub async fn run(&self) -> McpResult<()> {
        let reader = BufReader::new(tokio::io::stdin());
        let mut stdout = tokio::io::stdout();
        self.run_with(reader, &mut stdout).await
    }

    /// Run the transport loop over arbitrary streams until EOF or shutdown.
    pub async fn run_with<R, W>(&self, mut reader: R, writer: &mut W) -> McpResult<()>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let mut buf: Vec<u8> = Vec::new();
        let mut content_length: Option<usize> = None;
        let mut framed_output = false;

        tracing::info!("Stdio transport started");

        loop {
            buf.clear();
            let bytes_read = reader.read_until(b'\n', &mut buf).await?;

            if bytes_read == 0 {
                tracing::info!("EOF on stdin, shutting down");
                self.handler.cleanup().await;
                break;
            }

            let line = match std::str::from_utf8(&buf) {
                Ok(line) => line,
                Err(e) => {
                    tracing::warn!("Discarding line that is not valid UTF-8: {e}");
                    let err = McpError::ParseError(format!("Invalid UTF-8: {e}"));
                    write_parse_error(writer, &err, framed_output).await?;
                    continue;
                }
            };
            let trimmed = line.trim_end_matches(['\r', '\n']);

            if let Some(n) = parse_content_length(trimmed)? {
                content_length = Some(n);
                framed_output = true;
                continue;
            }

            if let Some(n) = content_length {
                // Headers end at the first blank line; anything else
                // (e.g. Content-Type) is ignored.
                if trimmed.is_empty() {
                    let mut body = vec![0u8; n];
                    reader.read_exact(&mut body).await?;
                    let payload = String::from_utf8_lossy(&body).to_string();

                    if self.process_message(&payload, framed_output, writer).await? {
                        break;
                    }
                    content_length = None;
                }
                continue;
            }

            if trimmed.trim().is_empty() {
                continue;
            }

            framed_output = false;
            if self.process_message(trimmed, framed_output, writer).await? {
                break;
            }
        }

        Ok(())
    }

    /// Handle one message. Returns true when the loop should stop.
    async fn process_message<W>(
        &self,
        input: &str,
        framed_output: bool,
        writer: &mut W,
    ) -> McpResult<bool>
    where
        W: AsyncWrite + Unpin,
    {
        match framing::parse_message(input.trim()) {
            Ok(msg) => {
                if let Some(response) = self.handler.handle_message(msg).await {
                    write_response(writer, &response, framed_output).await?;
                }
                if self.handler.shutdown_requested() {
                    tracing::info!("Shutdown acknowledged, exiting stdio transport loop");
                    return Ok(true);
                }
            }
            Err(e) => {
                tracing::warn!("Parse error: {e}");
                write_parse_error(writer, &e, framed_output).await?;
            }
        }
        Ok(false)
    }
}

/// Answer a message that could not be parsed. The id is unknown, so it is null.
async fn write_parse_error<W>(
    writer: &mut W,
    err: &McpError,
    framed_output: bool,
) -> McpResult<()>
where
    W: AsyncWrite + Unpin,
{
    let value = serde_json::to_value(err.to_json_rpc_error(RequestId::Null))?;
    write_response(writer, &value, framed_output).await
}

/// Parse a `Content-Length` header line. `Ok(None)` if the line is not one.
fn parse_content_length(line: &str) -> McpResult<Option<usize>> {
    let Some((name, value)) = line.split_once(':') else {
        return Ok(None);
    };
    if !name.trim().eq_ignore_ascii_case("content-length") {
        return Ok(None);
    }

    let size = value.trim().parse::<usize>().map_err(|_| {
        tracing::warn!("Invalid Content-Length header: {line}");
        McpError::ParseError("Invalid Content-Length header".to_string())
    })?;

    if size > MAX_CONTENT_LENGTH_BYTES {
        return Err(McpError::ContentTooLarge {
            size,
            max: MAX_CONTENT_LENGTH_BYTES,
        });
    }
    Ok(Some(size))
}

async fn write_response<W>(
    writer: &mut W,
    response: &serde_json::Value,
    framed_output: bool,
) -> McpResult<()>
where
    W: AsyncWrite + Unpin,
{
    if framed_output {
        let json = serde_json::to_string(response)?;
        let header = format!("Content-Length: {}\r\n\r\n", json.len());
        writer.write_all(header.as_bytes()).await?;
        writer.write_all(json.as_bytes()).await?;
    } else {
        let framed = framing::frame_message(response)?;
        writer.write_all(framed.as_bytes()).await?;
    }
    writer.flush().await?;
    Ok(())
}
