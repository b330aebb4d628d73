//! Transport-agnostic NNTP line/block framing
//!
//! Shared CRLF-plus-dot-stuffing framing over whatever `AsyncRead +
//! AsyncWrite` transport the client session, the server session, and the
//! loopback peering server happen to run on.

use crate::error::{NntpError, Result};
use crate::shutdown::ShutdownToken;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};

const POLL_INTERVAL: std::time::Duration = std::time::Duration::from_secs(1);

/// Buffered line/block reader and writer for one NNTP connection.
///
/// CRLF is always written on output. On input, a bare `\n` is accepted as a
/// line terminator in addition to `\r\n`, matching the tolerance real-world
/// servers expect.
pub struct LineCodec<S> {
    stream: BufReader<S>,
}

impl<S> LineCodec<S>
where
    S: tokio::io::AsyncRead + tokio::io::AsyncWrite + Unpin,
{
    /// Wrap an existing transport.
    pub fn new(stream: S) -> Self {
        Self {
            stream: BufReader::new(stream),
        }
    }

    /// Access the underlying transport, e.g. to inspect a `TcpStream` peer
    /// address.
    pub fn get_ref(&self) -> &S {
        self.stream.get_ref()
    }

    /// Send a single command/response line, appending CRLF.
    pub async fn send_line(&mut self, line: &str) -> Result<()> {
        tracing::trace!("send: {}", line);
        let out = self.stream.get_mut();
        out.write_all(line.as_bytes()).await?;
        out.write_all(b"\r\n").await?;
        out.flush().await?;
        Ok(())
    }

    /// Send a dot-stuffed block of lines (an article body, a POST/IHAVE
    /// payload) terminated by a lone `.` line.
    ///
    /// Any line beginning with `.` has a second `.` prepended so it cannot
    /// be mistaken for the terminator.
    pub async fn send_block(&mut self, lines: &[String]) -> Result<()> {
        let out = self.stream.get_mut();
        for line in lines {
            if line.starts_with('.') {
                out.write_all(b".").await?;
            }
            out.write_all(line.as_bytes()).await?;
            out.write_all(b"\r\n").await?;
        }
        out.write_all(b".\r\n").await?;
        out.flush().await?;
        Ok(())
    }

    /// Read a single line, stripping the CRLF/LF terminator.
    ///
    /// Returns `Ok(None)` on a clean EOF (peer closed the connection), and
    /// polls `shutdown` at roughly 1-second granularity so a stop request
    /// can interrupt a read that is blocked waiting on a silent peer.
    pub async fn recv_line(&mut self, shutdown: &ShutdownToken) -> Result<Option<String>> {
        let mut buf = Vec::with_capacity(256);
        let read = self.stream.read_until(b'\n', &mut buf);
        tokio::pin!(read);

        loop {
            tokio::select! {
                result = &mut read => {
                    let n = result?;
                    if n == 0 {
                        return Ok(None);
                    }
                    let line = String::from_utf8_lossy(&buf);
                    let line = line.trim_end_matches(['\r', '\n']);
                    return Ok(Some(line.to_string()));
                }
                _ = tokio::time::sleep(POLL_INTERVAL) => {
                    if shutdown.is_stopping() {
                        return Err(NntpError::Stopped);
                    }
                }
            }
        }
    }

    /// Read a dot-stuffed block of lines until the terminating lone `.`,
    /// undoing byte-stuffing on each line.
    ///
    /// Returns `Ok(None)` if the connection is closed mid-block.
    pub async fn recv_block(&mut self, shutdown: &ShutdownToken) -> Result<Option<Vec<String>>> {
        let mut lines = Vec::new();
        loop {
            match self.recv_line(shutdown).await? {
                None => return Ok(None),
                Some(line) => {
                    if line == "." {
                        return Ok(Some(lines));
                    }
                    if let Some(stripped) = line.strip_prefix('.') {
                        lines.push(stripped.to_string());
                    } else {
                        lines.push(line);
                    }
                }
            }
        }
    }
}
