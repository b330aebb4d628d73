//! NNTP client session
//!
//! One file per command family, built on [`crate::codec::LineCodec`], with
//! capability caching, reader-mode negotiation, and single-retry AUTHINFO
//! on 480 (RFC 4643).

mod articles;
mod auth;
mod group_ops;
mod listing;
mod metadata;
mod posting;
pub mod state;

pub use articles::ArticleRef;
pub use listing::{HdrSelector, OverSelector};
pub use posting::{CheckResult, PostResult, TakeThisResult};
pub use state::SessionState;

use crate::capabilities::Capabilities;
use crate::codec::LineCodec;
use crate::commands;
use crate::error::{NntpError, Result};
use crate::response::NntpResponse;
use crate::shutdown::ShutdownToken;
use std::net::SocketAddr;
use std::time::Duration;
use tokio::net::TcpSocket;
use tokio::net::TcpStream;
use tracing::warn;

/// Credentials used by [`ClientSession::authenticate`].
///
/// If the capability set includes READER, the NNRP credentials are sent;
/// otherwise the NNTP credentials are sent.
#[derive(Debug, Clone, Default)]
pub struct Credentials {
    /// AUTHINFO USER sent when the session is in (or negotiating) reader mode.
    pub nnrp_user: String,
    /// AUTHINFO PASS paired with `nnrp_user`.
    pub nnrp_password: String,
    /// AUTHINFO USER sent for transit/streaming sessions.
    pub nntp_user: String,
    /// AUTHINFO PASS paired with `nntp_user`.
    pub nntp_password: String,
}

/// A single client connection to the subject server, implementing
/// contract-enforcing operations over every RFC 3977/4643/4644 command this
/// harness drives.
pub struct ClientSession<S = TcpStream>
where
    S: tokio::io::AsyncRead + tokio::io::AsyncWrite + Unpin,
{
    pub(crate) codec: LineCodec<S>,
    pub(crate) shutdown: ShutdownToken,
    pub(crate) state: SessionState,
    pub(crate) posting_allowed: bool,
    pub(crate) current_group: Option<(String, u64, u64)>,
    pub(crate) capabilities: Option<Capabilities>,
    pub(crate) overview_fmt: Option<Vec<String>>,
    pub(crate) streaming_mode: Option<bool>,
    pub(crate) credentials: Credentials,
}

impl<S> ClientSession<S>
where
    S: tokio::io::AsyncRead + tokio::io::AsyncWrite + Unpin,
{
    /// Wrap an already-connected transport and read its greeting.
    ///
    /// Used directly by tests (over an in-memory duplex) and indirectly by
    /// [`ClientSession::connect`].
    pub async fn from_transport(
        stream: S,
        shutdown: ShutdownToken,
        credentials: Credentials,
    ) -> Result<Self> {
        let mut session = Self {
            codec: LineCodec::new(stream),
            shutdown,
            state: SessionState::Fresh,
            posting_allowed: false,
            current_group: None,
            capabilities: None,
            overview_fmt: None,
            streaming_mode: None,
            credentials,
        };
        session.read_greeting().await?;
        Ok(session)
    }

    async fn read_greeting(&mut self) -> Result<()> {
        let line = self
            .codec
            .recv_line(&self.shutdown)
            .await?
            .ok_or(NntpError::ConnectionClosed)?;
        let (code, message) = commands::parse_response_line(&line)?;
        match code {
            200 => {
                self.posting_allowed = true;
                self.state = SessionState::Greeted;
                Ok(())
            }
            201 => {
                self.posting_allowed = false;
                self.state = SessionState::Greeted;
                Ok(())
            }
            400 | 502 => {
                self.state = SessionState::Closed;
                Err(NntpError::Protocol { code, message })
            }
            other => Err(NntpError::InvalidResponse(format!("{other} {message}"))),
        }
    }

    /// True if the greeting permitted posting (200 vs 201).
    pub fn posting_allowed(&self) -> bool {
        self.posting_allowed
    }

    /// Current session state.
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// The currently selected group, if any, as `(name, low, high)`.
    pub fn current_group(&self) -> Option<&(String, u64, u64)> {
        self.current_group.as_ref()
    }

    /// Read one status line (no multi-line block).
    pub(crate) async fn read_response(&mut self) -> Result<NntpResponse> {
        let line = self
            .codec
            .recv_line(&self.shutdown)
            .await?
            .ok_or(NntpError::ConnectionClosed)?;
        let (code, message) = commands::parse_response_line(&line)?;
        Ok(NntpResponse {
            code,
            message,
            lines: vec![],
        })
    }

    /// Read one dot-terminated multi-line block, failing on a surprise EOF.
    pub(crate) async fn read_block(&mut self) -> Result<Vec<String>> {
        self.codec
            .recv_block(&self.shutdown)
            .await?
            .ok_or(NntpError::ConnectionClosed)
    }

    /// Send a command and wait for exactly one response, authenticating once
    /// and replaying the command on `480` (RFC 4643 `AUTHINFO` required).
    pub(crate) async fn transact(&mut self, cmd: &str) -> Result<NntpResponse> {
        self.codec.send_line(cmd).await?;
        let resp = self.read_response().await?;
        if resp.code == crate::response::codes::AUTH_REQUIRED {
            self.authenticate().await?;
            self.codec.send_line(cmd).await?;
            return self.read_response().await;
        }
        Ok(resp)
    }

    /// Send `QUIT`, close the transport, and mark the session terminal.
    ///
    /// Idempotent: calling twice, or after the peer already closed the
    /// connection, is not an error.
    pub async fn quit(&mut self) -> Result<()> {
        if self.state.is_terminal() {
            return Ok(());
        }
        let _ = self.codec.send_line("QUIT").await;
        let _ = self.read_response().await;
        self.state = SessionState::Closed;
        Ok(())
    }
}

impl<S> Drop for ClientSession<S>
where
    S: tokio::io::AsyncRead + tokio::io::AsyncWrite + Unpin,
{
    fn drop(&mut self) {
        if !self.state.is_terminal() {
            warn!("ClientSession dropped without quit(); transport closed uncleanly");
        }
    }
}

impl ClientSession<TcpStream> {
    /// Establish a TCP connection to the subject server and read its
    /// greeting.
    pub async fn connect(
        host: &str,
        port: u16,
        timeout: Option<Duration>,
        bind: Option<SocketAddr>,
        shutdown: ShutdownToken,
        credentials: Credentials,
    ) -> Result<Self> {
        let connect = async {
            let addr: SocketAddr = tokio::net::lookup_host((host, port))
                .await?
                .next()
                .ok_or_else(|| NntpError::Other(format!("no address found for {host}:{port}")))?;
            let stream = match bind {
                Some(local) => {
                    let socket = if local.is_ipv4() {
                        TcpSocket::new_v4()?
                    } else {
                        TcpSocket::new_v6()?
                    };
                    socket.bind(local)?;
                    socket.connect(addr).await?
                }
                None => TcpStream::connect(addr).await?,
            };
            stream.set_nodelay(true).ok();
            Result::Ok(stream)
        };

        let stream = match timeout {
            Some(d) => tokio::time::timeout(d, connect)
                .await
                .map_err(|_| NntpError::Timeout)??,
            None => connect.await?,
        };

        Self::from_transport(stream, shutdown, credentials).await
    }
}
