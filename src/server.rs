//! Server session: command dispatch, syntax checking, feature gating
//!
//! The command-level structure mirrors [`crate::client`]'s one-method-per-verb
//! shape read backwards — where the client session builds a command line and
//! classifies the response, the server session parses a command line and
//! produces one. The line/block I/O is the same [`crate::codec::LineCodec`]
//! used throughout.

use crate::codec::LineCodec;
use crate::error::Result;
use crate::shutdown::ShutdownToken;
use regex::Regex;
use std::sync::OnceLock;
use std::sync::Arc;

/// Backend hooks a [`ServerSession`] delegates peering decisions to.
///
/// Both the `IHAVE` command and the streaming `CHECK`/`TAKETHIS` commands
/// drive the same two operations; only the response-code mapping differs.
/// Implementations decide whether an article is wanted and
/// whether it was accepted; everything else (syntax, code remapping, block
/// framing) is the server session's job.
pub trait PeeringBackend: Send + Sync {
    /// Would this article be accepted? Returns a raw NNTP code: `335` (send
    /// it), `435` (not wanted), or `436` (try later).
    ///
    /// `phase` names the calling command (`"ihave"`, `"check"`, or
    /// `"takethis"`) so a `reject.<code>.<phase>@…` probe id can trigger its
    /// override only on the phase it names.
    fn ihave_check(&self, id: &str, phase: &str) -> (u16, String);

    /// Accept a submitted article. Returns `235` (transferred), `435` (not
    /// wanted), `436` (try later), or `437` (rejected).
    fn ihave(&self, id: &str, article: &[String], phase: &str) -> (u16, String);
}

/// Which optional command groups a session has enabled.
#[derive(Debug, Clone, Copy, Default)]
pub struct ServerFeatures {
    pub ihave: bool,
    pub streaming: bool,
}

fn message_id_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^<[^@>]+@[^@>]+>$").unwrap())
}

fn default_text(code: u16) -> &'static str {
    match code {
        200 => "server ready - posting allowed",
        201 => "server ready - no posting",
        205 => "closing connection",
        203 => "streaming mode enabled",
        101 => "capabilities follow",
        335 => "send article",
        435 => "article not wanted",
        436 => "try again later",
        437 => "article rejected",
        235 => "article transferred ok",
        238 => "send article",
        431 => "try again later",
        438 => "article not wanted",
        239 => "article received ok",
        439 => "article rejected, do not retry",
        400 => "service discontinued",
        500 => "command not recognized",
        501 => "syntax error",
        502 => "access restriction or permission denied",
        503 => "feature not supported",
        _ => "response",
    }
}

/// One peering-server connection, driving command dispatch over a
/// [`LineCodec`].
pub struct ServerSession<S>
where
    S: tokio::io::AsyncRead + tokio::io::AsyncWrite + Unpin,
{
    codec: LineCodec<S>,
    shutdown: ShutdownToken,
    features: ServerFeatures,
    backend: Arc<dyn PeeringBackend>,
    banner: String,
    closed: bool,
}

impl<S> ServerSession<S>
where
    S: tokio::io::AsyncRead + tokio::io::AsyncWrite + Unpin,
{
    pub fn new(
        stream: S,
        shutdown: ShutdownToken,
        features: ServerFeatures,
        backend: Arc<dyn PeeringBackend>,
        banner: impl Into<String>,
    ) -> Self {
        Self {
            codec: LineCodec::new(stream),
            shutdown,
            features,
            backend,
            banner: banner.into(),
            closed: false,
        }
    }

    async fn respond(&mut self, code: u16, text: Option<&str>) -> Result<()> {
        let text = text.unwrap_or_else(|| default_text(code));
        if code >= 500 {
            tracing::error!(code, "server session responding with {code} {text}");
        }
        self.codec.send_line(&format!("{code} {text}")).await
    }

    /// Send the initial greeting. Posting is never allowed on the loopback
    /// peering server, so this always emits `201`.
    pub async fn send_greeting(&mut self) -> Result<()> {
        self.respond(201, None).await
    }

    /// Drive the session to completion: greet, then dispatch commands until
    /// `QUIT`, EOF, or cooperative shutdown.
    pub async fn run(&mut self) -> Result<()> {
        self.send_greeting().await?;
        loop {
            if self.shutdown.is_stopping() {
                return Ok(());
            }
            let line = match self.codec.recv_line(&self.shutdown).await? {
                Some(line) => line,
                None => return Ok(()),
            };
            self.dispatch(&line).await?;
            if self.closed {
                return Ok(());
            }
        }
    }

    async fn dispatch(&mut self, line: &str) -> Result<()> {
        let (verb, rest) = match line.split_once(char::is_whitespace) {
            Some((v, r)) => (v, r.trim_start()),
            None => (line, ""),
        };
        let verb = verb.to_ascii_uppercase();
        match verb.as_str() {
            "CAPABILITIES" => self.handle_capabilities().await,
            "MODE" => self.handle_mode(rest).await,
            "QUIT" => self.handle_quit().await,
            "IHAVE" => self.handle_ihave(rest).await,
            "CHECK" => self.handle_check(rest).await,
            "TAKETHIS" => self.handle_takethis(rest).await,
            "" => self.respond(500, None).await,
            _ => self.respond(500, None).await,
        }
    }

    async fn handle_capabilities(&mut self) -> Result<()> {
        let mut lines = vec!["VERSION 2".to_string(), self.banner.clone()];
        if self.features.streaming {
            lines.push("STREAMING".to_string());
        }
        if self.features.ihave {
            lines.push("IHAVE".to_string());
        }
        self.respond(101, None).await?;
        self.codec.send_block(&lines).await
    }

    async fn handle_mode(&mut self, arg: &str) -> Result<()> {
        if arg.eq_ignore_ascii_case("STREAM") && self.features.streaming {
            self.respond(203, None).await
        } else {
            self.respond(501, None).await
        }
    }

    async fn handle_quit(&mut self) -> Result<()> {
        self.respond(205, None).await?;
        self.closed = true;
        Ok(())
    }

    async fn handle_ihave(&mut self, arg: &str) -> Result<()> {
        if !self.features.ihave {
            return self.respond(500, None).await;
        }
        let id = arg.trim();
        if !message_id_re().is_match(id) {
            return self.respond(501, None).await;
        }
        let (code, text) = self.backend.ihave_check(id, "ihave");
        self.respond(code, Some(&text)).await?;
        if code == 335 {
            let block = self.codec.recv_block(&self.shutdown).await?.unwrap_or_default();
            let (code2, text2) = self.backend.ihave(id, &block, "ihave");
            self.respond(code2, Some(&text2)).await?;
        }
        Ok(())
    }

    async fn handle_check(&mut self, arg: &str) -> Result<()> {
        if !self.features.streaming {
            return self.respond(500, None).await;
        }
        let id = arg.trim();
        if !message_id_re().is_match(id) {
            return self.respond(501, None).await;
        }
        let (code, _text) = self.backend.ihave_check(id, "check");
        let mapped = match code {
            335 => 238,
            435 => 431,
            436 => 438,
            other => other,
        };
        self.respond(mapped, None).await
    }

    async fn handle_takethis(&mut self, arg: &str) -> Result<()> {
        if !self.features.streaming {
            return self.respond(500, None).await;
        }
        let id = arg.trim();
        if !message_id_re().is_match(id) {
            return self.respond(501, None).await;
        }
        let block = self.codec.recv_block(&self.shutdown).await?.unwrap_or_default();

        let (check_code, _) = self.backend.ihave_check(id, "takethis");
        match check_code {
            436 => {
                self.respond(400, None).await?;
                self.closed = true;
                Ok(())
            }
            435 => self.respond(439, None).await,
            _ => {
                let (ihave_code, _) = self.backend.ihave(id, &block, "takethis");
                if ihave_code == 235 {
                    self.respond(239, None).await
                } else {
                    self.respond(439, None).await
                }
            }
        }
    }
}
