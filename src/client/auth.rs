//! Capability caching, reader-mode negotiation, and AUTHINFO
//!
//! The [`Capabilities`] cache is invalidated on every mode transition.

use super::ClientSession;
use crate::capabilities::Capabilities;
use crate::error::{NntpError, Result};
use crate::response::codes;

impl<S> ClientSession<S>
where
    S: tokio::io::AsyncRead + tokio::io::AsyncWrite + Unpin,
{
    /// Issue `CAPABILITIES` once per session and cache the result.
    ///
    /// A non-101 response is treated as a documented degradation: the cache
    /// is set to an empty [`Capabilities`] rather than left unset, so later
    /// callers don't re-issue the command against a server that plainly
    /// doesn't support it.
    pub async fn capabilities(&mut self) -> Result<Capabilities> {
        if let Some(caps) = &self.capabilities {
            return Ok(caps.clone());
        }
        self.codec.send_line("CAPABILITIES").await?;
        let resp = self.read_response().await?;
        let caps = if resp.code == codes::CAPABILITY_LIST {
            Capabilities::parse(&self.read_block().await?)
        } else {
            Capabilities::new()
        };
        self.capabilities = Some(caps.clone());
        Ok(caps)
    }

    /// Ensure the session is in reader mode, issuing `MODE READER` if
    /// needed. Invalidates the capability, overview-format, and streaming
    /// caches on a successful transition.
    pub async fn require_reader(&mut self) -> Result<()> {
        use super::SessionState;
        if self.state == SessionState::Reader {
            return Ok(());
        }

        let caps = self.capabilities().await?;
        if !caps.list().is_empty() && !caps.has("MODE-READER") {
            return Err(NntpError::Unsupported(
                "server does not advertise MODE-READER".to_string(),
            ));
        }

        let resp = self.transact("MODE READER").await?;
        match resp.code {
            200 => self.posting_allowed = true,
            201 => self.posting_allowed = false,
            other => {
                return Err(NntpError::Unsupported(format!(
                    "MODE READER rejected: {other} {}",
                    resp.message
                )));
            }
        }

        self.state = SessionState::Reader;
        self.capabilities = None;
        self.overview_fmt = None;
        self.streaming_mode = None;
        self.capabilities().await?;
        Ok(())
    }

    /// Single-attempt `AUTHINFO USER`/`AUTHINFO PASS` exchange.
    ///
    /// Reader-mode sessions use the NNRP credentials, transit/streaming
    /// sessions use the NNTP credentials (RFC 4643). Exactly one attempt is
    /// made; a second `480` is a hard failure.
    pub(crate) async fn authenticate(&mut self) -> Result<()> {
        let use_nnrp = self
            .capabilities
            .as_ref()
            .map(|c| c.has("READER"))
            .unwrap_or(matches!(self.state, super::SessionState::Reader));

        let (user, password) = if use_nnrp {
            (
                self.credentials.nnrp_user.clone(),
                self.credentials.nnrp_password.clone(),
            )
        } else {
            (
                self.credentials.nntp_user.clone(),
                self.credentials.nntp_password.clone(),
            )
        };

        self.codec
            .send_line(&format!("AUTHINFO USER {user}"))
            .await?;
        let resp = self.read_response().await?;
        match resp.code {
            codes::AUTH_ACCEPTED => return Ok(()),
            codes::AUTH_CONTINUE => {}
            other => {
                return Err(NntpError::AuthFailed(format!("{other} {}", resp.message)));
            }
        }

        self.codec
            .send_line(&format!("AUTHINFO PASS {password}"))
            .await?;
        let resp = self.read_response().await?;
        if resp.code == codes::AUTH_ACCEPTED {
            Ok(())
        } else {
            Err(NntpError::AuthFailed(format!("{} {}", resp.code, resp.message)))
        }
    }
}
