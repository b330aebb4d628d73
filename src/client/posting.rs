//! POST, IHAVE, CHECK, TAKETHIS, and streaming negotiation

use super::ClientSession;
use crate::article::Article;
use crate::error::{NntpError, Result};
use crate::response::codes;

/// Outcome of [`ClientSession::post`] or [`ClientSession::ihave`] once the
/// server has responded to the article body (or declined before it).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PostResult {
    /// Article accepted (240 for POST, 235 for IHAVE).
    Accepted,
    /// Declined with the given response code (not wanted / duplicate / try
    /// again later), verbatim for the caller to classify.
    Code(u16),
}

/// Outcome of [`ClientSession::check`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckResult {
    /// 238 — send the article via TAKETHIS.
    Wanted,
    /// 438 — article not wanted.
    NotWanted,
    /// 431 — try again later.
    TryLater,
}

/// Outcome of [`ClientSession::takethis`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TakeThisResult {
    /// 239 — accepted.
    Accepted,
    /// 439 — rejected.
    Rejected,
}

fn block_lines(article: &Article) -> Vec<String> {
    let mut lines = article.header_lines();
    lines.push(String::new());
    lines.extend(article.body.lines().map(str::to_string));
    lines
}

/// Find the Message-ID by scanning header lines rather than trusting the
/// typed `Headers::message_id` field, so an article built from raw lines
/// with a duplicated or reordered header block is still handled correctly.
/// Case-insensitive, first occurrence wins.
fn scan_message_id(article: &Article) -> Option<String> {
    article.header_lines().into_iter().find_map(|line| {
        let (name, value) = line.split_once(':')?;
        name.eq_ignore_ascii_case("message-id")
            .then(|| value.trim().to_string())
    })
}

impl<S> ClientSession<S>
where
    S: tokio::io::AsyncRead + tokio::io::AsyncWrite + Unpin,
{
    /// `POST` an article (requires reader mode; negotiated automatically).
    pub async fn post(&mut self, article: &Article) -> Result<PostResult> {
        self.require_reader().await?;
        let resp = self.transact("POST").await?;
        match resp.code {
            codes::SEND_ARTICLE => {
                self.codec.send_block(&block_lines(article)).await?;
                let resp2 = self.read_response().await?;
                match resp2.code {
                    codes::ARTICLE_POSTED => Ok(PostResult::Accepted),
                    codes::TRANSFER_NOT_POSSIBLE | codes::TRANSFER_REJECTED => {
                        Ok(PostResult::Code(resp2.code))
                    }
                    codes::POSTING_FAILED => Err(NntpError::PostingFailed(resp2.message)),
                    other => Err(NntpError::Protocol {
                        code: other,
                        message: resp2.message,
                    }),
                }
            }
            codes::SEND_ARTICLE_TRANSFER | codes::ARTICLE_NOT_WANTED | codes::TRANSFER_NOT_POSSIBLE => {
                Ok(PostResult::Code(resp.code))
            }
            other => Err(NntpError::Protocol {
                code: other,
                message: resp.message,
            }),
        }
    }

    /// `IHAVE` an article, offering it by message-id.
    ///
    /// `id` overrides the article's own `Message-ID:` header when supplied.
    pub async fn ihave(&mut self, article: &Article, id: Option<&str>) -> Result<PostResult> {
        let message_id = match id {
            Some(id) => id.to_string(),
            None => scan_message_id(article).ok_or_else(|| {
                NntpError::InvalidResponse("article has no Message-ID header".to_string())
            })?,
        };
        let resp = self.transact(&format!("IHAVE {message_id}")).await?;
        match resp.code {
            codes::SEND_ARTICLE_TRANSFER => {
                self.codec.send_block(&block_lines(article)).await?;
                let resp2 = self.read_response().await?;
                match resp2.code {
                    codes::ARTICLE_TRANSFERRED => Ok(PostResult::Accepted),
                    codes::TRANSFER_NOT_POSSIBLE | codes::TRANSFER_REJECTED => {
                        Ok(PostResult::Code(resp2.code))
                    }
                    other => Err(NntpError::Protocol {
                        code: other,
                        message: resp2.message,
                    }),
                }
            }
            codes::ARTICLE_NOT_WANTED | codes::TRANSFER_NOT_POSSIBLE => Ok(PostResult::Code(resp.code)),
            other => Err(NntpError::Protocol {
                code: other,
                message: resp.message,
            }),
        }
    }

    /// `CHECK <id>` (RFC 4644 §2.4).
    pub async fn check(&mut self, id: &str) -> Result<CheckResult> {
        let resp = self.transact(&format!("CHECK {id}")).await?;
        match resp.code {
            codes::CHECK_SEND => Ok(CheckResult::Wanted),
            codes::CHECK_NOT_WANTED => Ok(CheckResult::NotWanted),
            codes::CHECK_LATER => Ok(CheckResult::TryLater),
            other => Err(NntpError::Protocol {
                code: other,
                message: resp.message,
            }),
        }
    }

    /// `TAKETHIS <id>` (RFC 4644 §2.5).
    ///
    /// This is the one command the spec allows to pipeline: the article
    /// block is sent immediately after the command line, without waiting
    /// for an intermediate response.
    pub async fn takethis(&mut self, article: &Article, id: Option<&str>) -> Result<TakeThisResult> {
        let message_id = match id {
            Some(id) => id.to_string(),
            None => scan_message_id(article).ok_or_else(|| {
                NntpError::InvalidResponse("article has no Message-ID header".to_string())
            })?,
        };
        self.codec
            .send_line(&format!("TAKETHIS {message_id}"))
            .await?;
        self.codec.send_block(&block_lines(article)).await?;
        let resp = self.read_response().await?;
        match resp.code {
            codes::TAKETHIS_RECEIVED => Ok(TakeThisResult::Accepted),
            codes::TAKETHIS_REJECTED => Ok(TakeThisResult::Rejected),
            other => Err(NntpError::Protocol {
                code: other,
                message: resp.message,
            }),
        }
    }

    /// True if streaming (CHECK/TAKETHIS) is available, caching the result.
    ///
    /// Prefers the `STREAMING` capability; falls back to attempting
    /// `MODE STREAM` if capabilities don't mention it.
    pub async fn streaming(&mut self) -> Result<bool> {
        if let Some(cached) = self.streaming_mode {
            return Ok(cached);
        }
        let caps = self.capabilities().await?;
        if caps.has("STREAMING") {
            self.streaming_mode = Some(true);
            self.state = super::SessionState::Streaming;
            return Ok(true);
        }
        let resp = self.transact("MODE STREAM").await?;
        let ok = resp.code == codes::STREAMING_OK;
        self.streaming_mode = Some(ok);
        if ok {
            self.state = super::SessionState::Streaming;
        }
        Ok(ok)
    }
}
