//! ARTICLE/HEAD/BODY/STAT/NEXT/LAST

use super::ClientSession;
use crate::commands;
use crate::error::Result;
use crate::response::NntpResponse;

/// Which article a retrieval command targets.
#[derive(Debug, Clone)]
pub enum ArticleRef {
    /// The currently selected article (no argument sent).
    Current,
    /// By article number within the current group.
    Number(u64),
    /// By message-id.
    Id(String),
}

impl ArticleRef {
    fn arg(&self) -> Option<String> {
        match self {
            ArticleRef::Current => None,
            ArticleRef::Number(n) => Some(n.to_string()),
            ArticleRef::Id(id) => Some(id.clone()),
        }
    }
}

fn with_arg(verb: &str, arg: Option<String>) -> String {
    match arg {
        Some(a) => format!("{verb} {a}"),
        None => verb.to_string(),
    }
}

/// Result triple shared by ARTICLE/HEAD/BODY/STAT: article number,
/// message-id, and (for ARTICLE/HEAD/BODY) the body lines.
pub type ArticleResult = (Option<u64>, Option<String>, Option<Vec<String>>);

impl<S> ClientSession<S>
where
    S: tokio::io::AsyncRead + tokio::io::AsyncWrite + Unpin,
{
    async fn retrieve(&mut self, verb: &str, sel: &ArticleRef, has_block: bool) -> Result<ArticleResult> {
        let resp = self.transact(&with_arg(verb, sel.arg())).await?;
        match resp.code {
            423 | 430 => Ok((None, None, None)),
            220 | 221 | 222 | 223 => {
                let info = commands::parse_stat_response(NntpResponse {
                    code: resp.code,
                    message: resp.message,
                    lines: vec![],
                })?;
                let body = if has_block {
                    Some(self.read_block().await?)
                } else {
                    None
                };
                Ok((Some(info.number), Some(info.message_id), body))
            }
            other => Err(crate::error::NntpError::Protocol {
                code: other,
                message: resp.message,
            }),
        }
    }

    /// `ARTICLE` — headers plus body.
    pub async fn article(&mut self, sel: ArticleRef) -> Result<ArticleResult> {
        self.retrieve("ARTICLE", &sel, true).await
    }

    /// `HEAD` — headers only.
    pub async fn head(&mut self, sel: ArticleRef) -> Result<ArticleResult> {
        self.retrieve("HEAD", &sel, true).await
    }

    /// `BODY` — body only.
    pub async fn body(&mut self, sel: ArticleRef) -> Result<ArticleResult> {
        self.retrieve("BODY", &sel, true).await
    }

    /// `STAT` — presence check, no block.
    pub async fn stat(&mut self, sel: ArticleRef) -> Result<ArticleResult> {
        self.retrieve("STAT", &sel, false).await
    }

    /// `NEXT` — advance to the next article in the current group.
    ///
    /// Returns `(None, None)` at the boundary (421).
    pub async fn next(&mut self) -> Result<(Option<u64>, Option<String>)> {
        self.advance("NEXT").await
    }

    /// `LAST` — retreat to the previous article in the current group.
    ///
    /// Returns `(None, None)` at the boundary (422).
    pub async fn last(&mut self) -> Result<(Option<u64>, Option<String>)> {
        self.advance("LAST").await
    }

    async fn advance(&mut self, verb: &str) -> Result<(Option<u64>, Option<String>)> {
        let resp = self.transact(verb).await?;
        match resp.code {
            421 | 422 => Ok((None, None)),
            223 => {
                let info = commands::parse_stat_response(NntpResponse {
                    code: resp.code,
                    message: resp.message,
                    lines: vec![],
                })?;
                Ok((Some(info.number), Some(info.message_id)))
            }
            other => Err(crate::error::NntpError::Protocol {
                code: other,
                message: resp.message,
            }),
        }
    }
}
