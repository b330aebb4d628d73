//! DATE, HELP, NEWGROUPS, NEWNEWS

use super::ClientSession;
use crate::commands::{self, ActiveGroup};
use crate::error::{NntpError, Result};
use crate::response::{NntpResponse, codes};

/// A date/time argument for `NEWGROUPS`/`NEWNEWS`, accepting the several
/// shapes RFC 3977 §7.3/§7.4 and real subject servers tolerate.
#[derive(Debug, Clone)]
pub enum DateSpec {
    /// Already-split `(date, time)` tokens, e.g. `("20250115", "120000")`
    /// or the legacy two-digit-year `("250115", "120000")`.
    Tokens(String, String),
    /// Concatenated `YYYYMMDDHHMMSS`, 14 ASCII digits.
    Concatenated(String),
    /// Seconds since the Unix epoch. Requires `gmt=true`.
    Epoch(i64),
}

impl DateSpec {
    fn to_tokens(&self, gmt: bool) -> Result<(String, String)> {
        match self {
            DateSpec::Tokens(date, time) => Ok((date.clone(), time.clone())),
            DateSpec::Concatenated(s) => {
                if s.len() != 14 || !s.bytes().all(|b| b.is_ascii_digit()) {
                    return Err(NntpError::Other(
                        "concatenated date must be 14 ASCII digits".to_string(),
                    ));
                }
                Ok((s[..8].to_string(), s[8..].to_string()))
            }
            DateSpec::Epoch(secs) => {
                if !gmt {
                    return Err(NntpError::Other(
                        "epoch-second date requires gmt=true".to_string(),
                    ));
                }
                let dt = chrono::DateTime::<chrono::Utc>::from_timestamp(*secs, 0)
                    .ok_or_else(|| NntpError::Other("epoch seconds out of range".to_string()))?;
                Ok((
                    dt.format("%Y%m%d").to_string(),
                    dt.format("%H%M%S").to_string(),
                ))
            }
        }
    }
}

impl<S> ClientSession<S>
where
    S: tokio::io::AsyncRead + tokio::io::AsyncWrite + Unpin,
{
    /// `DATE` (RFC 3977 §7.1) — the server's UTC clock as 14 ASCII digits.
    pub async fn date(&mut self) -> Result<String> {
        let resp = self.transact("DATE").await?;
        if resp.code != codes::SERVER_DATE {
            return Err(NntpError::Protocol {
                code: resp.code,
                message: resp.message,
            });
        }
        let digits = resp.message.trim();
        if digits.len() != 14 || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(NntpError::InvalidResponse(resp.message));
        }
        Ok(digits.to_string())
    }

    /// `HELP` (RFC 3977 §7.2) — the block following 100.
    pub async fn help(&mut self) -> Result<Vec<String>> {
        let resp = self.transact("HELP").await?;
        if resp.code != codes::HELP_TEXT_FOLLOWS {
            return Err(NntpError::Protocol {
                code: resp.code,
                message: resp.message,
            });
        }
        self.read_block().await
    }

    /// `NEWGROUPS` (RFC 3977 §7.3).
    pub async fn newgroups(&mut self, date: DateSpec, gmt: bool) -> Result<Vec<ActiveGroup>> {
        let (d, t) = date.to_tokens(gmt)?;
        let cmd = if gmt {
            format!("NEWGROUPS {d} {t} GMT")
        } else {
            format!("NEWGROUPS {d} {t}")
        };
        let resp = self.transact(&cmd).await?;
        if resp.code != codes::NEW_NEWSGROUPS_FOLLOW {
            return Err(NntpError::Protocol {
                code: resp.code,
                message: resp.message,
            });
        }
        let lines = self.read_block().await?;
        commands::parse_list_active_response(NntpResponse {
            code: resp.code,
            message: resp.message,
            lines,
        })
    }

    /// `NEWNEWS` (RFC 3977 §7.4).
    pub async fn newnews(
        &mut self,
        wildmat: &str,
        date: DateSpec,
        gmt: bool,
    ) -> Result<Vec<String>> {
        let (d, t) = date.to_tokens(gmt)?;
        let cmd = if gmt {
            format!("NEWNEWS {wildmat} {d} {t} GMT")
        } else {
            format!("NEWNEWS {wildmat} {d} {t}")
        };
        let resp = self.transact(&cmd).await?;
        if resp.code != codes::NEW_ARTICLE_LIST_FOLLOWS {
            return Err(NntpError::Protocol {
                code: resp.code,
                message: resp.message,
            });
        }
        let lines = self.read_block().await?;
        commands::parse_newnews_response(NntpResponse {
            code: resp.code,
            message: resp.message,
            lines,
        })
    }
}
