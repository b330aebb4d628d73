//! LIST, OVER, and HDR
//!
//! The overview format is fetched lazily via `LIST OVERVIEW.FMT` and cached
//! alongside capabilities, invalidated by the same mode transitions.

use super::ClientSession;
use crate::error::{NntpError, Result};
use crate::response::codes;
use std::collections::HashMap;

/// Target of an `OVER`/`HDR` query.
#[derive(Debug, Clone)]
pub enum OverSelector {
    /// The currently selected article.
    Current,
    /// An inclusive article-number range within the current group.
    Range(u64, u64),
    /// A single article by message-id.
    Id(String),
}

/// Target of an `HDR` query (RFC 3977 §8.5 permits the same three shapes).
pub type HdrSelector = OverSelector;

fn selector_arg(sel: &OverSelector) -> String {
    match sel {
        OverSelector::Current => String::new(),
        OverSelector::Range(lo, hi) => format!(" {lo}-{hi}"),
        OverSelector::Id(id) => format!(" {id}"),
    }
}

/// Strip the `:full` suffix and rewrite `bytes:`/`lines:` to the canonical
/// metadata spellings `:bytes`/`:lines`.
fn normalize_overview_field(raw: &str) -> String {
    let lower = raw.trim().to_ascii_lowercase();
    let stripped = lower.strip_suffix(":full").unwrap_or(&lower);
    match stripped {
        "bytes:" => ":bytes".to_string(),
        "lines:" => ":lines".to_string(),
        other => other.to_string(),
    }
}

impl<S> ClientSession<S>
where
    S: tokio::io::AsyncRead + tokio::io::AsyncWrite + Unpin,
{
    /// `LIST [keyword [wildmat]]` (RFC 3977 §7.6, RFC 6048 extensions).
    ///
    /// Ensures reader mode first (`LIST` is a reader-mode command). Returns
    /// `None` for a `503` (keyword recognized but unsupported right now)
    /// rather than failing the caller outright.
    pub async fn list(&mut self, keyword: Option<&str>, wildmat: Option<&str>) -> Result<Option<Vec<String>>> {
        self.require_reader().await?;
        let mut cmd = "LIST".to_string();
        if let Some(k) = keyword {
            cmd.push(' ');
            cmd.push_str(k);
            if let Some(w) = wildmat {
                cmd.push(' ');
                cmd.push_str(w);
            }
        }
        let resp = self.transact(&cmd).await?;
        match resp.code {
            codes::LIST_INFORMATION_FOLLOWS => Ok(Some(self.read_block().await?)),
            codes::FEATURE_NOT_SUPPORTED => Ok(None),
            other => Err(NntpError::Protocol {
                code: other,
                message: resp.message,
            }),
        }
    }

    /// Fetch (and cache) the overview format via `LIST OVERVIEW.FMT`.
    pub async fn overview_format(&mut self) -> Result<Vec<String>> {
        if let Some(fmt) = &self.overview_fmt {
            return Ok(fmt.clone());
        }
        let resp = self.transact("LIST OVERVIEW.FMT").await?;
        let raw = if resp.code == codes::LIST_INFORMATION_FOLLOWS {
            self.read_block().await?
        } else {
            Vec::new()
        };
        let normalized: Vec<String> = raw.iter().map(|l| normalize_overview_field(l)).collect();
        self.overview_fmt = Some(normalized.clone());
        Ok(normalized)
    }

    /// `OVER` (RFC 3977 §8.3). `423` yields an empty block (group selected,
    /// no matching articles); `420`/`430` yield `None` (no group / no such
    /// article).
    pub async fn over(&mut self, sel: OverSelector) -> Result<Option<Vec<String>>> {
        let resp = self.transact(&format!("OVER{}", selector_arg(&sel))).await?;
        match resp.code {
            codes::OVERVIEW_INFO_FOLLOWS => Ok(Some(self.read_block().await?)),
            codes::NO_SUCH_ARTICLE_NUMBER => Ok(Some(Vec::new())),
            codes::NO_CURRENT_ARTICLE | codes::NO_SUCH_ARTICLE_ID => Ok(None),
            other => Err(NntpError::Protocol {
                code: other,
                message: resp.message,
            }),
        }
    }

    /// Split one `OVER` line into `(article-number, {header -> value})`
    /// using the cached overview format.
    ///
    /// Fields beyond position five that name a full header (not a `:meta`
    /// marker) have their `Name:` prefix and leading whitespace stripped.
    pub async fn parse_overview(&mut self, line: &str) -> Result<(u64, HashMap<String, String>)> {
        let fmt = self.overview_format().await?;
        let fields: Vec<&str> = line.split('\t').collect();
        if fields.is_empty() {
            return Err(NntpError::InvalidResponse(line.to_string()));
        }
        let number: u64 = fields[0]
            .parse()
            .map_err(|_| NntpError::InvalidResponse(line.to_string()))?;

        let mut values = HashMap::new();
        for (i, raw_value) in fields.iter().enumerate().skip(1) {
            let Some(name) = fmt.get(i - 1) else { continue };
            let key = name.trim_start_matches(':').trim_end_matches(':').to_string();
            let value = if i >= 5 && !name.starts_with(':') {
                let header_name = name.trim_end_matches(':');
                raw_value
                    .strip_prefix(header_name)
                    .and_then(|rest| rest.strip_prefix(':'))
                    .map(str::trim_start)
                    .unwrap_or(raw_value)
            } else {
                raw_value
            };
            values.insert(key, value.to_string());
        }
        Ok((number, values))
    }

    /// `HDR <header> <range|id>` (RFC 3977 §8.5).
    pub async fn hdr(&mut self, header: &str, sel: HdrSelector) -> Result<Option<Vec<(u64, String)>>> {
        let resp = self
            .transact(&format!("HDR {header}{}", selector_arg(&sel)))
            .await?;
        match resp.code {
            codes::HEADERS_FOLLOW => {
                let lines = self.read_block().await?;
                let mut entries = Vec::with_capacity(lines.len());
                for line in lines {
                    if let Some((num, value)) = line.split_once(' ') {
                        if let Ok(number) = num.parse() {
                            entries.push((number, value.to_string()));
                        }
                    }
                }
                Ok(Some(entries))
            }
            codes::NO_SUCH_ARTICLE_NUMBER => Ok(Some(Vec::new())),
            codes::NO_CURRENT_ARTICLE | codes::NO_SUCH_ARTICLE_ID => Ok(None),
            other => Err(NntpError::Protocol {
                code: other,
                message: resp.message,
            }),
        }
    }
}
