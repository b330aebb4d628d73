//! GROUP and LISTGROUP

use super::ClientSession;
use crate::commands::{self, GroupInfo};
use crate::error::{NntpError, Result};
use crate::response::{NntpResponse, codes};

impl<S> ClientSession<S>
where
    S: tokio::io::AsyncRead + tokio::io::AsyncWrite + Unpin,
{
    /// Select a newsgroup with `GROUP`.
    pub async fn group(&mut self, name: &str) -> Result<GroupInfo> {
        let resp = self.transact(&commands::group(name)).await?;
        if resp.code == codes::NO_SUCH_GROUP {
            return Err(NntpError::NoSuchGroup(name.to_string()));
        }
        let info = commands::parse_group_response(resp)?;
        self.current_group = Some((name.to_string(), info.first, info.last));
        Ok(info)
    }

    /// `LISTGROUP [group] [low-high]`, returning `(count, low, high, numbers)`.
    ///
    /// `group` defaults to the current group when omitted, matching RFC
    /// 3977 §6.1.2.
    pub async fn listgroup(
        &mut self,
        group: Option<&str>,
        range: Option<(u64, u64)>,
    ) -> Result<(u64, u64, u64, Vec<u64>)> {
        let mut cmd = "LISTGROUP".to_string();
        if let Some(g) = group {
            cmd.push(' ');
            cmd.push_str(g);
        }
        if let Some((lo, hi)) = range {
            cmd.push(' ');
            cmd.push_str(&format!("{lo}-{hi}"));
        }

        let resp = self.transact(&cmd).await?;
        if resp.code == codes::NO_SUCH_GROUP {
            return Err(NntpError::NoSuchGroup(
                group.or(self.current_group.as_ref().map(|g| g.0.as_str())).unwrap_or("").to_string(),
            ));
        }
        if resp.code != codes::GROUP_SELECTED {
            return Err(NntpError::Protocol {
                code: resp.code,
                message: resp.message,
            });
        }

        let info = commands::parse_group_response(NntpResponse {
            code: resp.code,
            message: resp.message.clone(),
            lines: vec![],
        })?;

        let lines = self.read_block().await?;
        let numbers: Vec<u64> = lines
            .iter()
            .filter_map(|l| l.trim().parse::<u64>().ok())
            .collect();

        if let Some(g) = group {
            self.current_group = Some((g.to_string(), info.first, info.last));
        }

        Ok((info.count, info.first, info.last, numbers))
    }
}
