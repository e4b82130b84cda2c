//! `postie oschina draft list` command implementation.

use clap::Args;
use postie_oschina::{DraftSummary, OschinaClient, OschinaError, Transport};
use tracing::debug;

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the draft list command.
#[derive(Args)]
pub(crate) struct ListArgs {
    /// Maximum number of drafts to list.
    #[arg(short, long, default_value_t = 10)]
    limit: i32,
}

impl ListArgs {
    pub(crate) fn execute<T: Transport>(
        self,
        client: &OschinaClient<T>,
        output: &Output,
    ) -> Result<(), CliError> {
        let limit = usize::try_from(self.limit)
            .ok()
            .filter(|&limit| limit > 0)
            .ok_or_else(|| CliError::Validation("limit must be greater than 0".to_owned()))?;

        let drafts = collect_drafts(client, limit)?;
        if drafts.is_empty() {
            output.warning("No drafts found.");
        }
        for draft in &drafts {
            output.draft_row(draft);
        }
        Ok(())
    }
}

/// Walk draft pages until `limit` drafts are collected or pages run out.
fn collect_drafts<T: Transport>(
    client: &OschinaClient<T>,
    limit: usize,
) -> Result<Vec<DraftSummary>, OschinaError> {
    let mut result = Vec::new();
    let mut page = 1;
    loop {
        let listing = client.list_drafts(page)?;
        debug!("Page {} returned {} drafts", page, listing.drafts.len());
        result.extend(listing.drafts);
        if result.len() >= limit || !listing.has_next {
            break;
        }
        page += 1;
    }
    result.truncate(limit);
    Ok(result)
}
