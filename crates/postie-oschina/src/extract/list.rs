//! Draft listing page extractors.

use scraper::Html;

use super::{Field, direct_text, select_all};
use crate::error::OschinaError;
use crate::types::DraftSummary;

/// Entry header links of the draft list.
const DRAFT_LINKS: Field = Field::new(
    "draft_links",
    r#"div[class="ui relaxed divided items list-container"] a[class="header"]"#,
);

/// "Next page" control of the pagination menu. The class value carries a
/// trailing space in the rendered markup.
const NEXT_PAGE: Field = Field::new(
    "next_page",
    r#"div[class="ui pagination menu "] > a[class="item next-item"]"#,
);

/// Extract draft summaries in document order.
///
/// Anchors without `href` yield an empty id and url.
pub(crate) fn draft_links(doc: &Html) -> Result<Vec<DraftSummary>, OschinaError> {
    let drafts = select_all(doc, DRAFT_LINKS)?
        .into_iter()
        .map(|node| {
            let url = node.value().attr("href").unwrap_or_default();
            DraftSummary {
                id: last_path_segment(url).to_owned(),
                title: direct_text(node),
                url: url.to_owned(),
            }
        })
        .collect();
    Ok(drafts)
}

/// Whether the page shows a "next page" control.
pub(crate) fn has_next_page(doc: &Html) -> Result<bool, OschinaError> {
    Ok(!select_all(doc, NEXT_PAGE)?.is_empty())
}

/// Final segment of a URL path, ignoring trailing slashes.
fn last_path_segment(url: &str) -> &str {
    url.trim_end_matches('/').rsplit('/').next().unwrap_or_default()
}
