//! Field extractors over rendered OSChina pages.
//!
//! Each extractor is a pure function from a parsed [`Html`] document to a
//! value. The edit-form extractors enforce that their selector matches
//! exactly one node: a missing or duplicated node means the page layout
//! changed, and is reported as [`MalformedPage`](crate::ErrorKind::MalformedPage)
//! naming the field instead of falling back to a default.

mod edit;
mod list;

pub(crate) use edit::{category_options, draft_form};
pub(crate) use list::{draft_links, has_next_page};

use scraper::{ElementRef, Html, Selector};

use crate::error::OschinaError;

/// A named structural query into a page.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Field {
    /// Name used in error context.
    pub name: &'static str,
    /// CSS selector.
    pub selector: &'static str,
}

impl Field {
    pub(crate) const fn new(name: &'static str, selector: &'static str) -> Self {
        Self { name, selector }
    }
}

/// Select all nodes matching `field`, in document order.
pub(crate) fn select_all<'a>(
    doc: &'a Html,
    field: Field,
) -> Result<Vec<ElementRef<'a>>, OschinaError> {
    let selector = Selector::parse(field.selector).map_err(|e| {
        OschinaError::malformed(field.name, format!("invalid selector {:?}: {e:?}", field.selector))
    })?;
    Ok(doc.select(&selector).collect())
}

/// Select the single node matching `field`.
pub(crate) fn exactly_one<'a>(doc: &'a Html, field: Field) -> Result<ElementRef<'a>, OschinaError> {
    let nodes = select_all(doc, field)?;
    match nodes.as_slice() {
        [node] => Ok(*node),
        _ => Err(OschinaError::malformed(
            field.name,
            format!("expected exactly one node, found {}", nodes.len()),
        )),
    }
}

/// `value` attribute of the single input matching `field` (empty if absent).
pub(crate) fn input_value(doc: &Html, field: Field) -> Result<String, OschinaError> {
    let node = exactly_one(doc, field)?;
    Ok(node.value().attr("value").unwrap_or_default().to_owned())
}

/// Text content of the single element matching `field`.
pub(crate) fn element_text(doc: &Html, field: Field) -> Result<String, OschinaError> {
    let node = exactly_one(doc, field)?;
    Ok(node.text().collect())
}

/// Checkbox flag of the single input matching `field`.
///
/// The edit form encodes state in the `value` attribute, not in `checked`:
/// the flag is set only when `value` is literally `"1"`.
pub(crate) fn flag(doc: &Html, field: Field) -> Result<bool, OschinaError> {
    let node = exactly_one(doc, field)?;
    Ok(node.value().attr("value") == Some("1"))
}

/// Text of the element's own text children, ignoring nested elements.
pub(crate) fn direct_text(node: ElementRef<'_>) -> String {
    node.children()
        .filter_map(|child| child.value().as_text())
        .map(|text| &**text)
        .collect()
}
