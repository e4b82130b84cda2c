//! OSChina draft and article types.

use std::fmt;

use crate::error::OschinaError;

/// A draft entry from the draft listing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DraftSummary {
    /// Draft ID (last path segment of `url`).
    pub id: String,
    /// Draft title as shown in the listing.
    pub title: String,
    /// Link to the draft edit page.
    pub url: String,
}

/// One page of the draft listing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DraftPage {
    /// Drafts in document order.
    pub drafts: Vec<DraftSummary>,
    /// Whether a "next page" control is present.
    pub has_next: bool,
}

/// Blog category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    /// Category ID.
    pub id: String,
    /// Display name.
    pub name: String,
}

/// Article type as carried by the `type` radio group.
///
/// The platform's values are opaque strings; the empty value means "unset".
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct ArticleType(String);

impl ArticleType {
    /// Create an article type from its form value.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Form value.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True when no type was selected.
    #[must_use]
    pub fn is_unset(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for ArticleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ArticleType {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// How a draft save is submitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveIntent {
    /// No draft exists yet; the platform assigns an id.
    Create,
    /// Overwrite the draft with the given id.
    Update(String),
}

/// Editable article representation submitted on save and publish.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArticleContent {
    /// Article title.
    pub title: String,
    /// Raw article body.
    pub content: String,
    /// Source URL for reprints (empty when original).
    pub original_url: String,
    /// Visible only to the author.
    pub privacy: bool,
    /// Pinned to the top of the blog.
    pub top: bool,
    /// Comments disabled.
    pub deny_comment: bool,
    /// Let the platform download remote images.
    pub download_image: bool,
    /// Article type.
    pub article_type: ArticleType,
    /// Category ID, if one is selected.
    pub category: Option<String>,
    /// Server-assigned draft id, `None` until the draft is created.
    pub draft_id: Option<String>,
}

impl ArticleContent {
    /// Create content with title and body, every option off.
    #[must_use]
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            ..Self::default()
        }
    }

    /// Derive the save intent from the current draft id.
    ///
    /// An empty id counts as absent.
    #[must_use]
    pub fn save_intent(&self) -> SaveIntent {
        match self.draft_id.as_deref() {
            Some(id) if !id.is_empty() => SaveIntent::Update(id.to_owned()),
            _ => SaveIntent::Create,
        }
    }

    /// Check required fields before submission.
    ///
    /// # Errors
    ///
    /// Returns a [`Validation`](crate::error::ErrorKind::Validation) error naming the
    /// first offending field.
    pub fn validate(&self) -> Result<(), OschinaError> {
        if self.title.trim().is_empty() {
            return Err(OschinaError::validation("title cannot be empty").with_field("title"));
        }
        if self.content.trim().is_empty() {
            return Err(OschinaError::validation("content cannot be empty").with_field("content"));
        }
        if !self.original_url.is_empty()
            && !self.original_url.starts_with("http://")
            && !self.original_url.starts_with("https://")
        {
            return Err(
                OschinaError::validation("original URL must start with http:// or https://")
                    .with_field("origin_url"),
            );
        }
        Ok(())
    }

    /// Encode as form fields for the save endpoints.
    pub(crate) fn to_form(&self, intent: &SaveIntent) -> Vec<(&'static str, String)> {
        let mut form = vec![
            ("title", self.title.clone()),
            ("content", self.content.clone()),
            ("origin_url", self.original_url.clone()),
            ("privacy", flag(self.privacy)),
            ("as_top", flag(self.top)),
            ("deny_comment", flag(self.deny_comment)),
            ("downloadImg", flag(self.download_image)),
            ("type", self.article_type.as_str().to_owned()),
        ];
        if let Some(category) = &self.category {
            form.push(("catalog", category.clone()));
        }
        if let SaveIntent::Update(id) = intent {
            form.push(("draft", id.clone()));
        }
        form
    }
}

fn flag(value: bool) -> String {
    String::from(if value { "1" } else { "0" })
}
