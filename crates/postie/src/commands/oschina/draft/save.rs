//! `postie oschina draft create|update` command implementations.

use std::path::PathBuf;

use clap::Args;
use postie_oschina::{ArticleContent, ArticleType, OschinaClient, Transport};

use crate::error::CliError;
use crate::output::Output;

/// Article fields settable from the command line.
///
/// Unset options leave the corresponding field untouched.
#[derive(Args, Default)]
pub(crate) struct ContentArgs {
    /// Article title.
    #[arg(short, long)]
    title: Option<String>,

    /// File holding the article body (markdown or HTML).
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Source URL when reprinting.
    #[arg(long)]
    original_url: Option<String>,

    /// Category display name (exact match).
    #[arg(long)]
    category: Option<String>,

    /// Article type value.
    #[arg(long = "type")]
    article_type: Option<String>,

    /// Visible only to you.
    #[arg(long)]
    privacy: Option<bool>,

    /// Pin to the top of the blog.
    #[arg(long)]
    top: Option<bool>,

    /// Disable comments.
    #[arg(long)]
    deny_comment: Option<bool>,

    /// Let the platform download remote images.
    #[arg(long)]
    download_image: Option<bool>,
}

impl ContentArgs {
    /// Apply the given options to `content`.
    fn apply<T: Transport>(
        &self,
        client: &OschinaClient<T>,
        content: &mut ArticleContent,
    ) -> Result<(), CliError> {
        if let Some(title) = &self.title {
            content.title.clone_from(title);
        }
        if let Some(file) = &self.file {
            content.content = std::fs::read_to_string(file)?;
        }
        if let Some(url) = &self.original_url {
            content.original_url.clone_from(url);
        }
        if let Some(name) = &self.category {
            let category = client.get_category_by_name(name)?.ok_or_else(|| {
                CliError::Validation(format!("unknown category {name:?}"))
            })?;
            content.category = Some(category.id);
        }
        if let Some(article_type) = &self.article_type {
            content.article_type = ArticleType::new(article_type.as_str());
        }
        for (value, field) in [
            (self.privacy, &mut content.privacy),
            (self.top, &mut content.top),
            (self.deny_comment, &mut content.deny_comment),
            (self.download_image, &mut content.download_image),
        ] {
            if let Some(value) = value {
                *field = value;
            }
        }
        Ok(())
    }
}

/// Arguments for the draft create command.
#[derive(Args)]
pub(crate) struct CreateArgs {
    #[command(flatten)]
    content: ContentArgs,
}

impl CreateArgs {
    pub(crate) fn execute<T: Transport>(
        self,
        client: &OschinaClient<T>,
        output: &Output,
    ) -> Result<(), CliError> {
        let mut content = ArticleContent::default();
        self.content.apply(client, &mut content)?;
        client.save_draft(&mut content)?;

        let id = content.draft_id.unwrap_or_default();
        output.success(&format!("Draft created: {id}"));
        Ok(())
    }
}

/// Arguments for the draft update command.
#[derive(Args)]
pub(crate) struct UpdateArgs {
    /// Draft ID.
    id: String,

    #[command(flatten)]
    content: ContentArgs,
}

impl UpdateArgs {
    pub(crate) fn execute<T: Transport>(
        self,
        client: &OschinaClient<T>,
        output: &Output,
    ) -> Result<(), CliError> {
        let mut content = client.get_draft_detail(&self.id)?;
        self.content.apply(client, &mut content)?;
        client.save_draft(&mut content)?;

        output.success(&format!("Draft updated: {}", self.id));
        Ok(())
    }
}
