//! Draft saving and article publishing.

use tracing::info;

use super::OschinaClient;
use crate::error::{ErrorKind, OschinaError};
use crate::transport::Transport;
use crate::types::{ArticleContent, SaveIntent};

impl<T: Transport> OschinaClient<T> {
    /// Save `content` as a draft, creating it if it has no draft id yet.
    ///
    /// On creation the server-assigned id is written back to
    /// `content.draft_id`, so saving the same value again updates the draft.
    pub fn save_draft(&self, content: &mut ArticleContent) -> Result<(), OschinaError> {
        let intent = content.save_intent();
        let draft_id = self.save_draft_as(content, &intent)?;
        if intent == SaveIntent::Create {
            content.draft_id = Some(draft_id);
        }
        Ok(())
    }

    /// Save `content` with an explicit intent, returning the draft id.
    ///
    /// `content.draft_id` is ignored; `intent` alone decides between create
    /// and update. A create whose response carries no draft id fails with
    /// [`MissingDraftId`](ErrorKind::MissingDraftId).
    pub fn save_draft_as(
        &self,
        content: &ArticleContent,
        intent: &SaveIntent,
    ) -> Result<String, OschinaError> {
        content
            .validate()
            .map_err(|e| e.in_operation("save_draft"))?;

        match intent {
            SaveIntent::Create => info!("Creating draft {:?}", content.title),
            SaveIntent::Update(id) => info!("Updating draft {}", id),
        }

        let envelope = self
            .submit("/blog/save_draft", &content.to_form(intent))
            .map_err(|e| e.in_operation("save_draft"))?;

        match intent {
            SaveIntent::Update(id) => Ok(id.clone()),
            SaveIntent::Create => {
                let id = envelope.result_id("draft").ok_or_else(|| {
                    OschinaError::new(ErrorKind::MissingDraftId)
                        .with_message("response has no result.draft")
                        .with_body(envelope.raw.clone())
                        .in_operation("save_draft")
                })?;
                info!("Created draft {}", id);
                Ok(id)
            }
        }
    }

    /// Publish `content` as an article, returning the article id.
    ///
    /// When `content` carries a draft id it is sent along, so the platform
    /// publishes from that draft.
    pub fn save_article(&self, content: &ArticleContent) -> Result<String, OschinaError> {
        content
            .validate()
            .map_err(|e| e.in_operation("save_article"))?;
        info!("Publishing article {:?}", content.title);

        let envelope = self
            .submit("/blog/save", &content.to_form(&content.save_intent()))
            .map_err(|e| e.in_operation("save_article"))?;

        let id = envelope.result_id("id").ok_or_else(|| {
            OschinaError::new(ErrorKind::MissingArticleId)
                .with_message("response has no result.id")
                .with_body(envelope.raw.clone())
                .in_operation("save_article")
        })?;
        info!("Published article {}", id);
        Ok(id)
    }

    /// Publish an existing draft, returning the article id.
    ///
    /// Reconstructs the draft from its edit page first; nothing is submitted
    /// if that fails.
    pub fn publish_draft(&self, id: &str) -> Result<String, OschinaError> {
        let content = self
            .get_draft_detail(id)
            .map_err(|e| e.in_operation("publish_draft"))?;
        self.save_article(&content)
            .map_err(|e| e.in_operation("publish_draft"))
    }
}
