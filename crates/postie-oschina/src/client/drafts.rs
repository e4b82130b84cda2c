//! Draft listing and reconstruction.

use tracing::{debug, info, warn};

use super::OschinaClient;
use crate::error::OschinaError;
use crate::extract;
use crate::transport::Transport;
use crate::types::{ArticleContent, DraftPage};

impl<T: Transport> OschinaClient<T> {
    /// List one page of drafts.
    ///
    /// `page` is clamped to at least 1. An empty page is not an error.
    /// Callers paginate by incrementing `page` while `has_next` holds.
    pub fn list_drafts(&self, page: i32) -> Result<DraftPage, OschinaError> {
        let page = page.max(1).to_string();
        info!("Listing drafts page {}", page);

        let doc = self
            .fetch_document("/admin/drafts", &[("p", page.as_str())])
            .map_err(|e| e.in_operation("list_drafts"))?;

        let drafts = extract::draft_links(&doc).map_err(|e| e.in_operation("list_drafts"))?;
        if drafts.is_empty() {
            return Ok(DraftPage::default());
        }
        let has_next = extract::has_next_page(&doc).map_err(|e| e.in_operation("list_drafts"))?;

        debug!("Found {} drafts (has_next={})", drafts.len(), has_next);
        Ok(DraftPage { drafts, has_next })
    }

    /// Reconstruct a draft from its edit page.
    ///
    /// The selected category label is resolved through the category list;
    /// an unknown label leaves `category` unset. The returned content carries
    /// `id` as its draft id, so saving it updates the same draft.
    pub fn get_draft_detail(&self, id: &str) -> Result<ArticleContent, OschinaError> {
        self.draft_detail(id)
            .map_err(|e| e.in_operation("get_draft_detail"))
    }

    fn draft_detail(&self, id: &str) -> Result<ArticleContent, OschinaError> {
        if id.is_empty() {
            return Err(OschinaError::validation("draft id cannot be empty"));
        }
        info!("Getting draft {}", id);

        let doc = self.fetch_document(&format!("/blog/write/draft/{id}"), &[])?;
        let form = extract::draft_form(&doc)?;

        let mut content = form.content;
        if let Some(name) = form.category_name {
            match self.get_category_by_name(&name)? {
                Some(category) => content.category = Some(category.id),
                None => warn!("Draft {} has unknown category {:?}", id, name),
            }
        }
        content.draft_id = Some(id.to_owned());

        debug!("Reconstructed draft {} ({:?})", id, content.title);
        Ok(content)
    }

    /// Delete a draft.
    pub fn delete_draft(&self, id: &str) -> Result<(), OschinaError> {
        if id.is_empty() {
            return Err(
                OschinaError::validation("draft id cannot be empty").in_operation("delete_draft")
            );
        }
        info!("Deleting draft {}", id);

        self.submit("/blog/delete_draft", &[("id", id.to_owned())])
            .map_err(|e| e.in_operation("delete_draft"))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::client::fixtures::{DETAIL_PAGE, WRITE_PAGE};
    use crate::error::ErrorKind;
    use crate::mock::{Method, MockTransport};
    use crate::types::{ArticleType, DraftSummary};
    use crate::{ArticleContent, OschinaClient};

    const LIST_PAGE: &str = r#"<!DOCTYPE html><html><body>
<div class="ui relaxed divided items list-container">
  <div class="item"><div class="content">
    <a class="header" href="https://my.oschina.net/u/1/blog/write/draft/300">Newest</a>
  </div></div>
  <div class="item"><div class="content">
    <a class="header" href="https://my.oschina.net/u/1/blog/write/draft/200">Middle</a>
  </div></div>
  <div class="item"><div class="content">
    <a class="header">No link</a>
  </div></div>
</div>
<div class="ui pagination menu ">
  <a class="item" href="?p=1">1</a>
  <a class="item next-item" href="?p=2">Next</a>
</div>
</body></html>"#;

    const EMPTY_PAGE: &str = r#"<!DOCTYPE html><html><body>
<div class="ui relaxed divided items list-container"></div>
<div class="ui pagination menu "><a class="item next-item" href="?p=2">Next</a></div>
</body></html>"#;

    #[test]
    fn test_list_drafts_in_document_order() {
        let client = OschinaClient::new(MockTransport::new().with_get("/admin/drafts", LIST_PAGE));

        let page = client.list_drafts(1).unwrap();
        assert!(page.has_next);
        assert_eq!(
            page.drafts,
            vec![
                DraftSummary {
                    id: "300".to_owned(),
                    title: "Newest".to_owned(),
                    url: "https://my.oschina.net/u/1/blog/write/draft/300".to_owned(),
                },
                DraftSummary {
                    id: "200".to_owned(),
                    title: "Middle".to_owned(),
                    url: "https://my.oschina.net/u/1/blog/write/draft/200".to_owned(),
                },
                DraftSummary {
                    id: String::new(),
                    title: "No link".to_owned(),
                    url: String::new(),
                },
            ]
        );
    }

    #[test]
    fn test_list_drafts_last_page() {
        let html = LIST_PAGE.replace(r#"<a class="item next-item" href="?p=2">Next</a>"#, "");
        let client = OschinaClient::new(MockTransport::new().with_get("/admin/drafts", html));

        let page = client.list_drafts(3).unwrap();
        assert_eq!(page.drafts.len(), 3);
        assert!(!page.has_next);
    }

    #[test]
    fn test_list_drafts_empty_ignores_next_control() {
        let client = OschinaClient::new(MockTransport::new().with_get("/admin/drafts", EMPTY_PAGE));

        let page = client.list_drafts(1).unwrap();
        assert!(page.drafts.is_empty());
        assert!(!page.has_next);
    }

    #[test]
    fn test_list_drafts_clamps_page() {
        let client = OschinaClient::new(MockTransport::new().with_get("/admin/drafts", EMPTY_PAGE));

        client.list_drafts(0).unwrap();
        client.list_drafts(-5).unwrap();
        client.list_drafts(4).unwrap();

        let pages: Vec<_> = client
            .transport()
            .calls()
            .iter()
            .map(|c| c.param("p").unwrap_or_default().to_owned())
            .collect();
        assert_eq!(pages, ["1", "1", "4"]);
    }

    #[test]
    fn test_list_drafts_transport_error_has_context() {
        let client = OschinaClient::new(MockTransport::new().with_status(
            Method::Get,
            "/admin/drafts",
            502,
            "bad gateway",
        ));

        let err = client.list_drafts(1).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Transport);
        assert_eq!(err.status, Some(502));
        assert_eq!(err.body.as_deref(), Some("bad gateway"));
        assert!(err.to_string().starts_with("list_drafts: "));
    }

    #[test]
    fn test_get_draft_detail_end_to_end() {
        let client = OschinaClient::new(
            MockTransport::new()
                .with_get("/blog/write/draft/555", DETAIL_PAGE)
                .with_get("/blog/write", WRITE_PAGE),
        );

        let content = client.get_draft_detail("555").unwrap();
        assert_eq!(
            content,
            ArticleContent {
                title: "Hello".to_owned(),
                content: "World".to_owned(),
                original_url: String::new(),
                privacy: true,
                top: false,
                deny_comment: false,
                download_image: false,
                article_type: ArticleType::new("article"),
                category: Some("42".to_owned()),
                draft_id: Some("555".to_owned()),
            }
        );
    }

    #[test]
    fn test_get_draft_detail_unknown_category_left_unset() {
        let page = DETAIL_PAGE.replace("<option selected>Tutorials", "<option selected>tutorials");
        let client = OschinaClient::new(
            MockTransport::new()
                .with_get("/blog/write/draft/555", page)
                .with_get("/blog/write", WRITE_PAGE),
        );

        let content = client.get_draft_detail("555").unwrap();
        assert_eq!(content.category, None);
        assert_eq!(content.title, "Hello");
    }

    #[test]
    fn test_get_draft_detail_without_selection_skips_lookup() {
        let page = DETAIL_PAGE.replace("<option selected>", "<option>");
        let client = OschinaClient::new(MockTransport::new().with_get("/blog/write/draft/1", page));

        let content = client.get_draft_detail("1").unwrap();
        assert_eq!(content.category, None);
        assert!(
            client
                .transport()
                .calls_to(Method::Get, "/blog/write")
                .is_empty()
        );
    }

    #[test]
    fn test_get_draft_detail_malformed_page() {
        let page = DETAIL_PAGE.replace(
            r#"<input name="as_top" type="checkbox" value="0">"#,
            r#"<input name="as_top" type="checkbox" value="0"><input name="as_top" type="checkbox" value="1">"#,
        );
        let client = OschinaClient::new(
            MockTransport::new()
                .with_get("/blog/write/draft/9", page)
                .with_get("/blog/write", WRITE_PAGE),
        );

        let err = client.get_draft_detail("9").unwrap_err();
        assert_eq!(err.kind, ErrorKind::MalformedPage);
        assert_eq!(err.field, Some("as_top"));
        assert!(err.to_string().starts_with("get_draft_detail: "));
        assert!(
            client
                .transport()
                .calls_to(Method::Get, "/blog/write")
                .is_empty()
        );
    }

    #[test]
    fn test_get_draft_detail_category_lookup_failure_propagates() {
        let client = OschinaClient::new(
            MockTransport::new()
                .with_get("/blog/write/draft/555", DETAIL_PAGE)
                .with_status(Method::Get, "/blog/write", 500, "oops"),
        );

        let err = client.get_draft_detail("555").unwrap_err();
        assert_eq!(err.kind, ErrorKind::Transport);
        assert_eq!(
            err.operations().collect::<Vec<_>>(),
            ["get_draft_detail", "list_categories"]
        );
    }

    #[test]
    fn test_delete_draft_posts_id() {
        let client = OschinaClient::new(
            MockTransport::new().with_post("/blog/delete_draft", r#"{"code":1}"#),
        );

        client.delete_draft("321").unwrap();
        let calls = client.transport().calls_to(Method::Post, "/blog/delete_draft");
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].param("id"), Some("321"));
    }

    #[test]
    fn test_delete_draft_rejected() {
        let client = OschinaClient::new(MockTransport::new().with_post(
            "/blog/delete_draft",
            r#"{"code":0,"message":"草稿不存在"}"#,
        ));

        let err = client.delete_draft("321").unwrap_err();
        assert_eq!(err.kind, ErrorKind::Rejected);
    }

    #[test]
    fn test_delete_draft_empty_id() {
        let client = OschinaClient::new(MockTransport::new());
        let err = client.delete_draft("").unwrap_err();
        assert_eq!(err.kind, ErrorKind::Validation);
        assert!(client.transport().calls().is_empty());
    }
}
