//! Draft edit form extractors.

use scraper::Html;

use super::{Field, element_text, flag, input_value, select_all};
use crate::error::OschinaError;
use crate::types::{ArticleContent, ArticleType, Category};

const TITLE: Field = Field::new(
    "title",
    r#"form[class="ui write-article form"] input[name="title"][type="text"]"#,
);
const BODY: Field = Field::new(
    "body",
    r#"form[class="ui write-article form"] textarea[name="body"]"#,
);
const ORIGIN_URL: Field = Field::new(
    "origin_url",
    r#"form[class="ui write-article form"] input[name="origin_url"][type="text"]"#,
);
const PRIVACY: Field = Field::new(
    "privacy",
    r#"form[class="ui write-article form"] input[name="privacy"][type="checkbox"]"#,
);
const AS_TOP: Field = Field::new(
    "as_top",
    r#"form[class="ui write-article form"] input[name="as_top"][type="checkbox"]"#,
);
const DENY_COMMENT: Field = Field::new(
    "deny_comment",
    r#"form[class="ui write-article form"] input[name="deny_comment"][type="checkbox"]"#,
);
const DOWNLOAD_IMAGE: Field = Field::new(
    "downloadImg",
    r#"form[class="ui write-article form"] input[name="downloadImg"][type="checkbox"]"#,
);
const ARTICLE_TYPE: Field = Field::new(
    "type",
    r#"form[class="ui write-article form"] input[name="type"]"#,
);
const CATEGORY_OPTIONS: Field = Field::new("catalog", "select#catalogDropdown > option");

/// Article fields read from a draft edit page.
///
/// The category is shown by name only; resolving it to an id needs the
/// category list, so it is returned separately.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct DraftForm {
    pub content: ArticleContent,
    pub category_name: Option<String>,
}

/// Extract the editable article from a draft edit page.
///
/// Fails on the first field whose selector does not match exactly once.
pub(crate) fn draft_form(doc: &Html) -> Result<DraftForm, OschinaError> {
    let content = ArticleContent {
        title: input_value(doc, TITLE)?,
        content: element_text(doc, BODY)?,
        original_url: input_value(doc, ORIGIN_URL)?,
        privacy: flag(doc, PRIVACY)?,
        top: flag(doc, AS_TOP)?,
        deny_comment: flag(doc, DENY_COMMENT)?,
        download_image: flag(doc, DOWNLOAD_IMAGE)?,
        article_type: checked_type(doc)?,
        category: None,
        draft_id: None,
    };

    Ok(DraftForm {
        content,
        category_name: selected_category_name(doc)?,
    })
}

/// Value of the first checked `type` radio, in document order.
fn checked_type(doc: &Html) -> Result<ArticleType, OschinaError> {
    let article_type = select_all(doc, ARTICLE_TYPE)?
        .into_iter()
        .find(|node| node.value().attr("checked").is_some())
        .map(|node| ArticleType::new(node.value().attr("value").unwrap_or_default()))
        .unwrap_or_default();
    Ok(article_type)
}

/// Label of the first selected category option.
fn selected_category_name(doc: &Html) -> Result<Option<String>, OschinaError> {
    let name = select_all(doc, CATEGORY_OPTIONS)?
        .into_iter()
        .find(|node| node.value().attr("selected").is_some())
        .map(|node| node.text().collect());
    Ok(name)
}

/// Categories offered by the category dropdown.
///
/// Options without a `value` (placeholders) are skipped.
pub(crate) fn category_options(doc: &Html) -> Result<Vec<Category>, OschinaError> {
    let categories = select_all(doc, CATEGORY_OPTIONS)?
        .into_iter()
        .filter_map(|node| {
            let id = node.value().attr("value").filter(|v| !v.is_empty())?;
            Some(Category {
                id: id.to_owned(),
                name: node.text().collect(),
            })
        })
        .collect();
    Ok(categories)
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;

    use crate::error::ErrorKind;

    /// Build an edit page with the given form body.
    fn page(form_body: &str) -> Html {
        Html::parse_document(&format!(
            r#"<!DOCTYPE html><html><body>
<form class="ui write-article form" method="post">{form_body}</form>
<select id="catalogDropdown">
  <option value="">Choose</option>
  <option value="7">Notes</option>
  <option value="42" selected>Tutorials</option>
</select>
</body></html>"#
        ))
    }

    const FIELDS: &str = r#"
<input name="title" type="text" value="Hello">
<textarea name="body">World</textarea>
<input name="origin_url" type="text" value="">
<input name="privacy" type="checkbox" value="1">
<input name="as_top" type="checkbox" value="0">
<input name="deny_comment" type="checkbox" value="0">
<input name="downloadImg" type="checkbox" value="0">
<input name="type" type="radio" value="original">
<input name="type" type="radio" value="article" checked>
"#;

    #[test]
    fn test_draft_form_all_fields() {
        let form = draft_form(&page(FIELDS)).unwrap();
        assert_eq!(
            form.content,
            ArticleContent {
                title: "Hello".to_owned(),
                content: "World".to_owned(),
                privacy: true,
                article_type: ArticleType::new("article"),
                ..ArticleContent::default()
            }
        );
        assert_eq!(form.category_name.as_deref(), Some("Tutorials"));
    }

    #[test]
    fn test_each_mandatory_field_must_exist() {
        for (line, field) in [
            (r#"<input name="title" type="text" value="Hello">"#, "title"),
            (r#"<textarea name="body">World</textarea>"#, "body"),
            (r#"<input name="origin_url" type="text" value="">"#, "origin_url"),
            (r#"<input name="privacy" type="checkbox" value="1">"#, "privacy"),
            (r#"<input name="as_top" type="checkbox" value="0">"#, "as_top"),
            (r#"<input name="deny_comment" type="checkbox" value="0">"#, "deny_comment"),
            (r#"<input name="downloadImg" type="checkbox" value="0">"#, "downloadImg"),
        ] {
            let missing = FIELDS.replace(line, "");
            let err = draft_form(&page(&missing)).unwrap_err();
            assert_eq!(err.kind, ErrorKind::MalformedPage);
            assert_eq!(err.field, Some(field));

            let duplicated = FIELDS.replace(line, &format!("{line}{line}"));
            let err = draft_form(&page(&duplicated)).unwrap_err();
            assert_eq!(err.field, Some(field));
            assert!(err.to_string().contains("found 2"));
        }
    }

    #[test]
    fn test_title_outside_form_does_not_count() {
        let html = format!(
            r#"<input name="title" type="text" value="Search">
<form class="ui write-article form">{FIELDS}</form>"#
        );
        let form = draft_form(&Html::parse_document(&html)).unwrap();
        assert_eq!(form.content.title, "Hello");
    }

    #[test]
    fn test_title_requires_text_input() {
        let fields = FIELDS.replace(r#"name="title" type="text""#, r#"name="title" type="hidden""#);
        let err = draft_form(&page(&fields)).unwrap_err();
        assert_eq!(err.field, Some("title"));
    }

    #[test]
    fn test_unchecked_type_left_unset() {
        let fields = FIELDS.replace(" checked>", ">");
        let form = draft_form(&page(&fields)).unwrap();
        assert!(form.content.article_type.is_unset());
    }

    #[test]
    fn test_first_checked_type_wins() {
        let fields = FIELDS.replace(
            r#"value="original">"#,
            r#"value="original" checked>"#,
        );
        let form = draft_form(&page(&fields)).unwrap();
        assert_eq!(form.content.article_type.as_str(), "original");
    }

    #[test]
    fn test_no_selected_category() {
        let html = format!(
            r#"<form class="ui write-article form">{FIELDS}</form>
<select id="catalogDropdown"><option value="7">Notes</option></select>"#
        );
        let form = draft_form(&Html::parse_document(&html)).unwrap();
        assert_eq!(form.category_name, None);
    }

    #[test]
    fn test_category_name_keeps_whitespace() {
        let html = format!(
            r#"<form class="ui write-article form">{FIELDS}</form>
<select id="catalogDropdown"><option value="7" selected>Notes </option></select>"#
        );
        let form = draft_form(&Html::parse_document(&html)).unwrap();
        assert_eq!(form.category_name.as_deref(), Some("Notes "));
    }

    #[test]
    fn test_category_options_skip_placeholder() {
        let categories = category_options(&page("")).unwrap();
        assert_eq!(
            categories,
            vec![
                Category {
                    id: "7".to_owned(),
                    name: "Notes".to_owned(),
                },
                Category {
                    id: "42".to_owned(),
                    name: "Tutorials".to_owned(),
                },
            ]
        );
    }
}
