//! Terminal rendering of drafts, categories and command status.

use console::{Style, Term};
use postie_oschina::{ArticleContent, Category, DraftSummary};

/// Width of the id column in listings.
const ID_WIDTH: usize = 12;

/// Width of the label column in draft details.
const LABEL_WIDTH: usize = 14;

/// Terminal output on stderr.
pub(crate) struct Output {
    term: Term,
    ok: Style,
    warn: Style,
    err: Style,
    key: Style,
    label: Style,
}

impl Output {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self {
            term: Term::stderr(),
            ok: Style::new().green(),
            warn: Style::new().yellow(),
            err: Style::new().red(),
            key: Style::new().cyan().bold(),
            label: Style::new().dim(),
        }
    }

    fn line(&self, text: &str) {
        let _ = self.term.write_line(text);
    }

    pub(crate) fn success(&self, msg: &str) {
        self.line(&self.ok.apply_to(msg).to_string());
    }

    pub(crate) fn warning(&self, msg: &str) {
        self.line(&self.warn.apply_to(msg).to_string());
    }

    pub(crate) fn error(&self, msg: &str) {
        self.line(&self.err.apply_to(msg).to_string());
    }

    /// Print unstyled guidance lines, e.g. a config snippet.
    pub(crate) fn hint(&self, lines: &[&str]) {
        for line in lines {
            self.line(line);
        }
    }

    /// One listing row per draft.
    pub(crate) fn draft_row(&self, draft: &DraftSummary) {
        self.row(&draft.id, display_title(&draft.title));
    }

    /// One listing row per category.
    pub(crate) fn category_row(&self, category: &Category) {
        self.row(&category.id, &category.name);
    }

    /// Full draft as reconstructed from its edit page.
    pub(crate) fn draft(&self, id: &str, content: &ArticleContent) {
        self.line(&self.key.apply_to(display_title(&content.title)).to_string());
        self.field("id", id);
        self.field("type", content.article_type.as_str());
        self.field("category", content.category.as_deref().unwrap_or("-"));
        if !content.original_url.is_empty() {
            self.field("original url", &content.original_url);
        }
        self.field("privacy", yes_no(content.privacy));
        self.field("top", yes_no(content.top));
        self.field("deny comment", yes_no(content.deny_comment));
        self.field("download image", yes_no(content.download_image));
        self.line(&"-".repeat(60));
        self.line(&content.content);
    }

    fn row(&self, id: &str, text: &str) {
        let id = self.key.apply_to(format!("{id:<ID_WIDTH$}"));
        self.line(&format!("{id} {text}"));
    }

    fn field(&self, label: &str, value: &str) {
        let label = self.label.apply_to(format!("{label:>LABEL_WIDTH$}:"));
        self.line(&format!("{label} {value}"));
    }
}

fn display_title(title: &str) -> &str {
    if title.is_empty() { "(untitled)" } else { title }
}

fn yes_no(value: bool) -> &'static str {
    if value { "yes" } else { "no" }
}
