//! Per-load page state and the accessor surface.
//!
//! A [`Page`] is the result of one load: the decoded raw source, the parsed
//! tree, and lazily-filled caches for everything derived from them.
//! Extraction and sanitization each run at most once per page; a new load
//! builds a new `Page` that shares nothing with earlier ones.

use std::cell::OnceCell;

use dom_query::{Document, Selection};

use crate::dom;
use crate::error::{Error, Result};
use crate::extract;
use crate::patterns::{DATE_TEXT, DAY_MARKER, MONTH_MARKER, TITLE_DELIMITER};
use crate::preprocess;
use crate::sanitize;

/// One loaded document and everything derived from it.
///
/// Created by [`crate::load`] / [`crate::load_bytes`]. All accessors are
/// synchronous, side-effect-free reads; derived values are computed on first
/// use and cached for the lifetime of the page.
///
/// `Page` is neither `Send` nor `Sync` - the underlying tree is `Rc`-based
/// and the caches are `OnceCell` - so sharing one across threads requires
/// external synchronization. Separate `Page` values are fully independent.
pub struct Page {
    /// Decoded source as handed in, before normalization. The date scan runs
    /// over this, not over the parsed tree.
    raw: String,
    doc: Document,
    /// Outer HTML of the selected article node; `None` once computed means
    /// extraction found nothing.
    article: OnceCell<Option<String>>,
    content: OnceCell<Option<String>>,
    text: OnceCell<Option<String>>,
    images: OnceCell<Option<Vec<String>>>,
}

impl Page {
    pub(crate) fn new(raw: String) -> Self {
        let doc = dom::parse(&preprocess::normalize(&raw));
        Self {
            raw,
            doc,
            article: OnceCell::new(),
            content: OnceCell::new(),
            text: OnceCell::new(),
            images: OnceCell::new(),
        }
    }

    /// Page title, if the document has a title element.
    ///
    /// Titles of the form `Site Name - Headline` yield only the segment after
    /// the last ` - `, trimmed.
    #[must_use]
    pub fn title(&self) -> Option<String> {
        let title = self.doc.select("title");
        if !title.exists() {
            return None;
        }
        let text = dom::text_content(&title).to_string();
        let headline = match text.rfind(TITLE_DELIMITER) {
            Some(pos) => &text[pos + TITLE_DELIMITER.len()..],
            None => text.as_str(),
        };
        Some(headline.trim().to_string())
    }

    /// Publish date as written in the source, if the fixed pattern matches.
    ///
    /// The scan runs over the raw source text, so dates inside attributes or
    /// stripped markup still count. A match written with the 月 month marker
    /// gains the trailing 日 day marker when it lacks one.
    #[must_use]
    pub fn date(&self) -> Option<String> {
        let matched = DATE_TEXT.find(&self.raw)?.as_str();
        if matched.contains(MONTH_MARKER) && !matched.ends_with(DAY_MARKER) {
            return Some(format!("{matched}{DAY_MARKER}"));
        }
        Some(matched.to_string())
    }

    /// Sanitized article content as serialized HTML (UTF-8).
    ///
    /// # Errors
    ///
    /// [`Error::NoContent`] when the scoring pass selected no article node.
    pub fn content(&self) -> Result<String> {
        self.content_html().map(str::to_string)
    }

    /// Plain text of the sanitized content, markup stripped and trimmed.
    ///
    /// # Errors
    ///
    /// [`Error::NoContent`] when the scoring pass selected no article node.
    pub fn text(&self) -> Result<String> {
        self.text_content().map(str::to_string)
    }

    /// Character count of [`Page::text`] - characters, not bytes.
    ///
    /// # Errors
    ///
    /// [`Error::NoContent`] when the scoring pass selected no article node.
    pub fn word_count(&self) -> Result<usize> {
        Ok(self.text_content()?.chars().count())
    }

    /// `src` of every image under the article node, in document order.
    ///
    /// An empty string is kept when the attribute is present but empty.
    ///
    /// # Errors
    ///
    /// [`Error::NoContent`] when the scoring pass selected no article node.
    pub fn images(&self) -> Result<Vec<String>> {
        self.images
            .get_or_init(|| {
                self.article_html().ok().map(|article| {
                    let doc = dom::parse(article);
                    let images = doc.select("img");
                    images
                        .nodes()
                        .iter()
                        .filter_map(|node| Selection::from(*node).attr("src"))
                        .map(|src| src.to_string())
                        .collect()
                })
            })
            .clone()
            .ok_or(Error::NoContent)
    }

    /// Outer HTML of the article node; extraction runs once per page.
    fn article_html(&self) -> Result<&str> {
        self.article
            .get_or_init(|| {
                extract::find_article_node(&self.doc).map(|sel| dom::outer_html(&sel).to_string())
            })
            .as_deref()
            .ok_or(Error::NoContent)
    }

    /// Sanitized serialization of the article subtree; computed once per page.
    fn content_html(&self) -> Result<&str> {
        self.content
            .get_or_init(|| self.article_html().ok().map(sanitize::sanitize))
            .as_deref()
            .ok_or(Error::NoContent)
    }

    /// Markup-stripped text of the sanitized content; computed once per page.
    fn text_content(&self) -> Result<&str> {
        self.text
            .get_or_init(|| {
                self.content_html().ok().map(|content| {
                    let doc = dom::parse(content);
                    let body = doc.select("body");
                    dom::text_content(&body).trim().to_string()
                })
            })
            .as_deref()
            .ok_or(Error::NoContent)
    }
}
