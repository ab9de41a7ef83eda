//! # unboil
//!
//! Main-article extraction from HTML. Strips navigation, advertisements,
//! comments, and boilerplate, exposing the remainder as cleaned HTML, plain
//! text, a title, a publish date, and image URLs.
//!
//! ## Quick Start
//!
//! ```rust
//! let html = r#"<html><head><title>Site Name - My Article</title></head>
//! <body><div class="article-content"><p>Main content of the page.</p></div></body></html>"#;
//!
//! let page = unboil::load(html);
//! assert_eq!(page.title().as_deref(), Some("My Article"));
//! println!("{}", page.text()?);
//! # Ok::<(), unboil::Error>(())
//! ```
//!
//! ## How it works
//!
//! Every paragraph votes for its parent element: content-like class and id
//! names raise the parent's score, boilerplate-like names lower it, and
//! paragraphs long enough to be prose add their character count. The
//! best-scoring parent becomes the article root; a cleaned copy of its
//! subtree backs all content accessors. Documents where no parent scores
//! above zero yield [`Error::NoContent`] rather than empty output, so callers
//! can tell "nothing extractable" from "page with no text".
//!
//! A [`Page`] is single-owner and single-threaded; see the type docs.

mod dom;
mod error;
mod extract;
mod page;
mod patterns;
mod preprocess;
mod sanitize;

/// Character encoding resolution and decoding.
pub mod encoding;

// Public API - re-exports
pub use error::{Error, Result};
pub use page::Page;

/// Loads an HTML document and returns the per-load [`Page`] handle.
///
/// Parsing is best-effort and never fails; a document yielding no article
/// node surfaces later as [`Error::NoContent`] from the content accessors,
/// while [`Page::title`] and [`Page::date`] simply return `None` on a miss.
#[must_use]
pub fn load(html: &str) -> Page {
    Page::new(html.to_string())
}

/// Loads an HTML document from raw bytes with a declared source charset.
///
/// `charset` is an encoding label such as `"UTF-8"` or `"ISO-8859-1"`. When
/// it is `None` or unknown, the byte head is sniffed for a meta declaration
/// and UTF-8 is assumed otherwise. Decoding is lossy: invalid sequences
/// become the Unicode replacement character rather than errors.
///
/// # Example
///
/// ```rust
/// let html = b"<html><body><div class=\"entry\">
/// <p>Une page caf\xE9 bien remplie de texte.</p></div></body></html>";
///
/// let page = unboil::load_bytes(html, Some("ISO-8859-1"));
/// assert!(page.text()?.contains("caf\u{e9}"));
/// # Ok::<(), unboil::Error>(())
/// ```
#[must_use]
pub fn load_bytes(html: &[u8], charset: Option<&str>) -> Page {
    Page::new(encoding::decode(html, charset))
}
