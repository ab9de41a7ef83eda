//! DOM operations adapter.
//!
//! Thin naming layer over `dom_query` for the tree operations the crate
//! performs, keeping call sites uniform across extraction, sanitization, and
//! the accessors.

use dom_query::{Document, Selection};
use tendril::StrTendril;

/// Parse an HTML string into a document.
///
/// Best-effort: malformed input yields whatever tree the parser can build,
/// never an error.
#[inline]
#[must_use]
pub(crate) fn parse(html: &str) -> Document {
    Document::from(html)
}

/// All text content of the selection and its descendants.
///
/// Returns `StrTendril` for zero-copy passing; convert only when owned
/// storage is needed.
#[inline]
#[must_use]
pub(crate) fn text_content(sel: &Selection) -> StrTendril {
    sel.text()
}

/// Inner HTML of the selection.
#[inline]
#[must_use]
pub(crate) fn inner_html(sel: &Selection) -> StrTendril {
    sel.inner_html()
}

/// Outer HTML of the selection.
#[inline]
#[must_use]
pub(crate) fn outer_html(sel: &Selection) -> StrTendril {
    sel.html()
}

/// Remove an attribute from the selected nodes, if present.
#[inline]
pub(crate) fn remove_attribute(sel: &Selection, name: &str) {
    sel.remove_attr(name);
}
