//! Post-extraction sanitization.
//!
//! Works on an independent copy of the article subtree, so the loaded
//! document is never mutated. Tag removal runs before attribute stripping;
//! the two passes are independent of each other.

use dom_query::Selection;

use crate::dom;

/// Element kinds removed outright, children included: interactive and
/// executable elements plus the legacy presentational and embedding set.
pub(crate) const JUNK_TAGS: &[&str] = &[
    "style", "form", "iframe", "script", "button", "input", "textarea", "noscript", "select",
    "option", "object", "applet", "embed", "param", "frame", "frameset", "noframes", "basefont",
    "bgsound", "blink", "marquee",
];

/// Attribute names stripped from every element.
pub(crate) const JUNK_ATTRIBUTES: &[&str] =
    &["style", "class", "onclick", "onmouseover", "align", "border", "margin"];

/// Clean a copy of the article subtree and serialize it.
///
/// Re-parsing the article's outer HTML is the deep copy: the resulting
/// document owns its own tree. Each junk tag kind is selected and removed
/// until the tree reports none left, then the junk attributes are stripped
/// from every remaining element.
pub(crate) fn sanitize(article_html: &str) -> String {
    let doc = dom::parse(article_html);

    for &tag in JUNK_TAGS {
        loop {
            let junk = doc.select(tag);
            if !junk.exists() {
                break;
            }
            junk.remove();
        }
    }

    let elements = doc.select("*");
    for node in elements.nodes() {
        let element = Selection::from(*node);
        for &name in JUNK_ATTRIBUTES {
            dom::remove_attribute(&element, name);
        }
    }

    dom::inner_html(&doc.select("body")).trim().to_string()
}
