//! Pre-parse markup normalization.
//!
//! Runs over the decoded source text before tree construction. Doubled line
//! breaks are a common informal paragraph delimiter in legacy markup; turning
//! them into real paragraph boundaries here lets the extractor's paragraph
//! walk see that content as first-class candidates.

#![allow(clippy::expect_used)]

use regex::Regex;
use std::sync::LazyLock;

/// Any meta tag carrying a charset declaration, in either form.
static CHARSET_DIRECTIVE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)<meta[^>]*charset\s*=[^>]*>").expect("CHARSET_DIRECTIVE regex")
});

/// Script blocks, content included.
static SCRIPT_BLOCK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<script[^>]*>.*?</script\s*>").expect("SCRIPT_BLOCK regex")
});

/// Two or more consecutive br tags, whitespace allowed between them.
static DOUBLED_BREAK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)(<br[^>]*>\s*){2,}").expect("DOUBLED_BREAK regex"));

/// Font tags, opening or closing; their content stays in place.
static FONT_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)</?font[^>]*>").expect("FONT_TAG regex"));

/// Normalize raw markup text before structural parsing.
///
/// Guarantees on the output:
/// - no charset directive remains embedded (the text is already UTF-8);
/// - runs of two or more line breaks have become `</p><p>` boundaries;
/// - script blocks are gone, content included;
/// - font tags are unwrapped, keeping their text;
/// - leading and trailing whitespace is trimmed.
///
/// A rule with nothing to match is a no-op; this function never fails.
#[must_use]
pub(crate) fn normalize(html: &str) -> String {
    let html = CHARSET_DIRECTIVE.replace_all(html, "");
    let html = SCRIPT_BLOCK.replace_all(&html, "");
    let html = DOUBLED_BREAK.replace_all(&html, "</p><p>");
    let html = FONT_TAG.replace_all(&html, "");
    html.trim().to_string()
}
