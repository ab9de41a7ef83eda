//! Compiled patterns for paragraph scoring and the thin accessors.
//!
//! All patterns are compiled once at first use via `LazyLock`. The scoring
//! vocabularies come in two shapes per signal: class values are matched
//! loosely (substring for the boilerplate family, whole token for the content
//! family) while id values must match in full - ids are expected to be
//! singular, so a looser match is not warranted.

#![allow(clippy::expect_used)]

use regex::Regex;
use std::sync::LazyLock;

// =============================================================================
// Scoring vocabularies
// =============================================================================

/// Boilerplate vocabulary, class form: matches anywhere in the value.
pub static NEGATIVE_CLASS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(comment|meta|footer|footnote)").expect("NEGATIVE_CLASS regex"));

/// Boilerplate vocabulary, id form: the whole value must be one token.
pub static NEGATIVE_ID: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(comment|meta|footer|footnote)$").expect("NEGATIVE_ID regex")
});

/// Content vocabulary, class form: one token bounded by whitespace or the
/// string edges.
pub static POSITIVE_CLASS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)(^|\s)(post|hentry|entry-?(content|text|body)?|article-?(content|text|body)?)(\s|$)",
    )
    .expect("POSITIVE_CLASS regex")
});

/// Content vocabulary, id form: the whole value must be one token.
pub static POSITIVE_ID: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(post|hentry|entry-?(content|text|body)?|article-?(content|text|body)?)$")
        .expect("POSITIVE_ID regex")
});

// =============================================================================
// Accessor patterns
// =============================================================================

/// Publish-date pattern: year, month, day joined by whitespace, a hyphen, or
/// the 年/月 locale markers, with an optional trailing day marker.
pub static DATE_TEXT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d{4}[-\s年]\d{1,2}[-\s月]\d{1,2}日?").expect("DATE_TEXT regex"));

/// Month marker whose presence in a date match calls for the trailing day marker.
pub const MONTH_MARKER: char = '月';

/// Day marker appended to locale-marked date matches.
pub const DAY_MARKER: char = '日';

/// Separator between site name and headline in title elements.
pub const TITLE_DELIMITER: &str = " - ";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_class_matches_substrings() {
        assert!(NEGATIVE_CLASS.is_match("comment"));
        assert!(NEGATIVE_CLASS.is_match("user-comments-area"));
        assert!(NEGATIVE_CLASS.is_match("page-footer"));
        assert!(NEGATIVE_CLASS.is_match("Footnote"));
        assert!(!NEGATIVE_CLASS.is_match("article-content"));
    }

    #[test]
    fn negative_id_requires_full_value() {
        assert!(NEGATIVE_ID.is_match("footer"));
        assert!(NEGATIVE_ID.is_match("COMMENT"));
        assert!(!NEGATIVE_ID.is_match("page-footer"));
        assert!(!NEGATIVE_ID.is_match("footerlinks"));
    }

    #[test]
    fn positive_class_requires_token_boundaries() {
        assert!(POSITIVE_CLASS.is_match("post"));
        assert!(POSITIVE_CLASS.is_match("hentry"));
        assert!(POSITIVE_CLASS.is_match("entry-content"));
        assert!(POSITIVE_CLASS.is_match("article-body"));
        assert!(POSITIVE_CLASS.is_match("some article-content thing"));
        assert!(!POSITIVE_CLASS.is_match("signpost"));
        assert!(!POSITIVE_CLASS.is_match("poster"));
    }

    #[test]
    fn positive_id_requires_full_value() {
        assert!(POSITIVE_ID.is_match("post"));
        assert!(POSITIVE_ID.is_match("entry-body"));
        assert!(POSITIVE_ID.is_match("articletext"));
        assert!(!POSITIVE_ID.is_match("my-post"));
        assert!(!POSITIVE_ID.is_match("post list"));
    }

    #[test]
    fn date_text_matches_both_styles() {
        assert_eq!(
            DATE_TEXT.find("published 2016-11-05 at noon").map(|m| m.as_str()),
            Some("2016-11-05")
        );
        assert_eq!(
            DATE_TEXT.find("更新 2016年11月05日").map(|m| m.as_str()),
            Some("2016年11月05日")
        );
        assert_eq!(
            DATE_TEXT.find("on 2020 1 9 morning").map(|m| m.as_str()),
            Some("2020 1 9")
        );
        assert!(DATE_TEXT.find("11-05-2016 only").is_none());
    }
}
