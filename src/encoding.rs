//! Character encoding resolution and decoding.
//!
//! Raw HTML bytes are decoded to UTF-8 before any other processing. The
//! caller may declare a charset label; without a usable label the byte head
//! is sniffed for a meta declaration, and UTF-8 is the final fallback.

use encoding_rs::{Encoding, UTF_8};
use regex::Regex;
use std::sync::LazyLock;

/// Number of leading bytes examined when sniffing meta declarations.
const SNIFF_WINDOW: usize = 1024;

/// Match `<meta charset="...">` tag
#[allow(clippy::expect_used)]
static META_CHARSET_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta[^>]+charset\s*=\s*["']?([^"'\s>]+)"#).expect("META_CHARSET_RE regex")
});

/// Match `<meta http-equiv="Content-Type" content="...; charset=...">` tag
#[allow(clippy::expect_used)]
static CONTENT_TYPE_CHARSET_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta[^>]+http-equiv\s*=\s*["']?content-type["']?[^>]+content\s*=\s*["']?[^"'>]*;\s*charset\s*=\s*([^"'\s>]+)"#)
        .expect("CONTENT_TYPE_CHARSET_RE regex")
});

/// Resolve the encoding for a document.
///
/// Resolution order:
/// 1. the caller-declared `label`, when `encoding_rs` knows it;
/// 2. a charset declared in the first kilobyte, either as
///    `<meta charset="...">` or the http-equiv Content-Type form;
/// 3. UTF-8.
#[must_use]
pub fn resolve_encoding(label: Option<&str>, html: &[u8]) -> &'static Encoding {
    if let Some(label) = label {
        if let Some(encoding) = Encoding::for_label(label.trim().as_bytes()) {
            return encoding;
        }
    }

    let head = String::from_utf8_lossy(&html[..html.len().min(SNIFF_WINDOW)]);
    for pattern in [&META_CHARSET_RE, &CONTENT_TYPE_CHARSET_RE] {
        if let Some(charset) = pattern.captures(&head).and_then(|c| c.get(1)) {
            if let Some(encoding) = Encoding::for_label(charset.as_str().as_bytes()) {
                return encoding;
            }
        }
    }

    UTF_8
}

/// Decode HTML bytes to a UTF-8 string.
///
/// Decoding is lossy: byte sequences invalid in the resolved encoding become
/// the Unicode replacement character instead of failing.
///
/// # Examples
///
/// ```
/// use unboil::encoding::decode;
///
/// let html = b"<html><body>Caf\xE9</body></html>";
/// assert!(decode(html, Some("ISO-8859-1")).contains("Café"));
/// ```
#[must_use]
pub fn decode(html: &[u8], charset: Option<&str>) -> String {
    let encoding = resolve_encoding(charset, html);

    if encoding == UTF_8 {
        // Fast path: no transcoding, just replace invalid sequences
        return String::from_utf8_lossy(html).into_owned();
    }

    let (decoded, _encoding_used, _had_errors) = encoding.decode(html);
    decoded.into_owned()
}
