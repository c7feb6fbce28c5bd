//! Character encoding detection and transcoding.
//!
//! Byte input is sniffed for a charset declaration in its `<meta>` tags and
//! decoded to UTF-8 before it reaches the parser.

use encoding_rs::{Encoding, UTF_8};
use regex::Regex;
use std::sync::LazyLock;

use crate::{Error, Result};

/// Match `<meta charset="...">` tag
#[allow(clippy::expect_used)]
static CHARSET_META_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta[^>]+charset\s*=\s*["']?([^"'\s>/;]+)"#).expect("valid regex")
});

/// Match `<meta http-equiv="Content-Type" content="...; charset=...">` tag
#[allow(clippy::expect_used)]
static CONTENT_TYPE_CHARSET_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta[^>]+http-equiv\s*=\s*["']?content-type["']?[^>]+content\s*=\s*["']?[^"'>]*;\s*charset\s*=\s*([^"'\s>]+)"#).expect("valid regex")
});

/// Only the head of the input is scanned for declarations.
const SNIFF_LEN: usize = 1024;

/// Detect character encoding from HTML bytes.
///
/// Looks for charset declarations in the following order:
/// 1. `<meta charset="...">`
/// 2. `<meta http-equiv="Content-Type" content="...; charset=...">`
/// 3. Defaults to UTF-8 if no declaration found
///
/// Only examines the first 1024 bytes. A declared UTF-16 or `replacement`
/// encoding cannot describe markup that was readable as ASCII, so it maps to
/// UTF-8.
#[must_use]
pub fn detect_encoding(html: &[u8]) -> &'static Encoding {
    let head = &html[..html.len().min(SNIFF_LEN)];
    let head_str = String::from_utf8_lossy(head);

    extract_charset(&head_str)
        .or_else(|| extract_content_type_charset(&head_str))
        .and_then(|label| Encoding::for_label(label.as_bytes()))
        .map(Encoding::output_encoding)
        .unwrap_or(UTF_8)
}

fn extract_charset(html: &str) -> Option<String> {
    CHARSET_META_RE
        .captures(html)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string())
}

fn extract_content_type_charset(html: &str) -> Option<String> {
    CONTENT_TYPE_CHARSET_RE
        .captures(html)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string())
}

/// Decode HTML bytes to a UTF-8 string.
///
/// A byte order mark takes precedence over any declaration and is dropped. With
/// `strict` unset, invalid sequences become U+FFFD; with `strict` set, any
/// invalid sequence is reported as [`Error::ParseError`].
///
/// # Examples
///
/// ```
/// use rs_htmldoc::encoding::decode;
///
/// let html = b"<html><body>Hello, World!</body></html>";
/// let text = decode(html, true)?;
/// assert!(text.contains("Hello, World!"));
/// # Ok::<(), rs_htmldoc::Error>(())
/// ```
pub fn decode(html: &[u8], strict: bool) -> Result<String> {
    let (decoded, encoding, had_errors) = detect_encoding(html).decode(html);
    tracing::debug!(encoding = encoding.name(), bytes = html.len(), "decoding document");

    if strict && had_errors {
        return Err(Error::ParseError(format!(
            "input is not valid {}",
            encoding.name()
        )));
    }
    Ok(decoded.into_owned())
}
