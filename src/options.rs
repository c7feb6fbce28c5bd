//! Configuration options for document construction.
//!
//! The `Options` struct bounds what the parser output may look like before it
//! is accepted as a queryable tree. Queries themselves take no options.

use serde::{Deserialize, Serialize};

/// Configuration options for building a [`Document`](crate::Document).
///
/// All fields are public for easy configuration. Use `Default::default()`
/// for standard settings. Missing fields fall back to their defaults when
/// deserializing.
///
/// # Example
///
/// ```rust
/// use rs_htmldoc::Options;
///
/// // Use defaults
/// let options = Options::default();
///
/// // Customize specific fields
/// let options = Options {
///     max_depth: 64,
///     strict_encoding: true,
///     ..Options::default()
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Options {
    /// Reject input longer than this many bytes.
    ///
    /// Default: `None` (unlimited)
    pub max_input_bytes: Option<usize>,

    /// Maximum nesting depth of the parsed tree.
    ///
    /// The document node sits at depth 0, `<html>` at depth 1. A tree that
    /// nests deeper than this is rejected with a parse error.
    ///
    /// Default: `512`
    pub max_depth: usize,

    /// Fail on byte sequences that are invalid in the detected encoding.
    ///
    /// When disabled, invalid sequences are replaced with U+FFFD. Only
    /// affects [`Document::from_bytes`](crate::Document::from_bytes).
    ///
    /// Default: `false`
    pub strict_encoding: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            max_input_bytes: None,
            max_depth: 512,
            strict_encoding: false,
        }
    }
}

impl Options {
    /// Check the raw input length against `max_input_bytes`.
    pub(crate) fn check_input_len(&self, len: usize) -> crate::Result<()> {
        match self.max_input_bytes {
            Some(max) if len > max => Err(crate::Error::ParseError(format!(
                "input is {len} bytes, limit is {max}"
            ))),
            _ => Ok(()),
        }
    }
}
