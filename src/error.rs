//! Error types for rs-htmldoc.
//!
//! Querying never fails; the only recoverable error is a document that could
//! not be turned into a tree.

/// Error type for document construction.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The document could not be parsed into a queryable tree.
    #[error("HTML parsing failed: {0}")]
    ParseError(String),
}

/// Result type alias for document construction.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_error_display_includes_reason() {
        let err = Error::ParseError("nesting deeper than 4 levels".to_string());
        assert_eq!(err.to_string(), "HTML parsing failed: nesting deeper than 4 levels");
    }
}
