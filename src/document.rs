//! Document entry points
//!
//! A [`Document`] owns the immutable tree of one parsed page and hands out
//! [`Filter`]s rooted at the document node.

use crate::dom;
use crate::encoding;
use crate::filter::Filter;
use crate::options::Options;
use crate::search::Direction;
use crate::tree::Tree;
use crate::Result;

/// A parsed, queryable HTML document.
///
/// `Document` is `Send + Sync`; any number of threads may query it at once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    tree: Tree,
}

impl Document {
    /// Parse `html` with default options.
    ///
    /// ```rust
    /// use rs_htmldoc::Document;
    ///
    /// let doc = Document::new("<a href='/'>Home</a>")?;
    /// assert!(doc.tag("a").exists());
    /// # Ok::<(), rs_htmldoc::Error>(())
    /// ```
    pub fn new(html: &str) -> Result<Self> {
        Self::with_options(html, &Options::default())
    }

    /// Parse `html`, panicking if it cannot be parsed.
    ///
    /// Meant for tests and static content known to be well within the
    /// default limits.
    ///
    /// # Panics
    ///
    /// Panics with the parse error message.
    #[must_use]
    pub fn must_new(html: &str) -> Self {
        match Self::new(html) {
            Ok(doc) => doc,
            Err(err) => panic!("{err}"),
        }
    }

    /// Parse `html` under the limits in `options`.
    pub fn with_options(html: &str, options: &Options) -> Result<Self> {
        options.check_input_len(html.len())?;
        Self::parse_str(html, options)
    }

    /// Parse without the input length check.
    fn parse_str(html: &str, options: &Options) -> Result<Self> {
        let tree = dom::build_tree(&dom::parse(html), options)?;
        tracing::debug!(bytes = html.len(), nodes = tree.len(), "parsed document");
        Ok(Self { tree })
    }

    /// Decode `bytes` using the charset declared in the markup, then parse.
    ///
    /// `max_input_bytes` applies to `bytes` as given, not to the decoded text.
    ///
    /// ```rust
    /// use rs_htmldoc::{Document, Options};
    ///
    /// let html = b"<meta charset=\"windows-1252\"><p>Caf\xE9</p>";
    /// let doc = Document::from_bytes(html, &Options::default())?;
    /// assert_eq!(doc.tag("p").first().unwrap().text(), "Café");
    /// # Ok::<(), rs_htmldoc::Error>(())
    /// ```
    pub fn from_bytes(bytes: &[u8], options: &Options) -> Result<Self> {
        options.check_input_len(bytes.len())?;
        let html = encoding::decode(bytes, options.strict_encoding)?;
        Self::parse_str(&html, options)
    }

    /// Wrap a tree built by some other parser.
    #[must_use]
    pub fn from_tree(tree: Tree) -> Self {
        Self { tree }
    }

    /// The underlying tree, read-only.
    #[must_use]
    pub fn tree(&self) -> &Tree {
        &self.tree
    }

    /// A filter over the whole document with no criteria yet.
    #[must_use]
    pub fn query(&self) -> Filter<'_> {
        Filter::new(&self.tree, self.tree.root(), Direction::Descendants)
    }

    /// Shorthand for `query().tag(name)`.
    #[must_use]
    pub fn tag(&self, name: &str) -> Filter<'_> {
        self.query().tag(name)
    }

    /// Shorthand for `query().class(name)`.
    #[must_use]
    pub fn class(&self, name: &str) -> Filter<'_> {
        self.query().class(name)
    }

    /// Shorthand for `query().attribute(key, value)`.
    #[must_use]
    pub fn attribute(&self, key: &str, value: &str) -> Filter<'_> {
        self.query().attribute(key, value)
    }

    /// Shorthand for `query().selector(selector)`.
    #[must_use]
    pub fn selector(&self, selector: &str) -> Filter<'_> {
        self.query().selector(selector)
    }
}
