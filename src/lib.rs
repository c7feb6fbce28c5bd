//! # rs-htmldoc
//!
//! Fluent queries over a parsed HTML document.
//!
//! A [`Document`] is parsed once into an immutable tree. Queries are built by
//! chaining criteria onto a [`Filter`] (tag name, whole `class` value,
//! attribute value, compact selector strings such as `a.active` or `ul#nav`,
//! or any [`Predicate`]) and resolved with [`Filter::first`] or
//! [`Filter::all`].
//!
//! ## Quick Start
//!
//! ```rust
//! use rs_htmldoc::Document;
//!
//! let doc = Document::new(r#"
//!     <nav><ul id="nav" class="fancy">
//!         <li><a href="/" class="active">Home</a></li>
//!         <li><a href="/about">About</a></li>
//!     </ul></nav>
//!     <form action="/search"><input name="q"></form>
//! "#)?;
//!
//! assert_eq!(doc.tag("a").all().len(), 2);
//! assert_eq!(doc.selector("ul#nav").first().unwrap().attribute("class"), "fancy");
//!
//! let input = doc.tag("input").first().unwrap();
//! let form = input.parent().tag("form").first().unwrap();
//! assert_eq!(form.attribute("action"), "/search");
//! # Ok::<(), rs_htmldoc::Error>(())
//! ```
//!
//! ## Matching rules
//!
//! - Tag names compare exactly. The parser lowercases HTML tag names.
//! - `class` matches the whole trimmed attribute value, not one entry of a
//!   class list: `class="one two"` does not match `.one`.
//! - Attribute values are trimmed before comparing; a missing attribute reads
//!   as `""`.
//! - Forward queries walk the subtree depth-first in document order; upward
//!   queries walk the ancestors of a node, nearest first, excluding the node.

mod document;
mod error;
mod filter;
mod node;
mod options;

/// Parser adapter turning markup into a [`tree::Tree`].
pub mod dom;

/// Arena tree of nodes addressed by index.
pub mod tree;

/// Predicates, selector-string compilation and attribute helpers.
pub mod selector;

/// Depth-first forward and ancestor traversal.
pub mod search;

/// Character encoding detection and transcoding.
pub mod encoding;

// Public API - re-exports
pub use document::Document;
pub use error::{Error, Result};
pub use filter::Filter;
pub use node::NodeView;
pub use options::Options;
pub use search::Direction;
pub use selector::Predicate;
