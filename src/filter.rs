//! Filter Chain
//!
//! [`Filter`] accumulates query criteria and resolves them with a terminal
//! call. It is an immutable builder: every refinement returns a new `Filter`
//! that shares the earlier predicates through a reference-counted list, so a
//! partially built chain can be reused from several places without one
//! refinement leaking into another.
//!
//! ```rust
//! use rs_htmldoc::Document;
//!
//! let doc = Document::must_new(r#"
//!     <ul id="nav">
//!         <li><a href="/" class="active">Home</a></li>
//!         <li><a href="/about">About</a></li>
//!     </ul>
//! "#);
//!
//! let links = doc.tag("a");
//! let active = links.class("active");
//!
//! assert_eq!(links.all().len(), 2);
//! assert_eq!(active.first().map(|a| a.text()).as_deref(), Some("Home"));
//! ```

use std::fmt;
use std::sync::Arc;

use crate::node::NodeView;
use crate::search::{self, Direction};
use crate::selector::{self, Predicate};
use crate::tree::{NodeId, Tree};

/// One predicate plus the chain it was added to.
#[derive(Debug)]
struct Link {
    predicate: Predicate,
    prev: Option<Arc<Link>>,
}

/// Search root, direction and the ANDed predicates of one query.
#[derive(Clone)]
pub struct Filter<'a> {
    tree: &'a Tree,
    root: Option<NodeId>,
    direction: Direction,
    chain: Option<Arc<Link>>,
}

impl<'a> Filter<'a> {
    pub(crate) fn new(tree: &'a Tree, root: Option<NodeId>, direction: Direction) -> Self {
        Self {
            tree,
            root,
            direction,
            chain: None,
        }
    }

    /// Traversal order this filter will use.
    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Add an arbitrary predicate, e.g. a disjunction.
    ///
    /// ```rust
    /// use rs_htmldoc::{selector, Document};
    ///
    /// let doc = Document::must_new("<h1>Title</h1><h2>Sub</h2><p>Body</p>");
    /// let headings = doc
    ///     .query()
    ///     .matching(selector::any([selector::by_tag("h1"), selector::by_tag("h2")]))
    ///     .all();
    /// assert_eq!(headings.len(), 2);
    /// ```
    #[must_use]
    pub fn matching(&self, predicate: Predicate) -> Self {
        Self {
            chain: Some(Arc::new(Link {
                predicate,
                prev: self.chain.clone(),
            })),
            ..self.clone()
        }
    }

    /// Require the tag name `name`.
    #[must_use]
    pub fn tag(&self, name: &str) -> Self {
        self.matching(selector::by_tag(name))
    }

    /// Require the whole `class` value, trimmed, to equal `name`.
    #[must_use]
    pub fn class(&self, name: &str) -> Self {
        self.matching(selector::by_class(name))
    }

    /// Require attribute `key`, trimmed, to equal `value`.
    #[must_use]
    pub fn attribute(&self, key: &str, value: &str) -> Self {
        self.matching(selector::by_attribute(key, value))
    }

    /// Compile a selector string such as `a.active` and add its predicates.
    #[must_use]
    pub fn selector(&self, selector: &str) -> Self {
        selector::compile(selector)
            .into_iter()
            .fold(self.clone(), |filter, predicate| filter.matching(predicate))
    }

    /// Add several selector strings; each is compiled on its own and all of
    /// the results are ANDed, so `["a", ".active"]` equals `"a.active"`.
    #[must_use]
    pub fn selectors<I, S>(&self, selectors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        selectors
            .into_iter()
            .fold(self.clone(), |filter, s| filter.selector(s.as_ref()))
    }

    /// The conjunction of everything added so far, in insertion order.
    #[must_use]
    pub fn predicate(&self) -> Predicate {
        let mut predicates = Vec::new();
        let mut link = self.chain.as_deref();
        while let Some(current) = link {
            predicates.push(current.predicate.clone());
            link = current.prev.as_deref();
        }
        predicates.reverse();
        Predicate::All(predicates)
    }

    /// First match in traversal order, or `None`.
    ///
    /// Traversal stops as soon as a node matches.
    #[must_use]
    pub fn first(&self) -> Option<NodeView<'a>> {
        self.first_match().0.map(|id| NodeView::new(self.tree, id))
    }

    fn first_match(&self) -> (Option<NodeId>, usize) {
        search::first_match(self.tree, self.root, self.direction, &self.predicate())
    }

    /// Every match in traversal order.
    #[must_use]
    pub fn all(&self) -> Vec<NodeView<'a>> {
        search::find_all(self.tree, self.root, self.direction, &self.predicate())
            .into_iter()
            .map(|id| NodeView::new(self.tree, id))
            .collect()
    }

    /// Number of matches.
    #[must_use]
    pub fn count(&self) -> usize {
        search::find_all(self.tree, self.root, self.direction, &self.predicate()).len()
    }

    /// Whether anything matches.
    #[must_use]
    pub fn exists(&self) -> bool {
        self.first().is_some()
    }
}

impl fmt::Debug for Filter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Filter")
            .field("root", &self.root)
            .field("direction", &self.direction)
            .field("predicate", &self.predicate())
            .finish_non_exhaustive()
    }
}
