//! Node View
//!
//! A read-only handle onto one node of a [`Tree`]. Views are `Copy`, borrow
//! the tree, and expose only attribute lookup, text extraction and upward
//! queries; the underlying node stays private so the backing parser can be
//! swapped.

use std::fmt;
use std::ops::ControlFlow;

use crate::filter::Filter;
use crate::search::{self, Direction};
use crate::selector::utils;
use crate::tree::{Node, NodeId, Tree};

/// Read-only handle onto one document node.
#[derive(Clone, Copy)]
pub struct NodeView<'a> {
    tree: &'a Tree,
    id: NodeId,
}

impl<'a> NodeView<'a> {
    pub(crate) fn new(tree: &'a Tree, id: NodeId) -> Self {
        Self { tree, id }
    }

    pub(crate) fn node(&self) -> Option<&'a Node> {
        self.tree.get(self.id)
    }

    /// Value of the first attribute named `key`, or `""` when there is none.
    ///
    /// The value is returned untrimmed.
    ///
    /// ```rust
    /// use rs_htmldoc::Document;
    ///
    /// let doc = Document::must_new(r#"<ul id="nav" class="fancy"></ul>"#);
    /// let ul = doc.selector("ul#nav").first().unwrap();
    /// assert_eq!(ul.attribute("class"), "fancy");
    /// assert_eq!(ul.attribute("title"), "");
    /// ```
    #[must_use]
    pub fn attribute(&self, key: &str) -> String {
        self.node()
            .map(|node| utils::attr(node, key))
            .unwrap_or_default()
            .to_string()
    }

    /// Text of every text node in this subtree, in document order, with the
    /// result trimmed.
    ///
    /// ```rust
    /// use rs_htmldoc::Document;
    ///
    /// let doc = Document::must_new("<p>  Hello <b>bold</b> world  </p>");
    /// let p = doc.tag("p").first().unwrap();
    /// assert_eq!(p.text(), "Hello bold world");
    /// ```
    #[must_use]
    pub fn text(&self) -> String {
        let mut buf = String::new();
        search::walk(self.tree, Some(self.id), Direction::Descendants, |_, node| {
            if let Some(content) = node.text() {
                buf.push_str(content);
            }
            ControlFlow::Continue(())
        });
        buf.trim().to_string()
    }

    /// Start an upward query from this node.
    ///
    /// The returned filter searches this node's ancestors, nearest first. The
    /// node itself is never a candidate.
    ///
    /// ```rust
    /// use rs_htmldoc::Document;
    ///
    /// let doc = Document::must_new(r#"<form action="/go"><label><input name="q"></label></form>"#);
    /// let input = doc.tag("input").first().unwrap();
    /// let form = input.parent().tag("form").first().unwrap();
    /// assert_eq!(form.attribute("action"), "/go");
    /// assert!(input.parent().tag("input").first().is_none());
    /// ```
    #[must_use]
    pub fn parent(&self) -> Filter<'a> {
        Filter::new(self.tree, Some(self.id), Direction::Ancestors)
    }
}

impl PartialEq for NodeView<'_> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.tree, other.tree) && self.id == other.id
    }
}

impl Eq for NodeView<'_> {}

impl fmt::Debug for NodeView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodeView")
            .field("id", &self.id.index())
            .field("tag", &self.node().map(utils::tag))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::{NodeKind, TreeBuilder};

    fn sample() -> (Tree, NodeId, NodeId) {
        let mut builder = TreeBuilder::new(NodeKind::Other);
        let root = builder.root();
        let a = builder.append(root, NodeKind::element("a", &[("href", " /x "), ("href", "/y")])).unwrap();
        builder.append(a, NodeKind::text("\n  Sign "));
        let b = builder.append(a, NodeKind::element("b", &[])).unwrap();
        builder.append(b, NodeKind::text("Up"));
        builder.append(a, NodeKind::Other);
        builder.append(a, NodeKind::text("  \n"));
        let empty = builder.append(root, NodeKind::element("br", &[])).unwrap();
        (builder.build(), a, empty)
    }

    #[test]
    fn attribute_returns_first_value_untrimmed() {
        let (tree, a, _) = sample();
        let view = NodeView::new(&tree, a);
        assert_eq!(view.attribute("href"), " /x ");
        assert_eq!(view.attribute("missing"), "");
    }

    #[test]
    fn text_concatenates_in_order_and_trims() {
        let (tree, a, _) = sample();
        assert_eq!(NodeView::new(&tree, a).text(), "Sign Up");
    }

    #[test]
    fn text_of_node_without_text_is_empty() {
        let (tree, _, br) = sample();
        assert_eq!(NodeView::new(&tree, br).text(), "");
    }

    #[test]
    fn unknown_node_is_harmless() {
        let (tree, a, _) = sample();
        let other = Tree::default();
        let view = NodeView::new(&other, a);
        assert_eq!(view.attribute("href"), "");
        assert_eq!(view.text(), "");
        assert!(view.parent().first().is_none());
        assert_ne!(view, NodeView::new(&tree, a));
    }

    #[test]
    fn views_of_same_node_are_equal() {
        let (tree, a, br) = sample();
        assert_eq!(NodeView::new(&tree, a), NodeView::new(&tree, a));
        assert_ne!(NodeView::new(&tree, a), NodeView::new(&tree, br));
    }
}
