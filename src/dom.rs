//! Parser adapter
//!
//! Markup is parsed by the `dom_query` crate (html5ever underneath) and the
//! result is copied once into an immutable [`Tree`]. Tag names come out
//! lowercased, entities decoded and malformed markup recovered, all by the
//! parser. The document node becomes the tree root, with doctypes and
//! comments kept as [`NodeKind::Other`].

use dom_query::{Document, NodeRef};

use crate::options::Options;
use crate::tree::{NodeId, NodeKind, Tree, TreeBuilder};
use crate::{Error, Result};

/// Parse an HTML string into a `dom_query` document.
#[inline]
#[must_use]
pub fn parse(html: &str) -> Document {
    Document::from(html)
}

/// Kind of a parsed node.
fn node_kind(node: &NodeRef) -> NodeKind {
    if node.is_element() {
        NodeKind::Element {
            tag: node.node_name().map(|t| t.to_string()).unwrap_or_default(),
            attrs: node
                .attrs()
                .iter()
                .map(|attr| (attr.name.local.to_string(), attr.value.to_string()))
                .collect(),
        }
    } else if node.is_text() {
        NodeKind::Text(node.text().to_string())
    } else {
        NodeKind::Other
    }
}

/// Copy a parsed document into a [`Tree`].
///
/// Fails when the document nests deeper than `options.max_depth`.
pub fn build_tree(doc: &Document, options: &Options) -> Result<Tree> {
    let root = doc.root();
    let mut builder = TreeBuilder::new(node_kind(&root));
    let mut stack: Vec<(NodeRef<'_>, NodeId)> = vec![(root, builder.root())];

    while let Some((node, id)) = stack.pop() {
        for child in node.children() {
            let Some(child_id) = builder.append(id, node_kind(&child)) else {
                continue;
            };
            if builder.depth(child_id) > options.max_depth {
                return Err(Error::ParseError(format!(
                    "document nests deeper than {} levels",
                    options.max_depth
                )));
            }
            stack.push((child, child_id));
        }
    }

    Ok(builder.build())
}
