//! Attribute helpers for predicates
//!
//! Every lookup falls back to the empty string, so a missing attribute and an
//! empty one compare the same way.

use crate::tree::Node;

/// Get element class attribute (empty string if missing)
#[inline]
#[must_use]
pub fn class(node: &Node) -> &str {
    attr(node, "class")
}

/// Get any attribute (empty string if missing)
///
/// Keys may repeat; the first pair wins.
#[inline]
#[must_use]
pub fn attr<'n>(node: &'n Node, name: &str) -> &'n str {
    node.attribute(name).unwrap_or_default()
}

/// Get tag name (empty string for non-elements)
#[inline]
#[must_use]
pub fn tag(node: &Node) -> &str {
    node.tag_name().unwrap_or_default()
}
