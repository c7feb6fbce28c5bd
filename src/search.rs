//! Search Strategy
//!
//! Two depth-first, pre-order walks over a [`Tree`]:
//!
//! - [`Direction::Descendants`] visits the root, then each child subtree in
//!   document order.
//! - [`Direction::Ancestors`] starts one level above the root and follows
//!   parent links up to the document root. The starting node is never visited.
//!
//! Visitors return [`ControlFlow::Break`] to stop the walk on the spot, which
//! is how first-match queries avoid touching the rest of the tree.

use std::ops::ControlFlow;

use crate::selector::Predicate;
use crate::tree::{Node, NodeId, Tree};

/// Traversal order of a query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    /// Root and its descendants, pre-order.
    #[default]
    Descendants,
    /// Strict ancestors, nearest first.
    Ancestors,
}

/// Walk the tree from `root` in `direction`, calling `visit` on every node.
///
/// Returns the number of nodes visited. A `None` root, or an id the tree does
/// not know, visits nothing.
pub fn walk<'t, F>(tree: &'t Tree, root: Option<NodeId>, direction: Direction, mut visit: F) -> usize
where
    F: FnMut(NodeId, &'t Node) -> ControlFlow<()>,
{
    let Some(root) = root else {
        return 0;
    };
    let mut visited = 0;

    match direction {
        Direction::Descendants => {
            // Explicit stack, children pushed in reverse so the first child pops first
            let mut stack = vec![root];
            while let Some(id) = stack.pop() {
                let Some(node) = tree.get(id) else {
                    continue;
                };
                visited += 1;
                if visit(id, node).is_break() {
                    break;
                }
                stack.extend(node.children().iter().rev().copied());
            }
        }
        Direction::Ancestors => {
            let mut current = tree.parent(root);
            while let Some(id) = current {
                let Some(node) = tree.get(id) else {
                    break;
                };
                visited += 1;
                if visit(id, node).is_break() {
                    break;
                }
                current = node.parent();
            }
        }
    }

    visited
}

/// First node in traversal order matching `predicate`.
///
/// Stops at the first match.
#[must_use]
pub fn find_first(
    tree: &Tree,
    root: Option<NodeId>,
    direction: Direction,
    predicate: &Predicate,
) -> Option<NodeId> {
    first_match(tree, root, direction, predicate).0
}

/// First match and the number of nodes visited to find it.
pub(crate) fn first_match(
    tree: &Tree,
    root: Option<NodeId>,
    direction: Direction,
    predicate: &Predicate,
) -> (Option<NodeId>, usize) {
    let mut found = None;
    let visited = walk(tree, root, direction, |id, node| {
        if predicate.test(node) {
            found = Some(id);
            ControlFlow::Break(())
        } else {
            ControlFlow::Continue(())
        }
    });
    tracing::trace!(?direction, visited, found = found.is_some(), "first-match search");
    (found, visited)
}

/// Every node matching `predicate`, in traversal order.
#[must_use]
pub fn find_all(
    tree: &Tree,
    root: Option<NodeId>,
    direction: Direction,
    predicate: &Predicate,
) -> Vec<NodeId> {
    let mut matches = Vec::new();
    let visited = walk(tree, root, direction, |id, node| {
        if predicate.test(node) {
            matches.push(id);
        }
        ControlFlow::Continue(())
    });
    tracing::trace!(?direction, visited, matched = matches.len(), "all-matches search");
    matches
}
