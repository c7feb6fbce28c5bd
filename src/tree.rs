//! Document Tree
//!
//! An immutable arena of nodes addressed by [`NodeId`]. Children are stored as
//! ordered index lists and each node records its parent as an optional index,
//! so there are no owning pointers in either direction.
//!
//! Trees are normally produced by [`Document::new`](crate::Document::new);
//! [`TreeBuilder`] lets any other parser feed the query engine.

/// Handle to a node inside one [`Tree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    /// Position of the node in the arena.
    #[inline]
    #[must_use]
    pub fn index(self) -> usize {
        self.0
    }
}

/// What a node is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    /// An element with its tag name and attributes in source order.
    ///
    /// Attribute keys are not guaranteed unique; lookups return the first.
    Element {
        /// Tag name as produced by the parser.
        tag: String,
        /// `(key, value)` pairs.
        attrs: Vec<(String, String)>,
    },
    /// Literal text content.
    Text(String),
    /// Document, doctype, comment and anything else that is neither.
    Other,
}

impl NodeKind {
    /// Build an element kind from borrowed parts.
    ///
    /// ```rust
    /// use rs_htmldoc::tree::NodeKind;
    ///
    /// let kind = NodeKind::element("a", &[("href", "/about")]);
    /// assert!(matches!(kind, NodeKind::Element { .. }));
    /// ```
    #[must_use]
    pub fn element(tag: &str, attrs: &[(&str, &str)]) -> Self {
        Self::Element {
            tag: tag.to_string(),
            attrs: attrs
                .iter()
                .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
                .collect(),
        }
    }

    /// Build a text kind.
    #[must_use]
    pub fn text(content: &str) -> Self {
        Self::Text(content.to_string())
    }
}

/// One node of the tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    kind: NodeKind,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

impl Node {
    /// The node's kind.
    #[inline]
    #[must_use]
    pub fn kind(&self) -> &NodeKind {
        &self.kind
    }

    /// Parent node, `None` for the root.
    #[inline]
    #[must_use]
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Children in document order.
    #[inline]
    #[must_use]
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    /// Tag name for elements, `None` otherwise.
    #[must_use]
    pub fn tag_name(&self) -> Option<&str> {
        match &self.kind {
            NodeKind::Element { tag, .. } => Some(tag.as_str()),
            _ => None,
        }
    }

    /// Value of the first attribute whose key equals `key`.
    #[must_use]
    pub fn attribute(&self, key: &str) -> Option<&str> {
        match &self.kind {
            NodeKind::Element { attrs, .. } => attrs
                .iter()
                .find(|(k, _)| k == key)
                .map(|(_, v)| v.as_str()),
            _ => None,
        }
    }

    /// Content of a text node, `None` for other kinds.
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        match &self.kind {
            NodeKind::Text(content) => Some(content.as_str()),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn is_element(&self) -> bool {
        matches!(self.kind, NodeKind::Element { .. })
    }
}

/// Immutable arena holding every node of one document.
///
/// The first node is the root. An empty tree has no root, and every query
/// against it yields nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tree {
    nodes: Vec<Node>,
}

impl Tree {
    /// Root node, `None` for an empty tree.
    #[must_use]
    pub fn root(&self) -> Option<NodeId> {
        (!self.nodes.is_empty()).then_some(NodeId(0))
    }

    /// Look up a node. Ids from another tree may resolve to `None`.
    #[inline]
    #[must_use]
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0)
    }

    /// Parent of `id`, `None` at the root or for unknown ids.
    #[must_use]
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).and_then(Node::parent)
    }

    /// Children of `id`, empty for unknown ids.
    #[must_use]
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.get(id).map(Node::children).unwrap_or_default()
    }

    /// Number of nodes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

/// Incremental constructor for a [`Tree`].
///
/// A node can only be appended under a node that already exists, so the
/// result is acyclic by construction.
///
/// # Example
///
/// ```rust
/// use rs_htmldoc::tree::{NodeKind, TreeBuilder};
///
/// let mut builder = TreeBuilder::new(NodeKind::Other);
/// let root = builder.root();
/// let ul = builder.append(root, NodeKind::element("ul", &[("id", "nav")])).unwrap();
/// let li = builder.append(ul, NodeKind::element("li", &[])).unwrap();
/// builder.append(li, NodeKind::text("Home"));
///
/// let tree = builder.build();
/// assert_eq!(tree.len(), 4);
/// assert_eq!(tree.parent(li), Some(ul));
/// ```
#[derive(Debug, Clone)]
pub struct TreeBuilder {
    nodes: Vec<Node>,
    depths: Vec<usize>,
}

impl TreeBuilder {
    /// Start a tree whose root has the given kind.
    #[must_use]
    pub fn new(root: NodeKind) -> Self {
        Self {
            nodes: vec![Node {
                kind: root,
                parent: None,
                children: Vec::new(),
            }],
            depths: vec![0],
        }
    }

    /// The root created by [`TreeBuilder::new`].
    #[must_use]
    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    /// Append a node as the last child of `parent`.
    ///
    /// Returns `None`, leaving the builder untouched, if `parent` is not a
    /// node of this builder.
    pub fn append(&mut self, parent: NodeId, kind: NodeKind) -> Option<NodeId> {
        let id = NodeId(self.nodes.len());
        let depth = self.depths.get(parent.0)? + 1;
        self.nodes.get_mut(parent.0)?.children.push(id);
        self.nodes.push(Node {
            kind,
            parent: Some(parent),
            children: Vec::new(),
        });
        self.depths.push(depth);
        Some(id)
    }

    /// Distance from the root; the root is at depth 0.
    #[must_use]
    pub fn depth(&self, id: NodeId) -> usize {
        self.depths.get(id.0).copied().unwrap_or_default()
    }

    #[must_use]
    pub fn build(self) -> Tree {
        Tree { nodes: self.nodes }
    }
}
