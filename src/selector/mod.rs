//! Predicates and selector strings
//!
//! A [`Predicate`] is a pure test over one node. The three leaf kinds look at
//! the tag name, the `class` attribute or an arbitrary attribute; [`all`] and
//! [`any`] combine them. A single interpreter, [`Predicate::matches`],
//! evaluates the whole expression left to right with short-circuiting.
//!
//! Selector strings such as `a.active` or `ul#nav` are compiled into
//! predicates by [`compile`].

use crate::node::NodeView;
use crate::tree::Node;

pub mod compile;
pub mod utils;

pub use compile::{compile, tokenize, Fragment, FragmentKind};

/// A deterministic, side-effect free test over a node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Predicate {
    /// Element whose tag name equals the value exactly.
    Tag(String),
    /// Node whose trimmed `class` attribute equals the value exactly.
    Class(String),
    /// Node whose trimmed attribute `key` equals `value` exactly.
    Attribute {
        /// Attribute name.
        key: String,
        /// Expected value.
        value: String,
    },
    /// Every inner predicate holds. Empty is true.
    All(Vec<Predicate>),
    /// At least one inner predicate holds. Empty is false.
    Any(Vec<Predicate>),
}

/// Match elements by tag name. Case-sensitive.
#[must_use]
pub fn by_tag(name: &str) -> Predicate {
    Predicate::Tag(name.to_string())
}

/// Match nodes whose whole `class` value, trimmed, equals `name`.
///
/// This is not class-list membership: `class="one two"` matches
/// `by_class("one two")` but neither `by_class("one")` nor `by_class("two")`.
#[must_use]
pub fn by_class(name: &str) -> Predicate {
    Predicate::Class(name.to_string())
}

/// Match nodes whose attribute `key`, trimmed, equals `value`.
#[must_use]
pub fn by_attribute(key: &str, value: &str) -> Predicate {
    Predicate::Attribute {
        key: key.to_string(),
        value: value.to_string(),
    }
}

/// Conjunction of `predicates`.
#[must_use]
pub fn all(predicates: impl IntoIterator<Item = Predicate>) -> Predicate {
    Predicate::All(predicates.into_iter().collect())
}

/// Disjunction of `predicates`.
#[must_use]
pub fn any(predicates: impl IntoIterator<Item = Predicate>) -> Predicate {
    Predicate::Any(predicates.into_iter().collect())
}

impl Predicate {
    /// Evaluate against a node view.
    #[must_use]
    pub fn matches(&self, view: &NodeView<'_>) -> bool {
        view.node().is_some_and(|node| self.test(node))
    }

    pub(crate) fn test(&self, node: &Node) -> bool {
        match self {
            Self::Tag(name) => node.tag_name() == Some(name.as_str()),
            Self::Class(name) => utils::class(node).trim() == name,
            Self::Attribute { key, value } => utils::attr(node, key).trim() == value,
            Self::All(predicates) => predicates.iter().all(|p| p.test(node)),
            Self::Any(predicates) => predicates.iter().any(|p| p.test(node)),
        }
    }

    /// `self` and then `other`.
    #[must_use]
    pub fn and(self, other: Predicate) -> Predicate {
        Predicate::All(vec![self, other])
    }

    /// `self` or else `other`.
    #[must_use]
    pub fn or(self, other: Predicate) -> Predicate {
        Predicate::Any(vec![self, other])
    }
}
