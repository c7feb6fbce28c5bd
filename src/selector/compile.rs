//! Selector string compiler
//!
//! Grammar, scanned one character at a time:
//!
//! ```text
//! selector := tag? ( '.' class | '#' id )*
//! ```
//!
//! The text before the first `.` or `#` is the tag. Each `.` starts a class
//! fragment and each `#` an id fragment; an empty fragment is dropped. Class
//! fragments compile to whole-value class equality, so a selector naming two
//! classes (`a.one.two`) compiles but can never match.

use super::Predicate;

/// Kind of one selector fragment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FragmentKind {
    /// Leading bare name.
    Tag,
    /// `.name`
    Class,
    /// `#name`
    Id,
}

/// One parsed piece of a selector string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment {
    pub kind: FragmentKind,
    pub value: String,
}

impl Fragment {
    /// Predicate this fragment stands for. Ids become `Attribute("id", ..)`.
    #[must_use]
    pub fn into_predicate(self) -> Predicate {
        match self.kind {
            FragmentKind::Tag => Predicate::Tag(self.value),
            FragmentKind::Class => Predicate::Class(self.value),
            FragmentKind::Id => Predicate::Attribute {
                key: "id".to_string(),
                value: self.value,
            },
        }
    }
}

/// Split a selector string into fragments.
///
/// ```rust
/// use rs_htmldoc::selector::{tokenize, Fragment, FragmentKind};
///
/// assert_eq!(
///     tokenize("ul#nav"),
///     vec![
///         Fragment { kind: FragmentKind::Tag, value: "ul".into() },
///         Fragment { kind: FragmentKind::Id, value: "nav".into() },
///     ]
/// );
/// ```
#[must_use]
pub fn tokenize(selector: &str) -> Vec<Fragment> {
    let mut fragments = Vec::new();
    let mut buf = String::new();
    // None while still in the tag position
    let mut accumulating: Option<FragmentKind> = None;

    for ch in selector.chars() {
        let next = match ch {
            '.' => FragmentKind::Class,
            '#' => FragmentKind::Id,
            _ => {
                buf.push(ch);
                continue;
            }
        };
        flush(&mut fragments, &mut buf, accumulating.unwrap_or(FragmentKind::Tag));
        accumulating = Some(next);
    }
    flush(&mut fragments, &mut buf, accumulating.unwrap_or(FragmentKind::Tag));

    fragments
}

fn flush(fragments: &mut Vec<Fragment>, buf: &mut String, kind: FragmentKind) {
    if !buf.is_empty() {
        fragments.push(Fragment {
            kind,
            value: std::mem::take(buf),
        });
    }
}

/// Compile a selector string into predicates, in fragment order.
///
/// ```rust
/// use rs_htmldoc::selector::{by_class, by_tag, compile};
///
/// assert_eq!(compile("a.active"), vec![by_tag("a"), by_class("active")]);
/// assert_eq!(compile(".active"), vec![by_class("active")]);
/// ```
#[must_use]
pub fn compile(selector: &str) -> Vec<Predicate> {
    tokenize(selector)
        .into_iter()
        .map(Fragment::into_predicate)
        .collect()
}
