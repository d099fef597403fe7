//! Template nodes and the flat arena that stores them.
//!
//! Section bodies are not boxed child vectors: every node lives in one
//! [`NodeArena`], and a section refers to its body by a contiguous
//! [`NodeRange`]. The tree builder allocates a body only once the matching
//! close tag is seen, so sibling nodes are always adjacent.

use std::fmt;

use crate::{Delimiters, Path, Span};

/// A compiled template node.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Node {
    /// Literal text emitted verbatim, stored as a span into the source.
    Text(Span),
    /// `{{name}}`, `{{{name}}}` or `{{&name}}`.
    Variable(Variable),
    /// `{{#name}}...{{/name}}` or `{{^name}}...{{/name}}`.
    Section(Section),
    /// `{{>name}}`.
    Partial(Partial),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Variable {
    pub path: Path,
    /// `false` for triple-mustache and `&` tags.
    pub escape: bool,
    pub span: Span,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Section {
    pub path: Path,
    pub inverted: bool,
    pub body: NodeRange,
    /// Raw source text between the open and close tags, handed to lambdas.
    pub inner: Span,
    /// Delimiters in effect at the open tag; lambdas re-render with these.
    pub delimiters: Delimiters,
    /// Span of the open tag.
    pub span: Span,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Partial {
    pub name: Box<str>,
    /// Leading whitespace of a standalone partial tag, prefixed to every
    /// line the partial renders.
    pub indent: Box<str>,
    pub span: Span,
}

/// Contiguous run of nodes in a [`NodeArena`].
#[derive(Copy, Clone, Eq, PartialEq, Hash, Default)]
pub struct NodeRange {
    pub start: u32,
    pub len: u32,
}

impl NodeRange {
    pub const EMPTY: NodeRange = NodeRange { start: 0, len: 0 };

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub const fn len(&self) -> usize {
        self.len as usize
    }

    #[inline]
    const fn range(&self) -> std::ops::Range<usize> {
        self.start as usize..(self.start as usize + self.len as usize)
    }
}

impl fmt::Debug for NodeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeRange({}..{})", self.start, self.start + self.len)
    }
}

/// Flat storage for every node of one template.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NodeArena {
    nodes: Vec<Node>,
}

impl NodeArena {
    pub fn new() -> Self {
        NodeArena::default()
    }

    /// Append `nodes` contiguously and return their range.
    ///
    /// # Panics
    /// Panics if the arena grows beyond `u32::MAX` nodes; a template that
    /// large cannot be addressed by its own `u32` spans either.
    pub fn alloc_range(&mut self, nodes: Vec<Node>) -> NodeRange {
        if nodes.is_empty() {
            return NodeRange::EMPTY;
        }
        let start = to_u32(self.nodes.len());
        let len = to_u32(nodes.len());
        self.nodes.extend(nodes);
        NodeRange { start, len }
    }

    /// Nodes in `range`.
    ///
    /// Ranges come from this arena's own `alloc_range`; a foreign range
    /// yields an empty slice rather than panicking.
    #[inline]
    pub fn get(&self, range: NodeRange) -> &[Node] {
        self.nodes.get(range.range()).unwrap_or_default()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Every node in allocation order, regardless of nesting.
    pub fn iter(&self) -> std::slice::Iter<'_, Node> {
        self.nodes.iter()
    }
}

fn to_u32(n: usize) -> u32 {
    u32::try_from(n).unwrap_or_else(|_| panic!("node arena exceeds u32::MAX entries ({n})"))
}
