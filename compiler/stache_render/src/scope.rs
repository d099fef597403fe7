//! The context stack.
//!
//! Scopes live on the native call stack: entering a section creates a
//! child that borrows its parent, and leaving the section drops it. The
//! stack therefore always pops exactly what it pushed, including on
//! early returns.

use crate::resolver::Resolver;

pub(crate) struct Scope<'s> {
    frame: &'s dyn Resolver,
    parent: Option<&'s Scope<'s>>,
}

impl<'s> Scope<'s> {
    pub(crate) fn root(frame: &'s dyn Resolver) -> Self {
        Scope {
            frame,
            parent: None,
        }
    }

    /// New innermost scope on top of `self`.
    pub(crate) fn push(&'s self, frame: &'s dyn Resolver) -> Scope<'s> {
        Scope {
            frame,
            parent: Some(self),
        }
    }

    /// Frames from innermost to outermost.
    pub(crate) fn frames<'a>(&'a self) -> impl Iterator<Item = &'a dyn Resolver> + 'a {
        let top: &'a Scope<'a> = self;
        std::iter::successors(Some(top), |scope| scope.parent).map(|scope| scope.frame)
    }
}
