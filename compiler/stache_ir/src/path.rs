//! Dotted name paths.
//!
//! A [`Path`] is the compiled form of a tag name such as `user.name`; it is
//! owned by the template. Resolvers never see a `Path` directly: the
//! renderer hands them a borrowed [`PathRef`], which adds the iteration
//! index used while walking a section's elements.

use std::fmt;

/// Compiled dotted name, e.g. `a.b.c` is `["a", "b", "c"]`.
///
/// The implicit iterator `.` is the path with zero segments.
#[derive(Clone, PartialEq, Eq, Hash, Default)]
pub struct Path {
    segments: Box<[Box<str>]>,
}

impl Path {
    /// The implicit iterator `.`, referring to the current context.
    pub fn implicit() -> Self {
        Path::default()
    }

    /// Build a path from already-split segments.
    ///
    /// Segments must be non-empty; the parser guarantees this for every
    /// path it compiles.
    pub fn from_segments<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Box<str>>,
    {
        let segments: Box<[Box<str>]> = segments.into_iter().map(Into::into).collect();
        debug_assert!(
            segments.iter().all(|s| !s.is_empty()),
            "path segments must be non-empty"
        );
        Path { segments }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// `true` for the implicit iterator `.`.
    #[inline]
    pub fn is_implicit(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn segments(&self) -> impl Iterator<Item = &str> + '_ {
        self.segments.iter().map(|s| &**s)
    }

    /// Borrow this path for a lookup without an iteration index.
    #[inline]
    pub fn to_ref(&self) -> PathRef<'_> {
        PathRef {
            segments: &self.segments,
            index: None,
        }
    }

    /// Borrow this path for the `index`-th element of an iteration.
    #[inline]
    pub fn at(&self, index: usize) -> PathRef<'_> {
        PathRef {
            segments: &self.segments,
            index: Some(index),
        }
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.to_ref(), f)
    }
}

impl fmt::Debug for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Path({self})")
    }
}

/// A path as seen by a resolver: borrowed segments plus an optional index.
///
/// The index is set only while a section iterates; it selects which
/// element of the value named by the *full* path is wanted. Splitting off
/// leading segments with [`split_first`](Self::split_first) keeps the index
/// on the remainder, so a resolver can walk nested data segment by segment
/// and apply the index once it reaches the final value.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct PathRef<'a> {
    segments: &'a [Box<str>],
    index: Option<usize>,
}

impl<'a> PathRef<'a> {
    /// Number of name segments (zero for the implicit iterator).
    #[inline]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// `true` when no segments remain, i.e. the lookup targets the current
    /// context itself.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Split into the first segment and the rest of the path.
    pub fn split_first(&self) -> Option<(&'a str, PathRef<'a>)> {
        let (head, tail) = self.segments.split_first()?;
        Some((
            &**head,
            PathRef {
                segments: tail,
                index: self.index,
            },
        ))
    }

    pub fn segments(&self) -> impl Iterator<Item = &'a str> + 'a {
        self.segments.iter().map(|s| &**s)
    }

    /// Iteration index, when the renderer is walking a section's elements.
    #[inline]
    pub fn index(&self) -> Option<usize> {
        self.index
    }
}

impl fmt::Display for PathRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.segments.is_empty() {
            f.write_str(".")?;
        } else {
            for (i, segment) in self.segments.iter().enumerate() {
                if i > 0 {
                    f.write_str(".")?;
                }
                f.write_str(segment)?;
            }
        }
        if let Some(index) = self.index {
            write!(f, "[{index}]")?;
        }
        Ok(())
    }
}

impl fmt::Debug for PathRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PathRef({self})")
    }
}

#[cfg(test)]
mod tests;
