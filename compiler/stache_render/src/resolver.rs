//! The host resolver protocol.
//!
//! The engine never sees host data. Every name a template mentions is
//! handed to a [`Resolver`] as a [`PathRef`], and the resolver answers
//! with one of the five [`Resolution`] outcomes.
//!
//! # Iteration
//!
//! Sections iterate by index. The renderer asks `get(path.at(0))`,
//! `get(path.at(1))`, ... on the resolver that owns the name, rendering
//! the body once per [`Lookup::Field`] until the resolver answers
//! [`Lookup::IteratorConsumed`]. A truthy non-collection answers `Field`
//! at index 0 and `IteratorConsumed` at index 1; a falsy value or empty
//! collection answers `IteratorConsumed` at index 0.

use std::fmt;

use stache_ir::{PathRef, Resolution, ResolveError, ResolveResult};

use crate::lambda::LambdaContext;
use crate::output::Interpolation;

/// Answer to [`Resolver::get`].
pub enum Lookup<'a> {
    NotFoundInContext,
    ChainBroken,
    IteratorConsumed,
    Lambda,
    /// The value exists; the boxed resolver becomes the new top of the
    /// context stack while a section body renders.
    Field(Box<dyn Resolver + 'a>),
}

impl<'a> Lookup<'a> {
    /// Wrap a child context.
    pub fn field(context: impl Resolver + 'a) -> Self {
        Lookup::Field(Box::new(context))
    }

    pub fn resolution(&self) -> Resolution {
        match self {
            Lookup::NotFoundInContext => Resolution::NotFoundInContext,
            Lookup::ChainBroken => Resolution::ChainBroken,
            Lookup::IteratorConsumed => Resolution::IteratorConsumed,
            Lookup::Lambda => Resolution::Lambda,
            Lookup::Field(_) => Resolution::Field,
        }
    }
}

impl From<Resolution> for Lookup<'_> {
    /// Non-field outcomes. [`Resolution::Field`] has no context to carry
    /// and maps to [`Lookup::IteratorConsumed`].
    fn from(resolution: Resolution) -> Self {
        match resolution {
            Resolution::NotFoundInContext => Lookup::NotFoundInContext,
            Resolution::ChainBroken => Lookup::ChainBroken,
            Resolution::Lambda => Lookup::Lambda,
            Resolution::IteratorConsumed | Resolution::Field => Lookup::IteratorConsumed,
        }
    }
}

impl fmt::Debug for Lookup<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Lookup::{:?}", self.resolution())
    }
}

/// Host-side data access.
///
/// One resolver stands for one context on the stack: the root data, or a
/// child returned from [`get`](Resolver::get). Only [`get`](Resolver::get)
/// and [`interpolate`](Resolver::interpolate) are required.
///
/// Returning `Err` aborts the render; the code is reported to the caller.
pub trait Resolver {
    /// Look up `path`, optionally at an iteration index.
    ///
    /// # Contract
    ///
    /// A section renders its body for every index that answers
    /// [`Lookup::Field`] and stops at the first index that does not. A
    /// resolver that ignores `path.index()` and answers `Field` for every
    /// index never ends the section; the render does not terminate.
    fn get(&self, path: PathRef<'_>) -> Result<Lookup<'_>, ResolveError>;

    /// Expected output size of interpolating `path`, used to pre-size
    /// string buffers. Purely advisory.
    fn capacity_hint(&self, path: PathRef<'_>) -> (Resolution, usize) {
        let _ = path;
        (Resolution::NotFoundInContext, 0)
    }

    /// Write the value at `path` into `out`.
    ///
    /// Answer [`Resolution::Lambda`] without writing to have the renderer
    /// call [`expand_lambda`](Resolver::expand_lambda) instead.
    fn interpolate(&self, path: PathRef<'_>, out: &mut Interpolation<'_, '_>) -> ResolveResult;

    /// Run the lambda at `path`.
    fn expand_lambda(
        &self,
        path: PathRef<'_>,
        lambda: &mut LambdaContext<'_, '_>,
    ) -> ResolveResult {
        let _ = (path, lambda);
        Ok(Resolution::NotFoundInContext)
    }
}

impl<R: Resolver + ?Sized> Resolver for &R {
    fn get(&self, path: PathRef<'_>) -> Result<Lookup<'_>, ResolveError> {
        (**self).get(path)
    }

    fn capacity_hint(&self, path: PathRef<'_>) -> (Resolution, usize) {
        (**self).capacity_hint(path)
    }

    fn interpolate(&self, path: PathRef<'_>, out: &mut Interpolation<'_, '_>) -> ResolveResult {
        (**self).interpolate(path, out)
    }

    fn expand_lambda(
        &self,
        path: PathRef<'_>,
        lambda: &mut LambdaContext<'_, '_>,
    ) -> ResolveResult {
        (**self).expand_lambda(path, lambda)
    }
}

/// A context that knows nothing. Useful as the root for data-free
/// templates.
#[derive(Copy, Clone, Debug, Default)]
pub struct Empty;

impl Resolver for Empty {
    fn get(&self, _: PathRef<'_>) -> Result<Lookup<'_>, ResolveError> {
        Ok(Lookup::NotFoundInContext)
    }

    fn interpolate(&self, _: PathRef<'_>, _: &mut Interpolation<'_, '_>) -> ResolveResult {
        Ok(Resolution::NotFoundInContext)
    }
}
