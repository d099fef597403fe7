//! Partial template lookup.

use std::collections::HashMap;
use std::hash::BuildHasher;
use std::sync::Arc;

use stache_ir::Template;

/// Source of templates for `{{> name}}` tags.
///
/// A name with no template renders nothing.
pub trait Partials {
    fn get_partial(&self, name: &str) -> Option<&Template>;
}

impl<S: BuildHasher> Partials for HashMap<String, Template, S> {
    fn get_partial(&self, name: &str) -> Option<&Template> {
        self.get(name)
    }
}

impl<S: BuildHasher> Partials for HashMap<String, Arc<Template>, S> {
    fn get_partial(&self, name: &str) -> Option<&Template> {
        self.get(name).map(|template| &**template)
    }
}

impl<P: Partials + ?Sized> Partials for &P {
    fn get_partial(&self, name: &str) -> Option<&Template> {
        (**self).get_partial(name)
    }
}

/// No partials at all.
#[derive(Copy, Clone, Debug, Default)]
pub struct NoPartials;

impl Partials for NoPartials {
    fn get_partial(&self, _: &str) -> Option<&Template> {
        None
    }
}
