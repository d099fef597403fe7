//! Compile and render with one configuration and a partial registry.

use std::io;

use rustc_hash::FxHashMap;
use stache_ir::Template;
use stache_parse::{parse_with, ParseOptions};
use stache_render::{RenderOptions, Renderer, Resolver};
use tracing::debug;

use crate::{Config, Error};

/// A configured template engine.
///
/// An `Engine` is `Send + Sync`: register partials up front, then share
/// it (by reference or `Arc`) between threads rendering concurrently.
#[derive(Clone, Debug)]
pub struct Engine {
    config: Config,
    parse_options: ParseOptions,
    render_options: RenderOptions,
    partials: FxHashMap<String, Template>,
}

impl Engine {
    pub fn new(config: Config) -> Result<Self, Error> {
        let parse_options = config.parse_options()?;
        let render_options = config.render_options();
        Ok(Engine {
            config,
            parse_options,
            render_options,
            partials: FxHashMap::default(),
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Compile `source` with the configured delimiters.
    pub fn compile(&self, source: &str) -> Result<Template, Error> {
        Ok(parse_with(source, &self.parse_options)?)
    }

    /// Compile `source` and make it available to `{{> name}}` tags.
    ///
    /// Replaces any partial already registered under `name`.
    pub fn register_partial(&mut self, name: &str, source: &str) -> Result<(), Error> {
        let template = self.compile(source)?;
        self.insert_partial(name, template)
    }

    /// Register an already compiled partial.
    pub fn insert_partial(&mut self, name: &str, template: Template) -> Result<(), Error> {
        if name.trim().is_empty() {
            return Err(Error::InvalidArgument("partial name is empty".to_owned()));
        }
        debug!(name, nodes = template.node_count(), "registered partial");
        self.partials.insert(name.to_owned(), template);
        Ok(())
    }

    pub fn partial(&self, name: &str) -> Option<&Template> {
        self.partials.get(name)
    }

    /// Partial names `template` references that are not registered.
    pub fn missing_partials<'t>(&self, template: &'t Template) -> Vec<&'t str> {
        template
            .partial_names()
            .filter(|name| !self.partials.contains_key(*name))
            .collect()
    }

    /// Render `template` against `root`, streaming into `sink`.
    pub fn render(
        &self,
        template: &Template,
        root: &dyn Resolver,
        sink: &mut dyn io::Write,
    ) -> Result<(), Error> {
        Ok(self.renderer().render(template, root, sink)?)
    }

    pub fn render_to_string(&self, template: &Template, root: &dyn Resolver) -> Result<String, Error> {
        Ok(self.renderer().render_to_string(template, root)?)
    }

    /// Compile and render in one step.
    pub fn render_source(&self, source: &str, root: &dyn Resolver) -> Result<String, Error> {
        let template = self.compile(source)?;
        self.render_to_string(&template, root)
    }

    fn renderer(&self) -> Renderer<'_> {
        Renderer::new(self.render_options).with_partials(&self.partials)
    }
}

impl Default for Engine {
    fn default() -> Self {
        let config = Config::default();
        Engine {
            parse_options: ParseOptions::default(),
            render_options: config.render_options(),
            config,
            partials: FxHashMap::default(),
        }
    }
}
