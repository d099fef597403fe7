//! Engine configuration.

use stache_ir::Delimiters;
use stache_parse::ParseOptions;
use stache_render::{Escape, RenderOptions};

use crate::Error;

/// Settings shared by every compile and render of an [`Engine`](crate::Engine).
///
/// Built with chained setters and checked once by
/// [`validate`](Config::validate):
///
/// ```text
/// Config::new().delimiters("<%", "%>").max_depth(16)
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    open: String,
    close: String,
    escape: Escape,
    capacity_hints: bool,
    max_depth: usize,
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Delimiters in effect at the start of every template.
    #[must_use]
    pub fn delimiters(mut self, open: impl Into<String>, close: impl Into<String>) -> Self {
        self.open = open.into();
        self.close = close.into();
        self
    }

    #[must_use]
    pub fn escape(mut self, escape: Escape) -> Self {
        self.escape = escape;
        self
    }

    #[must_use]
    pub fn capacity_hints(mut self, enabled: bool) -> Self {
        self.capacity_hints = enabled;
        self
    }

    /// Limit on nested partials and lambda re-renders.
    #[must_use]
    pub fn max_depth(mut self, depth: usize) -> Self {
        self.max_depth = depth;
        self
    }

    pub fn validate(&self) -> Result<(), Error> {
        self.parse_options().map(|_| ())
    }

    pub(crate) fn parse_options(&self) -> Result<ParseOptions, Error> {
        if self.max_depth == 0 {
            return Err(Error::InvalidArgument("max_depth must be at least 1".to_owned()));
        }
        let delimiters = Delimiters::new(&self.open, &self.close)
            .map_err(|err| Error::InvalidArgument(format!("delimiters: {err}")))?;
        Ok(ParseOptions { delimiters })
    }

    pub(crate) fn render_options(&self) -> RenderOptions {
        RenderOptions {
            escape: self.escape,
            capacity_hints: self.capacity_hints,
            max_depth: self.max_depth,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            open: Delimiters::DEFAULT_OPEN.to_owned(),
            close: Delimiters::DEFAULT_CLOSE.to_owned(),
            escape: Escape::Html,
            capacity_hints: true,
            max_depth: RenderOptions::DEFAULT_MAX_DEPTH,
        }
    }
}
