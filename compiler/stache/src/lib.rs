//! Mustache templates for Rust hosts.
//!
//! Templates compile once into an immutable [`Template`] and render any
//! number of times, from any number of threads, against host data the
//! engine never inspects directly. The host implements [`Resolver`] to
//! answer path lookups, write values, and expand lambdas.
//!
//! ```text
//! let engine = Engine::new(Config::new())?;
//! let template = engine.compile("Hello {{name}}!")?;
//! let text = engine.render_to_string(&template, &my_resolver)?;
//! ```
//!
//! Failures map onto a small stable taxonomy, see [`Error`] and
//! [`Status`].

mod config;
mod engine;
mod error;

use std::sync::Once;

pub use config::Config;
pub use engine::Engine;
pub use error::{Error, Status};

pub use stache_ir::{Path, PathRef, Resolution, ResolveError, ResolveResult, Template};
pub use stache_parse::{ParseError, ParseErrorKind};
pub use stache_render::{
    escape_html, Empty, Escape, Interpolation, LambdaContext, Lookup, NoPartials, Partials,
    RenderError, Resolver,
};

static TRACING_INIT: Once = Once::new();

/// Install a `tracing` subscriber driven by `RUST_LOG`.
///
/// Does nothing when `RUST_LOG` is unset or another global subscriber is
/// already installed. Safe to call more than once.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            let _ = tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .try_init();
        }
    });
}

/// Compile `source` with the default configuration.
pub fn compile(source: &str) -> Result<Template, Error> {
    Engine::default().compile(source)
}

/// Render with the default configuration and no partials.
pub fn render_to_string(template: &Template, root: &dyn Resolver) -> Result<String, Error> {
    Engine::default().render_to_string(template, root)
}
