//! Render errors.

use std::io;

use stache_ir::ResolveError;
use stache_parse::ParseError;
use thiserror::Error;

/// Why a render stopped.
///
/// Every variant is fatal: output already written to the sink stays
/// there, but nothing further is written.
#[derive(Debug, Error)]
pub enum RenderError {
    /// A resolver callback failed.
    #[error("resolving `{path}` failed: {source}")]
    Interpolation { path: String, source: ResolveError },

    /// The sink rejected a write.
    #[error("writing output failed: {0}")]
    Write(#[from] io::Error),

    /// A lambda produced text that does not compile.
    #[error("lambda output is not a valid template: {0}")]
    Lambda(#[from] ParseError),

    /// Partials or lambdas nested deeper than the configured limit.
    #[error("nesting depth limit {limit} exceeded at `{name}`")]
    RecursionLimit { limit: usize, name: String },

    /// The output buffer could not be reserved.
    #[error("out of memory reserving {requested} bytes of output")]
    OutOfMemory { requested: usize },
}

impl RenderError {
    pub(crate) fn interpolation(path: impl ToString, source: ResolveError) -> Self {
        RenderError::Interpolation {
            path: path.to_string(),
            source,
        }
    }

    /// The resolver code carried by [`RenderError::Interpolation`].
    pub fn resolver_code(&self) -> Option<u32> {
        match self {
            RenderError::Interpolation { source, .. } => Some(source.code()),
            _ => None,
        }
    }
}
