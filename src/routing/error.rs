//! Routing error types.

use thiserror::Error;

use crate::routing::handler::BoxError;

/// Errors raised while registering routes or routing to a path.
///
/// An unmatched path is not an error: it resolves to nothing and the
/// container is left as it was.
#[derive(Debug, Error)]
pub enum RouteError {
    /// The path is empty or has an empty segment in the middle.
    #[error("invalid route path {0:?}")]
    InvalidPath(String),

    /// A reserved slot marker was used where a subtree name is expected.
    #[error("route conflict in {path:?}: segment {segment:?} names a reserved slot")]
    RouteConflict { path: String, segment: String },

    /// The handler failed. Propagated as-is; nothing is rendered.
    #[error("render failed for {path:?}: {source}")]
    Render {
        path: String,
        #[source]
        source: BoxError,
    },
}
