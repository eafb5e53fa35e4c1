//! Route handlers.
//!
//! A handler wraps a caller-supplied async render function producing a single
//! view node. It is either invoked with the path alone or with the path plus
//! an ordered list of metadata values fixed at registration time.

use std::fmt;
use std::future::Future;
use std::sync::Arc;

use futures_util::future::BoxFuture;

/// Error type returned by render functions.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Result of a render function.
pub type RenderResult<N> = Result<N, BoxError>;

type SimpleRender<N> = Arc<dyn Fn(String) -> BoxFuture<'static, RenderResult<N>> + Send + Sync>;
type MetadataRender<N> =
    Arc<dyn Fn(String, Vec<String>) -> BoxFuture<'static, RenderResult<N>> + Send + Sync>;

/// A registered route handler.
pub enum Handler<N> {
    /// Invoked as `render(path)`.
    Simple(SimpleRender<N>),
    /// Invoked as `render(path, metadata)`.
    WithMetadata(MetadataRender<N>, Vec<String>),
}

impl<N: Send + 'static> Handler<N> {
    /// Wrap a render function taking only the path.
    pub fn simple<F, Fut>(render: F) -> Self
    where
        F: Fn(String) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = RenderResult<N>> + Send + 'static,
    {
        Handler::Simple(Arc::new(
            move |path: String| -> BoxFuture<'static, RenderResult<N>> { Box::pin(render(path)) },
        ))
    }

    /// Wrap a render function taking the path and a metadata list.
    pub fn with_metadata<F, Fut, I, S>(render: F, metadata: I) -> Self
    where
        F: Fn(String, Vec<String>) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = RenderResult<N>> + Send + 'static,
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Handler::WithMetadata(
            Arc::new(
                move |path: String, metadata: Vec<String>| -> BoxFuture<'static, RenderResult<N>> {
                    Box::pin(render(path, metadata))
                },
            ),
            metadata.into_iter().map(Into::into).collect(),
        )
    }

    /// Run the render function for `path`.
    pub async fn invoke(&self, path: &str) -> RenderResult<N> {
        match self {
            Handler::Simple(render) => render(path.to_string()).await,
            Handler::WithMetadata(render, metadata) => {
                render(path.to_string(), metadata.clone()).await
            }
        }
    }
}

impl<N> Handler<N> {
    /// Metadata attached at registration (empty for simple handlers).
    pub fn metadata(&self) -> &[String] {
        match self {
            Handler::Simple(_) => &[],
            Handler::WithMetadata(_, metadata) => metadata,
        }
    }

    /// Whether both handlers wrap the same render function and metadata.
    pub fn same_as(&self, other: &Handler<N>) -> bool {
        match (self, other) {
            (Handler::Simple(a), Handler::Simple(b)) => Arc::ptr_eq(a, b),
            (Handler::WithMetadata(a, ma), Handler::WithMetadata(b, mb)) => {
                Arc::ptr_eq(a, b) && ma == mb
            }
            _ => false,
        }
    }
}

// Manual impl: deriving would require `N: Clone`.
impl<N> Clone for Handler<N> {
    fn clone(&self) -> Self {
        match self {
            Handler::Simple(render) => Handler::Simple(render.clone()),
            Handler::WithMetadata(render, metadata) => {
                Handler::WithMetadata(render.clone(), metadata.clone())
            }
        }
    }
}

impl<N> fmt::Debug for Handler<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Handler::Simple(_) => f.write_str("Handler::Simple(..)"),
            Handler::WithMetadata(_, metadata) => f
                .debug_tuple("Handler::WithMetadata")
                .field(&"..")
                .field(metadata)
                .finish(),
        }
    }
}
