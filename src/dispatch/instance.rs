//! Router instance: one trie bound to one container.
//!
//! # States
//! - Idle: no route_to in flight
//! - Routing: a handler is being awaited
//!
//! # Overlapping Navigation
//! ```text
//! route_to("/a")  token 1 ── render a ───────────────┐ (stale, dropped)
//! route_to("/b")  token 2 ── render b ──┐            │
//!                                       swap b       ✗
//! ```
//! Every call takes a monotonically increasing token. A rendered node is only
//! swapped in if no newer call started in the meantime. In-flight handlers
//! are not aborted.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError, RwLock};
use std::time::Instant;

use futures_util::future::BoxFuture;

use crate::dispatch::container::Container;
use crate::observability::metrics;
use crate::routing::{Handler, RouteError, RouteTrie};

/// Result of a completed `route_to`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteOutcome {
    /// A node was produced and swapped into the container.
    Rendered,
    /// No handler and no not-found slot applied; container untouched.
    Unrouted,
    /// A newer route_to started while rendering; the node was dropped.
    Superseded,
}

impl RouteOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            RouteOutcome::Rendered => "rendered",
            RouteOutcome::Unrouted => "unrouted",
            RouteOutcome::Superseded => "superseded",
        }
    }
}

/// Anything the registry can route. Lets instances with different container
/// types share one registry.
pub trait Routable: Send + Sync {
    /// Name used in logs and metrics.
    fn name(&self) -> &str;

    /// Resolve `path`, render and swap.
    fn route_to<'a>(&'a self, path: &'a str) -> BoxFuture<'a, Result<RouteOutcome, RouteError>>;
}

/// Owns a route trie and drives the resolve → render → swap cycle for one
/// container.
pub struct RouterInstance<C: Container> {
    name: String,
    container: Mutex<C>,
    trie: RwLock<RouteTrie<C::Node>>,
    generation: AtomicU64,
}

impl<C: Container> RouterInstance<C> {
    /// Bind a new instance to `container`.
    pub fn new(name: impl Into<String>, container: C) -> Self {
        Self {
            name: name.into(),
            container: Mutex::new(container),
            trie: RwLock::new(RouteTrie::new()),
            generation: AtomicU64::new(0),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Register routes in iteration order.
    pub fn register_path<I, P>(&self, routes: I) -> Result<(), RouteError>
    where
        I: IntoIterator<Item = (P, Handler<C::Node>)>,
        P: AsRef<str>,
    {
        let mut trie = self.trie.write().unwrap_or_else(PoisonError::into_inner);
        trie.register(routes)?;
        tracing::debug!(router = %self.name, handlers = trie.len(), "Routes registered");
        Ok(())
    }

    /// Handler that `path` currently resolves to.
    pub fn resolve(&self, path: &str) -> Option<Handler<C::Node>> {
        self.trie
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .resolve(path)
            .cloned()
    }

    /// Number of route_to calls started so far.
    pub fn generation(&self) -> u64 {
        self.generation.load(Ordering::SeqCst)
    }

    /// Read access to the container.
    pub fn with_container<R>(&self, f: impl FnOnce(&C) -> R) -> R {
        f(&self.lock_container())
    }

    /// Resolve `path`, invoke its handler and swap the result into the
    /// container.
    pub async fn route_to(&self, path: &str) -> Result<RouteOutcome, RouteError> {
        let token = self.generation.fetch_add(1, Ordering::SeqCst) + 1;

        let (handler, kind) = {
            let trie = self.trie.read().unwrap_or_else(PoisonError::into_inner);
            let resolution = trie.resolve_traced(path);
            (resolution.handler.cloned(), resolution.kind)
        };
        metrics::record_resolution(&self.name, kind);

        let Some(handler) = handler else {
            tracing::debug!(router = %self.name, path, "No route and no not-found handler, leaving view unchanged");
            metrics::record_outcome(&self.name, RouteOutcome::Unrouted);
            return Ok(RouteOutcome::Unrouted);
        };

        tracing::debug!(router = %self.name, path, kind = kind.as_str(), "Rendering route");
        let start_time = Instant::now();
        let node = handler.invoke(path).await.map_err(|source| {
            tracing::warn!(router = %self.name, path, error = %source, "Render failed");
            metrics::record_render_failure(&self.name);
            RouteError::Render {
                path: path.to_string(),
                source,
            }
        })?;

        let outcome = {
            let mut container = self.lock_container();
            if self.generation.load(Ordering::SeqCst) == token {
                container.replace_children(node);
                RouteOutcome::Rendered
            } else {
                tracing::debug!(router = %self.name, path, token, "Render superseded by newer navigation, dropping");
                RouteOutcome::Superseded
            }
        };
        metrics::record_outcome(&self.name, outcome);
        metrics::record_render_duration(&self.name, start_time);
        Ok(outcome)
    }

    fn lock_container(&self) -> MutexGuard<'_, C> {
        self.container.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<C: Container> Routable for RouterInstance<C> {
    fn name(&self) -> &str {
        &self.name
    }

    fn route_to<'a>(&'a self, path: &'a str) -> BoxFuture<'a, Result<RouteOutcome, RouteError>> {
        Box::pin(RouterInstance::route_to(self, path))
    }
}

impl<C: Container> std::fmt::Debug for RouterInstance<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RouterInstance")
            .field("name", &self.name)
            .field("generation", &self.generation())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::time::Duration;
    use crate::dispatch::container::MemoryContainer;
    use crate::routing::BoxError;

    fn text(label: &'static str) -> Handler<String> {
        Handler::simple(move |path: String| async move {
            Ok::<_, BoxError>(format!("{}:{}", label, path))
        })
    }

    fn instance() -> RouterInstance<MemoryContainer<String>> {
        RouterInstance::new("main", MemoryContainer::new())
    }

    fn children(router: &RouterInstance<MemoryContainer<String>>) -> Vec<String> {
        router.with_container(|c| c.children().to_vec())
    }

    #[tokio::test]
    async fn test_route_to_renders_into_container() {
        let router = instance();
        router.register_path([("/hello", text("hello"))]).unwrap();

        let outcome = router.route_to("/hello").await.unwrap();

        assert_eq!(outcome, RouteOutcome::Rendered);
        assert_eq!(children(&router), vec!["hello:/hello"]);
    }

    #[tokio::test]
    async fn test_repeated_route_to_keeps_one_child() {
        let router = RouterInstance::new(
            "main",
            MemoryContainer::with_children(["server-rendered".to_string(), "extra".to_string()]),
        );
        router.register_path([("/", text("home"))]).unwrap();

        router.route_to("/").await.unwrap();
        router.route_to("/").await.unwrap();

        assert_eq!(children(&router), vec!["home:/"]);
    }

    #[tokio::test]
    async fn test_unrouted_leaves_container_unchanged() {
        let router = RouterInstance::new(
            "main",
            MemoryContainer::with_children(["before".to_string()]),
        );
        router.register_path([("/known", text("known"))]).unwrap();

        let outcome = router.route_to("/unknown").await.unwrap();

        assert_eq!(outcome, RouteOutcome::Unrouted);
        assert_eq!(children(&router), vec!["before"]);
    }

    #[tokio::test]
    async fn test_metadata_passed_to_handler() {
        let router = instance();
        let home = Handler::with_metadata(
            |path: String, metadata: Vec<String>| async move {
                Ok::<_, BoxError>(format!("{} [{}]", path, metadata.join(",")))
            },
            ["Home"],
        );
        router.register_path([("/", home)]).unwrap();

        router.route_to("/").await.unwrap();

        assert_eq!(children(&router), vec!["/ [Home]"]);
    }

    #[tokio::test]
    async fn test_render_error_propagates_and_keeps_view() {
        let router = RouterInstance::new(
            "main",
            MemoryContainer::with_children(["before".to_string()]),
        );
        let failing: Handler<String> = Handler::simple(|_path: String| async move {
            Err::<String, BoxError>("backend down".into())
        });
        router.register_path([("/broken", failing)]).unwrap();

        let err = router.route_to("/broken").await.unwrap_err();

        assert!(matches!(err, RouteError::Render { ref path, .. } if path == "/broken"));
        assert_eq!(children(&router), vec!["before"]);
    }

    #[tokio::test]
    async fn test_invalid_registration_is_reported() {
        let router = instance();
        let err = router.register_path([("//x", text("x"))]).unwrap_err();
        assert!(matches!(err, RouteError::InvalidPath(_)));
        let err = router.register_path([("", text("x"))]).unwrap_err();
        assert!(matches!(err, RouteError::InvalidPath(_)));
    }

    #[tokio::test]
    async fn test_stale_render_is_superseded() {
        let router = Arc::new(instance());
        let slow: Handler<String> = Handler::simple(|path: String| async move {
            tokio::time::sleep(Duration::from_millis(100)).await;
            Ok::<_, BoxError>(format!("slow:{}", path))
        });
        router
            .register_path([("/slow", slow), ("/fast", text("fast"))])
            .unwrap();

        let background = router.clone();
        let slow_call = tokio::spawn(async move { background.route_to("/slow").await });
        tokio::time::sleep(Duration::from_millis(20)).await;

        let fast = router.route_to("/fast").await.unwrap();
        let slow = slow_call.await.unwrap().unwrap();

        assert_eq!(fast, RouteOutcome::Rendered);
        assert_eq!(slow, RouteOutcome::Superseded);
        assert_eq!(children(&router), vec!["fast:/fast"]);
        assert_eq!(router.generation(), 2);
    }

    #[tokio::test]
    async fn test_resolve_returns_registered_handler() {
        let router = instance();
        let about = text("about");
        router.register_path([("/about", about.clone())]).unwrap();

        assert!(router.resolve("/about").unwrap().same_as(&about));
        assert!(router.resolve("/missing").is_none());
    }
}
