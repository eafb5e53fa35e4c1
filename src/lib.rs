//! Fragment router library.
//!
//! Maps location fragments (`#/docs/intro`) to handlers through a segment
//! trie with index and subtree-scoped not-found slots, and keeps several
//! router instances in step with one navigation source.
//!
//! ```
//! use fragment_router::dispatch::{MemoryContainer, RouterInstance};
//! use fragment_router::routing::{BoxError, Handler};
//!
//! # tokio_test_block(async {
//! let router = RouterInstance::new("main", MemoryContainer::new());
//! router
//!     .register_path([
//!         ("/", Handler::with_metadata(
//!             |path: String, meta: Vec<String>| async move {
//!                 Ok::<_, BoxError>(format!("{} at {}", meta.join(","), path))
//!             },
//!             ["Home"],
//!         )),
//!         ("$404$", Handler::simple(|path: String| async move {
//!             Ok::<_, BoxError>(format!("missing {}", path))
//!         })),
//!     ])
//!     .unwrap_or_else(|e| panic!("{}", e));
//!
//! router.route_to("/").await.unwrap();
//! router.with_container(|c| assert_eq!(c.children(), ["Home at /".to_string()]));
//! # });
//! # fn tokio_test_block<F: std::future::Future>(f: F) {
//! #     tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(f);
//! # }
//! ```

// Core
pub mod routing;
pub mod dispatch;
pub mod navigation;

// Cross-cutting concerns
pub mod config;
pub mod lifecycle;
pub mod observability;

pub use config::RouterConfig;
pub use dispatch::{Container, MemoryContainer, Routable, RouteOutcome, RouterInstance};
pub use lifecycle::Shutdown;
pub use navigation::{FragmentChannel, NavigationSource, Registry};
pub use routing::{Handler, RouteError, RouteTrie};
