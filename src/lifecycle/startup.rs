//! Startup orchestration.
//!
//! # Responsibilities
//! - Create the navigation source and the registry
//! - Build one text router per configured instance
//! - Register instances in config order (each renders the current location)
//!
//! # Design Decisions
//! - Fail fast: a route the trie refuses aborts startup
//! - Instances register sequentially, not concurrently

use std::sync::Arc;

use crate::config::RouterConfig;
use crate::dispatch::template::template_routes;
use crate::dispatch::{MemoryContainer, RouterInstance};
use crate::navigation::{FragmentChannel, NavigationSource, Registry};
use crate::routing::RouteError;

/// Router instance rendering text views into memory.
pub type TextRouter = RouterInstance<MemoryContainer<String>>;

/// Everything a running session needs.
#[derive(Debug)]
pub struct Session {
    pub source: Arc<FragmentChannel>,
    pub registry: Arc<Registry>,
    pub routers: Vec<Arc<TextRouter>>,
}

impl Session {
    /// Current content of every router, in registration order.
    pub fn snapshot(&self) -> Vec<(String, Vec<String>)> {
        self.routers
            .iter()
            .map(|router| {
                let children = router.with_container(|c| c.children().to_vec());
                (router.name().to_string(), children)
            })
            .collect()
    }
}

/// Build and register every configured router.
pub async fn start(config: &RouterConfig) -> Result<Session, RouteError> {
    let source = Arc::new(FragmentChannel::new(&config.navigation.initial_fragment));
    let registry = Arc::new(Registry::new(source.clone()));

    let mut routers = Vec::with_capacity(config.routers.len());
    for instance in &config.routers {
        let router = Arc::new(TextRouter::new(instance.name.clone(), MemoryContainer::new()));
        router.register_path(template_routes(instance))?;

        let outcome = registry.register_instance(router.clone()).await?;
        tracing::debug!(router = %instance.name, outcome = outcome.as_str(), "Initial render");
        routers.push(router);
    }

    tracing::info!(
        routers = routers.len(),
        fragment = %source.current_fragment(),
        "Session started"
    );
    Ok(Session {
        source,
        registry,
        routers,
    })
}
