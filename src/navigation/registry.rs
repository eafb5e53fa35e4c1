//! Registry of router instances kept in sync with navigation.
//!
//! # Responsibilities
//! - Hold live instances in registration order (append-only)
//! - Route a newly registered instance to the current location at once
//! - Fan every fragment change out to all instances, one after another
//!
//! # Design Decisions
//! - Explicit object created at application start and passed by reference
//! - Sequential fan-out: a slow instance delays later ones, but render
//!   order between instances is deterministic
//! - A render failure stops the fan-out for that event and is returned
//!   to the caller; the run loop logs it and keeps listening

use std::sync::{Arc, Mutex, PoisonError};

use tokio::sync::broadcast::{self, error::RecvError};
use tracing::Instrument;
use uuid::Uuid;

use crate::dispatch::{Routable, RouteOutcome};
use crate::navigation::source::NavigationSource;
use crate::observability::metrics;
use crate::routing::{fragment_to_path, RouteError};

/// Process-wide list of router instances bound to one navigation source.
pub struct Registry {
    source: Arc<dyn NavigationSource>,
    instances: Mutex<Vec<Arc<dyn Routable>>>,
}

impl Registry {
    /// Create a registry over `source`.
    ///
    /// An empty fragment is set to `#/` first so every instance resolves a
    /// path with at least one segment.
    pub fn new(source: Arc<dyn NavigationSource>) -> Self {
        if source.current_fragment().is_empty() {
            tracing::debug!("Empty fragment at startup, defaulting to #/");
            source.set_fragment("/");
        }
        Self {
            source,
            instances: Mutex::new(Vec::new()),
        }
    }

    pub fn source(&self) -> &Arc<dyn NavigationSource> {
        &self.source
    }

    /// Path derived from the source's current fragment.
    pub fn current_path(&self) -> String {
        fragment_to_path(&self.source.current_fragment()).into_owned()
    }

    /// Snapshot of the registered instances, in registration order.
    pub fn instances(&self) -> Vec<Arc<dyn Routable>> {
        self.instances
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn len(&self) -> usize {
        self.instances
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Append `instance` and route it to the current location.
    pub async fn register_instance(
        &self,
        instance: Arc<dyn Routable>,
    ) -> Result<RouteOutcome, RouteError> {
        let count = {
            let mut instances = self.instances.lock().unwrap_or_else(PoisonError::into_inner);
            instances.push(instance.clone());
            instances.len()
        };
        metrics::record_registered_instances(count);

        let path = self.current_path();
        tracing::info!(router = instance.name(), instances = count, path = %path, "Router instance registered");
        instance.route_to(&path).await
    }

    /// Route every instance to `path`, awaiting each before the next.
    pub async fn navigate_all(&self, path: &str) -> Result<Vec<RouteOutcome>, RouteError> {
        let navigation_id = Uuid::new_v4();
        let span = tracing::info_span!("navigation", %navigation_id, path);

        async {
            let instances = self.instances();
            let mut outcomes = Vec::with_capacity(instances.len());
            for instance in instances {
                let outcome = instance.route_to(path).await.map_err(|e| {
                    tracing::error!(router = instance.name(), error = %e, "Navigation aborted");
                    e
                })?;
                tracing::debug!(router = instance.name(), outcome = outcome.as_str(), "Instance routed");
                outcomes.push(outcome);
            }
            Ok::<_, RouteError>(outcomes)
        }
        .instrument(span)
        .await
    }

    /// Programmatic navigation: set the fragment and fan out immediately.
    ///
    /// Meant for hosts that drive navigation themselves. When a `run` loop
    /// listens to the same source, use `source().set_fragment` instead, or
    /// every instance renders twice.
    pub async fn navigate(&self, fragment: &str) -> Result<Vec<RouteOutcome>, RouteError> {
        self.source.set_fragment(fragment);
        let path = self.current_path();
        self.navigate_all(&path).await
    }

    /// Follow fragment changes until shutdown or until the source closes.
    pub async fn run(&self, shutdown: broadcast::Receiver<()>) {
        self.listen(self.source.subscribe(), shutdown).await
    }

    /// Like `run`, over a subscription taken earlier by the caller.
    ///
    /// Events already queued when shutdown fires are still routed.
    pub async fn listen(
        &self,
        mut events: broadcast::Receiver<String>,
        mut shutdown: broadcast::Receiver<()>,
    ) {
        tracing::info!(instances = self.len(), "Navigation listener started");

        loop {
            tokio::select! {
                biased;
                event = events.recv() => match event {
                    Ok(fragment) => {
                        let path = fragment_to_path(&fragment);
                        if let Err(e) = self.navigate_all(&path).await {
                            tracing::warn!(path = %path, error = %e, "Navigation failed, waiting for next change");
                        }
                    }
                    Err(RecvError::Lagged(skipped)) => {
                        tracing::warn!(skipped, "Navigation events dropped, catching up to current fragment");
                        let path = self.current_path();
                        if let Err(e) = self.navigate_all(&path).await {
                            tracing::warn!(path = %path, error = %e, "Navigation failed, waiting for next change");
                        }
                    }
                    Err(RecvError::Closed) => {
                        tracing::info!("Navigation source closed, listener exiting");
                        break;
                    }
                },
                _ = shutdown.recv() => {
                    tracing::info!("Navigation listener received shutdown signal, exiting loop");
                    break;
                }
            }
        }
    }
}

impl std::fmt::Debug for Registry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Registry")
            .field("instances", &self.len())
            .field("fragment", &self.source.current_fragment())
            .finish()
    }
}
