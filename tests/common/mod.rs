//! Shared utilities for integration tests.

use std::future::Future;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use fragment_router::routing::BoxError;
use fragment_router::{Handler, MemoryContainer, RouterInstance};

pub type TextRouter = RouterInstance<MemoryContainer<String>>;

/// Ordered record of handler activity.
#[derive(Clone, Default)]
pub struct EventLog(Arc<Mutex<Vec<String>>>);

#[allow(dead_code)]
impl EventLog {
    pub fn push(&self, event: impl Into<String>) {
        self.0.lock().unwrap().push(event.into());
    }

    pub fn take(&self) -> Vec<String> {
        std::mem::take(&mut *self.0.lock().unwrap())
    }
}

/// Handler rendering `"<label>:<path>"`.
#[allow(dead_code)]
pub fn text(label: &'static str) -> Handler<String> {
    Handler::simple(move |path: String| async move { Ok::<_, BoxError>(format!("{}:{}", label, path)) })
}

/// Handler that logs `"<label> start <path>"` / `"<label> end <path>"`
/// around an optional delay, then renders like `text`.
#[allow(dead_code)]
pub fn recording(label: &'static str, log: &EventLog, delay: Duration) -> Handler<String> {
    let log = log.clone();
    Handler::simple(move |path: String| {
        let log = log.clone();
        async move {
            log.push(format!("{} start {}", label, path));
            tokio::time::sleep(delay).await;
            log.push(format!("{} end {}", label, path));
            Ok::<_, BoxError>(format!("{}:{}", label, path))
        }
    })
}

/// Handler that always fails.
#[allow(dead_code)]
pub fn failing(message: &'static str) -> Handler<String> {
    Handler::simple(move |_path: String| async move { Err::<String, BoxError>(message.into()) })
}

pub fn text_router(name: &str) -> Arc<TextRouter> {
    Arc::new(RouterInstance::new(name, MemoryContainer::new()))
}

pub fn children(router: &TextRouter) -> Vec<String> {
    router.with_container(|c| c.children().to_vec())
}

/// Poll `condition` every 10ms until it holds; panics after 2s.
#[allow(dead_code)]
pub async fn wait_for<F>(mut condition: F)
where
    F: FnMut() -> bool,
{
    let deadline = tokio::time::Instant::now() + Duration::from_secs(2);
    while !condition() {
        assert!(tokio::time::Instant::now() < deadline, "condition not met within 2s");
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
}

/// Run `f` with a timeout so a stuck listener fails the test instead of hanging.
#[allow(dead_code)]
pub async fn within<T>(f: impl Future<Output = T>) -> T {
    tokio::time::timeout(Duration::from_secs(5), f)
        .await
        .expect("timed out")
}
