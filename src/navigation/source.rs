//! Navigation sources.
//!
//! A source owns the current location fragment (always starting with `#`
//! once set) and announces changes to subscribers.

use std::sync::{Mutex, PoisonError};

use tokio::sync::broadcast;

/// Capacity of the change broadcast. Slow subscribers skip ahead.
const EVENT_CAPACITY: usize = 64;

/// Where navigation events come from.
pub trait NavigationSource: Send + Sync {
    /// Current fragment, e.g. `"#/docs"`, or `""` when none is set.
    fn current_fragment(&self) -> String;

    /// Change the fragment. Subscribers are notified only on an actual change.
    fn set_fragment(&self, fragment: &str);

    /// Receive every subsequent fragment change.
    fn subscribe(&self) -> broadcast::Receiver<String>;
}

/// In-memory navigation source.
#[derive(Debug)]
pub struct FragmentChannel {
    current: Mutex<String>,
    tx: broadcast::Sender<String>,
}

impl FragmentChannel {
    /// Create a source starting at `initial` (normalized to a leading `#`
    /// unless empty).
    pub fn new(initial: &str) -> Self {
        let (tx, _) = broadcast::channel(EVENT_CAPACITY);
        Self {
            current: Mutex::new(normalize_fragment(initial)),
            tx,
        }
    }
}

impl Default for FragmentChannel {
    fn default() -> Self {
        Self::new("")
    }
}

impl NavigationSource for FragmentChannel {
    fn current_fragment(&self) -> String {
        self.current
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn set_fragment(&self, fragment: &str) {
        let fragment = normalize_fragment(fragment);
        {
            let mut current = self.current.lock().unwrap_or_else(PoisonError::into_inner);
            if *current == fragment {
                return;
            }
            *current = fragment.clone();
        }
        tracing::trace!(fragment = %fragment, "Fragment changed");
        // No subscribers is fine: nobody is listening yet.
        let _ = self.tx.send(fragment);
    }

    fn subscribe(&self) -> broadcast::Receiver<String> {
        self.tx.subscribe()
    }
}

/// `"/a"` → `"#/a"`; `"#/a"` unchanged; `""` stays empty.
fn normalize_fragment(fragment: &str) -> String {
    if fragment.is_empty() || fragment.starts_with('#') {
        fragment.to_string()
    } else {
        format!("#{}", fragment)
    }
}
