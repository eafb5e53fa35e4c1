//! Dispatch subsystem: one router instance per UI region.
//!
//! # Data Flow
//! ```text
//! route_to(path)
//!     → instance.rs (take generation token, resolve against own trie)
//!     → Handler::invoke (await the render function)
//!     → stale? drop the node : container.rs (remove all children, append node)
//! ```
//!
//! # Design Decisions
//! - The instance owns its trie; the container is only swapped, never diffed
//! - Overlapping route_to calls: the newest one wins, older results are dropped
//! - Render failures propagate raw; no retry, no fallback view

pub mod container;
pub mod instance;
pub mod template;

pub use container::{Container, MemoryContainer};
pub use instance::{Routable, RouteOutcome, RouterInstance};
