//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Registration (per router instance):
//!     (path, Handler)[]
//!     → path.rs (split into segments, reserved markers)
//!     → trie.rs (create/reuse subtree nodes, fill leaf or slot)
//!
//! Navigation:
//!     "#/docs/intro"
//!     → path.rs (fragment → "/docs/intro")
//!     → resolver.rs (walk trie, track deepest not-found slot)
//!     → Return: Handler or nothing
//! ```
//!
//! # Design Decisions
//! - Segments are exact, case-sensitive strings (no parameters, no wildcards)
//! - Index and not-found handlers live in named slots, never in the child map
//! - The deepest not-found slot on the matched prefix wins
//! - A leaf in the way of a deeper registration becomes that subtree's index

pub mod error;
pub mod handler;
pub mod path;
pub mod resolver;
pub mod trie;

pub use error::RouteError;
pub use handler::{BoxError, Handler, RenderResult};
pub use path::{fragment_to_path, route_segments, segments};
pub use resolver::{Resolution, ResolutionKind};
pub use trie::{InternalNode, RouteNode, RouteTrie};
