//! Path resolution.
//!
//! # Algorithm
//! ```text
//! fallback = root.not_found
//! for each segment but the last:
//!     child missing or a leaf   → fallback
//!     child subtree             → descend, its not_found (if any) becomes fallback
//! last segment:
//!     ""                        → current.index, else fallback
//!     child missing             → fallback
//!     child leaf                → leaf
//!     child subtree             → subtree.index, else fallback
//! ```
//!
//! # Design Decisions
//! - Every segment must match exactly; no best-effort matching
//! - The most specific not-found slot seen while descending wins, never an
//!   ancestor's once a deeper one was found
//! - Landing on a subtree without an index counts as not found

use crate::routing::handler::Handler;
use crate::routing::path;
use crate::routing::trie::{InternalNode, RouteNode};

/// How a resolution ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolutionKind {
    /// The last segment named a leaf.
    Matched,
    /// Resolution ended on a node's index slot.
    Index,
    /// A not-found slot declared `depth` segments below the root was used.
    NotFound { depth: usize },
    /// Nothing matched and no not-found slot was in scope.
    Unrouted,
}

impl ResolutionKind {
    /// Label used in logs and metrics.
    pub fn as_str(&self) -> &'static str {
        match self {
            ResolutionKind::Matched => "matched",
            ResolutionKind::Index => "index",
            ResolutionKind::NotFound { .. } => "not_found",
            ResolutionKind::Unrouted => "unrouted",
        }
    }
}

/// Outcome of walking the trie for one path.
#[derive(Debug)]
pub struct Resolution<'a, N> {
    pub handler: Option<&'a Handler<N>>,
    pub kind: ResolutionKind,
}

impl<'a, N> Resolution<'a, N> {
    fn matched(handler: &'a Handler<N>) -> Self {
        Self {
            handler: Some(handler),
            kind: ResolutionKind::Matched,
        }
    }

    fn index(handler: &'a Handler<N>) -> Self {
        Self {
            handler: Some(handler),
            kind: ResolutionKind::Index,
        }
    }

    fn fallback(fallback: Option<(&'a Handler<N>, usize)>) -> Self {
        match fallback {
            Some((handler, depth)) => Self {
                handler: Some(handler),
                kind: ResolutionKind::NotFound { depth },
            },
            None => Self {
                handler: None,
                kind: ResolutionKind::Unrouted,
            },
        }
    }
}

/// Walk the trie rooted at `root` for `path`.
pub fn resolve<'a, N>(root: &'a InternalNode<N>, path: &str) -> Resolution<'a, N> {
    let segments = path::segments(path);
    let mut remaining = segments.as_slice();
    let mut current = root;
    let mut depth = 0;
    let mut fallback = root.not_found().map(|handler| (handler, depth));

    loop {
        match remaining {
            [] => return Resolution::fallback(fallback),
            [last] => {
                if last.is_empty() {
                    return current
                        .index()
                        .map(Resolution::index)
                        .unwrap_or_else(|| Resolution::fallback(fallback));
                }
                return match current.child(last) {
                    Some(RouteNode::Leaf(handler)) => Resolution::matched(handler),
                    Some(RouteNode::Internal(node)) => node
                        .index()
                        .map(Resolution::index)
                        .unwrap_or_else(|| Resolution::fallback(fallback)),
                    None => Resolution::fallback(fallback),
                };
            }
            [segment, rest @ ..] => match current.child(segment) {
                Some(RouteNode::Internal(node)) => {
                    depth += 1;
                    if let Some(handler) = node.not_found() {
                        fallback = Some((handler, depth));
                    }
                    current = node;
                    remaining = rest;
                }
                _ => return Resolution::fallback(fallback),
            },
        }
    }
}
