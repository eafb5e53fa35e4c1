//! Route trie keyed by path segment.
//!
//! # Responsibilities
//! - Own every handler registered for one router instance
//! - Create subtree nodes on demand without disturbing existing ones
//! - Route the reserved markers into the index and not-found slots
//!
//! # Design Decisions
//! - Owned recursive tree: each child is exclusively owned by its parent
//! - Re-registering a path silently replaces the previous handler
//! - A leaf standing where a subtree is needed is promoted, its handler
//!   moving into the new subtree's index slot

use std::collections::HashMap;

use crate::routing::error::RouteError;
use crate::routing::handler::Handler;
use crate::routing::path::{self, INDEX_SEGMENT, NOT_FOUND_SEGMENT};
use crate::routing::resolver::{self, Resolution};

/// A node in the route trie.
#[derive(Debug)]
pub enum RouteNode<N> {
    /// A concrete handler for exactly this path.
    Leaf(Handler<N>),
    /// A subtree with its own slots.
    Internal(InternalNode<N>),
}

impl<N> RouteNode<N> {
    /// Turn this node into a subtree, keeping a leaf's handler as the index.
    fn promote(&mut self) -> &mut InternalNode<N> {
        if let RouteNode::Leaf(handler) = self {
            let index = handler.clone();
            *self = RouteNode::Internal(InternalNode {
                index: Some(index),
                ..InternalNode::default()
            });
        }
        match self {
            RouteNode::Internal(node) => node,
            RouteNode::Leaf(_) => unreachable!("leaf promoted above"),
        }
    }

    fn handler_count(&self) -> usize {
        match self {
            RouteNode::Leaf(_) => 1,
            RouteNode::Internal(node) => node.handler_count(),
        }
    }
}

/// A subtree: children by segment plus the two optional slots.
#[derive(Debug)]
pub struct InternalNode<N> {
    pub(crate) children: HashMap<String, RouteNode<N>>,
    pub(crate) index: Option<Handler<N>>,
    pub(crate) not_found: Option<Handler<N>>,
}

// Manual impl: deriving would require `N: Default`.
impl<N> Default for InternalNode<N> {
    fn default() -> Self {
        Self {
            children: HashMap::new(),
            index: None,
            not_found: None,
        }
    }
}

impl<N> InternalNode<N> {
    /// Child at `segment`, if any.
    pub fn child(&self, segment: &str) -> Option<&RouteNode<N>> {
        self.children.get(segment)
    }

    /// Handler used when resolution ends exactly at this node.
    pub fn index(&self) -> Option<&Handler<N>> {
        self.index.as_ref()
    }

    /// Handler used when resolution fails at or below this node.
    pub fn not_found(&self) -> Option<&Handler<N>> {
        self.not_found.as_ref()
    }

    fn subtree(&mut self, segment: &str) -> &mut InternalNode<N> {
        let node = self
            .children
            .entry(segment.to_string())
            .or_insert_with(|| RouteNode::Internal(InternalNode::default()));
        if matches!(node, RouteNode::Leaf(_)) {
            tracing::debug!(segment, "Promoting leaf route to subtree, handler kept as index");
        }
        node.promote()
    }

    fn attach(&mut self, segment: &str, handler: Handler<N>, path: &str) {
        let replaced = match segment {
            INDEX_SEGMENT => self.index.replace(handler).is_some(),
            NOT_FOUND_SEGMENT => self.not_found.replace(handler).is_some(),
            _ => match self.children.get_mut(segment) {
                Some(RouteNode::Internal(node)) => node.index.replace(handler).is_some(),
                _ => self
                    .children
                    .insert(segment.to_string(), RouteNode::Leaf(handler))
                    .is_some(),
            },
        };
        if replaced {
            tracing::debug!(path, "Route re-registered, previous handler replaced");
        }
    }

    fn handler_count(&self) -> usize {
        usize::from(self.index.is_some())
            + usize::from(self.not_found.is_some())
            + self.children.values().map(RouteNode::handler_count).sum::<usize>()
    }
}

/// Route table of one router instance.
#[derive(Debug)]
pub struct RouteTrie<N> {
    root: InternalNode<N>,
}

impl<N> Default for RouteTrie<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N> RouteTrie<N> {
    /// Create an empty trie.
    pub fn new() -> Self {
        Self {
            root: InternalNode::default(),
        }
    }

    /// Root node of the trie.
    pub fn root(&self) -> &InternalNode<N> {
        &self.root
    }

    /// Register `handler` at `path`.
    ///
    /// The last segment decides where the handler lands: `""` fills the
    /// index slot, `"$404$"` the not-found slot, and an existing subtree at a
    /// plain segment gets the handler as its index.
    pub fn insert(&mut self, path: &str, handler: Handler<N>) -> Result<(), RouteError> {
        let segments = path::route_segments(path);
        let Some((last, parents)) = segments.split_last() else {
            return Err(RouteError::InvalidPath(path.to_string()));
        };

        let mut node = &mut self.root;
        for segment in parents {
            match *segment {
                INDEX_SEGMENT => return Err(RouteError::InvalidPath(path.to_string())),
                NOT_FOUND_SEGMENT => {
                    return Err(RouteError::RouteConflict {
                        path: path.to_string(),
                        segment: segment.to_string(),
                    })
                }
                _ => node = node.subtree(segment),
            }
        }

        node.attach(last, handler, path);
        Ok(())
    }

    /// Register every `(path, handler)` pair, in iteration order.
    ///
    /// Stops at the first invalid path; earlier entries stay registered.
    pub fn register<I, P>(&mut self, routes: I) -> Result<(), RouteError>
    where
        I: IntoIterator<Item = (P, Handler<N>)>,
        P: AsRef<str>,
    {
        routes
            .into_iter()
            .try_for_each(|(path, handler)| self.insert(path.as_ref(), handler))
    }

    /// Find the handler for `path`.
    pub fn resolve(&self, path: &str) -> Option<&Handler<N>> {
        resolver::resolve(&self.root, path).handler
    }

    /// Find the handler for `path`, reporting how it was found.
    pub fn resolve_traced(&self, path: &str) -> Resolution<'_, N> {
        resolver::resolve(&self.root, path)
    }

    /// Number of registered handlers, slots included.
    pub fn len(&self) -> usize {
        self.root.handler_count()
    }

    /// Whether nothing has been registered.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routing::handler::BoxError;

    fn handler(label: &'static str) -> Handler<String> {
        Handler::simple(move |_path: String| async move { Ok::<_, BoxError>(label.to_string()) })
    }

    #[test]
    fn test_insert_creates_subtrees() {
        let mut trie = RouteTrie::new();
        trie.insert("/a/b", handler("ab")).unwrap();

        match trie.root().child("a") {
            Some(RouteNode::Internal(a)) => {
                assert!(matches!(a.child("b"), Some(RouteNode::Leaf(_))));
                assert!(a.index().is_none());
            }
            other => panic!("expected subtree at a, got {:?}", other),
        }
        assert_eq!(trie.len(), 1);
    }

    #[test]
    fn test_reserved_segments_fill_slots() {
        let mut trie = RouteTrie::new();
        trie.insert("/", handler("home")).unwrap();
        trie.insert("/$404$", handler("missing")).unwrap();
        trie.insert("/docs/", handler("docs")).unwrap();

        assert!(trie.root().index().is_some());
        assert!(trie.root().not_found().is_some());
        assert!(trie.root().child("").is_none());
        assert!(trie.root().child("$404$").is_none());
        match trie.root().child("docs") {
            Some(RouteNode::Internal(docs)) => assert!(docs.index().is_some()),
            other => panic!("expected subtree at docs, got {:?}", other),
        }
    }

    #[test]
    fn test_existing_subtree_gets_index() {
        let mut trie = RouteTrie::new();
        let parent = handler("a");
        trie.insert("/a/b", handler("ab")).unwrap();
        trie.insert("/a", parent.clone()).unwrap();

        match trie.root().child("a") {
            Some(RouteNode::Internal(a)) => {
                assert!(a.index().unwrap().same_as(&parent));
                assert!(a.child("b").is_some());
            }
            other => panic!("expected subtree at a, got {:?}", other),
        }
        assert_eq!(trie.len(), 2);
    }

    #[test]
    fn test_leaf_in_the_way_is_promoted() {
        let mut trie = RouteTrie::new();
        let parent = handler("a");
        trie.insert("/a", parent.clone()).unwrap();
        trie.insert("/a/b", handler("ab")).unwrap();

        match trie.root().child("a") {
            Some(RouteNode::Internal(a)) => {
                assert!(a.index().unwrap().same_as(&parent));
                assert!(matches!(a.child("b"), Some(RouteNode::Leaf(_))));
            }
            other => panic!("expected promoted subtree at a, got {:?}", other),
        }
    }

    #[test]
    fn test_leading_slash_optional() {
        let mut trie = RouteTrie::new();
        let missing = handler("missing");
        let docs = handler("docs");
        trie.insert("$404$", missing.clone()).unwrap();
        trie.insert("docs", docs.clone()).unwrap();

        assert!(trie.root().not_found().unwrap().same_as(&missing));
        assert!(trie.resolve("/docs").unwrap().same_as(&docs));
    }

    #[test]
    fn test_reregistration_replaces() {
        let mut trie = RouteTrie::new();
        let second = handler("second");
        trie.insert("/x", handler("first")).unwrap();
        trie.insert("/x", second.clone()).unwrap();

        assert!(trie.resolve("/x").unwrap().same_as(&second));
        assert_eq!(trie.len(), 1);
    }

    #[test]
    fn test_invalid_paths_rejected() {
        let mut trie = RouteTrie::new();

        assert!(matches!(trie.insert("", handler("d")), Err(RouteError::InvalidPath(_))));
        assert!(matches!(
            trie.insert("//x", handler("d")),
            Err(RouteError::InvalidPath(_))
        ));
        assert!(matches!(
            trie.insert("/$404$/x", handler("d")),
            Err(RouteError::RouteConflict { .. })
        ));
        assert!(trie.is_empty());
    }

    #[test]
    fn test_register_stops_at_first_error() {
        let mut trie = RouteTrie::new();
        let result = trie.register(vec![
            ("/ok", handler("ok")),
            ("", handler("bad")),
            ("/never", handler("never")),
        ]);

        assert!(result.is_err());
        assert!(trie.resolve("/ok").is_some());
        assert!(trie.resolve("/never").is_none());
    }
}
