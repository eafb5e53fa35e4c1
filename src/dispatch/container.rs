//! View containers.
//!
//! The router never inspects rendered nodes; it only needs to empty a
//! container and append one node to it.

/// A node whose children the router replaces.
pub trait Container: Send {
    /// Rendered view type produced by handlers.
    type Node: Send + 'static;

    /// Number of current children.
    fn child_count(&self) -> usize;

    /// Detach and return the first child.
    fn remove_first_child(&mut self) -> Option<Self::Node>;

    /// Append a child after the existing ones.
    fn append_child(&mut self, node: Self::Node);

    /// Remove every child, then append `node` as the only one.
    fn replace_children(&mut self, node: Self::Node) {
        while self.remove_first_child().is_some() {}
        self.append_child(node);
    }
}

/// In-memory container holding its children in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoryContainer<N> {
    children: Vec<N>,
}

impl<N> Default for MemoryContainer<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N> MemoryContainer<N> {
    pub fn new() -> Self {
        Self {
            children: Vec::new(),
        }
    }

    /// Container pre-filled with `children` (e.g. server-rendered markup).
    pub fn with_children(children: impl IntoIterator<Item = N>) -> Self {
        Self {
            children: children.into_iter().collect(),
        }
    }

    pub fn children(&self) -> &[N] {
        &self.children
    }
}

impl<N: Send + 'static> Container for MemoryContainer<N> {
    type Node = N;

    fn child_count(&self) -> usize {
        self.children.len()
    }

    fn remove_first_child(&mut self) -> Option<N> {
        if self.children.is_empty() {
            None
        } else {
            Some(self.children.remove(0))
        }
    }

    fn append_child(&mut self, node: N) {
        self.children.push(node);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replace_children_leaves_single_child() {
        let mut container = MemoryContainer::with_children(["a", "b", "c"]);
        container.replace_children("d");

        assert_eq!(container.children(), ["d"]);
        assert_eq!(container.child_count(), 1);
    }

    #[test]
    fn test_remove_first_child_in_order() {
        let mut container = MemoryContainer::with_children([1, 2]);

        assert_eq!(container.remove_first_child(), Some(1));
        assert_eq!(container.remove_first_child(), Some(2));
        assert_eq!(container.remove_first_child(), None);
    }

    #[test]
    fn test_replace_on_empty_container() {
        let mut container = MemoryContainer::new();
        container.replace_children("only".to_string());
        container.replace_children("again".to_string());

        assert_eq!(container.children(), ["again".to_string()]);
    }
}
