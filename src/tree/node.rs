//! Owned tree node
//!
//! Node = identifier + ordered children.
//! Children are owned outright, so a `Node` value is always a finite tree.

use super::Levels;

/// Tree node carrying a generic identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Node<T> {
    /// Identifier of this node
    pub id: T,

    /// Children, left to right
    pub children: Vec<Node<T>>,
}

impl<T> Node<T> {
    /// Create node with the given children
    pub fn new(id: T, children: Vec<Node<T>>) -> Self {
        Self { id, children }
    }

    /// Create node without children
    pub fn leaf(id: T) -> Self {
        Self::new(id, Vec::new())
    }

    /// Builder-style append of one child
    pub fn with_child(mut self, child: Node<T>) -> Self {
        self.children.push(child);
        self
    }

    /// Append a child as the new rightmost one
    pub fn push_child(&mut self, child: Node<T>) {
        self.children.push(child);
    }

    /// Check if leaf (no children)
    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Total number of nodes in this subtree, including `self`
    pub fn size(&self) -> usize {
        self.levels().map(|level| level.len()).sum()
    }

    /// Number of levels below and including this node
    ///
    /// A leaf has height 1.
    pub fn height(&self) -> usize {
        self.levels().count()
    }

    /// Level-order iterator, one `Vec` per depth
    pub fn levels(&self) -> Levels<'_, T> {
        Levels::new(self)
    }
}

impl<T> Drop for Node<T> {
    // Drain iteratively so deep chains don't overflow the stack
    fn drop(&mut self) {
        let mut orphans = std::mem::take(&mut self.children);
        while let Some(mut node) = orphans.pop() {
            orphans.append(&mut node.children);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leaf() {
        let node = Node::leaf(7);
        assert!(node.is_leaf());
        assert_eq!(node.size(), 1);
        assert_eq!(node.height(), 1);
    }

    #[test]
    fn test_builder_preserves_child_order() {
        let node = Node::leaf("root")
            .with_child(Node::leaf("a"))
            .with_child(Node::leaf("b"));

        let ids: Vec<_> = node.children.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec!["a", "b"]);
        assert!(!node.is_leaf());
    }

    #[test]
    fn test_len_and_height() {
        //      1
        //     / \
        //    2   3
        //    |
        //    4
        let mut root = Node::new(1, vec![Node::leaf(2), Node::leaf(3)]);
        root.children[0].push_child(Node::leaf(4));

        assert_eq!(root.size(), 4);
        assert_eq!(root.height(), 3);
        assert_eq!(root.children[1].height(), 1);
    }

    #[test]
    fn test_drop_deep_chain() {
        let mut node = Node::leaf(0u32);
        for id in 1..1_000_000 {
            node = Node::leaf(id).with_child(node);
        }
        assert_eq!(node.height(), 1_000_000);
        drop(node);
    }
}
