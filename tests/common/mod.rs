//! Tree generator for integration tests
//!
//! Nodes are numbered in level order, so node `i` is the `i`-th node a
//! breadth-first scan visits. That makes the expected result of a search
//! computable from plain slices without walking the tree.

#![allow(dead_code)]

use std::ops::Range;

use treesearch::Node;

/// Shape of a level-order numbered tree
#[derive(Debug, Clone)]
pub struct Shape {
    /// Child index range of each node
    pub children: Vec<Range<usize>>,
    /// Depth of each node (root = 0)
    pub depths: Vec<usize>,
}

impl Shape {
    /// Lay out `len` nodes, giving parent `i` up to `breadths[i % breadths.len()]`
    /// children until the nodes run out.
    pub fn new(len: usize, breadths: &[usize]) -> Self {
        let mut children = vec![0..0; len];
        let mut depths = vec![0; len];
        let mut next = 1;

        for parent in 0..len {
            if next >= len {
                break;
            }
            let breadth = breadths
                .get(parent % breadths.len().max(1))
                .copied()
                .unwrap_or(1)
                .max(1);
            let end = (next + breadth).min(len);
            for child in next..end {
                depths[child] = depths[parent] + 1;
            }
            children[parent] = next..end;
            next = end;
        }

        Self { children, depths }
    }

    /// Number of nodes
    pub fn len(&self) -> usize {
        self.depths.len()
    }

    /// Materialise the tree with `ids[i]` on node `i`
    pub fn build<T: Clone>(&self, ids: &[T]) -> Option<Node<T>> {
        assert_eq!(ids.len(), self.len(), "one id per node");

        let mut built: Vec<Option<Node<T>>> = ids.iter().cloned().map(Node::leaf).map(Some).collect();
        // Children always have larger indices than their parent
        for idx in (0..self.len()).rev() {
            let kids: Vec<Node<T>> = self.children[idx]
                .clone()
                .map(|child| built[child].take().expect("child is attached once"))
                .collect();
            if let Some(node) = built[idx].as_mut() {
                node.children = kids;
            }
        }

        built.into_iter().next().flatten()
    }
}

/// Expected `(id, depth)` by brute force over level-order numbered ids
pub fn first_repeat<T: PartialEq>(ids: &[T], shape: &Shape) -> Option<(usize, usize)> {
    (0..ids.len())
        .find(|&j| ids[..j].contains(&ids[j]))
        .map(|j| (j, shape.depths[j]))
}
