//! Shallowest duplicate identifier search
//!
//! Level-synchronous BFS with a set of identifiers seen so far. The first
//! identifier met a second time is the answer:
//!   - shallowest, because level d is exhausted before level d+1 starts
//!   - leftmost among equals, because each level is scanned left to right
//!
//! Reported depth is that of the second occurrence (root = 0).

use std::hash::Hash;

use tracing::debug;

use crate::set::IdSet;
use crate::tree::Node;

/// Duplicate identifier located by [`find_shallowest_duplicate`]
#[derive(Debug, PartialEq, Eq)]
pub struct Duplicate<'a, T> {
    /// Repeated identifier, borrowed from the node where it repeats
    pub id: &'a T,

    /// Depth of the repeat (second occurrence)
    pub depth: usize,
}

impl<'a, T> Clone for Duplicate<'a, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, T> Copy for Duplicate<'a, T> {}

impl<'a, T> Duplicate<'a, T> {
    /// Flatten a search result to `(identifier, depth)`
    ///
    /// Depth is 0 when nothing was found; the absent identifier is what
    /// signals "not found", not the depth.
    pub fn into_pair(found: Option<Self>) -> (Option<&'a T>, usize) {
        match found {
            Some(dup) => (Some(dup.id), dup.depth),
            None => (None, 0),
        }
    }
}

/// Find the shallowest, leftmost duplicate identifier
///
/// `None` root is the empty tree and yields `None`.
pub fn find_shallowest_duplicate<T>(root: Option<&Node<T>>) -> Option<Duplicate<'_, T>>
where
    T: Eq + Hash,
{
    let mut seen = IdSet::new();
    let mut level: Vec<&Node<T>> = root.into_iter().collect();
    let mut depth = 0;

    while !level.is_empty() {
        debug!(depth, width = level.len(), "scanning level");

        let mut below = Vec::new();
        if let Some(node) = scan_level(&level, &mut seen, &mut below) {
            debug!(depth, distinct = seen.len(), "duplicate identifier found");
            return Some(Duplicate { id: &node.id, depth });
        }

        level = below;
        depth += 1;
    }

    debug!(distinct = seen.len(), "no duplicate identifier");
    None
}

/// Scan one level left to right, returning the first repeated node
///
/// Children of every node processed before the hit are appended to `below`;
/// nodes after the hit are not touched.
fn scan_level<'a, T: Eq + Hash>(
    level: &[&'a Node<T>],
    seen: &mut IdSet<&'a T>,
    below: &mut Vec<&'a Node<T>>,
) -> Option<&'a Node<T>> {
    for &node in level {
        if !seen.add(&node.id) {
            return Some(node);
        }
        below.extend(node.children.iter());
    }
    None
}

impl<T: Eq + Hash> Node<T> {
    /// [`find_shallowest_duplicate`] rooted at `self`
    pub fn shallowest_duplicate(&self) -> Option<Duplicate<'_, T>> {
        find_shallowest_duplicate(Some(self))
    }
}
