//! Level-synchronous breadth-first traversal
//!
//! Yields one level at a time so callers always know the current depth
//! without tagging every queued node with it.

use super::Node;

/// Iterator over the levels of a tree
///
/// Item `d` holds every node at depth `d`, ordered by parent (left to right)
/// and then by position under that parent.
#[derive(Debug)]
pub struct Levels<'a, T> {
    /// Level most recently yielded, or the root before the first call
    current: Vec<&'a Node<T>>,

    /// Whether `current` was already yielded
    yielded: bool,
}

impl<'a, T> Levels<'a, T> {
    /// Start at `root` (depth 0)
    pub fn new(root: &'a Node<T>) -> Self {
        Self {
            current: vec![root],
            yielded: false,
        }
    }

    /// Empty traversal, as for an absent tree
    pub fn empty() -> Self {
        Self {
            current: Vec::new(),
            yielded: false,
        }
    }
}

impl<'a, T> Iterator for Levels<'a, T> {
    type Item = Vec<&'a Node<T>>;

    fn next(&mut self) -> Option<Self::Item> {
        // Level d+1 is only built once level d has been handed out and
        // the caller asks for more
        if self.yielded {
            self.current = self
                .current
                .iter()
                .flat_map(|node| node.children.iter())
                .collect();
        }
        if self.current.is_empty() {
            return None;
        }

        self.yielded = true;
        Some(self.current.clone())
    }
}

impl<'a, T> std::iter::FusedIterator for Levels<'a, T> {}

impl<'a, T> From<Option<&'a Node<T>>> for Levels<'a, T> {
    fn from(root: Option<&'a Node<T>>) -> Self {
        root.map_or_else(Self::empty, Self::new)
    }
}
