//! Presence-only identifier set

use std::collections::HashSet;
use std::hash::Hash;

/// Set of identifiers seen so far
///
/// No ordering; insertion and membership are expected O(1).
#[derive(Debug, Clone)]
pub struct IdSet<T> {
    members: HashSet<T>,
}

impl<T: Eq + Hash> IdSet<T> {
    /// Create an empty set
    pub fn new() -> Self {
        Self {
            members: HashSet::new(),
        }
    }

    /// Record `value`; returns `false` if it was already present
    pub fn add(&mut self, value: T) -> bool {
        self.members.insert(value)
    }

    /// True iff `value` was previously added
    pub fn contains(&self, value: &T) -> bool {
        self.members.contains(value)
    }

    /// Number of distinct identifiers
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// True if nothing was added yet
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

impl<T: Eq + Hash> Default for IdSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Eq + Hash> Extend<T> for IdSet<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.members.extend(iter);
    }
}

impl<T: Eq + Hash> FromIterator<T> for IdSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            members: iter.into_iter().collect(),
        }
    }
}
