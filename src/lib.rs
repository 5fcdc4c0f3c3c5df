//! # Shallowest duplicate identifier search
//!
//! Given a tree whose nodes carry identifiers of any `Eq + Hash` type, find
//! the identifier that repeats closest to the root.
//!
//! ## Algorithm
//!
//! 1. **Level-order scan**: visit depth 0, then depth 1, … left to right
//! 2. **Seen set**: remember every identifier met so far
//! 3. **Early exit**: the first identifier already in the set is reported,
//!    together with the depth at which it repeats
//!
//! Result: O(n) time and O(n) space for an n-node tree, less on early exit.
//!
//! ## Usage Example
//!
//! ```
//! use treesearch::{find_shallowest_duplicate, Node};
//!
//! //      5
//! //     / \
//! //    3   9
//! //   / \ / \
//! //  1  2 5  7
//! let root = Node::new(5, vec![
//!     Node::new(3, vec![Node::leaf(1), Node::leaf(2)]),
//!     Node::new(9, vec![Node::leaf(5), Node::leaf(7)]),
//! ]);
//!
//! let found = find_shallowest_duplicate(Some(&root)).unwrap();
//! assert_eq!((*found.id, found.depth), (5, 2));
//! ```

#![warn(missing_docs, missing_debug_implementations)]

pub mod finder; // BFS duplicate search
pub mod set;    // Identifier set
pub mod tree;   // Node type, traversal and text format

// Re-exports for convenience
pub use finder::{find_shallowest_duplicate, Duplicate};
pub use set::IdSet;
pub use tree::{Levels, Node, TextError};
