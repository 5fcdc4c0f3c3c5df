//! Identifier-bearing trees
//!
//! Plain owned representation: every node owns its children, so a tree can
//! neither share subtrees nor contain cycles.

mod node;
mod text;
mod traversal;

pub use node::Node;
pub use text::{parse, TextError, ESCAPE, INDENT};
pub use traversal::Levels;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_levels_cover_every_node_once() {
        let root = parse("a\n  b\n    c\n  d\n    e\n    f\n")
            .unwrap()
            .unwrap();

        let widths: Vec<usize> = root.levels().map(|level| level.len()).collect();
        assert_eq!(widths, vec![1, 2, 3]);
        assert_eq!(widths.iter().sum::<usize>(), root.size());
    }
}
