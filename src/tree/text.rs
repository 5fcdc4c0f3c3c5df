//! Indented text format for trees
//!
//! One node per line, two spaces of indentation per level:
//!
//! ```text
//! # comment
//! 5
//!   3
//!     1
//!     2
//!   9
//!     5
//!     7
//! ```
//!
//! Blank lines and `#` lines are skipped. No node lines at all is the empty tree.
//! A leading `\` is stripped from an identifier, so `\#x` is the node `#x`
//! and a lone `\` is the empty identifier.

use std::fmt;

use thiserror::Error;

use super::Node;

/// Spaces per level of indentation
pub const INDENT: usize = 2;

/// Escape prefix for identifiers that would otherwise read as blank or comment lines
pub const ESCAPE: char = '\\';

/// Errors raised while parsing the indented text format.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TextError {
    /// Indentation is not a multiple of [`INDENT`].
    #[error("line {line}: indentation of {indent} spaces is not a multiple of {}", INDENT)]
    OddIndent {
        /// 1-based line number.
        line: usize,
        /// Leading spaces found.
        indent: usize,
    },

    /// Indentation contains a tab.
    #[error("line {line}: tabs are not allowed in indentation")]
    TabIndent {
        /// 1-based line number.
        line: usize,
    },

    /// Node is nested deeper than its predecessor allows.
    #[error("line {line}: depth {depth} skips a level (at most {max} allowed here)")]
    DepthJump {
        /// 1-based line number.
        line: usize,
        /// Depth implied by the indentation.
        depth: usize,
        /// Deepest depth allowed at this line.
        max: usize,
    },

    /// A second node at depth 0.
    #[error("line {line}: a tree has exactly one root")]
    MultipleRoots {
        /// 1-based line number.
        line: usize,
    },
}

/// Parse the indented text format
///
/// Identifiers are the trimmed line contents, minus one leading [`ESCAPE`].
pub fn parse(input: &str) -> Result<Option<Node<String>>, TextError> {
    // stack[d] is the open node at depth d
    let mut stack: Vec<Node<String>> = Vec::new();
    let mut has_root = false;

    for (idx, raw) in input.lines().enumerate() {
        let line = idx + 1;
        let id = raw.trim();
        if id.is_empty() || id.starts_with('#') {
            continue;
        }

        let body = raw.trim_start_matches(' ');
        if body.starts_with('\t') {
            return Err(TextError::TabIndent { line });
        }

        let indent = raw.len() - body.len();
        if indent % INDENT != 0 {
            return Err(TextError::OddIndent { line, indent });
        }

        let depth = indent / INDENT;
        if depth == 0 && has_root {
            return Err(TextError::MultipleRoots { line });
        }
        if depth > stack.len() {
            return Err(TextError::DepthJump {
                line,
                depth,
                max: stack.len(),
            });
        }

        close_to(&mut stack, depth);
        let id = id.strip_prefix(ESCAPE).unwrap_or(id);
        stack.push(Node::leaf(id.to_string()));
        has_root = true;
    }

    close_to(&mut stack, 1);
    Ok(stack.pop())
}

/// Pop open nodes into their parents until `depth` remain
fn close_to(stack: &mut Vec<Node<String>>, depth: usize) {
    while stack.len() > depth {
        let Some(child) = stack.pop() else { break };
        match stack.last_mut() {
            Some(parent) => parent.push_child(child),
            None => {
                stack.push(child);
                break;
            }
        }
    }
}

/// Renders the format read by [`parse`]
///
/// Identifiers that are empty or start with `#` or [`ESCAPE`] get an
/// [`ESCAPE`] prefix. Surrounding whitespace is not preserved.
impl<T: fmt::Display> fmt::Display for Node<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Explicit stack: deep trees must not overflow the call stack
        let mut open = vec![(0usize, self)];

        while let Some((depth, node)) = open.pop() {
            let id = node.id.to_string();
            let prefix = if id.is_empty() || id.starts_with(['#', ESCAPE]) {
                "\\"
            } else {
                ""
            };
            writeln!(f, "{:width$}{}{}", "", prefix, id, width = depth * INDENT)?;
            open.extend(node.children.iter().rev().map(|child| (depth + 1, child)));
        }

        Ok(())
    }
}
