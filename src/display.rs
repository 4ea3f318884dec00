//! Text diagrams of a tree, for humans.
//!
//! The diagram is drawn sideways: larger values sit above their parent and smaller values below,
//! so reading the lines from the bottom up gives the values in ascending order.
//!
//! ```
//! use balanced_bst::Tree;
//!
//! let tree = Tree::build([1, 2, 3]);
//!
//! assert_eq!(
//!     tree.to_string(),
//!     "│   ┌── 3\n\
//!      └── 2\n    \
//!          └── 1\n"
//! );
//! ```

use std::fmt;

use crate::balanced::{Node, Tree};

/// Renders the subtree rooted at a node, or nothing for `None`. Never modifies the tree.
pub struct Diagram<'a, T> {
    node: Option<&'a Node<T>>,
}

impl<'a, T> Diagram<'a, T> {
    /// Creates a diagram of the subtree rooted at `node`.
    pub fn new(node: Option<&'a Node<T>>) -> Self {
        Self { node }
    }
}

impl<T> Tree<T> {
    /// Gets a [`Diagram`] of the whole tree.
    pub fn diagram(&self) -> Diagram<'_, T> {
        Diagram::new(self.root())
    }
}

impl<T> Node<T> {
    /// Gets a [`Diagram`] of the subtree rooted at this node.
    pub fn diagram(&self) -> Diagram<'_, T> {
        Diagram::new(Some(self))
    }
}

impl<T: fmt::Display> fmt::Display for Diagram<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.node {
            Some(node) => write_node(f, node, "", true),
            None => Ok(()),
        }
    }
}

impl<T: fmt::Display> fmt::Display for Tree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.diagram(), f)
    }
}

/// Writes the right subtree, then the node, then the left subtree. `is_left` is also set for the
/// root so that it gets the bottom corner.
fn write_node<T: fmt::Display>(
    f: &mut fmt::Formatter<'_>,
    node: &Node<T>,
    prefix: &str,
    is_left: bool,
) -> fmt::Result {
    if let Some(right) = node.right() {
        let bar = if is_left { "│   " } else { "    " };
        write_node(f, right, &format!("{prefix}{bar}"), false)?;
    }

    let corner = if is_left { "└── " } else { "┌── " };
    writeln!(f, "{prefix}{corner}{}", node.value())?;

    if let Some(left) = node.left() {
        let bar = if is_left { "    " } else { "│   " };
        write_node(f, left, &format!("{prefix}{bar}"), true)?;
    }

    Ok(())
}
