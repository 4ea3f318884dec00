//! This crate exposes a height-balanced Binary Search Tree (BST) of unique values,
//! mostly for educational purposes.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored values. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores a value and
//! will sometimes have child `Node`s. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    value less than its own value.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    value greater than its own value.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching for values in the tree takes `O(height)` (where `height` is defined as the longest
//! path from the root `Node` to a leaf `Node`). The tree in [`balanced`] is built with height
//! `floor(lg N)` but does _not_ balance itself on `insert` or `delete`. Instead it can report
//! whether it is still balanced and rebuild itself on demand with [`Tree::rebalance`].
//!
//! ## Traversals
//!
//! Every traversal comes in two flavours: one that collects the values into a `Vec` and one
//! that hands each [`Node`] to a visitor closure. See [`traversal`].
//!
//! ```
//! use balanced_bst::Tree;
//!
//! let tree = Tree::build([5, 3, 8, 3, 1]);
//!
//! assert_eq!(tree.inorder(), vec![1, 3, 5, 8]);
//! assert_eq!(tree.level_order(), vec![3, 1, 5, 8]);
//! assert!(tree.is_balanced());
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod balanced;
pub mod display;
pub mod error;
pub mod traversal;
mod util;

pub use balanced::{Node, Tree};
pub use display::Diagram;
pub use error::Error;
pub use traversal::Iter;
