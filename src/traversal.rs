//! Ways of walking a [`Tree`].
//!
//! Every order is available as a pair of methods. The plain method (e.g. [`Tree::inorder`])
//! collects the values into a fresh `Vec` each time it is called. The `_with` method (e.g.
//! [`Tree::inorder_with`]) instead calls a visitor once per [`Node`] and collects nothing.
//!
//! | order           | visits                                                 |
//! |-----------------|--------------------------------------------------------|
//! | in-order        | left subtree, node, right subtree (ascending values)   |
//! | pre-order       | node, left subtree, right subtree                      |
//! | post-order      | left subtree, right subtree, node                      |
//! | level-order     | by increasing depth, left to right within a depth      |
//!
//! Level-order has two interchangeable implementations: one driven by a FIFO queue and one
//! expanding a whole level per recursive call.
//!
//! # Examples
//!
//! ```
//! use balanced_bst::Tree;
//!
//! let tree = Tree::build(1..=7);
//!
//! assert_eq!(tree.preorder(), vec![4, 2, 1, 3, 6, 5, 7]);
//! assert_eq!(tree.postorder(), vec![1, 3, 2, 5, 7, 6, 4]);
//! assert_eq!(tree.level_order(), vec![4, 2, 6, 1, 3, 5, 7]);
//!
//! let mut leaves = 0;
//! tree.inorder_with(|node| {
//!     if node.is_leaf() {
//!         leaves += 1;
//!     }
//! });
//! assert_eq!(leaves, 4);
//! ```

use std::collections::VecDeque;

use crate::balanced::{Node, Tree};

impl<T> Tree<T> {
    /// Calls `visit` on every node in ascending order of value.
    pub fn inorder_with<F>(&self, mut visit: F)
    where
        F: FnMut(&Node<T>),
    {
        inorder(self.root(), &mut visit);
    }

    /// Returns the values in ascending order.
    pub fn inorder(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.collect_with(|tree, visit| tree.inorder_with(visit))
    }

    /// Calls `visit` on every node, visiting each node before its subtrees.
    pub fn preorder_with<F>(&self, mut visit: F)
    where
        F: FnMut(&Node<T>),
    {
        preorder(self.root(), &mut visit);
    }

    /// Returns the values with every node ahead of its subtrees.
    pub fn preorder(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.collect_with(|tree, visit| tree.preorder_with(visit))
    }

    /// Calls `visit` on every node, visiting each node after its subtrees.
    pub fn postorder_with<F>(&self, mut visit: F)
    where
        F: FnMut(&Node<T>),
    {
        postorder(self.root(), &mut visit);
    }

    /// Returns the values with every node behind its subtrees.
    pub fn postorder(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.collect_with(|tree, visit| tree.postorder_with(visit))
    }

    /// Calls `visit` on every node breadth first using a queue.
    pub fn level_order_with<F>(&self, mut visit: F)
    where
        F: FnMut(&Node<T>),
    {
        let mut queue: VecDeque<&Node<T>> = self.root().into_iter().collect();
        while let Some(node) = queue.pop_front() {
            visit(node);
            queue.extend(node.left());
            queue.extend(node.right());
        }
    }

    /// Returns the values breadth first using a queue.
    pub fn level_order(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.collect_with(|tree, visit| tree.level_order_with(visit))
    }

    /// Calls `visit` on every node breadth first, recursing once per level.
    /// Visits nodes in the same order as [`Tree::level_order_with`].
    ///
    /// Unlike the other traversals this one uses the call stack, one frame per level, so very
    /// tall trees should be walked with [`Tree::level_order_with`] or rebalanced first.
    pub fn level_order_recursive_with<F>(&self, mut visit: F)
    where
        F: FnMut(&Node<T>),
    {
        level_order(self.root().into_iter().collect(), &mut visit);
    }

    /// Returns the values breadth first, recursing once per level.
    pub fn level_order_recursive(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.collect_with(|tree, visit| tree.level_order_recursive_with(visit))
    }

    /// Gets a lazy iterator over the values in ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_bst::Tree;
    ///
    /// let tree = Tree::build([3, 1, 2]);
    /// let mut iter = tree.iter();
    ///
    /// assert_eq!(iter.next(), Some(&1));
    /// assert_eq!(iter.next(), Some(&2));
    /// assert_eq!(iter.next(), Some(&3));
    /// assert_eq!(iter.next(), None);
    /// ```
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.root())
    }

    /// Runs one of the visiting traversals and clones every visited value into a `Vec`.
    fn collect_with(&self, traverse: impl FnOnce(&Self, &mut dyn FnMut(&Node<T>))) -> Vec<T>
    where
        T: Clone,
    {
        let mut values = Vec::with_capacity(self.len());
        traverse(self, &mut |node| values.push(node.value().clone()));
        values
    }
}

fn inorder<T, F: FnMut(&Node<T>)>(root: Option<&Node<T>>, visit: &mut F) {
    let mut stack = Vec::new();
    let mut current = root;
    loop {
        while let Some(node) = current {
            stack.push(node);
            current = node.left();
        }

        let Some(node) = stack.pop() else {
            break;
        };
        visit(node);
        current = node.right();
    }
}

fn preorder<T, F: FnMut(&Node<T>)>(root: Option<&Node<T>>, visit: &mut F) {
    let mut stack: Vec<&Node<T>> = root.into_iter().collect();
    while let Some(node) = stack.pop() {
        visit(node);
        stack.extend(node.right());
        stack.extend(node.left());
    }
}

/// Walks node, right, left and then visits that sequence backwards.
fn postorder<T, F: FnMut(&Node<T>)>(root: Option<&Node<T>>, visit: &mut F) {
    let mut stack: Vec<&Node<T>> = root.into_iter().collect();
    let mut reversed = Vec::new();
    while let Some(node) = stack.pop() {
        reversed.push(node);
        stack.extend(node.left());
        stack.extend(node.right());
    }

    for node in reversed.into_iter().rev() {
        visit(node);
    }
}

/// Recurses once per level, so the call depth is the tree's height.
fn level_order<T, F: FnMut(&Node<T>)>(level: Vec<&Node<T>>, visit: &mut F) {
    if level.is_empty() {
        return;
    }

    let mut next = Vec::with_capacity(level.len() * 2);
    for node in level {
        visit(node);
        next.extend(node.left());
        next.extend(node.right());
    }

    level_order(next, visit);
}

/// An iterator over the values of a [`Tree`] in ascending order. Created by [`Tree::iter`].
///
/// Only the path down to the next value is held, so memory use is bounded by the tree's height.
pub struct Iter<'a, T> {
    stack: Vec<&'a Node<T>>,
}

impl<'a, T> Iter<'a, T> {
    fn new(root: Option<&'a Node<T>>) -> Self {
        let mut iter = Self { stack: Vec::new() };
        iter.push_left_spine(root);
        iter
    }

    fn push_left_spine(&mut self, mut node: Option<&'a Node<T>>) {
        while let Some(n) = node {
            self.stack.push(n);
            node = n.left();
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right());
        Some(node.value())
    }
}

impl<'a, T> IntoIterator for &'a Tree<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
