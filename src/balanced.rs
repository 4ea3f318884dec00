//! A height-balanced BST of unique values. The tree is laid out perfectly balanced when it is
//! built (or rebuilt) but `insert` and `delete` do not restructure it, so it can drift out of
//! balance. [`Tree::is_balanced`] reports when that has happened and [`Tree::rebalance`] rebuilds
//! the tree from its sorted contents.
//!
//! # Examples
//!
//! ```
//! use balanced_bst::Tree;
//!
//! let mut tree = Tree::build([1, 2, 3, 4, 5, 6, 7]);
//! assert!(tree.is_balanced());
//!
//! // Inserting ascending values grows a long right spine.
//! for x in 8..=11 {
//!     tree.insert(x);
//! }
//! assert!(!tree.is_balanced());
//!
//! // Rebuilding keeps the contents and restores the shape.
//! tree.rebalance();
//! assert!(tree.is_balanced());
//! assert_eq!(tree.inorder(), (1..=11).collect::<Vec<_>>());
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::ptr;
use std::str::FromStr;

use tracing::{debug, trace};

use crate::error::{Error, Result};
use crate::util::sorted_unique;

/// An owning slot for a child. `None` marks the empty pointer at the bottom of a subtree.
type Link<T> = Option<Box<Node<T>>>;

/// A Binary Search Tree holding unique values. This can be used for inserting, finding, and
/// deleting values as well as walking them in several orders.
///
/// Every operation walks the tree with loops and explicit stacks, so list shaped trees left
/// behind by ascending inserts are fine to query and [`rebalance`][Tree::rebalance]. The derived
/// `Clone`, `PartialEq` and `Debug` impls (and [`Diagram`][crate::Diagram]) still recurse once
/// per level.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tree<T> {
    root: Link<T>,
    len: usize,
}

/// A single element of a [`Tree`]. Each `Node` exclusively owns its children.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Node<T> {
    value: T,
    left: Link<T>,
    right: Link<T>,
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Tree<T> {
    // The derived drop recurses once per level which overflows on list shaped trees.
    fn drop(&mut self) {
        let mut stack: Vec<Box<Node<T>>> = self.root.take().into_iter().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
    }
}

impl<T> Tree<T> {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// Builds a balanced tree out of arbitrary values. Duplicates are dropped and the rest are
    /// sorted before being laid out.
    ///
    /// Each subtree is rooted at the middle of its range of sorted values. For even sized ranges
    /// the lower of the two middle values is picked, so `[1, 2, 3, 4]` is rooted at `2`.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_bst::Tree;
    ///
    /// let tree = Tree::build([4, 3, 2, 1, 1]);
    ///
    /// assert_eq!(tree.len(), 4);
    /// assert_eq!(tree.root().map(|n| *n.value()), Some(2));
    /// assert_eq!(Tree::height(tree.root()), 2);
    /// ```
    pub fn build<I>(values: I) -> Self
    where
        T: Ord,
        I: IntoIterator<Item = T>,
    {
        let values = sorted_unique(values);
        let len = values.len();
        let root = build_sorted(len, &mut values.into_iter());
        debug!(len, "built balanced tree");

        Self { root, len }
    }

    /// Returns the root node, if any, for read-only inspection.
    pub fn root(&self) -> Option<&Node<T>> {
        self.root.as_deref()
    }

    /// Returns how many values are stored in the tree.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` when the tree holds no values.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Finds the node holding the given value. If no node has it, `None` is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_bst::Tree;
    ///
    /// let tree = Tree::build([1, 2, 3]);
    ///
    /// assert_eq!(tree.find(&3).map(|n| *n.value()), Some(3));
    /// assert!(tree.find(&42).is_none());
    /// ```
    pub fn find(&self, value: &T) -> Option<&Node<T>>
    where
        T: Ord,
    {
        let mut current = self.root();
        while let Some(node) = current {
            current = match value.cmp(&node.value) {
                Ordering::Less => node.left(),
                Ordering::Equal => return Some(node),
                Ordering::Greater => node.right(),
            };
        }

        None
    }

    /// Returns `true` if the tree holds the given value.
    pub fn contains(&self, value: &T) -> bool
    where
        T: Ord,
    {
        self.find(value).is_some()
    }

    /// Inserts the value as a new leaf. Inserting a value that is already present does nothing.
    /// Returns whether a node was added.
    ///
    /// The tree is not rebalanced afterwards.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_bst::Tree;
    ///
    /// let mut tree = Tree::new();
    ///
    /// assert!(tree.insert(1));
    /// assert!(!tree.insert(1));
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn insert(&mut self, value: T) -> bool
    where
        T: Ord,
    {
        let inserted = insert(&mut self.root, value);
        if inserted {
            self.len += 1;
        } else {
            trace!("ignored duplicate insert");
        }
        inserted
    }

    /// Deletes the node holding the given value. Returns whether a node was removed. If the tree
    /// does not contain the value, nothing happens.
    ///
    /// A node with two children takes the value of its in-order successor (the smallest value in
    /// its right subtree) and the successor's node is removed instead.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_bst::Tree;
    ///
    /// let mut tree = Tree::build([1, 2, 3]);
    ///
    /// assert!(tree.delete(&2));
    /// assert!(!tree.delete(&2));
    /// assert_eq!(tree.inorder(), vec![1, 3]);
    /// ```
    pub fn delete(&mut self, value: &T) -> bool
    where
        T: Ord,
    {
        let deleted = delete(&mut self.root, value);
        if deleted {
            self.len -= 1;
        } else {
            trace!("ignored delete of missing value");
        }
        deleted
    }

    /// Gets the height of the subtree rooted at `node`: `-1` for no node, `0` for a leaf and one
    /// more than the taller child otherwise.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_bst::Tree;
    ///
    /// let tree = Tree::build([1, 2, 3, 4]);
    ///
    /// assert_eq!(Tree::height(tree.root()), 2);
    /// assert_eq!(Tree::height(tree.find(&4)), 0);
    /// assert_eq!(Tree::height(tree.find(&42)), -1);
    /// ```
    pub fn height(node: Option<&Node<T>>) -> isize {
        node.map_or(-1, Node::height)
    }

    /// Gets the number of edges between the root and `node`, or `-1` if `node` is `None` or is
    /// not part of this tree.
    ///
    /// The node is located by descending from the root comparing values. The node reached must
    /// also be the very node passed in, so a node borrowed from another tree holding an equal
    /// value is reported as missing.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_bst::Tree;
    ///
    /// let tree = Tree::build([1, 2, 3]);
    /// let other = Tree::build([1, 2, 3]);
    ///
    /// assert_eq!(tree.depth(tree.root()), 0);
    /// assert_eq!(tree.depth(tree.find(&3)), 1);
    /// assert_eq!(tree.depth(other.find(&3)), -1);
    /// ```
    pub fn depth(&self, node: Option<&Node<T>>) -> isize
    where
        T: Ord,
    {
        let Some(target) = node else {
            return -1;
        };

        let mut current = self.root();
        let mut depth = 0;
        while let Some(n) = current {
            current = match target.value.cmp(&n.value) {
                Ordering::Less => n.left(),
                Ordering::Equal if ptr::eq(n, target) => return depth,
                Ordering::Equal => return -1,
                Ordering::Greater => n.right(),
            };
            depth += 1;
        }

        -1
    }

    /// Returns `true` if, for every node, the heights of its two subtrees differ by at most one.
    /// An empty tree is balanced.
    pub fn is_balanced(&self) -> bool {
        balanced_height(self.root()).is_some()
    }

    /// Rebuilds the tree so that it is balanced again. The values are pulled out in order, which
    /// is already sorted, and laid out exactly as [`Tree::build`] would.
    pub fn rebalance(&mut self)
    where
        T: Ord,
    {
        let mut values = Vec::with_capacity(self.len);
        drain_inorder(self.root.take(), &mut values);

        self.len = values.len();
        self.root = build_sorted(self.len, &mut values.into_iter());
        debug!(len = self.len, "rebalanced tree");
    }
}

impl<T: Ord> FromIterator<T> for Tree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::build(iter)
    }
}

impl<T: Ord> Extend<T> for Tree<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

/// Parses values separated by commas and/or whitespace and builds a balanced tree out of them.
///
/// # Examples
///
/// ```
/// use balanced_bst::{Error, Tree};
///
/// let tree: Tree<i32> = "5, 3 8,3,1".parse().unwrap();
/// assert_eq!(tree.inorder(), vec![1, 3, 5, 8]);
///
/// let err = "1, two".parse::<Tree<i32>>().unwrap_err();
/// assert!(matches!(err, Error::InvalidInput { position: 1, .. }));
/// ```
impl<T> FromStr for Tree<T>
where
    T: Ord + FromStr,
    T::Err: fmt::Display,
{
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let values = s
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|token| !token.is_empty())
            .enumerate()
            .map(|(position, token)| {
                token.parse().map_err(|err: T::Err| Error::InvalidInput {
                    position,
                    token: token.to_string(),
                    reason: err.to_string(),
                })
            })
            .collect::<Result<Vec<T>>>()?;

        Ok(Self::build(values))
    }
}

impl<T> Node<T> {
    fn new_boxed(value: T) -> Box<Self> {
        Box::new(Self {
            value,
            left: None,
            right: None,
        })
    }

    /// The value stored in this node.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// The root of the left subtree, holding smaller values.
    pub fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    /// The root of the right subtree, holding larger values.
    pub fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }

    /// Returns `true` if this node has no children.
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// How many edges are on the longest path from this node down to a leaf. A leaf has a
    /// height of 0.
    pub fn height(&self) -> isize {
        let mut level = vec![self];
        let mut height = -1;
        while !level.is_empty() {
            height += 1;
            level = level
                .iter()
                .flat_map(|n| n.left().into_iter().chain(n.right()))
                .collect();
        }
        height
    }
}

/// Lays out the next `len` values of an ascending iterator as a balanced subtree. The left
/// subtree gets `(len - 1) / 2` values, i.e. the root is the lower middle of the range.
fn build_sorted<T, I>(len: usize, values: &mut I) -> Link<T>
where
    I: Iterator<Item = T>,
{
    if len == 0 {
        return None;
    }

    let left_len = (len - 1) / 2;
    let left = build_sorted(left_len, values);
    let value = values.next()?;
    let right = build_sorted(len - 1 - left_len, values);

    Some(Box::new(Node { value, left, right }))
}

/// Walks down from `link` to the slot that holds `value`, or to the empty slot where it would be
/// inserted.
fn slot_of<'a, T: Ord>(mut link: &'a mut Link<T>, value: &T) -> &'a mut Link<T> {
    loop {
        let ordering = match link.as_deref() {
            Some(node) => value.cmp(&node.value),
            None => return link,
        };
        if ordering == Ordering::Equal {
            return link;
        }

        if let Some(node) = link {
            link = match ordering {
                Ordering::Less => &mut node.left,
                _ => &mut node.right,
            };
        }
    }
}

fn insert<T: Ord>(link: &mut Link<T>, value: T) -> bool {
    let slot = slot_of(link, &value);
    if slot.is_some() {
        return false;
    }

    *slot = Some(Node::new_boxed(value));
    true
}

fn delete<T: Ord>(link: &mut Link<T>, value: &T) -> bool {
    let slot = slot_of(link, value);
    let Some(node) = slot.as_mut() else {
        return false;
    };

    match (node.left.is_some(), node.right.is_some()) {
        (true, true) => {
            if let Some(successor) = take_min(&mut node.right) {
                node.value = successor;
            }
        }
        // Zero or one child: the child (if any) takes this node's place.
        (false, _) => {
            let right = node.right.take();
            *slot = right;
        }
        (true, false) => {
            let left = node.left.take();
            *slot = left;
        }
    }
    true
}

/// Unlinks the smallest node of the subtree and returns its value. The smallest node has no
/// left child so its right child is moved up into its slot.
fn take_min<T>(mut link: &mut Link<T>) -> Option<T> {
    while link.as_ref()?.left.is_some() {
        if let Some(node) = link {
            link = &mut node.left;
        }
    }

    let node = link.take()?;
    let Node { value, right, .. } = *node;
    *link = right;
    Some(value)
}

/// Moves every value out of the subtree in ascending order.
fn drain_inorder<T>(link: Link<T>, values: &mut Vec<T>) {
    let mut stack: Vec<Box<Node<T>>> = Vec::new();
    let mut current = link;
    loop {
        while let Some(mut node) = current {
            current = node.left.take();
            stack.push(node);
        }

        let Some(node) = stack.pop() else {
            break;
        };
        let Node { value, right, .. } = *node;
        values.push(value);
        current = right;
    }
}

/// Returns the height of a balanced subtree, or `None` as soon as any unbalanced subtree is seen.
///
/// Subtrees are finished in post-order; `heights` holds the heights of finished subtrees whose
/// parent has not been finished yet.
fn balanced_height<T>(root: Option<&Node<T>>) -> Option<isize> {
    let mut heights: Vec<isize> = Vec::new();
    let mut stack = vec![(root, false)];
    while let Some((node, children_done)) = stack.pop() {
        match node {
            None => heights.push(-1),
            Some(node) if !children_done => {
                stack.push((Some(node), true));
                stack.push((node.right(), false));
                stack.push((node.left(), false));
            }
            Some(_) => {
                let right = heights.pop()?;
                let left = heights.pop()?;
                if left.abs_diff(right) > 1 {
                    return None;
                }
                heights.push(left.max(right) + 1);
            }
        }
    }

    heights.pop()
}
