mod balance;
mod node;
mod preorder;
mod inorder;
mod postorder;
mod levelorder;

pub use node::*;
pub use preorder::*;
pub use inorder::*;
pub use postorder::*;
pub use levelorder::*;

use std::cmp::Ordering;
use std::borrow::Borrow;
use std::iter::FromIterator;

use tracing::{debug, trace};

use crate::error::{DuplicateValue, UnorderedTree};

/// An unbalanced binary search tree (BST)
///
/// BST properties: For each node with value `v`:
/// - The value of each node in the left subtree is less than `v`
/// - The value of each node in the right subtree is greater than `v`
///
/// Duplicate values are not allowed. Inserting a value that already exists in the tree does not
/// modify the tree and returns a [`DuplicateValue`] error instead.
///
/// Nodes are placed exactly where the insertion order puts them. No rebalancing is ever
/// performed, so inserting values in sorted order produces a tree shaped like a linked list.
#[derive(Debug, Clone)]
pub struct BinarySearchTree<T> {
    root: Option<Node<T>>,
    len: usize,
}

impl<T> Default for BinarySearchTree<T> {
    fn default() -> Self {
        Self {
            root: None,
            len: 0,
        }
    }
}

impl<T> Drop for BinarySearchTree<T> {
    fn drop(&mut self) {
        // Unlink nodes one at a time so that dropping a degenerate tree does not recurse once per
        // level of the tree
        let mut stack: Vec<Node<T>> = self.root.take().into_iter().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.take_left());
            stack.extend(node.take_right());
        }
    }
}

impl<T: PartialEq> PartialEq for BinarySearchTree<T> {
    fn eq(&self, other: &Self) -> bool {
        // Two trees holding the same values may be shaped differently depending on insertion
        // order. In-order traversal yields the values sorted, so comparing those is enough.

        if self.len() != other.len() {
            return false;
        }

        self.iter_inorder().zip(other.iter_inorder()).all(|(a, b)| a.eq(b))
    }
}

impl<T: Eq> Eq for BinarySearchTree<T> {}

impl<T> BinarySearchTree<T> {
    /// Creates an empty `BinarySearchTree`
    ///
    /// # Examples
    ///
    /// ```
    /// use unbalanced_bst::BinarySearchTree;
    /// let tree: BinarySearchTree<i32> = BinarySearchTree::new();
    /// assert!(tree.is_empty());
    /// ```
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of values in the tree (i.e. the number of nodes)
    ///
    /// Time complexity: `O(1)`
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the tree has no nodes
    ///
    /// Time complexity: `O(1)`
    pub fn is_empty(&self) -> bool {
        debug_assert!(self.len != 0 || self.root.is_none());
        self.len == 0
    }

    /// Removes every value from the tree
    pub fn clear(&mut self) {
        *self = Self::new();
    }

    /// Returns the root node of the tree, or `None` if the tree is empty
    ///
    /// This is a low-level API meant to be used for implementing custom traversals.
    pub fn root(&self) -> Option<&Node<T>> {
        self.root.as_ref()
    }

    /// Returns the smallest value in the tree
    ///
    /// Time complexity: `O(height)`
    pub fn min(&self) -> Option<&T> {
        let mut node = self.root()?;
        while let Some(left) = node.left() {
            node = left;
        }

        Some(node.value())
    }

    /// Returns the largest value in the tree
    ///
    /// Time complexity: `O(height)`
    pub fn max(&self) -> Option<&T> {
        self.root().map(|root| max_node(root).value())
    }

    /// Returns the second largest value in the tree, or `None` if the tree has fewer than two
    /// values
    ///
    /// Use [`is_empty`](Self::is_empty) to tell an empty tree apart from a tree with a single
    /// value, since both return `None`.
    ///
    /// Time complexity: `O(height)`
    ///
    /// # Examples
    ///
    /// ```
    /// use unbalanced_bst::bst;
    ///
    /// // 8 is the largest value and its parent 7 is the next largest
    /// assert_eq!(bst![5, 3, 7, 8].second_highest(), Some(&7));
    /// // 7 is the largest value and has a left subtree holding 6
    /// assert_eq!(bst![5, 3, 7, 6].second_highest(), Some(&6));
    /// assert_eq!(bst![5].second_highest(), None);
    /// ```
    pub fn second_highest(&self) -> Option<&T> {
        // Value of the last node we moved right from
        let mut parent = None;
        let mut current = self.root();
        while let Some(node) = current {
            match (node.left(), node.right()) {
                (_, Some(right)) => {
                    parent = Some(node.value());
                    current = Some(right);
                },

                // `node` is the largest value, so the next largest is the largest value below it
                (Some(left), None) => return Some(max_node(left).value()),

                // `node` is the largest value and a leaf, so the next largest is its parent
                (None, None) => return parent,
            }
        }

        None
    }

    /// Returns the values of the tree in pre-order: each node comes before its left subtree,
    /// which comes before its right subtree
    ///
    /// # Examples
    ///
    /// ```
    /// use unbalanced_bst::bst;
    ///
    /// assert_eq!(bst![5, 3, 8].dfs_pre_order(), [&5, &3, &8]);
    /// ```
    pub fn dfs_pre_order(&self) -> Vec<&T> {
        let mut values = Vec::with_capacity(self.len);
        collect_pre_order(self.root(), &mut values);
        values
    }

    /// Returns the values of the tree in-order: left subtree, then the node, then the right
    /// subtree. This is always ascending order.
    pub fn dfs_in_order(&self) -> Vec<&T> {
        let mut values = Vec::with_capacity(self.len);
        collect_in_order(self.root(), &mut values);
        values
    }

    /// Returns the values of the tree in post-order: both subtrees (left first) before the node
    ///
    /// # Examples
    ///
    /// ```
    /// use unbalanced_bst::bst;
    ///
    /// assert_eq!(bst![5, 3, 8].dfs_post_order(), [&3, &8, &5]);
    /// ```
    pub fn dfs_post_order(&self) -> Vec<&T> {
        let mut values = Vec::with_capacity(self.len);
        collect_post_order(self.root(), &mut values);
        values
    }

    /// Returns the values of the tree level by level, left to right within each level
    ///
    /// # Examples
    ///
    /// ```
    /// use unbalanced_bst::bst;
    ///
    /// //     5
    /// //   3   8
    /// // 1   4
    /// assert_eq!(bst![5, 3, 8, 1, 4].bfs(), [&5, &3, &8, &1, &4]);
    /// ```
    pub fn bfs(&self) -> Vec<&T> {
        self.iter_levelorder().collect()
    }

    /// Performs a pre-order traversal of the tree
    pub fn iter_preorder(&self) -> IterPreorder<T> {
        IterPreorder::new(self.root())
    }

    /// Performs an in-order traversal of the tree
    pub fn iter_inorder(&self) -> IterInorder<T> {
        IterInorder::new(self.root())
    }

    /// Performs a post-order traversal of the tree
    pub fn iter_postorder(&self) -> IterPostorder<T> {
        IterPostorder::new(self.root())
    }

    /// Performs a level-order (breadth-first) traversal of the tree
    pub fn iter_levelorder(&self) -> IterLevelorder<T> {
        IterLevelorder::new(self.root())
    }
}

impl<T: Ord> BinarySearchTree<T> {
    /// Creates a tree from a pre-built root node
    ///
    /// Returns an error holding `root` if its values are not in strictly ascending order from
    /// left to right.
    ///
    /// # Examples
    ///
    /// ```
    /// use unbalanced_bst::{BinarySearchTree, Node};
    ///
    /// let root = Node::with_children(2, Some(Node::new(1)), Some(Node::new(3)));
    /// let tree = BinarySearchTree::from_root(root).unwrap();
    /// assert_eq!(tree.len(), 3);
    ///
    /// let root = Node::with_children(2, Some(Node::new(3)), None);
    /// assert!(BinarySearchTree::from_root(root).is_err());
    /// ```
    pub fn from_root(root: Node<T>) -> Result<Self, UnorderedTree<T>> {
        match ordered_len(&root) {
            Some(len) => Ok(Self {
                root: Some(root),
                len,
            }),

            None => {
                debug!("rejected root with out of order values");
                Err(UnorderedTree::new(root))
            },
        }
    }

    /// Returns `true` if the tree contains the specified value
    ///
    /// The value may be any borrowed form of the tree's value type, but the ordering on the
    /// borrowed form must match the ordering on the value type.
    ///
    /// Time complexity: `O(height)`
    pub fn contains<Q>(&self, value: &Q) -> bool
        where T: Borrow<Q>,
              Q: Ord + ?Sized,
    {
        self.find(value).is_some()
    }

    /// Returns the node holding the given value, or `None` if no such value exists in the tree
    ///
    /// The value may be any borrowed form of the tree's value type, but the ordering on the
    /// borrowed form must match the ordering on the value type.
    ///
    /// Time complexity: `O(height)`
    ///
    /// # Examples
    ///
    /// ```
    /// use unbalanced_bst::bst;
    ///
    /// let tree = bst![String::from("b"), String::from("a")];
    /// let node = tree.find("b").unwrap();
    /// assert_eq!(node.left().map(|node| node.value().as_str()), Some("a"));
    /// assert!(tree.find("c").is_none());
    /// ```
    pub fn find<Q>(&self, value: &Q) -> Option<&Node<T>>
        where T: Borrow<Q>,
              Q: Ord + ?Sized,
    {
        let mut current = self.root();
        while let Some(node) = current {
            match value.cmp(node.value().borrow()) {
                Ordering::Less => current = node.left(),
                Ordering::Greater => current = node.right(),
                Ordering::Equal => return Some(node),
            }
        }

        None
    }

    /// Same as [`find`](Self::find), but walks the tree recursively
    ///
    /// Recursion depth is the height of the tree.
    pub fn find_recursive<Q>(&self, value: &Q) -> Option<&Node<T>>
        where T: Borrow<Q>,
              Q: Ord + ?Sized,
    {
        find_node(self.root(), value)
    }

    /// Inserts a new value into the tree as a new leaf node
    ///
    /// Returns the tree so that insertions can be chained. If the value is already present, the
    /// tree is not modified and the value is handed back in a [`DuplicateValue`] error.
    ///
    /// Time complexity: `O(height)`
    ///
    /// # Examples
    ///
    /// ```
    /// use unbalanced_bst::{BinarySearchTree, DuplicateValue};
    ///
    /// # fn main() -> Result<(), DuplicateValue<i32>> {
    /// let mut tree = BinarySearchTree::new();
    /// tree.insert(37)?.insert(12)?.insert(50)?;
    /// assert_eq!(tree.len(), 3);
    ///
    /// let err = tree.insert(12).unwrap_err();
    /// assert_eq!(err.into_inner(), 12);
    /// assert_eq!(tree.len(), 3);
    /// # Ok(())
    /// # }
    /// ```
    pub fn insert(&mut self, value: T) -> Result<&mut Self, DuplicateValue<T>> {
        let mut current = match self.root.as_mut() {
            Some(root) => Some(root),
            None => {
                debug_assert_eq!(self.len, 0);
                self.root = Some(Node::new(value));
                self.len = 1;

                trace!(len = self.len, "inserted root");
                return Ok(self);
            },
        };

        while let Some(node) = current.take() {
            match value.cmp(node.value()) {
                Ordering::Less => {
                    // Value not found, insert where we stopped
                    if !node.has_left() {
                        node.set_left(Node::new(value));
                        break;
                    }
                    current = node.left_mut();
                },

                Ordering::Greater => {
                    // Value not found, insert where we stopped
                    if !node.has_right() {
                        node.set_right(Node::new(value));
                        break;
                    }
                    current = node.right_mut();
                },

                Ordering::Equal => {
                    trace!("rejected duplicate value");
                    return Err(DuplicateValue(value));
                },
            }
        }

        self.len += 1;
        trace!(len = self.len, "inserted leaf");
        Ok(self)
    }

    /// Same as [`insert`](Self::insert), but rebuilds the path from the root down recursively
    ///
    /// Recursion depth is the height of the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use unbalanced_bst::BinarySearchTree;
    ///
    /// let mut tree = BinarySearchTree::new();
    /// tree.insert_recursive(2).unwrap().insert_recursive(1).unwrap();
    /// assert!(tree.insert_recursive(2).is_err());
    /// assert_eq!(tree.dfs_pre_order(), [&2, &1]);
    /// ```
    pub fn insert_recursive(&mut self, value: T) -> Result<&mut Self, DuplicateValue<T>> {
        let mut rejected = None;
        self.root = Some(insert_node(self.root.take(), value, &mut rejected));

        match rejected {
            Some(value) => {
                trace!("rejected duplicate value");
                Err(DuplicateValue(value))
            },

            None => {
                self.len += 1;
                trace!(len = self.len, "inserted leaf");
                Ok(self)
            },
        }
    }
}

impl<T: Ord> Extend<T> for BinarySearchTree<T> {
    /// Inserts every value, skipping values that are already present
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            // Duplicates are ignored, just like in `BTreeSet`
            let _ = self.insert(value);
        }
    }
}

impl<T: Ord> FromIterator<T> for BinarySearchTree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

/// Returns the rightmost node of the subtree rooted at `node`
fn max_node<T>(mut node: &Node<T>) -> &Node<T> {
    while let Some(right) = node.right() {
        node = right;
    }

    node
}

/// Returns the number of nodes under `root` if every value is strictly greater than the value
/// before it in-order
fn ordered_len<T: Ord>(root: &Node<T>) -> Option<usize> {
    let mut len = 0;
    let mut prev: Option<&T> = None;
    for value in IterInorder::new(Some(root)) {
        if prev.map_or(false, |prev| prev >= value) {
            return None;
        }

        prev = Some(value);
        len += 1;
    }

    Some(len)
}

fn find_node<'a, T, Q>(node: Option<&'a Node<T>>, value: &Q) -> Option<&'a Node<T>>
    where T: Borrow<Q>,
          Q: Ord + ?Sized,
{
    let node = node?;
    match value.cmp(node.value().borrow()) {
        Ordering::Less => find_node(node.left(), value),
        Ordering::Greater => find_node(node.right(), value),
        Ordering::Equal => Some(node),
    }
}

/// Inserts `value` into the subtree `node` and returns the new root of that subtree
///
/// If `value` is already present, the subtree is returned unchanged and `value` is moved into
/// `rejected`.
fn insert_node<T: Ord>(node: Option<Node<T>>, value: T, rejected: &mut Option<T>) -> Node<T> {
    let mut node = match node {
        Some(node) => node,
        None => return Node::new(value),
    };

    match value.cmp(node.value()) {
        Ordering::Less => {
            let left = insert_node(node.take_left(), value, rejected);
            node.set_left(left);
        },

        Ordering::Greater => {
            let right = insert_node(node.take_right(), value, rejected);
            node.set_right(right);
        },

        Ordering::Equal => *rejected = Some(value),
    }

    node
}

fn collect_pre_order<'a, T>(node: Option<&'a Node<T>>, values: &mut Vec<&'a T>) {
    if let Some(node) = node {
        values.push(node.value());
        collect_pre_order(node.left(), values);
        collect_pre_order(node.right(), values);
    }
}

fn collect_in_order<'a, T>(node: Option<&'a Node<T>>, values: &mut Vec<&'a T>) {
    if let Some(node) = node {
        collect_in_order(node.left(), values);
        values.push(node.value());
        collect_in_order(node.right(), values);
    }
}

fn collect_post_order<'a, T>(node: Option<&'a Node<T>>, values: &mut Vec<&'a T>) {
    if let Some(node) = node {
        collect_post_order(node.left(), values);
        collect_post_order(node.right(), values);
        values.push(node.value());
    }
}
