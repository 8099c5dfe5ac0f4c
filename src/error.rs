use thiserror::Error;

use crate::tree::Node;

/// Returned by [`insert`](crate::BinarySearchTree::insert) when the value is already stored in
/// the tree
///
/// The tree is left unchanged. The rejected value is handed back and can be recovered with
/// [`into_inner`](DuplicateValue::into_inner).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("value is already present in the tree")]
pub struct DuplicateValue<T>(pub(crate) T);

impl<T> DuplicateValue<T> {
    /// Returns a reference to the value that was not inserted
    pub fn value(&self) -> &T {
        &self.0
    }

    /// Returns the value that was not inserted
    pub fn into_inner(self) -> T {
        self.0
    }
}

/// Returned by [`from_root`](crate::BinarySearchTree::from_root) when the given nodes do not
/// satisfy the BST properties
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("nodes are not in strictly ascending order from left to right")]
pub struct UnorderedTree<T> {
    root: Node<T>,
}

impl<T> UnorderedTree<T> {
    pub(crate) fn new(root: Node<T>) -> Self {
        Self {root}
    }

    /// Returns the rejected root node so it can be rebuilt
    pub fn into_root(self) -> Node<T> {
        self.root
    }
}
