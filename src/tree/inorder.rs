use std::iter::FusedIterator;

use super::Node;

/// Lazy in-order traversal over the values of a tree, yielding them in ascending order
///
/// Created by [`BinarySearchTree::iter_inorder`](crate::BinarySearchTree::iter_inorder).
pub struct IterInorder<'a, T> {
    /// Nodes whose left subtree has been (or is being) visited but which have not been yielded
    stack: Vec<&'a Node<T>>,
}

impl<'a, T> IterInorder<'a, T> {
    pub(crate) fn new(root: Option<&'a Node<T>>) -> Self {
        let mut iter = Self {stack: Vec::new()};
        iter.push_left_spine(root);
        iter
    }

    fn push_left_spine(&mut self, mut current: Option<&'a Node<T>>) {
        while let Some(node) = current {
            self.stack.push(node);
            current = node.left();
        }
    }
}

impl<'a, T> Iterator for IterInorder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right());
        Some(node.value())
    }
}

impl<'a, T> FusedIterator for IterInorder<'a, T> {}
