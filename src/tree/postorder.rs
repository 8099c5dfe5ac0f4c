use std::iter::FusedIterator;

use super::Node;

/// Lazy post-order traversal over the values of a tree
///
/// Created by [`BinarySearchTree::iter_postorder`](crate::BinarySearchTree::iter_postorder).
pub struct IterPostorder<'a, T> {
    /// Each node is paired with whether its children have already been pushed
    stack: Vec<(&'a Node<T>, bool)>,
}

impl<'a, T> IterPostorder<'a, T> {
    pub(super) fn new(root: Option<&'a Node<T>>) -> Self {
        Self {
            stack: root.map(|root| (root, false)).into_iter().collect(),
        }
    }
}

impl<'a, T> Iterator for IterPostorder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((node, expanded)) = self.stack.pop() {
            if expanded {
                return Some(node.value());
            }

            // The node goes back underneath its children so it is yielded after both of them
            self.stack.push((node, true));
            self.stack.extend(node.right().map(|right| (right, false)));
            self.stack.extend(node.left().map(|left| (left, false)));
        }

        None
    }
}

impl<'a, T> FusedIterator for IterPostorder<'a, T> {}
