use std::collections::VecDeque;
use std::iter::FusedIterator;

use super::Node;

/// Lazy level-order (breadth-first) traversal over the values of a tree
///
/// Values are yielded level by level starting at the root, left to right within a level.
///
/// Created by [`BinarySearchTree::iter_levelorder`](crate::BinarySearchTree::iter_levelorder).
pub struct IterLevelorder<'a, T> {
    queue: VecDeque<&'a Node<T>>,
}

impl<'a, T> IterLevelorder<'a, T> {
    pub(super) fn new(root: Option<&'a Node<T>>) -> Self {
        // An empty tree starts with an empty queue
        Self {
            queue: root.into_iter().collect(),
        }
    }
}

impl<'a, T> Iterator for IterLevelorder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.queue.pop_front()?;
        self.queue.extend(node.left());
        self.queue.extend(node.right());
        Some(node.value())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        // Every queued node is yielded, its descendants are unknown
        (self.queue.len(), None)
    }
}

impl<'a, T> FusedIterator for IterLevelorder<'a, T> {}
