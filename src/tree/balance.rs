use tracing::instrument;

use super::{BinarySearchTree, Node};

/// Result of measuring a subtree while checking that it is balanced
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SubtreeHeight {
    /// Every node in the subtree is balanced and the subtree has this height
    Balanced(usize),
    /// Some node in the subtree has children whose heights differ by more than one
    Unbalanced,
}

impl<T> BinarySearchTree<T> {
    /// Returns true if, at every node, the heights of the left and right subtrees differ by at
    /// most one
    ///
    /// An empty tree is balanced. Stops measuring as soon as any unbalanced subtree is found.
    ///
    /// Time complexity: `O(n)`
    ///
    /// # Examples
    ///
    /// ```
    /// use unbalanced_bst::bst;
    ///
    /// assert!(bst![2, 1, 3].is_balanced());
    /// // Ascending insertion builds a chain leaning to the right
    /// assert!(!bst![1, 2, 3].is_balanced());
    /// ```
    #[instrument(level = "trace", skip_all, ret)]
    pub fn is_balanced(&self) -> bool {
        match checked_height(self.root()) {
            SubtreeHeight::Balanced(_) => true,
            SubtreeHeight::Unbalanced => false,
        }
    }

    /// Returns the number of nodes on the longest path from the root to a leaf
    ///
    /// An empty tree has height 0 and a tree with a single node has height 1.
    ///
    /// Time complexity: `O(n)`
    #[instrument(level = "trace", skip_all, ret)]
    pub fn height(&self) -> usize {
        height(self.root())
    }
}

fn height<T>(node: Option<&Node<T>>) -> usize {
    node.map_or(0, |node| height(node.left()).max(height(node.right())) + 1)
}

/// Post-order height computation that bails out on the first unbalanced subtree
fn checked_height<T>(node: Option<&Node<T>>) -> SubtreeHeight {
    let node = match node {
        Some(node) => node,
        None => return SubtreeHeight::Balanced(0),
    };

    let left = match checked_height(node.left()) {
        SubtreeHeight::Balanced(height) => height,
        SubtreeHeight::Unbalanced => return SubtreeHeight::Unbalanced,
    };
    let right = match checked_height(node.right()) {
        SubtreeHeight::Balanced(height) => height,
        SubtreeHeight::Unbalanced => return SubtreeHeight::Unbalanced,
    };

    if left.max(right) - left.min(right) > 1 {
        SubtreeHeight::Unbalanced
    } else {
        SubtreeHeight::Balanced(left.max(right) + 1)
    }
}
