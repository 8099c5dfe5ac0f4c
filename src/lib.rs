//! An unbalanced binary search tree
//!
//! [`BinarySearchTree`] stores distinct, ordered values in [`Node`]s that each own their left and
//! right subtrees. For every node, all values in its left subtree are smaller than its own value
//! and all values in its right subtree are larger.
//!
//! The tree never rebalances itself. Its shape is decided entirely by insertion order, which makes
//! it useful for exploring how shape affects traversals and queries like
//! [`is_balanced`](BinarySearchTree::is_balanced).
//!
//! # Examples
//!
//! ```
//! use unbalanced_bst::bst;
//!
//! //     5
//! //   3   8
//! // 1   4
//! let mut tree = bst![5, 3, 8, 1, 4];
//!
//! assert_eq!(tree.dfs_in_order(), [&1, &3, &4, &5, &8]);
//! assert_eq!(tree.bfs(), [&5, &3, &8, &1, &4]);
//! assert!(tree.is_balanced());
//! assert_eq!(tree.second_highest(), Some(&5));
//!
//! // Values are never stored twice
//! assert!(tree.insert(4).is_err());
//! assert_eq!(tree.len(), 5);
//! ```

mod error;
pub mod tree;

#[cfg(test)]
mod testing;

pub use error::{DuplicateValue, UnorderedTree};
pub use tree::{BinarySearchTree, Node};

/// Creates a [`BinarySearchTree`] by inserting each value in the order given
///
/// Values that are already in the tree are skipped.
///
/// ```
/// use unbalanced_bst::bst;
///
/// let tree = bst![2, 1, 3, 1];
/// assert_eq!(tree.len(), 3);
/// assert_eq!(tree.dfs_pre_order(), [&2, &1, &3]);
/// ```
#[macro_export(local_inner_macros)]
macro_rules! bst {
    // trailing comma case
    ($($value:expr,)+) => (bst!($($value),+));

    ( $($value:expr),* ) => {
        {
            let mut _tree = $crate::BinarySearchTree::new();
            $(
                let _ = _tree.insert($value);
            )*
            _tree
        }
    };
}
