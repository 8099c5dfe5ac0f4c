//! The tree has no internal synchronization, so its auto traits must follow those of the stored
//! value type exactly.

#![warn(rust_2018_idioms)]

use std::cell::Cell;
use std::rc::Rc;

use static_assertions::{assert_impl_all, assert_not_impl_any};

use unbalanced_bst::{BinarySearchTree, DuplicateValue, Node, UnorderedTree};
use unbalanced_bst::tree::{IterInorder, IterLevelorder, IterPostorder, IterPreorder};

assert_impl_all!(BinarySearchTree<i32>: Send, Sync);
assert_not_impl_any!(BinarySearchTree<Rc<i32>>: Send, Sync);
assert_impl_all!(BinarySearchTree<Cell<i32>>: Send);
assert_not_impl_any!(BinarySearchTree<Cell<i32>>: Sync);

assert_impl_all!(Node<i32>: Send, Sync);
assert_not_impl_any!(Node<Rc<i32>>: Send, Sync);

assert_impl_all!(DuplicateValue<i32>: Send, Sync, std::error::Error);
assert_impl_all!(UnorderedTree<i32>: Send, Sync, std::error::Error);

assert_impl_all!(IterPreorder<'static, i32>: Send, Sync, Iterator);
assert_impl_all!(IterInorder<'static, i32>: Send, Sync, Iterator);
assert_impl_all!(IterPostorder<'static, i32>: Send, Sync, Iterator);
assert_impl_all!(IterLevelorder<'static, i32>: Send, Sync, Iterator);

// Iterators hold shared references, so they need `T: Sync` to be sent
assert_not_impl_any!(IterInorder<'static, Cell<i32>>: Send, Sync);
assert_not_impl_any!(IterLevelorder<'static, Rc<i32>>: Send, Sync);
