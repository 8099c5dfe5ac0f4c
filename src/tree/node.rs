/// A single node of the binary search tree
///
/// Each node exclusively owns its left and right subtrees. Nodes can be assembled by hand with
/// [`Node::with_children`] and handed to [`BinarySearchTree::from_root`], which checks the BST
/// properties before adopting them.
///
/// [`BinarySearchTree::from_root`]: crate::BinarySearchTree::from_root
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node<T> {
    value: T,
    left: Option<Box<Node<T>>>,
    right: Option<Box<Node<T>>>,
}

impl<T> Node<T> {
    /// Creates a leaf node (a node with no children)
    pub fn new(value: T) -> Self {
        Self {
            value,
            left: None,
            right: None,
        }
    }

    /// Creates a node with the given subtrees
    ///
    /// # Examples
    ///
    /// ```
    /// use unbalanced_bst::Node;
    ///
    /// //   2
    /// // 1   3
    /// let root = Node::with_children(2, Some(Node::new(1)), Some(Node::new(3)));
    /// assert_eq!(root.left().map(Node::value), Some(&1));
    /// assert_eq!(root.right().map(Node::value), Some(&3));
    /// ```
    pub fn with_children(value: T, left: Option<Self>, right: Option<Self>) -> Self {
        Self {
            value,
            left: left.map(Box::new),
            right: right.map(Box::new),
        }
    }

    /// Returns the value stored in this node
    pub fn value(&self) -> &T {
        &self.value
    }

    /// Returns true if this node has a left subtree
    pub fn has_left(&self) -> bool {
        self.left.is_some()
    }

    /// Returns true if this node has a right subtree
    pub fn has_right(&self) -> bool {
        self.right.is_some()
    }

    /// Returns true if this node has no children
    pub fn is_leaf(&self) -> bool {
        !self.has_left() && !self.has_right()
    }

    /// Returns the left child node (subtree) of this node, if any
    pub fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    /// Returns the right child node (subtree) of this node, if any
    pub fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }

    pub(crate) fn left_mut(&mut self) -> Option<&mut Self> {
        self.left.as_deref_mut()
    }

    pub(crate) fn right_mut(&mut self) -> Option<&mut Self> {
        self.right.as_deref_mut()
    }

    /// New node MUST maintain BST property
    pub(crate) fn set_left(&mut self, new_node: Self) {
        debug_assert!(self.left.is_none());
        self.left = Some(Box::new(new_node));
    }

    /// New node MUST maintain BST property
    pub(crate) fn set_right(&mut self, new_node: Self) {
        debug_assert!(self.right.is_none());
        self.right = Some(Box::new(new_node));
    }

    pub(crate) fn take_left(&mut self) -> Option<Self> {
        self.left.take().map(|node| *node)
    }

    pub(crate) fn take_right(&mut self) -> Option<Self> {
        self.right.take().map(|node| *node)
    }
}
