//! An unbalanced Binary Search Tree of plain values. Values are ordered by
//! their `Ord` implementation, inserting a value that is already present does
//! nothing, and deletion promotes the in-order successor.
//!
//! # Examples
//!
//! ```
//! use classic_collections::tree::Tree;
//!
//! let mut tree = Tree::new();
//! for value in [5, 3, 7] {
//!     tree.insert(value);
//! }
//!
//! assert_eq!(tree.in_order_traversal(), [&3, &5, &7]);
//! assert_eq!(tree.pre_order_traversal(), [&5, &3, &7]);
//! assert_eq!(tree.post_order_traversal(), [&3, &7, &5]);
//!
//! // Deleting a value hands it back.
//! assert_eq!(tree.delete(&5), Some(5));
//! assert_eq!(tree.in_order_traversal(), [&3, &7]);
//! assert_eq!(tree.root().map(|root| root.value()), Some(&7));
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::iter::FusedIterator;

/// An owned, possibly empty subtree.
pub type Link<T> = Option<Box<Node<T>>>;

/// The order in which [`Tree::traverse`] visits nodes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Order {
    /// Left subtree, then the node, then the right subtree. Yields ascending values.
    InOrder,
    /// The node, then the left subtree, then the right subtree.
    PreOrder,
    /// Left subtree, then the right subtree, then the node.
    PostOrder,
}

/// An unbalanced Binary Search Tree. This can be used for inserting, traversing,
/// and deleting values.
pub struct Tree<T> {
    root: Link<T>,
    len: usize,
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Tree<T> {
    fn drop(&mut self) {
        Self::drop_link(self.root.take());
    }
}

impl<T: Clone> Clone for Tree<T> {
    fn clone(&self) -> Self {
        Self {
            root: self.root.clone(),
            len: self.len,
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Tree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tree")
            .field("len", &self.len)
            .field("root", &self.root())
            .finish()
    }
}

impl<T> Tree<T> {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// Wraps an owned subtree, e.g. one returned by [`Tree::delete_node`], back
    /// into a `Tree`. The subtree's nodes are counted to restore `len`.
    pub fn from_root(root: Link<T>) -> Self {
        let mut tree = Self { root, len: 0 };
        tree.len = Iter::new(tree.root()).count();
        tree
    }

    /// Gives up the tree's nodes as an owned subtree.
    ///
    /// A plain `Link` drops recursively, one stack frame per level. Hand a
    /// subtree that may be deep back to [`Tree::from_root`] or
    /// [`Tree::drop_link`] instead of letting it fall out of scope.
    pub fn into_root(mut self) -> Link<T> {
        self.root.take()
    }

    /// Frees every node of `link` without recursing, however deep it is.
    ///
    /// # Examples
    ///
    /// ```
    /// use classic_collections::tree::Tree;
    ///
    /// let tree: Tree<_> = (0..1_000).collect();
    /// Tree::drop_link(tree.into_root());
    /// ```
    pub fn drop_link(link: Link<T>) {
        let mut stack: Vec<Box<Node<T>>> = link.into_iter().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
    }

    /// The root node, if the tree is not empty.
    pub fn root(&self) -> Option<&Node<T>> {
        self.root.as_deref()
    }

    /// How many values are stored in the tree.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the tree stores no values.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// How many levels the tree has. An empty tree has a height of 0 and a
    /// tree holding a single value has a height of 1.
    pub fn height(&self) -> usize {
        fn height<T>(node: Option<&Node<T>>) -> usize {
            node.map_or(0, |n| height(n.left()).max(height(n.right())) + 1)
        }
        height(self.root())
    }

    /// Inserts the given value as a new leaf. Returns `false`, dropping `value`,
    /// if an equal value is already in the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use classic_collections::tree::Tree;
    ///
    /// let mut tree = Tree::new();
    ///
    /// assert!(tree.insert(2));
    /// assert!(tree.insert(1));
    /// assert!(!tree.insert(2));
    /// assert_eq!(tree.len(), 2);
    /// ```
    pub fn insert(&mut self, value: T) -> bool
    where
        T: Ord,
    {
        let mut link = &mut self.root;
        while let Some(node) = link {
            link = match value.cmp(&node.value) {
                Ordering::Less => &mut node.left,
                Ordering::Equal => return false,
                Ordering::Greater => &mut node.right,
            };
        }

        *link = Some(Node::new_boxed(value));
        self.len += 1;
        log::trace!("tree: inserted leaf, len = {}", self.len);
        true
    }

    /// Whether a value equal to `value` is stored in the tree.
    pub fn contains(&self, value: &T) -> bool
    where
        T: Ord,
    {
        let mut current = self.root();
        while let Some(node) = current {
            current = match value.cmp(&node.value) {
                Ordering::Less => node.left(),
                Ordering::Equal => return true,
                Ordering::Greater => node.right(),
            };
        }
        false
    }

    /// The smallest value in the tree.
    pub fn min(&self) -> Option<&T> {
        self.root().map(|root| &root.min_value().value)
    }

    /// The largest value in the tree.
    pub fn max(&self) -> Option<&T> {
        let mut node = self.root()?;
        while let Some(right) = node.right() {
            node = right;
        }
        Some(&node.value)
    }

    /// Collects every value in the given [`Order`]. An empty tree yields an
    /// empty `Vec`.
    pub fn traverse(&self, order: Order) -> Vec<&T> {
        let mut values = Vec::with_capacity(self.len);
        if let Some(root) = self.root() {
            root.collect(order, &mut values);
        }
        values
    }

    /// Values in ascending order.
    pub fn in_order_traversal(&self) -> Vec<&T> {
        self.traverse(Order::InOrder)
    }

    /// Values with every node before its subtrees. The first value is the root's.
    pub fn pre_order_traversal(&self) -> Vec<&T> {
        self.traverse(Order::PreOrder)
    }

    /// Values with every node after its subtrees. The last value is the root's.
    pub fn post_order_traversal(&self) -> Vec<&T> {
        self.traverse(Order::PostOrder)
    }

    /// A lazy, ascending iterator over the tree's values.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            remaining: self.len,
            ..Iter::new(self.root())
        }
    }

    /// Deletes the value equal to `target` and returns it. If the tree has no
    /// such value, nothing happens.
    ///
    /// # Examples
    ///
    /// ```
    /// use classic_collections::tree::Tree;
    ///
    /// let mut tree: Tree<_> = [5, 3, 7].into_iter().collect();
    ///
    /// assert_eq!(tree.delete(&3), Some(3));
    /// assert_eq!(tree.delete(&3), None);
    /// assert_eq!(tree.in_order_traversal(), [&5, &7]);
    /// ```
    pub fn delete(&mut self, target: &T) -> Option<T>
    where
        T: Ord,
    {
        let removed = Self::remove(&mut self.root, target);
        if removed.is_some() {
            self.len -= 1;
        }
        removed
    }

    /// Deletes `target` from the subtree rooted at `root` and returns the new
    /// root of that subtree. The subtree root changes when `target` was the
    /// root itself, so the caller must store the returned subtree wherever
    /// `root` was held.
    ///
    /// A node with at most one child is replaced by that child. A node with two
    /// children takes the value of its in-order successor, which is then
    /// unlinked from the right subtree.
    ///
    /// The returned `Link` drops recursively; see [`Tree::into_root`].
    ///
    /// # Examples
    ///
    /// ```
    /// use classic_collections::tree::Tree;
    ///
    /// let tree: Tree<_> = [5, 3, 7].into_iter().collect();
    /// let root = Tree::delete_node(tree.into_root(), &5);
    /// let tree = Tree::from_root(root);
    ///
    /// assert_eq!(tree.root().map(|root| root.value()), Some(&7));
    /// assert_eq!(tree.pre_order_traversal(), [&7, &3]);
    /// ```
    pub fn delete_node(mut root: Link<T>, target: &T) -> Link<T>
    where
        T: Ord,
    {
        Self::remove(&mut root, target);
        root
    }

    fn remove(root: &mut Link<T>, target: &T) -> Option<T>
    where
        T: Ord,
    {
        let link = Self::find_link(root, target);
        let node = link.as_mut()?;
        if node.left.is_some() && node.right.is_some() {
            let successor = Node::take_min(&mut node.right)?;
            log::trace!("tree: promoted in-order successor");
            let removed = std::mem::replace(&mut node.value, successor);
            node.debug_assert_ordered();
            return Some(removed);
        }

        let mut node = link.take()?;
        *link = node.left.take().or_else(|| node.right.take());
        log::trace!("tree: spliced out node with at most one child");
        Some(node.value)
    }

    /// The link holding `target`, or the empty link where it would be inserted.
    fn find_link<'a>(mut link: &'a mut Link<T>, target: &T) -> &'a mut Link<T>
    where
        T: Ord,
    {
        loop {
            let ordering = link.as_deref().map(|node| target.cmp(&node.value));
            link = match (ordering, link) {
                (Some(Ordering::Less), Some(node)) => &mut node.left,
                (Some(Ordering::Greater), Some(node)) => &mut node.right,
                (_, found) => return found,
            };
        }
    }
}

impl<T: Ord> FromIterator<T> for Tree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<T: Ord> Extend<T> for Tree<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<'a, T> IntoIterator for &'a Tree<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// A `Node` holds one value of the tree and up to two children.
#[derive(Clone, Debug)]
pub struct Node<T> {
    value: T,
    left: Link<T>,
    right: Link<T>,
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

    /// The root of the left subtree, whose values are all smaller than this node's.
    pub fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    /// The root of the right subtree, whose values are all larger than this node's.
    pub fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }

    /// The leftmost node, holding the minimum value, of the subtree rooted here.
    /// For a right child this is the in-order successor of its parent.
    pub fn min_value(&self) -> &Self {
        let mut current = self;
        while let Some(left) = current.left() {
            current = left;
        }
        current
    }

    /// Unlinks the leftmost node of the subtree held by `link`. Its right child,
    /// if any, takes its place.
    fn take_min(mut link: &mut Link<T>) -> Option<T> {
        while link.as_ref().is_some_and(|node| node.left.is_some()) {
            link = &mut link.as_mut()?.left;
        }
        let node = link.take()?;
        *link = node.right;
        Some(node.value)
    }

    fn collect<'a>(&'a self, order: Order, values: &mut Vec<&'a T>) {
        if order == Order::PreOrder {
            values.push(&self.value);
        }
        if let Some(left) = self.left() {
            left.collect(order, values);
        }
        if order == Order::InOrder {
            values.push(&self.value);
        }
        if let Some(right) = self.right() {
            right.collect(order, values);
        }
        if order == Order::PostOrder {
            values.push(&self.value);
        }
    }

    fn debug_assert_ordered(&self)
    where
        T: Ord,
    {
        if cfg!(debug_assertions) {
            if let Some(left) = self.left() {
                assert!(self.value > left.value);
            }
            if let Some(right) = self.right() {
                assert!(self.value < right.value);
            }
        }
    }
}

/// An ascending iterator over a [`Tree`], created by [`Tree::iter`].
pub struct Iter<'a, T> {
    stack: Vec<&'a Node<T>>,
    remaining: usize,
}

impl<'a, T> Iter<'a, T> {
    fn new(root: Option<&'a Node<T>>) -> Self {
        let mut iter = Self {
            stack: Vec::new(),
            remaining: usize::MAX,
        };
        iter.push_left_spine(root);
        iter
    }

    fn push_left_spine(&mut self, mut node: Option<&'a Node<T>>) {
        while let Some(n) = node {
            self.stack.push(n);
            node = n.left();
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right());
        self.remaining = self.remaining.saturating_sub(1);
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.remaining == usize::MAX {
            (self.stack.len(), None)
        } else {
            (self.remaining, Some(self.remaining))
        }
    }
}

impl<T> FusedIterator for Iter<'_, T> {}
