//! This crate exposes two classic collections, a Binary Search Tree (BST) and
//! a singly linked list, mostly for educational purposes.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to insert,
//! traverse, and delete stored values. It is defined recursively using the
//! notion of a `Node`. A `Node` stores the inserted value and may have up to two
//! child `Node`s. The invariants of the BST in [`tree`] are:
//!
//! 1. For every `Node`, all the `Node`s in its left subtree have a value less
//!    than its own value.
//! 2. For every `Node`, all the `Node`s in its right subtree have a value
//!    greater than its own value.
//!
//! > Inserting a value equal to one already stored is a no-op, so no value is
//! > ever stored twice.
//!
//! The tree in this crate is never rebalanced. Inserting already sorted values
//! produces a tree whose height equals the number of values, which is the worst
//! case for every operation.
//!
//! ## Linked List
//!
//! The [`list`] module holds a singly linked list that tracks both its head and
//! its tail so appending is `O(1)`. Its nodes live in an arena owned by the list
//! and callers refer to them through [`list::NodeId`] handles, which is what the
//! positional inserts (`insert_before`, `insert_after`) take. The list keeps
//! these invariants after every operation:
//!
//! 1. The list is empty exactly when it has neither a head nor a tail.
//! 2. Following `next` from the head reaches the tail after `len - 1` steps,
//!    and the tail has no `next`.
//! 3. Every node is reachable from the head exactly once.

#![deny(missing_docs)]

mod error;
pub mod list;
#[cfg(feature = "serde")]
mod serialize;
pub mod tree;


pub use error::Error;
pub use list::{LinkedList, NodeId};
pub use tree::Tree;
