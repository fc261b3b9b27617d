//! A singly linked list that tracks its head and tail.
//!
//! Nodes are stored in an arena owned by the list and linked by slot index, so
//! there is no `unsafe` and no shared ownership. Callers hold [`NodeId`]
//! handles to nodes, e.g. the one returned by [`LinkedList::append`], and pass
//! them back to the positional inserts. A handle becomes stale once its node is
//! removed, and a stale handle, or one from another list, is simply "not found".
//!
//! # Examples
//!
//! ```
//! use classic_collections::list::LinkedList;
//!
//! let mut list = LinkedList::create_list([1, 2, 3]);
//! let one = list.head().unwrap();
//!
//! list.insert_after(one, 4);
//! assert_eq!(list.to_vec(), [1, 4, 2, 3]);
//!
//! assert!(list.remove_value(&2));
//! assert!(list.remove_last());
//! assert_eq!(list.to_vec(), [1, 4]);
//! ```

use std::any::Any;
use std::fmt;
use std::iter::FusedIterator;
use std::sync::atomic::{self, AtomicU64};

use crate::Error;

static NEXT_LIST_ID: AtomicU64 = AtomicU64::new(0);

fn next_list_id() -> u64 {
    NEXT_LIST_ID.fetch_add(1, atomic::Ordering::Relaxed)
}

/// The default policy of [`LinkedList::filter_list`]: keeps values whose
/// concrete type is `String` or `&'static str`.
pub fn is_string<T: Any>(value: &T) -> bool {
    let value: &dyn Any = value;
    value.is::<String>() || value.is::<&str>()
}

/// A handle to one node of one [`LinkedList`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NodeId {
    list: u64,
    index: usize,
    generation: u64,
}

struct Node<T> {
    value: T,
    next: Option<usize>,
}

struct Slot<T> {
    /// Bumped every time the slot is vacated so old handles stop resolving.
    generation: u64,
    node: Option<Node<T>>,
}

/// A singly linked list with `O(1)` append.
pub struct LinkedList<T> {
    id: u64,
    slots: Vec<Slot<T>>,
    free: Vec<usize>,
    head: Option<usize>,
    tail: Option<usize>,
    len: usize,
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> LinkedList<T> {
    /// Generates a new, empty `LinkedList`.
    pub fn new() -> Self {
        Self {
            id: next_list_id(),
            slots: Vec::new(),
            free: Vec::new(),
            head: None,
            tail: None,
            len: 0,
        }
    }

    /// Builds a new list holding the values of `source` in order.
    ///
    /// # Examples
    ///
    /// ```
    /// use classic_collections::list::LinkedList;
    ///
    /// let list = LinkedList::create_list(vec!["a", "b"]);
    /// assert_eq!(list.to_vec(), ["a", "b"]);
    ///
    /// // Copying a list rebuilds it node by node.
    /// let copy = LinkedList::create_list(list.iter().copied());
    /// assert_eq!(copy, list);
    /// ```
    pub fn create_list<I>(source: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        source.into_iter().collect()
    }

    /// Builds an independent copy of `other`. No node is shared, so mutating
    /// either list leaves the other untouched.
    pub fn copy_from(other: &Self) -> Self
    where
        T: Clone,
    {
        other.iter().cloned().collect()
    }

    /// How many values are in the list.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the list has no values.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The first node.
    pub fn head(&self) -> Option<NodeId> {
        self.head.map(|index| self.handle(index))
    }

    /// The last node.
    pub fn tail(&self) -> Option<NodeId> {
        self.tail.map(|index| self.handle(index))
    }

    /// The first value.
    pub fn front(&self) -> Option<&T> {
        self.head.map(|index| &self.node(index).value)
    }

    /// The last value.
    pub fn back(&self) -> Option<&T> {
        self.tail.map(|index| &self.node(index).value)
    }

    /// The value of the node behind `id`, if it is still in this list.
    pub fn get(&self, id: NodeId) -> Option<&T> {
        self.resolve(id).map(|index| &self.node(index).value)
    }

    /// Mutable access to the value of the node behind `id`.
    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut T> {
        let index = self.resolve(id)?;
        Some(&mut self.node_mut(index).value)
    }

    /// The node following `id`.
    pub fn next(&self, id: NodeId) -> Option<NodeId> {
        let index = self.resolve(id)?;
        self.node(index).next.map(|next| self.handle(next))
    }

    /// The first node holding a value equal to `value`.
    pub fn find(&self, value: &T) -> Option<NodeId>
    where
        T: PartialEq,
    {
        self.find_with_prev(value)
            .map(|(_, index)| self.handle(index))
    }

    /// Links a new node holding `value` after the tail and returns its handle.
    pub fn append(&mut self, value: T) -> NodeId {
        let index = self.alloc(value, None);
        match self.tail {
            Some(tail) => self.node_mut(tail).next = Some(index),
            None => self.head = Some(index),
        }
        self.tail = Some(index);

        log::trace!("list {}: appended slot {}", self.id, index);
        self.debug_check();
        self.handle(index)
    }

    /// Splices a new node holding `value` in front of `target`. Inserting
    /// before the head makes the new node the head.
    ///
    /// # Errors
    ///
    /// [`Error::NodeNotFound`] if `target` is not a node of this list. The list
    /// is left untouched.
    pub fn try_insert_before(&mut self, target: NodeId, value: T) -> Result<NodeId, Error> {
        let index = self.resolve(target).ok_or(Error::NodeNotFound(target))?;
        let prev = self.predecessor(index);
        Ok(self.splice_before(prev, index, value))
    }

    /// Splices a new node holding `value` in front of `target` and returns its
    /// handle. Returns `None`, without touching the list, if `target` is not a
    /// node of this list.
    pub fn insert_before(&mut self, target: NodeId, value: T) -> Option<NodeId> {
        let result = self.try_insert_before(target, value);
        self.log_miss("insert_before", result)
    }

    /// Like [`LinkedList::try_insert_before`] but the target is the first node
    /// holding a value equal to `target`.
    ///
    /// # Errors
    ///
    /// [`Error::ValueNotFound`] if no node holds `target`.
    pub fn try_insert_before_value(&mut self, target: &T, value: T) -> Result<NodeId, Error>
    where
        T: PartialEq,
    {
        let (prev, index) = self.find_with_prev(target).ok_or(Error::ValueNotFound)?;
        Ok(self.splice_before(prev, index, value))
    }

    /// Splices a new node in front of the first node holding `target`.
    pub fn insert_before_value(&mut self, target: &T, value: T) -> Option<NodeId>
    where
        T: PartialEq,
    {
        let result = self.try_insert_before_value(target, value);
        self.log_miss("insert_before_value", result)
    }

    /// Splices a new node holding `value` right after `target`. Inserting after
    /// the tail makes the new node the tail.
    ///
    /// # Errors
    ///
    /// [`Error::NodeNotFound`] if `target` is not a node of this list. The list
    /// is left untouched.
    pub fn try_insert_after(&mut self, target: NodeId, value: T) -> Result<NodeId, Error> {
        let index = self.resolve(target).ok_or(Error::NodeNotFound(target))?;
        Ok(self.splice_after(index, value))
    }

    /// Splices a new node holding `value` right after `target` and returns its
    /// handle. Returns `None`, without touching the list, if `target` is not a
    /// node of this list.
    ///
    /// # Examples
    ///
    /// ```
    /// use classic_collections::list::LinkedList;
    ///
    /// let mut list = LinkedList::new();
    /// let one = list.append(1);
    /// list.append(2);
    ///
    /// let three = list.insert_after(one, 3).unwrap();
    /// assert_eq!(list.to_vec(), [1, 3, 2]);
    ///
    /// // Once removed, a node can no longer be targeted.
    /// list.remove(three);
    /// assert_eq!(list.insert_after(three, 4), None);
    /// assert_eq!(list.to_vec(), [1, 2]);
    /// ```
    pub fn insert_after(&mut self, target: NodeId, value: T) -> Option<NodeId> {
        let result = self.try_insert_after(target, value);
        self.log_miss("insert_after", result)
    }

    /// Like [`LinkedList::try_insert_after`] but the target is the first node
    /// holding a value equal to `target`.
    ///
    /// # Errors
    ///
    /// [`Error::ValueNotFound`] if no node holds `target`.
    pub fn try_insert_after_value(&mut self, target: &T, value: T) -> Result<NodeId, Error>
    where
        T: PartialEq,
    {
        let (_, index) = self.find_with_prev(target).ok_or(Error::ValueNotFound)?;
        Ok(self.splice_after(index, value))
    }

    /// Splices a new node right after the first node holding `target`.
    pub fn insert_after_value(&mut self, target: &T, value: T) -> Option<NodeId>
    where
        T: PartialEq,
    {
        let result = self.try_insert_after_value(target, value);
        self.log_miss("insert_after_value", result)
    }

    /// Unlinks the tail and returns its value. The node before it becomes the
    /// new tail. This walks the whole list.
    pub fn pop_back(&mut self) -> Option<T> {
        let tail = self.tail?;
        let prev = self.predecessor(tail);
        Some(self.unlink(prev, tail))
    }

    /// Unlinks the head and returns its value.
    pub fn pop_front(&mut self) -> Option<T> {
        let head = self.head?;
        Some(self.unlink(None, head))
    }

    /// Unlinks the tail. Returns `false` if the list was already empty.
    pub fn remove_last(&mut self) -> bool {
        let removed = self.pop_back().is_some();
        if !removed {
            log::debug!("list {}: remove_last on empty list", self.id);
        }
        removed
    }

    /// Unlinks the node behind `id` and returns its value.
    pub fn remove(&mut self, id: NodeId) -> Option<T> {
        let index = self.resolve(id)?;
        let prev = self.predecessor(index);
        Some(self.unlink(prev, index))
    }

    /// Unlinks the first node holding a value equal to `value`. Returns whether
    /// a node was removed.
    pub fn remove_value(&mut self, value: &T) -> bool
    where
        T: PartialEq,
    {
        match self.find_with_prev(value) {
            Some((prev, index)) => {
                self.unlink(prev, index);
                true
            }
            None => {
                log::debug!("list {}: remove_value found no match", self.id);
                false
            }
        }
    }

    /// Unlinks every node holding a value equal to `value` and returns how many
    /// were removed.
    pub fn remove_all(&mut self, value: &T) -> usize
    where
        T: PartialEq,
    {
        let mut removed = 0;
        let mut prev = None;
        let mut cursor = self.head;
        while let Some(index) = cursor {
            cursor = self.node(index).next;
            if self.node(index).value == *value {
                self.unlink(prev, index);
                removed += 1;
            } else {
                prev = Some(index);
            }
        }
        removed
    }

    /// Removes every node. Handles into the list stop resolving.
    pub fn clear(&mut self) {
        // Slots restart from generation 0, so the list takes a new identity.
        *self = Self::new();
    }

    /// References to the values for which `predicate` holds, in list order.
    pub fn filter<F>(&self, mut predicate: F) -> Vec<&T>
    where
        F: FnMut(&T) -> bool,
    {
        self.iter().filter(|value| predicate(*value)).collect()
    }

    /// Like [`LinkedList::filter`], falling back to [`is_string`] when no
    /// predicate is given.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::any::Any;
    ///
    /// use classic_collections::list::LinkedList;
    ///
    /// let list: LinkedList<Box<dyn Any>> = LinkedList::create_list([
    ///     Box::new("a") as Box<dyn Any>,
    ///     Box::new(1),
    /// ]);
    /// let strings = LinkedList::create_list(["a".to_string(), "b".to_string()]);
    ///
    /// assert_eq!(strings.filter_list(None).len(), 2);
    /// assert_eq!(list.filter_list(Some(&|value| value.is::<i32>())).len(), 1);
    /// ```
    pub fn filter_list(&self, predicate: Option<&dyn Fn(&T) -> bool>) -> Vec<&T>
    where
        T: Any,
    {
        match predicate {
            Some(predicate) => self.filter(predicate),
            None => self.filter(is_string::<T>),
        }
    }

    /// Clones every value, head to tail, into a `Vec`.
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }

    /// Iterates over the values, head to tail.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            list: self,
            cursor: self.head,
            remaining: self.len,
        }
    }

    /// Iterates over the node handles, head to tail.
    pub fn nodes(&self) -> Nodes<'_, T> {
        Nodes { inner: self.iter() }
    }

    fn handle(&self, index: usize) -> NodeId {
        NodeId {
            list: self.id,
            index,
            generation: self.slots[index].generation,
        }
    }

    fn resolve(&self, id: NodeId) -> Option<usize> {
        if id.list != self.id {
            return None;
        }
        let slot = self.slots.get(id.index)?;
        (slot.generation == id.generation && slot.node.is_some()).then_some(id.index)
    }

    fn node(&self, index: usize) -> &Node<T> {
        self.slots[index]
            .node
            .as_ref()
            .expect("linked slot is occupied")
    }

    fn node_mut(&mut self, index: usize) -> &mut Node<T> {
        self.slots[index]
            .node
            .as_mut()
            .expect("linked slot is occupied")
    }

    fn alloc(&mut self, value: T, next: Option<usize>) -> usize {
        let node = Some(Node { value, next });
        self.len += 1;
        match self.free.pop() {
            Some(index) => {
                self.slots[index].node = node;
                index
            }
            None => {
                self.slots.push(Slot {
                    generation: 0,
                    node,
                });
                self.slots.len() - 1
            }
        }
    }

    fn release(&mut self, index: usize) -> T {
        let slot = &mut self.slots[index];
        let node = slot.node.take().expect("released slot is occupied");
        slot.generation += 1;
        self.free.push(index);
        self.len -= 1;
        node.value
    }

    /// Walks from the head to the node linking to `index`. `None` when `index`
    /// is the head.
    fn predecessor(&self, index: usize) -> Option<usize> {
        let mut prev = None;
        let mut cursor = self.head;
        while let Some(current) = cursor {
            if current == index {
                return prev;
            }
            prev = Some(current);
            cursor = self.node(current).next;
        }
        unreachable!("occupied slot {} is not reachable from the head", index)
    }

    fn find_with_prev(&self, value: &T) -> Option<(Option<usize>, usize)>
    where
        T: PartialEq,
    {
        let mut prev = None;
        let mut cursor = self.head;
        while let Some(current) = cursor {
            let node = self.node(current);
            if node.value == *value {
                return Some((prev, current));
            }
            prev = Some(current);
            cursor = node.next;
        }
        None
    }

    fn splice_before(&mut self, prev: Option<usize>, next: usize, value: T) -> NodeId {
        let index = self.alloc(value, Some(next));
        match prev {
            Some(prev) => self.node_mut(prev).next = Some(index),
            None => self.head = Some(index),
        }

        log::trace!("list {}: spliced slot {} before slot {}", self.id, index, next);
        self.debug_check();
        self.handle(index)
    }

    fn splice_after(&mut self, prev: usize, value: T) -> NodeId {
        let next = self.node(prev).next;
        let index = self.alloc(value, next);
        self.node_mut(prev).next = Some(index);
        if self.tail == Some(prev) {
            self.tail = Some(index);
        }

        log::trace!("list {}: spliced slot {} after slot {}", self.id, index, prev);
        self.debug_check();
        self.handle(index)
    }

    fn unlink(&mut self, prev: Option<usize>, index: usize) -> T {
        let next = self.node(index).next;
        match prev {
            Some(prev) => self.node_mut(prev).next = next,
            None => self.head = next,
        }
        if self.tail == Some(index) {
            self.tail = prev;
        }

        log::trace!("list {}: unlinked slot {}", self.id, index);
        let value = self.release(index);
        self.debug_check();
        value
    }

    fn log_miss(&self, op: &str, result: Result<NodeId, Error>) -> Option<NodeId> {
        result
            .map_err(|err| log::debug!("list {}: {} skipped: {}", self.id, op, err))
            .ok()
    }

    fn debug_check(&self) {
        if cfg!(debug_assertions) {
            assert_eq!(self.head.is_none(), self.tail.is_none());
            assert_eq!(self.head.is_none(), self.len == 0);
            if let Some(tail) = self.tail {
                assert!(self.node(tail).next.is_none());
            }
        }
    }
}

impl<T: Clone> Clone for LinkedList<T> {
    fn clone(&self) -> Self {
        Self::copy_from(self)
    }
}

impl<T: fmt::Debug> fmt::Debug for LinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: PartialEq> PartialEq for LinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for LinkedList<T> {}

impl<T> FromIterator<T> for LinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<T> Extend<T> for LinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.append(value);
        }
    }
}

impl<T> From<Vec<T>> for LinkedList<T> {
    fn from(values: Vec<T>) -> Self {
        values.into_iter().collect()
    }
}

impl<T: Clone> From<&[T]> for LinkedList<T> {
    fn from(values: &[T]) -> Self {
        values.iter().cloned().collect()
    }
}

impl<'a, T> IntoIterator for &'a LinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> IntoIterator for LinkedList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { list: self }
    }
}

/// An iterator over the values of a [`LinkedList`], created by [`LinkedList::iter`].
pub struct Iter<'a, T> {
    list: &'a LinkedList<T>,
    cursor: Option<usize>,
    remaining: usize,
}

impl<'a, T> Iter<'a, T> {
    fn next_index(&mut self) -> Option<usize> {
        let index = self.cursor?;
        self.cursor = self.list.node(index).next;
        self.remaining -= 1;
        Some(index)
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let list = self.list;
        self.next_index().map(|index| &list.node(index).value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
impl<T> FusedIterator for Iter<'_, T> {}

/// An iterator over the node handles of a [`LinkedList`], created by
/// [`LinkedList::nodes`].
pub struct Nodes<'a, T> {
    inner: Iter<'a, T>,
}

impl<T> Iterator for Nodes<'_, T> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        let list = self.inner.list;
        self.inner.next_index().map(|index| list.handle(index))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> ExactSizeIterator for Nodes<'_, T> {}
impl<T> FusedIterator for Nodes<'_, T> {}

/// An owning iterator over the values of a [`LinkedList`].
pub struct IntoIter<T> {
    list: LinkedList<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.list.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.list.len, Some(self.list.len))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}
impl<T> FusedIterator for IntoIter<T> {}

#[cfg(test)]
impl<T> LinkedList<T> {
    /// Walks the whole list and checks every structural invariant.
    pub(crate) fn assert_invariants(&self) {
        let mut reached = 0;
        let mut last = None;
        let mut cursor = self.head;
        while let Some(index) = cursor {
            reached += 1;
            assert!(reached <= self.len, "cycle or stray node");
            last = Some(index);
            cursor = self.node(index).next;
        }
        assert_eq!(reached, self.len);
        assert_eq!(last, self.tail);
        assert_eq!(self.head.is_none(), self.tail.is_none());

        let occupied = self.slots.iter().filter(|slot| slot.node.is_some()).count();
        assert_eq!(occupied, self.len);
        assert_eq!(occupied + self.free.len(), self.slots.len());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_list_is_empty() {
        let list: LinkedList<i32> = LinkedList::new();

        assert!(list.head().is_none());
        assert!(list.tail().is_none());
        assert!(list.is_empty());
        assert!(list.to_vec().is_empty());
        list.assert_invariants();
    }

    #[test]
    fn append_to_empty_list() {
        let mut list = LinkedList::new();
        let one = list.append(1);

        assert_eq!(list.head(), Some(one));
        assert_eq!(list.tail(), Some(one));
        assert_eq!(list.next(one), None);
        list.assert_invariants();
    }

    #[test]
    fn append_multiple() {
        let mut list = LinkedList::new();
        let one = list.append(1);
        let two = list.append(2);
        let three = list.append(3);

        assert_eq!(list.head(), Some(one));
        assert_eq!(list.next(one), Some(two));
        assert_eq!(list.tail(), Some(three));
        assert_eq!(list.get(two), Some(&2));
        assert_eq!(list.to_vec(), [1, 2, 3]);
        list.assert_invariants();
    }

    #[test]
    fn create_list_round_trips() {
        let values = vec![3, 1, 4, 1, 5];
        let list = LinkedList::create_list(values.clone());

        assert_eq!(list.to_vec(), values);
        assert_eq!(list.front(), Some(&3));
        assert_eq!(list.back(), Some(&5));
    }

    #[test]
    fn copy_shares_no_nodes() {
        let list = LinkedList::create_list([1, 2, 3]);
        let mut copy = LinkedList::copy_from(&list);
        let head = list.head().unwrap();

        assert_eq!(copy, list);
        // A handle from the source does not resolve in the copy.
        assert_eq!(copy.get(head), None);
        assert_eq!(copy.insert_after(head, 9), None);

        copy.remove_last();
        assert_eq!(list.to_vec(), [1, 2, 3]);
        assert_eq!(copy.to_vec(), [1, 2]);
        copy.assert_invariants();
    }

    #[test]
    fn insert_before_head() {
        let mut list = LinkedList::create_list([1, 2]);
        let head = list.head().unwrap();

        let zero = list.insert_before(head, 0).unwrap();
        assert_eq!(list.head(), Some(zero));
        assert_eq!(list.to_vec(), [0, 1, 2]);
        list.assert_invariants();
    }

    #[test]
    fn insert_before_middle_and_tail() {
        let mut list = LinkedList::new();
        list.append(1);
        let three = list.append(3);
        let five = list.append(5);

        list.insert_before(three, 2);
        list.insert_before(five, 4);

        assert_eq!(list.to_vec(), [1, 2, 3, 4, 5]);
        assert_eq!(list.tail(), Some(five));
        list.assert_invariants();
    }

    #[test]
    fn insert_before_into_empty_list_is_no_op() {
        let mut other = LinkedList::new();
        let foreign = other.append(1);
        let mut list = LinkedList::new();

        assert_eq!(list.insert_before(foreign, 2), None);
        assert_eq!(
            list.try_insert_before(foreign, 2),
            Err(Error::NodeNotFound(foreign))
        );
        assert!(list.is_empty());
        list.assert_invariants();
    }

    #[test]
    fn insert_after_node() {
        let mut list = LinkedList::create_list([1, 2, 3]);
        let one = list.head().unwrap();

        list.insert_after(one, 4);
        assert_eq!(list.to_vec(), [1, 4, 2, 3]);
        list.assert_invariants();
    }

    #[test]
    fn insert_after_tail_moves_tail() {
        let mut list = LinkedList::create_list([1, 2]);
        let tail = list.tail().unwrap();

        let three = list.insert_after(tail, 3).unwrap();
        assert_eq!(list.tail(), Some(three));
        assert_eq!(list.back(), Some(&3));
        list.assert_invariants();
    }

    #[test]
    fn insert_after_value() {
        let mut list = LinkedList::create_list([1, 2, 2]);

        // Only the first occurrence is targeted.
        assert!(list.insert_after_value(&2, 3).is_some());
        assert_eq!(list.to_vec(), [1, 2, 3, 2]);

        assert_eq!(list.insert_after_value(&4, 5), None);
        assert_eq!(list.try_insert_after_value(&4, 5), Err(Error::ValueNotFound));
        assert_eq!(list.to_vec(), [1, 2, 3, 2]);

        let tail = list.insert_after_value(&3, 9);
        assert_eq!(list.to_vec(), [1, 2, 3, 9, 2]);
        assert_ne!(list.tail(), tail);
        list.assert_invariants();
    }

    #[test]
    fn insert_before_value() {
        let mut list = LinkedList::create_list(["b", "d"]);

        list.insert_before_value(&"b", "a");
        list.insert_before_value(&"d", "c");
        assert_eq!(list.insert_before_value(&"z", "y"), None);

        assert_eq!(list.to_vec(), ["a", "b", "c", "d"]);
        list.assert_invariants();
    }

    #[test]
    fn remove_last_until_empty() {
        let mut list = LinkedList::create_list([1, 2, 3]);

        assert!(list.remove_last());
        assert!(list.remove_last());
        assert_eq!(list.to_vec(), [1]);
        list.assert_invariants();

        assert!(list.remove_last());
        assert!(list.to_vec().is_empty());
        assert!(list.head().is_none());
        assert!(list.tail().is_none());

        assert!(!list.remove_last());
        list.assert_invariants();
    }

    #[test]
    fn remove_value_first_match_only() {
        let mut list = LinkedList::create_list([1, 2, 3, 2]);

        assert!(list.remove_value(&2));
        assert_eq!(list.to_vec(), [1, 3, 2]);
        assert!(!list.remove_value(&4));
        list.assert_invariants();
    }

    #[test]
    fn remove_value_at_ends() {
        let mut list = LinkedList::create_list([1, 2, 3]);

        assert!(list.remove_value(&1));
        assert_eq!(list.front(), Some(&2));
        assert!(list.remove_value(&3));
        assert_eq!(list.back(), Some(&2));
        assert!(list.remove_value(&2));
        assert!(list.is_empty());
        list.assert_invariants();
    }

    #[test]
    fn remove_all_matches() {
        let mut list = LinkedList::create_list([2, 1, 2, 2, 3, 2]);

        assert_eq!(list.remove_all(&2), 4);
        assert_eq!(list.to_vec(), [1, 3]);
        assert_eq!(list.back(), Some(&3));
        assert_eq!(list.remove_all(&2), 0);
        list.assert_invariants();
    }

    #[test]
    fn removed_handles_go_stale() {
        let mut list = LinkedList::new();
        let one = list.append(1);
        let two = list.append(2);

        assert_eq!(list.remove(two), Some(2));
        assert_eq!(list.remove(two), None);

        // The slot is reused, but the old handle still does not resolve.
        let three = list.append(3);
        assert_ne!(two, three);
        assert_eq!(list.get(two), None);
        assert_eq!(list.insert_before(two, 0), None);
        assert_eq!(list.to_vec(), [1, 3]);
        assert_eq!(list.next(one), Some(three));
        list.assert_invariants();
    }

    #[test]
    fn clear_invalidates_handles() {
        let mut list = LinkedList::create_list([1, 2]);
        let head = list.head().unwrap();

        list.clear();
        list.append(7);
        assert_eq!(list.get(head), None);
        assert_eq!(list.to_vec(), [7]);
        list.assert_invariants();
    }

    #[test]
    fn filter_list_defaults_to_strings() {
        let list = LinkedList::create_list(["a".to_string(), "b".to_string()]);
        assert_eq!(list.filter_list(None), [&"a".to_string(), &"b".to_string()]);

        let slices = LinkedList::create_list(["c", "d"]);
        assert_eq!(slices.filter_list(None), [&"c", &"d"]);

        let numbers = LinkedList::create_list([1, 2, 3, 4]);
        assert!(numbers.filter_list(None).is_empty());
        assert_eq!(numbers.filter_list(Some(&|n| n % 2 == 0)), [&2, &4]);
    }

    #[test]
    fn iterators() {
        let list = LinkedList::create_list([1, 2, 3]);

        assert_eq!(list.iter().len(), 3);
        assert_eq!((&list).into_iter().sum::<i32>(), 6);
        assert_eq!(list.nodes().count(), 3);
        assert_eq!(list.nodes().last(), list.tail());
        assert_eq!(list.into_iter().collect::<Vec<_>>(), [1, 2, 3]);
    }

    #[test]
    fn pop_front_and_back() {
        let mut list = LinkedList::from(vec![1, 2, 3]);

        assert_eq!(list.pop_front(), Some(1));
        assert_eq!(list.pop_back(), Some(3));
        assert_eq!(list.pop_back(), Some(2));
        assert_eq!(list.pop_front(), None);
        list.assert_invariants();
    }

    #[test]
    fn get_mut_and_find() {
        let mut list = LinkedList::from(&[1, 2, 3][..]);
        let two = list.find(&2).unwrap();

        *list.get_mut(two).unwrap() = 20;
        assert_eq!(list.to_vec(), [1, 20, 3]);
        assert_eq!(list.find(&2), None);
    }
}
