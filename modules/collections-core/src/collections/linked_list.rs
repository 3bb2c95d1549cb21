//! Singly linked list with head and tail tracking.

mod iter;
mod list_error;
mod node;

pub use iter::{IntoIter, Iter};
pub use list_error::ListError;

use std::{fmt, ptr};

use crate::collections::{
  Element,
  linked_list::node::{Link, Node},
};

/// A generic singly linked sequence.
///
/// The list owns its nodes through an exclusive chain of forward links starting
/// at the head. A raw tail pointer is kept alongside so that appends are O(1);
/// it is never exposed and always addresses the last node of the chain (or is
/// null when the list is empty).
///
/// Positional operations use 0-based indices. Every fallible operation returns
/// a [`ListError`] instead of panicking, so emptiness and bounds can be handled
/// by the caller.
///
/// # Example
///
/// ```
/// use lineal_collections_core_rs::LinkedList;
///
/// let mut list = LinkedList::new();
/// list.push_front(5);
/// list.push_back(10);
/// list.push_front(1);
/// assert_eq!(list.to_vec(), vec![1, 5, 10]);
/// assert_eq!(list.first(), Ok(&1));
/// assert_eq!(list.last(), Ok(&10));
/// ```
pub struct LinkedList<E> {
  head: Link<E>,
  tail: *mut Node<E>,
  len:  usize,
}

impl<E: Element> LinkedList<E> {
  /// Creates an empty list.
  #[must_use]
  pub const fn new() -> Self {
    Self { head: None, tail: ptr::null_mut(), len: 0 }
  }

  /// Returns the number of stored elements.
  #[must_use]
  pub fn len(&self) -> usize {
    self.len
  }

  /// Indicates whether the list holds no elements.
  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.len == 0
  }

  /// Prepends an element, making it the new head. O(1).
  pub fn push_front(&mut self, item: E) {
    let mut node = Box::new(Node::new(item));
    node.next = self.head.take();
    if self.tail.is_null() {
      self.tail = &mut *node;
    }
    self.head = Some(node);
    self.len += 1;
  }

  /// Appends an element, making it the new tail. O(1).
  pub fn push_back(&mut self, item: E) {
    let mut node = Box::new(Node::new(item));
    let raw: *mut Node<E> = &mut *node;
    if self.tail.is_null() {
      self.head = Some(node);
    } else {
      // SAFETY: a non-null tail addresses the last node of the chain owned by
      // `head`, and `&mut self` guarantees nothing else aliases it.
      unsafe { (*self.tail).next = Some(node) };
    }
    self.tail = raw;
    self.len += 1;
  }

  /// Inserts an element at the given position, shifting later elements one
  /// place toward the tail. `index == 0` prepends and `index == len` appends;
  /// interior indices splice a node after walking to the predecessor. O(index).
  ///
  /// # Errors
  ///
  /// Returns [`ListError::IndexOutOfBounds`] when `index > len`. Over-large
  /// indices are rejected rather than clamped to an append.
  pub fn insert_at(&mut self, item: E, index: usize) -> Result<(), ListError> {
    if index > self.len {
      return Err(ListError::IndexOutOfBounds { index, len: self.len });
    }
    if index == 0 {
      self.push_front(item);
      return Ok(());
    }
    if index == self.len {
      self.push_back(item);
      return Ok(());
    }
    let Some(prev) = self.node_at_mut(index - 1) else {
      return Err(ListError::IndexOutOfBounds { index, len: self.len });
    };
    let mut node = Box::new(Node::new(item));
    node.next = prev.next.take();
    prev.next = Some(node);
    self.len += 1;
    Ok(())
  }

  /// Removes and returns the head element. O(1).
  ///
  /// # Errors
  ///
  /// Returns [`ListError::Empty`] when the list holds no elements.
  pub fn pop_front(&mut self) -> Result<E, ListError> {
    let node = self.head.take().ok_or(ListError::Empty)?;
    self.head = node.next;
    self.len -= 1;
    if self.head.is_none() {
      self.tail = ptr::null_mut();
    }
    Ok(node.value)
  }

  /// Removes and returns the tail element after walking to its predecessor.
  /// O(len).
  ///
  /// # Errors
  ///
  /// Returns [`ListError::Empty`] when the list holds no elements.
  pub fn pop_back(&mut self) -> Result<E, ListError> {
    if self.len < 2 {
      return self.pop_front();
    }
    let before_tail = self.len - 2;
    let Some(prev) = self.node_at_mut(before_tail) else {
      return Err(ListError::Empty);
    };
    let old_tail = prev.next.take();
    let raw: *mut Node<E> = prev;
    self.tail = raw;
    self.len -= 1;
    old_tail.map(|node| node.value).ok_or(ListError::Empty)
  }

  /// Removes and returns the element at the given position. Boundary indices
  /// delegate to [`pop_front`](Self::pop_front) and
  /// [`pop_back`](Self::pop_back); interior indices relink the predecessor to
  /// the successor. O(index).
  ///
  /// # Errors
  ///
  /// Returns [`ListError::Empty`] when the list holds no elements, and
  /// [`ListError::IndexOutOfBounds`] when `index >= len`.
  pub fn remove_at(&mut self, index: usize) -> Result<E, ListError> {
    if self.is_empty() {
      return Err(ListError::Empty);
    }
    if index >= self.len {
      return Err(ListError::IndexOutOfBounds { index, len: self.len });
    }
    if index == 0 {
      return self.pop_front();
    }
    if index == self.len - 1 {
      return self.pop_back();
    }
    let Some(prev) = self.node_at_mut(index - 1) else {
      return Err(ListError::IndexOutOfBounds { index, len: self.len });
    };
    let Some(mut target) = prev.next.take() else {
      return Err(ListError::IndexOutOfBounds { index, len: self.len });
    };
    prev.next = target.next.take();
    self.len -= 1;
    Ok(target.value)
  }

  /// Returns the position of the first element equal to `item`, or `None` when
  /// no element matches. O(len).
  #[must_use]
  pub fn find_index(&self, item: &E) -> Option<usize>
  where
    E: PartialEq, {
    self.iter().position(|value| value == item)
  }

  /// Indicates whether any element equals `item`. O(len).
  #[must_use]
  pub fn contains(&self, item: &E) -> bool
  where
    E: PartialEq, {
    self.find_index(item).is_some()
  }

  /// Calls `visitor` once per element in head-to-tail order with the element
  /// and its position.
  pub fn for_each<F>(&self, mut visitor: F)
  where
    F: FnMut(&E, usize), {
    for (index, value) in self.iter().enumerate() {
      visitor(value, index);
    }
  }

  /// Copies every element into a fresh `Vec` in head-to-tail order. The result
  /// is independent of later list mutation. O(len).
  #[must_use]
  pub fn to_vec(&self) -> Vec<E>
  where
    E: Clone, {
    self.iter().cloned().collect()
  }

  /// Returns the head element.
  ///
  /// # Errors
  ///
  /// Returns [`ListError::Empty`] when the list holds no elements.
  pub fn first(&self) -> Result<&E, ListError> {
    self.head.as_deref().map(|node| &node.value).ok_or(ListError::Empty)
  }

  /// Returns the tail element.
  ///
  /// # Errors
  ///
  /// Returns [`ListError::Empty`] when the list holds no elements.
  pub fn last(&self) -> Result<&E, ListError> {
    if self.tail.is_null() {
      return Err(ListError::Empty);
    }
    // SAFETY: a non-null tail addresses the last node of the chain owned by
    // `head`; the shared borrow of `self` keeps the chain alive and unaliased
    // by mutation.
    Ok(unsafe { &(*self.tail).value })
  }

  /// Returns a borrowing iterator from head to tail.
  #[must_use]
  pub fn iter(&self) -> Iter<'_, E> {
    Iter::new(self.head.as_deref(), self.len)
  }

  /// Drops every element, leaving the list empty. Unlinks iteratively so that
  /// long chains cannot overflow the call stack through recursive drops.
  pub fn clear(&mut self) {
    let mut cursor = self.head.take();
    self.tail = ptr::null_mut();
    self.len = 0;
    while let Some(mut node) = cursor {
      cursor = node.next.take();
    }
  }

  /// Walks from the head to the node at `index`. Returns `None` when the index
  /// is past the end of the chain.
  fn node_at_mut(&mut self, index: usize) -> Option<&mut Node<E>> {
    let mut node = self.head.as_deref_mut()?;
    for _ in 0..index {
      node = node.next.as_deref_mut()?;
    }
    Some(node)
  }
}

impl<E: Element> Default for LinkedList<E> {
  fn default() -> Self {
    Self::new()
  }
}

impl<E> Drop for LinkedList<E> {
  fn drop(&mut self) {
    // Same iterative unlinking as `clear`; spelled out here because `Drop`
    // cannot carry the `Element` bound the inherent impl uses.
    let mut cursor = self.head.take();
    while let Some(mut node) = cursor {
      cursor = node.next.take();
    }
  }
}

impl<E: Element> fmt::Debug for LinkedList<E> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_list().entries(self.iter()).finish()
  }
}
