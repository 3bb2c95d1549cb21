//! Unbounded LIFO stack over contiguous storage.

mod stack_error;

pub use stack_error::StackError;

use std::{fmt, slice};

use crate::collections::Element;

/// A generic LIFO container with its top at the end of a growable buffer.
///
/// There is no capacity bound; pushes grow the backing storage as needed.
/// [`pop`](Self::pop) and [`peek`](Self::peek) report [`StackError::Empty`]
/// rather than panicking when no element is available.
pub struct Stack<E> {
  items: Vec<E>,
}

impl<E: Element> Stack<E> {
  /// Creates an empty stack.
  #[must_use]
  pub const fn new() -> Self {
    Self { items: Vec::new() }
  }

  /// Creates an empty stack with room for `capacity` elements before the
  /// backing storage reallocates.
  #[must_use]
  pub fn with_capacity(capacity: usize) -> Self {
    Self { items: Vec::with_capacity(capacity) }
  }

  /// Pushes an element onto the top. Amortized O(1).
  pub fn push(&mut self, item: E) {
    self.items.push(item);
  }

  /// Removes and returns the top element. O(1).
  ///
  /// # Errors
  ///
  /// Returns [`StackError::Empty`] when the stack holds no elements.
  pub fn pop(&mut self) -> Result<E, StackError> {
    self.items.pop().ok_or(StackError::Empty)
  }

  /// Returns the top element without removing it. O(1).
  ///
  /// # Errors
  ///
  /// Returns [`StackError::Empty`] when the stack holds no elements.
  pub fn peek(&self) -> Result<&E, StackError> {
    self.items.last().ok_or(StackError::Empty)
  }

  /// Returns the number of stored elements.
  #[must_use]
  pub fn len(&self) -> usize {
    self.items.len()
  }

  /// Indicates whether the stack holds no elements.
  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.items.is_empty()
  }

  /// Drops every element, leaving the stack empty.
  pub fn clear(&mut self) {
    self.items.clear();
  }

  /// Returns an iterator from the bottom of the stack to the top.
  pub fn iter(&self) -> slice::Iter<'_, E> {
    self.items.iter()
  }
}

impl<E: Element> Default for Stack<E> {
  fn default() -> Self {
    Self::new()
  }
}

impl<E: Element> fmt::Debug for Stack<E> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_list().entries(self.items.iter()).finish()
  }
}
