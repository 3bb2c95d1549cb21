#[cfg(test)]
mod tests;

use std::{collections::VecDeque, fmt};

use tracing::trace;

use crate::collections::{
  Element,
  queue::{QueueBehavior, QueueError, QueueSize},
};

/// FIFO queue layered over a ring buffer, with an optional capacity bound.
///
/// Enqueues append at the back and dequeues pop from the front, both O(1)
/// amortized. When a bound is configured, [`enqueue`](Self::enqueue) rejects
/// elements once the queue is full; the bound can be changed later with
/// [`set_max`](Self::set_max) without evicting anything.
///
/// # Example
///
/// ```
/// use lineal_collections_core_rs::{QueueError, VecQueue};
///
/// let mut queue = VecQueue::with_max(2);
/// queue.enqueue(20).unwrap();
/// queue.enqueue(30).unwrap();
/// assert_eq!(queue.enqueue(40), Err(QueueError::Full(40)));
/// assert_eq!(queue.dequeue(), Ok(20));
/// ```
pub struct VecQueue<E> {
  buffer: VecDeque<E>,
  max:    QueueSize,
}

impl<E: Element> VecQueue<E> {
  /// Creates an unbounded queue.
  #[must_use]
  pub const fn new() -> Self {
    Self { buffer: VecDeque::new(), max: QueueSize::limitless() }
  }

  /// Creates a queue bounded to `max` elements, with the backing buffer sized
  /// up front.
  #[must_use]
  pub fn with_max(max: usize) -> Self {
    Self { buffer: VecDeque::with_capacity(max), max: QueueSize::limited(max) }
  }

  /// Adds an element at the back of the queue. Amortized O(1).
  ///
  /// # Errors
  ///
  /// Returns [`QueueError::Full`], handing the element back, when the queue is
  /// at its capacity bound.
  pub fn enqueue(&mut self, item: E) -> Result<(), QueueError<E>> {
    if !self.max.allows(self.buffer.len()) {
      return Err(QueueError::Full(item));
    }
    self.buffer.push_back(item);
    Ok(())
  }

  /// Removes and returns the front element. O(1).
  ///
  /// # Errors
  ///
  /// Returns [`QueueError::Empty`] when the queue holds no elements.
  pub fn dequeue(&mut self) -> Result<E, QueueError<E>> {
    self.buffer.pop_front().ok_or(QueueError::Empty)
  }

  /// Returns the front element without removing it. O(1).
  ///
  /// # Errors
  ///
  /// Returns [`QueueError::Empty`] when the queue holds no elements.
  pub fn peek(&self) -> Result<&E, QueueError<E>> {
    self.buffer.front().ok_or(QueueError::Empty)
  }

  /// Returns the number of stored elements.
  #[must_use]
  pub fn len(&self) -> usize {
    self.buffer.len()
  }

  /// Indicates whether the queue holds no elements.
  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.buffer.is_empty()
  }

  /// Indicates whether the queue is at its capacity bound. Always `false` for
  /// an unbounded queue.
  #[must_use]
  pub fn is_full(&self) -> bool {
    !self.max.allows(self.buffer.len())
  }

  /// Returns the configured capacity bound.
  #[must_use]
  pub const fn max(&self) -> QueueSize {
    self.max
  }

  /// Reconfigures the capacity bound. Permissive: a bound smaller than the
  /// current length never evicts elements, it only rejects future enqueues.
  pub fn set_max(&mut self, max: QueueSize) {
    trace!(?max, len = self.buffer.len(), "vec queue capacity rebound");
    self.max = max;
  }

  /// Copies every element into a fresh `Vec` in front-to-back order. O(len).
  #[must_use]
  pub fn to_vec(&self) -> Vec<E>
  where
    E: Clone, {
    self.buffer.iter().cloned().collect()
  }
}

impl<E: Element> QueueBehavior<E> for VecQueue<E> {
  fn enqueue(&mut self, item: E) -> Result<(), QueueError<E>> {
    VecQueue::enqueue(self, item)
  }

  fn dequeue(&mut self) -> Result<E, QueueError<E>> {
    VecQueue::dequeue(self)
  }

  fn peek(&mut self) -> Result<&E, QueueError<E>> {
    VecQueue::peek(self)
  }

  fn len(&self) -> usize {
    VecQueue::len(self)
  }

  fn capacity(&self) -> QueueSize {
    self.max
  }

  fn set_max(&mut self, max: QueueSize) {
    VecQueue::set_max(self, max);
  }
}

impl<E: Element> Default for VecQueue<E> {
  fn default() -> Self {
    Self::new()
  }
}

impl<E: Element> fmt::Debug for VecQueue<E> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_list().entries(self.buffer.iter()).finish()
  }
}
