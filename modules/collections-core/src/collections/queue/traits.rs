use crate::collections::{
  Element,
  queue::{QueueError, QueueSize},
};

/// Common FIFO surface implemented by every queue flavor in this crate.
///
/// `peek` takes `&mut self` because some implementations (the dual-stack
/// queue in particular) rearrange internal state to surface the front element
/// even though the logical contents are unchanged.
pub trait QueueBehavior<E: Element> {
  /// Adds an element at the back of the queue.
  ///
  /// # Errors
  ///
  /// Returns [`QueueError::Full`], handing the element back, when the queue is
  /// at its capacity bound.
  fn enqueue(&mut self, item: E) -> Result<(), QueueError<E>>;

  /// Removes and returns the element at the front of the queue.
  ///
  /// # Errors
  ///
  /// Returns [`QueueError::Empty`] when the queue holds no elements.
  fn dequeue(&mut self) -> Result<E, QueueError<E>>;

  /// Returns the element at the front of the queue without removing it.
  ///
  /// # Errors
  ///
  /// Returns [`QueueError::Empty`] when the queue holds no elements.
  fn peek(&mut self) -> Result<&E, QueueError<E>>;

  /// Returns the number of stored elements.
  fn len(&self) -> usize;

  /// Returns the configured capacity bound.
  fn capacity(&self) -> QueueSize;

  /// Reconfigures the capacity bound. Permissive: elements already stored are
  /// never evicted, only future [`enqueue`](Self::enqueue) calls are checked.
  fn set_max(&mut self, max: QueueSize);

  /// Indicates whether the queue holds no elements.
  fn is_empty(&self) -> bool {
    self.len() == 0
  }
}
