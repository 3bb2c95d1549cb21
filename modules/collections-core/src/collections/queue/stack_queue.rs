#[cfg(test)]
mod tests;

use std::fmt;

use tracing::trace;

use crate::collections::{
  Element, Stack,
  queue::{QueueBehavior, QueueError, QueueSize},
};

/// FIFO queue built from two LIFO stacks, with an optional capacity bound.
///
/// Enqueues push onto the `inbound` stack. When a dequeue or peek finds the
/// `outbound` stack empty, the entire inbound stack is drained into it first,
/// reversing the order so the oldest element surfaces on top. Each element
/// crosses between the stacks at most once before it is consumed, so both
/// operations are amortized O(1) despite the occasional linear drain.
///
/// The two stacks are private and never handed out: the FIFO ordering depends
/// on the drain happening atomically relative to every other queue operation.
pub struct StackQueue<E> {
  inbound:  Stack<E>,
  outbound: Stack<E>,
  max:      QueueSize,
}

impl<E: Element> StackQueue<E> {
  /// Creates an unbounded queue.
  #[must_use]
  pub const fn new() -> Self {
    Self { inbound: Stack::new(), outbound: Stack::new(), max: QueueSize::limitless() }
  }

  /// Creates a queue bounded to `max` elements in total across both stacks.
  #[must_use]
  pub fn with_max(max: usize) -> Self {
    Self { inbound: Stack::with_capacity(max), outbound: Stack::with_capacity(max), max: QueueSize::limited(max) }
  }

  /// Adds an element at the back of the queue. O(1).
  ///
  /// # Errors
  ///
  /// Returns [`QueueError::Full`], handing the element back, when the combined
  /// size of both stacks has reached the capacity bound.
  pub fn enqueue(&mut self, item: E) -> Result<(), QueueError<E>> {
    if !self.max.allows(self.len()) {
      return Err(QueueError::Full(item));
    }
    self.inbound.push(item);
    Ok(())
  }

  /// Removes and returns the front element. Amortized O(1).
  ///
  /// # Errors
  ///
  /// Returns [`QueueError::Empty`] when both stacks hold no elements.
  pub fn dequeue(&mut self) -> Result<E, QueueError<E>> {
    self.refill_outbound();
    self.outbound.pop().map_err(|_| QueueError::Empty)
  }

  /// Returns the front element without removing it. Amortized O(1); may drain
  /// the inbound stack, which is why a mutable borrow is required.
  ///
  /// # Errors
  ///
  /// Returns [`QueueError::Empty`] when both stacks hold no elements.
  pub fn peek(&mut self) -> Result<&E, QueueError<E>> {
    self.refill_outbound();
    self.outbound.peek().map_err(|_| QueueError::Empty)
  }

  /// Returns the combined number of elements in both stacks.
  #[must_use]
  pub fn len(&self) -> usize {
    self.inbound.len() + self.outbound.len()
  }

  /// Indicates whether both stacks hold no elements.
  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.inbound.is_empty() && self.outbound.is_empty()
  }

  /// Returns the configured capacity bound.
  #[must_use]
  pub const fn max(&self) -> QueueSize {
    self.max
  }

  /// Reconfigures the capacity bound. Permissive: a bound smaller than the
  /// current length never evicts elements, it only rejects future enqueues.
  pub fn set_max(&mut self, max: QueueSize) {
    trace!(?max, len = self.len(), "stack queue capacity rebound");
    self.max = max;
  }

  /// Moves every element from the inbound stack to the outbound stack when the
  /// outbound side is exhausted. The pop/push loop reverses the order, so the
  /// oldest enqueued element ends up on top of outbound.
  fn refill_outbound(&mut self) {
    if !self.outbound.is_empty() {
      return;
    }
    let moved = self.inbound.len();
    while let Ok(item) = self.inbound.pop() {
      self.outbound.push(item);
    }
    if moved > 0 {
      trace!(moved, "drained inbound stack into outbound");
    }
  }
}

impl<E: Element> QueueBehavior<E> for StackQueue<E> {
  fn enqueue(&mut self, item: E) -> Result<(), QueueError<E>> {
    StackQueue::enqueue(self, item)
  }

  fn dequeue(&mut self) -> Result<E, QueueError<E>> {
    StackQueue::dequeue(self)
  }

  fn peek(&mut self) -> Result<&E, QueueError<E>> {
    StackQueue::peek(self)
  }

  fn len(&self) -> usize {
    StackQueue::len(self)
  }

  fn capacity(&self) -> QueueSize {
    self.max
  }

  fn set_max(&mut self, max: QueueSize) {
    StackQueue::set_max(self, max);
  }
}

impl<E: Element> Default for StackQueue<E> {
  fn default() -> Self {
    Self::new()
  }
}

impl<E: Element> fmt::Debug for StackQueue<E> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    // Logical FIFO order: outbound from its top downward, then inbound from
    // its bottom upward.
    f.debug_list().entries(self.outbound.iter().rev().chain(self.inbound.iter())).finish()
  }
}
