use std::{error, fmt};

/// Errors that occur during queue operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueueError<E> {
  /// The queue is at its capacity bound and cannot accept more elements.
  /// Carries the element that was rejected so the caller can retry or drop it.
  Full(E),
  /// The queue has no elements to consume.
  Empty,
}

impl<E> QueueError<E> {
  /// Extracts the payload carried by variants that preserve the element on
  /// failure.
  #[must_use]
  pub fn into_item(self) -> Option<E> {
    match self {
      | Self::Full(item) => Some(item),
      | Self::Empty => None,
    }
  }
}

impl<E> fmt::Display for QueueError<E> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      | Self::Full(_) => f.write_str("queue is full"),
      | Self::Empty => f.write_str("queue is empty"),
    }
  }
}

impl<E: fmt::Debug> error::Error for QueueError<E> {}
