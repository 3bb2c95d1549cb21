/// Errors produced by list operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ListError {
  /// The list contains no elements.
  #[error("list is empty")]
  Empty,
  /// A positional operation addressed an index outside the valid range.
  #[error("index {index} out of bound for length {len}")]
  IndexOutOfBounds {
    /// The index that was requested.
    index: usize,
    /// The list length at the time of the call.
    len:   usize,
  },
}
