/// Errors produced by stack operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum StackError {
  /// The stack contains no elements.
  #[error("stack is empty")]
  Empty,
}
