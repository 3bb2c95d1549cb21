
/// Capacity bound of a queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueueSize {
  /// No bound; the queue grows as needed.
  Limitless,
  /// At most the given number of elements.
  Limited(usize),
}

impl QueueSize {
  /// Constant constructor for an unbounded size.
  #[must_use]
  pub const fn limitless() -> Self {
    Self::Limitless
  }

  /// Constant constructor for a bound of `value` elements.
  #[must_use]
  pub const fn limited(value: usize) -> Self {
    Self::Limited(value)
  }

  /// Indicates whether this size is unbounded.
  #[must_use]
  pub const fn is_limitless(&self) -> bool {
    matches!(self, Self::Limitless)
  }

  /// Indicates whether a queue currently holding `len` elements may accept one
  /// more under this bound.
  #[must_use]
  pub const fn allows(&self, len: usize) -> bool {
    match self {
      | Self::Limitless => true,
      | Self::Limited(max) => len < *max,
    }
  }

  /// Gets the bound as `usize`, with `usize::MAX` standing in for limitless.
  #[must_use]
  pub const fn to_usize(self) -> usize {
    match self {
      | Self::Limitless => usize::MAX,
      | Self::Limited(value) => value,
    }
  }
}

impl Default for QueueSize {
  fn default() -> Self {
    QueueSize::limitless()
  }
}
