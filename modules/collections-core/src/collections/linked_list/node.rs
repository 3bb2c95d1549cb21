/// Exclusive forward link to the next node, or `None` at the tail.
pub(super) type Link<E> = Option<Box<Node<E>>>;

/// A cell of a [`LinkedList`](super::LinkedList): one value plus the owning
/// pointer to its successor. Every node has exactly one owner, either the list
/// head or the predecessor's `next` link.
pub(super) struct Node<E> {
  pub(super) value: E,
  pub(super) next:  Link<E>,
}

impl<E> Node<E> {
  pub(super) fn new(value: E) -> Self {
    Self { value, next: None }
  }
}
