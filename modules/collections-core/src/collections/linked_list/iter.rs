use crate::collections::{
  Element,
  linked_list::{LinkedList, node::Node},
};

/// Borrowing iterator over a [`LinkedList`], yielding elements head to tail.
pub struct Iter<'a, E> {
  next:      Option<&'a Node<E>>,
  remaining: usize,
}

impl<'a, E> Iter<'a, E> {
  pub(super) fn new(next: Option<&'a Node<E>>, remaining: usize) -> Self {
    Self { next, remaining }
  }
}

impl<'a, E> Iterator for Iter<'a, E> {
  type Item = &'a E;

  fn next(&mut self) -> Option<Self::Item> {
    let node = self.next?;
    self.next = node.next.as_deref();
    self.remaining -= 1;
    Some(&node.value)
  }

  fn size_hint(&self) -> (usize, Option<usize>) {
    (self.remaining, Some(self.remaining))
  }
}

impl<E> ExactSizeIterator for Iter<'_, E> {}

/// Consuming iterator over a [`LinkedList`], yielding elements head to tail.
pub struct IntoIter<E> {
  list: LinkedList<E>,
}

impl<E> IntoIter<E> {
  pub(super) fn new(list: LinkedList<E>) -> Self {
    Self { list }
  }
}

impl<E: Element> Iterator for IntoIter<E> {
  type Item = E;

  fn next(&mut self) -> Option<Self::Item> {
    self.list.pop_front().ok()
  }

  fn size_hint(&self) -> (usize, Option<usize>) {
    (self.list.len(), Some(self.list.len()))
  }
}

impl<E: Element> ExactSizeIterator for IntoIter<E> {}

impl<'a, E: Element> IntoIterator for &'a LinkedList<E> {
  type IntoIter = Iter<'a, E>;
  type Item = &'a E;

  fn into_iter(self) -> Self::IntoIter {
    self.iter()
  }
}

impl<E: Element> IntoIterator for LinkedList<E> {
  type IntoIter = IntoIter<E>;
  type Item = E;

  fn into_iter(self) -> Self::IntoIter {
    IntoIter::new(self)
  }
}

impl<E: Element> FromIterator<E> for LinkedList<E> {
  fn from_iter<I: IntoIterator<Item = E>>(iterable: I) -> Self {
    let mut list = LinkedList::new();
    list.extend(iterable);
    list
  }
}

impl<E: Element> Extend<E> for LinkedList<E> {
  fn extend<I: IntoIterator<Item = E>>(&mut self, iterable: I) {
    for item in iterable {
      self.push_back(item);
    }
  }
}
