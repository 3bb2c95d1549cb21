use super::StackQueue;
use crate::collections::queue::{QueueBehavior, QueueError, QueueSize};

#[test]
fn fifo_order_survives_the_internal_reversal() {
  let mut queue = StackQueue::new();
  for n in 1..=5 {
    queue.enqueue(n).unwrap();
  }
  for expected in 1..=5 {
    assert_eq!(queue.dequeue(), Ok(expected));
  }
  assert!(queue.is_empty());
}

#[test]
fn fifo_order_holds_across_interleaved_operations() {
  let mut queue = StackQueue::new();
  queue.enqueue(1).unwrap();
  queue.enqueue(2).unwrap();
  assert_eq!(queue.dequeue(), Ok(1));

  // these land on inbound while outbound still holds 2
  queue.enqueue(3).unwrap();
  queue.enqueue(4).unwrap();

  assert_eq!(queue.dequeue(), Ok(2));
  assert_eq!(queue.dequeue(), Ok(3));

  queue.enqueue(5).unwrap();
  assert_eq!(queue.dequeue(), Ok(4));
  assert_eq!(queue.dequeue(), Ok(5));
  assert_eq!(queue.dequeue(), Err(QueueError::Empty));
}

#[test]
fn bounded_scenario_round_trip() {
  // queue(max=2): 20 ok, 30 ok, 40 Full; dequeue 20, 30, then Empty.
  let mut queue = StackQueue::with_max(2);
  queue.enqueue(20).unwrap();
  queue.enqueue(30).unwrap();

  assert_eq!(queue.enqueue(40), Err(QueueError::Full(40)));
  assert_eq!(queue.len(), 2);

  assert_eq!(queue.dequeue(), Ok(20));
  assert_eq!(queue.dequeue(), Ok(30));
  assert_eq!(queue.dequeue(), Err(QueueError::Empty));
}

#[test]
fn the_bound_applies_to_the_combined_size() {
  let mut queue = StackQueue::with_max(3);
  queue.enqueue(1).unwrap();
  queue.enqueue(2).unwrap();

  // move everything to the outbound stack, then refill inbound
  assert_eq!(queue.dequeue(), Ok(1));
  queue.enqueue(3).unwrap();
  queue.enqueue(4).unwrap();

  // one element in outbound plus two in inbound hits the bound of three
  assert_eq!(queue.enqueue(5), Err(QueueError::Full(5)));
  assert_eq!(queue.len(), 3);
}

#[test]
fn peek_reads_the_front_without_removing() {
  let mut queue = StackQueue::new();
  assert_eq!(queue.peek(), Err(QueueError::Empty));

  queue.enqueue(10).unwrap();
  queue.enqueue(20).unwrap();

  assert_eq!(queue.peek(), Ok(&10));
  assert_eq!(queue.peek(), Ok(&10));
  assert_eq!(queue.len(), 2);
  assert_eq!(queue.dequeue(), Ok(10));
  assert_eq!(queue.peek(), Ok(&20));
}

#[test]
fn len_sums_both_stacks() {
  let mut queue = StackQueue::new();
  queue.enqueue(1).unwrap();
  queue.enqueue(2).unwrap();
  queue.enqueue(3).unwrap();
  assert_eq!(queue.dequeue(), Ok(1));
  queue.enqueue(4).unwrap();

  // two remain in outbound, one sits in inbound
  assert_eq!(queue.len(), 3);
}

#[test]
fn failed_enqueue_does_not_change_the_size() {
  let mut queue = StackQueue::with_max(1);
  queue.enqueue(1).unwrap();

  let rejected = queue.enqueue(2).unwrap_err();
  assert_eq!(rejected.into_item(), Some(2));
  assert_eq!(queue.len(), 1);
  assert_eq!(queue.dequeue(), Ok(1));
}

#[test]
fn set_max_never_evicts_existing_elements() {
  let mut queue = StackQueue::new();
  queue.enqueue(1).unwrap();
  queue.enqueue(2).unwrap();

  queue.set_max(QueueSize::limited(1));
  assert_eq!(queue.len(), 2);
  assert_eq!(queue.enqueue(3), Err(QueueError::Full(3)));

  assert_eq!(queue.dequeue(), Ok(1));
  assert_eq!(queue.dequeue(), Ok(2));
  assert!(queue.enqueue(3).is_ok());
}

#[test]
fn works_through_the_queue_behavior_trait() {
  let mut queue = StackQueue::with_max(2);
  let behavior: &mut dyn QueueBehavior<&str> = &mut queue;

  behavior.enqueue("a").unwrap();
  behavior.enqueue("b").unwrap();
  assert_eq!(behavior.peek(), Ok(&"a"));
  assert_eq!(behavior.capacity(), QueueSize::limited(2));
  assert_eq!(behavior.dequeue(), Ok("a"));
  assert_eq!(behavior.dequeue(), Ok("b"));
  assert!(behavior.is_empty());
}

#[test]
fn debug_renders_the_logical_fifo_order() {
  let mut queue = StackQueue::new();
  queue.enqueue(1).unwrap();
  queue.enqueue(2).unwrap();
  queue.dequeue().unwrap();
  queue.enqueue(3).unwrap();

  // 2 sits in outbound, 3 in inbound; logical order is front to back
  assert_eq!(format!("{queue:?}"), "[2, 3]");
}
