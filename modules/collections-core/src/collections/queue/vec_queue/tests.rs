use super::VecQueue;
use crate::collections::queue::{QueueBehavior, QueueError, QueueSize};

#[test]
fn enqueue_fills_up_to_the_bound_then_rejects() {
  let mut queue = VecQueue::with_max(3);
  assert!(queue.enqueue(20).is_ok());
  assert!(!queue.is_empty());

  queue.enqueue(30).unwrap();
  queue.enqueue(10).unwrap();
  assert!(queue.is_full());

  assert_eq!(queue.enqueue(40), Err(QueueError::Full(40)));
  assert_eq!(queue.len(), 3);
}

#[test]
fn dequeue_returns_elements_oldest_first() {
  let mut queue = VecQueue::with_max(3);
  queue.enqueue(20).unwrap();
  queue.enqueue(30).unwrap();
  queue.enqueue(10).unwrap();

  assert_eq!(queue.dequeue(), Ok(20));
  queue.dequeue().unwrap();
  assert_eq!(queue.dequeue(), Ok(10));
  assert!(queue.is_empty());

  assert_eq!(queue.dequeue(), Err(QueueError::Empty));
}

#[test]
fn bounded_scenario_round_trip() {
  // queue(max=2): 20 ok, 30 ok, 40 Full; dequeue 20, 30, then Empty.
  let mut queue = VecQueue::with_max(2);
  queue.enqueue(20).unwrap();
  queue.enqueue(30).unwrap();

  let rejected = queue.enqueue(40).unwrap_err();
  assert_eq!(rejected.into_item(), Some(40));
  assert_eq!(queue.len(), 2);

  assert_eq!(queue.dequeue(), Ok(20));
  assert_eq!(queue.dequeue(), Ok(30));
  assert_eq!(queue.dequeue(), Err(QueueError::Empty));
}

#[test]
fn peek_reads_the_front_without_removing() {
  let mut queue = VecQueue::new();
  assert_eq!(queue.peek(), Err(QueueError::Empty));

  queue.enqueue("a").unwrap();
  queue.enqueue("b").unwrap();

  assert_eq!(queue.peek(), Ok(&"a"));
  assert_eq!(queue.len(), 2);
}

#[test]
fn unbounded_queue_never_reports_full() {
  let mut queue = VecQueue::new();
  for n in 0..1000 {
    queue.enqueue(n).unwrap();
  }
  assert!(!queue.is_full());
  assert_eq!(queue.max(), QueueSize::Limitless);
}

#[test]
fn set_max_never_evicts_existing_elements() {
  let mut queue = VecQueue::new();
  queue.enqueue(1).unwrap();
  queue.enqueue(2).unwrap();
  queue.enqueue(3).unwrap();

  queue.set_max(QueueSize::limited(1));
  assert_eq!(queue.len(), 3);
  assert_eq!(queue.enqueue(4), Err(QueueError::Full(4)));

  // draining below the new bound makes room again
  queue.dequeue().unwrap();
  queue.dequeue().unwrap();
  queue.dequeue().unwrap();
  assert!(queue.enqueue(4).is_ok());
}

#[test]
fn raising_the_bound_admits_more_elements() {
  let mut queue = VecQueue::with_max(1);
  queue.enqueue(1).unwrap();
  assert_eq!(queue.enqueue(2), Err(QueueError::Full(2)));

  queue.set_max(QueueSize::limited(2));
  assert!(queue.enqueue(2).is_ok());
  assert_eq!(queue.to_vec(), vec![1, 2]);
}

#[test]
fn to_vec_clones_front_to_back() {
  let mut queue = VecQueue::new();
  queue.enqueue(1).unwrap();
  queue.enqueue(2).unwrap();
  queue.dequeue().unwrap();
  queue.enqueue(3).unwrap();

  assert_eq!(queue.to_vec(), vec![2, 3]);
}

#[test]
fn works_through_the_queue_behavior_trait() {
  let mut queue = VecQueue::with_max(2);
  let behavior: &mut dyn QueueBehavior<i32> = &mut queue;

  behavior.enqueue(5).unwrap();
  assert_eq!(behavior.peek(), Ok(&5));
  assert_eq!(behavior.len(), 1);
  assert_eq!(behavior.capacity(), QueueSize::limited(2));
  assert_eq!(behavior.dequeue(), Ok(5));
  assert!(behavior.is_empty());
}

#[test]
fn debug_renders_front_to_back() {
  let mut queue = VecQueue::new();
  queue.enqueue(1).unwrap();
  queue.enqueue(2).unwrap();
  assert_eq!(format!("{queue:?}"), "[1, 2]");
}
