//! Linear collection primitives.
//!
//! This crate provides a small family of generic, single-threaded containers: a
//! singly linked list with head and tail tracking, an unbounded LIFO stack, and
//! two FIFO queue flavors (ring-buffer backed and dual-stack backed). Every
//! fallible operation reports a typed error instead of panicking, so callers can
//! probe emptiness or fullness defensively without special-casing.
//!
//! None of the containers synchronize internally; each instance is meant to be
//! exclusively owned by one caller context, which Rust's borrow rules enforce.

pub mod collections;

pub use collections::{
  Element, IntoIter, Iter, LinkedList, ListError, QueueBehavior, QueueError, QueueSize, Stack, StackError, StackQueue,
  VecQueue,
};
