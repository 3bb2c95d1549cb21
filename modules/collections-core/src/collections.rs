//! Container types and the bounds they place on their elements.

mod element;
pub mod linked_list;
pub mod queue;
pub mod stack;

pub use element::Element;
pub use linked_list::{IntoIter, Iter, LinkedList, ListError};
pub use queue::{QueueBehavior, QueueError, QueueSize, StackQueue, VecQueue};
pub use stack::{Stack, StackError};
