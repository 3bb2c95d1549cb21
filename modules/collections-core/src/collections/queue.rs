//! FIFO queues and their shared capacity and error types.

mod queue_error;
mod queue_size;
mod stack_queue;
mod traits;
mod vec_queue;

pub use queue_error::QueueError;
pub use queue_size::QueueSize;
pub use stack_queue::StackQueue;
pub use traits::QueueBehavior;
pub use vec_queue::VecQueue;
