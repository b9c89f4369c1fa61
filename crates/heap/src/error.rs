/// Failures reported by the priority queues.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HeapError {
    #[error("queue is empty")]
    Empty,
    #[error("index {index} is out of bounds for a queue of length {len}")]
    OutOfBounds { index: usize, len: usize },
    #[error("node {0} is not part of the arena")]
    UnknownNode(u32),
    #[error("node {0} is already queued")]
    AlreadyQueued(u32),
}
