//! Intrusive priority queues over caller-owned arenas.
//!
//! Nodes stay in the caller's storage and carry the slot they occupy (see
//! [`HeapArena`]), so a queued node can be reordered or removed in
//! O(log n) without a search. Two queues share the [`PriorityQueue`]
//! contract:
//!
//! - [`MinHeap`]: array-backed binary heap, O(log n) insert and extract.
//! - [`LinearQueue`]: unsorted array, O(1) insert and O(n) extract.
//!
//! [`heap_sort`] sorts arbitrary `Ord` values by wrapping them in an
//! [`Adapter`].

pub mod error;
pub mod linear;
pub mod min_heap;
pub mod queue;
pub mod sort;
pub mod types;
pub mod util;

pub use error::HeapError;
pub use linear::LinearQueue;
pub use min_heap::MinHeap;
pub use queue::PriorityQueue;
pub use sort::{heap_sort, Adapter};
pub use types::{HeapArena, HeapNode};
