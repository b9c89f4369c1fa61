use crate::error::HeapError;
use crate::types::HeapArena;

/// The part of a priority queue a shortest-path search needs.
///
/// Both [`MinHeap`](crate::MinHeap) and [`LinearQueue`](crate::LinearQueue)
/// implement it, so a search can pick the one that suits the graph density.
pub trait PriorityQueue<A: HeapArena + ?Sized> {
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Removes and returns the id with the smallest priority.
    fn extract_min(&mut self, arena: &mut A) -> Result<u32, HeapError>;

    /// Re-validates the position of `id` after its priority changed.
    fn reorder(&mut self, arena: &mut A, id: u32);
}
