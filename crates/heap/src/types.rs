//! Arena contract for intrusive heap indices.
//!
//! Queued nodes live in a caller-owned arena and are referred to by `u32`
//! ids. Each node keeps the slot it currently occupies in the queue, so a
//! queue can find, reorder or remove a node without searching.

use std::cmp::Ordering;

/// A node that can sit in a [`MinHeap`](crate::MinHeap).
pub trait HeapNode {
    /// Slot this node occupies, `None` while not queued.
    fn heap_index(&self) -> Option<u32>;
    fn set_heap_index(&mut self, index: Option<u32>);
    /// Priority order; smaller comes out first.
    fn heap_cmp(&self, other: &Self) -> Ordering;
}

/// Id-addressed access to the nodes a queue orders.
///
/// Implemented for slices and vectors of [`HeapNode`]s. Containers with a
/// different layout (sparse slots, nodes embedded in larger records)
/// implement it directly.
pub trait HeapArena {
    /// Ids `0..node_count()` are addressable.
    fn node_count(&self) -> usize;
    fn heap_index(&self, id: u32) -> Option<u32>;
    fn set_heap_index(&mut self, id: u32, index: Option<u32>);
    fn heap_cmp(&self, a: u32, b: u32) -> Ordering;
}

impl<N: HeapNode> HeapArena for [N] {
    fn node_count(&self) -> usize {
        self.len()
    }

    fn heap_index(&self, id: u32) -> Option<u32> {
        self[id as usize].heap_index()
    }

    fn set_heap_index(&mut self, id: u32, index: Option<u32>) {
        self[id as usize].set_heap_index(index);
    }

    fn heap_cmp(&self, a: u32, b: u32) -> Ordering {
        self[a as usize].heap_cmp(&self[b as usize])
    }
}

impl<N: HeapNode> HeapArena for Vec<N> {
    fn node_count(&self) -> usize {
        self.len()
    }

    fn heap_index(&self, id: u32) -> Option<u32> {
        self.as_slice().heap_index(id)
    }

    fn set_heap_index(&mut self, id: u32, index: Option<u32>) {
        self.as_mut_slice().set_heap_index(id, index);
    }

    fn heap_cmp(&self, a: u32, b: u32) -> Ordering {
        self.as_slice().heap_cmp(a, b)
    }
}
