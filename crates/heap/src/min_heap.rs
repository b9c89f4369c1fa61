//! Array-backed binary min-heap of arena node ids.

use tracing::trace;

use crate::error::HeapError;
use crate::queue::PriorityQueue;
use crate::types::HeapArena;
use crate::util;

/// Binary min-heap whose nodes know their own slot.
///
/// The heap stores only ids; priorities are read from the arena passed to
/// every operation, and each node's heap index is kept equal to its slot.
/// The same arena must be passed to every call on a given heap.
#[derive(Clone, Debug, Default)]
pub struct MinHeap {
    slots: Vec<u32>,
}

impl MinHeap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity.max(1)),
        }
    }

    /// Builds a heap over `ids` in O(n).
    ///
    /// Fails without touching the arena if an id is outside it or listed
    /// twice.
    pub fn build<A, I>(arena: &mut A, ids: I) -> Result<Self, HeapError>
    where
        A: HeapArena + ?Sized,
        I: IntoIterator<Item = u32>,
    {
        let slots: Vec<u32> = ids.into_iter().collect();
        util::check_ids(arena, &slots)?;
        let mut heap = Self { slots };
        for (i, &id) in heap.slots.iter().enumerate() {
            arena.set_heap_index(id, Some(i as u32));
        }
        util::heapify(&mut heap.slots, arena);
        Ok(heap)
    }

    /// Builds a heap over every node of the arena.
    pub fn build_all<A: HeapArena + ?Sized>(arena: &mut A) -> Self {
        let mut slots: Vec<u32> = (0..arena.node_count() as u32).collect();
        for &id in &slots {
            arena.set_heap_index(id, Some(id));
        }
        util::heapify(&mut slots, arena);
        Self { slots }
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.slots.capacity()
    }

    /// Whether `id` is currently queued in this heap.
    pub fn contains<A: HeapArena + ?Sized>(&self, arena: &A, id: u32) -> bool {
        self.slot_of(arena, id).is_some()
    }

    fn slot_of<A: HeapArena + ?Sized>(&self, arena: &A, id: u32) -> Option<usize> {
        if id as usize >= arena.node_count() {
            return None;
        }
        let slot = arena.heap_index(id)? as usize;
        (self.slots.get(slot) == Some(&id)).then_some(slot)
    }

    pub fn insert<A: HeapArena + ?Sized>(&mut self, arena: &mut A, id: u32) -> Result<(), HeapError> {
        if id as usize >= arena.node_count() {
            return Err(HeapError::UnknownNode(id));
        }
        if self.contains(arena, id) {
            return Err(HeapError::AlreadyQueued(id));
        }
        self.grow();
        let slot = self.slots.len();
        self.slots.push(id);
        arena.set_heap_index(id, Some(slot as u32));
        util::sift_up(&mut self.slots, arena, slot);
        Ok(())
    }

    /// Doubles the backing array when it is full.
    fn grow(&mut self) {
        let capacity = self.slots.capacity();
        if self.slots.len() == capacity {
            let additional = capacity.max(1);
            self.slots.reserve_exact(additional);
            trace!(from = capacity, to = capacity + additional, "heap grown");
        }
    }

    /// Smallest queued id, without removing it.
    pub fn peek(&self) -> Option<u32> {
        self.slots.first().copied()
    }

    /// Id in slot `index`, in level order.
    pub fn get(&self, index: usize) -> Result<u32, HeapError> {
        self.slots.get(index).copied().ok_or(HeapError::OutOfBounds {
            index,
            len: self.slots.len(),
        })
    }

    pub fn extract_min<A: HeapArena + ?Sized>(&mut self, arena: &mut A) -> Result<u32, HeapError> {
        if self.slots.is_empty() {
            return Err(HeapError::Empty);
        }
        Ok(self.take_slot(arena, 0))
    }

    /// Removes `id` if it is queued here. Returns whether it was.
    pub fn remove<A: HeapArena + ?Sized>(&mut self, arena: &mut A, id: u32) -> bool {
        match self.slot_of(arena, id) {
            Some(slot) => {
                self.take_slot(arena, slot);
                true
            }
            None => false,
        }
    }

    /// Detaches the node in `slot`, filling the hole with the last node.
    fn take_slot<A: HeapArena + ?Sized>(&mut self, arena: &mut A, slot: usize) -> u32 {
        let last = self.slots.len() - 1;
        if slot != last {
            util::swap(&mut self.slots, arena, slot, last);
        }
        let id = self.slots.pop().expect("slot exists");
        arena.set_heap_index(id, None);
        if slot < self.slots.len() {
            util::resift(&mut self.slots, arena, slot);
        }
        id
    }

    /// Restores heap order around `id` after its priority changed in either
    /// direction. Ids not queued here are ignored.
    pub fn reorder<A: HeapArena + ?Sized>(&mut self, arena: &mut A, id: u32) {
        if let Some(slot) = self.slot_of(arena, id) {
            util::resift(&mut self.slots, arena, slot);
        }
    }

    /// Queued ids in level order.
    pub fn iter(&self) -> impl Iterator<Item = u32> + '_ {
        self.slots.iter().copied()
    }

    /// Empties the heap, resetting every queued node's index.
    pub fn clear<A: HeapArena + ?Sized>(&mut self, arena: &mut A) {
        for id in self.slots.drain(..) {
            arena.set_heap_index(id, None);
        }
    }

    pub fn assert_valid<A: HeapArena + ?Sized>(&self, arena: &A) -> Result<(), String> {
        util::assert_heap(&self.slots, arena)
    }
}

impl<A: HeapArena + ?Sized> PriorityQueue<A> for MinHeap {
    fn len(&self) -> usize {
        self.slots.len()
    }

    fn extract_min(&mut self, arena: &mut A) -> Result<u32, HeapError> {
        MinHeap::extract_min(self, arena)
    }

    fn reorder(&mut self, arena: &mut A, id: u32) {
        MinHeap::reorder(self, arena, id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sort::Adapter;
    use crate::types::HeapNode;

    fn nodes(values: &[i32]) -> Vec<Adapter<i32>> {
        values
            .iter()
            .enumerate()
            .map(|(i, &v)| Adapter::new(v, i as u32))
            .collect()
    }

    #[test]
    fn growth_doubles_capacity() {
        let mut arena = nodes(&[5, 4, 3, 2, 1]);
        let mut heap = MinHeap::with_capacity(1);
        assert!(heap.capacity() >= 1);
        heap.insert(&mut arena, 0).unwrap();
        heap.insert(&mut arena, 1).unwrap();
        assert!(heap.capacity() >= 2);
        heap.insert(&mut arena, 2).unwrap();
        assert!(heap.capacity() >= 3);
        assert_eq!(heap.peek(), Some(2));
    }

    #[test]
    fn build_rejects_bad_ids_untouched() {
        let mut arena = nodes(&[1, 2, 3]);
        assert_eq!(
            MinHeap::build(&mut arena, [0, 7]).unwrap_err(),
            HeapError::UnknownNode(7)
        );
        assert_eq!(
            MinHeap::build(&mut arena, [0, 1, 0]).unwrap_err(),
            HeapError::AlreadyQueued(0)
        );
        assert!(arena.iter().all(|n| n.heap_index().is_none()));
    }

    #[test]
    fn stale_index_is_not_tracked() {
        let mut arena = nodes(&[3, 1, 2]);
        let mut heap = MinHeap::build(&mut arena, [0, 1]).unwrap();
        // node 2 claims slot 0 without being queued
        arena[2].set_heap_index(Some(0));
        assert!(!heap.contains(&arena, 2));
        assert!(!heap.remove(&mut arena, 2));
        assert_eq!(heap.len(), 2);
        heap.assert_valid(&arena).unwrap();
    }
}
