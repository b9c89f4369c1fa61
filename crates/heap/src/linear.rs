use crate::error::HeapError;
use crate::queue::PriorityQueue;
use crate::types::HeapArena;
use crate::util;

/// Unordered queue with O(1) insertion and O(n) extraction.
///
/// On dense inputs, where nearly every node has its priority lowered many
/// times, skipping the sift work pays for the linear scan. Node heap indices
/// track each id's position in the unordered array.
#[derive(Clone, Debug, Default)]
pub struct LinearQueue {
    slots: Vec<u32>,
}

impl LinearQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn build<A, I>(arena: &mut A, ids: I) -> Result<Self, HeapError>
    where
        A: HeapArena + ?Sized,
        I: IntoIterator<Item = u32>,
    {
        let slots: Vec<u32> = ids.into_iter().collect();
        util::check_ids(arena, &slots)?;
        for (i, &id) in slots.iter().enumerate() {
            arena.set_heap_index(id, Some(i as u32));
        }
        Ok(Self { slots })
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn contains<A: HeapArena + ?Sized>(&self, arena: &A, id: u32) -> bool {
        if id as usize >= arena.node_count() {
            return false;
        }
        arena
            .heap_index(id)
            .is_some_and(|slot| self.slots.get(slot as usize) == Some(&id))
    }

    pub fn insert<A: HeapArena + ?Sized>(&mut self, arena: &mut A, id: u32) -> Result<(), HeapError> {
        if id as usize >= arena.node_count() {
            return Err(HeapError::UnknownNode(id));
        }
        if self.contains(arena, id) {
            return Err(HeapError::AlreadyQueued(id));
        }
        arena.set_heap_index(id, Some(self.slots.len() as u32));
        self.slots.push(id);
        Ok(())
    }

    pub fn extract_min<A: HeapArena + ?Sized>(&mut self, arena: &mut A) -> Result<u32, HeapError> {
        if self.slots.is_empty() {
            return Err(HeapError::Empty);
        }
        let mut best = 0;
        for i in 1..self.slots.len() {
            if arena.heap_cmp(self.slots[i], self.slots[best]).is_lt() {
                best = i;
            }
        }
        let id = self.slots.swap_remove(best);
        if let Some(&moved) = self.slots.get(best) {
            arena.set_heap_index(moved, Some(best as u32));
        }
        arena.set_heap_index(id, None);
        Ok(id)
    }

    /// Queued ids in insertion order, modulo extractions.
    pub fn iter(&self) -> impl Iterator<Item = u32> + '_ {
        self.slots.iter().copied()
    }

    pub fn clear<A: HeapArena + ?Sized>(&mut self, arena: &mut A) {
        for id in self.slots.drain(..) {
            arena.set_heap_index(id, None);
        }
    }
}

impl<A: HeapArena + ?Sized> PriorityQueue<A> for LinearQueue {
    fn len(&self) -> usize {
        self.slots.len()
    }

    fn extract_min(&mut self, arena: &mut A) -> Result<u32, HeapError> {
        LinearQueue::extract_min(self, arena)
    }

    /// Nothing to do: extraction scans every priority anyway.
    fn reorder(&mut self, _arena: &mut A, _id: u32) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sort::Adapter;
    use crate::types::HeapNode;

    #[test]
    fn extracts_in_priority_order_and_tracks_slots() {
        let mut arena: Vec<Adapter<i32>> = [4, 1, 3, 2]
            .iter()
            .enumerate()
            .map(|(i, &v)| Adapter::new(v, i as u32))
            .collect();
        let mut queue = LinearQueue::build(&mut arena, 0..4).unwrap();

        assert_eq!(queue.extract_min(&mut arena), Ok(1));
        assert_eq!(arena[1].heap_index(), None);
        // node 3 was swapped into slot 1
        assert_eq!(arena[3].heap_index(), Some(1));

        arena[0].value = 0;
        PriorityQueue::reorder(&mut queue, &mut arena, 0);
        assert_eq!(queue.extract_min(&mut arena), Ok(0));
        assert_eq!(queue.extract_min(&mut arena), Ok(3));
        assert_eq!(queue.extract_min(&mut arena), Ok(2));
        assert_eq!(queue.extract_min(&mut arena), Err(HeapError::Empty));
    }

    #[test]
    fn rejects_duplicates() {
        let mut arena = vec![Adapter::new(1, 0), Adapter::new(2, 1)];
        let mut queue = LinearQueue::new();
        queue.insert(&mut arena, 1).unwrap();
        assert_eq!(queue.insert(&mut arena, 1), Err(HeapError::AlreadyQueued(1)));
        assert_eq!(queue.insert(&mut arena, 5), Err(HeapError::UnknownNode(5)));
        assert!(queue.contains(&arena, 1));
        assert!(!queue.contains(&arena, 0));
    }
}
