use std::cmp::Ordering;

use crate::min_heap::MinHeap;
use crate::types::HeapNode;

/// Wraps an arbitrary ordered value so it can sit in a [`MinHeap`].
///
/// `seq` is assigned by the caller and breaks ties between equal values, which
/// makes [`heap_sort`] stable.
#[derive(Clone, Debug)]
pub struct Adapter<T> {
    pub value: T,
    seq: u32,
    index: Option<u32>,
}

impl<T> Adapter<T> {
    pub fn new(value: T, seq: u32) -> Self {
        Self {
            value,
            seq,
            index: None,
        }
    }

    pub fn seq(&self) -> u32 {
        self.seq
    }

    pub fn into_inner(self) -> T {
        self.value
    }
}

impl<T: Ord> HeapNode for Adapter<T> {
    fn heap_index(&self) -> Option<u32> {
        self.index
    }

    fn set_heap_index(&mut self, index: Option<u32>) {
        self.index = index;
    }

    fn heap_cmp(&self, other: &Self) -> Ordering {
        self.value
            .cmp(&other.value)
            .then(self.seq.cmp(&other.seq))
    }
}

/// Sorts `items` ascending through a binary heap in O(n log n).
pub fn heap_sort<T, I>(items: I) -> Vec<T>
where
    T: Ord,
    I: IntoIterator<Item = T>,
{
    let mut arena: Vec<Adapter<T>> = items
        .into_iter()
        .enumerate()
        .map(|(seq, value)| Adapter::new(value, seq as u32))
        .collect();
    let mut heap = MinHeap::build_all(&mut arena);

    let mut order = Vec::with_capacity(arena.len());
    while let Ok(id) = heap.extract_min(&mut arena) {
        order.push(id);
    }

    let mut slots: Vec<Option<T>> = arena.into_iter().map(|a| Some(a.into_inner())).collect();
    order
        .into_iter()
        .filter_map(|id| slots[id as usize].take())
        .collect()
}
