use std::cmp::Ordering;

use crate::error::HeapError;
use crate::types::HeapArena;

/// Parent slot of `i`. The root has none, so `i` must be positive.
#[inline]
pub(crate) fn parent(i: usize) -> usize {
    debug_assert!(i > 0, "root slot has no parent");
    (i - 1) / 2
}

#[inline]
pub(crate) fn left(i: usize) -> usize {
    2 * i + 1
}

/// Rejects ids outside the arena and ids listed more than once.
pub(crate) fn check_ids<A: HeapArena + ?Sized>(arena: &A, ids: &[u32]) -> Result<(), HeapError> {
    let mut seen = vec![false; arena.node_count()];
    for &id in ids {
        let flag = seen
            .get_mut(id as usize)
            .ok_or(HeapError::UnknownNode(id))?;
        if *flag {
            return Err(HeapError::AlreadyQueued(id));
        }
        *flag = true;
    }
    Ok(())
}

/// Swaps two slots and writes both nodes' new positions back into the arena.
#[inline]
pub(crate) fn swap<A: HeapArena + ?Sized>(slots: &mut [u32], arena: &mut A, i: usize, j: usize) {
    slots.swap(i, j);
    arena.set_heap_index(slots[i], Some(i as u32));
    arena.set_heap_index(slots[j], Some(j as u32));
}

#[inline]
fn less<A: HeapArena + ?Sized>(arena: &A, a: u32, b: u32) -> bool {
    arena.heap_cmp(a, b) == Ordering::Less
}

/// Moves slot `i` toward the root while it is smaller than its parent.
/// Returns its final slot.
pub fn sift_up<A: HeapArena + ?Sized>(slots: &mut [u32], arena: &mut A, mut i: usize) -> usize {
    while i > 0 {
        let p = parent(i);
        if !less(arena, slots[i], slots[p]) {
            break;
        }
        swap(slots, arena, i, p);
        i = p;
    }
    i
}

/// Moves slot `i` toward the leaves while a child is smaller.
/// Returns its final slot.
pub fn sift_down<A: HeapArena + ?Sized>(slots: &mut [u32], arena: &mut A, mut i: usize) -> usize {
    let len = slots.len();
    loop {
        let l = left(i);
        if l >= len {
            return i;
        }
        let r = l + 1;
        let m = if r < len && less(arena, slots[r], slots[l]) {
            r
        } else {
            l
        };
        if !less(arena, slots[m], slots[i]) {
            return i;
        }
        swap(slots, arena, i, m);
        i = m;
    }
}

/// Restores heap order from slot `i` in whichever direction it is broken.
pub fn resift<A: HeapArena + ?Sized>(slots: &mut [u32], arena: &mut A, i: usize) -> usize {
    let up = sift_up(slots, arena, i);
    if up != i {
        up
    } else {
        sift_down(slots, arena, i)
    }
}

/// Bottom-up O(n) heap construction.
pub fn heapify<A: HeapArena + ?Sized>(slots: &mut [u32], arena: &mut A) {
    for i in (0..slots.len() / 2).rev() {
        sift_down(slots, arena, i);
    }
}

/// Checks heap order and that every node's stored index matches its slot.
pub fn assert_heap<A: HeapArena + ?Sized>(slots: &[u32], arena: &A) -> Result<(), String> {
    for (i, &id) in slots.iter().enumerate() {
        if arena.heap_index(id) != Some(i as u32) {
            return Err(format!(
                "Node {id} sits in slot {i} but records {:?}",
                arena.heap_index(id)
            ));
        }
        if i > 0 && less(arena, id, slots[parent(i)]) {
            return Err(format!("Heap order violated at slot {i}"));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sort::Adapter;
    use crate::types::HeapNode;

    fn arena(values: &[i32]) -> Vec<Adapter<i32>> {
        values
            .iter()
            .enumerate()
            .map(|(i, &v)| Adapter::new(v, i as u32))
            .collect()
    }

    #[test]
    fn slot_arithmetic() {
        assert_eq!(left(0), 1);
        assert_eq!(left(3), 7);
        assert_eq!(parent(1), 0);
        assert_eq!(parent(2), 0);
        assert_eq!(parent(6), 2);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "root slot has no parent")]
    fn root_slot_has_no_parent() {
        parent(0);
    }

    #[test]
    fn heapify_orders_and_indexes() {
        let mut nodes = arena(&[9, 4, 7, 1, 8, 2]);
        let mut slots: Vec<u32> = (0..6).collect();
        for (i, &id) in slots.iter().enumerate() {
            nodes.set_heap_index(id, Some(i as u32));
        }
        heapify(&mut slots, &mut nodes);
        assert_heap(&slots, &nodes).unwrap();
        assert_eq!(nodes[slots[0] as usize].value, 1);
    }

    #[test]
    fn resift_moves_both_ways() {
        let mut nodes = arena(&[1, 5, 3, 6, 7]);
        let mut slots: Vec<u32> = (0..5).collect();
        for (i, &id) in slots.iter().enumerate() {
            nodes.set_heap_index(id, Some(i as u32));
        }
        heapify(&mut slots, &mut nodes);

        nodes[4].value = 0;
        let slot = nodes[4].heap_index().unwrap() as usize;
        assert_eq!(resift(&mut slots, &mut nodes, slot), 0);
        assert_heap(&slots, &nodes).unwrap();

        nodes[4].value = 10;
        assert_ne!(resift(&mut slots, &mut nodes, 0), 0);
        assert_heap(&slots, &nodes).unwrap();
    }
}
