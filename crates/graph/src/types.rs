use std::cmp::Ordering;
use std::fmt;

use arboreal_heap::HeapArena;
use indexmap::IndexMap;

/// Handle to a vertex.
///
/// Pairs a slot with the generation that slot had when the vertex was added.
/// Removing the vertex bumps the generation, so an id kept past removal
/// never resolves to a later vertex that reuses the slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VertexId {
    slot: u32,
    generation: u32,
}

impl VertexId {
    pub(crate) fn new(slot: u32, generation: u32) -> Self {
        Self { slot, generation }
    }

    /// Storage slot, shared with any later vertex that reuses it.
    pub fn index(self) -> u32 {
        self.slot
    }

    pub fn generation(self) -> u32 {
        self.generation
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "vertex #{}/{}", self.slot, self.generation)
    }
}

/// Rendering colour, owned by callers. Traversals never touch it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Color {
    #[default]
    Uncolored,
    Red,
    Black,
}

/// Traversal scratch state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) enum Mark {
    #[default]
    Unvisited,
    /// Queued or stacked, not yet visited.
    Frontier,
    Done,
}

#[derive(Clone, Debug)]
pub(crate) struct Vertex<T> {
    pub(crate) element: T,
    /// Neighbour id to edge weight, in connection order.
    pub(crate) neighbors: IndexMap<VertexId, f64>,
    pub(crate) color: Color,
    pub(crate) mark: Mark,
    /// Tentative distance, only meaningful during a path query.
    pub(crate) distance: f64,
    pub(crate) heap_index: Option<u32>,
    /// Position in Dijkstra's extraction order.
    pub(crate) settled: Option<u32>,
}

impl<T> Vertex<T> {
    pub(crate) fn new(element: T) -> Self {
        Self {
            element,
            neighbors: IndexMap::new(),
            color: Color::default(),
            mark: Mark::default(),
            distance: f64::INFINITY,
            heap_index: None,
            settled: None,
        }
    }
}

#[derive(Clone, Debug)]
pub(crate) struct Slot<T> {
    generation: u32,
    vertex: Option<Vertex<T>>,
}

/// Sparse vertex storage. Removed vertices leave a hole that a later
/// insertion fills under the next generation.
#[derive(Clone, Debug)]
pub(crate) struct Slots<T> {
    entries: Vec<Slot<T>>,
    free: Vec<u32>,
}

impl<T> Slots<T> {
    pub(crate) fn new() -> Self {
        Self {
            entries: Vec::new(),
            free: Vec::new(),
        }
    }

    pub(crate) fn insert(&mut self, vertex: Vertex<T>) -> VertexId {
        match self.free.pop() {
            Some(slot) => {
                let entry = &mut self.entries[slot as usize];
                entry.vertex = Some(vertex);
                VertexId::new(slot, entry.generation)
            }
            None => {
                let slot = self.entries.len() as u32;
                self.entries.push(Slot {
                    generation: 0,
                    vertex: Some(vertex),
                });
                VertexId::new(slot, 0)
            }
        }
    }

    /// Empties the slot of `id` and retires its generation.
    pub(crate) fn remove(&mut self, id: VertexId) -> Option<Vertex<T>> {
        self.get(id)?;
        let entry = &mut self.entries[id.slot as usize];
        entry.generation = entry.generation.wrapping_add(1);
        self.free.push(id.slot);
        entry.vertex.take()
    }

    /// Removes every vertex. Ids issued so far stay stale.
    pub(crate) fn clear(&mut self) {
        for (slot, entry) in self.entries.iter_mut().enumerate() {
            if entry.vertex.take().is_some() {
                entry.generation = entry.generation.wrapping_add(1);
                self.free.push(slot as u32);
            }
        }
    }

    #[inline]
    pub(crate) fn get(&self, id: VertexId) -> Option<&Vertex<T>> {
        let entry = self.entries.get(id.slot as usize)?;
        if entry.generation != id.generation {
            return None;
        }
        entry.vertex.as_ref()
    }

    #[inline]
    pub(crate) fn get_mut(&mut self, id: VertexId) -> Option<&mut Vertex<T>> {
        let entry = self.entries.get_mut(id.slot as usize)?;
        if entry.generation != id.generation {
            return None;
        }
        entry.vertex.as_mut()
    }

    /// Live vertex `id`. Ids handed around inside the graph are always live.
    #[inline]
    pub(crate) fn at(&self, id: VertexId) -> &Vertex<T> {
        self.get(id).expect("live vertex id")
    }

    #[inline]
    pub(crate) fn at_mut(&mut self, id: VertexId) -> &mut Vertex<T> {
        self.get_mut(id).expect("live vertex id")
    }

    /// Current id of the vertex in `slot`, if the slot is occupied.
    pub(crate) fn id_at(&self, slot: u32) -> Option<VertexId> {
        let entry = self.entries.get(slot as usize)?;
        entry
            .vertex
            .as_ref()
            .map(|_| VertexId::new(slot, entry.generation))
    }

    fn by_slot(&self, slot: u32) -> Option<&Vertex<T>> {
        self.entries.get(slot as usize)?.vertex.as_ref()
    }

    #[cfg(test)]
    pub(crate) fn live(&self) -> impl Iterator<Item = &Vertex<T>> {
        self.entries.iter().filter_map(|e| e.vertex.as_ref())
    }

    pub(crate) fn live_mut(&mut self) -> impl Iterator<Item = &mut Vertex<T>> {
        self.entries.iter_mut().filter_map(|e| e.vertex.as_mut())
    }
}

/// Orders vertices by tentative distance for the shortest-path queues. Heap
/// ids are slot numbers.
impl<T> HeapArena for Slots<T> {
    fn node_count(&self) -> usize {
        self.entries.len()
    }

    fn heap_index(&self, id: u32) -> Option<u32> {
        self.by_slot(id)?.heap_index
    }

    fn set_heap_index(&mut self, id: u32, index: Option<u32>) {
        self.entries[id as usize]
            .vertex
            .as_mut()
            .expect("queued slot is occupied")
            .heap_index = index;
    }

    fn heap_cmp(&self, a: u32, b: u32) -> Ordering {
        let a = self.by_slot(a).expect("queued slot is occupied").distance;
        let b = self.by_slot(b).expect("queued slot is occupied").distance;
        a.total_cmp(&b)
    }
}
