//! Shortest paths, unweighted (BFS layers) and weighted (Dijkstra).

use std::collections::VecDeque;
use std::hash::Hash;

use arboreal_heap::{LinearQueue, MinHeap, PriorityQueue};
use tracing::debug;

use crate::error::Result;
use crate::graph::Graph;
use crate::types::{Slots, VertexId};

impl<T> Graph<T>
where
    T: Eq + Hash + Clone,
{
    /// Path with the fewest edges from `origin` to `destination`, both ends
    /// included. Empty when `destination` cannot be reached.
    pub fn shortest_path(&mut self, origin: &T, destination: &T) -> Result<Vec<VertexId>> {
        let origin = self.lookup(origin)?;
        let destination = self.lookup(destination)?;
        if origin == destination {
            return Ok(vec![origin]);
        }

        self.reset_distances();
        self.slots.at_mut(origin).distance = 0.0;
        let mut queue = VecDeque::from([origin]);
        while let Some(v) = queue.pop_front() {
            let next = self.slots.at(v).distance + 1.0;
            for i in 0..self.slots.at(v).neighbors.len() {
                let (&n, _) = self.slots.at(v).neighbors.get_index(i).expect("index below degree");
                let neighbor = self.slots.at_mut(n);
                if neighbor.distance == f64::INFINITY {
                    neighbor.distance = next;
                    queue.push_back(n);
                }
            }
        }

        let path = self.reconstruct(origin, destination, |slots, v, n, _| {
            slots.at(n).distance == slots.at(v).distance - 1.0
        });
        self.reset_distances();
        Ok(path)
    }

    /// Path of least total weight from `origin` to `destination`, both ends
    /// included. Empty when `destination` cannot be reached.
    pub fn shortest_path_weighted(&mut self, origin: &T, destination: &T) -> Result<Vec<VertexId>> {
        let origin = self.lookup(origin)?;
        let destination = self.lookup(destination)?;
        if origin == destination {
            return Ok(vec![origin]);
        }

        self.reset_distances();
        self.slots.at_mut(origin).distance = 0.0;
        let ids = self.ids().into_iter().map(VertexId::index);
        let linear = self.config.use_linear_queue(self.len(), self.edge_count());
        debug!(
            vertices = self.len(),
            edges = self.edge_count(),
            linear,
            "dijkstra queue selected"
        );
        if linear {
            let mut queue = LinearQueue::build(&mut self.slots, ids).expect("live, distinct ids");
            relax_all(&mut self.slots, &mut queue);
        } else {
            let mut queue = MinHeap::build(&mut self.slots, ids).expect("live, distinct ids");
            relax_all(&mut self.slots, &mut queue);
        }

        // Rounding can make `d(n) + w == d(v)` hold both ways across an edge;
        // requiring `n` to have been settled first keeps the walk acyclic.
        let path = self.reconstruct(origin, destination, |slots, v, n, weight| {
            let (v, n) = (slots.at(v), slots.at(n));
            settled_before(n.settled, v.settled) && n.distance + weight == v.distance
        });
        self.reset_distances();
        Ok(path)
    }

    /// Walks back from `destination`, each step taking the first neighbour
    /// `n` of the current vertex `v` for which `is_previous(slots, v, n,
    /// weight(v, n))` holds.
    fn reconstruct<P>(&self, origin: VertexId, destination: VertexId, is_previous: P) -> Vec<VertexId>
    where
        P: Fn(&Slots<T>, VertexId, VertexId, f64) -> bool,
    {
        if self.slots.at(destination).distance == f64::INFINITY {
            return Vec::new();
        }
        let mut path = vec![destination];
        let mut v = destination;
        while v != origin {
            v = self
                .slots
                .at(v)
                .neighbors
                .iter()
                .find(|&(&n, &w)| is_previous(&self.slots, v, n, w))
                .map(|(&n, _)| n)
                .expect("reached vertex has a predecessor");
            path.push(v);
        }
        path.reverse();
        path
    }
}

impl<T> Graph<T> {
    /// Clears the scratch distances, queue indices and extraction order used
    /// by path queries.
    fn reset_distances(&mut self) {
        for vertex in self.slots.live_mut() {
            vertex.distance = f64::INFINITY;
            vertex.heap_index = None;
            vertex.settled = None;
        }
    }
}

fn settled_before(a: Option<u32>, b: Option<u32>) -> bool {
    matches!((a, b), (Some(a), Some(b)) if a < b)
}

/// Extracts vertices in distance order, lowering each neighbour's distance
/// through the extracted vertex when that is shorter.
fn relax_all<T, Q>(slots: &mut Slots<T>, queue: &mut Q)
where
    Q: PriorityQueue<Slots<T>>,
{
    let mut order = 0;
    while let Ok(slot) = queue.extract_min(slots) {
        let v = slots.id_at(slot).expect("queued slot is occupied");
        slots.at_mut(v).settled = Some(order);
        order += 1;
        let base = slots.at(v).distance;
        for i in 0..slots.at(v).neighbors.len() {
            let (&n, &weight) = slots.at(v).neighbors.get_index(i).expect("index below degree");
            let candidate = base + weight;
            if candidate < slots.at(n).distance {
                slots.at_mut(n).distance = candidate;
                queue.reorder(slots, n.index());
            }
        }
    }
}
