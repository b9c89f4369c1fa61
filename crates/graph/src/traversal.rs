//! Breadth- and depth-first traversal.
//!
//! Both walks share one loop; only the frontier container differs. A
//! `VecDeque` gives FIFO order (BFS) and a `Vec` gives LIFO order (DFS).

use std::collections::VecDeque;
use std::hash::Hash;
use std::ops::ControlFlow;

use tracing::debug;

use crate::error::Result;
use crate::graph::{Graph, VertexRef};
use crate::types::{Mark, VertexId};

/// Storage for discovered but not yet visited vertices.
trait Frontier: Default {
    fn push(&mut self, id: VertexId);
    fn pop(&mut self) -> Option<VertexId>;
}

impl Frontier for VecDeque<VertexId> {
    fn push(&mut self, id: VertexId) {
        self.push_back(id);
    }

    fn pop(&mut self) -> Option<VertexId> {
        self.pop_front()
    }
}

impl Frontier for Vec<VertexId> {
    fn push(&mut self, id: VertexId) {
        Vec::push(self, id);
    }

    fn pop(&mut self) -> Option<VertexId> {
        Vec::pop(self)
    }
}

impl<T> Graph<T>
where
    T: Eq + Hash + Clone,
{
    /// Visits every vertex reachable from `start` in breadth-first order.
    pub fn bfs<F>(&mut self, start: &T, mut visit: F) -> Result<()>
    where
        F: FnMut(VertexRef<'_, T>),
    {
        self.bfs_until(start, |v| {
            visit(v);
            ControlFlow::<()>::Continue(())
        })?;
        Ok(())
    }

    /// Visits every vertex reachable from `start` in depth-first order.
    pub fn dfs<F>(&mut self, start: &T, mut visit: F) -> Result<()>
    where
        F: FnMut(VertexRef<'_, T>),
    {
        self.dfs_until(start, |v| {
            visit(v);
            ControlFlow::<()>::Continue(())
        })?;
        Ok(())
    }

    /// Like [`bfs`](Self::bfs), stopping at the first `Break`, whose value is
    /// returned.
    pub fn bfs_until<B, F>(&mut self, start: &T, visit: F) -> Result<Option<B>>
    where
        F: FnMut(VertexRef<'_, T>) -> ControlFlow<B>,
    {
        let start = self.lookup(start)?;
        Ok(self.walk::<VecDeque<VertexId>, B, F>(start, visit))
    }

    /// Like [`dfs`](Self::dfs), stopping at the first `Break`, whose value is
    /// returned.
    pub fn dfs_until<B, F>(&mut self, start: &T, visit: F) -> Result<Option<B>>
    where
        F: FnMut(VertexRef<'_, T>) -> ControlFlow<B>,
    {
        let start = self.lookup(start)?;
        Ok(self.walk::<Vec<VertexId>, B, F>(start, visit))
    }

    /// Whether every vertex can be reached from every other one. The empty
    /// graph counts as connected.
    pub fn is_connected(&mut self) -> bool {
        let Some(&first) = self.index.values().next() else {
            return true;
        };
        let mut reached = 0;
        self.walk::<Vec<VertexId>, (), _>(first, |_| {
            reached += 1;
            ControlFlow::Continue(())
        });
        reached == self.len()
    }
}

impl<T> Graph<T> {
    fn walk<S, B, F>(&mut self, start: VertexId, mut visit: F) -> Option<B>
    where
        S: Frontier,
        F: FnMut(VertexRef<'_, T>) -> ControlFlow<B>,
    {
        self.reset_marks();
        let mut frontier = S::default();
        frontier.push(start);
        self.slots.at_mut(start).mark = Mark::Frontier;

        let mut visited = 0usize;
        let mut outcome = None;
        while let Some(id) = frontier.pop() {
            self.slots.at_mut(id).mark = Mark::Done;
            visited += 1;
            if let ControlFlow::Break(b) = visit(VertexRef::new(self, id)) {
                outcome = Some(b);
                break;
            }
            let degree = self.slots.at(id).neighbors.len();
            for i in 0..degree {
                let (&n, _) = self
                    .slots
                    .at(id)
                    .neighbors
                    .get_index(i)
                    .expect("index below degree");
                let neighbor = self.slots.at_mut(n);
                if neighbor.mark == Mark::Unvisited {
                    neighbor.mark = Mark::Frontier;
                    frontier.push(n);
                }
            }
        }

        self.reset_marks();
        debug!(visited, stopped = outcome.is_some(), "traversal finished");
        outcome
    }

    fn reset_marks(&mut self) {
        for vertex in self.slots.live_mut() {
            vertex.mark = Mark::Unvisited;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_unvisited<T>(graph: &Graph<T>) -> bool {
        graph.slots.live().all(|v| v.mark == Mark::Unvisited)
    }

    #[test]
    fn marks_reset_after_early_exit() {
        let mut graph = Graph::new();
        for v in 0..4 {
            graph.add_vertex(v).unwrap();
        }
        graph.connect(&0, &1).unwrap();
        graph.connect(&1, &2).unwrap();

        let found = graph
            .bfs_until(&0, |v| {
                if *v.element() == 1 {
                    ControlFlow::Break(v.id())
                } else {
                    ControlFlow::Continue(())
                }
            })
            .unwrap();
        assert_eq!(found, graph.vertex_id(&1));
        assert!(all_unvisited(&graph));
    }

    #[test]
    fn frontier_orders() {
        let mut queue = VecDeque::new();
        let mut stack = Vec::new();
        for i in 0..3 {
            Frontier::push(&mut queue, VertexId::new(i, 0));
            Frontier::push(&mut stack, VertexId::new(i, 0));
        }
        assert_eq!(Frontier::pop(&mut queue), Some(VertexId::new(0, 0)));
        assert_eq!(Frontier::pop(&mut stack), Some(VertexId::new(2, 0)));
    }
}
