//! Undirected graph storage and edge bookkeeping.

use std::fmt;
use std::hash::Hash;

use indexmap::IndexMap;

use crate::config::PathConfig;
use crate::error::{GraphError, Result};
use crate::types::{Color, Slots, Vertex, VertexId};

/// Undirected graph over distinct elements with positive edge weights.
///
/// Vertices are iterated in insertion order and neighbours in connection
/// order. Every edge is stored on both endpoints with the same weight.
#[derive(Clone)]
pub struct Graph<T> {
    pub(crate) slots: Slots<T>,
    pub(crate) index: IndexMap<T, VertexId>,
    edges: usize,
    pub(crate) config: PathConfig,
}

impl<T> Graph<T>
where
    T: Eq + Hash + Clone,
{
    pub fn new() -> Self {
        Self::with_config(PathConfig::default())
    }

    pub fn with_config(config: PathConfig) -> Self {
        Self {
            slots: Slots::new(),
            index: IndexMap::new(),
            edges: 0,
            config,
        }
    }

    pub fn config(&self) -> &PathConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: PathConfig) {
        self.config = config;
    }

    pub fn add_vertex(&mut self, element: T) -> Result<VertexId> {
        if self.index.contains_key(&element) {
            return Err(GraphError::DuplicateVertex);
        }
        let id = self.slots.insert(Vertex::new(element.clone()));
        self.index.insert(element, id);
        Ok(id)
    }

    /// Removes `element` and every edge touching it. Absent elements are
    /// ignored.
    pub fn remove_vertex(&mut self, element: &T) -> Option<T> {
        let id = self.index.shift_remove(element)?;
        let vertex = self.slots.remove(id).expect("indexed vertex is live");
        for neighbor in vertex.neighbors.keys() {
            self.slots.at_mut(*neighbor).neighbors.shift_remove(&id);
        }
        self.edges -= vertex.neighbors.len();
        Some(vertex.element)
    }

    pub fn connect(&mut self, a: &T, b: &T) -> Result<()> {
        self.connect_weighted(a, b, 1.0)
    }

    pub fn connect_weighted(&mut self, a: &T, b: &T, weight: f64) -> Result<()> {
        check_weight(weight)?;
        let (va, vb) = self.endpoints(a, b)?;
        if va == vb {
            return Err(GraphError::SelfLoop);
        }
        if self.slots.at(va).neighbors.contains_key(&vb) {
            return Err(GraphError::AlreadyConnected);
        }
        self.slots.at_mut(va).neighbors.insert(vb, weight);
        self.slots.at_mut(vb).neighbors.insert(va, weight);
        self.edges += 1;
        Ok(())
    }

    pub fn disconnect(&mut self, a: &T, b: &T) -> Result<()> {
        let (va, vb) = self.endpoints(a, b)?;
        if self.slots.at_mut(va).neighbors.shift_remove(&vb).is_none() {
            return Err(GraphError::NotConnected);
        }
        self.slots.at_mut(vb).neighbors.shift_remove(&va);
        self.edges -= 1;
        Ok(())
    }

    pub fn are_neighbors(&self, a: &T, b: &T) -> Result<bool> {
        let (va, vb) = self.endpoints(a, b)?;
        Ok(self.slots.at(va).neighbors.contains_key(&vb))
    }

    pub fn weight(&self, a: &T, b: &T) -> Result<f64> {
        let (va, vb) = self.endpoints(a, b)?;
        self.slots
            .at(va)
            .neighbors
            .get(&vb)
            .copied()
            .ok_or(GraphError::NotConnected)
    }

    pub fn set_weight(&mut self, a: &T, b: &T, weight: f64) -> Result<()> {
        check_weight(weight)?;
        let (va, vb) = self.endpoints(a, b)?;
        match self.slots.at_mut(va).neighbors.get_mut(&vb) {
            Some(w) => *w = weight,
            None => return Err(GraphError::NotConnected),
        }
        *self
            .slots
            .at_mut(vb)
            .neighbors
            .get_mut(&va)
            .expect("adjacency is symmetric") = weight;
        Ok(())
    }

    pub fn contains(&self, element: &T) -> bool {
        self.index.contains_key(element)
    }

    pub fn vertex_id(&self, element: &T) -> Option<VertexId> {
        self.index.get(element).copied()
    }

    pub fn vertex(&self, element: &T) -> Result<VertexRef<'_, T>> {
        let id = self.lookup(element)?;
        Ok(VertexRef::new(self, id))
    }

    /// Sums the edge weights along consecutive vertices of `path`.
    pub fn path_weight(&self, path: &[VertexId]) -> Result<f64> {
        let mut total = 0.0;
        for pair in path.windows(2) {
            let from = self.slots.get(pair[0]).ok_or(GraphError::UnknownVertex(pair[0]))?;
            self.slots.get(pair[1]).ok_or(GraphError::UnknownVertex(pair[1]))?;
            total += from
                .neighbors
                .get(&pair[1])
                .ok_or(GraphError::NotConnected)?;
        }
        Ok(total)
    }

    pub(crate) fn lookup(&self, element: &T) -> Result<VertexId> {
        self.vertex_id(element).ok_or(GraphError::VertexNotFound)
    }

    fn endpoints(&self, a: &T, b: &T) -> Result<(VertexId, VertexId)> {
        Ok((self.lookup(a)?, self.lookup(b)?))
    }
}

impl<T> Graph<T> {
    /// Number of vertices.
    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    pub fn clear(&mut self) {
        self.slots.clear();
        self.index.clear();
        self.edges = 0;
    }

    pub fn vertex_by_id(&self, id: VertexId) -> Result<VertexRef<'_, T>> {
        self.check(id)?;
        Ok(VertexRef::new(self, id))
    }

    pub fn set_color(&mut self, id: VertexId, color: Color) -> Result<()> {
        self.slots
            .get_mut(id)
            .ok_or(GraphError::UnknownVertex(id))?
            .color = color;
        Ok(())
    }

    /// Elements in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        self.index.keys()
    }

    /// Vertex views in insertion order.
    pub fn vertices(&self) -> impl Iterator<Item = VertexRef<'_, T>> + '_ {
        self.index.values().map(move |&id| VertexRef::new(self, id))
    }

    pub fn for_each_vertex<F>(&self, mut f: F)
    where
        F: FnMut(VertexRef<'_, T>),
    {
        for v in self.vertices() {
            f(v);
        }
    }

    pub(crate) fn check(&self, id: VertexId) -> Result<()> {
        match self.slots.get(id) {
            Some(_) => Ok(()),
            None => Err(GraphError::UnknownVertex(id)),
        }
    }

    /// Live vertex ids in insertion order.
    pub(crate) fn ids(&self) -> Vec<VertexId> {
        self.index.values().copied().collect()
    }
}

fn check_weight(weight: f64) -> Result<()> {
    if weight.is_finite() && weight > 0.0 {
        Ok(())
    } else {
        Err(GraphError::InvalidWeight(weight))
    }
}

impl<T> Default for Graph<T>
where
    T: Eq + Hash + Clone,
{
    fn default() -> Self {
        Self::new()
    }
}

/// Same elements, same number of edges, and every vertex adjacent to the
/// same elements. Weights and colours are not compared.
impl<T> PartialEq for Graph<T>
where
    T: Eq + Hash,
{
    fn eq(&self, other: &Self) -> bool {
        if self.len() != other.len() || self.edges != other.edges {
            return false;
        }
        self.index.iter().all(|(element, &id)| {
            let Some(&other_id) = other.index.get(element) else {
                return false;
            };
            let mine = &self.slots.at(id).neighbors;
            let theirs = &other.slots.at(other_id).neighbors;
            mine.len() == theirs.len()
                && mine.keys().all(|n| {
                    other
                        .index
                        .get(&self.slots.at(*n).element)
                        .is_some_and(|o| theirs.contains_key(o))
                })
        })
    }
}

impl<T: Eq + Hash> Eq for Graph<T> {}

/// `{a, b, c}, {(a, b), (b, c)}`: vertices in insertion order, then each
/// edge once, listed from its earlier-inserted endpoint.
impl<T> fmt::Display for Graph<T>
where
    T: fmt::Display + Eq + Hash,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, element) in self.index.keys().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{element}")?;
        }
        f.write_str("}, {")?;
        let mut first = true;
        for (pos, (element, &id)) in self.index.iter().enumerate() {
            for n in self.slots.at(id).neighbors.keys() {
                let other = &self.slots.at(*n).element;
                let later = self
                    .index
                    .get_index_of(other)
                    .is_some_and(|other_pos| other_pos > pos);
                if !later {
                    continue;
                }
                if !first {
                    f.write_str(", ")?;
                }
                first = false;
                write!(f, "({element}, {other})")?;
            }
        }
        f.write_str("}")
    }
}

impl<T: fmt::Debug> fmt::Debug for Graph<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Graph")
            .field("vertices", &self.index.keys().collect::<Vec<_>>())
            .field("edges", &self.edges)
            .finish()
    }
}

/// Read-only view of one vertex.
pub struct VertexRef<'a, T> {
    graph: &'a Graph<T>,
    id: VertexId,
}

impl<T> Clone for VertexRef<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for VertexRef<'_, T> {}

impl<'a, T> VertexRef<'a, T> {
    pub(crate) fn new(graph: &'a Graph<T>, id: VertexId) -> Self {
        Self { graph, id }
    }

    fn raw(&self) -> &'a Vertex<T> {
        self.graph.slots.at(self.id)
    }

    pub fn id(&self) -> VertexId {
        self.id
    }

    pub fn element(&self) -> &'a T {
        &self.raw().element
    }

    pub fn degree(&self) -> usize {
        self.raw().neighbors.len()
    }

    pub fn color(&self) -> Color {
        self.raw().color
    }

    /// Adjacent vertices in connection order.
    pub fn neighbors(&self) -> impl Iterator<Item = Neighbor<'a, T>> + 'a {
        let graph = self.graph;
        self.raw()
            .neighbors
            .iter()
            .map(move |(&id, &weight)| Neighbor {
                vertex: VertexRef::new(graph, id),
                weight,
            })
    }
}

impl<T: fmt::Debug> fmt::Debug for VertexRef<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VertexRef")
            .field("id", &self.id)
            .field("element", self.element())
            .finish()
    }
}

/// A vertex seen from one of its neighbours, with the connecting weight.
#[derive(Debug)]
pub struct Neighbor<'a, T> {
    pub vertex: VertexRef<'a, T>,
    pub weight: f64,
}

impl<T> Clone for Neighbor<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Neighbor<'_, T> {}
