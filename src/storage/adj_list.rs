use std::{borrow::Cow, collections::hash_set, fmt, iter::Copied};

use rustc_hash::FxHashSet;
use tracing::trace;

use crate::core::{
    marker::Direction,
    validate::{check_endpoints, check_no_self_loop, check_vertex, require_edge},
    Create, Digraph, Result,
};

use super::shared::{EdgeWeights, VertexAttrs};

/// Neighbors of a vertex in both directions, indexed by
/// [`Direction::index`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AdjVertex {
    pub edges: [FxHashSet<usize>; 2],
}

/// Sparse storage with successor and predecessor sets for every vertex.
///
/// Keeping both directions makes in-degree as cheap as out-degree at the cost
/// of storing every edge twice.
#[derive(Debug, Clone, PartialEq)]
pub struct AdjList {
    vertices: Vec<AdjVertex>,
    attrs: VertexAttrs,
    weights: EdgeWeights,
    n_edges: usize,
}

impl AdjList {
    pub fn new(vertex_count: usize) -> Self {
        Self {
            vertices: vec![AdjVertex::default(); vertex_count],
            attrs: VertexAttrs::new(vertex_count),
            weights: EdgeWeights::new(),
            n_edges: 0,
        }
    }

    fn neighbor_set(&self, vertex: usize, dir: Direction) -> &FxHashSet<usize> {
        &self.vertices[vertex].edges[dir.index()]
    }

    fn neighbor_set_mut(&mut self, vertex: usize, dir: Direction) -> &mut FxHashSet<usize> {
        &mut self.vertices[vertex].edges[dir.index()]
    }
}

impl Digraph for AdjList {
    type NeighborsIter<'a> = Copied<hash_set::Iter<'a, usize>>
    where
        Self: 'a;

    fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    fn edge_count(&self) -> usize {
        self.n_edges
    }

    fn has_edge(&self, src: usize, dst: usize) -> Result<bool> {
        check_endpoints(src, dst, self.vertex_count())?;
        Ok(self.neighbor_set(src, Direction::Outgoing).contains(&dst))
    }

    fn add_edge(&mut self, src: usize, dst: usize) -> Result<()> {
        check_endpoints(src, dst, self.vertex_count())?;
        check_no_self_loop(src, dst)?;

        if self.neighbor_set_mut(src, Direction::Outgoing).insert(dst) {
            self.neighbor_set_mut(dst, Direction::Incoming).insert(src);
            self.n_edges += 1;
            trace!(src, dst, "edge added");
        }

        Ok(())
    }

    fn remove_edge(&mut self, src: usize, dst: usize) -> Result<()> {
        check_endpoints(src, dst, self.vertex_count())?;
        require_edge(self.neighbor_set_mut(src, Direction::Outgoing).remove(&dst), src, dst)?;

        self.neighbor_set_mut(dst, Direction::Incoming).remove(&src);
        self.n_edges -= 1;
        self.weights.remove(src, dst);
        trace!(src, dst, "edge removed");

        Ok(())
    }

    fn clear_edges(&mut self) {
        for vertex in self.vertices.iter_mut() {
            vertex.edges[0].clear();
            vertex.edges[1].clear();
        }

        self.weights.clear();
        self.n_edges = 0;
    }

    fn neighbors_directed(&self, vertex: usize, dir: Direction) -> Result<Self::NeighborsIter<'_>> {
        check_vertex(vertex, self.vertex_count())?;
        Ok(self.neighbor_set(vertex, dir).iter().copied())
    }

    fn degree_directed(&self, vertex: usize, dir: Direction) -> Result<usize> {
        check_vertex(vertex, self.vertex_count())?;
        Ok(self.neighbor_set(vertex, dir).len())
    }

    fn set_vertex_weight(&mut self, vertex: usize, weight: f64) -> Result<()> {
        check_vertex(vertex, self.vertex_count())?;
        self.attrs.set_weight(vertex, weight);
        Ok(())
    }

    fn vertex_weight(&self, vertex: usize) -> Result<f64> {
        check_vertex(vertex, self.vertex_count())?;
        self.attrs.weight(vertex)
    }

    fn set_edge_weight(&mut self, src: usize, dst: usize, weight: f64) -> Result<()> {
        check_endpoints(src, dst, self.vertex_count())?;
        require_edge(self.neighbor_set(src, Direction::Outgoing).contains(&dst), src, dst)?;

        self.weights.set(src, dst, weight);
        trace!(src, dst, weight, "edge weight set");

        Ok(())
    }

    fn edge_weight(&self, src: usize, dst: usize) -> Result<f64> {
        check_endpoints(src, dst, self.vertex_count())?;
        require_edge(self.neighbor_set(src, Direction::Outgoing).contains(&dst), src, dst)?;
        self.weights.get(src, dst)
    }

    fn set_vertex_label<S: Into<String>>(&mut self, vertex: usize, label: S) -> Result<()> {
        check_vertex(vertex, self.vertex_count())?;
        self.attrs.set_label(vertex, label.into());
        Ok(())
    }

    fn vertex_label(&self, vertex: usize) -> Result<Cow<'_, str>> {
        check_vertex(vertex, self.vertex_count())?;
        Ok(self.attrs.label(vertex))
    }
}

impl Create for AdjList {
    fn with_vertex_count(vertex_count: usize) -> Self {
        Self::new(vertex_count)
    }
}

/// One line per vertex with its successors in ascending order, e.g. `0: [1,
/// 3]`.
impl fmt::Display for AdjList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (vertex, adj) in self.vertices.iter().enumerate() {
            let mut successors = adj.edges[Direction::Outgoing.index()]
                .iter()
                .copied()
                .collect::<Vec<_>>();
            successors.sort_unstable();

            writeln!(f, "{vertex}: {successors:?}")?;
        }

        Ok(())
    }
}
