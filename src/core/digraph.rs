use std::{borrow::Cow, iter::Chain};

use super::{
    error::Result,
    facts,
    marker::Direction,
    validate::{check_endpoints, check_vertex, require_edge},
};

/// Directed simple graph over a fixed set of vertices `0..vertex_count`.
///
/// Storages implement the required methods, each with its own validation of
/// the vertex indices. The relational predicates and global properties are
/// provided on top of them and behave identically for every storage.
///
/// Every fallible operation validates all of its inputs before it changes
/// anything. If it returns an error, the graph is left untouched.
pub trait Digraph {
    type NeighborsIter<'a>: Iterator<Item = usize>
    where
        Self: 'a;

    fn vertex_count(&self) -> usize;
    fn edge_count(&self) -> usize;

    fn has_edge(&self, src: usize, dst: usize) -> Result<bool>;

    /// Inserts the edge `(src, dst)`. Adding an edge that is already present
    /// does nothing and keeps its weight.
    fn add_edge(&mut self, src: usize, dst: usize) -> Result<()>;

    /// Removes the edge `(src, dst)` together with its weight.
    fn remove_edge(&mut self, src: usize, dst: usize) -> Result<()>;

    /// Removes all edges and their weights. Vertex attributes are kept.
    fn clear_edges(&mut self);

    /// Successors (`Outgoing`) or predecessors (`Incoming`) of a vertex, in no
    /// particular order.
    fn neighbors_directed(&self, vertex: usize, dir: Direction) -> Result<Self::NeighborsIter<'_>>;

    fn degree_directed(&self, vertex: usize, dir: Direction) -> Result<usize>;

    fn set_vertex_weight(&mut self, vertex: usize, weight: f64) -> Result<()>;
    fn vertex_weight(&self, vertex: usize) -> Result<f64>;

    /// Sets the weight of an existing edge.
    fn set_edge_weight(&mut self, src: usize, dst: usize, weight: f64) -> Result<()>;
    fn edge_weight(&self, src: usize, dst: usize) -> Result<f64>;

    fn set_vertex_label<S: Into<String>>(&mut self, vertex: usize, label: S) -> Result<()>;

    /// Label of the vertex, which is its index unless set otherwise.
    fn vertex_label(&self, vertex: usize) -> Result<Cow<'_, str>>;

    fn is_successor(&self, src: usize, dst: usize) -> Result<bool> {
        self.has_edge(src, dst)
    }

    fn is_predecessor(&self, vertex: usize, other: usize) -> Result<bool> {
        check_endpoints(vertex, other, self.vertex_count())?;
        self.has_edge(other, vertex)
    }

    fn is_divergent(&self, src1: usize, dst1: usize, src2: usize, dst2: usize) -> Result<bool> {
        self.require_edge_pair(src1, dst1, src2, dst2)?;
        Ok(src1 == src2 && dst1 != dst2)
    }

    fn is_convergent(&self, src1: usize, dst1: usize, src2: usize, dst2: usize) -> Result<bool> {
        self.require_edge_pair(src1, dst1, src2, dst2)?;
        Ok(dst1 == dst2 && src1 != src2)
    }

    fn is_incident(&self, src: usize, dst: usize, vertex: usize) -> Result<bool> {
        check_endpoints(src, dst, self.vertex_count())?;
        check_vertex(vertex, self.vertex_count())?;
        require_edge(self.has_edge(src, dst)?, src, dst)?;
        Ok(vertex == src || vertex == dst)
    }

    fn in_degree(&self, vertex: usize) -> Result<usize> {
        self.degree_directed(vertex, Direction::Incoming)
    }

    fn out_degree(&self, vertex: usize) -> Result<usize> {
        self.degree_directed(vertex, Direction::Outgoing)
    }

    fn successors(&self, vertex: usize) -> Result<Self::NeighborsIter<'_>> {
        self.neighbors_directed(vertex, Direction::Outgoing)
    }

    fn predecessors(&self, vertex: usize) -> Result<Self::NeighborsIter<'_>> {
        self.neighbors_directed(vertex, Direction::Incoming)
    }

    /// Successors followed by predecessors. A vertex connected in both
    /// directions is yielded twice.
    fn neighbors_undirected(
        &self,
        vertex: usize,
    ) -> Result<Chain<Self::NeighborsIter<'_>, Self::NeighborsIter<'_>>> {
        let outgoing = self.neighbors_directed(vertex, Direction::Outgoing)?;
        let incoming = self.neighbors_directed(vertex, Direction::Incoming)?;
        Ok(outgoing.chain(incoming))
    }

    /// All edges ordered by source and then by target. The order does not
    /// depend on the storage.
    fn edges(&self) -> EdgesIter<'_, Self>
    where
        Self: Sized,
    {
        EdgesIter::new(self)
    }

    fn is_empty_graph(&self) -> bool {
        self.edge_count() == 0
    }

    fn is_complete_graph(&self) -> bool {
        self.edge_count() == facts::complete_graph_edge_count(self.vertex_count())
    }

    /// Weak connectivity, that is, connectivity when the direction of edges
    /// is ignored.
    fn is_connected(&self) -> bool
    where
        Self: Sized,
    {
        crate::algo::is_connected(self)
    }

    #[doc(hidden)]
    fn require_edge_pair(&self, src1: usize, dst1: usize, src2: usize, dst2: usize) -> Result<()> {
        let n = self.vertex_count();
        check_endpoints(src1, dst1, n)?;
        check_endpoints(src2, dst2, n)?;
        require_edge(self.has_edge(src1, dst1)?, src1, dst1)?;
        require_edge(self.has_edge(src2, dst2)?, src2, dst2)
    }
}

pub struct EdgesIter<'a, G> {
    graph: &'a G,
    src: usize,
    next_src: usize,
    targets: Vec<usize>,
    pos: usize,
}

impl<'a, G: Digraph> EdgesIter<'a, G> {
    fn new(graph: &'a G) -> Self {
        Self {
            graph,
            src: 0,
            next_src: 0,
            targets: Vec::new(),
            pos: 0,
        }
    }
}

impl<G: Digraph> Iterator for EdgesIter<'_, G> {
    type Item = (usize, usize);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(&dst) = self.targets.get(self.pos) {
                self.pos += 1;
                return Some((self.src, dst));
            }

            if self.next_src >= self.graph.vertex_count() {
                return None;
            }

            self.src = self.next_src;
            self.next_src += 1;
            self.pos = 0;
            self.targets.clear();

            if let Ok(successors) = self.graph.successors(self.src) {
                self.targets.extend(successors);
            }

            // Hash-based storages yield successors in arbitrary order.
            self.targets.sort_unstable();
        }
    }
}
