use std::{borrow::Cow, fmt};

use tracing::trace;

use crate::core::{
    marker::Direction,
    validate::{check_endpoints, check_no_self_loop, check_vertex, require_edge},
    Create, Digraph, Result,
};

use super::shared::{EdgeWeights, VertexAttrs};

/// Dense storage backed by an `n × n` bit matrix.
///
/// Edge weights are kept aside in a sparse map, so that a mostly unweighted
/// graph does not pay for `n²` floats.
#[derive(Clone, PartialEq)]
pub struct AdjMatrix {
    matrix: raw::Matrix,
    vertices: VertexAttrs,
    weights: EdgeWeights,
    n_edges: usize,
}

impl AdjMatrix {
    /// # Panics
    ///
    /// Panics if the matrix of `vertex_count × vertex_count` bits does not fit
    /// into `usize`.
    pub fn new(vertex_count: usize) -> Self {
        Self {
            matrix: raw::Matrix::new(vertex_count),
            vertices: VertexAttrs::new(vertex_count),
            weights: EdgeWeights::new(),
            n_edges: 0,
        }
    }
}

impl Digraph for AdjMatrix {
    type NeighborsIter<'a> = NeighborsIter<'a>
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
        Ok(self.matrix.contains(src, dst))
    }

    fn add_edge(&mut self, src: usize, dst: usize) -> Result<()> {
        check_endpoints(src, dst, self.vertex_count())?;
        check_no_self_loop(src, dst)?;

        if self.matrix.insert(src, dst) {
            self.n_edges += 1;
            trace!(src, dst, "edge added");
        }

        Ok(())
    }

    fn remove_edge(&mut self, src: usize, dst: usize) -> Result<()> {
        check_endpoints(src, dst, self.vertex_count())?;
        require_edge(self.matrix.remove(src, dst), src, dst)?;

        self.n_edges -= 1;
        self.weights.remove(src, dst);
        trace!(src, dst, "edge removed");

        Ok(())
    }

    fn clear_edges(&mut self) {
        self.matrix.clear();
        self.weights.clear();
        self.n_edges = 0;
    }

    fn neighbors_directed(&self, vertex: usize, dir: Direction) -> Result<Self::NeighborsIter<'_>> {
        check_vertex(vertex, self.vertex_count())?;

        Ok(NeighborsIter {
            matrix: self.matrix.detach(),
            vertex,
            other: 0,
            dir,
        })
    }

    fn degree_directed(&self, vertex: usize, dir: Direction) -> Result<usize> {
        check_vertex(vertex, self.vertex_count())?;
        Ok(self.matrix.degree_directed(vertex, dir))
    }

    fn set_vertex_weight(&mut self, vertex: usize, weight: f64) -> Result<()> {
        check_vertex(vertex, self.vertex_count())?;
        self.vertices.set_weight(vertex, weight);
        Ok(())
    }

    fn vertex_weight(&self, vertex: usize) -> Result<f64> {
        check_vertex(vertex, self.vertex_count())?;
        self.vertices.weight(vertex)
    }

    fn set_edge_weight(&mut self, src: usize, dst: usize, weight: f64) -> Result<()> {
        check_endpoints(src, dst, self.vertex_count())?;
        require_edge(self.matrix.contains(src, dst), src, dst)?;

        self.weights.set(src, dst, weight);
        trace!(src, dst, weight, "edge weight set");

        Ok(())
    }

    fn edge_weight(&self, src: usize, dst: usize) -> Result<f64> {
        check_endpoints(src, dst, self.vertex_count())?;
        require_edge(self.matrix.contains(src, dst), src, dst)?;
        self.weights.get(src, dst)
    }

    fn set_vertex_label<S: Into<String>>(&mut self, vertex: usize, label: S) -> Result<()> {
        check_vertex(vertex, self.vertex_count())?;
        self.vertices.set_label(vertex, label.into());
        Ok(())
    }

    fn vertex_label(&self, vertex: usize) -> Result<Cow<'_, str>> {
        check_vertex(vertex, self.vertex_count())?;
        Ok(self.vertices.label(vertex))
    }
}

impl Create for AdjMatrix {
    fn with_vertex_count(vertex_count: usize) -> Self {
        Self::new(vertex_count)
    }
}

impl fmt::Debug for AdjMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            writeln!(f, "AdjMatrix {{")?;
            for line in self.to_string().lines() {
                writeln!(f, "    {line}")?;
            }
            write!(f, "}}")
        } else {
            f.debug_struct("AdjMatrix")
                .field("matrix", &self.matrix)
                .field("vertices", &self.vertices)
                .field("weights", &self.weights)
                .field("n_edges", &self.n_edges)
                .finish()
        }
    }
}

/// Renders the presence matrix row by row.
impl fmt::Display for AdjMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let n = self.vertex_count();

        for row in 0..n {
            for col in 0..n {
                if col > 0 {
                    write!(f, " ")?;
                }

                write!(f, "{}", self.matrix.contains(row, col) as usize)?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}

pub struct NeighborsIter<'a> {
    matrix: raw::DetachedMatrix<'a>,
    vertex: usize,
    other: usize,
    dir: Direction,
}

impl Iterator for NeighborsIter<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        while self.other < self.matrix.vertex_count() {
            let other = self.other;
            self.other += 1;

            let present = match self.dir {
                Direction::Outgoing => self.matrix.contains(self.vertex, other),
                Direction::Incoming => self.matrix.contains(other, self.vertex),
            };

            if present {
                return Some(other);
            }
        }

        None
    }
}

mod raw {
    use bitvec::prelude::*;

    use crate::core::marker::Direction;

    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct Matrix {
        data: BitVec,
        vertex_count: usize,
    }

    impl Matrix {
        pub fn new(vertex_count: usize) -> Self {
            Self {
                data: bitvec![0; capacity(vertex_count)],
                vertex_count,
            }
        }

        pub fn contains(&self, row: usize, col: usize) -> bool {
            self.data[index(row, col, self.vertex_count)]
        }

        /// Returns `true` if the edge was not present before.
        pub fn insert(&mut self, row: usize, col: usize) -> bool {
            !self.fetch_set(index(row, col, self.vertex_count), true)
        }

        /// Returns `true` if the edge was present before.
        pub fn remove(&mut self, row: usize, col: usize) -> bool {
            self.fetch_set(index(row, col, self.vertex_count), false)
        }

        pub fn clear(&mut self) {
            self.data.fill(false);
        }

        pub fn degree_directed(&self, v: usize, dir: Direction) -> usize {
            let n = self.vertex_count;

            match dir {
                Direction::Outgoing => self.data[index(v, 0, n)..index(v + 1, 0, n)].count_ones(),
                Direction::Incoming => (0..n).filter(|&row| self.contains(row, v)).count(),
            }
        }

        pub fn detach(&self) -> DetachedMatrix<'_> {
            DetachedMatrix {
                data: self.data.as_bitslice(),
                vertex_count: self.vertex_count,
            }
        }

        fn fetch_set(&mut self, index: usize, value: bool) -> bool {
            let prev = self.data[index];
            self.data.set(index, value);
            prev
        }
    }

    /// Read-only view of the presence bits, detached from the rest of the
    /// storage so that iterators borrow only the matrix.
    #[derive(Clone, Copy)]
    pub struct DetachedMatrix<'a> {
        data: &'a BitSlice,
        vertex_count: usize,
    }

    impl DetachedMatrix<'_> {
        pub fn contains(&self, row: usize, col: usize) -> bool {
            self.data[index(row, col, self.vertex_count)]
        }

        pub fn vertex_count(&self) -> usize {
            self.vertex_count
        }
    }

    fn capacity(vertex_count: usize) -> usize {
        vertex_count
            .checked_mul(vertex_count)
            .expect("vertex count too large for adjacency matrix")
    }

    fn index(row: usize, col: usize, vertex_count: usize) -> usize {
        row * vertex_count + col
    }
}
