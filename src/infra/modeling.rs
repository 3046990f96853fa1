//! Replayable sequences of graph mutations.
//!
//! Sequences are produced by fuzzing (`arbitrary` feature) or property tests
//! (`proptest` feature) and replayed on several storages to compare them.

use std::fmt;

use crate::core::{Digraph, GraphError};

/// Vertex index that is mapped into the vertex range of the graph it is
/// applied to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Index(pub usize);

impl Index {
    pub fn get(&self, m: usize) -> Option<usize> {
        if m > 0 {
            Some(self.0 % m)
        } else {
            None
        }
    }

    pub fn map(self, m: usize) -> Option<Index> {
        self.get(m).map(Index)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum MutOp {
    AddEdge(Index, Index),
    RemoveEdge(Index, Index),
    SetVertexWeight(Index, i8),
    SetEdgeWeight(Index, Index, i8),
    ClearEdges,
}

#[derive(Debug, Clone, PartialEq)]
pub enum MutOpResult {
    AddEdge(Result<(), GraphError>),
    RemoveEdge(Result<(), GraphError>),
    SetVertexWeight(Result<(), GraphError>),
    SetEdgeWeight(Result<(), GraphError>),
    ClearEdges,
}

impl MutOp {
    /// Applies the operation with indices taken modulo the vertex count. On a
    /// graph without vertices, all indices are zero and thus out of range.
    pub fn apply<G>(self, graph: &mut G) -> MutOpResult
    where
        G: Digraph,
    {
        let n = graph.vertex_count();
        let index = |index: Index| index.get(n).unwrap_or_default();

        match self {
            MutOp::AddEdge(src, dst) => MutOpResult::AddEdge(graph.add_edge(index(src), index(dst))),
            MutOp::RemoveEdge(src, dst) => {
                MutOpResult::RemoveEdge(graph.remove_edge(index(src), index(dst)))
            }
            MutOp::SetVertexWeight(vertex, weight) => MutOpResult::SetVertexWeight(
                graph.set_vertex_weight(index(vertex), f64::from(weight)),
            ),
            MutOp::SetEdgeWeight(src, dst, weight) => MutOpResult::SetEdgeWeight(
                graph.set_edge_weight(index(src), index(dst), f64::from(weight)),
            ),
            MutOp::ClearEdges => {
                graph.clear_edges();
                MutOpResult::ClearEdges
            }
        }
    }
}

/// Operations over a graph with a fixed vertex count.
#[derive(Clone, PartialEq)]
pub struct MutOpsSeq {
    vertex_count: usize,
    ops: Vec<MutOp>,
}

impl MutOpsSeq {
    pub fn new(vertex_count: usize, ops: Vec<MutOp>) -> Self {
        Self { vertex_count, ops }
    }

    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    pub fn ops(&self) -> &[MutOp] {
        &self.ops
    }

    /// Applies all operations and prints them as code, so that a failing case
    /// can be turned into a unit test.
    pub fn replay<G>(self, graph: &mut G)
    where
        G: Digraph,
    {
        println!("let mut graph = Storage::new({});", self.vertex_count);
        println!();

        for op in self {
            let n = graph.vertex_count();

            let op = match op {
                MutOp::AddEdge(src, dst) => {
                    MutOp::AddEdge(src.map(n).unwrap_or_default(), dst.map(n).unwrap_or_default())
                }
                MutOp::RemoveEdge(src, dst) => MutOp::RemoveEdge(
                    src.map(n).unwrap_or_default(),
                    dst.map(n).unwrap_or_default(),
                ),
                MutOp::SetVertexWeight(vertex, weight) => {
                    MutOp::SetVertexWeight(vertex.map(n).unwrap_or_default(), weight)
                }
                MutOp::SetEdgeWeight(src, dst, weight) => MutOp::SetEdgeWeight(
                    src.map(n).unwrap_or_default(),
                    dst.map(n).unwrap_or_default(),
                    weight,
                ),
                op => op,
            };

            match &op {
                MutOp::AddEdge(src, dst) => println!("graph.add_edge({}, {});", src.0, dst.0),
                MutOp::RemoveEdge(src, dst) => {
                    println!("graph.remove_edge({}, {});", src.0, dst.0)
                }
                MutOp::SetVertexWeight(vertex, weight) => {
                    println!("graph.set_vertex_weight({}, {weight}.0);", vertex.0)
                }
                MutOp::SetEdgeWeight(src, dst, weight) => {
                    println!("graph.set_edge_weight({}, {}, {weight}.0);", src.0, dst.0)
                }
                MutOp::ClearEdges => println!("graph.clear_edges();"),
            }

            op.apply(graph);
        }

        println!();
        println!("check_consistency(&graph).unwrap();");
    }
}

impl IntoIterator for MutOpsSeq {
    type Item = MutOp;
    type IntoIter = std::vec::IntoIter<MutOp>;

    fn into_iter(self) -> Self::IntoIter {
        self.ops.into_iter()
    }
}

impl fmt::Debug for MutOpsSeq {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "MutOpsSeq::new({}, vec![", self.vertex_count)?;

        for op in self.ops.iter() {
            writeln!(f, "    MutOp::{:?},", op)?;
        }

        writeln!(f, "])")?;
        writeln!(f, ".replay(&mut graph);")
    }
}
