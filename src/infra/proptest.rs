use proptest::{collection::vec, prelude::*};

use super::modeling::{Index, MutOp, MutOpsSeq};

/// Sequences of at most `max_ops` operations over graphs with up to
/// `max_vertex_count` vertices.
///
/// Generated indices stay below `max_vertex_count`, and they wrap around on
/// smaller graphs when applied.
pub fn mut_ops(max_vertex_count: usize, max_ops: usize) -> impl Strategy<Value = MutOpsSeq> {
    (0..=max_vertex_count).prop_flat_map(move |vertex_count| {
        vec(mut_op(max_vertex_count.max(1)), 0..=max_ops)
            .prop_map(move |ops| MutOpsSeq::new(vertex_count, ops))
    })
}

pub fn mut_op(index_bound: usize) -> impl Strategy<Value = MutOp> {
    let index = move || (0..index_bound).prop_map(Index);

    prop_oneof![
        6 => (index(), index()).prop_map(|(src, dst)| MutOp::AddEdge(src, dst)),
        2 => (index(), index()).prop_map(|(src, dst)| MutOp::RemoveEdge(src, dst)),
        1 => (index(), any::<i8>()).prop_map(|(vertex, weight)| MutOp::SetVertexWeight(vertex, weight)),
        2 => (index(), index(), any::<i8>())
            .prop_map(|(src, dst, weight)| MutOp::SetEdgeWeight(src, dst, weight)),
        1 => Just(MutOp::ClearEdges),
    ]
}

/// Pairs of vertex count and a list of edge candidates, which may contain
/// self-loops and duplicates.
pub fn edge_candidates(
    max_vertex_count: usize,
    max_edges: usize,
) -> impl Strategy<Value = (usize, Vec<(usize, usize)>)> {
    (1..=max_vertex_count.max(1)).prop_flat_map(move |vertex_count| {
        (
            Just(vertex_count),
            vec((0..vertex_count, 0..vertex_count), 0..=max_edges),
        )
    })
}
