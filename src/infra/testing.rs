use std::fmt;

use thiserror::Error;

use crate::core::{facts, marker::Direction, Create, Digraph};

pub fn create_complete<G>(vertex_count: usize) -> G
where
    G: Create,
{
    let edges = (0..vertex_count)
        .flat_map(|u| (0..vertex_count).map(move |v| (u, v)))
        .filter(|(u, v)| u != v);

    let graph = G::from_edges(vertex_count, edges).expect("complete graph edges are valid");
    debug_assert_eq!(
        graph.edge_count(),
        facts::complete_graph_edge_count(vertex_count)
    );

    graph
}

pub fn create_path<G>(vertex_count: usize) -> G
where
    G: Create,
{
    let edges = (1..vertex_count).map(|v| (v - 1, v));
    G::from_edges(vertex_count, edges).expect("path edges are valid")
}

/// Directed cycle `0 -> 1 -> ... -> n - 1 -> 0`. Graphs with less than two
/// vertices have no edges.
pub fn create_cycle<G>(vertex_count: usize) -> G
where
    G: Create,
{
    let edges = (0..vertex_count)
        .filter(|_| vertex_count > 1)
        .map(|v| (v, (v + 1) % vertex_count));

    G::from_edges(vertex_count, edges).expect("cycle edges are valid")
}

fn degree_dir(dir: Direction) -> &'static str {
    match dir {
        Direction::Outgoing => "out",
        Direction::Incoming => "in",
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConsistencyCheckError {
    #[error("edges iterator count ({0}) is not equal to edge count ({1})")]
    EdgesEdgeCountMismatch(usize, usize),
    #[error("{} neighbors count of vertex {2} ({0}) is not equal to its degree ({1})", degree_dir(*.3))]
    NeighborsDegreeMismatch(usize, usize, usize, Direction),
    #[error("sum of {} degrees ({0}) is not equal to edge count ({1})", degree_dir(*.2))]
    HandshakingLemmaDirected(usize, usize, Direction),
    #[error("edge ({0}, {1}) is not reported by the predecessors of {1}")]
    ReverseEdgeMissing(usize, usize),
    #[error("self-loop on vertex {0}")]
    SelfLoop(usize),
    #[error("graph with {0} vertices has {1} edges, more than a simple graph can have")]
    TooManyEdges(usize, usize),
}

pub fn check_consistency<G>(graph: &G) -> Result<(), ConsistencyCheckError>
where
    G: Digraph,
{
    fn cmp<F, E>(actual: usize, expected: usize, error: F) -> Result<(), E>
    where
        F: FnOnce(usize, usize) -> E,
    {
        if actual == expected {
            Ok(())
        } else {
            Err(error(actual, expected))
        }
    }

    let vertex_count = graph.vertex_count();
    let edge_count = graph.edge_count();

    if edge_count > facts::complete_graph_edge_count(vertex_count) {
        return Err(ConsistencyCheckError::TooManyEdges(vertex_count, edge_count));
    }

    cmp(
        graph.edges().count(),
        edge_count,
        ConsistencyCheckError::EdgesEdgeCountMismatch,
    )?;

    for (src, dst) in graph.edges() {
        if src == dst {
            return Err(ConsistencyCheckError::SelfLoop(src));
        }

        let reported = graph
            .predecessors(dst)
            .map_or(false, |mut predecessors| predecessors.any(|v| v == src));

        if !reported {
            return Err(ConsistencyCheckError::ReverseEdgeMissing(src, dst));
        }
    }

    for dir in Direction::all() {
        let mut deg_sum = 0;

        for vertex in 0..vertex_count {
            let neighbors = graph
                .neighbors_directed(vertex, dir)
                .map_or(0, Iterator::count);
            let degree = graph.degree_directed(vertex, dir).unwrap_or_default();

            cmp(neighbors, degree, |actual, expected| {
                ConsistencyCheckError::NeighborsDegreeMismatch(actual, expected, vertex, dir)
            })?;

            deg_sum += degree;
        }

        // https://en.wikipedia.org/wiki/Handshaking_lemma
        cmp(deg_sum, edge_count, |actual, expected| {
            ConsistencyCheckError::HandshakingLemmaDirected(actual, expected, dir)
        })?;
    }

    Ok(())
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum EquivalenceError {
    #[error("vertex counts differ ({0} vs {1})")]
    VertexCount(usize, usize),
    #[error("edge counts differ ({0} vs {1})")]
    EdgeCount(usize, usize),
    #[error("edge sets differ, first mismatch is {} vs {}", Pair(*.0), Pair(*.1))]
    Edges(Option<(usize, usize)>, Option<(usize, usize)>),
    #[error("weights of vertex {0} differ")]
    VertexWeight(usize),
    #[error("weights of edge ({0}, {1}) differ")]
    EdgeWeight(usize, usize),
    #[error("labels of vertex {0} differ")]
    VertexLabel(usize),
}

struct Pair(Option<(usize, usize)>);

impl fmt::Display for Pair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some((src, dst)) => write!(f, "({src}, {dst})"),
            None => f.write_str("nothing"),
        }
    }
}

/// Checks that two graphs are indistinguishable through [`Digraph`]: the same
/// vertices with the same attributes and the same edges with the same
/// weights.
pub fn check_equivalence<G1, G2>(lhs: &G1, rhs: &G2) -> Result<(), EquivalenceError>
where
    G1: Digraph,
    G2: Digraph,
{
    if lhs.vertex_count() != rhs.vertex_count() {
        return Err(EquivalenceError::VertexCount(
            lhs.vertex_count(),
            rhs.vertex_count(),
        ));
    }

    if lhs.edge_count() != rhs.edge_count() {
        return Err(EquivalenceError::EdgeCount(
            lhs.edge_count(),
            rhs.edge_count(),
        ));
    }

    let mut lhs_edges = lhs.edges();
    let mut rhs_edges = rhs.edges();

    loop {
        match (lhs_edges.next(), rhs_edges.next()) {
            (None, None) => break,
            (Some(l), Some(r)) if l == r => {
                if lhs.edge_weight(l.0, l.1) != rhs.edge_weight(r.0, r.1) {
                    return Err(EquivalenceError::EdgeWeight(l.0, l.1));
                }
            }
            (l, r) => return Err(EquivalenceError::Edges(l, r)),
        }
    }

    for vertex in 0..lhs.vertex_count() {
        if lhs.vertex_weight(vertex) != rhs.vertex_weight(vertex) {
            return Err(EquivalenceError::VertexWeight(vertex));
        }

        if lhs.vertex_label(vertex) != rhs.vertex_label(vertex) {
            return Err(EquivalenceError::VertexLabel(vertex));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use crate::storage::{AdjList, AdjMatrix};

    use super::*;

    #[test]
    fn generators() {
        let complete: AdjList = create_complete(4);
        assert_eq!(complete.edge_count(), 12);
        assert!(complete.is_complete_graph());
        check_consistency(&complete).unwrap();

        let path: AdjMatrix = create_path(4);
        assert_eq!(path.edges().collect::<Vec<_>>(), vec![(0, 1), (1, 2), (2, 3)]);
        check_consistency(&path).unwrap();

        let cycle: AdjList = create_cycle(3);
        assert_eq!(cycle.edges().collect::<Vec<_>>(), vec![(0, 1), (1, 2), (2, 0)]);

        let single: AdjMatrix = create_cycle(1);
        assert!(single.is_empty_graph());
    }

    #[test]
    fn equivalence_mismatch() {
        let mut lhs = AdjList::new(3);
        let mut rhs = AdjMatrix::new(3);

        lhs.add_edge(0, 1).unwrap();
        rhs.add_edge(0, 2).unwrap();

        assert_matches!(
            check_equivalence(&lhs, &rhs),
            Err(EquivalenceError::Edges(Some((0, 1)), Some((0, 2))))
        );

        rhs.remove_edge(0, 2).unwrap();
        rhs.add_edge(0, 1).unwrap();
        assert_eq!(check_equivalence(&lhs, &rhs), Ok(()));

        lhs.set_edge_weight(0, 1, 1.0).unwrap();
        assert_matches!(
            check_equivalence(&lhs, &rhs),
            Err(EquivalenceError::EdgeWeight(0, 1))
        );

        rhs.set_edge_weight(0, 1, 1.0).unwrap();
        rhs.set_vertex_label(2, "c").unwrap();
        assert_matches!(
            check_equivalence(&lhs, &rhs),
            Err(EquivalenceError::VertexLabel(2))
        );
    }

    #[test]
    fn error_messages() {
        let error = ConsistencyCheckError::HandshakingLemmaDirected(3, 2, Direction::Incoming);
        assert_eq!(
            error.to_string(),
            "sum of in degrees (3) is not equal to edge count (2)"
        );

        let error = EquivalenceError::Edges(Some((0, 1)), None);
        assert_eq!(
            error.to_string(),
            "edge sets differ, first mismatch is (0, 1) vs nothing"
        );
    }
}
