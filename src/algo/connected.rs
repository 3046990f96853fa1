use crate::core::Digraph;

mod bfs;
mod builder;

pub use builder::ConnectedBuilder;

/// Outcome of a weak connectivity check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Connected {
    disconnected_any: Option<(usize, usize)>,
}

impl Connected {
    pub fn is(&self) -> bool {
        self.disconnected_any.is_none()
    }

    /// A pair of vertices with no undirected path between them, if there is
    /// any. The first vertex is the root of the traversal.
    pub fn disconnected_any(&self) -> Option<(usize, usize)> {
        self.disconnected_any
    }
}

/// Whether every vertex is reachable from vertex 0 when edge directions are
/// ignored. Graphs with at most one vertex are connected.
pub fn is_connected<G>(graph: &G) -> bool
where
    G: Digraph,
{
    matches!(Connected::on(graph).run(), Ok(connected) if connected.is())
}

pub fn is_path_between<G>(graph: &G, src: usize, dst: usize) -> crate::core::Result<bool>
where
    G: Digraph,
{
    Connected::on(graph)
        .between(src, dst)
        .run()
        .map(|connected| connected.is())
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use proptest::prelude::*;

    use crate::{
        core::GraphError,
        infra::{
            proptest::mut_ops,
            testing::{create_cycle, create_path},
        },
        storage::{AdjList, AdjMatrix},
    };

    use super::*;

    fn assert_valid<G: Digraph>(connected: &Connected, graph: &G) {
        // Reference DFS over the undirected view.
        let n = graph.vertex_count();
        let mut visited = vec![false; n];
        let mut stack = Vec::new();

        if n > 0 {
            stack.push(0);
        }

        while let Some(u) = stack.pop() {
            if std::mem::replace(&mut visited[u], true) {
                continue;
            }

            stack.extend(graph.neighbors_undirected(u).unwrap());
        }

        match connected.disconnected_any() {
            Some((root, other)) => {
                assert_eq!(root, 0);
                assert!(
                    !visited[other],
                    "algorithm reported connected vertices as disconnected (0, {other})"
                );
            }
            None => assert!(
                visited.iter().all(|v| *v),
                "algorithm reported connected graph while it is not"
            ),
        }
    }

    #[test]
    fn trivial_graphs_are_connected() {
        assert!(is_connected(&AdjList::new(0)));
        assert!(is_connected(&AdjList::new(1)));
        assert!(is_connected(&AdjMatrix::new(0)));
        assert!(is_connected(&AdjMatrix::new(1)));
    }

    #[test]
    fn isolated_vertex() {
        let graph: AdjList = create_path(3);
        assert!(is_connected(&graph));

        let mut graph = AdjList::new(4);
        graph.add_edge(0, 1).unwrap();
        graph.add_edge(1, 2).unwrap();

        let connected = Connected::on(&graph).run().unwrap();
        assert!(!connected.is());
        assert_eq!(connected.disconnected_any(), Some((0, 3)));
    }

    #[test]
    fn reversed_edges_connect() {
        let mut graph = AdjMatrix::new(3);
        graph.add_edge(1, 0).unwrap();
        graph.add_edge(2, 1).unwrap();

        assert!(is_connected(&graph));
    }

    #[test]
    fn root_unreachable_by_directed_path() {
        // 1 -> 0 <- 2, vertex 0 has no successors.
        let mut graph = AdjList::new(3);
        graph.add_edge(1, 0).unwrap();
        graph.add_edge(2, 0).unwrap();

        assert!(is_connected(&graph));
    }

    #[test]
    fn path_between() {
        let mut graph = AdjList::new(5);
        graph.add_edge(0, 1).unwrap();
        graph.add_edge(2, 1).unwrap();
        graph.add_edge(3, 4).unwrap();

        assert_eq!(is_path_between(&graph, 0, 2), Ok(true));
        assert_eq!(is_path_between(&graph, 2, 0), Ok(true));
        assert_eq!(is_path_between(&graph, 0, 4), Ok(false));
        assert_eq!(is_path_between(&graph, 3, 3), Ok(true));
        assert_matches!(
            is_path_between(&graph, 0, 5),
            Err(GraphError::IndexOutOfRange { index: 5, .. })
        );
    }

    #[test]
    fn custom_root() {
        let graph: AdjMatrix = create_cycle(4);
        let connected = Connected::on(&graph).root(2).run().unwrap();
        assert!(connected.is());

        assert_matches!(
            Connected::on(&graph).root(4).run(),
            Err(GraphError::IndexOutOfRange { index: 4, .. })
        );
    }

    #[test]
    fn between_validates_root() {
        let graph: AdjList = create_path(3);

        let connected = Connected::on(&graph).root(2).between(0, 1).run().unwrap();
        assert!(connected.is());

        assert_matches!(
            Connected::on(&graph).root(3).between(0, 1).run(),
            Err(GraphError::IndexOutOfRange { index: 3, .. })
        );
    }

    proptest! {
        #[test]
        fn connected_any(ops in mut_ops(8, 32)) {
            let mut graph = AdjList::new(ops.vertex_count());
            ops.replay(&mut graph);

            let connected = Connected::on(&graph).run().unwrap();
            assert_valid(&connected, &graph);
        }
    }
}
