use std::collections::VecDeque;

use fixedbitset::FixedBitSet;

use crate::{
    common::VisitSet,
    core::{
        validate::{check_endpoints, check_vertex},
        Digraph, Result,
    },
};

use super::Connected;

pub fn bfs<G>(graph: &G, root: usize, between: Option<(usize, usize)>) -> Result<Connected>
where
    G: Digraph,
{
    let vertex_count = graph.vertex_count();

    let (start, goal) = match between {
        Some((src, dst)) => {
            check_endpoints(src, dst, vertex_count)?;
            check_vertex(root, vertex_count)?;
            (src, Some(dst))
        }
        None if vertex_count <= 1 && root == 0 => {
            return Ok(Connected {
                disconnected_any: None,
            });
        }
        None => {
            check_vertex(root, vertex_count)?;
            (root, None)
        }
    };

    let mut visited = FixedBitSet::with_capacity(vertex_count);
    let mut queue = VecDeque::from([start]);
    visited.visit(start);

    while let Some(vertex) = queue.pop_front() {
        if goal == Some(vertex) {
            return Ok(Connected {
                disconnected_any: None,
            });
        }

        for neighbor in graph.neighbors_undirected(vertex)? {
            if visited.visit(neighbor) {
                queue.push_back(neighbor);
            }
        }
    }

    let disconnected_any = match goal {
        Some(goal) => Some((start, goal)),
        None if visited.visited_count() == vertex_count => None,
        None => (0..vertex_count)
            .find(|vertex| !visited.is_visited(*vertex))
            .map(|vertex| (start, vertex)),
    };

    Ok(Connected { disconnected_any })
}
