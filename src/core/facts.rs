//! Collection of simple utilities for various properties and calculations.

/// Returns the number of edges in a [complete] directed simple graph with the
/// given vertex count.
///
/// [complete]: https://en.wikipedia.org/wiki/Complete_graph
///
/// # Examples
///
/// ```
/// use digraf::core::facts::complete_graph_edge_count;
///
/// assert_eq!(complete_graph_edge_count(3), 6);
/// assert_eq!(complete_graph_edge_count(0), 0);
/// ```
pub fn complete_graph_edge_count(vertex_count: usize) -> usize {
    vertex_count * vertex_count.saturating_sub(1)
}
