use super::Digraph;

/// Construction of an edgeless graph with a fixed number of vertices.
pub trait Create: Digraph + Sized {
    fn with_vertex_count(vertex_count: usize) -> Self;

    fn from_edges<I>(vertex_count: usize, edges: I) -> super::Result<Self>
    where
        I: IntoIterator<Item = (usize, usize)>,
    {
        let mut graph = Self::with_vertex_count(vertex_count);

        for (src, dst) in edges {
            graph.add_edge(src, dst)?;
        }

        Ok(graph)
    }
}
