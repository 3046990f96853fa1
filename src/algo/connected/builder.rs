use crate::core::{Digraph, Result};

use super::{bfs::bfs, Connected};

/// Builder for [`Connected`].
pub struct ConnectedBuilder<'a, G> {
    graph: &'a G,
    root: usize,
    between: Option<(usize, usize)>,
}

impl Connected {
    pub fn on<G>(graph: &G) -> ConnectedBuilder<'_, G>
    where
        G: Digraph,
    {
        ConnectedBuilder {
            graph,
            root: 0,
            between: None,
        }
    }
}

impl<'a, G> ConnectedBuilder<'a, G>
where
    G: Digraph,
{
    /// Starts the traversal from this vertex instead of vertex 0. With
    /// [`between`](Self::between) the traversal starts at its source, but the
    /// root is still validated.
    pub fn root(self, root: usize) -> Self {
        Self { root, ..self }
    }

    /// Narrows the connectivity check to only these two vertices. The
    /// traversal starts at `src` instead of the root.
    pub fn between(self, src: usize, dst: usize) -> Self {
        Self {
            between: Some((src, dst)),
            ..self
        }
    }

    pub fn run(self) -> Result<Connected> {
        bfs(self.graph, self.root, self.between)
    }
}
