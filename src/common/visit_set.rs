use fixedbitset::FixedBitSet;

pub trait VisitSet {
    /// Marks the vertex as visited. Returns `true` if it was not visited
    /// before.
    fn visit(&mut self, vertex: usize) -> bool;
    fn is_visited(&self, vertex: usize) -> bool;
    fn visited_count(&self) -> usize;
}

impl VisitSet for FixedBitSet {
    fn visit(&mut self, vertex: usize) -> bool {
        if self.len() <= vertex {
            self.grow(vertex + 1);
        }
        !self.put(vertex)
    }

    fn is_visited(&self, vertex: usize) -> bool {
        self.contains(vertex)
    }

    fn visited_count(&self) -> usize {
        self.count_ones(..)
    }
}
