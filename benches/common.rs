#![allow(dead_code)]

use digraf::core::Create;
use fastrand::Rng;

pub const RANDOM_SEED: u64 = 0xef6f79ed30ba75a;

/// Geometric skipping over the lower triangle of the adjacency matrix, which
/// yields each pair `(v, w)` with `w < v` with probability `p`.
pub struct RandomEdges {
    v: usize,
    w: usize,
    n: usize,
    p: f32,
}

impl RandomEdges {
    pub fn new(vertex_count: usize, p: f32) -> Self {
        Self {
            v: 1,
            w: usize::MAX,
            n: vertex_count,
            p,
        }
    }

    pub fn next_edge(&mut self, rng: &mut Rng) -> Option<(usize, usize)> {
        let Self { v, w, .. } = self;
        let n = self.n;
        let p = self.p;

        if *v >= n {
            return None;
        }

        let r = rng.f32();
        *w = w.wrapping_add(1) + ((1.0 - r).log10() / (1.0 - p).log10()).floor() as usize;

        while *w >= *v && *v < n {
            *w -= *v;
            *v += 1;
        }

        if *v < n {
            Some((*v, *w))
        } else {
            None
        }
    }

    /// Like [`next_edge`](Self::next_edge), but with a random direction.
    pub fn next_directed(&mut self, rng: &mut Rng) -> Option<(usize, usize)> {
        self.next_edge(rng)
            .map(|(v, w)| if rng.bool() { (v, w) } else { (w, v) })
    }
}

pub fn random<G: Create>(vertex_count: usize, density: f32, rng: &mut Rng) -> G {
    let mut graph = G::with_vertex_count(vertex_count);
    let mut edges = RandomEdges::new(vertex_count, density);

    while let Some((u, v)) = edges.next_directed(rng) {
        graph.add_edge(u, v).unwrap();

        if rng.bool() {
            graph.set_edge_weight(u, v, rng.f64()).unwrap();
        }
    }

    graph
}
