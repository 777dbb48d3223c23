//! Graph samplers for tests and benches (fixed families + seeded random).
//!
//! Purpose
//! - Provide small, reproducible edge-set inputs for the strip search. The
//!   random sampler is parameterizable and replayable; the fixed families
//!   (`path`, `cycle`, `star`, `grid`) cover the shapes exporters actually
//!   emit.
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG.
//!
//! Samplers never emit self-loops or duplicate edges, matching the
//! precondition the extraction layer guarantees for real meshes.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::types::{Edge, EdgeSet, VertexId};

/// Random simple-graph sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct GraphCfg {
    /// Number of vertices (at least 2).
    pub vertices: VertexId,
    /// Target edge count; clamped to the complete-graph maximum.
    pub edges: usize,
}

impl Default for GraphCfg {
    fn default() -> Self {
        Self {
            vertices: 8,
            edges: 12,
        }
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64-style mixing, cheap and stable.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Draw a random simple graph with `cfg.edges` distinct edges (clamped to the
/// complete graph on `cfg.vertices`).
#[must_use]
pub fn draw_graph(cfg: GraphCfg, tok: ReplayToken) -> EdgeSet {
    let mut rng = tok.to_std_rng();
    let n = cfg.vertices.max(2);
    let max_edges = usize::from(n) * (usize::from(n) - 1) / 2;
    let target = cfg.edges.min(max_edges);
    let mut set = EdgeSet::new();
    while set.len() < target {
        let a = rng.gen_range(0..n);
        let b = rng.gen_range(0..n);
        if a != b {
            set.insert(Edge::new(a, b));
        }
    }
    set
}

/// Path on `n` vertices: edges `(0,1), (1,2), ..., (n-2, n-1)`.
#[must_use]
pub fn path(n: VertexId) -> EdgeSet {
    (1..n).map(|v| Edge::new(v - 1, v)).collect()
}

/// Cycle on `n >= 3` vertices.
#[must_use]
pub fn cycle(n: VertexId) -> EdgeSet {
    assert!(n >= 3, "cycle needs at least 3 vertices");
    let mut set = path(n);
    set.insert(Edge::new(n - 1, 0));
    set
}

/// Star with center 0 and `leaves` leaf vertices `1..=leaves`.
#[must_use]
pub fn star(leaves: VertexId) -> EdgeSet {
    (1..=leaves).map(|v| Edge::new(0, v)).collect()
}

/// Axis-aligned grid of `w` by `h` vertices, row-major indexing.
#[must_use]
pub fn grid(w: VertexId, h: VertexId) -> EdgeSet {
    // row-major indices must stay representable
    assert!(
        usize::from(w) * usize::from(h) <= usize::from(VertexId::MAX) + 1,
        "grid has more vertices than VertexId can index"
    );
    let mut set = EdgeSet::new();
    for y in 0..h {
        for x in 0..w {
            let v = y * w + x;
            if x + 1 < w {
                set.insert(Edge::new(v, v + 1));
            }
            if y + 1 < h {
                set.insert(Edge::new(v, v + w));
            }
        }
    }
    set
}
