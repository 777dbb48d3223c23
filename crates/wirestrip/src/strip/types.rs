//! Data types for strips and decompositions.
//!
//! Kept small and explicit to make `grow` and `search` easy to read.

use crate::graph::{Edge, EdgeSet, VertexId};

/// An ordered vertex sequence whose consecutive pairs are pairwise-distinct
/// edges. A strip of `k` edges has `k + 1` vertices. Once emitted by the
/// search it is an immutable flat value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Strip {
    verts: Vec<VertexId>,
    used: EdgeSet,
}

impl Strip {
    /// Seed a 1-edge strip walking `edge` starting from endpoint `from`.
    pub(crate) fn seed(edge: Edge, from: VertexId) -> Self {
        let to = edge
            .other(from)
            .expect("seed vertex must be an endpoint of the seed edge");
        let mut used = EdgeSet::new();
        used.insert(edge);
        Self {
            verts: vec![from, to],
            used,
        }
    }

    /// Can `e` extend this strip: incident to the last vertex and not yet
    /// used by the strip itself?
    #[must_use]
    pub(crate) fn can_extend_with(&self, e: Edge) -> bool {
        e.touches(self.last()) && !self.used.contains(e)
    }

    /// Append the far endpoint of `e` and mark `e` used. Caller checks
    /// `can_extend_with` first.
    pub(crate) fn push(&mut self, e: Edge) {
        debug_assert!(self.can_extend_with(e));
        let next = e
            .other(self.last())
            .expect("extension edge must touch the strip's last vertex");
        self.verts.push(next);
        self.used.insert(e);
    }

    /// Last vertex of the sequence (the extension point while growing).
    #[must_use]
    pub fn last(&self) -> VertexId {
        *self
            .verts
            .last()
            .expect("a strip always has at least two vertices")
    }

    /// The vertex sequence, length `edge_count() + 1`.
    #[must_use]
    pub fn vertices(&self) -> &[VertexId] {
        &self.verts
    }

    /// The distinct edges drawn by this strip.
    #[must_use]
    pub fn used_edges(&self) -> &EdgeSet {
        &self.used
    }

    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.verts.len() - 1
    }
}

/// An ordered list of strips whose used-edge sets partition the input.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Decomposition {
    strips: Vec<Strip>,
}

impl Decomposition {
    pub(crate) fn from_strips(strips: Vec<Strip>) -> Self {
        Self { strips }
    }

    /// The minimized objective.
    #[must_use]
    pub fn strip_count(&self) -> usize {
        self.strips.len()
    }

    #[must_use]
    pub fn strips(&self) -> &[Strip] {
        &self.strips
    }

    /// Union of every strip's used edges.
    #[must_use]
    pub fn flatten(&self) -> EdgeSet {
        self.strips
            .iter()
            .flat_map(|s| s.used_edges().iter())
            .collect()
    }

    /// Exact-partition check: every edge of `edges` covered once, nothing
    /// extra, nothing repeated across strips.
    #[must_use]
    pub fn is_partition_of(&self, edges: &EdgeSet) -> bool {
        let total: usize = self.strips.iter().map(Strip::edge_count).sum();
        total == edges.len() && self.flatten() == *edges
    }
}

impl<'a> IntoIterator for &'a Decomposition {
    type Item = &'a Strip;
    type IntoIter = std::slice::Iter<'a, Strip>;

    fn into_iter(self) -> Self::IntoIter {
        self.strips.iter()
    }
}
