//! Curated re-export surface for exporter tooling.
//!
//! Project-internal; prefer these re-exports for consistency across the
//! exporter, benches, and tests rather than deep module paths.

// Graph values and samplers
pub use crate::graph::rand::{cycle, draw_graph, grid, path, star, GraphCfg, ReplayToken};
pub use crate::graph::{Edge, EdgeSet, VertexId};
// Strip search
pub use crate::strip::{decompose, grow_candidates, Decomposition, Strip};
// Export boundary
pub use crate::wire::{
    encode_glyph, encode_mesh, encode_mesh_with, EncodeError, Glyph, MeshError, WireMesh,
};
