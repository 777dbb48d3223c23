//! Wireframe strip decomposition and export formats.
//!
//! Given the undirected edge set of a wireframe mesh, `strip::decompose`
//! partitions it into few vertex-sequence strips (every edge used exactly
//! once), so the exported binary pays for fewer per-strip headers. `graph`
//! holds the edge values and samplers, `wire` the validated mesh/glyph types
//! and binary writers around the search.

pub mod api;
pub mod graph;
pub mod strip;
pub mod wire;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// Convenience re-export so exporter tooling does not import nalgebra itself.
pub use nalgebra::Point3;

pub use graph::{Edge, EdgeSet, VertexId};
pub use strip::{decompose, Decomposition, Strip};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::graph::rand::{cycle, draw_graph, grid, path, star, GraphCfg, ReplayToken};
    pub use crate::graph::{Edge, EdgeSet, VertexId};
    pub use crate::strip::{decompose, grow_candidates, Decomposition, Strip};
    pub use crate::wire::{
        encode_glyph, encode_mesh, encode_mesh_with, EncodeError, Glyph, MeshError, WireMesh,
    };
    pub use nalgebra::Point3;
}
