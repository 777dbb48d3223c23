//! Export boundary: validated mesh/glyph values and binary writers.
//!
//! Purpose
//! - Sit between scene extraction and the strip search: `WireMesh::new` and
//!   `Glyph::new` reject the inputs the search is undefined on (self-loops,
//!   duplicates, bad indices).
//! - Serialize decompositions into the byte layouts the game loads, with
//!   capacity overflow reported as errors rather than truncated.

mod encode;
mod glyph;
mod mesh;

pub use encode::{encode_mesh, encode_mesh_with, EncodeError};
pub use glyph::{encode_glyph, Glyph};
pub use mesh::{MeshError, WireMesh};

#[cfg(test)]
mod tests;
