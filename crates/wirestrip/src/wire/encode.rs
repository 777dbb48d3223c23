//! Binary wireframe mesh writer.
//!
//! Layout (all counts one byte, read back by the game at load time):
//! vertex count, then per vertex three little-endian i16 coordinates in 8.8
//! fixed point; strip count, then per strip an edge count followed by
//! `edge count + 1` one-byte vertex indices.

use std::fmt;

use crate::strip::{decompose, Decomposition};

use super::mesh::WireMesh;

/// Format-capacity overflow, surfaced as an export failure rather than
/// silently truncated.
#[derive(Debug, PartialEq, Eq)]
pub enum EncodeError {
    TooManyVertices { count: usize },
    TooManyStrips { count: usize },
    StripTooLong { edges: usize },
    TooManyPoints { count: usize },
    TooManyLines { count: usize },
    CoordOutOfRange { x: u8, y: u8 },
}

impl fmt::Display for EncodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooManyVertices { count } => {
                write!(f, "mesh has {count} vertices; the format holds at most 255")
            }
            Self::TooManyStrips { count } => {
                write!(f, "decomposition has {count} strips; the format holds at most 255")
            }
            Self::StripTooLong { edges } => {
                write!(f, "strip has {edges} edges; the format holds at most 255")
            }
            Self::TooManyPoints { count } => {
                write!(f, "glyph has {count} points; the format holds at most 15")
            }
            Self::TooManyLines { count } => {
                write!(f, "glyph has {count} lines; the format holds at most 15")
            }
            Self::CoordOutOfRange { x, y } => {
                write!(f, "glyph point ({x}, {y}) outside the 0..=15 grid")
            }
        }
    }
}

impl std::error::Error for EncodeError {}

const MAX_FIELD: usize = u8::MAX as usize;

/// 8.8 fixed point, little endian, saturating at the i16 range.
fn push_fixed(out: &mut Vec<u8>, v: f32) {
    let q = (f64::from(v) * 256.0).round();
    let q = q.clamp(f64::from(i16::MIN), f64::from(i16::MAX)) as i16;
    out.extend_from_slice(&q.to_le_bytes());
}

/// Decompose the mesh's edges into strips and serialize the whole asset.
pub fn encode_mesh(mesh: &WireMesh) -> Result<Vec<u8>, EncodeError> {
    encode_mesh_with(mesh, &decompose(mesh.edges()))
}

/// Serialize a precomputed decomposition of `mesh`'s edges.
///
/// `dec` must partition `mesh.edges()` exactly; [`encode_mesh`] composes this
/// with the strip search and is the usual entry point.
pub fn encode_mesh_with(mesh: &WireMesh, dec: &Decomposition) -> Result<Vec<u8>, EncodeError> {
    debug_assert!(dec.is_partition_of(mesh.edges()));
    let vertex_count = mesh.vertices().len();
    if vertex_count > MAX_FIELD {
        return Err(EncodeError::TooManyVertices {
            count: vertex_count,
        });
    }

    if dec.strip_count() > MAX_FIELD {
        return Err(EncodeError::TooManyStrips {
            count: dec.strip_count(),
        });
    }
    for strip in dec {
        if strip.edge_count() > MAX_FIELD {
            return Err(EncodeError::StripTooLong {
                edges: strip.edge_count(),
            });
        }
    }

    let mut out = Vec::new();
    out.push(vertex_count as u8);
    for v in mesh.vertices() {
        push_fixed(&mut out, v.x);
        push_fixed(&mut out, v.y);
        push_fixed(&mut out, v.z);
    }
    out.push(dec.strip_count() as u8);
    for strip in dec {
        out.push(strip.edge_count() as u8);
        for &v in strip.vertices() {
            // indices fit: the mesh validated them against <= 255 vertices
            out.push(v as u8);
        }
    }
    Ok(out)
}
