//! Compact font glyph values and writer.
//!
//! Layout: one header byte packing point count (low nibble) and line count
//! (high nibble); per point one byte packing x (low) and y (high); per line
//! one byte packing the two endpoint indices. Everything lives on a 16x16
//! grid with at most 15 points and 15 lines, so the whole glyph is nibbles.

use crate::graph::{Edge, EdgeSet, VertexId};

use super::encode::EncodeError;
use super::mesh::MeshError;

const MAX_NIBBLE: usize = 15;

/// A single font glyph: 4-bit grid points plus line segments between them.
#[derive(Clone, Debug)]
pub struct Glyph {
    points: Vec<(u8, u8)>,
    lines: EdgeSet,
}

impl Glyph {
    /// Validate raw glyph data; the same upstream rules as `WireMesh::new`.
    /// Grid-range and capacity checks belong to [`encode_glyph`].
    pub fn new(
        points: Vec<(u8, u8)>,
        lines: impl IntoIterator<Item = (VertexId, VertexId)>,
    ) -> Result<Self, MeshError> {
        let count = points.len();
        let mut set = EdgeSet::new();
        for (a, b) in lines {
            if a == b {
                return Err(MeshError::SelfLoop { vertex: a });
            }
            for index in [a, b] {
                if usize::from(index) >= count {
                    return Err(MeshError::VertexOutOfRange {
                        index,
                        vertex_count: count,
                    });
                }
            }
            if !set.insert(Edge::new(a, b)) {
                return Err(MeshError::DuplicateEdge { a, b });
            }
        }
        Ok(Self { points, lines: set })
    }

    #[must_use]
    pub fn points(&self) -> &[(u8, u8)] {
        &self.points
    }

    #[must_use]
    pub fn lines(&self) -> &EdgeSet {
        &self.lines
    }
}

/// Serialize a glyph into the nibble-packed font format.
pub fn encode_glyph(glyph: &Glyph) -> Result<Vec<u8>, EncodeError> {
    let points = glyph.points();
    if points.len() > MAX_NIBBLE {
        return Err(EncodeError::TooManyPoints {
            count: points.len(),
        });
    }
    if glyph.lines().len() > MAX_NIBBLE {
        return Err(EncodeError::TooManyLines {
            count: glyph.lines().len(),
        });
    }
    for &(x, y) in points {
        if x > 15 || y > 15 {
            return Err(EncodeError::CoordOutOfRange { x, y });
        }
    }

    let mut out = Vec::with_capacity(1 + points.len() + glyph.lines().len());
    out.push(points.len() as u8 | (glyph.lines().len() as u8) << 4);
    for &(x, y) in points {
        out.push(x | y << 4);
    }
    for line in glyph.lines().iter() {
        // endpoints fit in nibbles: indices < point count <= 15
        let (i, j) = line.endpoints();
        out.push(i as u8 | (j as u8) << 4);
    }
    Ok(out)
}
