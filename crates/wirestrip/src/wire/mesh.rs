//! Validated wireframe mesh values.
//!
//! `WireMesh::new` enforces the preconditions the strip search assumes:
//! no self-loops, no duplicate edges in either direction, every index in
//! range. Violations come back as descriptive errors instead of reaching the
//! search.

use std::fmt;

use nalgebra::Point3;

use crate::graph::{Edge, EdgeSet, VertexId};

/// Upstream precondition violations caught at mesh construction.
#[derive(Debug, PartialEq, Eq)]
pub enum MeshError {
    SelfLoop {
        vertex: VertexId,
    },
    DuplicateEdge {
        a: VertexId,
        b: VertexId,
    },
    VertexOutOfRange {
        index: VertexId,
        vertex_count: usize,
    },
}

impl fmt::Display for MeshError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SelfLoop { vertex } => {
                write!(f, "self-loop edge at vertex {vertex}")
            }
            Self::DuplicateEdge { a, b } => {
                write!(f, "duplicate edge ({a}, {b})")
            }
            Self::VertexOutOfRange {
                index,
                vertex_count,
            } => {
                write!(
                    f,
                    "edge references vertex {index} but the mesh has {vertex_count} vertices"
                )
            }
        }
    }
}

impl std::error::Error for MeshError {}

/// A wireframe mesh: vertex positions plus a validated edge set.
#[derive(Clone, Debug)]
pub struct WireMesh {
    vertices: Vec<Point3<f32>>,
    edges: EdgeSet,
}

impl WireMesh {
    /// Build a mesh from raw extraction output, rejecting self-loops,
    /// duplicates (either orientation), and out-of-range indices.
    pub fn new(
        vertices: Vec<Point3<f32>>,
        edges: impl IntoIterator<Item = (VertexId, VertexId)>,
    ) -> Result<Self, MeshError> {
        let count = vertices.len();
        let mut set = EdgeSet::new();
        for (a, b) in edges {
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
        Ok(Self {
            vertices,
            edges: set,
        })
    }

    #[must_use]
    pub fn vertices(&self) -> &[Point3<f32>] {
        &self.vertices
    }

    #[must_use]
    pub fn edges(&self) -> &EdgeSet {
        &self.edges
    }
}
