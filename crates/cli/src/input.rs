//! JSON mesh and glyph descriptions consumed by the exporter commands.
//!
//! The authoring-tool plugins dump these files; validation happens in the
//! library (`WireMesh::new` / `Glyph::new`), so a bad description fails here
//! with the file path attached.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use wirestrip::prelude::*;

/// `{"vertices": [[x,y,z],...], "edges": [[a,b],...]}`
#[derive(Debug, Deserialize)]
pub struct MeshDoc {
    pub vertices: Vec<[f32; 3]>,
    pub edges: Vec<[VertexId; 2]>,
}

impl MeshDoc {
    pub fn into_mesh(self) -> Result<WireMesh> {
        let vertices = self
            .vertices
            .iter()
            .map(|&[x, y, z]| Point3::new(x, y, z))
            .collect();
        let mesh = WireMesh::new(vertices, self.edges.into_iter().map(|[a, b]| (a, b)))?;
        Ok(mesh)
    }
}

/// `{"points": [[x,y],...], "lines": [[a,b],...]}`, all on the 16x16 grid.
#[derive(Debug, Deserialize)]
pub struct GlyphDoc {
    pub points: Vec<[u8; 2]>,
    pub lines: Vec<[VertexId; 2]>,
}

impl GlyphDoc {
    pub fn into_glyph(self) -> Result<Glyph> {
        let points = self.points.into_iter().map(|[x, y]| (x, y)).collect();
        let glyph = Glyph::new(points, self.lines.into_iter().map(|[a, b]| (a, b)))?;
        Ok(glyph)
    }
}

pub fn load_mesh(path: &Path) -> Result<WireMesh> {
    let text =
        fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let doc: MeshDoc =
        serde_json::from_str(&text).with_context(|| format!("parsing {}", path.display()))?;
    doc.into_mesh()
        .with_context(|| format!("validating {}", path.display()))
}

pub fn load_glyph(path: &Path) -> Result<Glyph> {
    let text =
        fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let doc: GlyphDoc =
        serde_json::from_str(&text).with_context(|| format!("parsing {}", path.display()))?;
    doc.into_glyph()
        .with_context(|| format!("validating {}", path.display()))
}
