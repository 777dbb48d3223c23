use nalgebra::Point3;

use super::*;
use crate::graph::{Edge, VertexId};
use crate::strip::{Decomposition, Strip};

fn points(coords: &[(f32, f32, f32)]) -> Vec<Point3<f32>> {
    coords
        .iter()
        .map(|&(x, y, z)| Point3::new(x, y, z))
        .collect()
}

#[test]
fn mesh_rejects_self_loop() {
    let err = WireMesh::new(points(&[(0.0, 0.0, 0.0), (1.0, 0.0, 0.0)]), [(1, 1)]).unwrap_err();
    assert_eq!(err, MeshError::SelfLoop { vertex: 1 });
}

#[test]
fn mesh_rejects_duplicate_in_either_direction() {
    let err = WireMesh::new(
        points(&[(0.0, 0.0, 0.0), (1.0, 0.0, 0.0)]),
        [(0, 1), (1, 0)],
    )
    .unwrap_err();
    assert_eq!(err, MeshError::DuplicateEdge { a: 1, b: 0 });
}

#[test]
fn mesh_rejects_out_of_range_index() {
    let err = WireMesh::new(points(&[(0.0, 0.0, 0.0), (1.0, 0.0, 0.0)]), [(0, 5)]).unwrap_err();
    assert_eq!(
        err,
        MeshError::VertexOutOfRange {
            index: 5,
            vertex_count: 2
        }
    );
}

#[test]
fn single_edge_mesh_encodes_byte_exact() {
    let mesh = WireMesh::new(points(&[(0.0, 0.0, 0.0), (1.5, -0.25, 2.0)]), [(0, 1)]).unwrap();
    let bytes = encode_mesh(&mesh).unwrap();
    assert_eq!(
        bytes,
        vec![
            2, // vertex count
            0x00, 0x00, 0x00, 0x00, 0x00, 0x00, // (0, 0, 0)
            0x80, 0x01, // 1.5 -> 384
            0xC0, 0xFF, // -0.25 -> -64
            0x00, 0x02, // 2.0 -> 512
            1, // strip count
            1, // edges in strip
            0, 1, // strip vertices
        ]
    );
}

#[test]
fn path_mesh_encodes_a_single_merged_strip() {
    let mesh = WireMesh::new(
        points(&[(0.0, 0.0, 0.0), (1.0, 0.0, 0.0), (2.0, 0.0, 0.0)]),
        [(0, 1), (1, 2)],
    )
    .unwrap();
    let bytes = encode_mesh(&mesh).unwrap();
    // trailer: 1 strip, 2 edges, vertices 0 1 2
    assert_eq!(&bytes[bytes.len() - 5..], &[1, 2, 0, 1, 2]);
}

#[test]
fn fixed_point_saturates_instead_of_wrapping() {
    let mesh = WireMesh::new(
        points(&[(1000.0, -1000.0, 0.0)]),
        Vec::<(VertexId, VertexId)>::new(),
    )
    .unwrap();
    let bytes = encode_mesh(&mesh).unwrap();
    assert_eq!(&bytes[1..3], &[0xFF, 0x7F]); // i16::MAX
    assert_eq!(&bytes[3..5], &[0x00, 0x80]); // i16::MIN
}

#[test]
fn mesh_over_255_vertices_fails_to_encode() {
    let many = vec![Point3::new(0.0, 0.0, 0.0); 256];
    let mesh = WireMesh::new(many, Vec::<(VertexId, VertexId)>::new()).unwrap();
    assert_eq!(
        encode_mesh(&mesh).unwrap_err(),
        EncodeError::TooManyVertices { count: 256 }
    );
}

#[test]
fn strip_over_255_edges_fails_to_encode() {
    // closed petals through vertex 0: 86 petals of 3 edges = 258 edges walked
    // by one strip, while only 173 vertices keep the mesh itself in range
    let mut pairs = Vec::new();
    for k in 0..86u16 {
        let a = 1 + 2 * k;
        let b = a + 1;
        pairs.push((0, a));
        pairs.push((a, b));
        pairs.push((b, 0));
    }
    let verts = vec![Point3::new(0.0, 0.0, 0.0); 173];
    let mesh = WireMesh::new(verts, pairs.iter().copied()).unwrap();

    let mut strip = Strip::seed(Edge::new(0, 1), 0);
    for &(a, b) in &pairs[1..] {
        strip.push(Edge::new(a, b));
    }
    assert_eq!(strip.edge_count(), 258);
    let dec = Decomposition::from_strips(vec![strip]);
    assert_eq!(
        encode_mesh_with(&mesh, &dec).unwrap_err(),
        EncodeError::StripTooLong { edges: 258 }
    );
}

#[test]
fn over_255_strips_fails_to_encode() {
    // 256 distinct edges over 24 vertices, each its own 1-edge strip
    let mut pairs = Vec::new();
    'fill: for a in 0..24u16 {
        for b in (a + 1)..24 {
            pairs.push((a, b));
            if pairs.len() == 256 {
                break 'fill;
            }
        }
    }
    let verts = vec![Point3::new(0.0, 0.0, 0.0); 24];
    let mesh = WireMesh::new(verts, pairs.iter().copied()).unwrap();

    let strips: Vec<Strip> = pairs
        .iter()
        .map(|&(a, b)| Strip::seed(Edge::new(a, b), a))
        .collect();
    let dec = Decomposition::from_strips(strips);
    assert_eq!(
        encode_mesh_with(&mesh, &dec).unwrap_err(),
        EncodeError::TooManyStrips { count: 256 }
    );
}

#[test]
fn encode_mesh_with_matches_encode_mesh() {
    let mesh = WireMesh::new(
        points(&[(0.0, 0.0, 0.0), (1.0, 0.0, 0.0), (1.0, 1.0, 0.0)]),
        [(0, 1), (1, 2)],
    )
    .unwrap();
    let dec = crate::strip::decompose(mesh.edges());
    assert_eq!(
        encode_mesh_with(&mesh, &dec).unwrap(),
        encode_mesh(&mesh).unwrap()
    );
}

#[test]
fn glyph_encodes_nibble_packed() {
    let glyph = Glyph::new(vec![(0, 0), (0, 15)], [(0, 1)]).unwrap();
    let bytes = encode_glyph(&glyph).unwrap();
    assert_eq!(bytes, vec![0x12, 0x00, 0xF0, 0x10]);
}

#[test]
fn glyph_shares_mesh_validation() {
    assert_eq!(
        Glyph::new(vec![(0, 0)], [(0, 0)]).unwrap_err(),
        MeshError::SelfLoop { vertex: 0 }
    );
    assert_eq!(
        Glyph::new(vec![(0, 0), (1, 1)], [(0, 3)]).unwrap_err(),
        MeshError::VertexOutOfRange {
            index: 3,
            vertex_count: 2
        }
    );
}

#[test]
fn glyph_capacity_checks() {
    let too_many = Glyph::new(vec![(0, 0); 16], Vec::<(VertexId, VertexId)>::new()).unwrap();
    assert_eq!(
        encode_glyph(&too_many).unwrap_err(),
        EncodeError::TooManyPoints { count: 16 }
    );

    let off_grid = Glyph::new(vec![(16, 2)], Vec::<(VertexId, VertexId)>::new()).unwrap();
    assert_eq!(
        encode_glyph(&off_grid).unwrap_err(),
        EncodeError::CoordOutOfRange { x: 16, y: 2 }
    );

    // 7 points admit 21 distinct lines, enough to overflow the line nibble
    let points: Vec<(u8, u8)> = (0..7u8).map(|i| (i, 0)).collect();
    let mut lines = Vec::new();
    'fill: for a in 0..7u16 {
        for b in (a + 1)..7 {
            lines.push((a, b));
            if lines.len() == 16 {
                break 'fill;
            }
        }
    }
    let too_many_lines = Glyph::new(points, lines).unwrap();
    assert_eq!(
        encode_glyph(&too_many_lines).unwrap_err(),
        EncodeError::TooManyLines { count: 16 }
    );
}
