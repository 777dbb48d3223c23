//! End-to-end probe: decompose and export a square-pyramid wireframe.
//!
//! Purpose
//! - Show the full pipeline (validated mesh, strip search, binary writer) on
//!   a shape small enough to eyeball, and print the per-strip savings over a
//!   naive one-strip-per-edge encoding.

use nalgebra::Point3;
use wirestrip::prelude::*;

fn main() {
    // Base 0..=3 counterclockwise, apex 4.
    let vertices = vec![
        Point3::new(-1.0, 0.0, -1.0),
        Point3::new(1.0, 0.0, -1.0),
        Point3::new(1.0, 0.0, 1.0),
        Point3::new(-1.0, 0.0, 1.0),
        Point3::new(0.0, 1.5, 0.0),
    ];
    let edges = [
        (0, 1),
        (1, 2),
        (2, 3),
        (3, 0),
        (0, 4),
        (1, 4),
        (2, 4),
        (3, 4),
    ];
    let mesh = WireMesh::new(vertices, edges).expect("pyramid wireframe is well-formed");

    let dec = decompose(mesh.edges());
    println!(
        "edges={} strips={} (naive would use {})",
        mesh.edges().len(),
        dec.strip_count(),
        mesh.edges().len()
    );
    for (i, strip) in dec.strips().iter().enumerate() {
        println!("strip {i}: {:?}", strip.vertices());
    }

    let bytes = encode_mesh(&mesh).expect("pyramid fits the format");
    // naive layout: same header/vertices, then one 2-vertex strip per edge
    let naive = 1 + mesh.vertices().len() * 6 + 1 + mesh.edges().len() * 3;
    println!("encoded {} bytes (naive {} bytes)", bytes.len(), naive);
}
