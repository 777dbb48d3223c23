//! Wireframe graph values (canonical edges, edge sets, samplers).
//!
//! Purpose
//! - Provide the value types the strip search operates on: an unordered-pair
//!   `Edge` with canonical equality and an ordered `EdgeSet` with
//!   deterministic iteration.
//! - Keep the API minimal and by-value: the search clones and shrinks edge
//!   sets per branch, so these types stay cheap and aliasing-free.

pub mod rand;
mod types;

pub use types::{Edge, EdgeSet, VertexId};

#[cfg(test)]
mod tests;
