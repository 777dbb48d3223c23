//! Edge-strip decomposition: candidate growth plus backtracking search.
//!
//! Purpose
//! - Partition a wireframe's edge set into few vertex-sequence strips, so the
//!   exported binary pays for fewer per-strip headers.
//! - `grow.rs` builds the maximal candidate strips for one level; `search.rs`
//!   branches over them recursively, keeping the cheapest full partition.
//!
//! Guarantees
//! - Output is always an exact partition of the input (validated by tests,
//!   relied on by the encoders); the strip count is heuristically small, not
//!   provably minimal.
//! - Pure functions of their inputs: every branch owns its shrunken copy of
//!   the working edge set, so sibling branches never alias.

mod grow;
mod search;
mod types;

pub use grow::grow_candidates;
pub use search::decompose;
pub use types::{Decomposition, Strip};
