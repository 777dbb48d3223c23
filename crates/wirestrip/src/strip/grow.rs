//! Candidate-strip generator: greedy multi-strip growth with one replenish.
//!
//! Grows all candidates together against a shared pool of available edges, so
//! long strips form without any single strip monopolizing the set. A strip is
//! "maximal" here relative to this growth order, not globally maximal in the
//! graph; that restriction is what keeps the search driver's branching factor
//! tractable.

use crate::graph::EdgeSet;

use super::types::Strip;

/// Produce the candidate strips for one search level.
///
/// Every edge seeds two directed 1-edge strips. Growth then proceeds in
/// rounds: each strip repeatedly takes any available edge incident to its
/// last vertex (and not already used by that strip), removing it from the
/// shared pool. When a round extends nothing, the pool is refilled from the
/// full input once; a second dry round ends the process. The refill lets a
/// strip keep growing across edges that other strips' attempts consumed.
///
/// Selection among matching edges is unspecified by contract; the ordered
/// `EdgeSet` makes it lowest-edge-first in practice, which keeps results
/// reproducible.
#[must_use]
pub fn grow_candidates(edges: &EdgeSet) -> Vec<Strip> {
    let mut strips = Vec::with_capacity(edges.len() * 2);
    for e in edges.iter() {
        let (p, q) = e.endpoints();
        strips.push(Strip::seed(e, p));
        strips.push(Strip::seed(e, q));
    }

    // The pool is a plain local value threaded through the rounds, never
    // ambient state shared across calls.
    let mut pool = edges.clone();
    let mut replenished = true;
    loop {
        let mut extended = false;
        for strip in &mut strips {
            loop {
                let next = pool.iter().find(|&e| strip.can_extend_with(e));
                if let Some(e) = next {
                    pool.remove(e);
                    strip.push(e);
                    extended = true;
                } else {
                    break;
                }
            }
        }
        if extended {
            replenished = false;
            continue;
        }
        if replenished {
            break;
        }
        pool = edges.clone();
        replenished = true;
    }
    strips
}
