//! Recursive backtracking over candidate strips with an incumbent budget.

use crate::graph::EdgeSet;

use super::grow::grow_candidates;
use super::types::{Decomposition, Strip};

/// Decompose `edges` into the fewest strips the candidate search finds.
///
/// The result is always an exact partition of the input: every edge covered
/// once, none repeated, none invented. The strip count is minimal over the
/// candidate space explored (each level branches on the maximal strips from
/// [`grow_candidates`]), which is heuristic, not the graph-theoretic optimum.
/// Ties between equally small decompositions go to the first found under the
/// deterministic candidate order.
///
/// The input must contain no self-loops; `Edge` cannot represent one, so a
/// well-formed `EdgeSet` satisfies this by construction.
#[must_use]
pub fn decompose(edges: &EdgeSet) -> Decomposition {
    // A budget of |E| strips is always feasible (worst case one strip per
    // edge), so the search cannot come back empty.
    let strips = search(edges, edges.len())
        .expect("searching with budget |E| always finds a decomposition");
    Decomposition::from_strips(strips)
}

/// Find a partition of `edges` into at most `budget` strips, or `None`.
///
/// Each recursion level tries every candidate strip, removes its used edges,
/// and solves the remainder with a tightened budget. The budget doubles as
/// incumbent pruning: once some trial uses `t` strips, siblings only explore
/// strictly cheaper completions. Identical remainders reached via different
/// candidates are re-solved independently (no memoization); acceptable at the
/// few-dozen-edge sizes exporters produce.
fn search(edges: &EdgeSet, budget: usize) -> Option<Vec<Strip>> {
    if edges.is_empty() {
        return Some(Vec::new());
    }
    let mut best: Option<Vec<Strip>> = None;
    let mut limit = budget;
    for candidate in grow_candidates(edges) {
        if limit == 0 {
            break;
        }
        let rest = edges.without(candidate.used_edges());
        if let Some(mut trial) = search(&rest, limit - 1) {
            trial.insert(0, candidate);
            // Later candidates must strictly beat this trial.
            limit = trial.len() - 1;
            best = Some(trial);
        }
    }
    best
}
