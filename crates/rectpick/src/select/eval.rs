//! Scoring of candidates against the running best.

use crate::geom::{bounding_corners, selection_cost, Instance};

use super::types::{Outcome, Solution, Strategy};

/// Score `selected` and replace `best` on a strict improvement.
///
/// Candidates with fewer than `min_k` ids are `Skipped` and never scored.
/// `best` changes only on `Improved`.
pub fn evaluate_selection(
    inst: &Instance,
    selected: &[usize],
    strategy: Strategy,
    best: &mut Solution,
) -> Outcome {
    if selected.len() < inst.min_k {
        return Outcome::Skipped;
    }
    let total = selection_cost(inst.buildings(), selected);
    if total < best.cost {
        best.cost = total;
        best.corners = bounding_corners(inst.buildings(), selected);
        best.found_by = Some(strategy);
        Outcome::Improved
    } else {
        Outcome::Scored
    }
}
