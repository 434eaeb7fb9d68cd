//! Cost-driven candidate generators.
//!
//! - `select_all_negative`: every negative-cost building, padded with the
//!   cheapest non-negative ones up to `min_k`.
//! - `fast_greedy`: cheapest `min_k`, then try a short window of further
//!   negative-cost buildings one at a time.
//! - `cheapest_k`: the `min_k` cheapest buildings.

use crate::geom::{selection_cost, Instance};

/// All negative-cost buildings; if fewer than `min_k`, pad with the cheapest
/// non-negative ones until `min_k` or the input runs out.
pub fn select_all_negative(inst: &Instance) -> Vec<usize> {
    let b = inst.buildings();
    let mut out: Vec<usize> = (0..b.len()).filter(|&i| b[i].cost < 0.0).collect();
    if out.len() >= inst.min_k {
        return out;
    }
    let need = inst.min_k - out.len();
    let pad = inst
        .ids_by_cost()
        .into_iter()
        .filter(|&i| b[i].cost >= 0.0)
        .take(need);
    out.extend(pad);
    out
}

/// Cheapest `min_k` (or all, if fewer), then for each of the next `window`
/// buildings in cost order: if its cost is negative and adding it lowers the
/// selection cost strictly, keep it. The selection only grows.
pub fn fast_greedy(inst: &Instance, window: usize) -> Vec<usize> {
    let b = inst.buildings();
    let order = inst.ids_by_cost();
    let base = inst.min_k.min(order.len());
    let mut sel: Vec<usize> = order[..base].to_vec();
    let end = order.len().min(inst.min_k.saturating_add(window));
    for &cand in &order[base..end] {
        if b[cand].cost >= 0.0 {
            continue;
        }
        let current = selection_cost(b, &sel);
        sel.push(cand);
        if selection_cost(b, &sel) >= current {
            sel.pop();
        }
    }
    sel
}

/// The `min_k` cheapest buildings (all of them if `min_k` exceeds the input).
pub fn cheapest_k(inst: &Instance) -> Vec<usize> {
    let mut order = inst.ids_by_cost();
    order.truncate(inst.min_k);
    order
}
