//! Orchestration: run every strategy in order and keep the best candidate.

use crate::geom::Instance;

use super::eval::evaluate_selection;
use super::generators::{cheapest_k, fast_greedy, select_all_negative};
use super::kmeans::kmeans_candidates;
use super::types::{SolverCfg, Solution, Strategy};

/// Run all strategies and return the best solution found.
///
/// Order: negative-first, greedy-local, cheapest-K, then k-means for each entry
/// of `cfg.cluster_counts`. Each candidate is scored as soon as it is produced.
/// If `min_k > inst.len()` nothing is feasible and `Solution::empty()` comes back.
pub fn solve(inst: &Instance, cfg: &SolverCfg) -> Solution {
    Driver::new(inst).run(cfg)
}

/// `solve` with `SolverCfg::default()`.
pub fn solve_with_defaults(inst: &Instance) -> Solution {
    solve(inst, &SolverCfg::default())
}

struct Driver<'a> {
    inst: &'a Instance,
    best: Solution,
    scored: usize,
}

impl<'a> Driver<'a> {
    fn new(inst: &'a Instance) -> Self {
        Self {
            inst,
            best: Solution::empty(),
            scored: 0,
        }
    }

    fn offer(&mut self, selected: &[usize], strategy: Strategy) {
        let outcome = evaluate_selection(self.inst, selected, strategy, &mut self.best);
        if outcome.is_scored() {
            self.scored += 1;
        }
        tracing::debug!(
            %strategy,
            size = selected.len(),
            ?outcome,
            best = self.best.cost,
            "candidate"
        );
    }

    fn run(mut self, cfg: &SolverCfg) -> Solution {
        let inst = self.inst;
        self.offer(&select_all_negative(inst), Strategy::NegativeFirst);
        self.offer(&fast_greedy(inst, cfg.local_window), Strategy::GreedyLocal);
        self.offer(&cheapest_k(inst), Strategy::CheapestK);
        for &k in &cfg.cluster_counts {
            let strategy = Strategy::KMeans { clusters: k };
            for cluster in kmeans_candidates(inst.buildings(), k, inst.min_k, cfg.max_iter, cfg.seed)
            {
                self.offer(&cluster, strategy);
            }
        }
        tracing::info!(
            n = inst.len(),
            k = inst.min_k,
            scored = self.scored,
            cost = self.best.cost,
            found_by = ?self.best.found_by,
            "solve"
        );
        self.best
    }
}
