//! Result rendering: plain text for stdout and a JSON document for `--out`.

use rectpick::{Instance, SolverCfg, Solution};
use serde::Serialize;

/// Cost line followed by one `x1 y1 x2 y2` line per rectangle edge.
///
/// An infeasible result prints `inf` and no edges.
pub fn render_text(sol: &Solution) -> String {
    let mut out = format!("{:.6}\n", sol.cost);
    for (a, b) in sol.edges() {
        out.push_str(&format!("{:.6} {:.6} {:.6} {:.6}\n", a.x, a.y, b.x, b.y));
    }
    out
}

#[derive(Debug, Serialize)]
pub struct CfgReport {
    pub local_window: usize,
    pub cluster_counts: Vec<usize>,
    pub max_iter: usize,
    pub seed: u64,
}

impl From<&SolverCfg> for CfgReport {
    fn from(cfg: &SolverCfg) -> Self {
        Self {
            local_window: cfg.local_window,
            cluster_counts: cfg.cluster_counts.clone(),
            max_iter: cfg.max_iter,
            seed: cfg.seed,
        }
    }
}

/// Machine-readable result. `cost` is `null` when nothing was feasible.
#[derive(Debug, Serialize)]
pub struct Report {
    pub cost: Option<f64>,
    pub corners: Vec<[f64; 2]>,
    pub found_by: Option<String>,
    pub n: usize,
    pub k: usize,
    pub cfg: CfgReport,
}

impl Report {
    pub fn new(inst: &Instance, cfg: &SolverCfg, sol: &Solution) -> Self {
        Self {
            cost: sol.is_feasible().then_some(sol.cost),
            corners: sol.polygon().iter().map(|p| [p.x, p.y]).collect(),
            found_by: sol.found_by.map(|s| s.to_string()),
            n: inst.len(),
            k: inst.min_k,
            cfg: cfg.into(),
        }
    }
}
