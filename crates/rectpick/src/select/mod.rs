//! Heuristic subset selection: candidate generators, evaluator, and driver.
//!
//! Purpose
//! - Choose at least `min_k` buildings minimizing bounding-rectangle perimeter
//!   plus summed cost. Exhaustive search is out of reach, so several cheap
//!   strategies each propose candidates and the best scoring one is kept.
//!
//! Model
//! - Generators are pure functions of the instance (and `SolverCfg`) returning
//!   fresh index vectors.
//! - `evaluate_selection` is the only place the running `Solution` changes. It
//!   skips candidates smaller than `min_k` and accepts strict improvements only,
//!   so among equal costs the earliest strategy wins.
//! - `solve` runs the strategies in a fixed order: negative-first, greedy with
//!   local improvement, cheapest-K, then k-means clusters per configured count.
//!
//! Layout
//! - `types.rs` (config, solution, strategy tags), `eval.rs` (scoring),
//!   `generators.rs` (cost-driven strategies), `kmeans.rs` (spatial strategy),
//!   `driver.rs` (orchestration).

mod driver;
mod eval;
mod generators;
mod kmeans;
mod types;

pub use driver::{solve, solve_with_defaults};
pub use eval::evaluate_selection;
pub use generators::{cheapest_k, fast_greedy, select_all_negative};
pub use kmeans::{kmeans, kmeans_candidates, KMeans};
pub use types::{Outcome, SolverCfg, Solution, Strategy};
