//! Curated surface for callers that need the individual building blocks
//! (tests, benches, experiments) rather than just `solve`.

// Geometry
pub use crate::geom::{
    bounding_box, bounding_corners, bounding_perimeter, selection_cost, Bounds, Building,
    Instance, Point,
};
// Strategies and scoring
pub use crate::select::{
    cheapest_k, evaluate_selection, fast_greedy, kmeans, kmeans_candidates, select_all_negative,
    solve, solve_with_defaults, KMeans, Outcome, SolverCfg, Solution, Strategy,
};
