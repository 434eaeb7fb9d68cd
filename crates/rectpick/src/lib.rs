//! Minimum-perimeter building selection.
//!
//! Pick at least K buildings minimizing the perimeter of their axis-aligned
//! bounding rectangle plus their summed (signed) costs. The search is heuristic:
//! several candidate generators run and the cheapest feasible candidate wins.
//!
//! API Policy
//! - Loading instances and printing results live in the CLI crate; this crate
//!   performs no I/O and has no error type. Infeasibility (K > N) is reported
//!   as `Solution::empty()` (cost `+inf`, no rectangle).

pub mod api;
pub mod geom;
pub mod select;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use geom::{Building, Instance, Point};
pub use select::{solve, solve_with_defaults, SolverCfg, Solution, Strategy};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::geom::{bounding_corners, bounding_perimeter, Building, Instance, Point};
    pub use crate::select::{solve, solve_with_defaults, SolverCfg, Solution, Strategy};
}
