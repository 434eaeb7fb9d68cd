//! Planar input model and axis-aligned bounding rectangles.
//!
//! Purpose
//! - Hold the immutable building list (`Instance`) that every selection
//!   strategy reads from.
//! - Provide the two pure rectangle queries the evaluator needs: perimeter and
//!   the four ordered corners of the bounding box of an index set.
//!
//! Conventions
//! - Points are `nalgebra::Vector2<f64>`, aliased as `Point`.
//! - Corners are reported counter-clockwise from the bottom-left:
//!   `(min_x, min_y), (max_x, min_y), (max_x, max_y), (min_x, max_y)`.
//! - Index sets are slices of building ids; order and multiplicity of ids do
//!   not affect the result.

mod types;
mod util;

pub use types::{Building, Instance, Point};
pub use util::{bounding_box, bounding_corners, bounding_perimeter, selection_cost, Bounds};

#[cfg(test)]
mod tests;
