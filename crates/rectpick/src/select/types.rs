//! Configuration, running best solution, and strategy tags.

use std::fmt;

use crate::geom::Point;

/// Tunable constants of the heuristic.
#[derive(Clone, Debug, PartialEq)]
pub struct SolverCfg {
    /// How many buildings past the cheapest K the greedy step may try to add.
    pub local_window: usize,
    /// Cluster counts tried by the k-means strategy, in order.
    pub cluster_counts: Vec<usize>,
    /// Lloyd iteration cap per k-means run.
    pub max_iter: usize,
    /// Seed for centroid initialization. Each k-means run reseeds from it.
    pub seed: u64,
}

impl Default for SolverCfg {
    fn default() -> Self {
        Self {
            local_window: 10,
            cluster_counts: vec![3, 5, 10],
            max_iter: 100,
            seed: 42,
        }
    }
}

/// Which generator proposed a candidate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Strategy {
    NegativeFirst,
    GreedyLocal,
    CheapestK,
    KMeans { clusters: usize },
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NegativeFirst => write!(f, "negative-first"),
            Self::GreedyLocal => write!(f, "greedy-local"),
            Self::CheapestK => write!(f, "cheapest-k"),
            Self::KMeans { clusters } => write!(f, "kmeans-{clusters}"),
        }
    }
}

/// What the evaluator did with one candidate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Fewer than `min_k` buildings; not scored.
    Skipped,
    /// Scored, but not strictly better than the current best.
    Scored,
    /// Scored and now the best.
    Improved,
}

impl Outcome {
    #[inline]
    pub fn is_scored(self) -> bool {
        !matches!(self, Self::Skipped)
    }
    #[inline]
    pub fn improved(self) -> bool {
        matches!(self, Self::Improved)
    }
}

/// Best selection found so far.
///
/// Starts at `+inf` with no rectangle; `cost` only ever decreases.
#[derive(Clone, Debug, PartialEq)]
pub struct Solution {
    pub cost: f64,
    pub corners: Option<[Point; 4]>,
    pub found_by: Option<Strategy>,
}

impl Default for Solution {
    fn default() -> Self {
        Self::empty()
    }
}

impl Solution {
    /// The "no feasible candidate" state.
    pub fn empty() -> Self {
        Self {
            cost: f64::INFINITY,
            corners: None,
            found_by: None,
        }
    }

    #[inline]
    pub fn is_feasible(&self) -> bool {
        self.cost.is_finite()
    }

    /// Corner list: empty, or four points CCW from the bottom-left.
    #[inline]
    pub fn polygon(&self) -> &[Point] {
        match &self.corners {
            Some(c) => c,
            None => &[],
        }
    }

    /// Closed boundary as `(from, to)` pairs: corner i to corner (i+1) mod n.
    pub fn edges(&self) -> Vec<(Point, Point)> {
        let poly = self.polygon();
        let n = poly.len();
        (0..n).map(|i| (poly[i], poly[(i + 1) % n])).collect()
    }
}
