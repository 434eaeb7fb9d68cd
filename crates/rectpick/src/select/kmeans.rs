//! Spatial candidates via Lloyd's k-means on building positions.
//!
//! Costs are ignored here: tight clusters have small bounding rectangles, which
//! is what makes them worth scoring. Initialization samples `k` building
//! positions uniformly (with replacement) from an RNG seeded with `seed`, so a
//! run is reproducible for a fixed seed and input.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::geom::{Building, Point};

/// Result of one k-means run.
#[derive(Clone, Debug)]
pub struct KMeans {
    pub centroids: Vec<Point>,
    /// Cluster index per building, each in `0..centroids.len()`.
    pub assignments: Vec<usize>,
    /// Lloyd passes performed (assignment + update).
    pub iterations: usize,
}

impl KMeans {
    /// Building ids grouped by cluster, ascending within each cluster.
    pub fn clusters(&self) -> Vec<Vec<usize>> {
        let mut out = vec![Vec::new(); self.centroids.len()];
        for (i, &c) in self.assignments.iter().enumerate() {
            out[c].push(i);
        }
        out
    }
}

/// Nearest centroid by squared distance; ties go to the lower index.
fn nearest(p: Point, centroids: &[Point]) -> usize {
    let mut best = 0;
    let mut best_d = f64::INFINITY;
    for (j, c) in centroids.iter().enumerate() {
        let d = (p - c).norm_squared();
        if d < best_d {
            best_d = d;
            best = j;
        }
    }
    best
}

fn assign(buildings: &[Building], centroids: &[Point]) -> Vec<usize> {
    buildings.iter().map(|b| nearest(b.pos, centroids)).collect()
}

/// Move each centroid to the mean of its members; empty clusters stay put.
fn update(buildings: &[Building], assignments: &[usize], centroids: &mut [Point]) {
    let mut sums = vec![Point::zeros(); centroids.len()];
    let mut counts = vec![0usize; centroids.len()];
    for (b, &c) in buildings.iter().zip(assignments) {
        sums[c] += b.pos;
        counts[c] += 1;
    }
    for ((c, s), &n) in centroids.iter_mut().zip(sums).zip(&counts) {
        if n > 0 {
            *c = s / n as f64;
        }
    }
}

/// Lloyd's algorithm with at most `max_iter` passes (at least one), stopping
/// early once no assignment changes.
///
/// With `k == 0` or no buildings there is nothing to cluster: the result has no
/// centroids and zero iterations.
pub fn kmeans(buildings: &[Building], k: usize, max_iter: usize, seed: u64) -> KMeans {
    if k == 0 || buildings.is_empty() {
        return KMeans {
            centroids: Vec::new(),
            assignments: Vec::new(),
            iterations: 0,
        };
    }
    let mut rng = StdRng::seed_from_u64(seed);
    let mut centroids: Vec<Point> = (0..k)
        .map(|_| buildings[rng.gen_range(0..buildings.len())].pos)
        .collect();

    let mut assignments = assign(buildings, &centroids);
    update(buildings, &assignments, &mut centroids);
    let mut iterations = 1;
    while iterations < max_iter {
        let next = assign(buildings, &centroids);
        iterations += 1;
        let changed = next != assignments;
        assignments = next;
        update(buildings, &assignments, &mut centroids);
        if !changed {
            break;
        }
    }
    KMeans {
        centroids,
        assignments,
        iterations,
    }
}

/// Clusters of one k-means run that are large enough to score (`len >= min_k`).
pub fn kmeans_candidates(
    buildings: &[Building],
    k: usize,
    min_k: usize,
    max_iter: usize,
    seed: u64,
) -> Vec<Vec<usize>> {
    kmeans(buildings, k, max_iter, seed)
        .clusters()
        .into_iter()
        .filter(|c| c.len() >= min_k)
        .collect()
}
