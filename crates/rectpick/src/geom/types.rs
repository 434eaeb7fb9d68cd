//! Buildings and problem instances.
//!
//! - `Building`: position, signed cost, and its id (position in the input).
//! - `Instance`: the full building list plus the minimum selection size `min_k`.

use nalgebra::Vector2;

/// Planar point; also used for rectangle corners and k-means centroids.
pub type Point = Vector2<f64>;

/// One input building. Never mutated after the instance is built.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Building {
    pub pos: Point,
    pub cost: f64,
    pub id: usize,
}

impl Building {
    #[inline]
    pub fn new(id: usize, x: f64, y: f64, cost: f64) -> Self {
        Self {
            pos: Vector2::new(x, y),
            cost,
            id,
        }
    }
}

/// Problem instance: buildings in input order and the minimum subset size K.
///
/// No validation happens here. `min_k > len()` is legal and simply makes every
/// candidate infeasible.
#[derive(Clone, Debug, Default)]
pub struct Instance {
    buildings: Vec<Building>,
    pub min_k: usize,
}

impl Instance {
    /// Build from `(x, y, cost)` triples; ids follow the input order.
    pub fn from_triples<I>(triples: I, min_k: usize) -> Self
    where
        I: IntoIterator<Item = (f64, f64, f64)>,
    {
        let buildings = triples
            .into_iter()
            .enumerate()
            .map(|(id, (x, y, cost))| Building::new(id, x, y, cost))
            .collect();
        Self { buildings, min_k }
    }

    #[inline]
    pub fn buildings(&self) -> &[Building] {
        &self.buildings
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.buildings.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.buildings.is_empty()
    }

    /// Building ids sorted ascending by cost. Stable, so equal costs keep input order.
    pub fn ids_by_cost(&self) -> Vec<usize> {
        let mut ids: Vec<usize> = (0..self.buildings.len()).collect();
        ids.sort_by(|&a, &b| {
            self.buildings[a]
                .cost
                .partial_cmp(&self.buildings[b].cost)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        ids
    }
}
