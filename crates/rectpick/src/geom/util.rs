use super::types::{Building, Point};

/// Axis-aligned bounds `[min, max]` of a point set.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub min: Point,
    pub max: Point,
}

impl Bounds {
    #[inline]
    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }
    #[inline]
    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }
    #[inline]
    pub fn perimeter(&self) -> f64 {
        2.0 * (self.width() + self.height())
    }
    /// Corners CCW from bottom-left.
    #[inline]
    pub fn corners(&self) -> [Point; 4] {
        [
            Point::new(self.min.x, self.min.y),
            Point::new(self.max.x, self.min.y),
            Point::new(self.max.x, self.max.y),
            Point::new(self.min.x, self.max.y),
        ]
    }
}

/// Bounding box of the buildings named by `indices`; `None` for an empty set.
pub fn bounding_box(buildings: &[Building], indices: &[usize]) -> Option<Bounds> {
    let (&first, rest) = indices.split_first()?;
    let p0 = buildings[first].pos;
    let mut b = Bounds { min: p0, max: p0 };
    for &i in rest {
        let p = buildings[i].pos;
        b.min.x = b.min.x.min(p.x);
        b.min.y = b.min.y.min(p.y);
        b.max.x = b.max.x.max(p.x);
        b.max.y = b.max.y.max(p.y);
    }
    Some(b)
}

/// `2·(width + height)` of the bounding rectangle; 0 for an empty set.
#[inline]
pub fn bounding_perimeter(buildings: &[Building], indices: &[usize]) -> f64 {
    bounding_box(buildings, indices).map_or(0.0, |b| b.perimeter())
}

/// Rectangle corners CCW from the bottom-left; `None` for an empty set.
#[inline]
pub fn bounding_corners(buildings: &[Building], indices: &[usize]) -> Option<[Point; 4]> {
    bounding_box(buildings, indices).map(|b| b.corners())
}

/// Objective of a selection: rectangle perimeter plus the summed building costs.
pub fn selection_cost(buildings: &[Building], indices: &[usize]) -> f64 {
    let costs: f64 = indices.iter().map(|&i| buildings[i].cost).sum();
    bounding_perimeter(buildings, indices) + costs
}
