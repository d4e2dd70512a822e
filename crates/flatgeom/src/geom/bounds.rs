//! Min/max extent accumulator.
//!
//! A `BoundingBox` starts inverted (min = `f64::MAX`, max = `f64::MIN`) so
//! the first `expand` snaps it to that point; it only ever grows. Lifecycle
//! is one serialization or traversal pass; the enclosing geometry envelope
//! stores the result for spatial indexing.

use super::vertex::Vertex;

/// Accumulator of minimum/maximum x and y extents over a set of points.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoundingBox {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl Default for BoundingBox {
    fn default() -> Self {
        Self {
            min_x: f64::MAX,
            min_y: f64::MAX,
            max_x: f64::MIN,
            max_y: f64::MIN,
        }
    }
}

impl BoundingBox {
    /// Grow the box to include `v`. Never shrinks.
    #[inline]
    pub fn expand(&mut self, v: Vertex) {
        self.min_x = self.min_x.min(v.x);
        self.min_y = self.min_y.min(v.y);
        self.max_x = self.max_x.max(v.x);
        self.max_y = self.max_y.max(v.y);
    }

    /// True once at least one point has been absorbed.
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.min_x <= self.max_x && self.min_y <= self.max_y
    }

    /// Closed-interval overlap test. Boxes sharing only an edge intersect.
    #[inline]
    pub fn intersects(&self, other: &BoundingBox) -> bool {
        !(self.min_x > other.max_x
            || self.max_x < other.min_x
            || self.min_y > other.max_y
            || self.max_y < other.min_y)
    }
}
