//! 2D point primitive and its side/segment predicates.
//!
//! - `Vertex`: plain `(x, y)` pair of `f64`, 16 bytes, the unit every flat
//!   buffer in this crate is measured in.
//! - `Side`: classification of a point against a directed line.
//! - `closest_point_on_segment`: clamped projection, shared by all
//!   point-to-segment distance queries.
//!
//! Tolerance policy
//! - Approximate point equality uses `EPSILON = 1e-10` per axis.
//! - `side_of_line` uses an exact-zero test, no epsilon. The mismatch is
//!   intentional: `contains_vertex` and `is_simple` classify edges by the
//!   exact sign of the cross product, and widening it would reclassify
//!   near-collinear input. Do not unify the two without revisiting both.

use nalgebra::Vector2;

/// Per-axis tolerance for approximate point equality.
pub const EPSILON: f64 = 1e-10;

/// Orientation of a point relative to a directed line `p1 -> p2`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
    On,
}

/// A 2D point: two `f64` coordinates, no padding.
///
/// `PartialEq` is derived and therefore bit-exact; geometric code that wants
/// the tolerant comparison must call `approx_eq` explicitly.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vertex {
    pub x: f64,
    pub y: f64,
}

impl Vertex {
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Approximate equality: both coordinates within `EPSILON`.
    #[inline]
    pub fn approx_eq(&self, other: Vertex) -> bool {
        (self.x - other.x).abs() < EPSILON && (self.y - other.y).abs() < EPSILON
    }

    /// Euclidean distance to another point.
    #[inline]
    pub fn distance(&self, other: Vertex) -> f64 {
        self.distance_squared(other).sqrt()
    }

    /// Squared Euclidean distance to another point.
    #[inline]
    pub fn distance_squared(&self, other: Vertex) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }

    /// Distance to the line segment `p1 -> p2`.
    #[inline]
    pub fn distance_to_segment(&self, p1: Vertex, p2: Vertex) -> f64 {
        self.distance_squared_to_segment(p1, p2).sqrt()
    }

    /// Squared distance to the line segment `p1 -> p2`.
    #[inline]
    pub fn distance_squared_to_segment(&self, p1: Vertex, p2: Vertex) -> f64 {
        self.distance_squared(closest_point_on_segment(*self, p1, p2))
    }

    /// Which side of the directed line `p1 -> p2` this point lies on.
    ///
    /// The cross product is compared against exactly `0.0`; see the module
    /// docs for why no epsilon is applied here.
    #[inline]
    pub fn side_of_line(&self, p1: Vertex, p2: Vertex) -> Side {
        let side = (self.x - p1.x) * (p2.y - p1.y) - (p2.x - p1.x) * (self.y - p1.y);
        if side == 0.0 {
            Side::On
        } else if side < 0.0 {
            Side::Left
        } else {
            Side::Right
        }
    }

    /// True if this point lies on the closed segment `p1 -> p2`: collinear
    /// with the segment's line and inside both coordinate ranges.
    pub fn is_on_segment(&self, p1: Vertex, p2: Vertex) -> bool {
        if self.side_of_line(p1, p2) != Side::On {
            return false;
        }
        let (x_min, x_max) = if p1.x <= p2.x { (p1.x, p2.x) } else { (p2.x, p1.x) };
        let (y_min, y_max) = if p1.y <= p2.y { (p1.y, p2.y) } else { (p2.y, p1.y) };
        x_min <= self.x && self.x <= x_max && y_min <= self.y && self.y <= y_max
    }
}

impl From<Vertex> for Vector2<f64> {
    #[inline]
    fn from(v: Vertex) -> Self {
        Vector2::new(v.x, v.y)
    }
}

impl From<Vector2<f64>> for Vertex {
    #[inline]
    fn from(v: Vector2<f64>) -> Self {
        Vertex::new(v.x, v.y)
    }
}

/// Closest point to `p` on the segment `p1 -> p2` (projection clamped to the
/// endpoints). A zero-length segment returns `p1` without dividing by zero.
pub fn closest_point_on_segment(p: Vertex, p1: Vertex, p2: Vertex) -> Vertex {
    if p1.approx_eq(p2) {
        return p1;
    }
    let ap = Vector2::from(p) - Vector2::from(p1);
    let ab = Vector2::from(p2) - Vector2::from(p1);
    let r = ap.dot(&ab) / ab.norm_squared();
    if r <= 0.0 {
        return p1;
    }
    if r >= 1.0 {
        return p2;
    }
    Vertex::new(p1.x + r * ab.x, p1.y + r * ab.y)
}
