//! Bounded, non-owning vertex-array view and its geometric queries.
//!
//! Purpose
//! - `VertexVec` is the flat representation behind every line string and
//!   polygon ring: a borrowed byte buffer holding `capacity` slots of 16
//!   bytes (two little-endian `f64`), of which `count` are populated.
//! - The view never allocates or frees. The caller's arena owns the bytes,
//!   which lets one polygon buffer be re-sliced into per-ring views without
//!   copying.
//!
//! Contracts
//! - `0 <= count <= capacity`, and the buffer holds at least
//!   `capacity * VERTEX_SIZE` bytes (checked at construction).
//! - Index and capacity violations are programming errors and fail fast via
//!   `assert!`; they are not recoverable results. Degenerate geometry
//!   (empty view, single point, zero-length segment) is valid input with
//!   defined output, never an error.
//! - Read-only queries take `&self`; concurrent readers over one buffer are
//!   fine as long as nothing mutates it. `add`/`set` take `&mut self`.

use super::bounds::BoundingBox;
use super::cursor::Cursor;
use super::vertex::{closest_point_on_segment, Side, Vertex};

/// Serialized footprint of one vertex: two little-endian `f64`.
pub const VERTEX_SIZE: usize = 16;

/// Traversal direction of a ring.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WindingOrder {
    Clockwise,
    CounterClockwise,
}

/// Result of a point-in-ring classification.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Contains {
    Inside,
    Outside,
    OnEdge,
}

/// Bounded, non-owning view over a contiguous vertex buffer.
pub struct VertexVec<'a> {
    data: &'a mut [u8],
    count: u32,
    capacity: u32,
}

impl<'a> VertexVec<'a> {
    /// Attach to a pre-sized buffer for incremental building (`count = 0`).
    /// The buffer must hold at least `capacity * VERTEX_SIZE` bytes.
    pub fn new(data: &'a mut [u8], capacity: u32) -> Self {
        assert!(
            data.len() >= capacity as usize * VERTEX_SIZE,
            "vertex buffer smaller than declared capacity"
        );
        Self {
            data,
            count: 0,
            capacity,
        }
    }

    /// Wrap an already-populated buffer (`count == capacity`).
    pub fn from_buffer(data: &'a mut [u8], count: u32) -> Self {
        assert!(
            data.len() >= count as usize * VERTEX_SIZE,
            "vertex buffer smaller than declared count"
        );
        Self {
            data,
            count,
            capacity: count,
        }
    }

    #[inline]
    pub fn count(&self) -> u32 {
        self.count
    }

    #[inline]
    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Append a vertex. Precondition: `count < capacity`.
    #[inline]
    pub fn add(&mut self, v: Vertex) {
        assert!(self.count < self.capacity, "vertex buffer capacity exceeded");
        store(self.data, self.count as usize, v);
        self.count += 1;
    }

    /// Overwrite the vertex at `index`. Precondition: `index < count`.
    #[inline]
    pub fn set(&mut self, index: u32, v: Vertex) {
        assert!(index < self.count, "vertex index out of bounds");
        store(self.data, index as usize, v);
    }

    /// Read the vertex at `index`. Precondition: `index < count`.
    #[inline]
    pub fn get(&self, index: u32) -> Vertex {
        assert!(index < self.count, "vertex index out of bounds");
        let off = index as usize * VERTEX_SIZE;
        let mut raw = [0u8; 8];
        raw.copy_from_slice(&self.data[off..off + 8]);
        let x = f64::from_le_bytes(raw);
        raw.copy_from_slice(&self.data[off + 8..off + VERTEX_SIZE]);
        let y = f64::from_le_bytes(raw);
        Vertex::new(x, y)
    }

    /// Exact byte length `serialize` will write: `count * VERTEX_SIZE`.
    #[inline]
    pub fn serialized_size(&self) -> u32 {
        self.count * VERTEX_SIZE as u32
    }

    /// True if the first and last vertices coincide (approximately).
    /// A single point counts as closed.
    pub fn is_closed(&self) -> bool {
        if self.count == 0 {
            return false;
        }
        if self.count == 1 {
            return true;
        }
        self.get(0).approx_eq(self.get(self.count - 1))
    }

    /// Write the vertex data verbatim (little-endian `f64` pairs, order
    /// preserved) and advance the cursor by `serialized_size` bytes.
    pub fn serialize(&self, cursor: &mut Cursor) {
        cursor.write_bytes(&self.data[..self.count as usize * VERTEX_SIZE]);
    }

    /// Identical byte copy, fused with bounding-box accumulation in a single
    /// pass. Callers that need both serialized bytes and extents (the common
    /// case for spatial indexing) pay for one buffer traversal, not two.
    pub fn serialize_and_update_bounds(&self, cursor: &mut Cursor, bbox: &mut BoundingBox) {
        for i in 0..self.count {
            let p = self.get(i);
            bbox.expand(p);
            cursor.write_f64(p.x);
            cursor.write_f64(p.y);
        }
    }

    /// Sum of segment lengths along the open path. Zero for `count <= 1`.
    /// No closing edge is added even if the path is not closed.
    pub fn length(&self) -> f64 {
        if self.count < 2 {
            return 0.0;
        }
        let mut length = 0.0;
        for i in 0..self.count - 1 {
            length += self.get(i).distance(self.get(i + 1));
        }
        length
    }

    /// Shoelace area of the ring, implicitly closed: the successor of the
    /// last vertex is the first vertex whether or not the ring stores the
    /// closing vertex. Positive for counter-clockwise traversal (y up).
    ///
    /// The x coordinates are normalized against the first vertex to keep the
    /// partial sums small; the y terms are already consecutive differences.
    pub fn signed_area(&self) -> f64 {
        if self.count < 3 {
            return 0.0;
        }
        let x0 = self.get(0).x;
        let mut area = 0.0;
        for i in 1..self.count {
            let next = if i + 1 == self.count { 0 } else { i + 1 };
            let xi = self.get(i).x;
            let y_next = self.get(next).y;
            let y_prev = self.get(i - 1).y;
            area += (xi - x0) * (y_next - y_prev);
        }
        area * 0.5
    }

    /// `abs(signed_area)`.
    #[inline]
    pub fn area(&self) -> f64 {
        self.signed_area().abs()
    }

    /// Winding from the sign of the shoelace sum: negative is clockwise.
    #[inline]
    pub fn winding_order(&self) -> WindingOrder {
        if self.signed_area() < 0.0 {
            WindingOrder::Clockwise
        } else {
            WindingOrder::CounterClockwise
        }
    }

    #[inline]
    pub fn is_clockwise(&self) -> bool {
        self.winding_order() == WindingOrder::Clockwise
    }

    #[inline]
    pub fn is_counter_clockwise(&self) -> bool {
        self.winding_order() == WindingOrder::CounterClockwise
    }

    /// Even-odd point-in-ring test with an `OnEdge` short-circuit.
    ///
    /// With `ensure_closed` the implicit closing edge from the last vertex
    /// back to the first is traversed even when it is not stored; without it
    /// only the stored edges are used and the caller is responsible for
    /// passing an already-closed ring. The ray is cast in +x; edges are
    /// classified by the exact sign of the side predicate.
    pub fn contains_vertex(&self, p: Vertex, ensure_closed: bool) -> Contains {
        if self.count == 0 {
            return Contains::Outside;
        }
        let edges = if ensure_closed { self.count } else { self.count - 1 };
        let mut crossings = 0u32;
        for i in 0..edges {
            let p1 = self.get(i);
            let p2 = self.get(if i + 1 == self.count { 0 } else { i + 1 });
            if p1.approx_eq(p2) {
                continue;
            }
            if p.y > p1.y.max(p2.y) || p.y < p1.y.min(p2.y) {
                continue;
            }
            let side = p.side_of_line(p1, p2);
            if side == Side::On && p.is_on_segment(p1, p2) {
                return Contains::OnEdge;
            }
            // Half-open vertical ranges so a crossing through a shared
            // vertex is counted exactly once.
            if (side == Side::Left && p1.y < p.y && p.y <= p2.y)
                || (side == Side::Right && p2.y <= p.y && p.y < p1.y)
            {
                crossings += 1;
            }
        }
        if crossings % 2 == 1 {
            Contains::Inside
        } else {
            Contains::Outside
        }
    }

    /// True if no two segments intersect except adjacent ones at their
    /// shared endpoint. Quadratic in the segment count; per-row geometries
    /// are expected to be small.
    pub fn is_simple(&self) -> bool {
        if self.count < 3 {
            return true;
        }
        let nseg = self.count - 1;
        for i in 0..nseg {
            let a1 = self.get(i);
            let a2 = self.get(i + 1);
            if a1.approx_eq(a2) {
                continue;
            }
            for j in i + 1..nseg {
                let b1 = self.get(j);
                let b2 = self.get(j + 1);
                if b1.approx_eq(b2) {
                    continue;
                }
                // Adjacency is decided by shared endpoints, not segment
                // indices: skipped zero-length segments may sit between two
                // segments that still meet end to start.
                if a2.approx_eq(b1) {
                    // Consecutive segments; the only illegal contact is a
                    // collinear spike back over the other edge.
                    if spike(a1, a2, b2) {
                        return false;
                    }
                } else if b2.approx_eq(a1) {
                    // Last and first segment of a closed ring meet at the
                    // ring's start vertex.
                    if spike(b1, a1, a2) {
                        return false;
                    }
                } else if segments_intersect(a1, a2, b1, b2) {
                    return false;
                }
            }
        }
        true
    }

    /// Index and distance of the segment closest to `p`; lowest index wins
    /// an exact tie. `None` when the view holds no segment.
    pub fn closest_segment(&self, p: Vertex) -> Option<(u32, f64)> {
        if self.count < 2 {
            return None;
        }
        let mut min_distance = f64::MAX;
        let mut min_index = 0;
        let mut p1 = self.get(0);
        for i in 1..self.count {
            let p2 = self.get(i);
            let distance = p.distance_squared_to_segment(p1, p2);
            if distance < min_distance {
                min_distance = distance;
                min_index = i - 1;
                if min_distance == 0.0 {
                    // p lies on this segment; nothing closer exists.
                    return Some((min_index, 0.0));
                }
            }
            p1 = p2;
        }
        Some((min_index, min_distance.sqrt()))
    }

    /// Index and distance of the stored vertex closest to `p`; lowest index
    /// wins an exact tie. `None` for an empty view.
    pub fn closest_vertex(&self, p: Vertex) -> Option<(u32, f64)> {
        if self.count == 0 {
            return None;
        }
        let mut min_distance = f64::MAX;
        let mut min_index = 0;
        for i in 0..self.count {
            let distance = p.distance_squared(self.get(i));
            if distance < min_distance {
                min_distance = distance;
                min_index = i;
                if min_distance == 0.0 {
                    return Some((min_index, 0.0));
                }
            }
        }
        Some((min_index, min_distance.sqrt()))
    }

    /// Globally closest point anywhere along the path (not just at stored
    /// vertices). Returns `(closest_point, fraction_along_path, distance)`
    /// where the fraction is arc length up to the projection divided by the
    /// total length, 0 when the total length is zero. `None` for an empty
    /// view.
    pub fn locate_vertex(&self, p: Vertex) -> Option<(Vertex, f64, f64)> {
        if self.count == 0 {
            return None;
        }
        if self.count == 1 {
            let v = self.get(0);
            return Some((v, 0.0, p.distance(v)));
        }

        let mut min_distance = f64::MAX;
        let mut min_index = 0;
        let mut p1 = self.get(0);
        for i in 1..self.count {
            let p2 = self.get(i);
            let distance = p.distance_squared_to_segment(p1, p2);
            if distance < min_distance {
                min_distance = distance;
                min_index = i - 1;
                if min_distance == 0.0 {
                    break;
                }
            }
            p1 = p2;
        }

        let s1 = self.get(min_index);
        let s2 = self.get(min_index + 1);
        let closest = closest_point_on_segment(p, s1, s2);
        let distance = min_distance.sqrt();

        let total_length = self.length();
        if total_length == 0.0 {
            return Some((closest, 0.0, distance));
        }
        let mut arc = 0.0;
        for i in 0..min_index {
            arc += self.get(i).distance(self.get(i + 1));
        }
        arc += s1.distance(closest);
        Some((closest, arc / total_length, distance))
    }
}

#[inline]
fn store(data: &mut [u8], slot: usize, v: Vertex) {
    let off = slot * VERTEX_SIZE;
    data[off..off + 8].copy_from_slice(&v.x.to_le_bytes());
    data[off + 8..off + VERTEX_SIZE].copy_from_slice(&v.y.to_le_bytes());
}

/// Two edges meeting at `joint` fold back over each other: the far endpoint
/// of one lies on the other edge.
fn spike(prev: Vertex, joint: Vertex, next: Vertex) -> bool {
    next.is_on_segment(prev, joint) || prev.is_on_segment(joint, next)
}

/// Segment intersection via orientation predicates: a proper crossing has
/// each segment's endpoints strictly on opposite sides of the other; the
/// collinear and touching cases reduce to point-on-segment checks.
fn segments_intersect(p1: Vertex, p2: Vertex, q1: Vertex, q2: Vertex) -> bool {
    let d1 = q1.side_of_line(p1, p2);
    let d2 = q2.side_of_line(p1, p2);
    let d3 = p1.side_of_line(q1, q2);
    let d4 = p2.side_of_line(q1, q2);
    if d1 != d2
        && d3 != d4
        && d1 != Side::On
        && d2 != Side::On
        && d3 != Side::On
        && d4 != Side::On
    {
        return true;
    }
    (d1 == Side::On && q1.is_on_segment(p1, p2))
        || (d2 == Side::On && q2.is_on_segment(p1, p2))
        || (d3 == Side::On && p1.is_on_segment(q1, q2))
        || (d4 == Side::On && p2.is_on_segment(q1, q2))
}
